//! Framed and decorated bodies: `\fbox`, `\colorbox`, `\fcolorbox` and
//! `\enclose`
//!
//! The body is padded by `fboxsep` plus the thickness of the borders drawn on
//! each side. The decorations are spans covering the padded area, stacked
//! with the body in one vlist; a renderer paints them from their classes and
//! style.

use crate::atom::{Atom, Notation};
use crate::build_common::{VListElemAndShift, VListParam, make_span, make_typed_span, make_v_list};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::span::{Span, SpanType};
use crate::types::{LayoutError, StyleProperty};
use crate::units::{Measurement, calculate_size};

/// Padding on each side of the body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Padding {
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
}

impl Padding {
    const fn uniform(pad: f64) -> Self {
        Self {
            top: pad,
            bottom: pad,
            left: pad,
            right: pad,
        }
    }
}

/// A decoration covering `inner` and its padding.
fn cover(class: &str, inner: &Span, padding: Padding, ctx: &Context<'_>) -> Span {
    let height = inner.height + inner.depth + padding.top + padding.bottom;
    let mut span = make_span(vec!["stretchy".to_owned(), class.to_owned()], vec![], Some(ctx));
    span.style.insert(StyleProperty::Height, height);
    span.height = height;
    span.width = inner.width + padding.left + padding.right;
    span
}

/// Stack the body and its decorations; decorations painted underneath come
/// first.
fn stack(
    inner: Span,
    padding: Padding,
    under: Vec<Span>,
    over: Vec<Span>,
    ctx: &Context<'_>,
) -> Span {
    let shift = inner.depth + padding.bottom;
    let decoration = |elem| VListElemAndShift::builder().elem(elem).shift(shift).build();

    let mut children: Vec<_> = under.into_iter().map(decoration).collect();
    children.push(
        VListElemAndShift::builder()
            .elem(inner)
            .shift(0.0)
            .margin_left(padding.left)
            .margin_right(padding.right)
            .build(),
    );
    children.extend(over.into_iter().map(decoration));
    make_v_list(VListParam::IndividualShift { children }, ctx)
}

/// `\fbox`, `\colorbox` and `\fcolorbox`.
pub fn build_box(
    body: &[Atom],
    background: Option<&str>,
    border_color: Option<&str>,
    framed: bool,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let mut inner = decompose_group(ctx, ctx, body)?;
    inner.classes.push("boxpad".to_owned());

    let framed = framed || border_color.is_some();
    let metrics = ctx.metrics();
    let rule = if framed {
        metrics.fboxrule.max(ctx.min_rule_thickness)
    } else {
        0.0
    };
    let padding = Padding::uniform(metrics.fboxsep + rule);

    let label = match (background.is_some(), framed) {
        (true, true) => "fcolorbox",
        (true, false) => "colorbox",
        (false, _) => "fbox",
    };
    let mut frame = cover(label, &inner, padding, ctx);
    if framed {
        frame.style.insert(StyleProperty::BorderStyle, "solid");
        frame.style.insert(StyleProperty::BorderWidth, rule);
        if let Some(color) = border_color.map(str::to_owned).or_else(|| ctx.get_color()) {
            frame.style.insert(StyleProperty::BorderColor, color);
        }
    }

    let vlist = if let Some(background) = background {
        frame.style.insert(StyleProperty::BackgroundColor, background);
        stack(inner, padding, vec![frame], vec![], ctx)
    } else {
        stack(inner, padding, vec![], vec![frame], ctx)
    };
    Ok(make_typed_span(SpanType::Mord, vec![label.to_owned()], vec![vlist], ctx))
}

/// `\enclose` and the cancel family.
pub fn build(
    body: &[Atom],
    notations: &[Notation],
    stroke_color: Option<&str>,
    padding: Option<&Measurement>,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let inner = decompose_group(ctx, ctx, body)?;
    let metrics = ctx.metrics();
    let rule = metrics.fboxrule.max(ctx.min_rule_thickness);

    let pad = match padding {
        Some(padding) => calculate_size(padding, ctx),
        None if notations.iter().any(|notation| notation.is_border()) => metrics.fboxsep,
        None => 0.0,
    };
    let has = |notation| notations.contains(&notation);
    let all_sides = has(Notation::Box) || has(Notation::RoundedBox) || has(Notation::Circle);
    let border = |side| if all_sides || has(side) { rule } else { 0.0 };
    let sides = Padding {
        top: pad + border(Notation::Top),
        bottom: pad + border(Notation::Bottom),
        left: pad + border(Notation::Left),
        right: pad + border(Notation::Right),
    };

    let stroke = stroke_color.map(str::to_owned).or_else(|| ctx.get_color());
    let decorations = notations
        .iter()
        .map(|notation| {
            let mut span = cover(notation.as_ref(), &inner, sides, ctx);
            if notation.is_border() {
                span.style.insert(StyleProperty::BorderStyle, "solid");
                span.style.insert(StyleProperty::BorderWidth, rule);
            } else {
                // strikes are drawn with the rule thickness
                span.style.insert(StyleProperty::BorderBottomWidth, rule);
            }
            if let Some(stroke) = &stroke {
                span.style.insert(StyleProperty::BorderColor, stroke.as_str());
            }
            span
        })
        .collect();

    let vlist = stack(inner, sides, vec![], decorations, ctx);
    Ok(make_typed_span(SpanType::Mord, vec!["enclose".to_owned()], vec![vlist], ctx))
}
