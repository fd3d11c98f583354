//! Atom dispatch and horizontal lists
//!
//! [`decompose`] turns one atom into one span by an exhaustive `match` on its
//! kind. [`build_expression`] turns a list of sibling atoms into a list of
//! spans: it flattens partial groups (color, style and size changes), turns
//! binary operators with no sensible operands into ordinary atoms and then
//! inserts the inter-atom glue.
//!
//! See TeXbook pg. 442-446, Rules 5 and 6, and the text before Rule 19.

use crate::atom::{Atom, AtomKind};
use crate::build_common::{make_glue, make_span, make_typed_span};
use crate::context::Context;
use crate::environment::array;
use crate::functions::{
    accent, color, delimsizing, enclose, genfrac, kern, lap, mclass, op, ordgroup, overline,
    phantom, rule, sizing, sqrt, styling, supsub, symbol,
};
use crate::spacing_data::{BIN_LEFT_CANCELLER, BIN_RIGHT_CANCELLER, spacing_between};
use crate::span::{Span, SpanType};
use crate::types::{LayoutError, StyleProperty};

/// Whether an atom list forms a group of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    /// Partial group (e.g. created by `\color`): the parent list handles
    /// spacing and retyping across its boundary
    Partial,
    /// Real group: nothing is added on either side, full spacing rules apply
    Real,
}

impl GroupType {
    /// Whether spacing is applied to this list.
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real)
    }
}

/// Classes of the (virtual) neighbours of a list, used by `\left..\right`
/// whose body sits between an opening and a closing fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Surrounding {
    /// Class of the box before the list, `None` for the start of the list
    pub left: Option<SpanType>,
    /// Class of the box after the list, `None` for the end of the list
    pub right: Option<SpanType>,
}

/// Decompose a list of sibling atoms into a horizontal list of spans.
pub fn build_expression(
    atoms: &[Atom],
    ctx: &Context<'_>,
    group_type: GroupType,
    surrounding: Surrounding,
) -> Result<Vec<Span>, LayoutError> {
    let mut groups = Vec::with_capacity(atoms.len());
    for atom in atoms {
        if let Some(fragment) = build_fragment(atom, ctx)? {
            groups.extend(fragment);
        } else {
            groups.push(decompose(ctx, atom)?);
        }
    }

    // If `atoms` is a partial group, let the parent handle spacings
    // to avoid processing groups multiple times.
    if !group_type.is_real() {
        return Ok(groups);
    }

    // A list made of a single style or size change measures its glue in the
    // new style.
    let glue_ctx = match atoms {
        [only] if !only.has_scripts() => match &only.kind {
            AtomKind::Styling { style, .. } => ctx.having_style(style.mathstyle()),
            AtomKind::Sizing { size, .. } => ctx.having_size(*size),
            _ => ctx.clone(),
        },
        _ => ctx.clone(),
    };

    retype_bins(&mut groups, surrounding);
    Ok(insert_spacing(groups, &glue_ctx, surrounding))
}

/// Decompose a single atom, attaching its scripts.
pub fn decompose(ctx: &Context<'_>, atom: &Atom) -> Result<Span, LayoutError> {
    let ctx = enter(atom, ctx)?;
    let mut span = build_atom(atom, &ctx)?;
    if let Some(background) = &atom.style.background_color {
        span.style
            .insert(StyleProperty::BackgroundColor, background.as_str());
    }
    Ok(span)
}

/// Decompose `atoms` in `child` as one ordinary group, expressed in the ems
/// of `parent`. Fraction parts, scripts, radicands and the like are built
/// this way.
pub fn decompose_group(
    child: &Context<'_>,
    parent: &Context<'_>,
    atoms: &[Atom],
) -> Result<Span, LayoutError> {
    let spans = build_expression(atoms, child, GroupType::Real, Surrounding::default())?;
    let mut group = make_typed_span(SpanType::Mord, vec![], spans, child);
    if child.size != parent.size {
        group.classes.extend(child.sizing_classes(parent));
        group.rescale(child.size_multiplier / parent.size_multiplier);
    }
    Ok(group)
}

/// Tag and rescale spans built in `child` for placement in `parent`.
///
/// A span that already switches size gets its reset class retargeted, so a
/// nested `\Huge a \small b` resets straight to the outer size.
pub fn rescale_into(spans: &mut [Span], child: &Context<'_>, parent: &Context<'_>) {
    if child.size == parent.size {
        return;
    }
    let multiplier = child.size_multiplier / parent.size_multiplier;
    let nested_reset = format!("reset-size{}", child.size);
    for span in spans {
        if let Some(pos) = span.classes.iter().position(|cls| cls == "sizing") {
            if span.classes.get(pos + 1) == Some(&nested_reset) {
                span.classes[pos + 1] = format!("reset-size{}", parent.size);
            }
        } else {
            span.classes.extend(child.sizing_classes(parent));
        }
        span.rescale(multiplier);
    }
}

/// One level deeper, with the atom's own overrides applied.
fn enter<'a>(atom: &Atom, ctx: &Context<'a>) -> Result<Context<'a>, LayoutError> {
    let mut ctx = ctx.descend()?;
    if let Some(color) = &atom.style.color {
        ctx = ctx.with_color(color.as_str());
    }
    if let Some(background) = &atom.style.background_color {
        ctx = ctx.with_background(background.as_str());
    }
    if let Some(font_family) = atom.style.font_family {
        ctx = ctx.with_font(font_family);
    }
    Ok(ctx)
}

/// Partial groups contribute their spans directly to the enclosing list.
/// Returns `None` for every other atom.
fn build_fragment(atom: &Atom, ctx: &Context<'_>) -> Result<Option<Vec<Span>>, LayoutError> {
    if atom.has_scripts() {
        return Ok(None);
    }
    let fragment = match &atom.kind {
        AtomKind::Color { color, body } => color::build(color, body, &enter(atom, ctx)?)?,
        AtomKind::Styling { style, body } => styling::build(*style, body, &enter(atom, ctx)?)?,
        AtomKind::Sizing { size, body } => sizing::build(*size, body, &enter(atom, ctx)?)?,
        _ => return Ok(None),
    };
    Ok(Some(fragment))
}

fn build_atom(atom: &Atom, ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let nucleus = match &atom.kind {
        // operators place their own limits
        AtomKind::Op { body, limits } => return op::build(atom, body, *limits, ctx),
        AtomKind::Ord { text } => symbol::build(text, SpanType::Mord, atom.mode, ctx),
        AtomKind::Bin { text } => symbol::build(text, SpanType::Mbin, atom.mode, ctx),
        AtomKind::Rel { text } => symbol::build(text, SpanType::Mrel, atom.mode, ctx),
        AtomKind::Open { text } => symbol::build(text, SpanType::Mopen, atom.mode, ctx),
        AtomKind::Close { text } => symbol::build(text, SpanType::Mclose, atom.mode, ctx),
        AtomKind::Punct { text } => symbol::build(text, SpanType::Mpunct, atom.mode, ctx),
        AtomKind::Inner { body } => mclass::build_inner(body, ctx)?,
        AtomKind::Group { body } => ordgroup::build(body, ctx)?,
        AtomKind::Genfrac(frac) => genfrac::build(frac, atom.mode, ctx)?,
        AtomKind::Surd { body, index } => sqrt::build(body, index.as_deref(), atom.mode, ctx)?,
        AtomKind::LeftRight { body, left, right } => {
            delimsizing::build_left_right(body, left.as_deref(), right.as_deref(), atom.mode, ctx)?
        }
        AtomKind::Middle { delim } => delimsizing::build_middle(delim, atom.mode, ctx)?,
        AtomKind::SizedDelim { delim, size, class } => {
            delimsizing::build(delim, *size, *class, atom.mode, ctx)?
        }
        AtomKind::Accent { accent, body } => accent::build(accent, body, atom.mode, ctx)?,
        AtomKind::Line { position, body } => overline::build(*position, body, ctx)?,
        AtomKind::OverUnder {
            body,
            above,
            below,
            class,
        } => mclass::build_over_under(body, above.as_deref(), below.as_deref(), *class, ctx)?,
        AtomKind::Array(array) => array::build(array, atom.mode, ctx)?,
        AtomKind::Box {
            body,
            background,
            border_color,
            framed,
        } => enclose::build_box(
            body,
            background.as_deref(),
            border_color.as_deref(),
            *framed,
            ctx,
        )?,
        AtomKind::Enclose {
            body,
            notations,
            stroke_color,
            padding,
        } => enclose::build(body, notations, stroke_color.as_deref(), padding.as_ref(), ctx)?,
        AtomKind::Spacing { width } => kern::build(width, ctx),
        AtomKind::Styling { style, body } => {
            make_span(vec![], styling::build(*style, body, ctx)?, Some(ctx))
        }
        AtomKind::Sizing { size, body } => {
            make_span(vec![], sizing::build(*size, body, ctx)?, Some(ctx))
        }
        AtomKind::Color { color, body } => {
            make_span(vec![], color::build(color, body, ctx)?, Some(ctx))
        }
        AtomKind::Rule {
            width,
            height,
            shift,
        } => rule::build(width, height, shift.as_ref(), ctx),
        AtomKind::Overlap { align, body } => lap::build(*align, body, ctx)?,
        AtomKind::Phantom { kind, body } => phantom::build(*kind, body, ctx)?,
        AtomKind::Msubsup => make_span(vec![], vec![], Some(ctx)),
    };
    if atom.has_scripts() {
        supsub::build(nucleus, atom, ctx)
    } else {
        Ok(nucleus)
    }
}

/// Class name of a span for the cancellation tables; untyped spans match
/// nothing.
fn class_name(span: &Span) -> &'static str {
    span.span_type.map_or("", <&'static str>::from)
}

/// Binary atoms (first class `mbin`) change into ordinary atoms (`mord`)
/// depending on their surroundings. One left-to-right pass, skipping glue.
fn retype_bins(groups: &mut [Span], surrounding: Surrounding) {
    let mut prev_name = surrounding.left.map_or("leftmost", <&'static str>::from);
    let mut prev_index: Option<usize> = None;

    for i in 0..groups.len() {
        if groups[i].is_space() {
            continue;
        }
        let name = class_name(&groups[i]);
        if prev_name == "mbin" && BIN_RIGHT_CANCELLER.contains(name) {
            if let Some(prev) = prev_index {
                groups[prev].set_type(SpanType::Mord);
            }
        } else if name == "mbin" && BIN_LEFT_CANCELLER.contains(prev_name) {
            groups[i].set_type(SpanType::Mord);
        }
        prev_name = class_name(&groups[i]);
        prev_index = Some(i);
    }

    let next_name = surrounding.right.map_or("rightmost", <&'static str>::from);
    if prev_name == "mbin"
        && BIN_RIGHT_CANCELLER.contains(next_name)
        && let Some(prev) = prev_index
    {
        groups[prev].set_type(SpanType::Mord);
    }
}

/// Insert glue between each pair of typed neighbours.
fn insert_spacing(groups: Vec<Span>, ctx: &Context<'_>, surrounding: Surrounding) -> Vec<Span> {
    let mut out = Vec::with_capacity(groups.len() * 2);
    let mut prev_type = surrounding.left;
    let mut prev_tight = false;

    for span in groups {
        if span.is_space() {
            out.push(span);
            continue;
        }
        let tight = span.has_class("mtight");
        if let (Some(left), Some(right)) = (prev_type, span.span_type)
            && let Some(space) = spacing_between(left, right, prev_tight || tight)
        {
            out.push(make_glue(&space, ctx));
        }
        prev_type = span.span_type;
        prev_tight = tight;
        out.push(span);
    }

    if let (Some(left), Some(right)) = (prev_type, surrounding.right)
        && let Some(space) = spacing_between(left, right, prev_tight)
    {
        out.push(make_glue(&space, ctx));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::StyleLevel;
    use crate::font_metrics::BuiltinMetrics;
    use crate::style::SCRIPT;
    use crate::types::Settings;

    fn root(metrics: &BuiltinMetrics) -> Context<'_> {
        Context::new(metrics, &Settings::default()).unwrap()
    }

    fn types(spans: &[Span]) -> Vec<Option<SpanType>> {
        spans.iter().map(|span| span.span_type).collect()
    }

    #[test]
    fn test_leading_bin_becomes_ord() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let spans = build_expression(
            &[Atom::bin("-"), Atom::ord("x")],
            &ctx,
            GroupType::Real,
            Surrounding::default(),
        )
        .unwrap();
        assert_eq!(types(&spans), [Some(SpanType::Mord), Some(SpanType::Mord)]);
        assert_eq!(spans[0].classes[0], "mord");
    }

    #[test]
    fn test_bin_before_rel_becomes_ord() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let spans = build_expression(
            &[Atom::ord("x"), Atom::bin("+"), Atom::rel("=")],
            &ctx,
            GroupType::Real,
            Surrounding::default(),
        )
        .unwrap();
        // x + = : no glue around the retyped bin, thick glue before `=`
        let non_space: Vec<_> = spans.iter().filter(|s| !s.is_space()).collect();
        assert_eq!(non_space[1].span_type, Some(SpanType::Mord));
        assert_eq!(spans.len(), 4);
        assert!(spans[2].is_space());
    }

    #[test]
    fn test_medium_space_around_bin() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let spans = build_expression(
            &[Atom::ord("a"), Atom::bin("+"), Atom::ord("b")],
            &ctx,
            GroupType::Real,
            Surrounding::default(),
        )
        .unwrap();
        assert_eq!(spans.len(), 5);
        let mu = ctx.metrics().css_em_per_mu;
        assert!((spans[1].width - 4.0 * mu).abs() < 1e-9);
        assert!((spans[3].width - 4.0 * mu).abs() < 1e-9);
    }

    #[test]
    fn test_tight_style_drops_bin_space() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics).having_style(SCRIPT);
        let spans = build_expression(
            &[Atom::ord("a"), Atom::bin("+"), Atom::ord("b")],
            &ctx,
            GroupType::Real,
            Surrounding::default(),
        )
        .unwrap();
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn test_partial_group_is_not_spaced() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let spans = build_expression(
            &[Atom::ord("a"), Atom::bin("+"), Atom::ord("b")],
            &ctx,
            GroupType::Partial,
            Surrounding::default(),
        )
        .unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].span_type, Some(SpanType::Mbin));
    }

    #[test]
    fn test_color_is_flattened_into_parent() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let colored = Atom::new(AtomKind::Color {
            color: "red".to_owned(),
            body: vec![Atom::bin("+"), Atom::ord("b")],
        });
        let spans = build_expression(
            &[Atom::ord("a"), colored],
            &ctx,
            GroupType::Real,
            Surrounding::default(),
        )
        .unwrap();
        // a, glue, +, glue, b: the bin keeps its class across the boundary
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[2].span_type, Some(SpanType::Mbin));
        assert_eq!(
            spans[2].style.get(StyleProperty::Color),
            Some(&"red".into())
        );
    }

    #[test]
    fn test_styling_rescales_into_parent() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let styled = Atom::new(AtomKind::Styling {
            style: StyleLevel::Script,
            body: vec![Atom::ord("1")],
        });
        let spans = build_expression(&[styled], &ctx, GroupType::Real, Surrounding::default())
            .unwrap();
        let one = ctx.character_metrics('1', crate::font_metrics::FontId::MainRegular);
        assert!((spans[0].height - one.height * 0.7).abs() < 1e-9);
        assert!(spans[0].has_class("reset-size5"));
        assert!(spans[0].has_class("size2"));
    }

    #[test]
    fn test_surrounding_fences_space_punctuation() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let comma = Atom::new(AtomKind::Punct {
            text: ",".to_owned(),
        });
        let spans = build_expression(
            &[Atom::ord("a"), comma],
            &ctx,
            GroupType::Real,
            Surrounding {
                left: Some(SpanType::Mopen),
                right: Some(SpanType::Mclose),
            },
        )
        .unwrap();
        // thin space between the comma and the closing fence
        assert!(spans.last().is_some_and(Span::is_space));
    }

    #[test]
    fn test_decompose_group_rescales() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let script = ctx.having_style(SCRIPT);
        let group = decompose_group(&script, &ctx, &[Atom::ord("x")]).unwrap();
        let alone = decompose_group(&script, &script, &[Atom::ord("x")]).unwrap();
        assert!((group.height - alone.height * 0.7).abs() < 1e-9);
        assert!((group.width - alone.width * 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_nesting_limit() {
        let metrics = BuiltinMetrics::new();
        let settings = Settings::builder().max_depth(3).build();
        let ctx = Context::new(&metrics, &settings).unwrap();
        let mut atom = Atom::ord("x");
        for _ in 0..5 {
            atom = Atom::new(AtomKind::Group { body: vec![atom] });
        }
        assert!(decompose(&ctx, &atom).is_err());
    }
}
