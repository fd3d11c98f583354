//! Limits stacked above and below a base
//!
//! Used by large operators with limits and by `\overset`-style
//! constructions. The placement follows TeXbook rule 13a, pg. 444: each
//! limit keeps `big_op_spacing1..4` of clearance from the base and gets
//! `big_op_spacing5` of padding on its far side.

use crate::atom::Atom;
use crate::build_common::{VListChild, VListElem, VListParam, make_span, make_v_list};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::span::{Span, SpanType};
use crate::types::LayoutError;

/// A built limit and the kern separating it from the base.
struct SupSubElem {
    elem: Span,
    kern: f64,
}

/// Stack `sup` above and `sub` below `base`.
///
/// `slant` is the italic correction of the base glyph: the upper limit moves
/// right by it and the lower limit left. `base_shift` is how far the base
/// has been lowered to center it on the axis.
#[allow(clippy::too_many_arguments)]
pub fn assemble_sup_sub(
    base: Span,
    sup: Option<&[Atom]>,
    sub: Option<&[Atom]>,
    ctx: &Context<'_>,
    slant: f64,
    base_shift: f64,
    span_type: SpanType,
    classes: Vec<String>,
) -> Result<Span, LayoutError> {
    let base = make_span(vec![], vec![base], Some(ctx));
    let base_height = base.height;
    let base_depth = base.depth;
    let metrics = ctx.metrics();

    let sub_is_single_character = matches!(sub, Some([only]) if only.is_character_box());

    let sup = match sup {
        Some(atoms) => {
            let elem = decompose_group(&ctx.having_style(ctx.style.sup()), ctx, atoms)?;
            let kern = metrics
                .big_op_spacing1
                .max(metrics.big_op_spacing3 - elem.depth);
            Some(SupSubElem { elem, kern })
        }
        None => None,
    };

    let sub = match sub {
        Some(atoms) => {
            let elem = decompose_group(&ctx.having_style(ctx.style.sub()), ctx, atoms)?;
            let kern = metrics
                .big_op_spacing2
                .max(metrics.big_op_spacing4 - elem.height);
            Some(SupSubElem { elem, kern })
        }
        None => None,
    };

    let has_sub = sub.is_some();

    let final_group = match (sup, sub) {
        (Some(sup), Some(sub)) => {
            let bottom = metrics.big_op_spacing5
                + sub.elem.height
                + sub.elem.depth
                + sub.kern
                + base_depth
                + base_shift;
            make_v_list(
                VListParam::Bottom {
                    amount: bottom,
                    children: vec![
                        VListChild::kern(metrics.big_op_spacing5),
                        VListElem::builder()
                            .elem(sub.elem)
                            .margin_left(-slant)
                            .build()
                            .into(),
                        VListChild::kern(sub.kern),
                        VListChild::elem(base),
                        VListChild::kern(sup.kern),
                        VListElem::builder()
                            .elem(sup.elem)
                            .margin_left(slant)
                            .build()
                            .into(),
                        VListChild::kern(metrics.big_op_spacing5),
                    ],
                },
                ctx,
            )
        }
        (None, Some(sub)) => make_v_list(
            VListParam::Top {
                amount: base_height - base_shift,
                children: vec![
                    VListChild::kern(metrics.big_op_spacing5),
                    VListElem::builder()
                        .elem(sub.elem)
                        .margin_left(-slant)
                        .build()
                        .into(),
                    VListChild::kern(sub.kern),
                    VListChild::elem(base),
                ],
            },
            ctx,
        ),
        (Some(sup), None) => make_v_list(
            VListParam::Bottom {
                amount: base_depth + base_shift,
                children: vec![
                    VListChild::elem(base),
                    VListChild::kern(sup.kern),
                    VListElem::builder()
                        .elem(sup.elem)
                        .margin_left(slant)
                        .build()
                        .into(),
                    VListChild::kern(metrics.big_op_spacing5),
                ],
            },
            ctx,
        ),
        (None, None) => base,
    };

    let mut parts = vec![final_group];
    if has_sub && slant != 0.0 && !sub_is_single_character {
        // keep the slanted lower limit from overlapping what comes before
        parts.insert(0, Span::kern(slant));
    }

    Ok(Span::builder()
        .span_type(span_type)
        .classes(classes)
        .children(parts)
        .build(Some(ctx)))
}
