//! Superscripts and subscripts
//!
//! Scripts are placed following TeXbook rules 18(a-f), pages 445-446. Large
//! operators with limits and `\overset`-style constructions stack their
//! annotations themselves; everything else comes through here.

use crate::atom::Atom;
use crate::build_common::{
    VListElem, VListElemAndShift, VListParam, make_span, make_typed_span, make_v_list,
};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::span::{Span, SpanType};
use crate::style::DISPLAY;
use crate::types::LayoutError;

/// Attach the scripts of `atom` to its already built `nucleus`.
pub fn build(nucleus: Span, atom: &Atom, ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let is_character_box = atom.has_character_nucleus();
    build_scripts(
        nucleus,
        atom.superscript.as_deref(),
        atom.subscript.as_deref(),
        is_character_box,
        ctx,
    )
}

/// Attach optional superscript and subscript lists to `nucleus`.
pub fn build_scripts(
    nucleus: Span,
    sup: Option<&[Atom]>,
    sub: Option<&[Atom]>,
    is_character_box: bool,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let metrics = ctx.metrics();

    // Rule 18a
    let mut super_shift = 0.0;
    let mut sub_shift = 0.0;

    let super_m = match sup {
        Some(sup) => {
            let sup_ctx = ctx.having_style(ctx.style.sup());
            let elem = decompose_group(&sup_ctx, ctx, sup)?;
            if !is_character_box {
                super_shift = nucleus.height
                    - sup_ctx.metrics().sup_drop * sup_ctx.size_multiplier / ctx.size_multiplier;
            }
            Some(elem)
        }
        None => None,
    };

    let sub_m = match sub {
        Some(sub) => {
            let sub_ctx = ctx.having_style(ctx.style.sub());
            let elem = decompose_group(&sub_ctx, ctx, sub)?;
            if !is_character_box {
                sub_shift = nucleus.depth
                    + sub_ctx.metrics().sub_drop * sub_ctx.size_multiplier / ctx.size_multiplier;
            }
            Some(elem)
        }
        None => None,
    };

    // Rule 18c
    let min_sup_shift = if ctx.style == DISPLAY {
        metrics.sup1
    } else if ctx.style.cramped {
        metrics.sup3
    } else {
        metrics.sup2
    };

    // scriptspace is a font-size-independent size, so scale it
    // appropriately for use as the margin
    let margin_right = (0.5 / metrics.pt_per_em) / ctx.size_multiplier;

    // Subscripts shouldn't be shifted by the nucleus' italic correction.
    // Only done when the nucleus is a single glyph.
    let margin_left = (sub_m.is_some() && nucleus.text().is_some()).then_some(-nucleus.italic);

    let supsub = match (super_m, sub_m) {
        (Some(sup_elem), Some(sub_elem)) => {
            super_shift = super_shift
                .max(min_sup_shift)
                .max(0.25f64.mul_add(metrics.x_height, sup_elem.depth));
            sub_shift = sub_shift.max(metrics.sub2);

            let rule_width = metrics.default_rule_thickness;

            // Rule 18e
            let max_width = 4.0 * rule_width;
            if (super_shift - sup_elem.depth) - (sub_elem.height - sub_shift) < max_width {
                sub_shift = max_width - (super_shift - sup_elem.depth) + sub_elem.height;
                let psi = 0.8f64.mul_add(metrics.x_height, -(super_shift - sup_elem.depth));
                if psi > 0.0 {
                    super_shift += psi;
                    sub_shift -= psi;
                }
            }

            make_v_list(
                VListParam::IndividualShift {
                    children: vec![
                        VListElemAndShift::builder()
                            .elem(sub_elem)
                            .shift(sub_shift)
                            .maybe_margin_left(margin_left)
                            .margin_right(margin_right)
                            .build(),
                        VListElemAndShift::builder()
                            .elem(sup_elem)
                            .shift(-super_shift)
                            .margin_right(margin_right)
                            .build(),
                    ],
                },
                ctx,
            )
        }
        (None, Some(sub_elem)) => {
            // Rule 18b
            sub_shift = sub_shift
                .max(metrics.sub1)
                .max(0.8f64.mul_add(-metrics.x_height, sub_elem.height));

            make_v_list(
                VListParam::Shift {
                    amount: sub_shift,
                    children: vec![
                        VListElem::builder()
                            .elem(sub_elem)
                            .maybe_margin_left(margin_left)
                            .margin_right(margin_right)
                            .build()
                            .into(),
                    ],
                },
                ctx,
            )
        }
        (Some(sup_elem), None) => {
            // Rule 18c, d
            super_shift = super_shift
                .max(min_sup_shift)
                .max(0.25f64.mul_add(metrics.x_height, sup_elem.depth));

            make_v_list(
                VListParam::Shift {
                    amount: -super_shift,
                    children: vec![
                        VListElem::builder()
                            .elem(sup_elem)
                            .margin_right(margin_right)
                            .build()
                            .into(),
                    ],
                },
                ctx,
            )
        }
        (None, None) => return Ok(nucleus),
    };

    // The scripts take the class of the nucleus.
    let span_type = nucleus.span_type.unwrap_or(SpanType::Mord);
    Ok(make_typed_span(
        span_type,
        vec![],
        vec![nucleus, make_span(vec!["msupsub".to_owned()], vec![supsub], None)],
        ctx,
    ))
}
