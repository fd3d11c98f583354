//! Generalized fractions: `\frac`, `\dfrac`, `\tfrac`, `\cfrac`, `\binom`
//! and `\genfrac`
//!
//! Placement follows the TeXbook pg. 444-445, rules 15a-e. The whole
//! fraction is built in its own style and rescaled into the caller's ems on
//! return, so a `\dfrac` inside a script comes out at display size.

use core::slice;

use crate::atom::{Genfrac, Mode, StyleLevel};
use crate::build_common::{
    VListElemAndShift, VListParam, make_line_span, make_null_delimiter, make_span,
    make_typed_span, make_v_list,
};
use crate::context::Context;
use crate::decompose::{decompose_group, rescale_into};
use crate::delimiter::custom_sized_delim;
use crate::span::{Span, SpanType};
use crate::style::{DISPLAY, Mathstyle, SCRIPT, SCRIPTSCRIPT, TEXT};
use crate::types::LayoutError;
use crate::units::calculate_size;

/// The style a fraction is set in, given an optional forced size.
fn adjust_style(size: Option<StyleLevel>, style: &'static Mathstyle) -> &'static Mathstyle {
    match size {
        None => style,
        Some(StyleLevel::Display) => {
            if style.id >= SCRIPT.id {
                style.text()
            } else {
                DISPLAY
            }
        }
        Some(StyleLevel::Text) if style.size == DISPLAY.size => TEXT,
        Some(StyleLevel::Text) => style,
        Some(StyleLevel::Script) => SCRIPT,
        Some(StyleLevel::Scriptscript) => SCRIPTSCRIPT,
    }
}

/// A fence sized to `delim_size`, or the null delimiter.
fn fraction_fence(
    delim: Option<&str>,
    delim_size: f64,
    span_type: SpanType,
    mode: Mode,
    ctx: &Context<'_>,
) -> Span {
    let mut span = match delim {
        Some(delim) if delim != "." => custom_sized_delim(delim, delim_size, true, ctx, mode, &[]),
        _ => make_null_delimiter(ctx, vec![]),
    };
    span.set_type(span_type);
    span
}

/// Lay out a fraction.
pub fn build(group: &Genfrac, mode: Mode, ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let style = adjust_style(group.mathstyle, ctx.style);
    let frac_ctx = ctx.having_style(style);

    let (nstyle, dstyle) = if group.continuous {
        (style, style)
    } else {
        (style.frac_num(), style.frac_den())
    };

    let metrics = frac_ctx.metrics();

    let mut numer = decompose_group(&frac_ctx.having_style(nstyle), &frac_ctx, &group.numer)?;
    if group.continuous {
        // \cfrac inserts a \strut into the numerator.
        // Get \strut dimensions from TeXbook page 353.
        numer.height = numer.height.max(8.5 / metrics.pt_per_em);
        numer.depth = numer.depth.max(3.5 / metrics.pt_per_em);
    }
    let denom = decompose_group(&frac_ctx.having_style(dstyle), &frac_ctx, &group.denom)?;

    let bar_width = match &group.bar_size {
        Some(bar_size) => calculate_size(bar_size, &frac_ctx),
        None => metrics.default_rule_thickness,
    };
    let rule = (group.has_bar_line && bar_width > 0.0)
        .then(|| make_line_span("frac-line", &frac_ctx, Some(bar_width)));
    let (rule_width, rule_spacing) = match &rule {
        Some(rule) => (rule.height, rule.height),
        None => (0.0, metrics.default_rule_thickness),
    };

    // Rule 15b
    let (mut num_shift, mut denom_shift, clearance) = if style.size == DISPLAY.size {
        let clearance = if rule_width > 0.0 {
            3.0 * rule_spacing
        } else {
            7.0 * rule_spacing
        };
        (metrics.num1, metrics.denom1, clearance)
    } else if rule_width > 0.0 {
        (metrics.num2, metrics.denom2, rule_spacing)
    } else {
        (metrics.num3, metrics.denom2, 3.0 * rule_spacing)
    };

    let axis_height = metrics.axis_height;
    if rule.is_some() {
        // Rule 15d
        let numer_gap = (num_shift - numer.depth) - 0.5f64.mul_add(rule_width, axis_height);
        if numer_gap < clearance {
            num_shift += clearance - numer_gap;
        }
        let denom_gap = 0.5f64.mul_add(-rule_width, axis_height) - (denom.height - denom_shift);
        if denom_gap < clearance {
            denom_shift += clearance - denom_gap;
        }
    } else {
        // Rule 15c
        let candidate_clearance = (num_shift - numer.depth) - (denom.height - denom_shift);
        if candidate_clearance < clearance {
            num_shift += 0.5 * (clearance - candidate_clearance);
            denom_shift += 0.5 * (clearance - candidate_clearance);
        }
    }

    let mut children = vec![VListElemAndShift::builder().elem(denom).shift(denom_shift).build()];
    if let Some(rule) = rule {
        // the rule is centered on the axis
        let mid_shift = -0.5f64.mul_add(-rule_width, axis_height);
        children.push(VListElemAndShift::builder().elem(rule).shift(mid_shift).build());
    }
    children.push(VListElemAndShift::builder().elem(numer).shift(-num_shift).build());
    let frac = make_v_list(VListParam::IndividualShift { children }, &frac_ctx);

    // Rule 15e
    let delim_size = if style.size == DISPLAY.size {
        metrics.delim1
    } else if style.size == SCRIPTSCRIPT.size {
        frac_ctx.having_style(SCRIPT).metrics().delim2
    } else {
        metrics.delim2
    };

    let left = fraction_fence(
        group.left_delim.as_deref(),
        delim_size,
        SpanType::Mopen,
        mode,
        &frac_ctx,
    );
    let right = if group.continuous {
        make_span(vec![], vec![], None)
    } else {
        fraction_fence(
            group.right_delim.as_deref(),
            delim_size,
            SpanType::Mclose,
            mode,
            &frac_ctx,
        )
    };

    let mfrac = make_span(vec!["mfrac".to_owned()], vec![frac], None);
    let mut span = make_typed_span(SpanType::Mord, vec![], vec![left, mfrac, right], &frac_ctx);
    rescale_into(slice::from_mut(&mut span), &frac_ctx, ctx);
    Ok(span)
}
