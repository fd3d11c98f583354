//! Radicals
//!
//! Square roots are handled in the TeXbook pg. 443, Rule 11. The radical
//! sign is a `\surd` delimiter sized to the radicand plus its clearance; its
//! top is aligned with the top of the rule drawn over the radicand.

use crate::atom::{Atom, Mode};
use crate::build_common::{
    VListChild, VListParam, make_line_span, make_span, make_typed_span, make_v_list,
};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::delimiter::custom_sized_delim;
use crate::span::{Span, SpanType};
use crate::style::{SCRIPTSCRIPT, TEXT};
use crate::types::{LayoutError, StyleProperty};

/// Space before and after a root index, from `\r@@t`: 5mu and -10mu.
const ROOT_MARGIN_LEFT: f64 = 5.0 / 18.0;
const ROOT_MARGIN_RIGHT: f64 = -10.0 / 18.0;

/// Clearance between the radicand and the rule, and the total height the
/// radical sign must reach, in `\normalsize` ems.
fn radical_request(inner: &Span, theta: f64, ctx: &Context<'_>) -> (f64, f64) {
    let phi = if ctx.style.id < TEXT.id {
        ctx.metrics().x_height
    } else {
        theta
    };
    let line_clearance = theta + phi / 4.0;
    let request = (inner.height + inner.depth + line_clearance + theta) * ctx.size_multiplier;
    (line_clearance, request)
}

/// `\sqrt[index]{body}`
pub fn build(
    body: &[Atom],
    index: Option<&[Atom]>,
    mode: Mode,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let mut inner = decompose_group(&ctx.having_cramped_style(), ctx, body)?;
    if inner.height == 0.0 {
        // an empty radicand still gets a radical of x-height
        inner.height = ctx.metrics().x_height;
    }

    let line = make_line_span("sqrt-line", ctx, None);
    let theta = line.height;
    let (mut line_clearance, request) = radical_request(&inner, theta, ctx);

    let mut delim = custom_sized_delim("\\surd", request, false, ctx, mode, &[]);

    // A taller radical than needed spreads the extra space evenly above and
    // below the radicand.
    let delim_depth = delim.height + delim.depth - theta;
    if delim_depth > inner.height + inner.depth + line_clearance {
        line_clearance = (line_clearance + delim_depth - inner.height - inner.depth) / 2.0;
    }

    // Line the top of the radical up with the top of the rule
    let delim_shift = delim.height - (inner.height + line_clearance + theta);
    delim.style.insert(StyleProperty::Top, delim_shift);
    delim.height = (delim.height - delim_shift).max(0.0);
    delim.depth = (delim.depth + delim_shift).max(0.0);

    let body = make_v_list(
        VListParam::FirstBaseline {
            children: vec![
                VListChild::elem(inner),
                VListChild::kern(line_clearance),
                VListChild::elem(line),
                VListChild::kern(theta),
            ],
        },
        ctx,
    );

    let Some(index) = index else {
        return Ok(make_typed_span(
            SpanType::Mord,
            vec!["sqrt".to_owned()],
            vec![delim, body],
            ctx,
        ));
    };

    // The index is always in scriptscript style, raised as in `\r@@t`
    let rootm = decompose_group(&ctx.having_style(SCRIPTSCRIPT), ctx, index)?;
    let to_shift = 0.6 * (body.height - body.depth);
    let root_vlist = make_v_list(
        VListParam::Shift {
            amount: -to_shift,
            children: vec![VListChild::elem(rootm)],
        },
        ctx,
    );
    let mut root = make_span(vec!["root".to_owned()], vec![root_vlist], None);
    root.style.insert(StyleProperty::MarginLeft, ROOT_MARGIN_LEFT);
    root.style.insert(StyleProperty::MarginRight, ROOT_MARGIN_RIGHT);

    Ok(make_typed_span(
        SpanType::Mord,
        vec!["sqrt".to_owned()],
        vec![root, delim, body],
        ctx,
    ))
}
