//! `\overline` and `\underline`
//!
//! Rules 9 and 10 of the TeXbook pg. 443: a rule of the default thickness θ
//! is drawn 3θ away from the body, with θ of padding beyond it.

use crate::atom::{Atom, LinePosition};
use crate::build_common::{VListChild, VListParam, make_line_span, make_typed_span, make_v_list};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::span::{Span, SpanType};
use crate::types::LayoutError;

/// Draw a line over or under `body`.
pub fn build(
    position: LinePosition,
    body: &[Atom],
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let theta = ctx.metrics().default_rule_thickness;
    let (vlist, class) = match position {
        LinePosition::Over => {
            // the body of an overline is cramped
            let inner = decompose_group(&ctx.having_cramped_style(), ctx, body)?;
            let line = make_line_span("overline-line", ctx, None);
            let vlist = make_v_list(
                VListParam::FirstBaseline {
                    children: vec![
                        VListChild::elem(inner),
                        VListChild::kern(3.0 * theta),
                        VListChild::elem(line),
                        VListChild::kern(theta),
                    ],
                },
                ctx,
            );
            (vlist, "overline")
        }
        LinePosition::Under => {
            let inner = decompose_group(ctx, ctx, body)?;
            let line = make_line_span("underline-line", ctx, None);
            let vlist = make_v_list(
                VListParam::Top {
                    amount: inner.height,
                    children: vec![
                        VListChild::kern(theta),
                        VListChild::elem(line),
                        VListChild::kern(3.0 * theta),
                        VListChild::elem(inner),
                    ],
                },
                ctx,
            );
            (vlist, "underline")
        }
    };
    Ok(make_typed_span(SpanType::Mord, vec![class.to_owned()], vec![vlist], ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use crate::font_metrics::BuiltinMetrics;
    use crate::types::Settings;

    fn root(metrics: &BuiltinMetrics) -> Context<'_> {
        Context::new(metrics, &Settings::default()).unwrap()
    }

    #[test]
    fn test_overline_adds_clearance_and_padding() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let x = decompose(&ctx, &Atom::ord("x")).unwrap();
        let span = build(LinePosition::Over, &[Atom::ord("x")], &ctx).unwrap();
        let theta = ctx.metrics().default_rule_thickness;
        let line = theta.max(ctx.min_rule_thickness);
        assert!(span.has_class("overline"));
        assert!((span.height - (x.height + 4.0 * theta + line)).abs() < 1e-9);
        assert!((span.depth - x.depth).abs() < 1e-9);
    }

    #[test]
    fn test_underline_hangs_below() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let y = decompose(&ctx, &Atom::ord("y")).unwrap();
        let span = build(LinePosition::Under, &[Atom::ord("y")], &ctx).unwrap();
        let theta = ctx.metrics().default_rule_thickness;
        let line = theta.max(ctx.min_rule_thickness);
        assert!(span.has_class("underline"));
        assert!((span.height - y.height).abs() < 1e-9);
        assert!((span.depth - (y.depth + 4.0 * theta + line)).abs() < 1e-9);
    }
}
