//! `\rule[shift]{width}{height}`

use crate::build_common::make_typed_span;
use crate::context::Context;
use crate::span::{Span, SpanType};
use crate::types::StyleProperty;
use crate::units::{Measurement, calculate_size};

/// A solid box of the given size, raised by `shift`.
#[must_use]
pub fn build(
    width: &Measurement,
    height: &Measurement,
    shift: Option<&Measurement>,
    ctx: &Context<'_>,
) -> Span {
    let width = calculate_size(width, ctx);
    let height = calculate_size(height, ctx);
    let shift = shift.map_or(0.0, |shift| calculate_size(shift, ctx));

    let mut rule = make_typed_span(SpanType::Mord, vec!["rule".to_owned()], vec![], ctx);
    rule.style.insert(StyleProperty::BorderRightWidth, width);
    rule.style.insert(StyleProperty::BorderBottomWidth, height);
    rule.style.insert(StyleProperty::Top, -shift);
    rule.width = width;
    rule.height = (height + shift).max(0.0);
    rule.depth = (-shift).max(0.0);
    rule.max_font_size = height * 1.125 * ctx.size_multiplier;
    rule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::BuiltinMetrics;
    use crate::types::Settings;

    #[test]
    fn test_raised_and_lowered_rules() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let raised = build(
            &Measurement::em(1.0),
            &Measurement::em(0.5),
            Some(&Measurement::em(0.2)),
            &ctx,
        );
        assert!((raised.height - 0.7).abs() < 1e-9);
        assert!(raised.depth.abs() < 1e-12);
        assert!((raised.width - 1.0).abs() < 1e-9);
        assert!(raised.has_class("rule"));

        let lowered = build(
            &Measurement::em(1.0),
            &Measurement::em(0.5),
            Some(&Measurement::em(-0.3)),
            &ctx,
        );
        assert!((lowered.height - 0.2).abs() < 1e-9);
        assert!((lowered.depth - 0.3).abs() < 1e-9);

        // sunk entirely below the baseline
        let sunk = build(
            &Measurement::em(1.0),
            &Measurement::em(0.1),
            Some(&Measurement::em(-0.5)),
            &ctx,
        );
        assert!(sunk.height.abs() < 1e-12);
        assert!((sunk.depth - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_max_size_clamps_rule() {
        let metrics = BuiltinMetrics::new();
        let settings = Settings::builder().max_size(2.0).build();
        let ctx = Context::new(&metrics, &settings).unwrap();
        let rule = build(&Measurement::em(10.0), &Measurement::em(10.0), None, &ctx);
        assert!((rule.width - 2.0).abs() < 1e-9);
        assert!((rule.height - 2.0).abs() < 1e-9);
    }
}
