//! `\tiny` .. `\Huge`
//!
//! Real TeX doesn't allow size changes inside math; here they apply to the
//! body and the resulting boxes are expressed in the ems of the enclosing
//! list.

use crate::atom::Atom;
use crate::context::{Context, MAX_FONT_SIZE};
use crate::decompose::{GroupType, Surrounding, build_expression, rescale_into};
use crate::span::Span;
use crate::types::{LayoutError, LayoutErrorKind};

/// Decompose `body` in `child` as a partial group of `parent`'s list.
pub fn sizing_group(
    body: &[Atom],
    child: &Context<'_>,
    parent: &Context<'_>,
) -> Result<Vec<Span>, LayoutError> {
    let mut spans = build_expression(body, child, GroupType::Partial, Surrounding::default())?;
    rescale_into(&mut spans, child, parent);
    Ok(spans)
}

/// Set `body` at font size `size`.
pub fn build(size: usize, body: &[Atom], ctx: &Context<'_>) -> Result<Vec<Span>, LayoutError> {
    if !(1..=MAX_FONT_SIZE).contains(&size) {
        return Err(LayoutError::new(LayoutErrorKind::InvalidFontSize { size }));
    }
    sizing_group(body, &ctx.having_size(size), ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::{BuiltinMetrics, FontId};
    use crate::types::Settings;

    #[test]
    fn test_huge_scales_up() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let spans = build(10, &[Atom::ord("1")], &ctx).unwrap();
        let one = ctx.character_metrics('1', FontId::MainRegular);
        assert!((spans[0].height - one.height * 2.488).abs() < 1e-9);
        assert!(spans[0].has_class("sizing"));
        assert!(spans[0].has_class("reset-size5"));
        assert!(spans[0].has_class("size10"));
    }

    #[test]
    fn test_nested_sizes_reset_to_outer() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let huge = ctx.having_size(10);
        let inner = build(3, &[Atom::ord("1")], &huge).unwrap();
        let mut spans = inner;
        rescale_into(&mut spans, &huge, &ctx);
        assert!(spans[0].has_class("reset-size5"));
        assert!(spans[0].has_class("size3"));
        assert!(!spans[0].has_class("reset-size10"));
    }

    #[test]
    fn test_rejects_bad_size() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let err = build(11, &[], &ctx).unwrap_err();
        assert_eq!(*err.kind, LayoutErrorKind::InvalidFontSize { size: 11 });
    }
}
