//! `\color`
//!
//! A color change does not affect the class of what it contains: the
//! colored spans join the enclosing list, so `\color{red}{2 +} 3` has the
//! same spacing as `2 + 3`.

use crate::atom::Atom;
use crate::context::Context;
use crate::decompose::{GroupType, Surrounding, build_expression};
use crate::span::Span;
use crate::types::LayoutError;

/// Decompose `body` painted in `color`, as a partial group.
pub fn build(color: &str, body: &[Atom], ctx: &Context<'_>) -> Result<Vec<Span>, LayoutError> {
    build_expression(
        body,
        &ctx.with_color(color),
        GroupType::Partial,
        Surrounding::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::BuiltinMetrics;
    use crate::types::{Settings, StyleProperty};

    #[test]
    fn test_every_span_is_colored() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let spans = build("blue", &[Atom::ord("a"), Atom::ord("b")], &ctx).unwrap();
        assert_eq!(spans.len(), 2);
        for span in &spans {
            assert_eq!(span.style.get(StyleProperty::Color), Some(&"blue".into()));
        }
    }

    #[test]
    fn test_phantom_wins_over_color() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default())
            .unwrap()
            .with_phantom();
        let spans = build("blue", &[Atom::ord("a")], &ctx).unwrap();
        assert_eq!(
            spans[0].style.get(StyleProperty::Color),
            Some(&"transparent".into())
        );
    }
}
