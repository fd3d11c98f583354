//! Ambient layout state
//!
//! A [`Context`] holds everything a builder needs to know about where it is:
//! the math style, the font size, inherited color and font, and the metrics
//! provider. Contexts are values. Every `having_*`/`with_*` method returns a
//! modified copy, so a nested scope can never leak its overrides back into
//! its parent or siblings.

use core::{fmt, ptr};

use crate::font_metrics::{CharacterMetrics, FontFamily, FontId, FontMetrics, MetricsProvider};
use crate::style::{DISPLAY, Mathstyle, TEXT};
use crate::types::{LayoutError, LayoutErrorKind, Settings};

/// `\normalsize`.
pub const BASESIZE: usize = 5;

/// Largest font size index (`\Huge`).
pub const MAX_FONT_SIZE: usize = 10;

/// Scale of each font size relative to `\normalsize`.
const SIZE_MULTIPLIERS: [f64; MAX_FONT_SIZE] =
    [0.5, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.728, 2.074, 2.488];

/// Font size used for [text, script, scriptscript] style at each text size.
/// Taken from TeX with \normalsize=10pt.
const SIZE_STYLE_MAP: [[usize; 3]; MAX_FONT_SIZE] = [
    [1, 1, 1],   // size1: [5, 5, 5]              \tiny
    [2, 1, 1],   // size2: [7, 5, 5]              \scriptsize
    [3, 1, 1],   // size3: [8, 5, 5]              \footnotesize
    [4, 1, 1],   // size4: [9, 5, 5]              \small
    [5, 2, 1],   // size5: [10, 7, 5]             \normalsize
    [6, 3, 1],   // size6: [12, 8, 5]             \large
    [7, 5, 2],   // size7: [14.4, 10, 7]          \Large
    [8, 6, 5],   // size8: [17.28, 12, 10]        \LARGE
    [9, 7, 6],   // size9: [20.74, 14.4, 12]      \huge
    [10, 9, 8],  // size10: [24.88, 20.74, 17.28] \Huge
];

/// Font size of `style` when the surrounding text size is `size`.
const fn size_at_style(size: usize, style: &Mathstyle) -> usize {
    if style.size < 2 {
        size
    } else {
        SIZE_STYLE_MAP[size - 1][style.size - 1]
    }
}

const fn multiplier_of(size: usize) -> f64 {
    SIZE_MULTIPLIERS[size - 1]
}

/// Immutable layout state threaded through decomposition.
#[derive(Clone)]
pub struct Context<'a> {
    /// Source of glyph and font-wide metrics
    pub provider: &'a dyn MetricsProvider,
    /// Current math style
    pub style: &'static Mathstyle,
    /// Current font size, 1..=10
    pub size: usize,
    /// Font size of the enclosing text-style material
    pub text_size: usize,
    /// Scale of `size` relative to `\normalsize`
    pub size_multiplier: f64,
    /// Inherited foreground color
    pub color: Option<String>,
    /// Inherited background color
    pub background_color: Option<String>,
    /// Font family override
    pub font_family: Option<FontFamily>,
    /// Inside a phantom: keep the geometry, paint nothing
    pub phantom: bool,
    /// Clamp for explicit user sizes, in em
    pub max_size: f64,
    /// Lower bound for every drawn rule
    pub min_rule_thickness: f64,
    /// Current nesting depth
    pub depth: usize,
    /// Nesting bound
    pub max_depth: usize,
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("style", &self.style)
            .field("size", &self.size)
            .field("text_size", &self.text_size)
            .field("size_multiplier", &self.size_multiplier)
            .field("color", &self.color)
            .field("background_color", &self.background_color)
            .field("font_family", &self.font_family)
            .field("phantom", &self.phantom)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<'a> Context<'a> {
    /// The root context for a layout run.
    pub fn new(
        provider: &'a dyn MetricsProvider,
        settings: &Settings,
    ) -> Result<Self, LayoutError> {
        if !(1..=MAX_FONT_SIZE).contains(&settings.size) {
            return Err(LayoutError::new(LayoutErrorKind::InvalidFontSize {
                size: settings.size,
            }));
        }
        let style = if settings.display_mode { DISPLAY } else { TEXT };
        Ok(Self {
            provider,
            style,
            size: settings.size,
            text_size: settings.size,
            size_multiplier: multiplier_of(settings.size),
            color: settings.color.clone(),
            background_color: None,
            font_family: None,
            phantom: false,
            max_size: settings.max_size,
            min_rule_thickness: settings.min_rule_thickness,
            depth: 0,
            max_depth: settings.max_depth,
        })
    }

    /// Return a context with the given style. The font size follows the style
    /// (script styles shrink).
    #[must_use]
    pub fn having_style(&self, style: &'static Mathstyle) -> Self {
        if ptr::eq(self.style, style) {
            self.clone()
        } else {
            let size = size_at_style(self.text_size, style);
            let mut ctx = self.clone();
            ctx.style = style;
            ctx.size = size;
            ctx.size_multiplier = multiplier_of(size);
            ctx
        }
    }

    /// Return a context with the cramped version of the current style.
    #[must_use]
    pub fn having_cramped_style(&self) -> Self {
        self.having_style(self.style.cramp())
    }

    /// Return a context at the given font size and in at least text style.
    /// `size` must already be validated to lie in 1..=10.
    #[must_use]
    pub fn having_size(&self, size: usize) -> Self {
        let size = size.clamp(1, MAX_FONT_SIZE);
        if self.size == size && self.text_size == size {
            self.clone()
        } else {
            let mut ctx = self.clone();
            ctx.style = self.style.text();
            ctx.size = size;
            ctx.text_size = size;
            ctx.size_multiplier = multiplier_of(size);
            ctx
        }
    }

    /// Like `having_size(BASESIZE).having_style(style)`; without a style,
    /// moves to at least text style.
    #[must_use]
    pub fn having_base_style(&self, style: Option<&'static Mathstyle>) -> Self {
        let style = style.unwrap_or_else(|| self.style.text());
        let want_size = size_at_style(BASESIZE, style);
        if self.size == want_size && self.text_size == BASESIZE && ptr::eq(self.style, style) {
            self.clone()
        } else {
            let mut ctx = self.clone();
            ctx.style = style;
            ctx.size = want_size;
            ctx.size_multiplier = multiplier_of(want_size);
            ctx
        }
    }

    /// A context painting in the given color.
    #[must_use]
    pub fn with_color(&self, color: impl Into<String>) -> Self {
        let mut ctx = self.clone();
        ctx.color = Some(color.into());
        ctx
    }

    /// A context painting the given background.
    #[must_use]
    pub fn with_background(&self, color: impl Into<String>) -> Self {
        let mut ctx = self.clone();
        ctx.background_color = Some(color.into());
        ctx
    }

    /// A context drawing glyphs from the given family.
    #[must_use]
    pub fn with_font(&self, font_family: FontFamily) -> Self {
        let mut ctx = self.clone();
        ctx.font_family = Some(font_family);
        ctx
    }

    /// A context that keeps geometry but paints nothing.
    #[must_use]
    pub fn with_phantom(&self) -> Self {
        let mut ctx = self.clone();
        ctx.phantom = true;
        ctx
    }

    /// One nesting level deeper. Fails once the configured bound is passed.
    pub fn descend(&self) -> Result<Self, LayoutError> {
        if self.depth >= self.max_depth {
            log::debug!("nesting limit of {} reached", self.max_depth);
            return Err(LayoutError::new(LayoutErrorKind::NestingTooDeep {
                limit: self.max_depth,
            }));
        }
        let mut ctx = self.clone();
        ctx.depth += 1;
        Ok(ctx)
    }

    /// Classes a renderer needs to switch from `old`'s font size to this one.
    #[must_use]
    pub fn sizing_classes(&self, old: &Self) -> Vec<String> {
        if old.size == self.size {
            vec![]
        } else {
            vec![
                "sizing".to_owned(),
                format!("reset-size{}", old.size),
                format!("size{}", self.size),
            ]
        }
    }

    /// Classes a renderer needs to switch to `\normalsize`.
    #[must_use]
    pub fn base_sizing_classes(&self) -> Vec<String> {
        if self.size == BASESIZE {
            vec![]
        } else {
            vec![
                "sizing".to_owned(),
                format!("reset-size{}", self.size),
                format!("size{BASESIZE}"),
            ]
        }
    }

    /// The color to paint with; phantoms paint transparent.
    #[must_use]
    pub fn get_color(&self) -> Option<String> {
        if self.phantom {
            Some("transparent".to_owned())
        } else {
            self.color.clone()
        }
    }

    /// Metrics tier of the current font size.
    #[must_use]
    pub const fn metrics_tier(&self) -> usize {
        if self.size >= 4 {
            0
        } else if self.size >= 2 {
            1
        } else {
            2
        }
    }

    /// Font-wide parameters at the current font size.
    #[must_use]
    pub fn metrics(&self) -> &FontMetrics {
        self.provider.style_metrics(self.metrics_tier())
    }

    /// Glyph metrics through the provider, never failing.
    #[must_use]
    pub fn character_metrics(&self, ch: char, font: FontId) -> CharacterMetrics {
        self.provider.character_metrics(ch, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::BuiltinMetrics;
    use crate::style::{SCRIPT, SCRIPTSCRIPT};

    fn root(metrics: &BuiltinMetrics) -> Context<'_> {
        Context::new(metrics, &Settings::default()).unwrap()
    }

    #[test]
    fn test_size_at_style() {
        assert_eq!(size_at_style(5, DISPLAY), 5);
        assert_eq!(size_at_style(5, SCRIPT), 2);
        assert_eq!(size_at_style(5, SCRIPTSCRIPT), 1);
    }

    #[test]
    fn test_script_styles_shrink() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        assert_eq!(ctx.size_multiplier, 1.0);
        assert_eq!(ctx.having_style(SCRIPT).size_multiplier, 0.7);
        assert_eq!(ctx.having_style(SCRIPTSCRIPT).size_multiplier, 0.5);
        assert_eq!(ctx.having_style(SCRIPT).metrics_tier(), 1);
    }

    #[test]
    fn test_overrides_do_not_leak() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let child = ctx.with_color("red").with_font(FontFamily::Mathbf);
        assert_eq!(child.color.as_deref(), Some("red"));
        assert_eq!(ctx.color, None);
        assert_eq!(ctx.font_family, None);
    }

    #[test]
    fn test_having_size_moves_to_text_style() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics).having_style(SCRIPT).having_size(8);
        assert_eq!(ctx.style, TEXT);
        assert_eq!(ctx.size_multiplier, 1.728);
        assert_eq!(ctx.sizing_classes(&root(&metrics)), ["sizing", "reset-size5", "size8"]);
    }

    #[test]
    fn test_descend_is_bounded() {
        let metrics = BuiltinMetrics::new();
        let settings = Settings::builder().max_depth(2).build();
        let ctx = Context::new(&metrics, &settings).unwrap();
        let ctx = ctx.descend().unwrap().descend().unwrap();
        let err = ctx.descend().unwrap_err();
        assert_eq!(*err.kind, LayoutErrorKind::NestingTooDeep { limit: 2 });
    }

    #[test]
    fn test_invalid_initial_size() {
        let metrics = BuiltinMetrics::new();
        let settings = Settings::builder().size(11).build();
        assert!(Context::new(&metrics, &settings).is_err());
    }

    #[test]
    fn test_phantom_color() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics).with_color("blue").with_phantom();
        assert_eq!(ctx.get_color().as_deref(), Some("transparent"));
    }
}
