use bon::bon;

use crate::context::BASESIZE;

/// Default nesting bound. Each level costs several stack frames, so this stays
/// well inside a 2 MiB thread stack even in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration for one layout run.
///
/// All fields have defaults; build with [`Settings::builder`] and override
/// only what differs.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Start in display style (`true`) or text style (`false`).
    pub display_mode: bool,
    /// Maximum nesting depth of the atom tree before layout fails with
    /// [`crate::LayoutErrorKind::NestingTooDeep`].
    pub max_depth: usize,
    /// Upper bound, in em, for explicit user sizes such as rule dimensions
    /// and kerns.
    pub max_size: f64,
    /// Lower bound, in em, for every drawn rule or line.
    pub min_rule_thickness: f64,
    /// Initial font size, 1..=10 with 5 being `\normalsize`.
    pub size: usize,
    /// Initial color annotation.
    pub color: Option<String>,
}

#[bon]
impl Settings {
    /// Creates a new [`Settings`] instance from optional configuration values.
    ///
    /// # Default Values
    /// - `display_mode`: `true`
    /// - `max_depth`: [`DEFAULT_MAX_DEPTH`] (`32`)
    /// - `max_size`: `f64::INFINITY`
    /// - `min_rule_thickness`: `0.04`
    /// - `size`: `5`
    /// - `color`: none
    #[must_use]
    #[builder]
    pub fn new(
        /// Display style (true) or text style (false) at the root.
        display_mode: Option<bool>,
        /// Nesting bound for the dispatcher.
        max_depth: Option<usize>,
        /// Clamp for explicit sizes, in em.
        max_size: Option<f64>,
        /// Minimum rule thickness, in em.
        min_rule_thickness: Option<f64>,
        /// Initial font size.
        size: Option<usize>,
        /// Initial color.
        color: Option<String>,
    ) -> Self {
        Self {
            display_mode: display_mode.unwrap_or(true),
            max_depth: max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            max_size: max_size.unwrap_or(f64::INFINITY).max(0.0),
            min_rule_thickness: min_rule_thickness.unwrap_or(0.04).max(0.0),
            size: size.unwrap_or(BASESIZE),
            color,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
