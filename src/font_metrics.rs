//! Font metrics lookup
//!
//! Layout never reads glyph tables directly: every measurement goes through a
//! [`MetricsProvider`], which callers inject when starting a layout. The
//! crate ships [`BuiltinMetrics`], backed by the compiled-in tables of
//! [`crate::font_metrics_data`], and tests can supply their own provider.
//!
//! There are three sets of font-wide parameters, one for each of textstyle
//! (size 4 and higher), scriptstyle (sizes 2 and 3) and scriptscriptstyle
//! (size 1).

use phf::phf_map;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::font_metrics_data::{STYLE_METRICS, glyph_table};
pub use crate::font_metrics_data::{CharacterMetrics, FontMetrics};

/// Make it easier to switch between different hash backends.
pub type KeyMap<K, V> = rapidhash::RapidHashMap<K, V>;

/// The fonts glyphs can be measured in.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontId {
    #[strum(serialize = "Main-Regular")]
    MainRegular,
    #[strum(serialize = "Main-Bold")]
    MainBold,
    #[strum(serialize = "Main-Italic")]
    MainItalic,
    #[strum(serialize = "Math-Italic")]
    MathItalic,
    #[strum(serialize = "Math-BoldItalic")]
    MathBoldItalic,
    #[strum(serialize = "AMS-Regular")]
    AmsRegular,
    #[strum(serialize = "Caligraphic-Regular")]
    CaligraphicRegular,
    #[strum(serialize = "Fraktur-Regular")]
    FrakturRegular,
    #[strum(serialize = "SansSerif-Regular")]
    SansSerifRegular,
    #[strum(serialize = "Script-Regular")]
    ScriptRegular,
    #[strum(serialize = "Typewriter-Regular")]
    TypewriterRegular,
    #[strum(serialize = "Size1-Regular")]
    Size1Regular,
    #[strum(serialize = "Size2-Regular")]
    Size2Regular,
    #[strum(serialize = "Size3-Regular")]
    Size3Regular,
    #[strum(serialize = "Size4-Regular")]
    Size4Regular,
}

impl FontId {
    /// The enlarged delimiter font for sizes 1..=4; anything else is clamped
    /// into that range.
    #[must_use]
    pub const fn size_font(size: usize) -> Self {
        match size {
            0 | 1 => Self::Size1Regular,
            2 => Self::Size2Regular,
            3 => Self::Size3Regular,
            _ => Self::Size4Regular,
        }
    }
}

/// Font family overrides an atom can request, named after the TeX commands
/// that select them.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum FontFamily {
    Mathrm,
    Mathbf,
    Mathit,
    Mathnormal,
    Mathbb,
    Mathcal,
    Mathfrak,
    Mathscr,
    Mathsf,
    Mathtt,
    Boldsymbol,
}

impl FontFamily {
    /// Font used to measure and draw glyphs in this family.
    #[must_use]
    pub const fn font(self) -> FontId {
        match self {
            Self::Mathrm => FontId::MainRegular,
            Self::Mathbf => FontId::MainBold,
            Self::Mathit => FontId::MainItalic,
            Self::Mathnormal => FontId::MathItalic,
            Self::Mathbb => FontId::AmsRegular,
            Self::Mathcal => FontId::CaligraphicRegular,
            Self::Mathfrak => FontId::FrakturRegular,
            Self::Mathscr => FontId::ScriptRegular,
            Self::Mathsf => FontId::SansSerifRegular,
            Self::Mathtt => FontId::TypewriterRegular,
            Self::Boldsymbol => FontId::MathBoldItalic,
        }
    }

    /// Upright families drop the italic correction of their glyphs.
    #[must_use]
    pub const fn is_upright(self) -> bool {
        !matches!(self, Self::Mathnormal | Self::Mathit | Self::Boldsymbol)
    }
}

/// Latin-1 and Cyrillic letters mapped to the Latin glyph whose box they
/// resemble. Accents add no extra height; where a Cyrillic letter has both an
/// ascender and a descender the ascender wins, so fraction bars and radical
/// lines clear it.
pub const EXTRA_CHARACTER_MAP: phf::Map<char, char> = phf_map! {
    // Latin-1
    '\u{c5}' => 'A',
    '\u{d0}' => 'D',
    '\u{de}' => 'o',
    '\u{e5}' => 'a',
    '\u{f0}' => 'd',
    '\u{fe}' => 'o',

    // Cyrillic
    '\u{410}' => 'A',
    '\u{411}' => 'B',
    '\u{412}' => 'B',
    '\u{413}' => 'F',
    '\u{414}' => 'A',
    '\u{415}' => 'E',
    '\u{416}' => 'K',
    '\u{417}' => '3',
    '\u{418}' => 'N',
    '\u{419}' => 'N',
    '\u{41a}' => 'K',
    '\u{41b}' => 'N',
    '\u{41c}' => 'M',
    '\u{41d}' => 'H',
    '\u{41e}' => 'O',
    '\u{41f}' => 'N',
    '\u{420}' => 'P',
    '\u{421}' => 'C',
    '\u{422}' => 'T',
    '\u{423}' => 'y',
    '\u{424}' => 'O',
    '\u{425}' => 'X',
    '\u{426}' => 'U',
    '\u{427}' => 'h',
    '\u{428}' => 'W',
    '\u{429}' => 'W',
    '\u{42a}' => 'B',
    '\u{42b}' => 'X',
    '\u{42c}' => 'B',
    '\u{42d}' => '3',
    '\u{42e}' => 'X',
    '\u{42f}' => 'R',
    '\u{430}' => 'a',
    '\u{431}' => 'b',
    '\u{432}' => 'a',
    '\u{433}' => 'r',
    '\u{434}' => 'y',
    '\u{435}' => 'e',
    '\u{436}' => 'm',
    '\u{437}' => 'e',
    '\u{438}' => 'n',
    '\u{439}' => 'n',
    '\u{43a}' => 'n',
    '\u{43b}' => 'n',
    '\u{43c}' => 'm',
    '\u{43d}' => 'n',
    '\u{43e}' => 'o',
    '\u{43f}' => 'n',
    '\u{440}' => 'p',
    '\u{441}' => 'c',
    '\u{442}' => 'o',
    '\u{443}' => 'y',
    '\u{444}' => 'b',
    '\u{445}' => 'x',
    '\u{446}' => 'n',
    '\u{447}' => 'n',
    '\u{448}' => 'w',
    '\u{449}' => 'w',
    '\u{44a}' => 'a',
    '\u{44b}' => 'm',
    '\u{44c}' => 'a',
    '\u{44d}' => 'e',
    '\u{44e}' => 'm',
    '\u{44f}' => 'r',
};

/// Read-only source of glyph and font-wide metrics.
///
/// Implementations must be pure lookups: the same query always yields the
/// same record, which is what lets independent subtrees be laid out in any
/// order or in parallel.
pub trait MetricsProvider: Send + Sync {
    /// Raw lookup. `None` when the font has no such glyph.
    fn lookup_glyph(&self, ch: char, font: FontId) -> Option<CharacterMetrics>;

    /// Font-wide parameters for tier 0 (text), 1 (script) or 2
    /// (scriptscript).
    fn style_metrics(&self, tier: usize) -> &FontMetrics;

    /// Glyph metrics with fallbacks: first the glyph itself, then the Latin
    /// letter it resembles, and finally a zero record. Never fails.
    fn character_metrics(&self, ch: char, font: FontId) -> CharacterMetrics {
        if let Some(metrics) = self.lookup_glyph(ch, font) {
            return metrics;
        }
        if let Some(&base) = EXTRA_CHARACTER_MAP.get(&ch)
            && let Some(metrics) = self.lookup_glyph(base, font)
        {
            return metrics;
        }
        log::trace!("no metrics for {ch:?} in {font}, using zero metrics");
        CharacterMetrics::ZERO
    }

    /// Whether the font has real metrics for this glyph.
    fn has_glyph(&self, ch: char, font: FontId) -> bool {
        self.lookup_glyph(ch, font).is_some()
    }
}

/// The compiled-in metrics, optionally overlaid with caller-supplied glyphs.
#[derive(Debug, Default, Clone)]
pub struct BuiltinMetrics {
    custom: KeyMap<(FontId, char), CharacterMetrics>,
}

impl BuiltinMetrics {
    /// Metrics with no custom overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metrics for a glyph, shadowing any compiled-in entry.
    pub fn add_custom_metrics(&mut self, font: FontId, ch: char, metrics: CharacterMetrics) {
        self.custom.insert((font, ch), metrics);
    }
}

impl MetricsProvider for BuiltinMetrics {
    fn lookup_glyph(&self, ch: char, font: FontId) -> Option<CharacterMetrics> {
        if let Some(metrics) = self.custom.get(&(font, ch)) {
            return Some(*metrics);
        }
        glyph_table(font).and_then(|table| table.get(&ch)).copied()
    }

    fn style_metrics(&self, tier: usize) -> &FontMetrics {
        &STYLE_METRICS[tier.min(STYLE_METRICS.len() - 1)]
    }
}
