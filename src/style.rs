//! The eight TeX math styles and the transitions between them
//!
//! A [`Mathstyle`] pairs a size tier (display, text, script, scriptscript)
//! with a cramped flag. Every transition a layout rule needs (superscript,
//! subscript, numerator, denominator, cramping) is a table lookup on the
//! style id; nothing here is computed at run time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the eight math styles. Instances are only ever obtained as
/// `&'static` references to the precomputed table, so pointer equality and
/// value equality coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mathstyle {
    /// Unique identifier, 0..8
    pub id: usize,
    /// Size tier (0=display, 1=text, 2=script, 3=scriptscript)
    pub size: usize,
    /// Whether the style is cramped
    pub cramped: bool,
}

impl Mathstyle {
    const fn new(id: usize, size: usize, cramped: bool) -> Self {
        Self { id, size, cramped }
    }

    /// Style of a superscript attached to a nucleus in this style.
    #[must_use]
    pub const fn sup(&self) -> &'static Self {
        &STYLES[SUP[self.id]]
    }

    /// Style of a subscript attached to a nucleus in this style.
    #[must_use]
    pub const fn sub(&self) -> &'static Self {
        &STYLES[SUB[self.id]]
    }

    /// Style of a fraction numerator.
    #[must_use]
    pub const fn frac_num(&self) -> &'static Self {
        &STYLES[FRAC_NUM[self.id]]
    }

    /// Style of a fraction denominator.
    #[must_use]
    pub const fn frac_den(&self) -> &'static Self {
        &STYLES[FRAC_DEN[self.id]]
    }

    /// Cramped variant. Cramping a cramped style is the identity.
    #[must_use]
    pub const fn cramp(&self) -> &'static Self {
        &STYLES[CRAMP[self.id]]
    }

    /// Text or display variant of this style, keeping the cramped flag.
    #[must_use]
    pub const fn text(&self) -> &'static Self {
        &STYLES[TEXT_LOOKUP[self.id]]
    }

    /// True for script and scriptscript, which use the reduced spacing table.
    #[must_use]
    pub const fn is_tight(&self) -> bool {
        self.size >= 2
    }

    /// Scale of this style relative to text style at the same font size.
    /// Depends on the size tier only.
    #[must_use]
    pub const fn size_multiplier(&self) -> f64 {
        SIZE_MULTIPLIER[self.size]
    }

    /// Index of the style-metrics record for this style when no explicit
    /// font size change is in effect. Display and text share tier 0.
    #[must_use]
    pub const fn metrics_tier(&self) -> usize {
        match self.size {
            0 | 1 => 0,
            2 => 1,
            _ => 2,
        }
    }

    /// Look a style up by id, `None` outside 0..8.
    #[must_use]
    pub const fn from_id(id: usize) -> Option<&'static Self> {
        if id < STYLES.len() {
            Some(&STYLES[id])
        } else {
            None
        }
    }
}

// ids
const D: usize = 0;
const DC: usize = 1;
const T: usize = 2;
const TC: usize = 3;
const S: usize = 4;
const SC: usize = 5;
const SS: usize = 6;
const SSC: usize = 7;

const STYLES: [Mathstyle; 8] = [
    Mathstyle::new(D, 0, false),
    Mathstyle::new(DC, 0, true),
    Mathstyle::new(T, 1, false),
    Mathstyle::new(TC, 1, true),
    Mathstyle::new(S, 2, false),
    Mathstyle::new(SC, 2, true),
    Mathstyle::new(SS, 3, false),
    Mathstyle::new(SSC, 3, true),
];

const SUP: [usize; 8] = [S, SC, S, SC, SS, SSC, SS, SSC];
const SUB: [usize; 8] = [SC, SC, SC, SC, SSC, SSC, SSC, SSC];
const FRAC_NUM: [usize; 8] = [T, TC, S, SC, SS, SSC, SS, SSC];
const FRAC_DEN: [usize; 8] = [TC, TC, SC, SC, SSC, SSC, SSC, SSC];
const CRAMP: [usize; 8] = [DC, DC, TC, TC, SC, SC, SSC, SSC];
const TEXT_LOOKUP: [usize; 8] = [D, DC, T, TC, T, TC, T, TC];

const SIZE_MULTIPLIER: [f64; 4] = [1.0, 1.0, 0.7, 0.5];

/// `\displaystyle`, the style of top-level display math.
pub const DISPLAY: &Mathstyle = &STYLES[D];
/// Cramped display style, used for the denominator of display fractions.
pub const DISPLAY_CRAMPED: &Mathstyle = &STYLES[DC];
/// `\textstyle`, the style of inline math.
pub const TEXT: &Mathstyle = &STYLES[T];
/// Cramped text style.
pub const TEXT_CRAMPED: &Mathstyle = &STYLES[TC];
/// `\scriptstyle`, first level of scripts.
pub const SCRIPT: &Mathstyle = &STYLES[S];
/// Cramped script style, the style of subscripts in text.
pub const SCRIPT_CRAMPED: &Mathstyle = &STYLES[SC];
/// `\scriptscriptstyle`, the bottom of the ladder.
pub const SCRIPTSCRIPT: &Mathstyle = &STYLES[SS];
/// Cramped scriptscript style.
pub const SCRIPTSCRIPT_CRAMPED: &Mathstyle = &STYLES[SSC];

/// All eight styles in id order.
pub const ALL_STYLES: &[Mathstyle; 8] = &STYLES;
