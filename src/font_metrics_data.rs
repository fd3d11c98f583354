//! Compiled-in font metric data
//!
//! Per-glyph metrics for the fonts the layout engine reaches for, and the
//! three style-metrics records (text, script, scriptscript) with the sigma and
//! xi parameters of the TeX math fonts. Glyph entries hold
//! `[depth, height, italic, skew, width]` in em.

use phf::{Map, phf_map};

use crate::font_metrics::FontId;

/// Metrics of a single glyph, in em.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharacterMetrics {
    /// Depth below the baseline
    pub depth: f64,
    /// Height above the baseline
    pub height: f64,
    /// Italic correction
    pub italic: f64,
    /// Accent skew
    pub skew: f64,
    /// Advance width
    pub width: f64,
}

impl CharacterMetrics {
    /// Build a record from the `[depth, height, italic, skew, width]` layout.
    #[must_use]
    pub const fn new(depth: f64, height: f64, italic: f64, skew: f64, width: f64) -> Self {
        Self {
            depth,
            height,
            italic,
            skew,
            width,
        }
    }

    /// The record substituted for glyphs no table knows about.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0);
}

/// Font-wide layout parameters for one size tier.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub slant: f64,
    pub x_height: f64,
    pub quad: f64,
    pub num1: f64,
    pub num2: f64,
    pub num3: f64,
    pub denom1: f64,
    pub denom2: f64,
    pub sup1: f64,
    pub sup2: f64,
    pub sup3: f64,
    pub sub1: f64,
    pub sub2: f64,
    pub sup_drop: f64,
    pub sub_drop: f64,
    pub delim1: f64,
    pub delim2: f64,
    pub axis_height: f64,
    pub default_rule_thickness: f64,
    pub big_op_spacing1: f64,
    pub big_op_spacing2: f64,
    pub big_op_spacing3: f64,
    pub big_op_spacing4: f64,
    pub big_op_spacing5: f64,
    pub sqrt_rule_thickness: f64,
    pub pt_per_em: f64,
    pub double_rule_sep: f64,
    pub array_rule_width: f64,
    pub fboxsep: f64,
    pub fboxrule: f64,
    /// `\arraycolsep`, 5pt
    pub arraycolsep: f64,
    /// `\baselineskip`, 12pt
    pub baselineskip: f64,
    /// `\jot`, 3pt
    pub jot: f64,
    /// One math unit, `quad / 18`
    pub css_em_per_mu: f64,
}

#[allow(clippy::too_many_arguments)]
const fn tier(
    quad: f64,
    num: [f64; 3],
    denom: [f64; 2],
    sup: [f64; 3],
    sub: [f64; 2],
    drops: [f64; 2],
    delim: [f64; 2],
    rule: f64,
    big_op: [f64; 5],
) -> FontMetrics {
    FontMetrics {
        slant: 0.25,
        x_height: 0.431,
        quad,
        num1: num[0],
        num2: num[1],
        num3: num[2],
        denom1: denom[0],
        denom2: denom[1],
        sup1: sup[0],
        sup2: sup[1],
        sup3: sup[2],
        sub1: sub[0],
        sub2: sub[1],
        sup_drop: drops[0],
        sub_drop: drops[1],
        delim1: delim[0],
        delim2: delim[1],
        axis_height: 0.25,
        default_rule_thickness: rule,
        big_op_spacing1: big_op[0],
        big_op_spacing2: big_op[1],
        big_op_spacing3: big_op[2],
        big_op_spacing4: big_op[3],
        big_op_spacing5: big_op[4],
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        array_rule_width: 0.04,
        fboxsep: 0.3,
        fboxrule: 0.04,
        arraycolsep: 0.5,
        baselineskip: 1.2,
        jot: 0.3,
        css_em_per_mu: quad / 18.0,
    }
}

/// Style metrics indexed by tier: 0 for text and display sizes, 1 for script
/// sizes, 2 for scriptscript sizes.
pub static STYLE_METRICS: [FontMetrics; 3] = [
    tier(
        1.0,
        [0.677, 0.394, 0.444],
        [0.686, 0.345],
        [0.413, 0.363, 0.289],
        [0.15, 0.247],
        [0.386, 0.05],
        [2.39, 1.01],
        0.04,
        [0.111, 0.166, 0.2, 0.6, 0.1],
    ),
    tier(
        1.171,
        [0.732, 0.384, 0.471],
        [0.752, 0.344],
        [0.503, 0.431, 0.286],
        [0.143, 0.286],
        [0.353, 0.071],
        [1.7, 1.157],
        0.049,
        [0.111, 0.166, 0.2, 0.611, 0.143],
    ),
    tier(
        1.472,
        [0.925, 0.387, 0.504],
        [1.025, 0.532],
        [0.504, 0.404, 0.294],
        [0.2, 0.4],
        [0.494, 0.1],
        [1.98, 1.42],
        0.049,
        [0.111, 0.166, 0.2, 0.611, 0.143],
    ),
];

/// Glyph table for a font, `None` for fonts without compiled-in data.
#[must_use]
pub fn glyph_table(font: FontId) -> Option<&'static Map<char, CharacterMetrics>> {
    match font {
        FontId::MainRegular => Some(&MAIN_REGULAR),
        FontId::MathItalic => Some(&MATH_ITALIC),
        FontId::Size1Regular => Some(&SIZE1_REGULAR),
        FontId::Size2Regular => Some(&SIZE2_REGULAR),
        FontId::Size3Regular => Some(&SIZE3_REGULAR),
        FontId::Size4Regular => Some(&SIZE4_REGULAR),
        FontId::AmsRegular => Some(&AMS_REGULAR),
        _ => None,
    }
}

/// Upright roman glyphs: digits, punctuation, operators and small delimiters.
static MAIN_REGULAR: Map<char, CharacterMetrics> = phf_map! {
    '!' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778),
    '(' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    ')' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    '*' => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 0.5),
    '+' => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    ',' => CharacterMetrics::new(0.19444, 0.10556, 0.0, 0.0, 0.27778),
    '-' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.33333),
    '.' => CharacterMetrics::new(0.0, 0.10556, 0.0, 0.0, 0.27778),
    '/' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    '0' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '1' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '2' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '3' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '4' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '5' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '6' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '7' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '8' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    '9' => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    ':' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.27778),
    ';' => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.27778),
    '<' => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '=' => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 0.77778),
    '>' => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '?' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.47222),
    'A' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    'B' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.70834),
    'C' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222),
    'D' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.76389),
    'E' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.68056),
    'F' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.65278),
    'G' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.78472),
    'H' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    'I' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.36111),
    'J' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.51389),
    'K' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778),
    'L' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.625),
    'M' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.91667),
    'N' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    'O' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778),
    'P' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.68056),
    'Q' => CharacterMetrics::new(0.19444, 0.68333, 0.0, 0.0, 0.77778),
    'R' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.73611),
    'S' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.55556),
    'T' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222),
    'U' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    'V' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    'W' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 1.02778),
    'X' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    'Y' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    'Z' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.61111),
    '[' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    '\\' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    ']' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    '^' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    '`' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    'a' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5),
    'b' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'c' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445),
    'd' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'e' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445),
    'f' => CharacterMetrics::new(0.0, 0.69444, 0.07778, 0.0, 0.30556),
    'g' => CharacterMetrics::new(0.19444, 0.43056, 0.01389, 0.0, 0.5),
    'h' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'i' => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.27778),
    'j' => CharacterMetrics::new(0.19444, 0.66786, 0.0, 0.0, 0.30556),
    'k' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.52778),
    'l' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778),
    'm' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.83334),
    'n' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556),
    'o' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5),
    'p' => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.55556),
    'q' => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.52778),
    'r' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39167),
    's' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39445),
    't' => CharacterMetrics::new(0.0, 0.61508, 0.0, 0.0, 0.38889),
    'u' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556),
    'v' => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.52778),
    'w' => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.72222),
    'x' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.52778),
    'y' => CharacterMetrics::new(0.19444, 0.43056, 0.01389, 0.0, 0.52778),
    'z' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445),
    '{' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    '|' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    '}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    '~' => CharacterMetrics::new(0.35, 0.31786, 0.0, 0.0, 0.5),
    '\u{2016}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2032}' => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.275),
    '\u{20d7}' => CharacterMetrics::new(0.0, 0.71444, 0.15382, 0.0, 0.5),
    '\u{2190}' => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{2191}' => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5),
    '\u{2192}' => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{2193}' => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5),
    '\u{2195}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{21d1}' => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.61111),
    '\u{21d3}' => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.61111),
    '\u{21d5}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.61111),
    '\u{2211}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 1.05556),
    '\u{2212}' => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{221a}' => CharacterMetrics::new(0.2, 0.8, 0.0, 0.0, 0.83334),
    '\u{2223}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    '\u{2225}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2264}' => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2265}' => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{22c5}' => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.27778),
    '\u{2308}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{2309}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{230a}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{230b}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{23b0}' => CharacterMetrics::new(0.24402, 0.74402, 0.0, 0.0, 0.41667),
    '\u{23b1}' => CharacterMetrics::new(0.24402, 0.74402, 0.0, 0.0, 0.41667),
    '\u{27e8}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    '\u{27e9}' => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    '\u{27ee}' => CharacterMetrics::new(0.24402, 0.74402, 0.0, 0.0, 0.41667),
    '\u{27ef}' => CharacterMetrics::new(0.24402, 0.74402, 0.0, 0.0, 0.41667),
    '\u{2c6}' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{2c7}' => CharacterMetrics::new(0.0, 0.62847, 0.0, 0.0, 0.5),
    '\u{2d8}' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{2d9}' => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.27778),
    '\u{2dc}' => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.5),
    '\u{a8}' => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.5),
    '\u{af}' => CharacterMetrics::new(0.0, 0.56778, 0.0, 0.0, 0.5),
    '\u{b4}' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{d7}' => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{f7}' => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
};

/// Italic letters used for math variables.
static MATH_ITALIC: Map<char, CharacterMetrics> = phf_map! {
    'A' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.75),
    'B' => CharacterMetrics::new(0.0, 0.68333, 0.05017, 0.08334, 0.75851),
    'C' => CharacterMetrics::new(0.0, 0.68333, 0.07153, 0.08334, 0.71472),
    'D' => CharacterMetrics::new(0.0, 0.68333, 0.02778, 0.05556, 0.82792),
    'E' => CharacterMetrics::new(0.0, 0.68333, 0.05764, 0.08334, 0.7382),
    'F' => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.08334, 0.64306),
    'G' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.78625),
    'H' => CharacterMetrics::new(0.0, 0.68333, 0.08125, 0.05556, 0.83125),
    'I' => CharacterMetrics::new(0.0, 0.68333, 0.07847, 0.11111, 0.43958),
    'J' => CharacterMetrics::new(0.0, 0.68333, 0.09618, 0.16667, 0.55451),
    'K' => CharacterMetrics::new(0.0, 0.68333, 0.07153, 0.05556, 0.84931),
    'L' => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.02778, 0.68056),
    'M' => CharacterMetrics::new(0.0, 0.68333, 0.10903, 0.08334, 0.97014),
    'N' => CharacterMetrics::new(0.0, 0.68333, 0.10903, 0.08334, 0.80347),
    'O' => CharacterMetrics::new(0.0, 0.68333, 0.02778, 0.08334, 0.76278),
    'P' => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.08334, 0.64201),
    'Q' => CharacterMetrics::new(0.19444, 0.68333, 0.0, 0.08334, 0.79056),
    'R' => CharacterMetrics::new(0.0, 0.68333, 0.00773, 0.08334, 0.75929),
    'S' => CharacterMetrics::new(0.0, 0.68333, 0.05764, 0.08334, 0.6132),
    'T' => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.08334, 0.58438),
    'U' => CharacterMetrics::new(0.0, 0.68333, 0.10903, 0.02778, 0.68278),
    'V' => CharacterMetrics::new(0.0, 0.68333, 0.22222, 0.0, 0.58333),
    'W' => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.0, 0.94445),
    'X' => CharacterMetrics::new(0.0, 0.68333, 0.07847, 0.08334, 0.82847),
    'Y' => CharacterMetrics::new(0.0, 0.68333, 0.22222, 0.0, 0.58056),
    'Z' => CharacterMetrics::new(0.0, 0.68333, 0.07153, 0.08334, 0.68264),
    'a' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.52859),
    'b' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.42917),
    'c' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.43276),
    'd' => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.16667, 0.52049),
    'e' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.46563),
    'f' => CharacterMetrics::new(0.19444, 0.69444, 0.10764, 0.16667, 0.48959),
    'g' => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.02778, 0.47697),
    'h' => CharacterMetrics::new(0.0, 0.69444, 0.0, -0.02778, 0.57616),
    'i' => CharacterMetrics::new(0.0, 0.65952, 0.0, 0.05556, 0.34451),
    'j' => CharacterMetrics::new(0.19444, 0.65952, 0.05724, 0.0, 0.41181),
    'k' => CharacterMetrics::new(0.0, 0.69444, 0.03148, 0.0, 0.5206),
    'l' => CharacterMetrics::new(0.0, 0.69444, 0.01968, 0.08334, 0.29838),
    'm' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.87801),
    'n' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.60023),
    'o' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.48472),
    'p' => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.50313),
    'q' => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.08334, 0.44641),
    'r' => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.45116),
    's' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.46875),
    't' => CharacterMetrics::new(0.0, 0.61508, 0.0, 0.08334, 0.36111),
    'u' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.57246),
    'v' => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.02778, 0.48472),
    'w' => CharacterMetrics::new(0.0, 0.43056, 0.02691, 0.08334, 0.71592),
    'x' => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.57153),
    'y' => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.05556, 0.49028),
    'z' => CharacterMetrics::new(0.0, 0.43056, 0.04398, 0.05556, 0.46505),
    '\u{3b1}' => CharacterMetrics::new(0.0, 0.43056, 0.0037, 0.02778, 0.6397),
    '\u{3b2}' => CharacterMetrics::new(0.19444, 0.69444, 0.05278, 0.08334, 0.56563),
    '\u{3b8}' => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.08334, 0.46944),
    '\u{3c0}' => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.0, 0.57031),
};

/// First enlarged delimiter size, also the text-style big operators.
static SIZE1_REGULAR: Map<char, CharacterMetrics> = phf_map! {
    '(' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.45834),
    ')' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.45834),
    '/' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.57778),
    '[' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.41667),
    '\\' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.57778),
    ']' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.41667),
    '{' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.58334),
    '}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.58334),
    '\u{2016}' => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.77778),
    '\u{2191}' => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.66667),
    '\u{2193}' => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.66667),
    '\u{21d1}' => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.77778),
    '\u{21d3}' => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.77778),
    '\u{220f}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.94445),
    '\u{2210}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.94445),
    '\u{2211}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 1.05556),
    '\u{221a}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 1.0),
    '\u{2223}' => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.22222),
    '\u{2225}' => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.38889),
    '\u{222b}' => CharacterMetrics::new(0.30612, 0.805, 0.19445, 0.0, 0.47222),
    '\u{22c0}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22c1}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22c2}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22c3}' => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{2308}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{2309}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{230a}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{230b}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{23d0}' => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.66667),
    '\u{27e8}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{27e9}' => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
};

/// Second enlarged delimiter size and display-style big operators.
static SIZE2_REGULAR: Map<char, CharacterMetrics> = phf_map! {
    '(' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.59722),
    ')' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.59722),
    '/' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.81111),
    '[' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.47222),
    '\\' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.81111),
    ']' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.47222),
    '{' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.66667),
    '}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.66667),
    '\u{220f}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.27778),
    '\u{2210}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.27778),
    '\u{2211}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.44445),
    '\u{221a}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 1.0),
    '\u{222b}' => CharacterMetrics::new(0.86225, 1.36, 0.44445, 0.0, 0.55556),
    '\u{22c0}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.11111),
    '\u{22c1}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.11111),
    '\u{22c2}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.11111),
    '\u{22c3}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.11111),
    '\u{2308}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{2309}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{230a}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{230b}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{27e8}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.61111),
    '\u{27e9}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.61111),
};

static SIZE3_REGULAR: Map<char, CharacterMetrics> = phf_map! {
    '(' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.73611),
    ')' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.73611),
    '/' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.04445),
    '[' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.52778),
    '\\' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.04445),
    ']' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.52778),
    '{' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
    '}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
    '\u{221a}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.0),
    '\u{2308}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{2309}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{230a}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{230b}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{27e8}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
    '\u{27e9}' => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
};

/// Largest delimiter size plus the extension pieces for stacked delimiters.
static SIZE4_REGULAR: Map<char, CharacterMetrics> = phf_map! {
    '(' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.79167),
    ')' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.79167),
    '/' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 1.27778),
    '[' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.58334),
    '\\' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 1.27778),
    ']' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.58334),
    '{' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '\u{221a}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 1.0),
    '\u{2308}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{2309}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{230a}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{230b}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{239b}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{239c}' => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.875),
    '\u{239d}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{239e}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{239f}' => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.875),
    '\u{23a0}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.875),
    '\u{23a1}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23a2}' => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.66667),
    '\u{23a3}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23a4}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23a5}' => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.66667),
    '\u{23a6}' => CharacterMetrics::new(0.64502, 1.155, 0.0, 0.0, 0.66667),
    '\u{23a7}' => CharacterMetrics::new(1e-05, 0.9, 0.0, 0.0, 0.88889),
    '\u{23a8}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.88889),
    '\u{23a9}' => CharacterMetrics::new(0.90001, 0.0, 0.0, 0.0, 0.88889),
    '\u{23aa}' => CharacterMetrics::new(0.0, 0.3, 0.0, 0.0, 0.88889),
    '\u{23ab}' => CharacterMetrics::new(1e-05, 0.9, 0.0, 0.0, 0.88889),
    '\u{23ac}' => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.88889),
    '\u{23ad}' => CharacterMetrics::new(0.90001, 0.0, 0.0, 0.0, 0.88889),
    '\u{23b7}' => CharacterMetrics::new(0.88502, 0.915, 0.0, 0.0, 1.05556),
    '\u{27e8}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '\u{27e9}' => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '\u{e000}' => CharacterMetrics::new(-0.00499, 0.605, 0.0, 0.0, 1.05556),
    '\u{e001}' => CharacterMetrics::new(-0.00499, 0.605, 0.0, 0.0, 1.05556),
};

static AMS_REGULAR: Map<char, CharacterMetrics> = phf_map! {
    '\u{2272}' => CharacterMetrics::new(0.22958, 0.72958, 0.0, 0.0, 0.77778),
    '\u{25b3}' => CharacterMetrics::new(0.0, 0.69224, 0.0, 0.0, 0.72222),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_em_per_mu() {
        for metrics in &STYLE_METRICS {
            assert!((metrics.css_em_per_mu * 18.0 - metrics.quad).abs() < 1e-12);
        }
    }

    #[test]
    fn test_delimiter_sizes_grow() {
        let heights: Vec<f64> = [
            FontId::MainRegular,
            FontId::Size1Regular,
            FontId::Size2Regular,
            FontId::Size3Regular,
            FontId::Size4Regular,
        ]
        .into_iter()
        .map(|font| {
            let m = glyph_table(font).unwrap().get(&'(').unwrap();
            m.height + m.depth
        })
        .collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]), "{heights:?}");
    }

    #[test]
    fn test_fonts_without_data() {
        assert!(glyph_table(FontId::MainBold).is_none());
    }
}
