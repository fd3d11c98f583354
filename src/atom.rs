//! The input tree
//!
//! An [`Atom`] is one semantic unit of a formula as produced by an upstream
//! parser. The variant set is closed: adding a kind of atom means extending
//! [`AtomKind`] and the dispatcher's `match`, which the compiler checks for
//! exhaustiveness.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::font_metrics::FontFamily;
use crate::span::SpanType;
use crate::style::{DISPLAY, Mathstyle, SCRIPT, SCRIPTSCRIPT, TEXT};
use crate::units::Measurement;

/// Whether an atom is math or running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Math mode
    #[default]
    Math,
    /// Text mode
    Text,
}

/// A mathstyle as named by the author (`\displaystyle` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum StyleLevel {
    Display,
    Text,
    Script,
    Scriptscript,
}

impl StyleLevel {
    /// The uncramped style of this level.
    #[must_use]
    pub const fn mathstyle(self) -> &'static Mathstyle {
        match self {
            Self::Display => DISPLAY,
            Self::Text => TEXT,
            Self::Script => SCRIPT,
            Self::Scriptscript => SCRIPTSCRIPT,
        }
    }
}

/// Overrides an atom applies to itself and its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtomStyle {
    /// Foreground color
    pub color: Option<String>,
    /// Background color
    pub background_color: Option<String>,
    /// Font family
    pub font_family: Option<FontFamily>,
}

impl AtomStyle {
    /// Whether no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.color.is_none() && self.background_color.is_none() && self.font_family.is_none()
    }
}

/// Limit placement of a large operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Limits {
    /// Above and below in display style, as scripts otherwise
    #[default]
    Auto,
    /// Always above and below
    Limits,
    /// Always as scripts
    NoLimits,
}

/// The nucleus of a large operator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OpBody {
    /// A symbol such as `\sum`, enlarged in display style
    Symbol(String),
    /// A named operator such as `\sin`, set upright
    Name(String),
    /// Arbitrary material (`\operatorname*{...}`, `\mathop{...}`)
    Group(Vec<Atom>),
}

/// Which side of the body a line or annotation sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum LinePosition {
    Over,
    Under,
}

/// Horizontal alignment of an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverlapAlign {
    /// `\llap`: the body extends to the left
    Left,
    /// `\rlap`: the body extends to the right
    Right,
    /// `\clap`: the body is centered
    Center,
}

/// Which dimensions of a phantom are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PhantomKind {
    /// `\phantom`: everything
    #[default]
    Full,
    /// `\hphantom`: width only
    Horizontal,
    /// `\vphantom`: height and depth only
    Vertical,
}

/// A decoration drawn by an enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum Notation {
    Box,
    RoundedBox,
    Circle,
    Top,
    Bottom,
    Left,
    Right,
    HorizontalStrike,
    VerticalStrike,
    UpDiagonalStrike,
    DownDiagonalStrike,
}

impl Notation {
    /// Whether the notation draws a border around the body, which then needs
    /// padding.
    #[must_use]
    pub const fn is_border(self) -> bool {
        matches!(
            self,
            Self::Box
                | Self::RoundedBox
                | Self::Circle
                | Self::Top
                | Self::Bottom
                | Self::Left
                | Self::Right
        )
    }
}

/// A `\frac`-like construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Genfrac {
    /// Upper part
    pub numer: Vec<Atom>,
    /// Lower part
    pub denom: Vec<Atom>,
    /// Whether a fraction bar is drawn
    pub has_bar_line: bool,
    /// Explicit bar thickness; the default rule thickness otherwise
    pub bar_size: Option<Measurement>,
    /// Forced style (`\dfrac`, `\tfrac`); the ambient style otherwise
    pub mathstyle: Option<StyleLevel>,
    /// `\cfrac`: numerator and denominator keep the ambient style
    pub continuous: bool,
    /// Left fence, `None` for no fence
    pub left_delim: Option<String>,
    /// Right fence, `None` for no fence
    pub right_delim: Option<String>,
}

/// One entry of an array column format.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnSpec {
    /// A content column
    Align {
        /// `l`, `c` or `r`
        align: ColumnAlign,
        /// Gap before the column; the default `arraycolsep` otherwise
        pregap: Option<f64>,
        /// Gap after the column; the default `arraycolsep` otherwise
        postgap: Option<f64>,
    },
    /// A fixed gap (`@{}` with a length)
    Gap(Measurement),
    /// A gap filled with repeated material (`@{...}`)
    Glue(Vec<Atom>),
    /// A vertical rule; `dashed` for `:`
    Separator {
        /// Draw a dashed rather than solid line
        dashed: bool,
    },
}

/// Horizontal alignment of a content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum ColumnAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A matrix or array environment.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Array {
    /// Rows of cells, each cell an atom list
    pub rows: Vec<Vec<Vec<Atom>>>,
    /// Column format; empty means one centered column per cell
    pub colspec: Vec<ColumnSpec>,
    /// Style the cells are set in; text style otherwise
    pub mathstyle: Option<StyleLevel>,
    /// Row height multiplier
    pub arraystretch: Option<f64>,
    /// Inter-column gap override (half of it on each side), in em
    pub arraycolsep: Option<f64>,
    /// Extra vertical space after each row, in em
    pub row_gaps: Vec<f64>,
    /// Horizontal rules before each row; one extra entry for after the last
    pub hlines_before_row: Vec<Vec<bool>>,
    /// Left fence
    pub left_delim: Option<String>,
    /// Right fence
    pub right_delim: Option<String>,
}

/// Class of a `\big`-family delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum DelimClass {
    Open,
    Close,
    Rel,
    #[default]
    Ord,
}

impl DelimClass {
    /// The spacing class of the resulting box.
    #[must_use]
    pub const fn span_type(self) -> SpanType {
        match self {
            Self::Open => SpanType::Mopen,
            Self::Close => SpanType::Mclose,
            Self::Rel => SpanType::Mrel,
            Self::Ord => SpanType::Mord,
        }
    }
}

/// The closed set of atom kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum AtomKind {
    /// Ordinary symbol
    Ord {
        /// The symbol
        text: String,
    },
    /// Binary operator
    Bin {
        /// The symbol
        text: String,
    },
    /// Relation
    Rel {
        /// The symbol
        text: String,
    },
    /// Opening symbol, not resizable
    Open {
        /// The symbol
        text: String,
    },
    /// Closing symbol, not resizable
    Close {
        /// The symbol
        text: String,
    },
    /// Punctuation
    Punct {
        /// The symbol
        text: String,
    },
    /// `\mathinner`
    Inner {
        /// Content
        body: Vec<Atom>,
    },
    /// Braced group, an ordinary atom
    Group {
        /// Content
        body: Vec<Atom>,
    },
    /// Large or named operator
    Op {
        /// The operator
        body: OpBody,
        /// Limit placement
        #[cfg_attr(feature = "serde", serde(default))]
        limits: Limits,
    },
    /// Fraction, binomial and friends
    Genfrac(Box<Genfrac>),
    /// Radical
    Surd {
        /// Radicand
        body: Vec<Atom>,
        /// Root index
        #[cfg_attr(feature = "serde", serde(default))]
        index: Option<Vec<Atom>>,
    },
    /// `\left ... \right`
    LeftRight {
        /// Content, possibly containing `Middle` atoms
        body: Vec<Atom>,
        /// Left fence; `None` or `"."` draws nothing
        #[cfg_attr(feature = "serde", serde(default))]
        left: Option<String>,
        /// Right fence; `None` or `"."` draws nothing
        #[cfg_attr(feature = "serde", serde(default))]
        right: Option<String>,
    },
    /// `\middle` inside a `LeftRight` body
    Middle {
        /// Delimiter name
        delim: String,
    },
    /// `\big` and friends
    SizedDelim {
        /// Delimiter name
        delim: String,
        /// Size 1..=4
        size: usize,
        /// Spacing class
        #[cfg_attr(feature = "serde", serde(default))]
        class: DelimClass,
    },
    /// Accent over a base
    Accent {
        /// Accent character
        accent: String,
        /// Base
        body: Vec<Atom>,
    },
    /// `\overline`, `\underline`
    Line {
        /// Side of the line
        position: LinePosition,
        /// Content
        body: Vec<Atom>,
    },
    /// `\overset`, `\underset`, `\stackrel`
    OverUnder {
        /// Content
        body: Vec<Atom>,
        /// Annotation above
        #[cfg_attr(feature = "serde", serde(default))]
        above: Option<Vec<Atom>>,
        /// Annotation below
        #[cfg_attr(feature = "serde", serde(default))]
        below: Option<Vec<Atom>>,
        /// Spacing class of the result; ordinary otherwise
        #[cfg_attr(feature = "serde", serde(default))]
        class: Option<SpanType>,
    },
    /// Matrix and array environments
    Array(Box<Array>),
    /// `\fbox`, `\colorbox`, `\fcolorbox`
    Box {
        /// Content
        body: Vec<Atom>,
        /// Fill color
        #[cfg_attr(feature = "serde", serde(default))]
        background: Option<String>,
        /// Frame color; no frame otherwise
        #[cfg_attr(feature = "serde", serde(default))]
        border_color: Option<String>,
        /// Draw a frame even without a frame color
        #[cfg_attr(feature = "serde", serde(default))]
        framed: bool,
    },
    /// `\enclose`, `\cancel` and friends
    Enclose {
        /// Content
        body: Vec<Atom>,
        /// Decorations
        notations: Vec<Notation>,
        /// Stroke color
        #[cfg_attr(feature = "serde", serde(default))]
        stroke_color: Option<String>,
        /// Padding; `fboxsep` otherwise
        #[cfg_attr(feature = "serde", serde(default))]
        padding: Option<Measurement>,
    },
    /// Explicit horizontal space
    Spacing {
        /// Width; negative for `\!`
        width: Measurement,
    },
    /// `\displaystyle` and friends, applied to the body
    Styling {
        /// The new style
        style: StyleLevel,
        /// Content
        body: Vec<Atom>,
    },
    /// `\tiny` .. `\Huge`, applied to the body
    Sizing {
        /// Size 1..=10
        size: usize,
        /// Content
        body: Vec<Atom>,
    },
    /// `\rule`
    Rule {
        /// Width
        width: Measurement,
        /// Height
        height: Measurement,
        /// Raise above the baseline
        #[cfg_attr(feature = "serde", serde(default))]
        shift: Option<Measurement>,
    },
    /// `\llap`, `\rlap`, `\clap`
    Overlap {
        /// Alignment
        align: OverlapAlign,
        /// Content
        body: Vec<Atom>,
    },
    /// `\phantom`, `\hphantom`, `\vphantom`
    Phantom {
        /// Kept dimensions
        #[cfg_attr(feature = "serde", serde(default))]
        kind: PhantomKind,
        /// Content
        body: Vec<Atom>,
    },
    /// Scripts without a nucleus
    Msubsup,
    /// `\color`, applying to the body in place
    Color {
        /// The color
        color: String,
        /// Content
        body: Vec<Atom>,
    },
}

/// One node of the input tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atom {
    /// What the atom is
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: AtomKind,
    /// Math or text
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: Mode,
    /// Color and font overrides
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "AtomStyle::is_empty"))]
    pub style: AtomStyle,
    /// Superscript branch
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub superscript: Option<Vec<Atom>>,
    /// Subscript branch
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub subscript: Option<Vec<Atom>>,
}

impl From<AtomKind> for Atom {
    fn from(kind: AtomKind) -> Self {
        Self::new(kind)
    }
}

impl Atom {
    /// A math-mode atom without scripts or overrides.
    #[must_use]
    pub fn new(kind: AtomKind) -> Self {
        Self {
            kind,
            mode: Mode::Math,
            style: AtomStyle::default(),
            superscript: None,
            subscript: None,
        }
    }

    /// An ordinary symbol.
    #[must_use]
    pub fn ord(text: impl Into<String>) -> Self {
        Self::new(AtomKind::Ord { text: text.into() })
    }

    /// A binary operator.
    #[must_use]
    pub fn bin(text: impl Into<String>) -> Self {
        Self::new(AtomKind::Bin { text: text.into() })
    }

    /// A relation.
    #[must_use]
    pub fn rel(text: impl Into<String>) -> Self {
        Self::new(AtomKind::Rel { text: text.into() })
    }

    /// Attach a superscript.
    #[must_use]
    pub fn with_sup(mut self, sup: Vec<Self>) -> Self {
        self.superscript = Some(sup);
        self
    }

    /// Attach a subscript.
    #[must_use]
    pub fn with_sub(mut self, sub: Vec<Self>) -> Self {
        self.subscript = Some(sub);
        self
    }

    /// Set the mode.
    #[must_use]
    pub const fn in_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the style overrides.
    #[must_use]
    pub fn with_style(mut self, style: AtomStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether the atom carries a superscript or subscript.
    #[must_use]
    pub const fn has_scripts(&self) -> bool {
        self.superscript.is_some() || self.subscript.is_some()
    }

    /// The symbol of a single-symbol atom.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match &self.kind {
            AtomKind::Ord { text }
            | AtomKind::Bin { text }
            | AtomKind::Rel { text }
            | AtomKind::Open { text }
            | AtomKind::Close { text }
            | AtomKind::Punct { text } => Some(text),
            _ => None,
        }
    }

    /// Whether the atom is a single symbol, possibly wrapped in groups, with
    /// no scripts. Only such nuclei get TeX's "character box" treatment.
    #[must_use]
    pub fn is_character_box(&self) -> bool {
        !self.has_scripts() && self.has_character_nucleus()
    }

    /// Whether the atom, ignoring its own scripts, is a character box.
    #[must_use]
    pub fn has_character_nucleus(&self) -> bool {
        match &self.kind {
            AtomKind::Group { body } => {
                matches!(body.as_slice(), [only] if only.is_character_box())
            }
            _ => self.symbol().is_some_and(|text| text.chars().count() == 1),
        }
    }
}
