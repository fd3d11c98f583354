//! The box tree
//!
//! A [`Span`] is the single output node type of the layout engine: either a
//! glyph leaf or an ordered list of children, always carrying its exact
//! height, depth, width, italic correction and skew in ems. Renderers read
//! the dimensions, the class list and the [`StyleBag`]; nothing else.

use bon::bon;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::context::Context;
use crate::font_metrics::FontId;
use crate::types::{StyleBag, StyleProperty};

/// Atom class carried by a box for the benefit of its hlist neighbours.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpanType {
    /// Ordinary symbol
    Mord,
    /// Large operator
    Mop,
    /// Binary operator
    Mbin,
    /// Relation
    Mrel,
    /// Opening fence
    Mopen,
    /// Closing fence
    Mclose,
    /// Punctuation
    Mpunct,
    /// Inner formula (fractions, fenced groups)
    Minner,
}

/// What a span holds.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpanBody {
    /// Nothing: struts, kerns, rules and sentinels
    #[default]
    Empty,
    /// A run of text drawn in one font
    Glyph {
        /// The characters
        text: String,
        /// Font they are measured and drawn in
        font: FontId,
    },
    /// Child spans laid out left to right, or stacked when the span is a vlist
    Children(Vec<Span>),
}

/// A sized layout node.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// Spacing class, if any
    pub span_type: Option<SpanType>,
    /// Renderer classes
    pub classes: Vec<String>,
    /// Content
    pub body: SpanBody,
    /// Extent above the baseline
    pub height: f64,
    /// Extent below the baseline
    pub depth: f64,
    /// Horizontal extent
    pub width: f64,
    /// Italic correction
    pub italic: f64,
    /// Horizontal accent offset
    pub skew: f64,
    /// Largest font size multiplier in the subtree
    pub max_font_size: f64,
    /// Presentation properties
    pub style: StyleBag,
}

#[bon]
impl Span {
    /// A span sized from its children: height and depth are the maxima of the
    /// children's, width is their sum including margins.
    #[builder]
    pub fn new<'c, 'p>(
        #[builder(finish_fn)] ctx: Option<&'c Context<'p>>,
        children: Option<Vec<Self>>,
        span_type: Option<SpanType>,
        classes: Option<Vec<String>>,
        style: Option<StyleBag>,
    ) -> Self {
        let mut span = Self {
            span_type,
            classes: classes.unwrap_or_default(),
            body: children.map_or(SpanBody::Empty, SpanBody::Children),
            style: style.unwrap_or_default(),
            ..Self::default()
        };
        span.size_from_children();
        if let Some(ctx) = ctx {
            span.init_from_context(ctx);
        }
        span
    }
}

impl Span {
    /// A glyph leaf.
    #[must_use]
    pub fn glyph(text: impl Into<String>, font: FontId) -> Self {
        Self {
            body: SpanBody::Glyph {
                text: text.into(),
                font,
            },
            ..Self::default()
        }
    }

    /// Horizontal glue of the given width.
    #[must_use]
    pub fn kern(width: f64) -> Self {
        let mut style = StyleBag::default();
        style.insert(StyleProperty::MarginRight, width);
        Self {
            classes: vec!["mspace".to_owned()],
            width,
            style,
            ..Self::default()
        }
    }

    /// An invisible box of the given vertical extent.
    #[must_use]
    pub fn strut(height: f64, depth: f64) -> Self {
        let mut style = StyleBag::default();
        style.insert(StyleProperty::Height, height + depth);
        Self {
            classes: vec!["strut".to_owned()],
            height,
            depth,
            style,
            ..Self::default()
        }
    }

    /// Tag the span with the mathstyle and color of `ctx`.
    pub fn init_from_context(&mut self, ctx: &Context<'_>) {
        if ctx.style.is_tight() && !self.has_class("mtight") {
            self.classes.push("mtight".to_owned());
        }
        if let Some(color) = ctx.get_color() {
            self.style.insert(StyleProperty::Color, color);
        }
    }

    /// Recompute height, depth, width and font size from the children.
    pub fn size_from_children(&mut self) {
        let mut height: f64 = 0.0;
        let mut depth: f64 = 0.0;
        let mut width = 0.0;
        let mut max_font_size: f64 = 0.0;
        for child in self.children() {
            height = height.max(child.height);
            depth = depth.max(child.depth);
            max_font_size = max_font_size.max(child.max_font_size);
            width += child.outer_width();
        }
        self.height = height;
        self.depth = depth;
        self.width = width;
        self.max_font_size = max_font_size;
    }

    /// Width plus horizontal margins.
    #[must_use]
    pub fn outer_width(&self) -> f64 {
        // kerns store their width as a margin
        if self.has_class("mspace") {
            return self.width;
        }
        self.width
            + self.style.em(StyleProperty::MarginLeft).unwrap_or(0.0)
            + self.style.em(StyleProperty::MarginRight).unwrap_or(0.0)
    }

    /// The children, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.body {
            SpanBody::Children(children) => children,
            SpanBody::Empty | SpanBody::Glyph { .. } => &[],
        }
    }

    /// Mutable access to the children, `None` for leaves.
    pub const fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        match &mut self.body {
            SpanBody::Children(children) => Some(children),
            SpanBody::Empty | SpanBody::Glyph { .. } => None,
        }
    }

    /// The text of a glyph leaf.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            SpanBody::Glyph { text, .. } => Some(text),
            SpanBody::Empty | SpanBody::Children(_) => None,
        }
    }

    /// Whether the span carries the given class.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|cls| cls == class_name)
    }

    /// Whether the span is horizontal glue.
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.has_class("mspace")
    }

    /// Change the spacing class, keeping the leading class name in step.
    pub fn set_type(&mut self, span_type: SpanType) {
        let name = span_type.as_ref().to_owned();
        match self.span_type {
            Some(old) => {
                if let Some(cls) = self.classes.iter_mut().find(|cls| *cls == old.as_ref()) {
                    *cls = name;
                } else {
                    self.classes.insert(0, name);
                }
            }
            None => self.classes.insert(0, name),
        }
        self.span_type = Some(span_type);
    }

    /// Scale the extent, used when a box built at one size is placed in a
    /// context of another.
    pub fn rescale(&mut self, ratio: f64) {
        self.height *= ratio;
        self.depth *= ratio;
        self.width *= ratio;
    }

    /// Preorder walk over the span and all its descendants.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Self> {
        let mut out = vec![];
        let mut stack = vec![self];
        while let Some(span) = stack.pop() {
            out.push(span);
            stack.extend(span.children().iter().rev());
        }
        out
    }
}
