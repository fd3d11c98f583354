//! Box construction helpers shared by every builder
//!
//! Leaf glyphs, rules, glue and the vertical-list algorithm live here. The
//! horizontal-list algorithm (spacing and binary-operator retyping) lives in
//! [`crate::decompose`], next to the dispatcher that feeds it.

use crate::atom::Mode;
use crate::context::Context;
use crate::font_metrics::FontId;
use crate::span::{Span, SpanType};
use crate::types::{StyleBag, StyleProperty};
use crate::units::{Measurement, calculate_size};

/// Width of `\nulldelimiterspace` at `\normalsize`.
pub const NULL_DELIMITER_SPACE: f64 = 0.12;

/// Create a span with the given classes and children, sized from them.
#[must_use]
pub fn make_span(classes: Vec<String>, children: Vec<Span>, ctx: Option<&Context<'_>>) -> Span {
    Span::builder().classes(classes).children(children).build(ctx)
}

/// Create a typed span, the class tag also recorded as a renderer class.
#[must_use]
pub fn make_typed_span(
    span_type: SpanType,
    mut classes: Vec<String>,
    children: Vec<Span>,
    ctx: &Context<'_>,
) -> Span {
    classes.insert(0, span_type.as_ref().to_owned());
    Span::builder()
        .span_type(span_type)
        .classes(classes)
        .children(children)
        .build(Some(ctx))
}

/// Measure `text` in `font` and build a glyph leaf for it.
///
/// Multi-character runs (operator names) take the maximum height and depth,
/// the summed width and the italic correction of the last character. Text
/// mode drops the italic correction.
#[must_use]
pub fn make_symbol(
    text: &str,
    font: FontId,
    mode: Mode,
    ctx: &Context<'_>,
    classes: Vec<String>,
) -> Span {
    let mut span = Span::glyph(text, font);
    let mut height = f64::NEG_INFINITY;
    let mut depth = f64::NEG_INFINITY;
    let mut width = 0.0;
    let mut italic = 0.0;
    let mut skew = 0.0;
    for ch in text.chars() {
        let metrics = ctx.character_metrics(ch, font);
        height = height.max(metrics.height);
        depth = depth.max(metrics.depth);
        width += metrics.width;
        italic = metrics.italic;
        skew = metrics.skew;
    }
    // glyphs such as `=` sit above the baseline; boxes never report
    // negative extents
    span.height = height.max(0.0);
    span.depth = depth.max(0.0);
    span.width = width;
    span.italic = if mode == Mode::Text { 0.0 } else { italic };
    span.skew = skew;
    span.classes = classes;
    span.max_font_size = ctx.size_multiplier;
    span.init_from_context(ctx);
    span
}

/// Horizontal glue for an explicit length.
#[must_use]
pub fn make_glue(measurement: &Measurement, ctx: &Context<'_>) -> Span {
    Span::kern(calculate_size(measurement, ctx))
}

/// A horizontal rule at least as thick as the configured minimum.
#[must_use]
pub fn make_line_span(class_name: &str, ctx: &Context<'_>, thickness: Option<f64>) -> Span {
    let mut line = make_span(vec![class_name.to_owned()], vec![], Some(ctx));
    let thickness = thickness.unwrap_or(ctx.metrics().default_rule_thickness);
    line.height = thickness.max(ctx.min_rule_thickness);
    line.style.insert(StyleProperty::BorderBottomWidth, line.height);
    line.max_font_size = 1.0;
    line
}

/// Empty space standing in for an omitted fence.
#[must_use]
pub fn make_null_delimiter(ctx: &Context<'_>, classes: Vec<String>) -> Span {
    let mut all = ctx.base_sizing_classes();
    all.push("nulldelimiter".to_owned());
    all.extend(classes);
    let mut span = make_span(all, vec![], Some(ctx));
    span.width = NULL_DELIMITER_SPACE / ctx.size_multiplier;
    span
}

/// Element of a vertical list.
#[derive(Debug, bon::Builder)]
pub struct VListElem {
    /// The box
    pub elem: Span,
    /// Horizontal offset before the box
    pub margin_left: Option<f64>,
    /// Horizontal offset after the box
    pub margin_right: Option<f64>,
    /// Classes for the row wrapper
    pub wrapper_classes: Option<Vec<String>>,
    /// Style for the row wrapper
    pub wrapper_style: Option<StyleBag>,
}

/// Vertical glue between two elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VListKern {
    /// Size of the kern
    pub size: f64,
}

impl From<f64> for VListKern {
    fn from(size: f64) -> Self {
        Self { size }
    }
}

/// One entry of a vertical list, bottom first.
#[derive(Debug)]
pub enum VListChild {
    /// A box
    Elem(Box<VListElem>),
    /// Glue
    Kern(VListKern),
}

impl VListChild {
    /// A box with no margins or wrapper.
    #[must_use]
    pub fn elem(elem: Span) -> Self {
        VListElem::builder().elem(elem).build().into()
    }

    /// Glue of the given size.
    #[must_use]
    pub const fn kern(size: f64) -> Self {
        Self::Kern(VListKern { size })
    }

    fn size(&self) -> f64 {
        match self {
            Self::Kern(kern) => kern.size,
            Self::Elem(elem) => elem.elem.height + elem.elem.depth,
        }
    }
}

impl From<VListElem> for VListChild {
    fn from(elem: VListElem) -> Self {
        Self::Elem(Box::new(elem))
    }
}

/// Element positioned by its own downward shift.
#[derive(Debug, bon::Builder)]
pub struct VListElemAndShift {
    /// The box
    pub elem: Span,
    /// Downward shift of the box's baseline from the list's baseline
    pub shift: f64,
    /// Horizontal offset before the box
    pub margin_left: Option<f64>,
    /// Horizontal offset after the box
    pub margin_right: Option<f64>,
    /// Classes for the row wrapper
    pub wrapper_classes: Option<Vec<String>>,
    /// Style for the row wrapper
    pub wrapper_style: Option<StyleBag>,
}

/// How a vertical list establishes its baseline.
#[derive(Debug)]
pub enum VListParam {
    /// Every element carries its own shift
    IndividualShift {
        /// Elements, bottom first
        children: Vec<VListElemAndShift>,
    },
    /// The top of the list sits `amount` above the baseline
    Top {
        /// Height of the top edge
        amount: f64,
        /// Elements, bottom first
        children: Vec<VListChild>,
    },
    /// The bottom of the list sits `amount` below the baseline
    Bottom {
        /// Depth of the bottom edge
        amount: f64,
        /// Elements, bottom first
        children: Vec<VListChild>,
    },
    /// The first element's baseline is shifted down by `amount`
    Shift {
        /// Downward shift of the first element
        amount: f64,
        /// Elements, bottom first
        children: Vec<VListChild>,
    },
    /// The first element sits on the baseline
    FirstBaseline {
        /// Elements, bottom first
        children: Vec<VListChild>,
    },
}

/// Children with kerns resolved, and the offset of the list's bottom edge.
#[derive(Debug)]
pub struct VListChildrenAndDepth {
    /// Elements and kerns, bottom first
    pub children: Vec<VListChild>,
    /// Position of the bottom edge relative to the baseline (negative below)
    pub depth: f64,
}

/// Resolve the positioning mode into plain children and a starting depth.
#[must_use]
pub fn get_v_list_children_and_depth(params: VListParam) -> VListChildrenAndDepth {
    match params {
        VListParam::IndividualShift { children: old } => {
            let Some(first) = old.first() else {
                return VListChildrenAndDepth {
                    children: vec![],
                    depth: 0.0,
                };
            };
            let depth = -first.shift - first.elem.depth;
            let mut curr_pos = depth;
            let mut children = Vec::with_capacity(old.len() * 2);
            let mut prev_size = 0.0;
            for (i, child) in old.into_iter().enumerate() {
                if i > 0 {
                    let diff = -child.shift - curr_pos - child.elem.depth;
                    children.push(VListChild::kern(diff - prev_size));
                    curr_pos += diff;
                }
                prev_size = child.elem.height + child.elem.depth;
                children.push(
                    VListElem {
                        elem: child.elem,
                        margin_left: child.margin_left,
                        margin_right: child.margin_right,
                        wrapper_classes: child.wrapper_classes,
                        wrapper_style: child.wrapper_style,
                    }
                    .into(),
                );
            }
            VListChildrenAndDepth { children, depth }
        }
        VListParam::Top { amount, children } => {
            // start at the bottom: subtract every size from the top edge
            let depth = children.iter().fold(amount, |bottom, child| bottom - child.size());
            VListChildrenAndDepth { children, depth }
        }
        VListParam::Bottom { amount, children } => VListChildrenAndDepth {
            children,
            depth: -amount,
        },
        VListParam::Shift { amount, children } => {
            let depth = first_elem_depth(&children).map_or(-amount, |d| -d - amount);
            VListChildrenAndDepth { children, depth }
        }
        VListParam::FirstBaseline { children } => {
            let depth = first_elem_depth(&children).map_or(0.0, |d| -d);
            VListChildrenAndDepth { children, depth }
        }
    }
}

fn first_elem_depth(children: &[VListChild]) -> Option<f64> {
    children.iter().find_map(|child| match child {
        VListChild::Elem(elem) => Some(elem.elem.depth),
        VListChild::Kern(_) => None,
    })
}

/// Stack elements and kerns bottom to top.
///
/// Each element is wrapped in a row span whose `top` style is the downward
/// offset of the element's baseline from the list's baseline. The list's
/// height and depth are the extreme positions reached while walking the
/// children, clamped at zero.
#[must_use]
pub fn make_v_list(params: VListParam, ctx: &Context<'_>) -> Span {
    let VListChildrenAndDepth { children, depth } = get_v_list_children_and_depth(params);

    let mut rows = Vec::with_capacity(children.len() + 1);
    let mut min_pos = depth;
    let mut max_pos = depth;
    let mut curr_pos = depth;
    let mut width: f64 = 0.0;
    let mut max_font_size: f64 = 0.0;

    for child in children {
        match child {
            VListChild::Kern(kern) => curr_pos += kern.size,
            VListChild::Elem(child) => {
                let VListElem {
                    elem,
                    margin_left,
                    margin_right,
                    wrapper_classes,
                    wrapper_style,
                } = *child;
                let elem_height = elem.height;
                let elem_depth = elem.depth;
                max_font_size = max_font_size.max(elem.max_font_size);

                let mut row = make_span(wrapper_classes.unwrap_or_default(), vec![elem], None);
                if let Some(style) = wrapper_style {
                    row.style.extend(&style);
                }
                row.style.insert(StyleProperty::Top, -curr_pos - elem_depth);
                if let Some(margin_left) = margin_left {
                    row.style.insert(StyleProperty::MarginLeft, margin_left);
                }
                if let Some(margin_right) = margin_right {
                    row.style.insert(StyleProperty::MarginRight, margin_right);
                }
                width = width.max(row.outer_width());
                rows.push(row);
                curr_pos += elem_height + elem_depth;
            }
        }
        min_pos = min_pos.min(curr_pos);
        max_pos = max_pos.max(curr_pos);
    }

    if rows.iter().any(|row| {
        row.max_font_size > 0.0 && (row.max_font_size - ctx.size_multiplier).abs() > f64::EPSILON
    }) {
        rows.push(font_size_sentinel(ctx));
    }

    let mut vlist = make_span(vec!["vlist".to_owned()], rows, None);
    vlist.height = max_pos.max(0.0);
    vlist.depth = (-min_pos).max(0.0);
    vlist.width = width;
    vlist.max_font_size = max_font_size;
    vlist
}

/// Zero-size box pinning the ambient font size inside a vlist whose rows were
/// built at other sizes.
fn font_size_sentinel(ctx: &Context<'_>) -> Span {
    let mut sentinel = make_span(vec!["fontsize-ensurer".to_owned()], vec![], None);
    sentinel.max_font_size = ctx.size_multiplier;
    sentinel
}

/// Offset of a vlist row's baseline above the list's baseline.
#[must_use]
pub fn row_raise(row: &Span) -> f64 {
    -row.style.em(StyleProperty::Top).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::BuiltinMetrics;
    use crate::types::Settings;

    fn boxed(height: f64, depth: f64) -> Span {
        Span {
            height,
            depth,
            width: 1.0,
            max_font_size: 1.0,
            ..Span::default()
        }
    }

    fn root(metrics: &BuiltinMetrics) -> Context<'_> {
        Context::new(metrics, &Settings::default()).unwrap()
    }

    #[test]
    fn test_shift_mode_depth() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        for k in [-1.0, -0.2, 0.0, 0.3, 1.5] {
            let vlist = make_v_list(
                VListParam::Shift {
                    amount: k,
                    children: vec![
                        VListChild::elem(boxed(0.5, 0.2)),
                        VListChild::elem(boxed(0.4, 0.1)),
                    ],
                },
                &ctx,
            );
            assert!((vlist.depth - f64::max(0.2 + k, 0.0)).abs() < 1e-12, "k={k}");
        }
    }

    #[test]
    fn test_bottom_and_top_modes_agree() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let children = || {
            vec![
                VListChild::elem(boxed(0.5, 0.2)),
                VListChild::kern(0.1),
                VListChild::elem(boxed(0.4, 0.1)),
            ]
        };
        let bottom = make_v_list(VListParam::Bottom { amount: 0.3, children: children() }, &ctx);
        // total size is 0.7 + 0.1 + 0.5
        let top = make_v_list(VListParam::Top { amount: 1.0, children: children() }, &ctx);
        assert!((bottom.depth - top.depth).abs() < 1e-12);
        assert!((bottom.height - top.height).abs() < 1e-12);
        assert!((bottom.height - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_individual_shift_positions_rows() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let vlist = make_v_list(
            VListParam::IndividualShift {
                children: vec![
                    VListElemAndShift::builder().elem(boxed(0.5, 0.2)).shift(0.8).build(),
                    VListElemAndShift::builder().elem(boxed(0.5, 0.2)).shift(-0.9).build(),
                ],
            },
            &ctx,
        );
        let raises: Vec<_> = vlist.children().iter().map(row_raise).collect();
        assert!((raises[0] + 0.8).abs() < 1e-12);
        assert!((raises[1] - 0.9).abs() < 1e-12);
        assert!((vlist.depth - 1.0).abs() < 1e-12);
        assert!((vlist.height - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_height_is_max_of_shifted_rows() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let vlist = make_v_list(
            VListParam::FirstBaseline {
                children: vec![
                    VListChild::elem(boxed(0.3, 0.2)),
                    VListChild::elem(boxed(0.6, 0.4)),
                ],
            },
            &ctx,
        );
        let max_height = vlist
            .children()
            .iter()
            .map(|row| row.height + row_raise(row))
            .fold(0.0, f64::max);
        let max_depth = vlist
            .children()
            .iter()
            .map(|row| row.depth - row_raise(row))
            .fold(0.0, f64::max);
        assert!((vlist.height - max_height).abs() < 1e-12);
        assert!((vlist.depth - max_depth).abs() < 1e-12);
    }

    #[test]
    fn test_sentinel_only_for_mixed_sizes() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let same = make_v_list(
            VListParam::FirstBaseline {
                children: vec![VListChild::elem(boxed(0.3, 0.2))],
            },
            &ctx,
        );
        assert!(!same.children().iter().any(|c| c.has_class("fontsize-ensurer")));

        let mut small = boxed(0.3, 0.2);
        small.max_font_size = 0.7;
        let mixed = make_v_list(
            VListParam::FirstBaseline {
                children: vec![VListChild::elem(small)],
            },
            &ctx,
        );
        let last = mixed.children().last().unwrap();
        assert!(last.has_class("fontsize-ensurer"));
        assert_eq!((last.height, last.depth, last.width), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_line_respects_minimum_thickness() {
        let metrics = BuiltinMetrics::new();
        let settings = Settings::builder().min_rule_thickness(0.1).build();
        let ctx = Context::new(&metrics, &settings).unwrap();
        let line = make_line_span("frac-line", &ctx, Some(0.01));
        assert_eq!(line.height, 0.1);
        assert_eq!(line.style.em(StyleProperty::BorderBottomWidth), Some(0.1));
    }
}
