//! Delimiter sizing
//!
//! A delimiter grows through up to three representations as the requested
//! height increases: a Main-Regular glyph scaled to a smaller style, one of
//! the four Size fonts, and finally a stack of extension pieces built to any
//! height. Which representations a delimiter may use depends on its family:
//! angle brackets never stack, bars and arrows skip the Size fonts, and
//! parentheses, brackets and braces use everything.
//!
//! Requested heights are in ems of `\normalsize`; the returned spans are in
//! ems of the caller's context.

use phf::{Map, Set, phf_map, phf_set};

use crate::atom::Mode;
use crate::build_common::{
    VListChild, VListParam, make_null_delimiter, make_span, make_symbol, make_v_list,
};
use crate::context::Context;
use crate::font_metrics::FontId;
use crate::span::Span;
use crate::style::{Mathstyle, SCRIPT, SCRIPTSCRIPT, TEXT};
use crate::types::{LayoutError, LayoutErrorKind, StyleProperty};

const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

/// Upper bound on the extension pieces stacked on each side of a stacked
/// delimiter. Taller requests get a delimiter this tall and no taller.
pub const MAX_REPEAT_COUNT: usize = 1000;

/// Total height of a `\big`-family delimiter of the given size.
#[must_use]
pub fn size_to_max_height(size: usize) -> f64 {
    SIZE_TO_MAX_HEIGHT[size.min(SIZE_TO_MAX_HEIGHT.len() - 1)]
}

/// One representation a delimiter can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterType {
    /// Main-Regular glyph restyled to the given style
    Small(&'static Mathstyle),
    /// Glyph from the Size1..Size4 font
    Large(usize),
    /// Pieces stacked to the requested height
    Stack,
}

impl DelimiterType {
    /// Position on the growth ladder shared by all families; larger means a
    /// taller representation.
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Small(style) => 3 - style.size,
            Self::Large(size) => 2 + size,
            Self::Stack => 7,
        }
    }

    const fn font(self) -> FontId {
        match self {
            Self::Small(_) => FontId::MainRegular,
            Self::Large(size) => FontId::size_font(size),
            Self::Stack => FontId::Size4Regular,
        }
    }
}

/// Delimiter names and the glyph drawing them.
pub const DELIMITER_GLYPHS: Map<&'static str, char> = phf_map! {
    "(" => '(',
    "\\lparen" => '(',
    ")" => ')',
    "\\rparen" => ')',
    "[" => '[',
    "\\lbrack" => '[',
    "]" => ']',
    "\\rbrack" => ']',
    "\\{" => '{',
    "\\lbrace" => '{',
    "\\}" => '}',
    "\\rbrace" => '}',
    "\\lfloor" => '\u{230a}',
    "\\rfloor" => '\u{230b}',
    "\\lceil" => '\u{2308}',
    "\\rceil" => '\u{2309}',
    "\\surd" => '\u{221a}',
    "\\langle" => '\u{27e8}',
    "\\rangle" => '\u{27e9}',
    "/" => '/',
    "\\backslash" => '\\',
    "|" => '\u{2223}',
    "\\vert" => '\u{2223}',
    "\\lvert" => '\u{2223}',
    "\\rvert" => '\u{2223}',
    "\\|" => '\u{2225}',
    "\\Vert" => '\u{2225}',
    "\\lVert" => '\u{2225}',
    "\\rVert" => '\u{2225}',
    "\\uparrow" => '\u{2191}',
    "\\downarrow" => '\u{2193}',
    "\\updownarrow" => '\u{2195}',
    "\\Uparrow" => '\u{21d1}',
    "\\Downarrow" => '\u{21d3}',
    "\\Updownarrow" => '\u{21d5}',
    "\\lgroup" => '\u{27ee}',
    "\\rgroup" => '\u{27ef}',
    "\\lmoustache" => '\u{23b0}',
    "\\rmoustache" => '\u{23b1}',
};

const STACK_LARGE_DELIMITERS: Set<&str> = phf_set!(
    "(", "\\lparen", ")", "\\rparen", "[", "\\lbrack", "]", "\\rbrack", "\\{", "\\lbrace", "\\}",
    "\\rbrace", "\\lfloor", "\\rfloor", "\u{230a}", "\u{230b}", "\\lceil", "\\rceil", "\u{2308}",
    "\u{2309}", "\\surd",
);

const STACK_ALWAYS_DELIMITERS: Set<&str> = phf_set!(
    "\\uparrow",
    "\\downarrow",
    "\\updownarrow",
    "\\Uparrow",
    "\\Downarrow",
    "\\Updownarrow",
    "|",
    "\\|",
    "\\vert",
    "\\Vert",
    "\\lvert",
    "\\rvert",
    "\\lVert",
    "\\rVert",
    "\\lgroup",
    "\\rgroup",
    "\u{27ee}",
    "\u{27ef}",
    "\\lmoustache",
    "\\rmoustache",
    "\u{23b0}",
    "\u{23b1}",
);

const STACK_NEVER_DELIMITERS: Set<&str> = phf_set!(
    "<",
    ">",
    "\\langle",
    "\\rangle",
    "/",
    "\\backslash",
    "\\lt",
    "\\gt",
);

const STACK_NEVER_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
];

const STACK_ALWAYS_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Stack,
];

const STACK_LARGE_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
    DelimiterType::Stack,
];

/// `<` and `>` turn into `\langle` and `\rangle` in delimiters.
fn normalize(delim: &str) -> &str {
    match delim {
        "<" | "\\lt" | "\u{27e8}" => "\\langle",
        ">" | "\\gt" | "\u{27e9}" => "\\rangle",
        _ => delim,
    }
}

/// Glyph for a delimiter name; single characters stand for themselves.
#[must_use]
pub fn delimiter_char(delim: &str) -> Option<char> {
    if let Some(ch) = DELIMITER_GLYPHS.get(normalize(delim)) {
        return Some(*ch);
    }
    let mut chars = delim.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn sequence_for(delim: &str) -> &'static [DelimiterType] {
    if STACK_NEVER_DELIMITERS.contains(delim) {
        STACK_NEVER_DELIMITER_SEQUENCE
    } else if STACK_LARGE_DELIMITERS.contains(delim) {
        STACK_LARGE_DELIMITER_SEQUENCE
    } else if STACK_ALWAYS_DELIMITERS.contains(delim) {
        STACK_ALWAYS_DELIMITER_SEQUENCE
    } else {
        log::debug!("unknown delimiter {delim:?}, trying the large fonts only");
        STACK_NEVER_DELIMITER_SEQUENCE
    }
}

/// Put a delimiter span in a given style, scaling its extent accordingly.
fn style_wrap(
    delim: Span,
    to_style: &'static Mathstyle,
    ctx: &Context<'_>,
    classes: &[String],
) -> Span {
    let new_ctx = ctx.having_base_style(Some(to_style));
    let mut all = classes.to_vec();
    all.extend(new_ctx.sizing_classes(ctx));
    let mut span = make_span(all, vec![delim], Some(ctx));

    let multiplier = new_ctx.size_multiplier / ctx.size_multiplier;
    span.height *= multiplier;
    span.depth *= multiplier;
    span.width *= multiplier;
    span.max_font_size = new_ctx.size_multiplier;
    span
}

/// Center a span on the axis.
fn center_span(mut span: Span, ctx: &Context<'_>, style: &'static Mathstyle) -> Span {
    let new_ctx = ctx.having_base_style(Some(style));
    let shift = (1.0 - ctx.size_multiplier / new_ctx.size_multiplier) * ctx.metrics().axis_height;
    span.classes.push("delimcenter".to_owned());
    span.height = (span.height - shift).max(0.0);
    span.depth = (span.depth + shift).max(0.0);
    span.style.insert(StyleProperty::Top, shift);
    span
}

/// A Main-Regular delimiter restyled to text, script or scriptscript.
#[must_use]
pub fn make_small_delim(
    delim: char,
    style: &'static Mathstyle,
    center: bool,
    ctx: &Context<'_>,
    mode: Mode,
    classes: &[String],
) -> Span {
    let text = make_symbol(&delim.to_string(), FontId::MainRegular, mode, ctx, classes.to_vec());
    let span = style_wrap(text, style, ctx, classes);
    if center {
        center_span(span, ctx, TEXT)
    } else {
        span
    }
}

/// A delimiter from the Size1..Size4 fonts, always in text style.
#[must_use]
pub fn make_large_delim(
    delim: char,
    size: usize,
    center: bool,
    ctx: &Context<'_>,
    mode: Mode,
    classes: &[String],
) -> Span {
    let inner = make_symbol(&delim.to_string(), FontId::size_font(size), mode, ctx, vec![]);
    let sized = make_span(
        vec!["delimsizing".to_owned(), format!("size{size}")],
        vec![inner],
        Some(ctx),
    );
    let span = style_wrap(sized, TEXT, ctx, classes);
    if center {
        center_span(span, ctx, TEXT)
    } else {
        span
    }
}

/// Extension pieces of a stackable delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StackParts {
    top: char,
    middle: Option<char>,
    repeat: char,
    bottom: char,
    font: FontId,
}

fn stack_parts(delim: &str, glyph: char) -> StackParts {
    let size1 = |top, repeat, bottom| StackParts {
        top,
        middle: None,
        repeat,
        bottom,
        font: FontId::Size1Regular,
    };
    let size4 = |top, repeat, bottom| StackParts {
        top,
        middle: None,
        repeat,
        bottom,
        font: FontId::Size4Regular,
    };
    match delim {
        "\\uparrow" => size1('\u{2191}', '\u{23d0}', '\u{23d0}'),
        "\\Uparrow" => size1('\u{21d1}', '\u{2016}', '\u{2016}'),
        "\\downarrow" => size1('\u{23d0}', '\u{23d0}', '\u{2193}'),
        "\\Downarrow" => size1('\u{2016}', '\u{2016}', '\u{21d3}'),
        "\\updownarrow" => size1('\u{2191}', '\u{23d0}', '\u{2193}'),
        "\\Updownarrow" => size1('\u{21d1}', '\u{2016}', '\u{21d3}'),
        "|" | "\\vert" | "\\lvert" | "\\rvert" => size1('\u{2223}', '\u{2223}', '\u{2223}'),
        "\\|" | "\\Vert" | "\\lVert" | "\\rVert" => size1('\u{2225}', '\u{2225}', '\u{2225}'),
        "[" | "\\lbrack" => size4('\u{23a1}', '\u{23a2}', '\u{23a3}'),
        "]" | "\\rbrack" => size4('\u{23a4}', '\u{23a5}', '\u{23a6}'),
        "\\lfloor" | "\u{230a}" => size4('\u{23a2}', '\u{23a2}', '\u{23a3}'),
        "\\lceil" | "\u{2308}" => size4('\u{23a1}', '\u{23a2}', '\u{23a2}'),
        "\\rfloor" | "\u{230b}" => size4('\u{23a5}', '\u{23a5}', '\u{23a6}'),
        "\\rceil" | "\u{2309}" => size4('\u{23a4}', '\u{23a5}', '\u{23a5}'),
        "(" | "\\lparen" => size4('\u{239b}', '\u{239c}', '\u{239d}'),
        ")" | "\\rparen" => size4('\u{239e}', '\u{239f}', '\u{23a0}'),
        "\\{" | "\\lbrace" => StackParts {
            middle: Some('\u{23a8}'),
            ..size4('\u{23a7}', '\u{23aa}', '\u{23a9}')
        },
        "\\}" | "\\rbrace" => StackParts {
            middle: Some('\u{23ac}'),
            ..size4('\u{23ab}', '\u{23aa}', '\u{23ad}')
        },
        "\\lgroup" | "\u{27ee}" => size4('\u{23a7}', '\u{23aa}', '\u{23a9}'),
        "\\rgroup" | "\u{27ef}" => size4('\u{23ab}', '\u{23aa}', '\u{23ad}'),
        "\\lmoustache" | "\u{23b0}" => size4('\u{23a7}', '\u{23aa}', '\u{23ad}'),
        "\\rmoustache" | "\u{23b1}" => size4('\u{23ab}', '\u{23aa}', '\u{23a9}'),
        "\\surd" => size4('\u{e001}', '\u{e000}', '\u{23b7}'),
        _ => size1(glyph, glyph, glyph),
    }
}

/// Build a delimiter at least `height_total` tall out of extension pieces
/// (TeXbook p. 442).
#[must_use]
pub fn make_stacked_delim(
    delim: &str,
    height_total: f64,
    center: bool,
    ctx: &Context<'_>,
    mode: Mode,
    classes: &[String],
) -> Span {
    let delim = normalize(delim);
    let glyph = delimiter_char(delim).unwrap_or('|');
    let parts = stack_parts(delim, glyph);
    let new_ctx = ctx.having_base_style(Some(TEXT));

    let total = |ch: char| {
        let metrics = new_ctx.character_metrics(ch, parts.font);
        metrics.height.max(0.0) + metrics.depth.max(0.0)
    };
    let top_height_total = total(parts.top);
    let repeat_height_total = total(parts.repeat);
    let bottom_height_total = total(parts.bottom);
    let middle_height_total = parts.middle.map_or(0.0, total);
    // repeat symmetrically above and below the middle piece
    let middle_factor = if parts.middle.is_some() { 2.0 } else { 1.0 };

    let minimal_height = top_height_total + bottom_height_total + middle_height_total;
    let wanted = (height_total - minimal_height) / (middle_factor * repeat_height_total);
    #[allow(clippy::cast_precision_loss)]
    let repeat_count = if repeat_height_total > 0.0 && wanted > 0.0 {
        // NaN fails the comparison above; infinity saturates to the bound
        wanted.ceil().min(MAX_REPEAT_COUNT as f64) as usize
    } else {
        0
    };
    if repeat_count == MAX_REPEAT_COUNT {
        log::debug!("{delim:?} needs more than {MAX_REPEAT_COUNT} repeat pieces, capping");
    }
    log::trace!("stacking {delim:?} with {repeat_count} repeat pieces");

    #[allow(clippy::cast_precision_loss)]
    let real_height_total =
        (repeat_count as f64 * middle_factor).mul_add(repeat_height_total, minimal_height);

    let axis_height = ctx.metrics().axis_height;
    let axis_height = if center {
        axis_height * ctx.size_multiplier
    } else {
        axis_height
    };
    let depth = real_height_total / 2.0 - axis_height;

    let piece = |ch: char| {
        let glyph = make_symbol(&ch.to_string(), parts.font, mode, &new_ctx, vec![]);
        let size_class = if parts.font == FontId::Size1Regular {
            "delim-size1"
        } else {
            "delim-size4"
        };
        VListChild::elem(make_span(
            vec!["delimsizinginner".to_owned(), size_class.to_owned()],
            vec![glyph],
            None,
        ))
    };

    let mut stack = Vec::with_capacity(repeat_count.saturating_mul(2).saturating_add(3));
    stack.push(piece(parts.bottom));
    stack.extend((0..repeat_count).map(|_| piece(parts.repeat)));
    if let Some(middle) = parts.middle {
        stack.push(piece(middle));
        stack.extend((0..repeat_count).map(|_| piece(parts.repeat)));
    }
    stack.push(piece(parts.top));

    let inner = make_v_list(
        VListParam::Bottom {
            amount: depth,
            children: stack,
        },
        &new_ctx,
    );
    let mult = make_span(
        vec!["delimsizing".to_owned(), "mult".to_owned()],
        vec![inner],
        Some(&new_ctx),
    );
    style_wrap(mult, TEXT, ctx, classes)
}

/// Walk a growth sequence and pick the first representation taller than
/// `height`. Smaller styles start earlier in the sequence.
fn traverse_sequence(
    glyph: char,
    height: f64,
    sequence: &'static [DelimiterType],
    ctx: &Context<'_>,
) -> DelimiterType {
    let start = (3 - ctx.style.size.min(3)).min(2);
    for delim_type in sequence.iter().skip(start) {
        if *delim_type == DelimiterType::Stack {
            // always the last entry
            break;
        }
        let metrics = ctx.character_metrics(glyph, delim_type.font());
        let mut height_depth = metrics.height + metrics.depth;
        if let DelimiterType::Small(style) = delim_type {
            height_depth *= ctx.having_base_style(Some(style)).size_multiplier;
        }
        if height_depth > height {
            return *delim_type;
        }
    }
    sequence
        .last()
        .copied()
        .unwrap_or(DelimiterType::Large(4))
}

/// The representation `custom_sized_delim` would use for a request.
#[must_use]
pub fn select_delimiter(delim: &str, height: f64, ctx: &Context<'_>) -> Option<DelimiterType> {
    let delim = normalize(delim);
    let glyph = delimiter_char(delim)?;
    Some(traverse_sequence(glyph, height, sequence_for(delim), ctx))
}

/// A delimiter with total height at least `height` where the fonts allow it,
/// optionally centered on the axis.
#[must_use]
pub fn custom_sized_delim(
    delim: &str,
    height: f64,
    center: bool,
    ctx: &Context<'_>,
    mode: Mode,
    classes: &[String],
) -> Span {
    let delim = normalize(delim);
    let Some(glyph) = delimiter_char(delim) else {
        log::debug!("no glyph for delimiter {delim:?}");
        return make_null_delimiter(ctx, classes.to_vec());
    };
    match traverse_sequence(glyph, height, sequence_for(delim), ctx) {
        DelimiterType::Small(style) => make_small_delim(glyph, style, center, ctx, mode, classes),
        DelimiterType::Large(size) => make_large_delim(glyph, size, center, ctx, mode, classes),
        DelimiterType::Stack => make_stacked_delim(delim, height, center, ctx, mode, classes),
    }
}

/// A `\big`-family delimiter of size 1..=4. Never centered.
pub fn sized_delim(
    delim: &str,
    size: usize,
    ctx: &Context<'_>,
    mode: Mode,
    classes: &[String],
) -> Result<Span, LayoutError> {
    if !(1..=4).contains(&size) {
        return Err(LayoutError::new(LayoutErrorKind::InvalidSizedDelimiter { size }));
    }
    let delim = normalize(delim);
    let Some(glyph) = delimiter_char(delim) else {
        log::debug!("no glyph for delimiter {delim:?}");
        return Ok(make_null_delimiter(ctx, classes.to_vec()));
    };
    if STACK_ALWAYS_DELIMITERS.contains(delim) {
        Ok(make_stacked_delim(delim, size_to_max_height(size), false, ctx, mode, classes))
    } else {
        if !STACK_LARGE_DELIMITERS.contains(delim) && !STACK_NEVER_DELIMITERS.contains(delim) {
            log::debug!("unknown delimiter {delim:?}, using the Size{size} font");
        }
        Ok(make_large_delim(glyph, size, false, ctx, mode, classes))
    }
}

/// A delimiter for `\left`/`\right` around content of the given height and
/// depth (in the caller's ems), sized by TeX's `make_left_right`.
#[must_use]
pub fn left_right_delim(
    delim: &str,
    height: f64,
    depth: f64,
    ctx: &Context<'_>,
    mode: Mode,
    classes: &[String],
) -> Span {
    let height = height * ctx.size_multiplier;
    let depth = depth * ctx.size_multiplier;
    // always centered, so the axis is always shifted
    let axis_height = ctx.metrics().axis_height * ctx.size_multiplier;

    // tex.web, make_left_right
    let delimiter_factor = 901.0;
    let delimiter_extend = 5.0 / ctx.metrics().pt_per_em;

    let max_dist_from_axis = (height - axis_height).max(depth + axis_height);
    let total_height = (max_dist_from_axis / 500.0 * delimiter_factor)
        .max(2.0f64.mul_add(max_dist_from_axis, -delimiter_extend));

    custom_sized_delim(delim, total_height, true, ctx, mode, classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::BuiltinMetrics;
    use crate::style::DISPLAY;
    use crate::types::Settings;

    fn root(metrics: &BuiltinMetrics) -> Context<'_> {
        Context::new(metrics, &Settings::default()).unwrap()
    }

    #[test]
    fn test_glyph_names() {
        assert_eq!(delimiter_char("<"), Some('\u{27e8}'));
        assert_eq!(delimiter_char("\\{"), Some('{'));
        assert_eq!(delimiter_char("x"), Some('x'));
        assert_eq!(delimiter_char("\\nonsense"), None);
    }

    #[test]
    fn test_small_request_stays_small() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        assert_eq!(select_delimiter("(", 0.0, &ctx), Some(DelimiterType::Small(TEXT)));
        let script = ctx.having_style(SCRIPTSCRIPT);
        assert_eq!(select_delimiter("(", 0.0, &script), Some(DelimiterType::Small(SCRIPTSCRIPT)));
    }

    #[test]
    fn test_families_grow_differently() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        assert_eq!(select_delimiter("(", 1.5, &ctx), Some(DelimiterType::Large(2)));
        assert_eq!(select_delimiter("(", 10.0, &ctx), Some(DelimiterType::Stack));
        assert_eq!(select_delimiter("\\langle", 10.0, &ctx), Some(DelimiterType::Large(4)));
        assert_eq!(select_delimiter("|", 1.5, &ctx), Some(DelimiterType::Stack));
    }

    #[test]
    fn test_selection_is_monotonic() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        for delim in ["(", "\\{", "|", "\\langle", "\\uparrow", "\\surd"] {
            let mut last = 0;
            for step in 0..80 {
                let height = f64::from(step) * 0.1;
                let rank = select_delimiter(delim, height, &ctx).unwrap().rank();
                assert!(rank >= last, "{delim} at {height}");
                last = rank;
            }
        }
    }

    #[test]
    fn test_stacked_delim_reaches_request() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        for delim in ["(", "\\{", "|", "\\Uparrow", "\\surd"] {
            let span = make_stacked_delim(delim, 5.0, true, &ctx, Mode::Math, &[]);
            assert!(span.height + span.depth >= 5.0 - 1e-9, "{delim}");
            assert!(span.height >= 0.0 && span.depth >= 0.0);
        }
    }

    #[test]
    fn test_huge_stack_is_capped() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        for height in [1e300, f64::INFINITY, f64::NAN] {
            let span = make_stacked_delim("(", height, true, &ctx, Mode::Math, &[]);
            let repeats = span
                .descendants()
                .into_iter()
                .filter_map(Span::text)
                .filter(|g| *g == "\u{239c}")
                .count();
            assert!(repeats <= MAX_REPEAT_COUNT, "{height}");
            assert!(span.height.is_finite() && span.depth.is_finite(), "{height}");
        }
        let capped = make_stacked_delim("\\{", 1e300, false, &ctx, Mode::Math, &[]);
        let pieces = capped.descendants().into_iter().filter_map(Span::text).count();
        assert_eq!(pieces, 2 * MAX_REPEAT_COUNT + 3);
    }

    #[test]
    fn test_brace_repeats_around_middle() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let span = make_stacked_delim("\\{", 4.0, false, &ctx, Mode::Math, &[]);
        let glyphs: Vec<_> = span.descendants().into_iter().filter_map(Span::text).collect();
        let middle = glyphs.iter().position(|g| *g == "\u{23a8}").unwrap();
        let repeats_below = glyphs[..middle].iter().filter(|g| **g == "\u{23aa}").count();
        let repeats_above = glyphs[middle..].iter().filter(|g| **g == "\u{23aa}").count();
        assert_eq!(repeats_below, repeats_above);
        assert_eq!(glyphs.first().copied(), Some("\u{23a9}"));
        assert_eq!(glyphs.last().copied(), Some("\u{23a7}"));
    }

    #[test]
    fn test_sized_delim_rejects_bad_size() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let err = sized_delim("(", 5, &ctx, Mode::Math, &[]).unwrap_err();
        assert_eq!(*err.kind, LayoutErrorKind::InvalidSizedDelimiter { size: 5 });
        let big = sized_delim("(", 2, &ctx, Mode::Math, &[]).unwrap();
        assert!((big.height + big.depth - 1.8).abs() < 1e-3);
    }

    #[test]
    fn test_left_right_is_centered_on_axis() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics).having_style(DISPLAY);
        let span = left_right_delim("(", 2.0, 1.5, &ctx, Mode::Math, &[]);
        let axis = ctx.metrics().axis_height;
        assert!(((span.height - axis) - (span.depth + axis)).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_name_yields_null_delimiter() {
        let metrics = BuiltinMetrics::new();
        let ctx = root(&metrics);
        let span = custom_sized_delim("\\nonsense", 3.0, true, &ctx, Mode::Math, &[]);
        assert!(span.has_class("nulldelimiter"));
    }
}
