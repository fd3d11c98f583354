//! Resizable delimiters: `\big`-family, `\left..\right` and `\middle`

use crate::atom::{Atom, AtomKind, DelimClass, Mode};
use crate::build_common::{make_null_delimiter, make_typed_span};
use crate::context::Context;
use crate::decompose::{GroupType, Surrounding, build_expression};
use crate::delimiter::{left_right_delim, sized_delim};
use crate::span::{Span, SpanType};
use crate::types::LayoutError;

/// Class marking a `\middle` delimiter until its fences are sized.
const MIDDLE_CLASS: &str = "middle";

/// `None` and `"."` both mean "no delimiter".
fn is_null(delim: Option<&str>) -> bool {
    delim.is_none_or(|delim| delim == ".")
}

/// `\big(`, `\Bigl[` and friends.
pub fn build(
    delim: &str,
    size: usize,
    class: DelimClass,
    mode: Mode,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let span_type = class.span_type();
    if delim == "." {
        // Empty delimiters still count as elements
        return Ok(make_typed_span(span_type, vec![], vec![], ctx));
    }
    let mut span = sized_delim(delim, size, ctx, mode, &[])?;
    span.set_type(span_type);
    Ok(span)
}

/// `\middle` at its first-pass size; `\left..\right` resizes it.
pub fn build_middle(delim: &str, mode: Mode, ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let mut span = if delim == "." {
        make_null_delimiter(ctx, vec![])
    } else {
        sized_delim(delim, 1, ctx, mode, &[])?
    };
    span.classes.push(MIDDLE_CLASS.to_owned());
    Ok(span)
}

/// Names of the `\middle` delimiters that end up directly in `body`'s list,
/// in order.
fn middle_delims(body: &[Atom]) -> Vec<&str> {
    let mut out = vec![];
    for atom in body {
        if atom.has_scripts() {
            continue;
        }
        match &atom.kind {
            AtomKind::Middle { delim } => out.push(delim.as_str()),
            AtomKind::Color { body, .. }
            | AtomKind::Styling { body, .. }
            | AtomKind::Sizing { body, .. } => out.extend(middle_delims(body)),
            _ => {}
        }
    }
    out
}

fn fence(
    delim: Option<&str>,
    height: f64,
    depth: f64,
    span_type: SpanType,
    mode: Mode,
    ctx: &Context<'_>,
) -> Span {
    let mut span = match delim {
        Some(delim) if !is_null(Some(delim)) => {
            left_right_delim(delim, height, depth, ctx, mode, &[])
        }
        _ => make_null_delimiter(ctx, vec![]),
    };
    span.set_type(span_type);
    span
}

/// `\left..\right`: fences sized to the body, which is spaced as if it sat
/// between an opening and a closing atom.
pub fn build_left_right(
    body: &[Atom],
    left: Option<&str>,
    right: Option<&str>,
    mode: Mode,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let surrounding = Surrounding {
        left: Some(SpanType::Mopen),
        right: Some(SpanType::Mclose),
    };
    let mut inner = build_expression(body, ctx, GroupType::Real, surrounding)?;

    let mut inner_height: f64 = 0.0;
    let mut inner_depth: f64 = 0.0;
    let mut had_middle = false;
    for span in &inner {
        if span.has_class(MIDDLE_CLASS) {
            had_middle = true;
        } else {
            inner_height = inner_height.max(span.height);
            inner_depth = inner_depth.max(span.depth);
        }
    }

    if had_middle {
        let mut names = middle_delims(body).into_iter();
        for span in inner.iter_mut().filter(|span| span.has_class(MIDDLE_CLASS)) {
            let Some(name) = names.next() else { break };
            if name != "." {
                *span = left_right_delim(name, inner_height, inner_depth, ctx, mode, &[]);
                span.classes.push(MIDDLE_CLASS.to_owned());
            }
        }
    }

    // a missing fence leaves only the null delimiter space
    inner.insert(0, fence(left, inner_height, inner_depth, SpanType::Mopen, mode, ctx));
    inner.push(fence(right, inner_height, inner_depth, SpanType::Mclose, mode, ctx));

    Ok(make_typed_span(SpanType::Minner, vec![], inner, ctx))
}

/// A body between fences sized to its height and depth, for arrays that
/// carry their own delimiters. Without fences the body comes back alone.
#[must_use]
pub fn wrap_in_fences(
    body: Span,
    left: Option<&str>,
    right: Option<&str>,
    mode: Mode,
    ctx: &Context<'_>,
) -> Vec<Span> {
    if is_null(left) && is_null(right) {
        return vec![body];
    }
    let (height, depth) = (body.height, body.depth);
    vec![
        fence(left, height, depth, SpanType::Mopen, mode, ctx),
        body,
        fence(right, height, depth, SpanType::Mclose, mode, ctx),
    ]
}
