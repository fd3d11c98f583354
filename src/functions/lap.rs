//! Zero-width overlaps: `\llap`, `\rlap` and `\clap`

use crate::atom::{Atom, OverlapAlign};
use crate::build_common::{make_span, make_typed_span};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::span::{Span, SpanType};
use crate::types::{LayoutError, StyleProperty};

impl OverlapAlign {
    const fn class_name(self) -> &'static str {
        match self {
            Self::Left => "llap",
            Self::Right => "rlap",
            Self::Center => "clap",
        }
    }
}

/// Set `body` without taking up horizontal space.
pub fn build(align: OverlapAlign, body: &[Atom], ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let body = decompose_group(ctx, ctx, body)?;
    let left = match align {
        OverlapAlign::Left => -body.width,
        OverlapAlign::Center => -body.width / 2.0,
        OverlapAlign::Right => 0.0,
    };

    let mut inner = make_span(vec!["inner".to_owned()], vec![body], Some(ctx));
    inner.style.insert(StyleProperty::Left, left);

    let mut span = make_typed_span(
        SpanType::Mord,
        vec![align.class_name().to_owned()],
        vec![inner],
        ctx,
    );
    span.width = 0.0;
    Ok(span)
}
