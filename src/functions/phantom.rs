//! `\phantom`, `\hphantom` and `\vphantom`
//!
//! The body is laid out normally in a context that paints nothing; the kind
//! of phantom decides which of its dimensions survive.

use crate::atom::{Atom, PhantomKind};
use crate::build_common::make_typed_span;
use crate::context::Context;
use crate::decompose::{GroupType, Surrounding, build_expression};
use crate::span::{Span, SpanType};
use crate::types::LayoutError;

/// Lay out an invisible copy of `body`.
pub fn build(kind: PhantomKind, body: &[Atom], ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let phantom_ctx = ctx.with_phantom();
    let inner = build_expression(body, &phantom_ctx, GroupType::Real, Surrounding::default())?;
    let mut span = make_typed_span(SpanType::Mord, vec![], inner, &phantom_ctx);
    match kind {
        PhantomKind::Full => {}
        PhantomKind::Horizontal => {
            span.height = 0.0;
            span.depth = 0.0;
        }
        PhantomKind::Vertical => {
            span.classes.push("rlap".to_owned());
            span.width = 0.0;
        }
    }
    Ok(span)
}
