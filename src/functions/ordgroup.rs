//! Braced groups

use crate::atom::Atom;
use crate::build_common::make_typed_span;
use crate::context::Context;
use crate::decompose::{GroupType, Surrounding, build_expression};
use crate::span::{Span, SpanType};
use crate::types::LayoutError;

/// A braced group is an ordinary atom whose contents are spaced on their own.
pub fn build(body: &[Atom], ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let inner = build_expression(body, ctx, GroupType::Real, Surrounding::default())?;
    Ok(make_typed_span(SpanType::Mord, vec![], inner, ctx))
}
