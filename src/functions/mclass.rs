//! Explicit atom classes: `\mathinner` and the `\overset` family
//!
//! `\overset`, `\underset` and `\stackrel` set their annotations like the
//! limits of an operator, in script style, but keep the base where it is
//! and take the spacing class the atom asks for.

use crate::atom::Atom;
use crate::build_common::{make_span, make_typed_span};
use crate::context::Context;
use crate::decompose::{GroupType, Surrounding, build_expression};
use crate::functions::utils::assemble_sup_sub;
use crate::span::{Span, SpanType};
use crate::types::LayoutError;

/// `\mathinner{...}`
pub fn build_inner(body: &[Atom], ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let inner = build_expression(body, ctx, GroupType::Real, Surrounding::default())?;
    Ok(make_typed_span(SpanType::Minner, vec![], inner, ctx))
}

/// A base with annotations stacked above and below it.
pub fn build_over_under(
    body: &[Atom],
    above: Option<&[Atom]>,
    below: Option<&[Atom]>,
    class: Option<SpanType>,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let span_type = class.unwrap_or(SpanType::Mord);
    let inner = build_expression(body, ctx, GroupType::Real, Surrounding::default())?;
    let base = make_span(vec![], inner, Some(ctx));
    assemble_sup_sub(
        base,
        above,
        below,
        ctx,
        0.0,
        0.0,
        span_type,
        vec![span_type.as_ref().to_owned()],
    )
}
