//! `\displaystyle`, `\textstyle`, `\scriptstyle` and `\scriptscriptstyle`

use crate::atom::{Atom, StyleLevel};
use crate::context::Context;
use crate::functions::sizing::sizing_group;
use crate::span::Span;
use crate::types::LayoutError;

/// Set `body` in the given style. Style changes are handled in the TeXbook
/// on pg. 442, Rule 3; they also drop any font family override.
pub fn build(
    style: StyleLevel,
    body: &[Atom],
    ctx: &Context<'_>,
) -> Result<Vec<Span>, LayoutError> {
    let mut new_ctx = ctx.having_style(style.mathstyle());
    new_ctx.font_family = None;
    sizing_group(body, &new_ctx, ctx)
}
