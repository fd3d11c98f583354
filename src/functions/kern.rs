//! Explicit horizontal space: `\,`, `\quad`, `\!`, `\kern` and friends

use crate::build_common::make_glue;
use crate::context::Context;
use crate::span::Span;
use crate::units::Measurement;

/// Glue of the given width; negative widths pull the neighbours together.
#[must_use]
pub fn build(width: &Measurement, ctx: &Context<'_>) -> Span {
    let mut glue = make_glue(width, ctx);
    glue.max_font_size = ctx.size_multiplier;
    glue
}
