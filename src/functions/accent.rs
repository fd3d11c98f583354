//! Accents over a base
//!
//! Accents are handled in the TeXbook pg. 443, rule 12. The base is set in
//! the cramped style; the accent glyph is lowered onto it by
//! `min(base.height, x_height)` and shifted right by the skew of the base
//! when the base is a single character.

use phf::phf_map;

use crate::atom::{Atom, Mode};
use crate::build_common::{
    VListChild, VListElem, VListParam, make_symbol, make_typed_span, make_v_list,
};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::font_metrics::FontId;
use crate::span::{Span, SpanType};
use crate::types::{LayoutError, StyleBag, StyleProperty};

/// Accent commands and the glyphs they draw.
static ACCENT_GLYPHS: phf::Map<&'static str, &'static str> = phf_map! {
    "\\hat" => "\u{2c6}",
    "\\check" => "\u{2c7}",
    "\\breve" => "\u{2d8}",
    "\\dot" => "\u{2d9}",
    "\\tilde" => "\u{2dc}",
    "\\ddot" => "\u{a8}",
    "\\bar" => "\u{af}",
    "\\acute" => "\u{b4}",
    "\\grave" => "`",
    "\\vec" => "\u{20d7}",
    "\\mathring" => "\u{2da}",
};

/// The skew of the innermost character, if `body` is a character box.
fn base_skew(body: &[Atom], base: &Span) -> f64 {
    match body {
        [only] if only.is_character_box() => base
            .descendants()
            .into_iter()
            .find(|span| span.text().is_some())
            .map_or(0.0, |glyph| glyph.skew),
        _ => 0.0,
    }
}

/// Place `accent` over `body`.
pub fn build(
    accent: &str,
    body: &[Atom],
    mode: Mode,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let base = decompose_group(&ctx.having_cramped_style(), ctx, body)?;
    let skew = base_skew(body, &base);
    let clearance = base.height.min(ctx.metrics().x_height);

    let glyph = ACCENT_GLYPHS.get(accent).copied().unwrap_or(accent);
    let mut accent_glyph = make_symbol(glyph, FontId::MainRegular, mode, ctx, vec![]);
    // the accent is not followed by scripts
    accent_glyph.italic = 0.0;
    // \vec is a combining glyph drawn to the left of its origin
    let mut left = skew;
    if accent == "\\vec" {
        left += accent_glyph.width / 2.0;
    }

    let mut wrapper_style = StyleBag::default();
    if left != 0.0 {
        wrapper_style.insert(StyleProperty::Left, left);
    }

    let width = base.width;
    let vlist = make_v_list(
        VListParam::FirstBaseline {
            children: vec![
                VListChild::elem(base),
                VListChild::kern(-clearance),
                VListElem::builder()
                    .elem(accent_glyph)
                    .wrapper_classes(vec!["accent-body".to_owned()])
                    .wrapper_style(wrapper_style)
                    .build()
                    .into(),
            ],
        },
        ctx,
    );

    let mut span = make_typed_span(SpanType::Mord, vec!["accent".to_owned()], vec![vlist], ctx);
    // the accent never widens the base
    span.width = width;
    Ok(span)
}
