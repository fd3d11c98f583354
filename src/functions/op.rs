//! Large and named operators
//!
//! Operators are handled in the TeXbook pg. 443-444, rule 13(a). Symbol
//! operators are drawn from the Size1 font, or the Size2 font in display
//! style, and centered on the axis. Limits go above and below when the atom
//! asks for them, or by default for non-integral symbols in display style;
//! otherwise they are attached as ordinary scripts.

use phf::{phf_map, phf_set};

use crate::atom::{Atom, Limits, Mode, OpBody};
use crate::build_common::{make_symbol, make_typed_span};
use crate::context::Context;
use crate::decompose::{GroupType, Surrounding, build_expression};
use crate::font_metrics::FontId;
use crate::functions::supsub;
use crate::functions::utils::assemble_sup_sub;
use crate::span::{Span, SpanType};
use crate::style::DISPLAY;
use crate::types::{LayoutError, StyleProperty};

/// Operator names and their glyphs.
static OP_GLYPHS: phf::Map<&'static str, &'static str> = phf_map! {
    "\\sum" => "\u{2211}",
    "\\prod" => "\u{220f}",
    "\\coprod" => "\u{2210}",
    "\\int" => "\u{222b}",
    "\\intop" => "\u{222b}",
    "\\smallint" => "\u{222b}",
    "\\bigcap" => "\u{22c2}",
    "\\bigcup" => "\u{22c3}",
    "\\bigwedge" => "\u{22c0}",
    "\\bigvee" => "\u{22c1}",
};

/// Operators that keep their limits at the side by default.
static INTEGRALS: phf::Set<&'static str> = phf_set! {
    "\\int", "\\smallint", "\u{222b}",
};

/// Operators that do not grow in display style.
fn no_successor(name: &str) -> bool {
    name == "\\smallint"
}

/// Build an operator with its limits or scripts.
pub fn build(
    atom: &Atom,
    body: &OpBody,
    limits: Limits,
    ctx: &Context<'_>,
) -> Result<Span, LayoutError> {
    let display = ctx.style.size == DISPLAY.size;

    let has_limits = match (limits, body) {
        (Limits::Limits, _) => true,
        (Limits::NoLimits, _) => false,
        (Limits::Auto, OpBody::Symbol(name)) => display && !INTEGRALS.contains(name.as_str()),
        (Limits::Auto, OpBody::Name(_) | OpBody::Group(_)) => false,
    };

    let mut base = match body {
        OpBody::Symbol(name) => {
            // Most symbol operators get larger in displaystyle (rule 13)
            let large = display && !no_successor(name);
            let font = if large {
                FontId::Size2Regular
            } else {
                FontId::Size1Regular
            };
            let glyph = OP_GLYPHS.get(name.as_str()).copied().unwrap_or(name.as_str());
            let size_class = if large { "large-op" } else { "small-op" };
            let mut symbol = make_symbol(
                glyph,
                font,
                Mode::Math,
                ctx,
                vec!["mop".to_owned(), "op-symbol".to_owned(), size_class.to_owned()],
            );
            symbol.span_type = Some(SpanType::Mop);
            symbol
        }
        OpBody::Name(name) => {
            let text = name.strip_prefix('\\').unwrap_or(name);
            let letters = text
                .chars()
                .map(|ch| make_symbol(&ch.to_string(), FontId::MainRegular, atom.mode, ctx, vec![]))
                .collect();
            make_typed_span(SpanType::Mop, vec![], letters, ctx)
        }
        OpBody::Group(body) => {
            let mut inner = build_expression(body, ctx, GroupType::Real, Surrounding::default())?;
            if inner.len() == 1 && inner[0].text().is_some() {
                let mut symbol = inner.remove(0);
                symbol.set_type(SpanType::Mop);
                symbol
            } else {
                make_typed_span(SpanType::Mop, vec![], inner, ctx)
            }
        }
    };

    // single glyphs are centered on the axis
    let (base_shift, slant) = if base.text().is_some() {
        (
            (base.height - base.depth) / 2.0 - ctx.metrics().axis_height,
            base.italic,
        )
    } else {
        (0.0, 0.0)
    };

    if has_limits {
        return assemble_sup_sub(
            base,
            atom.superscript.as_deref(),
            atom.subscript.as_deref(),
            ctx,
            slant,
            base_shift,
            SpanType::Mop,
            vec!["mop".to_owned(), "op-limits".to_owned()],
        );
    }

    if base_shift != 0.0 {
        base.style.insert(StyleProperty::Top, base_shift);
        base.height = (base.height - base_shift).max(0.0);
        base.depth = (base.depth + base_shift).max(0.0);
    }
    supsub::build_scripts(
        base,
        atom.superscript.as_deref(),
        atom.subscript.as_deref(),
        false,
        ctx,
    )
}
