//! Single symbols: ordinary, binary, relation, fence and punctuation atoms
//!
//! Letters in math mode are set in Math-Italic, everything else in
//! Main-Regular, falling back to AMS-Regular for glyphs only that font has.
//! A font family override takes precedence whenever its font knows every
//! glyph of the symbol.

use phf::phf_map;

use crate::atom::Mode;
use crate::build_common::make_symbol;
use crate::context::Context;
use crate::font_metrics::FontId;
use crate::span::{Span, SpanType};

/// Command names accepted in place of the glyph they draw.
pub static SYMBOL_GLYPHS: phf::Map<&'static str, &'static str> = phf_map! {
    "\\alpha" => "\u{3b1}",
    "\\beta" => "\u{3b2}",
    "\\theta" => "\u{3b8}",
    "\\pi" => "\u{3c0}",
    "\\cdot" => "\u{22c5}",
    "\\times" => "\u{d7}",
    "\\div" => "\u{f7}",
    "\\le" => "\u{2264}",
    "\\leq" => "\u{2264}",
    "\\ge" => "\u{2265}",
    "\\geq" => "\u{2265}",
    "\\to" => "\u{2192}",
    "\\rightarrow" => "\u{2192}",
    "\\leftarrow" => "\u{2190}",
    "\\prime" => "\u{2032}",
    "\\lesssim" => "\u{2272}",
    "\\vartriangle" => "\u{25b3}",
    "\\lt" => "<",
    "\\gt" => ">",
    "\\vert" => "|",
    "\\{" => "{",
    "\\}" => "}",
};

/// The glyphs a symbol name draws.
#[must_use]
pub fn resolve(text: &str) -> &str {
    SYMBOL_GLYPHS.get(text).copied().unwrap_or(text)
}

fn is_math_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ('\u{3b1}'..='\u{3c9}').contains(&ch)
}

/// Pick the font and extra renderer class for a symbol.
fn choose_font(
    text: &str,
    span_type: SpanType,
    mode: Mode,
    ctx: &Context<'_>,
) -> (FontId, Option<&'static str>) {
    let has_all = |font: FontId| text.chars().all(|ch| ctx.provider.has_glyph(ch, font));

    if let Some(family) = ctx.font_family
        && has_all(family.font())
    {
        return (family.font(), Some(family.into()));
    }

    if mode == Mode::Math && span_type == SpanType::Mord && text.chars().all(is_math_letter) {
        return (FontId::MathItalic, Some("mathnormal"));
    }
    if !has_all(FontId::MainRegular) && has_all(FontId::AmsRegular) {
        return (FontId::AmsRegular, Some("amsrm"));
    }
    (FontId::MainRegular, None)
}

/// Build the glyph leaf for a single-symbol atom.
#[must_use]
pub fn build(text: &str, span_type: SpanType, mode: Mode, ctx: &Context<'_>) -> Span {
    let mut text = resolve(text);
    // a binary minus is the typographic minus sign
    if span_type == SpanType::Mbin && mode == Mode::Math && text == "-" {
        text = "\u{2212}";
    }
    let (font, font_class) = choose_font(text, span_type, mode, ctx);

    let mut classes = vec![span_type.as_ref().to_owned()];
    classes.extend(font_class.map(str::to_owned));
    let mut span = make_symbol(text, font, mode, ctx, classes);
    span.span_type = Some(span_type);
    if ctx.font_family.is_some_and(|family| family.is_upright()) {
        span.italic = 0.0;
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::{BuiltinMetrics, FontFamily};
    use crate::span::SpanBody;
    use crate::types::Settings;

    fn font_of(span: &Span) -> Option<FontId> {
        match span.body {
            SpanBody::Glyph { font, .. } => Some(font),
            _ => None,
        }
    }

    #[test]
    fn test_letters_are_italic_digits_upright() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let x = build("x", SpanType::Mord, Mode::Math, &ctx);
        let one = build("1", SpanType::Mord, Mode::Math, &ctx);
        assert_eq!(font_of(&x), Some(FontId::MathItalic));
        assert_eq!(font_of(&one), Some(FontId::MainRegular));
        assert_eq!(x.classes, ["mord", "mathnormal"]);
    }

    #[test]
    fn test_text_mode_letters_are_upright() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let f = build("f", SpanType::Mord, Mode::Text, &ctx);
        assert_eq!(font_of(&f), Some(FontId::MainRegular));
        assert_eq!(f.italic, 0.0);
    }

    #[test]
    fn test_family_override_and_fallback() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default())
            .unwrap()
            .with_font(FontFamily::Mathrm);
        let f = build("f", SpanType::Mord, Mode::Math, &ctx);
        assert_eq!(font_of(&f), Some(FontId::MainRegular));
        assert_eq!(f.italic, 0.0);

        // no builtin glyphs for bold: falls back to the default choice
        let bold = ctx.with_font(FontFamily::Mathbf);
        let x = build("x", SpanType::Mord, Mode::Math, &bold);
        assert_eq!(font_of(&x), Some(FontId::MathItalic));
    }

    #[test]
    fn test_binary_minus_and_names() {
        let metrics = BuiltinMetrics::new();
        let ctx = Context::new(&metrics, &Settings::default()).unwrap();
        let minus = build("-", SpanType::Mbin, Mode::Math, &ctx);
        assert_eq!(minus.text(), Some("\u{2212}"));
        let le = build("\\le", SpanType::Mrel, Mode::Math, &ctx);
        assert_eq!(le.text(), Some("\u{2264}"));
        assert!(le.height > 0.0);
        let sim = build("\\lesssim", SpanType::Mrel, Mode::Math, &ctx);
        assert_eq!(font_of(&sim), Some(FontId::AmsRegular));
    }
}
