//! texbox - TeX math layout for any renderer
//!
//! Turns a tree of math atoms into a tree of dimensioned boxes following the
//! rules of Appendix G of the TeXbook. Every box carries its height, depth,
//! width, italic correction and skew in em, plus the classes and offsets a
//! renderer needs to paint it.
//!
//! ```
//! use texbox::{Atom, BuiltinMetrics, Settings, layout};
//!
//! let metrics = BuiltinMetrics::new();
//! let atoms = [Atom::ord("x").with_sup(vec![Atom::ord("2")])];
//! let root = layout(&metrics, &Settings::default(), &atoms).unwrap();
//! assert!(root.height > 0.0);
//! ```
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::non_ascii_literal)]
#![warn(clippy::pointer_format)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::absolute_paths)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::impl_trait_in_params)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::return_and_then)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::map_with_unused_argument_over_ranges)]
#![warn(clippy::missing_asserts_for_indexing)]
#![warn(clippy::separated_literal_suffix)]
#![warn(clippy::ref_patterns)]
// Not sure
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::single_call_fn)]

pub mod atom;
pub mod build_common;
pub mod context;
pub mod decompose;
pub mod delimiter;
pub mod environment;
pub mod font_metrics;
pub mod font_metrics_data;
pub mod functions;
pub mod spacing_data;
pub mod span;
pub mod style;
pub mod types;
pub mod units;

pub use crate::atom::{Atom, AtomKind, AtomStyle, Mode};
pub use crate::context::Context;
pub use crate::font_metrics::{BuiltinMetrics, FontFamily, FontId, MetricsProvider};
pub use crate::font_metrics_data::{CharacterMetrics, FontMetrics};
pub use crate::span::{Span, SpanBody, SpanType};
pub use crate::style::Mathstyle;
pub use crate::types::{LayoutError, LayoutErrorKind, Settings, StyleBag, StyleProperty, StyleValue};
pub use crate::units::{Measurement, Unit};

use crate::build_common::make_span;
use crate::decompose::{GroupType, Surrounding, build_expression};

/// Lay out a list of atoms.
///
/// The result is a `base` span holding the horizontal list, preceded by a
/// zero-width strut spanning the list's height and depth so that a renderer
/// can size the line box without measuring.
pub fn layout(
    provider: &dyn MetricsProvider,
    settings: &Settings,
    atoms: &[Atom],
) -> Result<Span, LayoutError> {
    let ctx = Context::new(provider, settings)?;
    let spans = build_expression(atoms, &ctx, GroupType::Real, Surrounding::default())?;

    let height = spans.iter().map(|span| span.height).fold(0.0, f64::max);
    let depth = spans.iter().map(|span| span.depth).fold(0.0, f64::max);
    log::debug!(
        "laid out {} atoms: height {height:.4}em, depth {depth:.4}em",
        atoms.len()
    );

    let mut children = Vec::with_capacity(spans.len() + 1);
    children.push(Span::strut(height, depth));
    children.extend(spans);
    Ok(make_span(vec!["base".to_owned()], children, Some(&ctx)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_strut_covers_list() {
        let metrics = BuiltinMetrics::new();
        let atoms = [Atom::ord("y"), Atom::bin("+"), Atom::ord("h")];
        let root = layout(&metrics, &Settings::default(), &atoms).unwrap();
        assert!(root.has_class("base"));
        let strut = &root.children()[0];
        assert!(strut.width.abs() < 1e-12);
        assert!((strut.height - root.height).abs() < 1e-12);
        assert!((strut.depth - root.depth).abs() < 1e-12);
        // y, glue, +, glue, h
        assert_eq!(root.children().len(), 6);
    }

    #[test]
    fn test_empty_list() {
        let metrics = BuiltinMetrics::new();
        let root = layout(&metrics, &Settings::default(), &[]).unwrap();
        assert!(root.height.abs() < 1e-12 && root.depth.abs() < 1e-12);
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let metrics = BuiltinMetrics::new();
        let settings = Settings::builder().size(11).build();
        let err = layout(&metrics, &settings, &[Atom::ord("x")]).unwrap_err();
        assert_eq!(*err.kind, LayoutErrorKind::InvalidFontSize { size: 11 });
    }
}
