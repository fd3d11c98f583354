#![allow(dead_code)]

use std::{
    panic::{UnwindSafe, catch_unwind},
    sync::OnceLock,
};

use texbox::{
    Atom, AtomKind, BuiltinMetrics, Context, LayoutError, Settings, Span, build_common::row_raise,
    layout,
};

static DEFAULT_PROVIDER: OnceLock<BuiltinMetrics> = OnceLock::new();
pub fn provider() -> &'static BuiltinMetrics {
    DEFAULT_PROVIDER.get_or_init(BuiltinMetrics::new)
}

/// Root context in display (`true`) or text style.
pub fn root_ctx(display_mode: bool) -> Context<'static> {
    let settings = Settings::builder().display_mode(display_mode).build();
    Context::new(provider(), &settings).unwrap()
}

/// Lay out `atoms` with default settings.
pub fn layout_default(atoms: &[Atom]) -> Result<Span, LayoutError> {
    layout(provider(), &Settings::default(), atoms)
}

/// Lay out `atoms` in text style.
pub fn layout_text(atoms: &[Atom]) -> Result<Span, LayoutError> {
    let settings = Settings::builder().display_mode(false).build();
    layout(provider(), &settings, atoms)
}

/// The boxes of a laid out list, without the root strut.
pub fn body(root: &Span) -> &[Span] {
    &root.children()[1..]
}

pub fn group(body: Vec<Atom>) -> Atom {
    Atom::new(AtomKind::Group { body })
}

pub fn sqrt(body: Vec<Atom>) -> Atom {
    Atom::new(AtomKind::Surd { body, index: None })
}

pub fn left_right(body: Vec<Atom>, left: Option<&str>, right: Option<&str>) -> Atom {
    Atom::new(AtomKind::LeftRight {
        body,
        left: left.map(str::to_owned),
        right: right.map(str::to_owned),
    })
}

/// A list of ordinary symbols, one per character.
pub fn ords(text: &str) -> Vec<Atom> {
    text.chars().map(|ch| Atom::ord(ch.to_string())).collect()
}

/// `span` and everything under it.
pub fn walk(span: &Span) -> Vec<&Span> {
    span.descendants()
}

pub fn find_class<'a>(span: &'a Span, class_name: &str) -> Option<&'a Span> {
    walk(span).into_iter().find(|child| child.has_class(class_name))
}

/// Rows of a vlist, bottom first, without the font size sentinel.
pub fn vlist_rows(vlist: &Span) -> Vec<&Span> {
    vlist
        .children()
        .iter()
        .filter(|row| !row.has_class("fontsize-ensurer"))
        .collect()
}

/// Raise of every row of a vlist.
pub fn raises(vlist: &Span) -> Vec<f64> {
    vlist_rows(vlist).into_iter().map(row_raise).collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Run a described test case; a returned error or a panic fails the test
/// with the description.
pub fn it<F>(desc: &str, f: F)
where
    F: FnOnce() -> Result<(), LayoutError> + UnwindSafe,
{
    let _ = env_logger::builder().is_test(true).try_init();
    match catch_unwind(f) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => panic!("{desc}: {err}"),
        Err(payload) => {
            let msg = payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| payload.downcast_ref::<&str>().copied())
                .unwrap_or("<non-string panic>");
            panic!("{desc}: {msg}");
        }
    }
}
