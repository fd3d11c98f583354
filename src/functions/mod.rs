//! Builders for each family of atoms
//!
//! Every builder takes the atom's fields and a [`Context`](crate::context::Context)
//! and returns the finished span. The dispatcher in [`crate::decompose`]
//! picks the builder; builders recurse through it for their children.
//!
//! ## Key Components
//!
//! - **Symbols** ([`symbol`]): single glyphs of every spacing class.
//! - **Scripts** ([`supsub`]): rule 18 superscript and subscript placement,
//!   shared with [`op`] for operators that keep their scripts at the side.
//! - **Fractions** ([`genfrac`]): rule 15, with optional fences.
//! - **Delimiters** ([`delimsizing`]): `\big`-family, `\left..\right` and
//!   `\middle`.
//! - **Radicals** ([`sqrt`]), **accents** ([`accent`]), **lines**
//!   ([`overline`]) and **frames** ([`enclose`]).
//! - **Scoping** ([`color`], [`styling`], [`sizing`]): partial groups whose
//!   spans join the surrounding list.

pub mod accent;
pub mod color;
pub mod delimsizing;
pub mod enclose;
pub mod genfrac;
pub mod kern;
pub mod lap;
pub mod mclass;
pub mod op;
pub mod ordgroup;
pub mod overline;
pub mod phantom;
pub mod rule;
pub mod sizing;
pub mod sqrt;
pub mod styling;
pub mod supsub;
pub mod symbol;
pub mod utils;
