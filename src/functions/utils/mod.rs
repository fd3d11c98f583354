//! Helpers shared by several atom builders.

mod assemble_sup_sub;

pub use assemble_sup_sub::assemble_sup_sub;
