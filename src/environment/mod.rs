//! Environments: matrices and arrays

pub mod array;
