//! Core type definitions shared across the layout engine

mod layout_error;
pub use layout_error::{LayoutError, LayoutErrorKind};

mod settings;
pub use settings::{DEFAULT_MAX_DEPTH, Settings};

mod style_bag;
pub use style_bag::{StyleBag, StyleBagIter, StyleProperty, StyleValue};
