//! Layout errors
//!
//! Layout is total over well-formed atom trees. The only failures are inputs
//! that name an impossible size, and trees nested deeper than the configured
//! bound.

#[cfg(feature = "backtrace")]
use std::backtrace::Backtrace;
use thiserror::Error;

/// Error returned by every fallible layout operation.
#[derive(Debug, Error)]
#[error("texbox layout error: {kind}")]
pub struct LayoutError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<LayoutErrorKind>,
    /// Backtrace of the error stack
    #[cfg(feature = "backtrace")]
    pub backtrace: Box<Backtrace>,
}

impl LayoutError {
    /// Create a new LayoutError with the given kind
    pub fn new<T: Into<LayoutErrorKind>>(kind: T) -> Self {
        Self {
            kind: Box::new(kind.into()),
            #[cfg(feature = "backtrace")]
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }
}

impl From<LayoutErrorKind> for LayoutError {
    fn from(kind: LayoutErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Describes the specific reason for a [`LayoutError`].
#[allow(missing_docs)]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutErrorKind {
    #[error("atom tree nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("sized delimiter size must be between 1 and 4, got {size}")]
    InvalidSizedDelimiter { size: usize },
    #[error("font size must be between 1 and 10, got {size}")]
    InvalidFontSize { size: usize },
}
