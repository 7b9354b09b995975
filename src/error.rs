//! Error type for fallible collection operations.

use thiserror::Error;

/// Errors surfaced by [`Collection`](crate::Collection) operations.
///
/// Failures never leave a collection in a modified state: the mutating
/// methods are infallible, and every fallible method either borrows the
/// receiver or builds fresh storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A direct indexed read addressed a key that is not present.
    ///
    /// Contrast with [`Collection::get`](crate::Collection::get), which
    /// tolerates absence by returning `None`.
    #[error("no entry found for key `{0}`")]
    KeyNotFound(String),

    /// [`Collection::flip`](crate::Collection::flip) met a value that cannot
    /// serve as a key. Only strings and non-negative integers are key-able.
    #[error("cannot use {0} value as a key")]
    UnsupportedKeyType(&'static str),
}
