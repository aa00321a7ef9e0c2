//! Protocol decode error type.

use thiserror::Error;

/// Failure while decoding a protocol object from JSON.
///
/// Decoding never recovers internally: the first failing field aborts the
/// whole object decode (and any enclosing array decode) and no partial
/// instance is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// A JSON value exists under `key` but is not coercible to the declared
    /// kind (e.g. a string where a number is expected).
    #[error("type mismatch for `{key}`: expected {expected}")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
    },

    /// A required key is absent (or explicitly `null`).
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}
