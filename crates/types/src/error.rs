//! Schema error types.

use thiserror::Error;

/// Error returned when a wire string does not match any variant of a
/// closed vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownWireValue {
    /// Which vocabulary was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownWireValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
