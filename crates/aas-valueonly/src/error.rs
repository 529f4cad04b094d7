//! Error types for value-only serialization and update.

use thiserror::Error;

/// Error raised while producing or applying a value-only document.
///
/// All violations are structural and detected synchronously; the codec never
/// retries or recovers. Every variant carries the id-short path (the
/// dot-joined chain of idShorts from the traversal root) at which the
/// violation occurred, so callers can attribute failures without re-walking
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueOnlyError {
    /// A wrapper object had no fields where exactly one was required.
    #[error("{context} at idShort path '{path}', as the passed value has no fields")]
    EmptyValue { context: String, path: String },

    /// A wrapper object had more than one field where exactly one was required.
    #[error("{context} at idShort path '{path}', as the passed value has more than one field")]
    AmbiguousValue { context: String, path: String },

    /// Two children of a named collection share the same idShort.
    #[error("duplicated idShort '{id_short}' under idShort path '{path}'")]
    DuplicateIdShort { id_short: String, path: String },

    /// The incoming value-only node has the wrong JSON shape for the target kind.
    #[error("unexpected {found} at idShort path '{path}', expected {expected}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
        path: String,
    },

    /// An incoming field names an idShort with no matching element in the tree.
    #[error("cannot find submodel element with idShort '{id_short}' at idShort path '{path}'")]
    MissingElement { id_short: String, path: String },

    /// A positional list update supplied a different number of values than
    /// there are existing children.
    #[error("list at idShort path '{path}' has {expected} elements but {found} values were supplied")]
    LengthMismatch {
        expected: usize,
        found: usize,
        path: String,
    },

    /// The targeted element's kind has no value-only representation.
    #[error("element at idShort path '{path}' has no value-only representation")]
    NotRepresentable { path: String },

    /// An element in a named context has no idShort to key its value by.
    #[error("element at idShort path '{path}' has no idShort")]
    MissingIdShort { path: String },

    /// A required field of a structured value is absent.
    #[error("required field '{field}' is missing at idShort path '{path}'")]
    MissingField { field: &'static str, path: String },

    /// A structured value carries a field the target kind does not define.
    #[error("unexpected field '{field}' at idShort path '{path}'")]
    UnexpectedField { field: String, path: String },

    /// A scalar payload could not be interpreted (bad base64, unknown enum
    /// literal, ...).
    #[error("invalid value at idShort path '{path}': {reason}")]
    InvalidValue { reason: String, path: String },
}

impl ValueOnlyError {
    /// Returns the id-short path at which this error was raised.
    pub fn path(&self) -> &str {
        match self {
            ValueOnlyError::EmptyValue { path, .. }
            | ValueOnlyError::AmbiguousValue { path, .. }
            | ValueOnlyError::DuplicateIdShort { path, .. }
            | ValueOnlyError::UnexpectedShape { path, .. }
            | ValueOnlyError::MissingElement { path, .. }
            | ValueOnlyError::LengthMismatch { path, .. }
            | ValueOnlyError::NotRepresentable { path }
            | ValueOnlyError::MissingIdShort { path }
            | ValueOnlyError::MissingField { path, .. }
            | ValueOnlyError::UnexpectedField { path, .. }
            | ValueOnlyError::InvalidValue { path, .. } => path,
        }
    }
}
