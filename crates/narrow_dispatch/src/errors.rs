//! Error types for dispatch and table construction.
//!
//! `DispatchError` is raised while handling a single value or call.
//! `TableError` is raised by `build()` and means the table or overload set
//! was never created. Handler failures are not wrapped: a handler returns
//! the table's own error type and its errors reach the caller unchanged.

use thiserror::Error;

use crate::{ArgShape, Discriminant, NullPolicy, Signature};

/// Failure of a single dispatch or overloaded call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The value's discriminant has no registered handler.
    #[error("unhandled shape: {discriminant}")]
    UnhandledShape { discriminant: Discriminant },

    /// The argument list matches no declared signature.
    #[error("no overload of `{name}` matches arguments {args}")]
    NoMatchingOverload { name: String, args: ArgShape },

    /// A required field is absent and has no declared default.
    #[error("shape {shape} has no field `{field}`")]
    MissingField { shape: Discriminant, field: String },
}

impl DispatchError {
    /// Stable code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnhandledShape { .. } => "N0001",
            Self::NoMatchingOverload { .. } => "N0002",
            Self::MissingField { .. } => "N0003",
        }
    }
}

/// Rejected handler table or overload set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two handlers were registered for one discriminant.
    #[error("duplicate handler for shape {discriminant}")]
    DuplicateHandler { discriminant: Discriminant },

    /// A declared shape has no handler.
    #[error("no handler for declared shape {discriminant}")]
    MissingHandler { discriminant: Discriminant },

    /// The null policy can never produce this discriminant.
    #[error("handler for shape {discriminant} is unreachable under the {policy} null policy")]
    UnreachableHandler {
        discriminant: Discriminant,
        policy: NullPolicy,
    },

    /// Field defaults were declared for a shape without a structural handler.
    #[error("defaults for shape {discriminant} apply to no object handler")]
    MisplacedDefaults { discriminant: Discriminant },

    /// An overload set was built without signatures.
    #[error("overload set `{name}` declares no signatures")]
    EmptyOverloadSet { name: String },

    /// The same signature was declared twice.
    #[error("overload `{name}{signature}` is declared twice")]
    DuplicateSignature { name: String, signature: Signature },
}

impl TableError {
    /// Stable code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateHandler { .. } => "N0101",
            Self::MissingHandler { .. } => "N0102",
            Self::UnreachableHandler { .. } => "N0103",
            Self::EmptyOverloadSet { .. } => "N0104",
            Self::DuplicateSignature { .. } => "N0105",
            Self::MisplacedDefaults { .. } => "N0106",
        }
    }
}

#[cfg(test)]
mod tests;
