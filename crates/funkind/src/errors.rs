//! The single error kind raised by the engine.
//!
//! Validation happens before any other logic, so an error never leaves
//! partial state behind. Once an input type-checks, every operation is a
//! total, deterministic function.

use std::fmt;

/// Raised when an operation receives a value outside the set of entity forms
/// it accepts: a primitive where an entity was required, or a non-callable
/// entity where a callable was required.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArgumentError {
    /// A callable was required.
    NotCallable { type_name: String },
    /// Any entity (callable or plain object) was required.
    NotAnEntity { type_name: String },
    /// An interception handler must be a plain object entity.
    NotAHandler { type_name: String },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCallable { type_name } => {
                write!(f, "argument must be a callable, got {type_name}")
            }
            Self::NotAnEntity { type_name } => {
                write!(f, "argument must be an entity, got {type_name}")
            }
            Self::NotAHandler { type_name } => {
                write!(f, "handler must be a plain object, got {type_name}")
            }
        }
    }
}

impl std::error::Error for ArgumentError {}
