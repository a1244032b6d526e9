//! The closed set of runtime values accepted at the API boundary.

use crate::arena::EntityId;

/// A runtime value handed to the engine.
///
/// Entities (functions, objects, wrappers) are referenced through
/// [`Value::Ref`]; everything else is a primitive and is rejected wherever an
/// entity is required. Keeping the set closed means argument validation is a
/// single match, not structural duck-typing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Reference to an arena entity.
    Ref(EntityId),
}

impl Value {
    /// Type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) | Self::Float(_) => "number",
            Self::Str(_) => "string",
            Self::Ref(_) => "object",
        }
    }

    /// Returns the referenced entity, if this value is a reference.
    #[must_use]
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            Self::Ref(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<EntityId> for Value {
    fn from(id: EntityId) -> Self {
        Self::Ref(id)
    }
}
