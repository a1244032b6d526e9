//! Forced name mutation and ordinary name reads.
//!
//! The authoritative name slot belongs to the origin function; binding layers
//! contribute only the `bound ` presentation prefix and interception layers
//! are transparent to name reads.

use crate::{
    arena::{EntityId, FuncArena},
    entity::EntityData,
    errors::ArgumentError,
    value::Value,
};

/// The name argument accepted by [`FuncArena::set_name`]: a plain string or a
/// symbolic label with an optional description.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NameArg {
    Str(String),
    Symbol(Option<String>),
}

impl From<&str> for NameArg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for NameArg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl NameArg {
    /// The text actually written to the name slot: symbolic labels become
    /// `[description]`, or the empty string when they carry none.
    fn into_text(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Symbol(Some(desc)) => format!("[{desc}]"),
            Self::Symbol(None) => String::new(),
        }
    }
}

impl FuncArena {
    /// Unconditionally overwrites the authoritative name slot of a callable.
    ///
    /// Only the authoritative field is touched, so the write succeeds no
    /// matter how the user-facing slot has been configured; freezing the
    /// surface slot cannot block it. Returns the same entity.
    pub fn set_name(&mut self, value: &Value, name: impl Into<NameArg>) -> Result<EntityId, ArgumentError> {
        let id = self.callable_id(value)?;
        let origin = self.origin_of(id);
        self.function_mut(origin).name = name.into().into_text();
        Ok(id)
    }

    /// Ordinary surface assignment of the name, subject to the standard
    /// configurability rule: a silent no-op once the slot is frozen.
    pub fn define_name(&mut self, id: EntityId, name: impl Into<String>) {
        let func = self.function_mut(self.origin_of(id));
        if !func.name_frozen {
            func.name_surface = Some(name.into());
        }
    }

    /// Declares the user-facing name slot immutable. Does not change either
    /// name field.
    pub fn freeze_name(&mut self, id: EntityId) {
        self.function_mut(self.origin_of(id)).name_frozen = true;
    }

    /// Ordinary name read, as a surface accessor would see it.
    ///
    /// Prefers the user-facing slot when one was independently set, falling
    /// back to the authoritative field otherwise. Each binding layer prepends
    /// `bound `; interception layers are transparent.
    #[must_use]
    pub fn name_of(&self, id: EntityId) -> String {
        let mut prefix = String::new();
        let mut cur = id;
        loop {
            match self.get(cur) {
                EntityData::Bound(bound) => {
                    prefix.push_str("bound ");
                    cur = bound.target;
                }
                EntityData::Proxy(proxy) => cur = proxy.target,
                EntityData::Function(func) => {
                    let name = func.name_surface.as_deref().unwrap_or(&func.name);
                    return if prefix.is_empty() { name.to_owned() } else { prefix + name };
                }
                EntityData::Object(_) => return prefix,
            }
        }
    }
}
