//! Canonical stringification, immune to user-installed overrides.

use crate::{
    arena::{EntityId, FuncArena},
    errors::ArgumentError,
    value::Value,
};

impl FuncArena {
    /// Returns the authoritative declaration text of a callable.
    ///
    /// The text was synthesized from the true declaration form at creation
    /// and stored internally, so replacing the callable's own or its type's
    /// stringification after the fact has no effect on this result.
    pub fn canonical_source(&self, value: &Value) -> Result<&str, ArgumentError> {
        let id = self.callable_id(value)?;
        Ok(&self.function(self.origin_of(id)).source)
    }

    /// Installs a user-facing stringification override on a callable.
    ///
    /// Only surface reads through [`FuncArena::surface_source`] see it.
    pub fn override_to_string(&mut self, id: EntityId, text: impl Into<String>) {
        self.function_mut(self.origin_of(id)).to_string_override = Some(text.into());
    }

    /// Surface stringification read: the override if one is installed,
    /// otherwise the stored declaration text.
    #[must_use]
    pub fn surface_source(&self, id: EntityId) -> &str {
        let func = self.function(self.origin_of(id));
        func.to_string_override.as_deref().unwrap_or(&func.source)
    }
}
