//! Class detection, in loose and strict flavors.

use crate::{
    arena::FuncArena,
    entity::{EntityData, FuncKind},
    errors::ArgumentError,
    value::Value,
};

impl FuncArena {
    /// Whether a callable has class-constructor semantics.
    ///
    /// Binding layers are peeled first, so a class bound with fixed arguments
    /// still reports true. Interception layers are not peeled: detection
    /// targets the nearest non-binding presentation, and a proxy presentation
    /// is never a class. Native constructor builtins (`Object`, `Array`,
    /// `Date`, ...) count as classes here.
    pub fn is_class(&self, value: &Value) -> Result<bool, ArgumentError> {
        let id = self.unwrap_bound(self.callable_id(value)?);
        Ok(match self.get(id) {
            EntityData::Function(func) => match func.kind {
                FuncKind::Class => true,
                FuncKind::Native(builtin) => builtin.construct_contract(),
                _ => false,
            },
            _ => false,
        })
    }

    /// Strict variant: true only for entities declared with the class form,
    /// excluding native builtins. Binding layers are peeled as in
    /// [`FuncArena::is_class`].
    pub fn is_class_constructor(&self, value: &Value) -> Result<bool, ArgumentError> {
        let id = self.unwrap_bound(self.callable_id(value)?);
        Ok(match self.get(id) {
            EntityData::Function(func) => func.kind == FuncKind::Class,
            _ => false,
        })
    }
}
