//! Entity arena: the read-only side table behind every classification answer.
//!
//! Entities live in a vector and are referenced by [`EntityId`]. Ids are
//! assigned monotonically and a wrapper can only ever be constructed around a
//! previously allocated entity, so `wrapper.target < wrapper.id` always holds
//! and wrapper chains are acyclic and finite by construction.
//!
//! All query operations read metadata from this arena instead of any
//! user-visible property of the entity, which is what keeps the answers
//! correct after surface tampering.

use smallvec::SmallVec;

use crate::{
    entity::{BoundWrapper, Builtin, EntityData, FuncDecl, FuncKind, FunctionData, ObjectData, ProxyWrapper, Trap},
    errors::ArgumentError,
    value::Value,
};

/// Index of an entity in the arena.
///
/// Uses `u32` to save space (4 bytes vs 8 bytes for `usize`). This limits us
/// to ~4 billion entities, which is more than sufficient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct EntityId(u32);

impl EntityId {
    /// Returns the raw index value.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena of callable entities and their internal metadata.
///
/// Creation methods (`declare`, `native`, `object`, `handler`, `bind`,
/// `intercept`) populate the side table; the classification, unwrapping,
/// renaming and stringification operations defined in the sibling modules
/// query it.
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct FuncArena {
    entities: Vec<EntityData>,
}

impl FuncArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, data: EntityData) -> EntityId {
        let id = EntityId(self.entities.len().try_into().expect("EntityId overflow"));
        self.entities.push(data);
        id
    }

    /// Looks up an entity by id.
    ///
    /// # Panics
    ///
    /// Panics if the `EntityId` is not from this arena.
    #[inline]
    pub(crate) fn get(&self, id: EntityId) -> &EntityData {
        &self.entities[id.index()]
    }

    /// Looks up a function entity by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a function entity. Callers reach this
    /// only through ids already validated to resolve to a function.
    pub(crate) fn function(&self, id: EntityId) -> &FunctionData {
        match self.get(id) {
            EntityData::Function(func) => func,
            other => panic!("entity is not a function: {}", other.type_name()),
        }
    }

    pub(crate) fn function_mut(&mut self, id: EntityId) -> &mut FunctionData {
        match &mut self.entities[id.index()] {
            EntityData::Function(func) => func,
            other => panic!("entity is not a function: {}", other.type_name()),
        }
    }

    /// Declares a user-defined function.
    ///
    /// The construct contract and canonical declaration text are derived here,
    /// once, and never change for the life of the entity.
    pub fn declare(&mut self, decl: FuncDecl) -> EntityId {
        let source = synthesize_source(&decl);
        self.push(EntityData::Function(FunctionData {
            kind: decl.kind,
            construct_contract: decl.kind.construct_contract(),
            name: decl.name,
            name_surface: None,
            name_frozen: false,
            source,
            to_string_override: None,
        }))
    }

    /// Creates a native builtin callable.
    pub fn native(&mut self, builtin: Builtin) -> EntityId {
        self.push(EntityData::Function(FunctionData {
            kind: FuncKind::Native(builtin),
            construct_contract: builtin.construct_contract(),
            name: builtin.to_string(),
            name_surface: None,
            name_frozen: false,
            source: format!("function {builtin}() {{ [native code] }}"),
            to_string_override: None,
        }))
    }

    /// Creates a plain object entity.
    pub fn object(&mut self) -> EntityId {
        self.push(EntityData::Object(ObjectData::default()))
    }

    /// Creates a plain object entity carrying a trap table, for use as an
    /// interception handler.
    pub fn handler(&mut self, traps: impl IntoIterator<Item = Trap>) -> EntityId {
        self.push(EntityData::Object(ObjectData {
            traps: traps.into_iter().collect(),
        }))
    }

    /// Whether the object at `id` defines the given trap.
    ///
    /// False for non-object entities; the engine never invokes a trap, it
    /// only reports whether the handler carries one.
    #[must_use]
    pub fn handler_defines(&self, id: EntityId, trap: Trap) -> bool {
        match self.get(id) {
            EntityData::Object(obj) => obj.traps.contains(&trap),
            _ => false,
        }
    }

    /// Creates a binding wrapper around a callable target, fixing a receiver
    /// and a leading argument prefix.
    pub fn bind(
        &mut self,
        target: &Value,
        receiver: Value,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<EntityId, ArgumentError> {
        let target = self.callable_id(target)?;
        let bound_args: SmallVec<[Value; 4]> = args.into_iter().collect();
        Ok(self.push(EntityData::Bound(BoundWrapper {
            target,
            receiver,
            bound_args,
        })))
    }

    /// Creates an interception wrapper over any entity, callable or not.
    ///
    /// The handler must be a plain object entity; its traps are recorded but
    /// never invoked by this engine.
    pub fn intercept(&mut self, target: &Value, handler: &Value) -> Result<EntityId, ArgumentError> {
        let target = self.entity_id(target)?;
        let handler = self.entity_id(handler)?;
        match self.get(handler) {
            EntityData::Object(_) => Ok(self.push(EntityData::Proxy(ProxyWrapper { target, handler }))),
            other => Err(ArgumentError::NotAHandler {
                type_name: other.type_name().to_owned(),
            }),
        }
    }

    /// Validates that a value references an entity. Primitives are rejected.
    pub(crate) fn entity_id(&self, value: &Value) -> Result<EntityId, ArgumentError> {
        match value {
            Value::Ref(id) => Ok(*id),
            other => Err(ArgumentError::NotAnEntity {
                type_name: other.type_name().to_owned(),
            }),
        }
    }

    /// Validates that a value references a callable: an entity whose fully
    /// unwrapped origin is a function. An interception wrapper over a plain
    /// object is not callable and is rejected here.
    pub(crate) fn callable_id(&self, value: &Value) -> Result<EntityId, ArgumentError> {
        let Value::Ref(id) = value else {
            return Err(ArgumentError::NotCallable {
                type_name: value.type_name().to_owned(),
            });
        };
        if matches!(self.get(self.origin_of(*id)), EntityData::Function(_)) {
            Ok(*id)
        } else {
            Err(ArgumentError::NotCallable {
                type_name: self.get(*id).type_name().to_owned(),
            })
        }
    }
}

/// Builds the canonical declaration text for a user-defined function.
///
/// The text always opens with the form that matches the declared kind, so
/// canonical reads can never be fooled into reporting a different shape.
fn synthesize_source(decl: &FuncDecl) -> String {
    let name = &decl.name;
    let params = decl.params.join(", ");
    let body = &decl.body;
    match decl.kind {
        FuncKind::Ordinary => format!("function {name}({params}) {{{body}}}"),
        FuncKind::Arrow => format!("({params}) => {{{body}}}"),
        FuncKind::Async => format!("async function {name}({params}) {{{body}}}"),
        FuncKind::Generator => format!("function* {name}({params}) {{{body}}}"),
        FuncKind::AsyncGenerator => format!("async function* {name}({params}) {{{body}}}"),
        FuncKind::Class => format!("class {name} {{{body}}}"),
        FuncKind::Native(builtin) => format!("function {builtin}() {{ [native code] }}"),
    }
}
