//! Internal entity metadata: the non-overridable side of every callable.
//!
//! Everything the engine reports is read from these records, never from any
//! user-visible surface of the entity. The records are populated once at
//! creation time and, apart from the name slots, never change.

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::{arena::EntityId, value::Value};

/// The declaration form of a callable, fixed when the callable is created.
///
/// Wrappers never change the kind; it is always a property of the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FuncKind {
    /// A plain `function` declaration or expression.
    Ordinary,
    /// An arrow function.
    Arrow,
    /// An `async function`.
    Async,
    /// A `function*` generator.
    Generator,
    /// An `async function*` generator.
    AsyncGenerator,
    /// A `class` declaration or expression.
    Class,
    /// A native builtin such as `Array` or `parseInt`.
    Native(Builtin),
}

impl FuncKind {
    /// Whether this declaration form permits the construct protocol.
    ///
    /// This is the intrinsic contract: an interception layer may veto
    /// constructor calls at runtime, but that never changes this flag.
    #[must_use]
    pub fn construct_contract(self) -> bool {
        match self {
            Self::Ordinary | Self::Class => true,
            Self::Native(builtin) => builtin.construct_contract(),
            Self::Arrow | Self::Async | Self::Generator | Self::AsyncGenerator => false,
        }
    }

    #[must_use]
    pub fn is_async(self) -> bool {
        matches!(self, Self::Async | Self::AsyncGenerator)
    }

    #[must_use]
    pub fn is_generator(self) -> bool {
        matches!(self, Self::Generator | Self::AsyncGenerator)
    }
}

/// Native builtin callables known to the engine.
///
/// The constructor builtins historically exhibit class-constructor semantics
/// and are treated as classes by the loose class detector; the plain native
/// functions (`parseInt` and friends) are callable but never constructible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, strum::Display, strum::EnumString,
)]
pub enum Builtin {
    Object,
    Array,
    Function,
    Boolean,
    Number,
    String,
    Date,
    RegExp,
    Error,
    #[strum(serialize = "parseInt")]
    ParseInt,
    #[strum(serialize = "parseFloat")]
    ParseFloat,
    #[strum(serialize = "isNaN")]
    IsNan,
    #[strum(serialize = "eval")]
    Eval,
}

impl Builtin {
    /// Whether this builtin may be invoked via the construct protocol.
    #[must_use]
    pub fn construct_contract(self) -> bool {
        !matches!(self, Self::ParseInt | Self::ParseFloat | Self::IsNan | Self::Eval)
    }
}

/// Trap names an interception handler may define.
///
/// The engine records which traps a handler carries but never invokes one;
/// classification and unwrapping are unaffected by trap behavior.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "camelCase")]
pub enum Trap {
    Apply,
    Construct,
    Get,
    Set,
    Has,
    DeleteProperty,
    GetPrototypeOf,
    OwnKeys,
}

/// Declaration of a user-defined function, consumed by [`crate::FuncArena::declare`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FuncDecl {
    pub kind: FuncKind,
    pub name: String,
    pub params: Vec<String>,
    pub body: String,
}

impl FuncDecl {
    pub fn new(kind: FuncKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            params: Vec::new(),
            body: String::new(),
        }
    }

    #[must_use]
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Metadata record for a function entity.
///
/// The name is modeled as two slots: `name` is the authoritative internal
/// field, always written by renaming; `name_surface` is the user-facing field
/// that ordinary reads prefer once it has been independently set, and which
/// can be frozen against further surface assignment. Freezing never blocks
/// the authoritative field.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub(crate) struct FunctionData {
    pub kind: FuncKind,
    pub construct_contract: bool,
    /// Authoritative name slot.
    pub name: String,
    /// User-facing name slot, present only after an explicit surface assignment.
    pub name_surface: Option<String>,
    /// Standard configurability rule: once frozen, surface assignment is a silent no-op.
    pub name_frozen: bool,
    /// Canonical declaration text, synthesized once at creation.
    pub source: String,
    /// User-installed stringification override. Canonical reads ignore it.
    pub to_string_override: Option<String>,
}

/// A plain (non-callable) object entity, optionally carrying a trap table
/// so it can serve as an interception handler.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct ObjectData {
    pub traps: AHashSet<Trap>,
}

/// A binding wrapper: fixes a receiver and a leading argument prefix ahead
/// of a callable target. Immutable once created.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub(crate) struct BoundWrapper {
    pub target: EntityId,
    pub receiver: Value,
    pub bound_args: SmallVec<[Value; 4]>,
}

/// An interception wrapper over a callable or plain object. The handler is
/// referenced, not owned; callers may hold independent references to both.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub(crate) struct ProxyWrapper {
    pub target: EntityId,
    pub handler: EntityId,
}

/// Storage for one entity in the arena.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub(crate) enum EntityData {
    Function(FunctionData),
    Object(ObjectData),
    Bound(BoundWrapper),
    Proxy(ProxyWrapper),
}

impl EntityData {
    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Object(_) => "object",
            Self::Bound(_) => "bound function",
            Self::Proxy(_) => "proxy",
        }
    }
}
