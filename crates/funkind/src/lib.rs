//! Callable classification and unwrapping engine.
//!
//! This crate models the callable layer of a managed runtime and answers
//! questions about callables that remain correct even when the callable's
//! visible properties, prototype chain or stringification have been tampered
//! with. Every answer is read from internal, non-overridable metadata held in
//! a [`FuncArena`] side table, never from the entity's public surface.
//!
//! The engine provides five operation families:
//!
//! - classification: [`FuncArena::features`] and the legacy tri-state
//!   [`FuncArena::kind_flags`]
//! - wrapper resolution: [`FuncArena::bound_target`] (single step) and
//!   [`FuncArena::origin`] (full chain)
//! - interception inspection: [`FuncArena::proxy_config`]
//! - class detection: [`FuncArena::is_class`] and the stricter
//!   [`FuncArena::is_class_constructor`]
//! - forced renaming and canonical stringification:
//!   [`FuncArena::set_name`] and [`FuncArena::canonical_source`]
//!
//! The engine never changes whether a call succeeds; it only reports and
//! relabels.

mod arena;
mod class;
mod entity;
mod errors;
mod features;
mod name;
mod resolve;
mod source;
mod value;

pub use arena::{EntityId, FuncArena};
pub use entity::{Builtin, FuncDecl, FuncKind, Trap};
pub use errors::ArgumentError;
pub use features::{FunctionFeatures, KindFlags, Trilean};
pub use name::NameArg;
pub use resolve::ProxyConfig;
pub use value::Value;
