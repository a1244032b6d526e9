//! Wrapper resolution: single-step and full-chain unwrapping, plus
//! interception inspection.
//!
//! Both traversals read the wrapper's internal target field directly and
//! never consult a trap handler, so the results are unaffected by traps that
//! fake identity, equality or prototype lookups.

use crate::{
    arena::{EntityId, FuncArena},
    entity::EntityData,
    errors::ArgumentError,
    value::Value,
};

/// The (target, handler) pair of an interception wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProxyConfig {
    pub target: EntityId,
    pub handler: EntityId,
}

impl FuncArena {
    /// Peels exactly one binding layer.
    ///
    /// Returns the bound target if the callable is a binding wrapper at the
    /// top level, `None` otherwise. Repeated calls walk the chain one layer
    /// at a time.
    pub fn bound_target(&self, value: &Value) -> Result<Option<EntityId>, ArgumentError> {
        let id = self.callable_id(value)?;
        Ok(match self.get(id) {
            EntityData::Bound(bound) => Some(bound.target),
            _ => None,
        })
    }

    /// Fully unwraps an entity through both binding and interception layers.
    ///
    /// Returns the entity itself if it carries no wrapper. Defined uniformly
    /// for callables and for intercepted plain objects; a plain object with
    /// no wrapper is its own origin.
    pub fn origin(&self, value: &Value) -> Result<EntityId, ArgumentError> {
        let id = self.entity_id(value)?;
        Ok(self.origin_of(id))
    }

    /// Chain walk behind [`FuncArena::origin`]. Terminates because wrapper
    /// targets always precede the wrapper in the arena.
    pub(crate) fn origin_of(&self, mut id: EntityId) -> EntityId {
        loop {
            match self.get(id) {
                EntityData::Bound(bound) => id = bound.target,
                EntityData::Proxy(proxy) => id = proxy.target,
                EntityData::Function(_) | EntityData::Object(_) => return id,
            }
        }
    }

    /// Unwraps binding layers only, stopping at the nearest non-binding
    /// presentation. Interception layers are left in place.
    pub(crate) fn unwrap_bound(&self, mut id: EntityId) -> EntityId {
        while let EntityData::Bound(bound) = self.get(id) {
            id = bound.target;
        }
        id
    }

    /// Returns the interception configuration of a top-level proxy entity.
    ///
    /// `None` for any non-proxy entity, callable or not. Works identically
    /// for interception wrappers over callables and over plain objects.
    pub fn proxy_config(&self, value: &Value) -> Result<Option<ProxyConfig>, ArgumentError> {
        let id = self.entity_id(value)?;
        Ok(match self.get(id) {
            EntityData::Proxy(proxy) => Some(ProxyConfig {
                target: proxy.target,
                handler: proxy.handler,
            }),
            _ => None,
        })
    }
}
