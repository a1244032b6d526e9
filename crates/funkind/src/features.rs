//! Capability classification: the six-flag record and the legacy tri-state
//! variant.
//!
//! Constructor, async and generator flags are read from the origin's
//! declaration record, so wrapping a callable never changes them and no
//! interception layer can misreport them.

use crate::{arena::FuncArena, entity::EntityData, errors::ArgumentError, value::Value};

/// Intrinsic capability flags of a callable.
///
/// `is_proxy` and `is_bound` describe the top-level presentation only; the
/// remaining flags are properties of the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionFeatures {
    pub is_constructor: bool,
    pub is_async_function: bool,
    pub is_generator_function: bool,
    pub is_proxy: bool,
    pub is_callable: bool,
    pub is_bound: bool,
}

/// Three-valued answer for the legacy arrow-function flag.
///
/// Kept as an explicit enumeration rather than a boolean with an escape
/// hatch, so the ambiguous state stays visible and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Trilean {
    True,
    False,
    Indeterminate,
}

impl Trilean {
    #[must_use]
    pub fn is_true(self) -> bool {
        self == Self::True
    }

    #[must_use]
    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }
}

impl From<bool> for Trilean {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

/// The legacy, narrower classification record.
///
/// `is_arrow_function` can only be decided when the origin is a plain
/// non-constructible form; async and generator semantics make the flag set
/// unable to distinguish an arrow declaration from a non-arrow one, which is
/// reported as [`Trilean::Indeterminate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindFlags {
    pub is_constructor: bool,
    pub is_async_function: bool,
    pub is_generator_function: bool,
    pub is_arrow_function: Trilean,
}

impl FuncArena {
    /// Classifies a callable, returning its intrinsic capability flags.
    ///
    /// The input must resolve to a callable origin; an interception wrapper
    /// over a plain object is rejected with [`ArgumentError::NotCallable`].
    pub fn features(&self, value: &Value) -> Result<FunctionFeatures, ArgumentError> {
        let id = self.callable_id(value)?;
        let (is_proxy, is_bound) = match self.get(id) {
            EntityData::Proxy(_) => (true, false),
            EntityData::Bound(_) => (false, true),
            EntityData::Function(_) | EntityData::Object(_) => (false, false),
        };
        let func = self.function(self.origin_of(id));
        Ok(FunctionFeatures {
            is_constructor: func.construct_contract,
            is_async_function: func.kind.is_async(),
            is_generator_function: func.kind.is_generator(),
            is_proxy,
            // callable_id already proved the origin is invocable
            is_callable: true,
            is_bound,
        })
    }

    /// Legacy tri-state classifier.
    pub fn kind_flags(&self, value: &Value) -> Result<KindFlags, ArgumentError> {
        let id = self.callable_id(value)?;
        let func = self.function(self.origin_of(id));
        let is_constructor = func.construct_contract;
        let is_async_function = func.kind.is_async();
        let is_generator_function = func.kind.is_generator();
        let is_arrow_function = if is_constructor {
            Trilean::False
        } else if is_async_function || is_generator_function {
            Trilean::Indeterminate
        } else {
            Trilean::True
        };
        Ok(KindFlags {
            is_constructor,
            is_async_function,
            is_generator_function,
            is_arrow_function,
        })
    }
}
