//! Arena indices and the `ena` unification key for type variables.

use ena::unify::{NoError, UnifyKey, UnifyValue};
use serde::Serialize;

/// Index into a [`crate::arena::TypeArena`]'s backing `Vec<TypeData>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const NONE: TypeId = TypeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// A unification-table key for a fresh `TypeVar` (spec §3.1, §4.3.2).
///
/// `ena`'s table stores the optional resolved type directly as the key's
/// value, so `prune`'s instance-chain walk is the table's own path
/// compression rather than hand-rolled union-find bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeVarId(u32);

impl UnifyKey for TypeVarId {
    type Value = TypeVarValue;

    fn index(&self) -> u32 {
        self.0
    }

    fn from_index(i: u32) -> Self {
        TypeVarId(i)
    }

    fn tag() -> &'static str {
        "TypeVarId"
    }
}

/// Index into a [`crate::arena::TypeArena`]'s alias table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AliasId(pub u32);

/// Index into a [`crate::arena::TypeArena`]'s namespace table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NamespaceId(pub u32);

/// The value a `TypeVarId` unifies to: either still-unbound (with an
/// optional constraint) or resolved to a concrete `TypeId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeVarValue {
    Unbound { constraint: Option<TypeId> },
    Bound(TypeId),
}

impl UnifyValue for TypeVarValue {
    type Error = NoError;

    fn unify_values(value1: &Self, value2: &Self) -> Result<Self, NoError> {
        // `ena` calls this when two variables are unioned directly (rare in
        // this checker — `unify` resolves variables against concrete types
        // via `set_instance` rather than variable-variable merges). Prefer
        // whichever side is already bound; otherwise keep the first
        // constraint.
        match (value1, value2) {
            (TypeVarValue::Bound(_), _) => Ok(*value1),
            (_, TypeVarValue::Bound(_)) => Ok(*value2),
            (TypeVarValue::Unbound { constraint: c1 }, TypeVarValue::Unbound { constraint: c2 }) => {
                Ok(TypeVarValue::Unbound { constraint: c1.or(*c2) })
            }
        }
    }
}
