//! `prune` (spec §4.3.2): follow a `TypeVar`'s `instance` chain to its
//! resolved type, path-compressing along the way.

use crate::arena::TypeArena;
use crate::data::Type;
use crate::ids::TypeId;

/// A total function: for a `TypeVar` with a resolved instance, returns
/// `prune(instance)`; for anything else (including an unbound `TypeVar`),
/// returns the argument unchanged.
pub fn prune(arena: &mut TypeArena, id: TypeId) -> TypeId {
    let Type::TypeVar(data) = arena.get(id) else {
        return id;
    };
    let var = data.var;
    let Some(instance) = arena.var_instance(var) else {
        return id;
    };
    let resolved = prune(arena, instance);
    if resolved.0 != instance.0 {
        // Path compression: point directly at the fully-resolved type so
        // later `prune` calls on this var are O(1).
        arena.set_instance(var, resolved);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Primitive;

    #[test]
    fn prune_is_idempotent_through_a_chain() {
        let mut arena = TypeArena::new();
        let number = arena.primitive(Primitive::Number);
        let v1 = arena.fresh_var(None, None);
        let v2 = arena.fresh_var(None, None);

        let Type::TypeVar(d1) = arena.get(v1).clone() else { unreachable!() };
        let Type::TypeVar(d2) = arena.get(v2).clone() else { unreachable!() };
        arena.set_instance(d2.var, number);
        arena.set_instance(d1.var, v2);

        let resolved_once = prune(&mut arena, v1);
        assert_eq!(resolved_once.0, number.0);
        let resolved_twice = prune(&mut arena, resolved_once);
        assert_eq!(resolved_twice.0, resolved_once.0);
    }

    #[test]
    fn prune_leaves_non_vars_unchanged() {
        let mut arena = TypeArena::new();
        let number = arena.primitive(Primitive::Number);
        assert_eq!(prune(&mut arena, number).0, number.0);
    }
}
