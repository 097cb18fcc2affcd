//! Global prelude installation (spec §4.1): built-in types, operator
//! bindings, `globalThis`, and the pre-registered `Symbol` well-knowns.
//!
//! Grounded on `tsz-checker`'s lib-loading of `lib.es5.d.ts` into the
//! global namespace — this core has no `.d.ts` files to parse, so the same
//! handful of globals are built directly out of `esc_types` constructors
//! instead.

use esc_binder::ScopeArena;
use esc_types::{
    Binding, FunctionTypeData, ObjTypeElem, ObjectTypeData, ParamData, Primitive, PropKeyData,
    TypeArena, TypeId, TypeParamDef,
};
use smallvec::smallvec;

pub struct Prelude {
    pub global_ns: esc_types::NamespaceId,
    pub global_scope: esc_binder::ScopeId,
    pub custom_matcher_symbol: TypeId,
}

pub fn install(arena: &mut TypeArena, scopes: &mut ScopeArena) -> Prelude {
    let global_ns = arena.declare_namespace();
    let global_scope = scopes.root(global_ns);

    install_builtin_primitives(arena, global_ns);
    install_builtin_generics(arena, global_ns);
    install_builtin_nominals(arena, global_ns);
    let custom_matcher_symbol = install_symbol_namespace(arena, global_ns);
    install_operators(arena, global_ns);
    install_global_this(arena, global_ns);

    Prelude { global_ns, global_scope, custom_matcher_symbol }
}

/// `name_param` is a bare `TypeRef { name, args: [], alias: None }` — the
/// "substitutable name placeholder" convention `substitute`/`instantiate`
/// already assume (esc-types `generics.rs`, `substitute.rs`).
fn name_param(arena: &mut TypeArena, name: &str) -> TypeId {
    arena.type_ref(name.to_string(), Vec::new(), None, None)
}

fn declare_generic_alias(
    arena: &mut TypeArena,
    ns: esc_types::NamespaceId,
    name: &str,
    param_names: &[&str],
    body: TypeId,
) {
    let type_params = param_names
        .iter()
        .map(|n| TypeParamDef { name: n.to_string(), constraint: None, default: None })
        .collect();
    let alias = arena.declare_alias(body, type_params, None);
    arena.ns_mut(ns).types.insert(name.to_string(), alias);
}

/// `Array<T>`, `Promise<T>`, `Map<K, V>`, `Set<T>` — minimal structural
/// shapes; this core doesn't need their full method surfaces, only that
/// each name resolves to a distinct generic alias a user declaration can
/// shadow (spec §4.4.3 "shadowing the global `Array`", §8.2 scenario 5).
fn install_builtin_generics(arena: &mut TypeArena, ns: esc_types::NamespaceId) {
    let number = arena.primitive(Primitive::Number);

    let t = name_param(arena, "T");
    let identity = arena.next_identity();
    let length = ObjTypeElem::Property {
        key: PropKeyData::String("length".to_string()),
        value: number,
        readonly: true,
        optional: false,
    };
    let index = ObjTypeElem::Index { key_type: number, value_type: t, readonly: false };
    let array_body = arena.object(
        ObjectTypeData { object_flags: 0, members: vec![length, index], extends: Vec::new(), identity },
        None,
    );
    declare_generic_alias(arena, ns, "Array", &["T"], array_body);

    let t = name_param(arena, "T");
    let identity = arena.next_identity();
    let value_member =
        ObjTypeElem::Property { key: PropKeyData::String("value".to_string()), value: t, readonly: false, optional: false };
    let promise_body =
        arena.object(ObjectTypeData { object_flags: 0, members: vec![value_member], extends: Vec::new(), identity }, None);
    declare_generic_alias(arena, ns, "Promise", &["T"], promise_body);

    let k = name_param(arena, "K");
    let v = name_param(arena, "V");
    let identity = arena.next_identity();
    let index = ObjTypeElem::Index { key_type: k, value_type: v, readonly: false };
    let map_body =
        arena.object(ObjectTypeData { object_flags: 0, members: vec![index], extends: Vec::new(), identity }, None);
    declare_generic_alias(arena, ns, "Map", &["K", "V"], map_body);

    let t = name_param(arena, "T");
    let identity = arena.next_identity();
    let index = ObjTypeElem::Index { key_type: number, value_type: t, readonly: false };
    let set_body =
        arena.object(ObjectTypeData { object_flags: 0, members: vec![index], extends: Vec::new(), identity }, None);
    declare_generic_alias(arena, ns, "Set", &["T"], set_body);
}

/// The primitive keywords (`number`, `string`, `boolean`, …) as alias
/// names resolving straight to their `Primitive` type, so a `TypeAnn::Name`
/// of one segment goes through the same `resolve_qualified` path as any
/// other named type rather than needing special-casing in `type_ann::build`.
/// Lowercase, distinct from the capitalized `String` wrapper object below
/// (spec's surface language keeps the TypeScript-style primitive/wrapper
/// split).
fn install_builtin_primitives(arena: &mut TypeArena, ns: esc_types::NamespaceId) {
    let named = [
        ("number", Primitive::Number),
        ("string", Primitive::String),
        ("boolean", Primitive::Boolean),
        ("bigint", Primitive::BigInt),
        ("symbol", Primitive::Symbol),
        ("null", Primitive::Null),
        ("undefined", Primitive::Undefined),
        ("void", Primitive::Void),
        ("never", Primitive::Never),
    ];
    for (name, kind) in named {
        let ty = arena.primitive(kind);
        let alias = arena.declare_alias(ty, Vec::new(), None);
        arena.ns_mut(ns).types.insert(name.to_string(), alias);
    }
    for (name, ty) in [("any", arena.any()), ("unknown", arena.unknown())] {
        let alias = arena.declare_alias(ty, Vec::new(), None);
        arena.ns_mut(ns).types.insert(name.to_string(), alias);
    }
}

/// `String`, `Date` — nominal with no members; good enough to name a
/// distinct global type without modelling their full method surface
/// (out of scope, spec Non-goals "standard library surface").
fn install_builtin_nominals(arena: &mut TypeArena, ns: esc_types::NamespaceId) {
    for name in ["String", "Date"] {
        let identity = arena.next_identity();
        let body = arena.object(
            ObjectTypeData {
                object_flags: esc_types::flags::object_flags::NOMINAL,
                members: Vec::new(),
                extends: Vec::new(),
                identity,
            },
            None,
        );
        let alias = arena.declare_alias(body, Vec::new(), None);
        arena.ns_mut(ns).types.insert(name.to_string(), alias);
    }
}

/// `Symbol`, `Symbol.iterator`, `Symbol.customMatcher` (spec §4.1: "are
/// pre-registered as unique-symbol values"). Returns the `customMatcher`
/// symbol's `TypeId` so pattern inference (§4.4.2) can match on it by
/// identity.
fn install_symbol_namespace(arena: &mut TypeArena, ns: esc_types::NamespaceId) -> TypeId {
    let symbol_ns = arena.declare_namespace();
    let iterator = arena.unique_symbol("Symbol.iterator".to_string(), None);
    let custom_matcher = arena.unique_symbol("Symbol.customMatcher".to_string(), None);
    arena.declare_binding(symbol_ns, "iterator".to_string(), Binding { ty: iterator, mutable: false, source: None });
    arena.declare_binding(symbol_ns, "customMatcher".to_string(), Binding { ty: custom_matcher, mutable: false, source: None });
    arena.ns_mut(ns).namespaces.insert("Symbol".to_string(), symbol_ns);
    custom_matcher
}

fn binary_fn(arena: &mut TypeArena, lhs: TypeId, rhs: TypeId, ret: TypeId) -> TypeId {
    let never = arena.never();
    let params = smallvec![
        ParamData { name: "lhs".to_string(), ty: lhs, optional: false, rest: false },
        ParamData { name: "rhs".to_string(), ty: rhs, optional: false, rest: false },
    ];
    arena.function(
        FunctionTypeData { type_params: Vec::new(), params, return_ty: ret, throws_ty: never, self_param: None },
        None,
    )
}

/// Arithmetic operators as function-typed value bindings (spec §4.4.1:
/// "look up the operator as a function binding; unify operands against its
/// parameter types"). Comparison operators (`<`, `>`, `==`, …) are handled
/// directly in `expr::infer_binary` since "both operands share a primitive
/// kind" isn't expressible as ordinary parameter unification.
fn install_operators(arena: &mut TypeArena, ns: esc_types::NamespaceId) {
    let number = arena.primitive(Primitive::Number);
    let string = arena.primitive(Primitive::String);

    let plus_numeric = binary_fn(arena, number, number, number);
    let plus_string = binary_fn(arena, string, string, string);
    let plus = arena.intersection(vec![plus_numeric, plus_string], None);
    arena.declare_binding(ns, "+".to_string(), Binding { ty: plus, mutable: false, source: None });

    for op in ["-", "*", "/", "%"] {
        let ty = binary_fn(arena, number, number, number);
        arena.declare_binding(ns, op.to_string(), Binding { ty, mutable: false, source: None });
    }
}

fn install_global_this(arena: &mut TypeArena, ns: esc_types::NamespaceId) {
    let ns_ty = arena.namespace_type(ns, None);
    arena.declare_binding(ns, "globalThis".to_string(), Binding { ty: ns_ty, mutable: false, source: None });
}
