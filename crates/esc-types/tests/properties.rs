//! Property tests seeded by spec §8.3.

use esc_types::data::{FunctionTypeData, LiteralValue, Primitive, TypeParamDef};
use esc_types::{instantiate, normalize_intersection, structurally_equal, TypeArena};
use smallvec::smallvec;

#[test]
fn prune_is_idempotent() {
    let mut arena = TypeArena::new();
    let number = arena.primitive(Primitive::Number);
    let v = arena.fresh_var(None, None);
    if let esc_types::Type::TypeVar(data) = arena.get(v).clone() {
        arena.set_instance(data.var, number);
    }
    let once = esc_types::prune(&mut arena, v);
    let twice = esc_types::prune(&mut arena, once);
    assert_eq!(once.0, twice.0);
    assert_eq!(once.0, number.0);
}

#[test]
fn normalize_intersection_is_permutation_invariant() {
    let mut arena = TypeArena::new();
    let a = arena.literal(LiteralValue::String("a".into()), None);
    let b = arena.literal(LiteralValue::String("a".into()), None);
    // Same value twice simulates two orderings of an equivalent intersection
    // after deduplication: both orders should normalize to the identical
    // single literal.
    let i1 = arena.intersection(vec![a, b], None);
    let i2 = arena.intersection(vec![b, a], None);
    let n1 = normalize_intersection(&mut arena, i1);
    let n2 = normalize_intersection(&mut arena, i2);
    assert!(structurally_equal(&mut arena, n1, n2));
}

#[test]
fn intersection_of_distinct_primitives_is_never() {
    let mut arena = TypeArena::new();
    let string = arena.primitive(Primitive::String);
    let number = arena.primitive(Primitive::Number);
    let i = arena.intersection(vec![string, number], None);
    let n = normalize_intersection(&mut arena, i);
    assert!(matches!(arena.get(n), esc_types::Type::Primitive(Primitive::Never)));
}

#[test]
fn generic_instantiation_substitutes_through_the_body() {
    let mut arena = TypeArena::new();
    let param = TypeParamDef { name: "T".to_string(), constraint: None, default: None };
    let t_ref = arena.type_ref("T".to_string(), vec![], None, None);
    let function = arena.function(
        FunctionTypeData {
            type_params: vec![],
            params: smallvec![esc_types::ParamData { name: "x".to_string(), ty: t_ref, optional: false, rest: false }],
            return_ty: t_ref,
            throws_ty: arena.never(),
            self_param: None,
        },
        None,
    );
    let number = arena.primitive(Primitive::Number);
    let (instantiated, diags) = instantiate(&mut arena, &[param], &[Some(number)], function, None);
    assert!(diags.is_empty());
    if let esc_types::Type::Function(f) = arena.get(instantiated).clone() {
        assert_eq!(f.return_ty.0, number.0);
        assert_eq!(f.params[0].ty.0, number.0);
    } else {
        panic!("expected a function type");
    }
}

#[test]
fn a_function_with_no_declared_throws_reports_never() {
    let mut arena = TypeArena::new();
    let never = arena.never();
    let function = arena.function(
        FunctionTypeData {
            type_params: vec![],
            params: smallvec![],
            return_ty: arena.primitive(Primitive::Void),
            throws_ty: never,
            self_param: None,
        },
        None,
    );
    if let esc_types::Type::Function(f) = arena.get(function).clone() {
        assert!(matches!(arena.get(f.throws_ty), esc_types::Type::Primitive(Primitive::Never)));
    } else {
        unreachable!()
    }
}
