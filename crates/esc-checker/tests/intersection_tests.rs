//! Spec §8.2 scenario 4 ("Intersection normalization").

mod helpers;

use esc_binder::{depgraph, resolve_qualified, ImportTable, Resolved};
use esc_checker::context::CheckerContext;
use esc_common::CheckerOptions;
use esc_types::{normalize_intersection, ObjTypeElem, Primitive, PropKeyData, Type};
use helpers::*;

fn resolve_alias_body(ctx: &mut CheckerContext, scope: esc_binder::ScopeId, name: &str) -> esc_types::TypeId {
    let empty = ImportTable::default();
    match resolve_qualified(&mut ctx.arena, &ctx.scopes, scope, &empty, &[name.to_string()]) {
        Some(Resolved::Type(alias_id)) => ctx.arena.alias(alias_id).ty,
        other => panic!("{name} did not resolve to a type alias: {other:?}"),
    }
}

#[test]
fn intersecting_disjoint_object_shapes_merges_their_members() {
    // type Result = {a: string} & {b: number}
    let ty = esc_ast::TypeAnn::Intersection(
        vec![obj_ann(vec![prop_member("a", name_ref(&["string"]))]), obj_ann(vec![prop_member("b", name_ref(&["number"]))])],
        esc_common::Span::dummy(),
    );
    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![type_alias("Result", ty)]);
    let m = module("m", vec![f]);

    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let graph = depgraph::build(&m);
    let module_ns = ctx.arena.declare_namespace();
    let module_scope = ctx.scopes.child(ctx.global_scope, module_ns);
    let diags = esc_checker::infer_dep_graph(&mut ctx, module_scope, &graph);
    assert!(diags.is_empty(), "expected no diagnostics, got {diags:?}");

    let body = resolve_alias_body(&mut ctx, module_scope, "Result");
    let normalized = normalize_intersection(&mut ctx.arena, body);
    let Type::Object(obj) = ctx.arena.get(normalized).clone() else {
        panic!("expected the normalized intersection to be an object type");
    };
    assert_eq!(obj.members.len(), 2);
    assert!(obj.members.iter().any(|m| matches!(m, ObjTypeElem::Property { key, .. } if key == &PropKeyData::String("a".to_string()))));
    assert!(obj.members.iter().any(|m| matches!(m, ObjTypeElem::Property { key, .. } if key == &PropKeyData::String("b".to_string()))));
}

#[test]
fn intersecting_distinct_primitives_normalizes_to_never() {
    // type R2 = string & number
    let ty = esc_ast::TypeAnn::Intersection(vec![name_ref(&["string"]), name_ref(&["number"])], esc_common::Span::dummy());
    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![type_alias("R2", ty)]);
    let m = module("m", vec![f]);

    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let graph = depgraph::build(&m);
    let module_ns = ctx.arena.declare_namespace();
    let module_scope = ctx.scopes.child(ctx.global_scope, module_ns);
    let diags = esc_checker::infer_dep_graph(&mut ctx, module_scope, &graph);
    assert!(diags.is_empty(), "expected no diagnostics, got {diags:?}");

    let body = resolve_alias_body(&mut ctx, module_scope, "R2");
    let normalized = normalize_intersection(&mut ctx.arena, body);
    assert!(matches!(ctx.arena.get(normalized), Type::Primitive(Primitive::Never)));
}
