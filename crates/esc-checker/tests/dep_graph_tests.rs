//! Spec §8.2 scenario 3 ("Cyclic aliases across files").

mod helpers;

use esc_binder::{depgraph, resolve_qualified, ImportTable, Resolved};
use esc_checker::context::CheckerContext;
use esc_common::CheckerOptions;
use esc_types::{ObjTypeElem, PropKeyData, Type};
use helpers::*;

#[test]
fn cyclic_aliases_across_files_resolve_with_no_diagnostics() {
    // lib/a.esc: type Foo = {bar: Bar}
    // lib/b.esc: type Bar = {foo: Foo}
    let file_a = file(0, "lib/a.esc", Vec::new(), Vec::new(), vec![type_alias("Foo", obj_ann(vec![prop_member("bar", name_ref(&["Bar"]))]))]);
    let file_b = file(1, "lib/b.esc", Vec::new(), Vec::new(), vec![type_alias("Bar", obj_ann(vec![prop_member("foo", name_ref(&["Foo"]))]))]);
    let m = module("m", vec![file_a, file_b]);

    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let graph = depgraph::build(&m);
    assert_eq!(graph.components.len(), 1, "Foo and Bar depend on each other and must share a component");

    let module_ns = ctx.arena.declare_namespace();
    let module_scope = ctx.scopes.child(ctx.global_scope, module_ns);
    let diags = esc_checker::infer_dep_graph(&mut ctx, module_scope, &graph);
    assert!(diags.is_empty(), "expected no diagnostics, got {diags:?}");

    let empty_imports = ImportTable::default();
    let Some(Resolved::Type(foo_alias)) = resolve_qualified(&mut ctx.arena, &ctx.scopes, module_scope, &empty_imports, &["Foo".to_string()]) else {
        panic!("Foo did not resolve to a type alias");
    };
    let Some(Resolved::Type(bar_alias)) = resolve_qualified(&mut ctx.arena, &ctx.scopes, module_scope, &empty_imports, &["Bar".to_string()]) else {
        panic!("Bar did not resolve to a type alias");
    };

    let foo_ty = ctx.arena.alias(foo_alias).ty;
    let Type::Object(foo_obj) = ctx.arena.get(foo_ty).clone() else {
        panic!("Foo's body is not an object type");
    };
    assert_eq!(foo_obj.members.len(), 1);
    assert!(matches!(&foo_obj.members[0], ObjTypeElem::Property { key, .. } if key == &PropKeyData::String("bar".to_string())));

    let bar_ty = ctx.arena.alias(bar_alias).ty;
    let Type::Object(bar_obj) = ctx.arena.get(bar_ty).clone() else {
        panic!("Bar's body is not an object type");
    };
    assert_eq!(bar_obj.members.len(), 1);
    assert!(matches!(&bar_obj.members[0], ObjTypeElem::Property { key, .. } if key == &PropKeyData::String("foo".to_string())));
}

#[test]
fn independent_declarations_still_check_cleanly_through_infer_module() {
    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![val("x", None, Some(num(1.0))), val("y", None, Some(num(2.0)))]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert!(diags.is_empty());
}
