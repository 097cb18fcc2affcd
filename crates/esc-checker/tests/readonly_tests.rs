//! SPEC_FULL.md §2 "readonly propagation through structural assignability".

mod helpers;

use esc_ast::Expr;
use esc_checker::context::CheckerContext;
use esc_common::{CheckerOptions, DiagnosticKind, Span};
use helpers::*;

fn readonly_prop(key: &str, ty: esc_ast::TypeAnn) -> esc_ast::ObjMemberAnn {
    esc_ast::ObjMemberAnn::Property { key: key.to_string(), ty, optional: false, readonly: true, span: Span::dummy() }
}

#[test]
fn a_readonly_source_property_cannot_satisfy_a_writable_target_property() {
    // type Source = {readonly x: number}
    // type Target = {x: number}
    // val t: Target = {x: 1} as Source
    let source = type_alias("Source", obj_ann(vec![readonly_prop("x", name_ref(&["number"]))]));
    let target = type_alias("Target", obj_ann(vec![prop_member("x", name_ref(&["number"]))]));
    let cast = Expr::Cast { expr: Box::new(object_lit(vec![("x", num(1.0))])), ty: name_ref(&["Source"]), span: Span::dummy() };
    let t = val("t", Some(name_ref(&["Target"])), Some(cast));

    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![source, target, t]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);

    assert_eq!(
        diags.iter().filter(|d| d.kind == DiagnosticKind::CannotAssign).count(),
        1,
        "expected the readonly source property to be rejected against the writable target, got {diags:?}"
    );
}

#[test]
fn a_writable_source_property_satisfies_a_readonly_target_property() {
    // type Source = {x: number}
    // type Target = {readonly x: number}
    // val t: Target = {x: 1} as Source
    let source = type_alias("Source", obj_ann(vec![prop_member("x", name_ref(&["number"]))]));
    let target = type_alias("Target", obj_ann(vec![readonly_prop("x", name_ref(&["number"]))]));
    let cast = Expr::Cast { expr: Box::new(object_lit(vec![("x", num(1.0))])), ty: name_ref(&["Source"]), span: Span::dummy() };
    let t = val("t", Some(name_ref(&["Target"])), Some(cast));

    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![source, target, t]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert!(diags.is_empty(), "a mutable source property should satisfy a readonly target property, got {diags:?}");
}
