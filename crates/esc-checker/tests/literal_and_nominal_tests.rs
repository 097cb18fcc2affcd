//! Spec §8.2 scenarios 1 ("Literal inference") and 2 ("Structural vs.
//! nominal equality").

mod helpers;

use esc_checker::context::CheckerContext;
use esc_common::{CheckerOptions, DiagnosticKind};
use helpers::*;

#[test]
fn literal_arithmetic_widens_to_number_with_no_diagnostics() {
    // val a = 5; val b = 10; val sum = a + b
    let f = file(
        0,
        "main.esc",
        Vec::new(),
        Vec::new(),
        vec![val("a", None, Some(num(5.0))), val("b", None, Some(num(10.0))), val("sum", None, Some(binary("+", ident("a"), ident("b"))))],
    );
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert!(diags.is_empty(), "expected no diagnostics, got {diags:?}");
}

#[test]
fn class_instances_of_different_identity_do_not_unify() {
    // class UserId { id: number; constructor(id: number) {} }
    // class ProductId { id: number; constructor(id: number) {} }
    // val u = UserId(5)
    // val p: ProductId = u
    let user_id = class("UserId", vec![field("id", Some(name_ref(&["number"])), false), ctor(vec![("id", name_ref(&["number"]))], Vec::new())]);
    let product_id = class("ProductId", vec![field("id", Some(name_ref(&["number"])), false), ctor(vec![("id", name_ref(&["number"]))], Vec::new())]);
    let u = val("u", None, Some(call(ident("UserId"), vec![num(5.0)])));
    let p = val("p", Some(name_ref(&["ProductId"])), Some(ident("u")));

    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![user_id, product_id, u, p]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);

    let cannot_assign: Vec<_> = diags.iter().filter(|d| d.kind == DiagnosticKind::CannotAssign).collect();
    assert_eq!(cannot_assign.len(), 1, "expected exactly one CannotAssign diagnostic, got {diags:?}");
}

#[test]
fn constructor_call_produces_the_class_instance_type() {
    // class Point { x: number; constructor(x: number) {} }
    // val pt = Point(1)
    let point = class("Point", vec![field("x", Some(name_ref(&["number"])), false), ctor(vec![("x", name_ref(&["number"]))], Vec::new())]);
    let pt = val("pt", None, Some(call(ident("Point"), vec![num(1.0)])));
    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![point, pt]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert!(diags.is_empty(), "expected the constructor call to resolve cleanly, got {diags:?}");
}

#[test]
fn primitive_keyword_annotation_accepts_a_matching_literal() {
    // val y: number = 5
    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![val("y", Some(name_ref(&["number"])), Some(num(5.0)))]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert!(diags.is_empty(), "expected a number literal to satisfy a `number` annotation, got {diags:?}");
}

#[test]
fn primitive_keyword_annotation_rejects_a_mismatched_literal() {
    // val y: string = 5
    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![val("y", Some(name_ref(&["string"])), Some(num(5.0)))]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::CannotAssign);
}

#[test]
fn object_literal_assigned_to_a_class_annotation_is_rejected_as_nominal_mismatch() {
    // class Point { x: number; y: number }
    // val p: Point = {x: 1, y: 2}
    let point = class("Point", vec![field("x", Some(name_ref(&["number"])), false), field("y", Some(name_ref(&["number"])), false)]);
    let p = val("p", Some(name_ref(&["Point"])), Some(object_lit(vec![("x", num(1.0)), ("y", num(2.0))])));
    let f = file(0, "main.esc", Vec::new(), Vec::new(), vec![point, p]);
    let m = module("m", vec![f]);
    let mut ctx = CheckerContext::new(CheckerOptions::default());
    let diags = esc_checker::infer_module(&mut ctx, &m);
    assert_eq!(
        diags.iter().filter(|d| d.kind == DiagnosticKind::CannotAssign).count(),
        1,
        "expected the structural literal to be rejected against the nominal class, got {diags:?}"
    );
}
