//! Spec §8.2 scenario 6 ("File-scoped imports").

mod helpers;

use esc_ast::ImportDecl;
use esc_checker::context::CheckerContext;
use esc_common::{CheckerOptions, DiagnosticKind, Span};
use esc_types::Primitive;
use helpers::*;

fn register_package_p(ctx: &mut CheckerContext) {
    let pkg_ns = ctx.arena.declare_namespace();
    let number_ty = ctx.arena.primitive(Primitive::Number);
    let alias = ctx.arena.declare_alias(number_ty, Vec::new(), None);
    ctx.arena.ns_mut(pkg_ns).types.insert("T".to_string(), alias);
    ctx.registry.register("p", pkg_ns).expect("package 'p' should register once");
}

#[test]
fn an_imported_package_alias_resolves_only_in_the_file_that_imported_it() {
    // file1.esc: import * as pkg from "p"; declare val v1: pkg.T
    // file2.esc: declare val v2: pkg.T  (no import)
    let import = ImportDecl::Namespace { alias: "pkg".to_string(), package: "p".to_string(), span: Span::dummy() };
    let file1 = file(0, "file1.esc", Vec::new(), vec![import], vec![declared_val("v1", name_ref(&["pkg", "T"]))]);
    let file2 = file(1, "file2.esc", Vec::new(), Vec::new(), vec![declared_val("v2", name_ref(&["pkg", "T"]))]);
    let m = module("m", vec![file1, file2]);

    let mut ctx = CheckerContext::new(CheckerOptions::default());
    register_package_p(&mut ctx);
    let diags = esc_checker::infer_module(&mut ctx, &m);

    assert_eq!(diags.len(), 1, "only file2's unqualified lookup of 'pkg' should fail, got {diags:?}");
    assert_eq!(diags[0].kind, DiagnosticKind::UnknownIdentifier);
    assert!(diags[0].message.contains("pkg"), "expected the diagnostic to name 'pkg', got {:?}", diags[0].message);
}

#[test]
fn two_files_importing_the_same_package_get_isolated_aliases() {
    // file1.esc: import * as a from "p"; declare val v1: a.T
    // file2.esc: import * as b from "p"; declare val v2: b.T
    let import1 = ImportDecl::Namespace { alias: "a".to_string(), package: "p".to_string(), span: Span::dummy() };
    let import2 = ImportDecl::Namespace { alias: "b".to_string(), package: "p".to_string(), span: Span::dummy() };
    let file1 = file(0, "file1.esc", Vec::new(), vec![import1], vec![declared_val("v1", name_ref(&["a", "T"]))]);
    let file2 = file(1, "file2.esc", Vec::new(), vec![import2], vec![declared_val("v2", name_ref(&["b", "T"]))]);
    let m = module("m", vec![file1, file2]);

    let mut ctx = CheckerContext::new(CheckerOptions::default());
    register_package_p(&mut ctx);
    let diags = esc_checker::infer_module(&mut ctx, &m);

    assert!(diags.is_empty(), "each file's own alias for 'p' should resolve independently, got {diags:?}");
}
