//! Declaration dependency graph tests (spec §8.1, §8.2 scenario 3).

use esc_ast::{Decl, Expr, File, Module, Pat, TypeAnn};
use esc_binder::depgraph::build;
use esc_binder::scc::component_index_of;
use esc_common::Span;

fn val(name: &str, init: Expr) -> Decl {
    Decl::Val {
        pat: Pat::Ident { name: name.to_string(), ty: None, span: Span::dummy() },
        ty: None,
        init: Some(init),
        exported: false,
        declared: false,
        span: Span::dummy(),
    }
}

fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string(), Span::dummy())
}

fn type_alias(name: &str, ty: TypeAnn) -> Decl {
    Decl::Type { name: name.to_string(), type_params: Vec::new(), ty, exported: false, span: Span::dummy() }
}

fn name_ref(path: &[&str]) -> TypeAnn {
    TypeAnn::Name { path: path.iter().map(|s| s.to_string()).collect(), args: Vec::new(), span: Span::dummy() }
}

#[test]
fn component_ordering_respects_dependency_direction() {
    let file = File {
        id: 0,
        path: "main.esc".to_string(),
        namespace: Vec::new(),
        imports: Vec::new(),
        decls: vec![
            val("a", Expr::Binary { op: "+".to_string(), left: Box::new(ident("b")), right: Box::new(Expr::Literal(esc_ast::LiteralAnn::Number(1.0), Span::dummy())), span: Span::dummy() }),
            val("b", Expr::Literal(esc_ast::LiteralAnn::Number(5.0), Span::dummy())),
        ],
    };
    let module = Module { name: "m".to_string(), files: vec![file] };
    let graph = build(&module);

    let component_of = component_index_of(&graph.components);
    for (i, deps) in graph.decl_deps.iter().enumerate() {
        let decl_id = esc_binder::DeclId(i as u32);
        let i_component = component_of[&decl_id];
        for &dep in deps {
            let j_component = component_of[&dep];
            assert!(j_component <= i_component, "dependency edge must point to an equal-or-earlier component");
        }
    }
}

#[test]
fn cyclic_aliases_across_files_land_in_one_component() {
    let file_a = File {
        id: 0,
        path: "lib/a.esc".to_string(),
        namespace: Vec::new(),
        imports: Vec::new(),
        decls: vec![type_alias(
            "Foo",
            TypeAnn::Object {
                members: vec![esc_ast::ObjMemberAnn::Property { key: "bar".to_string(), ty: name_ref(&["Bar"]), optional: false, readonly: false, span: Span::dummy() }],
                span: Span::dummy(),
            },
        )],
    };
    let file_b = File {
        id: 1,
        path: "lib/b.esc".to_string(),
        namespace: Vec::new(),
        imports: Vec::new(),
        decls: vec![type_alias(
            "Bar",
            TypeAnn::Object {
                members: vec![esc_ast::ObjMemberAnn::Property { key: "foo".to_string(), ty: name_ref(&["Foo"]), optional: false, readonly: false, span: Span::dummy() }],
                span: Span::dummy(),
            },
        )],
    };
    let module = Module { name: "m".to_string(), files: vec![file_a, file_b] };
    let graph = build(&module);

    assert_eq!(graph.components.len(), 1, "Foo and Bar depend on each other and must share a component");
    assert_eq!(graph.components[0].len(), 2);
}

#[test]
fn independent_declarations_land_in_separate_components() {
    let file = File {
        id: 0,
        path: "main.esc".to_string(),
        namespace: Vec::new(),
        imports: Vec::new(),
        decls: vec![
            val("x", Expr::Literal(esc_ast::LiteralAnn::Number(1.0), Span::dummy())),
            val("y", Expr::Literal(esc_ast::LiteralAnn::Number(2.0), Span::dummy())),
        ],
    };
    let module = Module { name: "m".to_string(), files: vec![file] };
    let graph = build(&module);

    assert_eq!(graph.components.len(), 2);
}
