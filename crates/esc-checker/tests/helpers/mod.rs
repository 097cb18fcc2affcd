//! Shared manual-AST builders for the scenario tests (spec §8.2), mirroring
//! `esc-binder`'s `depgraph_tests.rs`/`scope_tests.rs` style: no parser
//! exists, so trees are built directly as struct/enum literals with
//! `Span::dummy()` everywhere.

#![allow(dead_code)]

use esc_ast::{ClassMember, Decl, Expr, File, ImportDecl, LiteralAnn, Module, ObjMemberAnn, Param, Pat, PropKey, TupleElemAnn, TypeAnn, TypeParam};
use esc_common::Span;

pub fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string(), Span::dummy())
}

pub fn num(n: f64) -> Expr {
    Expr::Literal(LiteralAnn::Number(n), Span::dummy())
}

pub fn binary(op: &str, left: Expr, right: Expr) -> Expr {
    Expr::Binary { op: op.to_string(), left: Box::new(left), right: Box::new(right), span: Span::dummy() }
}

pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
    Expr::Call { callee: Box::new(callee), type_args: Vec::new(), args, span: Span::dummy() }
}

pub fn object_lit(props: Vec<(&str, Expr)>) -> Expr {
    Expr::ObjectLit {
        props: props.into_iter().map(|(k, v)| (PropKey::Ident(k.to_string()), v)).collect(),
        spreads: Vec::new(),
        span: Span::dummy(),
    }
}

pub fn ident_pat(name: &str) -> Pat {
    Pat::Ident { name: name.to_string(), ty: None, span: Span::dummy() }
}

pub fn val(name: &str, ty: Option<TypeAnn>, init: Option<Expr>) -> Decl {
    Decl::Val { pat: ident_pat(name), ty, init, exported: false, declared: false, span: Span::dummy() }
}

pub fn declared_val(name: &str, ty: TypeAnn) -> Decl {
    Decl::Val { pat: ident_pat(name), ty: Some(ty), init: None, exported: false, declared: true, span: Span::dummy() }
}

pub fn name_ref(path: &[&str]) -> TypeAnn {
    TypeAnn::Name { path: path.iter().map(|s| s.to_string()).collect(), args: Vec::new(), span: Span::dummy() }
}

pub fn name_ref_args(path: &[&str], args: Vec<TypeAnn>) -> TypeAnn {
    TypeAnn::Name { path: path.iter().map(|s| s.to_string()).collect(), args, span: Span::dummy() }
}

pub fn type_alias(name: &str, ty: TypeAnn) -> Decl {
    Decl::Type { name: name.to_string(), type_params: Vec::new(), ty, exported: false, span: Span::dummy() }
}

pub fn generic_type_alias(name: &str, params: &[&str], ty: TypeAnn) -> Decl {
    Decl::Type {
        name: name.to_string(),
        type_params: params.iter().map(|p| TypeParam { name: p.to_string(), constraint: None, default: None, span: Span::dummy() }).collect(),
        ty,
        exported: false,
        span: Span::dummy(),
    }
}

pub fn obj_ann(members: Vec<ObjMemberAnn>) -> TypeAnn {
    TypeAnn::Object { members, span: Span::dummy() }
}

pub fn prop_member(key: &str, ty: TypeAnn) -> ObjMemberAnn {
    ObjMemberAnn::Property { key: key.to_string(), ty, optional: false, readonly: false, span: Span::dummy() }
}

pub fn field(name: &str, ty: Option<TypeAnn>, readonly: bool) -> ClassMember {
    ClassMember::Field { name: name.to_string(), ty, init: None, readonly, span: Span::dummy() }
}

pub fn ctor(params: Vec<(&str, TypeAnn)>, body: Vec<esc_ast::Stmt>) -> ClassMember {
    ClassMember::Constructor {
        params: params
            .into_iter()
            .map(|(n, ty)| Param { pat: ident_pat(n), ty: Some(ty), default: None, optional: false, rest: false, span: Span::dummy() })
            .collect(),
        body,
        span: Span::dummy(),
    }
}

pub fn class(name: &str, members: Vec<ClassMember>) -> Decl {
    Decl::Class { name: name.to_string(), type_params: Vec::new(), extends: None, implements: Vec::new(), members, exported: false, span: Span::dummy() }
}

pub fn file(id: u32, path: &str, namespace: Vec<String>, imports: Vec<ImportDecl>, decls: Vec<Decl>) -> File {
    File { id, path: path.to_string(), namespace, imports, decls }
}

pub fn module(name: &str, files: Vec<File>) -> Module {
    Module { name: name.to_string(), files }
}

pub fn tuple_elem(ty: TypeAnn) -> TupleElemAnn {
    TupleElemAnn { ty, optional: false, rest: false, name: None }
}
