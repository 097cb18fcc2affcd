//! Top-level and nested declaration syntax trees (spec §4.4.3, plus the
//! `namespace`/`enum` kinds added by the expanded specification).

use esc_common::Span;

use crate::expr::{Expr, Param, SelfParam, Stmt};
use crate::pat::Pat;
use crate::type_ann::{TypeAnn, TypeParam};

#[derive(Clone, Debug)]
pub enum ImportDecl {
    /// `import * as alias from "package"`.
    Namespace { alias: String, package: String, span: Span },
    /// `import { a, b as c } from "package"`.
    Named { items: Vec<crate::source::ImportItem>, package: String, span: Span },
}

#[derive(Clone, Debug)]
pub enum ClassMember {
    Field { name: String, ty: Option<TypeAnn>, init: Option<Expr>, readonly: bool, span: Span },
    Method {
        name: String,
        self_param: Option<SelfParam>,
        type_params: Vec<TypeParam>,
        params: Vec<Param>,
        return_ty: Option<TypeAnn>,
        throws_ty: Option<TypeAnn>,
        body: Vec<Stmt>,
        span: Span,
    },
    Getter { name: String, ty: Option<TypeAnn>, body: Vec<Stmt>, span: Span },
    Setter { name: String, ty: Option<TypeAnn>, body: Vec<Stmt>, span: Span },
    Constructor { params: Vec<Param>, body: Vec<Stmt>, span: Span },
}

#[derive(Clone, Debug)]
pub enum Decl {
    Val { pat: Pat, ty: Option<TypeAnn>, init: Option<Expr>, exported: bool, declared: bool, span: Span },
    Fn {
        name: String,
        self_param: Option<SelfParam>,
        type_params: Vec<TypeParam>,
        params: Vec<Param>,
        return_ty: Option<TypeAnn>,
        throws_ty: Option<TypeAnn>,
        body: Option<Vec<Stmt>>,
        exported: bool,
        span: Span,
    },
    Type { name: String, type_params: Vec<TypeParam>, ty: TypeAnn, exported: bool, span: Span },
    Class {
        name: String,
        type_params: Vec<TypeParam>,
        extends: Option<TypeAnn>,
        implements: Vec<TypeAnn>,
        members: Vec<ClassMember>,
        exported: bool,
        span: Span,
    },
    /// `enum Color { Red, Green, Blue }` — a nominal Object-shaped type
    /// (SPEC_FULL.md §2).
    Enum { name: String, variants: Vec<String>, exported: bool, span: Span },
    /// `namespace ns { ... }` — a nested namespace carrying its own
    /// sub-declarations (SPEC_FULL.md §2).
    Namespace { name: String, decls: Vec<Decl>, exported: bool, span: Span },
    Import(ImportDecl),
    /// `export { a, b as c }` re-export of already-declared local names.
    Export { items: Vec<crate::source::ImportItem>, span: Span },
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Val { span, .. }
            | Decl::Fn { span, .. }
            | Decl::Type { span, .. }
            | Decl::Class { span, .. }
            | Decl::Enum { span, .. }
            | Decl::Namespace { span, .. }
            | Decl::Export { span, .. } => *span,
            Decl::Import(ImportDecl::Namespace { span, .. })
            | Decl::Import(ImportDecl::Named { span, .. }) => *span,
        }
    }
}
