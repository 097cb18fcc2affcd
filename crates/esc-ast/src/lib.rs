//! The parsed-program input contract for the esc type checker core.
//!
//! Lexing, parsing, and AST construction are explicitly out of scope for
//! this core (spec §1) — this crate only fixes the *shape* of the `Decl` /
//! `Expr` / `Pat` / `TypeAnn` trees a parser collaborator hands to
//! `esc-checker`. There is no lexer, no recursive-descent parser, and no
//! source-text handling beyond carrying the raw contents a loader already
//! read (spec §6.4: directory partitioning into `File.namespace` is the
//! loader's job, not this crate's).

pub mod source;
pub use source::{File, ImportItem, Module, Source};

pub mod type_ann;
pub use type_ann::{ObjMemberAnn, TupleElemAnn, TypeAnn, TypeParam};

pub mod pat;
pub use pat::{ObjPatField, Pat};

pub mod expr;
pub use expr::{
    CatchArm, Expr, LiteralAnn, MatchArm, Param, PropKey, SelfParam, Stmt,
};

pub mod decl;
pub use decl::{ClassMember, Decl, ImportDecl};
