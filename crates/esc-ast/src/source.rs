//! Source/file/module aggregation — the units a loader (out of scope,
//! spec §1) hands to the checker.

use esc_common::Span;

use crate::decl::{Decl, ImportDecl};

/// Raw contents a loader already read from disk; this crate does not open
/// files itself.
#[derive(Clone, Debug)]
pub struct Source {
    pub id: u32,
    pub path: String,
    pub contents: String,
}

/// One entry in a named import or re-export list: `a` or `a as b`.
#[derive(Clone, Debug)]
pub struct ImportItem {
    pub name: String,
    pub alias: Option<String>,
    pub span: Span,
}

/// A single parsed file, already assigned to a namespace by the loader's
/// directory-partitioning step (spec §6.4).
#[derive(Clone, Debug)]
pub struct File {
    pub id: u32,
    pub path: String,
    /// Dot-separated namespace path this file's top-level decls join,
    /// e.g. `["app", "models"]`.
    pub namespace: Vec<String>,
    pub imports: Vec<ImportDecl>,
    pub decls: Vec<Decl>,
}

/// A package: a set of files sharing one namespace root, checked together
/// as one dependency-graph unit (spec §4.2).
#[derive(Clone, Debug)]
pub struct Module {
    pub name: String,
    pub files: Vec<File>,
}
