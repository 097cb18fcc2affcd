//! File-scoped import tables and qualified name resolution (spec §4.1).
//!
//! "Imports are file-scoped": every `import … from "pkg"` binds its aliases
//! into the owning `File`'s table, never into the module namespace. Two
//! files importing the same package independently see isolated aliases.

use esc_ast::ImportDecl;
use esc_common::{Diagnostic, DiagnosticKind, Span};
use esc_types::{prune, AliasId, Binding, NamespaceId, Type, TypeArena};
use indexmap::IndexMap;

use crate::scope::{lookup_namespace, lookup_value, lookup_type, ScopeArena, ScopeId};

#[derive(Clone, Debug)]
pub enum ImportTarget {
    Namespace(NamespaceId),
    Value(Binding),
    Type(AliasId),
}

/// `File.imports: alias -> Namespace or Binding/TypeAlias` (spec §4.1).
#[derive(Default, Clone)]
pub struct ImportTable {
    aliases: IndexMap<String, ImportTarget>,
}

impl ImportTable {
    pub fn get(&self, alias: &str) -> Option<&ImportTarget> {
        self.aliases.get(alias)
    }
}

pub fn build_import_table(
    arena: &TypeArena,
    registry: &crate::package_registry::PackageRegistry,
    imports: &[ImportDecl],
) -> (ImportTable, Vec<Diagnostic>) {
    let mut table = ImportTable::default();
    let mut diags = Vec::new();

    for import in imports {
        match import {
            ImportDecl::Namespace { alias, package, span } => {
                match registry.lookup(package) {
                    Some(ns) => {
                        table.aliases.insert(alias.clone(), ImportTarget::Namespace(ns));
                    }
                    None => diags.push(unknown_package(package, *span)),
                }
            }
            ImportDecl::Named { items, package, span } => {
                let Some(ns) = registry.lookup(package) else {
                    diags.push(unknown_package(package, *span));
                    continue;
                };
                for item in items {
                    let local = item.alias.clone().unwrap_or_else(|| item.name.clone());
                    let ns_data = arena.ns(ns);
                    let target = if let Some(binding) = ns_data.values.get(&item.name) {
                        Some(ImportTarget::Value(binding.clone()))
                    } else if let Some(&alias_id) = ns_data.types.get(&item.name) {
                        Some(ImportTarget::Type(alias_id))
                    } else if let Some(&nested) = ns_data.namespaces.get(&item.name) {
                        Some(ImportTarget::Namespace(nested))
                    } else {
                        None
                    };
                    match target {
                        Some(target) => {
                            table.aliases.insert(local, target);
                        }
                        None => diags.push(Diagnostic::new(
                            DiagnosticKind::UnknownIdentifier,
                            format!("package '{package}' has no export '{}'", item.name),
                            item.span,
                        )),
                    }
                }
            }
        }
    }

    (table, diags)
}

fn unknown_package(package: &str, span: Span) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::UnknownIdentifier, format!("unknown package '{package}'"), span)
}

#[derive(Clone, Debug)]
pub enum Resolved {
    Namespace(NamespaceId),
    Value(Binding),
    Type(AliasId),
}

/// Resolves `a.b.c` per spec §4.1: the file's import table is consulted
/// first for the head segment (a file-local resolution step that precedes
/// the scope walk), then the scope chain; each subsequent segment descends
/// through the resolved namespace.
pub fn resolve_qualified(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    segments: &[String],
) -> Option<Resolved> {
    let (head, rest) = segments.split_first()?;

    let mut current = if let Some(target) = imports.get(head) {
        match target {
            ImportTarget::Namespace(ns) => Resolved::Namespace(*ns),
            ImportTarget::Value(b) => Resolved::Value(b.clone()),
            ImportTarget::Type(a) => Resolved::Type(*a),
        }
    } else if let Some(ns) = lookup_namespace(arena, scopes, scope, head) {
        Resolved::Namespace(ns)
    } else if let Some(binding) = lookup_value(arena, scopes, scope, head) {
        if let Some(ns) = as_namespace(arena, binding.ty) {
            Resolved::Namespace(ns)
        } else {
            Resolved::Value(binding)
        }
    } else if let Some(alias) = lookup_type(arena, scopes, scope, head) {
        Resolved::Type(alias)
    } else {
        return None;
    };

    for segment in rest {
        let Resolved::Namespace(ns) = current else {
            return None;
        };
        let ns_data = arena.ns(ns);
        current = if let Some(&nested) = ns_data.namespaces.get(segment) {
            Resolved::Namespace(nested)
        } else if let Some(&alias) = ns_data.types.get(segment) {
            Resolved::Type(alias)
        } else if let Some(binding) = ns_data.values.get(segment) {
            let binding = binding.clone();
            if let Some(nested_ns) = as_namespace(arena, binding.ty) {
                Resolved::Namespace(nested_ns)
            } else {
                Resolved::Value(binding)
            }
        } else {
            return None;
        };
    }

    Some(current)
}

fn as_namespace(arena: &mut TypeArena, ty: esc_types::TypeId) -> Option<NamespaceId> {
    let pruned = prune(arena, ty);
    if let Type::Namespace(ns) = arena.get(pruned) {
        Some(*ns)
    } else {
        None
    }
}
