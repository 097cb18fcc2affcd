//! `InferDepGraph` (spec §4.2): processes `esc_binder::DepGraph`'s
//! strongly-connected components in dependency order, pre-declaring a
//! placeholder for every member of a component before inferring any of
//! them so mutually-recursive siblings can reference each other.
//!
//! `decl_name`/`binds_value`/`binds_type` mirror the private helpers in
//! `esc_binder::depgraph` (that crate only needs them to build the graph;
//! this crate needs them again to know which placeholder kind a member
//! wants).

use esc_ast::{Decl, Pat};
use esc_binder::{DepGraph, ScopeArena, ScopeId};
use esc_common::Diagnostic;
use esc_types::{Binding, TypeArena};

use crate::context::CheckerContext;
use crate::env::Env;

fn decl_name(decl: &Decl) -> Option<&str> {
    match decl {
        Decl::Val { pat: Pat::Ident { name, .. }, .. } => Some(name),
        Decl::Val { .. } => None,
        Decl::Fn { name, .. } | Decl::Type { name, .. } | Decl::Class { name, .. } | Decl::Enum { name, .. } => Some(name),
        Decl::Namespace { .. } | Decl::Import(_) | Decl::Export { .. } => None,
    }
}

fn binds_value(decl: &Decl) -> bool {
    matches!(decl, Decl::Val { .. } | Decl::Fn { .. } | Decl::Class { .. })
}

fn binds_type(decl: &Decl) -> bool {
    matches!(decl, Decl::Type { .. } | Decl::Class { .. } | Decl::Enum { .. })
}

fn predeclare(arena: &mut TypeArena, scopes: &mut ScopeArena, module_scope: ScopeId, graph: &DepGraph, component: &[esc_binder::DeclId]) -> Vec<ScopeId> {
    component
        .iter()
        .map(|&id| {
            let entry = graph.decl(id);
            let scope = scopes.descend(arena, module_scope, &entry.namespace);
            let ns = scopes.namespace(scope);
            if let Some(name) = decl_name(&entry.decl) {
                if binds_value(&entry.decl) && !arena.ns(ns).values.contains_key(name) {
                    let fresh = arena.fresh_var(None, None);
                    arena.declare_binding(ns, name.to_string(), Binding { ty: fresh, mutable: false, source: None });
                }
                if binds_type(&entry.decl) && !arena.ns(ns).types.contains_key(name) {
                    let placeholder_body = arena.fresh_var(None, None);
                    let alias_id = arena.declare_alias(placeholder_body, Vec::new(), None);
                    arena.ns_mut(ns).types.insert(name.to_string(), alias_id);
                }
            }
            scope
        })
        .collect()
}

/// Infers every declaration reachable from `graph`, rooted at
/// `module_scope` (the scope whose namespace is the module's top-level
/// namespace — typically a child of `ctx.global_scope`).
pub fn infer_dep_graph(ctx: &mut CheckerContext, module_scope: ScopeId, graph: &DepGraph) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    let env = Env::new(&ctx.registry, &ctx.options, &ctx.limits, &ctx.cancel, ctx.custom_matcher_symbol);

    'components: for component in &graph.components {
        if ctx.cancel.check().is_err() {
            diags.push(Diagnostic::cancelled());
            break;
        }
        let scopes_for_component = predeclare(&mut ctx.arena, &mut ctx.scopes, module_scope, graph, component);

        for (i, &id) in component.iter().enumerate() {
            if ctx.cancel.check().is_err() {
                diags.push(Diagnostic::cancelled());
                break 'components;
            }
            let entry = graph.decl(id);
            let scope = scopes_for_component[i];
            let imports = ctx.import_table(entry.file_id);
            crate::decl::infer_module_decl(&mut ctx.arena, &mut ctx.scopes, &env, &imports, scope, &entry.decl, &mut diags);
        }
    }

    diags
}
