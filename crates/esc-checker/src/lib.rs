//! The esc type checker core: binds a file/module against
//! `esc-binder`'s scopes and import tables, and infers every declaration
//! and expression into `esc-types`' arena (spec §1, §6.2).

pub mod calls;
pub mod context;
pub mod decl;
pub mod env;
pub mod expr;
pub mod pat;
pub mod prelude;
pub mod scheduler;
pub mod type_ann;

use esc_ast::{File, Module};
use esc_binder::{build_import_table, depgraph, resolve_qualified, ImportTable, Resolved, ScopeArena, ScopeId};
use esc_common::{Diagnostic, Span};
use esc_types::{normalize_intersection, unify, TypeArena, TypeId};

use context::CheckerContext;
use env::Env;

pub(crate) fn span_or_dummy(span: Option<Span>) -> Span {
    span.unwrap_or_else(Span::dummy)
}

/// Resolves a bare name (an operator's function binding, a builtin) in
/// `scope`, consulting `imports` before the scope chain — the same
/// resolution `infer_ident` uses for ordinary identifiers (`expr.rs`),
/// factored out because `infer_binary`'s operator lookup needs exactly
/// the value case and nothing else.
pub(crate) fn lookup_value_in_scope(arena: &mut TypeArena, scopes: &ScopeArena, scope: ScopeId, imports: &ImportTable, name: &str) -> Option<TypeId> {
    match resolve_qualified(arena, scopes, scope, imports, std::slice::from_ref(&name.to_string())) {
        Some(Resolved::Value(binding)) => Some(binding.ty),
        _ => None,
    }
}

fn build_and_store_imports(ctx: &mut CheckerContext, file: &File) -> ImportTable {
    let (table, diags) = build_import_table(&ctx.arena, &ctx.registry, &file.imports);
    ctx.diagnostics.extend(diags.clone());
    ctx.import_tables.insert(file.id, table.clone());
    table
}

/// Infers a standalone file's top-level declarations in source order,
/// without the dependency-graph scheduling `InferModule`/`InferDepGraph`
/// use — a script has no sibling files to be mutually recursive with, so
/// forward references within it aren't resolved (spec §6.2 "InferScript").
pub fn infer_script(ctx: &mut CheckerContext, file: &File) -> (ScopeId, Vec<Diagnostic>) {
    let mut diags = Vec::new();
    let imports = build_and_store_imports(ctx, file);
    let scope = ctx.scopes.descend(&mut ctx.arena, ctx.global_scope, &file.namespace);
    let env = Env::new(&ctx.registry, &ctx.options, &ctx.limits, &ctx.cancel, ctx.custom_matcher_symbol);

    let mut throws = Vec::new();
    for decl in &file.decls {
        if ctx.cancel.check().is_err() {
            diags.push(Diagnostic::cancelled());
            break;
        }
        decl::infer_local_decl(&mut ctx.arena, &mut ctx.scopes, &env, &imports, scope, decl, &mut throws, &mut diags);
    }

    ctx.diagnostics.extend(diags.clone());
    (scope, diags)
}

/// Infers every file of `module` as one dependency-graph unit (spec §6.2
/// "InferModule"): builds the `DepGraph` over all of `module`'s files,
/// then defers to `InferDepGraph`.
pub fn infer_module(ctx: &mut CheckerContext, module: &Module) -> Vec<Diagnostic> {
    for file in &module.files {
        build_and_store_imports(ctx, file);
    }
    let graph = depgraph::build(module);
    let module_ns = ctx.arena.declare_namespace();
    let module_scope = ctx.scopes.child(ctx.global_scope, module_ns);
    infer_dep_graph(ctx, module_scope, &graph)
}

/// Runs the scheduler over an already-built `DepGraph` (spec §6.2
/// "InferDepGraph"), for callers that built the graph themselves (e.g. to
/// inspect `components` before inferring).
pub fn infer_dep_graph(ctx: &mut CheckerContext, module_scope: ScopeId, graph: &depgraph::DepGraph) -> Vec<Diagnostic> {
    let diags = scheduler::infer_dep_graph(ctx, module_scope, graph);
    ctx.diagnostics.extend(diags.clone());
    diags
}

/// Thin wrapper over `esc_types::expand_type` (spec §6.2 "ExpandType").
pub fn expand_type(ctx: &mut CheckerContext, ty: TypeId, depth: u32) -> (TypeId, Vec<Diagnostic>) {
    esc_types::expand_type(&mut ctx.arena, ty, depth)
}

/// Thin wrapper over `esc_types::unify` (spec §6.2 "Unify").
pub fn unify_types(ctx: &mut CheckerContext, from: TypeId, to: TypeId, provenance: Option<Span>) -> Vec<Diagnostic> {
    unify(&mut ctx.arena, &ctx.options, &ctx.limits, from, to, provenance)
}

/// Thin wrapper over `esc_types::normalize_intersection` (spec §6.2
/// "NormalizeIntersectionType").
pub fn normalize_intersection_type(ctx: &mut CheckerContext, ty: TypeId) -> TypeId {
    normalize_intersection(&mut ctx.arena, ty)
}
