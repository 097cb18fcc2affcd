//! Expression inference (spec §4.4.1).
//!
//! Shaped after `tsz-checker`'s `ExpressionDispatcher` (`dispatch.rs`): one
//! function matching on the expression's kind and delegating to a
//! specialized helper per variant, rather than one giant `match` arm body.
//! `throws` accumulates the enclosing function's effect set (spec §3.1's
//! `Function.ThrowsType`) — `Throw` and `Call` push into it; evaluating a
//! `FunctionExpr` does not, since defining a function isn't itself an
//! effectful operation.

use esc_ast::{CatchArm, Expr, LiteralAnn, MatchArm, PropKey, Stmt};
use esc_binder::{resolve_qualified, ImportTable, Resolved, ScopeArena, ScopeId};
use esc_common::{Diagnostic, DiagnosticKind, Span};
use esc_types::{
    expand_type, normalize_intersection, normalize_union, unify, FunctionTypeData, ObjTypeElem,
    ObjectTypeData, ParamData, Primitive, PropKeyData, SelfParamData, TupleElem, TupleTypeData,
    Type, TypeArena, TypeId,
};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::calls::resolve_call;
use crate::env::Env;
use crate::pat::infer_pat;
use crate::type_ann::{build as build_type_ann, literal_type};

const COMPARISON_OPS: &[&str] = &["<", ">", "<=", ">=", "==", "!="];

#[allow(clippy::too_many_arguments)]
pub fn infer_expr(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    expr: &Expr,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    if env.cancel.check().is_err() {
        return arena.never();
    }
    match expr {
        Expr::Literal(lit, span) => literal_type(arena, lit, *span),
        Expr::Ident(name, span) => infer_ident(arena, scopes, imports, scope, name, *span, diags),
        Expr::Binary { op, left, right, span } => infer_binary(arena, scopes, env, imports, scope, throws, op, left, right, *span, diags),
        Expr::Call { callee, type_args, args, span } => infer_call(arena, scopes, env, imports, scope, throws, callee, type_args, args, *span, diags),
        Expr::Member { object, prop, span, .. } => infer_member(arena, scopes, env, imports, scope, throws, object, prop, *span, diags),
        Expr::Index { object, index, span, .. } => infer_index(arena, scopes, env, imports, scope, throws, object, index, *span, diags),
        Expr::ObjectLit { props, spreads, span } => infer_object_lit(arena, scopes, env, imports, scope, throws, props, spreads, *span, diags),
        Expr::TupleLit { elems, span } => {
            let elem_tys: Vec<TupleElem> = elems
                .iter()
                .map(|e| TupleElem { ty: infer_expr(arena, scopes, env, imports, scope, throws, e, diags), optional: false, rest: false, name: None })
                .collect();
            arena.tuple(TupleTypeData { elems: elem_tys }, Some(*span))
        }
        Expr::FunctionExpr { self_param, params, return_ty, throws_ty, body, span } => {
            infer_function_expr(arena, scopes, env, imports, scope, self_param.as_ref(), params, return_ty.as_ref(), throws_ty.as_ref(), body, *span, diags)
        }
        Expr::If { cond, then_branch, else_branch, span } => infer_if(arena, scopes, env, imports, scope, throws, cond, then_branch, else_branch.as_deref(), *span, diags),
        Expr::Match { scrutinee, arms, span } => infer_match(arena, scopes, env, imports, scope, throws, scrutinee, arms, *span, diags),
        Expr::Try { body, catch, finally, span } => infer_try(arena, scopes, env, imports, scope, throws, body, catch.as_ref(), finally.as_deref(), *span, diags),
        Expr::Throw(inner, span) => {
            let thrown = infer_expr(arena, scopes, env, imports, scope, throws, inner, diags);
            throws.push(thrown);
            let _ = span;
            arena.never()
        }
        Expr::TaggedTemplate { tag, quasis, interpolations, span } => infer_tagged_template(arena, scopes, env, imports, scope, throws, tag, quasis, interpolations, *span, diags),
        Expr::Cast { expr: inner, ty, span } => {
            let inner_ty = infer_expr(arena, scopes, env, imports, scope, throws, inner, diags);
            let locals = FxHashSet::default();
            let target_ty = build_type_ann(arena, scopes, scope, imports, &locals, ty, diags);
            diags.extend(unify(arena, env.options, env.limits, inner_ty, target_ty, Some(*span)));
            target_ty
        }
        Expr::Block(stmts, span) => {
            let block_scope = scopes.child(scope, arena.declare_namespace());
            let (ty, _) = infer_block(arena, scopes, env, imports, block_scope, stmts, throws, diags);
            let _ = span;
            ty
        }
    }
}

pub fn infer_expr_standalone(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    expr: &Expr,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let mut throws = Vec::new();
    infer_expr(arena, scopes, env, imports, scope, &mut throws, expr, diags)
}

fn infer_ident(arena: &mut TypeArena, scopes: &ScopeArena, imports: &ImportTable, scope: ScopeId, name: &str, span: Span, diags: &mut Vec<Diagnostic>) -> TypeId {
    match resolve_qualified(arena, scopes, scope, imports, std::slice::from_ref(&name.to_string())) {
        Some(Resolved::Value(binding)) => binding.ty,
        Some(Resolved::Namespace(ns)) => arena.namespace_type(ns, Some(span)),
        Some(Resolved::Type(_)) | None => {
            diags.push(Diagnostic::new(DiagnosticKind::UnknownIdentifier, format!("unknown identifier '{name}'"), span));
            arena.never()
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn infer_binary(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    op: &str,
    left: &Expr,
    right: &Expr,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let left_ty = infer_expr(arena, scopes, env, imports, scope, throws, left, diags);
    let right_ty = infer_expr(arena, scopes, env, imports, scope, throws, right, diags);

    if COMPARISON_OPS.contains(&op) {
        let left_base = arena.widen_literal(left_ty);
        let right_base = arena.widen_literal(right_ty);
        let same_kind = matches!((arena.get(left_base), arena.get(right_base)), (Type::Primitive(a), Type::Primitive(b)) if a == b);
        if !same_kind {
            diags.push(Diagnostic::new(DiagnosticKind::CannotAssign, format!("'{op}' requires operands of the same primitive kind"), span));
        }
        return arena.primitive(Primitive::Boolean);
    }

    let Some(op_ty) = crate::lookup_value_in_scope(arena, scopes, scope, imports, op) else {
        diags.push(Diagnostic::new(DiagnosticKind::UnknownIdentifier, format!("unknown operator '{op}'"), span));
        return arena.never();
    };
    let (return_ty, throws_ty) = resolve_call(arena, env, op_ty, &[], &[left_ty, right_ty], Some(span), diags);
    if !matches!(arena.get(throws_ty), Type::Primitive(Primitive::Never)) {
        throws.push(throws_ty);
    }
    return_ty
}

#[allow(clippy::too_many_arguments)]
fn infer_call(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    callee: &Expr,
    type_args: &[esc_ast::TypeAnn],
    args: &[Expr],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let callee_ty = infer_expr(arena, scopes, env, imports, scope, throws, callee, diags);
    let locals = FxHashSet::default();
    let explicit_type_args: Vec<TypeId> = type_args.iter().map(|t| build_type_ann(arena, scopes, scope, imports, &locals, t, diags)).collect();
    let arg_tys: Vec<TypeId> = args.iter().map(|a| infer_expr(arena, scopes, env, imports, scope, throws, a, diags)).collect();

    let (return_ty, throws_ty) = resolve_call(arena, env, callee_ty, &explicit_type_args, &arg_tys, Some(span), diags);
    if !matches!(arena.get(throws_ty), Type::Primitive(Primitive::Never)) {
        throws.push(throws_ty);
    }
    return_ty
}

pub fn lookup_member(arena: &mut TypeArena, limits: &esc_common::Limits, obj_ty: TypeId, key: &str) -> Option<TypeId> {
    let (expanded, _) = expand_type(arena, obj_ty, limits.max_expand_depth);
    lookup_member_inner(arena, limits, expanded, key, 0)
}

fn lookup_member_inner(arena: &mut TypeArena, limits: &esc_common::Limits, ty: TypeId, key: &str, depth: u32) -> Option<TypeId> {
    if depth > limits.max_expand_depth {
        return None;
    }
    match arena.get(ty).clone() {
        Type::Object(o) => {
            for m in &o.members {
                let found = match m {
                    ObjTypeElem::Property { key: PropKeyData::String(k), value, .. } if k == key => Some(*value),
                    ObjTypeElem::Method { key: PropKeyData::String(k), func, .. } if k == key => Some(*func),
                    ObjTypeElem::Getter { key: PropKeyData::String(k), value, .. } if k == key => Some(*value),
                    ObjTypeElem::Setter { key: PropKeyData::String(k), value, .. } if k == key => Some(*value),
                    _ => None,
                };
                if found.is_some() {
                    return found;
                }
            }
            for &parent in &o.extends.clone() {
                let (expanded_parent, _) = expand_type(arena, parent, limits.max_expand_depth);
                if let Some(v) = lookup_member_inner(arena, limits, expanded_parent, key, depth + 1) {
                    return Some(v);
                }
            }
            None
        }
        Type::Intersection(data) => {
            let mut found = Vec::new();
            for &m in &data.members.clone() {
                let (expanded_m, _) = expand_type(arena, m, limits.max_expand_depth);
                if let Some(v) = lookup_member_inner(arena, limits, expanded_m, key, depth + 1) {
                    found.push(v);
                }
            }
            match found.len() {
                0 => None,
                1 => Some(found[0]),
                _ => Some(normalize_intersection(arena, arena.intersection(found, None))),
            }
        }
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
fn infer_member(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    object: &Expr,
    prop: &str,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let obj_ty = infer_expr(arena, scopes, env, imports, scope, throws, object, diags);
    match lookup_member(arena, env.limits, obj_ty, prop) {
        Some(ty) => ty,
        None => {
            diags.push(Diagnostic::new(DiagnosticKind::UnknownMember, format!("unknown member '{prop}'"), span));
            arena.never()
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn infer_index(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    object: &Expr,
    index: &Expr,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let obj_ty = infer_expr(arena, scopes, env, imports, scope, throws, object, diags);
    let idx_ty = infer_expr(arena, scopes, env, imports, scope, throws, index, diags);

    let (expanded, ediags) = expand_type(arena, obj_ty, env.limits.max_expand_depth);
    diags.extend(ediags);

    if let Expr::Literal(LiteralAnn::Number(n), _) = index {
        if let Type::Tuple(t) = arena.get(expanded).clone() {
            if let Some(elem) = t.elems.get(*n as usize) {
                return elem.ty;
            }
        }
    }

    if let Type::Object(o) = arena.get(expanded).clone() {
        if let Some((key_ty, value_ty)) = o.members.iter().find_map(|m| match m {
            ObjTypeElem::Index { key_type, value_type, .. } => Some((*key_type, *value_type)),
            _ => None,
        }) {
            diags.extend(unify(arena, env.options, env.limits, idx_ty, key_ty, Some(span)));
            return value_ty;
        }
    }

    diags.push(Diagnostic::new(DiagnosticKind::UnknownMember, "no index signature for this type".to_string(), span));
    arena.never()
}

#[allow(clippy::too_many_arguments)]
fn infer_object_lit(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    props: &[(PropKey, Expr)],
    spreads: &[Expr],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let mut members: Vec<ObjTypeElem> = Vec::new();

    for spread in spreads {
        let spread_ty = infer_expr(arena, scopes, env, imports, scope, throws, spread, diags);
        let (expanded, _) = expand_type(arena, spread_ty, env.limits.max_expand_depth);
        if let Type::Object(o) = arena.get(expanded).clone() {
            members.extend(o.members.iter().cloned());
        }
    }

    for (key, value) in props {
        let value_ty = infer_expr(arena, scopes, env, imports, scope, throws, value, diags);
        let key_data = match key {
            PropKey::Ident(s) | PropKey::String(s) => Some(PropKeyData::String(s.clone())),
            PropKey::Number(n) => Some(PropKeyData::Number(*n as u64)),
            PropKey::Computed(_) => None,
        };
        if let Some(key_data) = key_data {
            members.retain(|m| m.key() != Some(&key_data));
            members.push(ObjTypeElem::Property { key: key_data, value: value_ty, readonly: false, optional: false });
        }
    }

    let identity = arena.next_identity();
    arena.object(ObjectTypeData { object_flags: 0, members, extends: Vec::new(), identity }, Some(span))
}

#[allow(clippy::too_many_arguments)]
fn infer_function_expr(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    self_param: Option<&esc_ast::SelfParam>,
    params: &[esc_ast::Param],
    return_ty_ann: Option<&esc_ast::TypeAnn>,
    throws_ty_ann: Option<&esc_ast::TypeAnn>,
    body: &[Stmt],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let fn_scope = scopes.child(scope, arena.declare_namespace());
    let locals = FxHashSet::default();
    let fn_ns = scopes.namespace(fn_scope);

    let self_binding = self_param.map(|s| {
        let fresh = arena.fresh_var(None, Some(s.span));
        arena.declare_binding(fn_ns, "self".to_string(), esc_types::Binding { ty: fresh, mutable: s.mutable, source: Some(s.span) });
        SelfParamData { mutable: s.mutable }
    });

    let built_params: SmallVec<[ParamData; 4]> = params
        .iter()
        .map(|p| {
            let pat_result = infer_pat(arena, scopes, env, imports, fn_scope, &p.pat, diags);
            let ty = match &p.ty {
                Some(ann) => {
                    let built = build_type_ann(arena, scopes, fn_scope, imports, &locals, ann, diags);
                    diags.extend(unify(arena, env.options, env.limits, pat_result.ty, built, Some(p.span)));
                    built
                }
                None => pat_result.ty,
            };
            for (name, bound_ty) in pat_result.bindings {
                arena.declare_binding(fn_ns, name, esc_types::Binding { ty: bound_ty, mutable: false, source: Some(p.span) });
            }
            ParamData { name: param_binding_name(&p.pat), ty, optional: p.optional, rest: p.rest }
        })
        .collect();

    let mut body_throws = Vec::new();
    let (returns, _) = infer_block(arena, scopes, env, imports, fn_scope, body, &mut body_throws, diags);

    let return_ty = match return_ty_ann {
        Some(ann) => {
            let built = build_type_ann(arena, scopes, fn_scope, imports, &locals, ann, diags);
            diags.extend(unify(arena, env.options, env.limits, returns, built, Some(span)));
            built
        }
        None => returns,
    };
    let throws_ty = match throws_ty_ann {
        Some(ann) => build_type_ann(arena, scopes, fn_scope, imports, &locals, ann, diags),
        None => normalize_union(arena, body_throws),
    };

    arena.function(
        FunctionTypeData { type_params: Vec::new(), params: built_params, return_ty, throws_ty, self_param: self_binding },
        Some(span),
    )
}

fn param_binding_name(pat: &esc_ast::Pat) -> String {
    match pat {
        esc_ast::Pat::Ident { name, .. } => name.clone(),
        _ => "_".to_string(),
    }
}

/// Infers a statement list's result type (the last `Return`'s type,
/// `undefined` if none reached) and threads `throws` through every
/// statement (spec §4.4.1: "result type and a propagated throws type").
#[allow(clippy::too_many_arguments)]
pub fn infer_block(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    stmts: &[Stmt],
    throws: &mut Vec<TypeId>,
    diags: &mut Vec<Diagnostic>,
) -> (TypeId, Vec<TypeId>) {
    let mut returns = Vec::new();
    for stmt in stmts {
        match stmt {
            Stmt::Decl(decl) => {
                crate::decl::infer_local_decl(arena, scopes, env, imports, scope, decl, throws, diags);
            }
            Stmt::Return(Some(e), _) => {
                returns.push(infer_expr(arena, scopes, env, imports, scope, throws, e, diags));
            }
            Stmt::Return(None, _) => {
                returns.push(arena.undefined());
            }
            Stmt::ExprStmt(e, _) => {
                infer_expr(arena, scopes, env, imports, scope, throws, e, diags);
            }
        }
    }
    let result = if returns.is_empty() { arena.undefined() } else { normalize_union(arena, returns.clone()) };
    (result, returns)
}

#[allow(clippy::too_many_arguments)]
fn infer_if(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    cond: &Expr,
    then_branch: &Expr,
    else_branch: Option<&Expr>,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let cond_ty = infer_expr(arena, scopes, env, imports, scope, throws, cond, diags);
    let boolean = arena.primitive(Primitive::Boolean);
    diags.extend(unify(arena, env.options, env.limits, cond_ty, boolean, Some(span)));

    let then_ty = infer_expr(arena, scopes, env, imports, scope, throws, then_branch, diags);
    let else_ty = match else_branch {
        Some(e) => infer_expr(arena, scopes, env, imports, scope, throws, e, diags),
        None => arena.undefined(),
    };
    normalize_union(arena, vec![then_ty, else_ty])
}

#[allow(clippy::too_many_arguments)]
fn infer_match(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    scrutinee: &Expr,
    arms: &[MatchArm],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let scrutinee_ty = infer_expr(arena, scopes, env, imports, scope, throws, scrutinee, diags);
    let boolean = arena.primitive(Primitive::Boolean);

    let mut results = Vec::new();
    for arm in arms {
        let arm_scope = scopes.child(scope, arena.declare_namespace());
        let arm_ns = scopes.namespace(arm_scope);
        let pat_result = infer_pat(arena, scopes, env, imports, arm_scope, &arm.pat, diags);
        diags.extend(unify(arena, env.options, env.limits, pat_result.ty, scrutinee_ty, Some(arm.span)));
        for (name, ty) in pat_result.bindings {
            arena.declare_binding(arm_ns, name, esc_types::Binding { ty, mutable: false, source: Some(arm.span) });
        }
        if let Some(guard) = &arm.guard {
            let guard_ty = infer_expr(arena, scopes, env, imports, arm_scope, throws, guard, diags);
            diags.extend(unify(arena, env.options, env.limits, guard_ty, boolean, Some(arm.span)));
        }
        results.push(infer_expr(arena, scopes, env, imports, arm_scope, throws, &arm.body, diags));
    }
    let _ = span;
    normalize_union(arena, results)
}

#[allow(clippy::too_many_arguments)]
fn infer_try(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    body: &[Stmt],
    catch: Option<&CatchArm>,
    finally: Option<&[Stmt]>,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let body_scope = scopes.child(scope, arena.declare_namespace());
    let mut body_throws = Vec::new();
    let (body_ty, _) = infer_block(arena, scopes, env, imports, body_scope, body, &mut body_throws, diags);

    let mut result_tys = vec![body_ty];
    match catch {
        Some(arm) => {
            let caught = normalize_union(arena, body_throws.clone());
            let catch_scope = scopes.child(scope, arena.declare_namespace());
            let catch_ns = scopes.namespace(catch_scope);
            let matched_ty = match &arm.ty {
                Some(ann) => {
                    let locals = FxHashSet::default();
                    let built = build_type_ann(arena, scopes, catch_scope, imports, &locals, ann, diags);
                    diags.extend(unify(arena, env.options, env.limits, caught, built, Some(arm.span)));
                    Some(built)
                }
                None => None,
            };
            if let Some(pat) = &arm.pat {
                let pat_result = infer_pat(arena, scopes, env, imports, catch_scope, pat, diags);
                let bind_against = matched_ty.unwrap_or(caught);
                diags.extend(unify(arena, env.options, env.limits, bind_against, pat_result.ty, Some(arm.span)));
                for (name, ty) in pat_result.bindings {
                    arena.declare_binding(catch_ns, name, esc_types::Binding { ty, mutable: false, source: Some(arm.span) });
                }
            }

            let mut catch_throws = Vec::new();
            let (catch_ty, _) = infer_block(arena, scopes, env, imports, catch_scope, &arm.body, &mut catch_throws, diags);
            result_tys.push(catch_ty);
            throws.extend(catch_throws);

            // A bare `catch` (no declared type) consumes the whole thrown
            // union; a typed catch only consumes what structurally matches
            // its declared type, the rest keeps propagating (spec §4.4.1:
            // "throws = block's throws minus statically-matched").
            if let Some(matched) = matched_ty {
                for t in &body_throws {
                    if !esc_types::structurally_equal(arena, *t, matched) {
                        throws.push(*t);
                    }
                }
            }
        }
        None => throws.extend(body_throws),
    }

    if let Some(stmts) = finally {
        let finally_scope = scopes.child(scope, arena.declare_namespace());
        let mut finally_throws = Vec::new();
        infer_block(arena, scopes, env, imports, finally_scope, stmts, &mut finally_throws, diags);
        throws.extend(finally_throws);
    }

    let _ = span;
    normalize_union(arena, result_tys)
}

#[allow(clippy::too_many_arguments)]
fn infer_tagged_template(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    throws: &mut Vec<TypeId>,
    tag: &Expr,
    quasis: &[String],
    interpolations: &[Expr],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    if let Expr::Ident(name, _) = tag {
        if name == "gql" {
            // GraphQL schema parsing is out of scope; without a configured
            // schema this tag always yields `never` (spec §4.4.1).
            for i in interpolations {
                infer_expr(arena, scopes, env, imports, scope, throws, i, diags);
            }
            let _ = quasis;
            return arena.never();
        }
    }

    let tag_ty = infer_expr(arena, scopes, env, imports, scope, throws, tag, diags);
    let quasis_tuple: Vec<TupleElem> = quasis
        .iter()
        .map(|q| TupleElem { ty: literal_type(arena, &LiteralAnn::String(q.clone()), span), optional: false, rest: false, name: None })
        .collect();
    let quasis_ty = arena.tuple(TupleTypeData { elems: quasis_tuple }, Some(span));
    let mut arg_tys = vec![quasis_ty];
    arg_tys.extend(interpolations.iter().map(|i| infer_expr(arena, scopes, env, imports, scope, throws, i, diags)));

    let (return_ty, throws_ty) = resolve_call(arena, env, tag_ty, &[], &arg_tys, Some(span), diags);
    if !matches!(arena.get(throws_ty), Type::Primitive(Primitive::Never)) {
        throws.push(throws_ty);
    }
    return_ty
}
