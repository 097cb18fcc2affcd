//! Pattern inference (spec §4.4.2): a pattern's type plus the bindings it
//! introduces. Binding installation into a `NamespaceData` is left to the
//! caller (`decl.rs`/`expr.rs`), which knows which scope the bindings
//! belong in.

use esc_ast::Pat;
use esc_binder::{resolve_qualified, ImportTable, Resolved, ScopeArena, ScopeId};
use esc_common::{Diagnostic, DiagnosticKind};
use esc_types::{unify, Primitive, PropKeyData, Type, TypeArena, TypeId};

use crate::calls::resolve_call;
use crate::env::Env;
use crate::type_ann::{build as build_type_ann, literal_type};
use rustc_hash::FxHashSet;

pub struct PatResult {
    pub ty: TypeId,
    pub bindings: Vec<(String, TypeId)>,
}

#[allow(clippy::too_many_arguments)]
pub fn infer_pat(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    pat: &Pat,
    diags: &mut Vec<Diagnostic>,
) -> PatResult {
    match pat {
        Pat::Ident { name, ty, span } => {
            let locals = FxHashSet::default();
            let ty_id = match ty {
                Some(ann) => build_type_ann(arena, scopes, scope, imports, &locals, ann, diags),
                None => arena.fresh_var(None, Some(*span)),
            };
            PatResult { ty: ty_id, bindings: vec![(name.clone(), ty_id)] }
        }
        Pat::Wildcard(_) => PatResult { ty: arena.any(), bindings: Vec::new() },
        Pat::Literal(lit, span) => PatResult { ty: literal_type(arena, lit, *span), bindings: Vec::new() },
        Pat::Tuple { elems, rest, span } => {
            let mut bindings = Vec::new();
            let mut tuple_elems = Vec::new();
            for elem in elems {
                let sub = infer_pat(arena, scopes, env, imports, scope, elem, diags);
                bindings.extend(sub.bindings);
                tuple_elems.push(esc_types::TupleElem { ty: sub.ty, optional: false, rest: false, name: None });
            }
            if let Some(rest_pat) = rest {
                let sub = infer_pat(arena, scopes, env, imports, scope, rest_pat, diags);
                bindings.extend(sub.bindings);
                tuple_elems.push(esc_types::TupleElem { ty: sub.ty, optional: false, rest: true, name: None });
            }
            let ty = arena.tuple(esc_types::TupleTypeData { elems: tuple_elems }, Some(*span));
            PatResult { ty, bindings }
        }
        Pat::Object { fields, rest, span } => {
            let mut bindings = Vec::new();
            let mut members = Vec::new();
            for field in fields {
                let value_ty = match &field.sub {
                    Some(sub_pat) => {
                        let sub = infer_pat(arena, scopes, env, imports, scope, sub_pat, diags);
                        bindings.extend(sub.bindings);
                        sub.ty
                    }
                    None => {
                        let fresh = arena.fresh_var(None, Some(field.span));
                        let binding_name = field.rename.clone().unwrap_or_else(|| field.key.clone());
                        bindings.push((binding_name, fresh));
                        fresh
                    }
                };
                let value_ty = if let Some(default_expr) = &field.default {
                    let default_ty = crate::expr::infer_expr_standalone(arena, scopes, env, imports, scope, default_expr, diags);
                    if admits_undefined(arena, value_ty) {
                        arena.union(vec![value_ty, default_ty], Some(field.span))
                    } else {
                        value_ty
                    }
                } else {
                    value_ty
                };
                members.push(esc_types::ObjTypeElem::Property {
                    key: PropKeyData::String(field.key.clone()),
                    value: value_ty,
                    readonly: false,
                    optional: field.default.is_some(),
                });
            }
            let identity = arena.next_identity();
            let ty = arena.object(esc_types::ObjectTypeData { object_flags: 0, members, extends: Vec::new(), identity }, Some(*span));
            if let Some(rest_name) = rest {
                let rest_ty = arena.fresh_var(None, Some(*span));
                bindings.push((rest_name.clone(), rest_ty));
            }
            PatResult { ty, bindings }
        }
        Pat::Extractor { ctor, args, span } => {
            let ctor_ty = match resolve_qualified(arena, scopes, scope, imports, ctor) {
                Some(Resolved::Value(binding)) => Some(binding.ty),
                _ => None,
            };
            let Some(ctor_ty) = ctor_ty else {
                diags.push(Diagnostic::new(DiagnosticKind::UnknownIdentifier, format!("unknown extractor '{}'", ctor.join(".")), *span));
                let mut bindings = Vec::new();
                for arg in args {
                    let sub = infer_pat(arena, scopes, env, imports, scope, arg, diags);
                    bindings.extend(sub.bindings);
                }
                return PatResult { ty: arena.never(), bindings };
            };

            let matcher = find_custom_matcher(arena, env, ctor_ty);
            let Some(matcher_ty) = matcher else {
                diags.push(Diagnostic::new(
                    DiagnosticKind::UnknownMember,
                    "extractor has no Symbol.customMatcher".to_string(),
                    *span,
                ));
                let mut bindings = Vec::new();
                for arg in args {
                    let sub = infer_pat(arena, scopes, env, imports, scope, arg, diags);
                    bindings.extend(sub.bindings);
                }
                return PatResult { ty: arena.never(), bindings };
            };

            let (return_ty, _throws) = resolve_call(arena, env, matcher_ty, &[], &[], Some(*span), diags);
            let elem_tys: Vec<TypeId> = match arena.get(return_ty).clone() {
                Type::Tuple(t) => t.elems.iter().map(|e| e.ty).collect(),
                _ => vec![return_ty; args.len()],
            };

            let mut bindings = Vec::new();
            for (i, arg) in args.iter().enumerate() {
                let sub = infer_pat(arena, scopes, env, imports, scope, arg, diags);
                bindings.extend(sub.bindings);
                if let Some(&elem_ty) = elem_tys.get(i) {
                    diags.extend(unify(arena, env.options, env.limits, elem_ty, sub.ty, Some(*span)));
                }
            }
            PatResult { ty: return_ty, bindings }
        }
    }
}

fn find_custom_matcher(arena: &mut TypeArena, env: &Env, ctor_ty: TypeId) -> Option<TypeId> {
    let (expanded, _) = esc_types::expand_type(arena, ctor_ty, env.limits.max_expand_depth);
    let target_id = match arena.get(env.custom_matcher_symbol) {
        Type::UniqueSymbol(data) => data.id,
        _ => return None,
    };
    match arena.get(expanded).clone() {
        Type::Object(o) => o.members.iter().find_map(|m| match m {
            esc_types::ObjTypeElem::Method { key: PropKeyData::UniqueSymbol(sym), func, .. } => {
                is_custom_matcher_symbol(arena, *sym, target_id).then_some(*func)
            }
            esc_types::ObjTypeElem::Property { key: PropKeyData::UniqueSymbol(sym), value, .. } => {
                is_custom_matcher_symbol(arena, *sym, target_id).then_some(*value)
            }
            _ => None,
        }),
        _ => None,
    }
}

fn is_custom_matcher_symbol(arena: &TypeArena, sym_id: TypeId, target_id: u32) -> bool {
    matches!(arena.get(sym_id), Type::UniqueSymbol(data) if data.id == target_id)
}

fn admits_undefined(arena: &mut TypeArena, ty: TypeId) -> bool {
    let pruned = esc_types::prune(arena, ty);
    match arena.get(pruned).clone() {
        Type::Primitive(Primitive::Undefined) => true,
        Type::Union(u) => u.members.iter().any(|&m| admits_undefined(arena, m)),
        _ => false,
    }
}
