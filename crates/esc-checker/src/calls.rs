//! Call-signature resolution shared between `Call` expressions, arithmetic
//! operator dispatch, tagged templates, and extractor patterns (spec
//! §4.4.1 "Call", §4.3.7 instantiation).
//!
//! Overload resolution over an `Intersection` of call signatures picks a
//! candidate by parameter-count match rather than by speculative trial
//! unification: `unify` mutates `TypeVar` bindings in place and the arena
//! doesn't expose a snapshot/rollback hook the way `ena`'s table itself
//! does, so a "try each, keep the first that succeeds" design would leak
//! partial bindings from failed attempts. Picking by arity first and then
//! unifying once against the chosen candidate keeps unification's
//! side effects single-shot.

use esc_common::{Diagnostic, DiagnosticKind, Span};
use esc_types::{instantiate, unify, FunctionTypeData, ObjTypeElem, Type, TypeArena, TypeId, TypeParamDef};

use crate::env::Env;

fn type_param_defs(arena: &TypeArena, ids: &[TypeId]) -> Vec<TypeParamDef> {
    ids.iter()
        .map(|&id| match arena.get(id) {
            Type::TypeRef(r) => TypeParamDef { name: r.name.clone(), constraint: None, default: None },
            _ => TypeParamDef { name: "_".to_string(), constraint: None, default: None },
        })
        .collect()
}

/// Expands `callee_ty` and returns every candidate `FunctionTypeData`-typed
/// `TypeId` found directly, as an `Intersection` member, or as a `Call`/
/// `Constructor` signature on an `Object` (a class's constructor type,
/// spec §4.4.3 "class": "a constructor Object type with a `new` call
/// signature").
fn candidates(arena: &mut TypeArena, limits: &esc_common::Limits, callee_ty: TypeId, diags: &mut Vec<Diagnostic>) -> Vec<TypeId> {
    let (expanded, expand_diags) = esc_types::expand_type(arena, callee_ty, limits.max_expand_depth);
    diags.extend(expand_diags);
    match arena.get(expanded).clone() {
        Type::Function(_) => vec![expanded],
        Type::Intersection(data) => data
            .members
            .iter()
            .copied()
            .filter(|&m| {
                let (m_expanded, _) = esc_types::expand_type(arena, m, limits.max_expand_depth);
                matches!(arena.get(m_expanded), Type::Function(_))
            })
            .collect(),
        Type::Object(data) => data
            .members
            .iter()
            .filter_map(|m| match m {
                ObjTypeElem::Call { func } | ObjTypeElem::Constructor { func } => Some(*func),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn pick_candidate(arena: &mut TypeArena, candidates: &[TypeId], arg_count: usize) -> TypeId {
    let mut best = candidates[0];
    for &c in candidates {
        if let Type::Function(f) = arena.get(c).clone() {
            let has_rest = f.params.last().map(|p| p.rest).unwrap_or(false);
            let required = f.params.iter().filter(|p| !p.optional && !p.rest).count();
            if arg_count >= required && (has_rest || arg_count <= f.params.len()) {
                best = c;
                break;
            }
        }
    }
    best
}

/// Resolves a call against `callee_ty`, returning `(return_ty, throws_ty)`.
/// `explicit_type_args` is empty when the call site gave none (generic
/// parameters are then minted as fresh `TypeVar`s by `instantiate`).
pub fn resolve_call(
    arena: &mut TypeArena,
    env: &Env,
    callee_ty: TypeId,
    explicit_type_args: &[TypeId],
    arg_tys: &[TypeId],
    provenance: Option<Span>,
    diags: &mut Vec<Diagnostic>,
) -> (TypeId, TypeId) {
    let cands = candidates(arena, env.limits, callee_ty, diags);
    if cands.is_empty() {
        diags.push(Diagnostic::new(DiagnosticKind::Other, "value is not callable".to_string(), crate::span_or_dummy(provenance)));
        let never = arena.never();
        return (never, never);
    }

    let chosen = pick_candidate(arena, &cands, arg_tys.len());
    let Type::Function(func) = arena.get(chosen).clone() else {
        unreachable!("candidates() only returns Function-typed ids");
    };

    let (instantiated, type_params) = if func.type_params.is_empty() {
        (chosen, Vec::new())
    } else {
        let defs = type_param_defs(arena, &func.type_params);
        let args: Vec<Option<TypeId>> = (0..defs.len())
            .map(|i| explicit_type_args.get(i).copied())
            .collect();
        let (result, inst_diags) = instantiate(arena, &defs, &args, chosen, provenance);
        diags.extend(inst_diags);
        (result, defs)
    };
    let _ = type_params;

    let Type::Function(func) = arena.get(instantiated).clone() else {
        unreachable!("instantiate preserves the Function shape");
    };

    let required = func.params.iter().filter(|p| !p.optional && !p.rest).count();
    if arg_tys.len() < required {
        diags.push(Diagnostic::new(DiagnosticKind::ArityMismatch, format!("expected at least {required} argument(s), got {}", arg_tys.len()), crate::span_or_dummy(provenance)));
    }
    let has_rest = func.params.last().map(|p| p.rest).unwrap_or(false);
    if !has_rest && arg_tys.len() > func.params.len() {
        diags.push(Diagnostic::new(DiagnosticKind::ArityMismatch, format!("expected at most {} argument(s), got {}", func.params.len(), arg_tys.len()), crate::span_or_dummy(provenance)));
    }

    for (i, &arg_ty) in arg_tys.iter().enumerate() {
        let param = match func.params.get(i) {
            Some(p) => p,
            None if has_rest => func.params.last().unwrap(),
            None => break,
        };
        diags.extend(unify(arena, env.options, env.limits, arg_ty, param.ty, provenance));
    }

    (func.return_ty, func.throws_ty)
}

pub fn function_data_of(arena: &mut TypeArena, ty: TypeId, depth: u32) -> Option<FunctionTypeData> {
    let (expanded, _) = esc_types::expand_type(arena, ty, depth);
    match arena.get(expanded) {
        Type::Function(f) => Some((**f).clone()),
        _ => None,
    }
}
