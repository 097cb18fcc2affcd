//! `expandType(t, depth) -> (Type, [Diagnostic])` (spec §4.3.5): alias
//! unfolding with bounded recursion depth, plus evaluation of the
//! type-level-programming forms (`Conditional`, `TemplateLit` distribution,
//! intersection-over-union distribution).

use esc_common::{CheckerOptions, Diagnostic, DiagnosticKind, Limits, Span};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::arena::TypeArena;
use crate::data::{
    ConditionalTypeData, FunctionTypeData, LiteralValue, ObjTypeElem, ObjectTypeData, Primitive,
    TupleElem, TupleTypeData, Type,
};
use crate::ids::TypeId;
use crate::normalize::normalize_intersection;
use crate::prune::prune;
use crate::substitute::substitute;

/// Expands `t` up to `depth` alias-unfolding steps. Returns the expanded
/// type and any diagnostics raised along the way (`UnknownType` for a
/// dangling `TypeRef`).
pub fn expand_type(arena: &mut TypeArena, t: TypeId, depth: u32) -> (TypeId, Vec<Diagnostic>) {
    let mut diags = Vec::new();
    let result = expand_inner(arena, t, depth, &mut diags);
    (result, diags)
}

fn expand_inner(arena: &mut TypeArena, t: TypeId, depth: u32, diags: &mut Vec<Diagnostic>) -> TypeId {
    let t = prune(arena, t);
    if depth == 0 {
        return t;
    }
    let kind = arena.get(t).clone();
    match kind {
        Type::Primitive(_)
        | Type::Literal(_)
        | Type::TypeVar(_)
        | Type::Namespace(_)
        | Type::Regex(_)
        | Type::UniqueSymbol(_)
        | Type::Infer { .. } => t,

        Type::TypeRef(data) => {
            let Some(alias_id) = data.alias else {
                diags.push(Diagnostic::new(
                    DiagnosticKind::UnknownType,
                    format!("unknown type `{}`", data.name),
                    Span::dummy(),
                ));
                return arena.never();
            };
            let alias = arena.alias(alias_id).clone();
            let expanded_args: Vec<TypeId> =
                data.args.iter().map(|&a| expand_inner(arena, a, 1, diags)).collect();
            let mut map: FxHashMap<String, TypeId> = FxHashMap::default();
            for (param, arg) in alias.type_params.iter().zip(expanded_args.iter()) {
                map.insert(param.name.clone(), *arg);
            }
            let body = substitute(arena, alias.ty, &map);
            trace!(name = %data.name, "expand TypeRef");
            expand_inner(arena, body, depth - 1, diags)
        }

        Type::Object(data) => {
            let members = data.members.iter().map(|m| expand_member(arena, m, depth, diags)).collect();
            let extends = data.extends.iter().map(|&e| expand_inner(arena, e, depth, diags)).collect();
            arena.object(
                ObjectTypeData { object_flags: data.object_flags, members, extends, identity: data.identity },
                None,
            )
        }

        Type::Tuple(data) => {
            let elems = data
                .elems
                .iter()
                .map(|e| TupleElem {
                    ty: expand_inner(arena, e.ty, depth, diags),
                    optional: e.optional,
                    rest: e.rest,
                    name: e.name.clone(),
                })
                .collect();
            arena.tuple(TupleTypeData { elems }, None)
        }

        Type::Function(data) => {
            let params = data
                .params
                .iter()
                .map(|p| crate::data::ParamData {
                    name: p.name.clone(),
                    ty: expand_inner(arena, p.ty, depth, diags),
                    optional: p.optional,
                    rest: p.rest,
                })
                .collect();
            let return_ty = expand_inner(arena, data.return_ty, depth, diags);
            let throws_ty = expand_inner(arena, data.throws_ty, depth, diags);
            arena.function(
                FunctionTypeData {
                    type_params: data.type_params.clone(),
                    params,
                    return_ty,
                    throws_ty,
                    self_param: data.self_param,
                },
                None,
            )
        }

        Type::Union(data) => {
            let members: Vec<TypeId> = data.members.iter().map(|&m| expand_inner(arena, m, depth, diags)).collect();
            arena.union(members, None)
        }

        Type::Intersection(data) => {
            let members: Vec<TypeId> = data.members.iter().map(|&m| expand_inner(arena, m, depth, diags)).collect();
            let distributed = distribute_intersection(arena, &members);
            normalize_intersection(arena, distributed)
        }

        Type::Conditional(data) => expand_conditional(arena, &data, depth, diags),

        Type::TemplateLit(data) => expand_template_lit(arena, &data.quasis, &data.interpolations, depth, diags),

        Type::Mutable(inner) => {
            let inner = expand_inner(arena, inner, depth, diags);
            arena.mutable(inner, None)
        }

        Type::KeyOf(inner) => {
            let expanded = expand_inner(arena, inner, depth, diags);
            if let Type::Object(obj) = arena.get(expanded).clone() {
                let keys: Vec<TypeId> = obj
                    .members
                    .iter()
                    .filter_map(|m| m.key())
                    .filter_map(|k| match k {
                        crate::data::PropKeyData::String(s) => {
                            Some(arena.literal(LiteralValue::String(s.clone()), None))
                        }
                        _ => None,
                    })
                    .collect();
                arena.union(keys, None)
            } else {
                arena.key_of(expanded, None)
            }
        }

        Type::IndexedAccess { object, index } => {
            let object = expand_inner(arena, object, depth, diags);
            let index = expand_inner(arena, index, depth, diags);
            if let (Type::Object(obj), Type::Literal(lit)) = (arena.get(object).clone(), arena.get(index).clone()) {
                if let LiteralValue::String(s) = &lit.value {
                    let key = crate::data::PropKeyData::String(s.clone());
                    if let Some(found) = find_member_value(&obj, &key) {
                        return expand_inner(arena, found, depth - 1, diags);
                    }
                }
            }
            arena.indexed_access(object, index, None)
        }

        Type::Mapped(data) => {
            // Evaluating a mapped type over an unresolved constraint leaves
            // it unevaluated, matching the Conditional handling below.
            arena.mapped(data, None)
        }

        Type::Rest(inner) => {
            let inner = expand_inner(arena, inner, depth, diags);
            arena.rest(inner, None)
        }

        Type::Extractor(data) => {
            let ctor = expand_inner(arena, data.ctor, depth, diags);
            let args = data.args.iter().map(|&a| expand_inner(arena, a, depth, diags)).collect();
            arena.extractor(ctor, args, None)
        }
    }
}

fn find_member_value(obj: &ObjectTypeData, key: &crate::data::PropKeyData) -> Option<TypeId> {
    obj.members.iter().find_map(|m| match m {
        ObjTypeElem::Property { key: k, value, .. } if k == key => Some(*value),
        _ => None,
    })
}

fn expand_member(arena: &mut TypeArena, elem: &ObjTypeElem, depth: u32, diags: &mut Vec<Diagnostic>) -> ObjTypeElem {
    match elem {
        ObjTypeElem::Property { key, value, readonly, optional } => ObjTypeElem::Property {
            key: *key,
            value: expand_inner(arena, *value, depth, diags),
            readonly: *readonly,
            optional: *optional,
        },
        ObjTypeElem::Method { key, func, is_static } => {
            ObjTypeElem::Method { key: *key, func: expand_inner(arena, *func, depth, diags), is_static: *is_static }
        }
        ObjTypeElem::Getter { key, value } => ObjTypeElem::Getter { key: *key, value: expand_inner(arena, *value, depth, diags) },
        ObjTypeElem::Setter { key, value } => ObjTypeElem::Setter { key: *key, value: expand_inner(arena, *value, depth, diags) },
        ObjTypeElem::Index { key_type, value_type, readonly } => ObjTypeElem::Index {
            key_type: expand_inner(arena, *key_type, depth, diags),
            value_type: expand_inner(arena, *value_type, depth, diags),
            readonly: *readonly,
        },
        ObjTypeElem::Call { func } => ObjTypeElem::Call { func: expand_inner(arena, *func, depth, diags) },
        ObjTypeElem::Constructor { func } => ObjTypeElem::Constructor { func: expand_inner(arena, *func, depth, diags) },
        ObjTypeElem::Mapped { template } => ObjTypeElem::Mapped { template: expand_inner(arena, *template, depth, diags) },
    }
}

/// `A & (B | C) -> (A & B) | (A & C)`, cartesian product over multiple
/// unions among `members`.
fn distribute_intersection(arena: &mut TypeArena, members: &[TypeId]) -> TypeId {
    let mut combos: Vec<Vec<TypeId>> = vec![Vec::new()];
    for &m in members {
        let m = prune(arena, m);
        if let Type::Union(u) = arena.get(m).clone() {
            let mut next = Vec::new();
            for combo in &combos {
                for &branch in &u.members {
                    let mut extended = combo.clone();
                    extended.push(branch);
                    next.push(extended);
                }
            }
            combos = next;
        } else {
            for combo in &mut combos {
                combo.push(m);
            }
        }
    }
    if combos.len() == 1 {
        return arena.intersection(combos.into_iter().next().unwrap(), None);
    }
    let branches: Vec<TypeId> = combos.into_iter().map(|c| arena.intersection(c, None)).collect();
    arena.union(branches, None)
}

fn expand_conditional(
    arena: &mut TypeArena,
    data: &ConditionalTypeData,
    depth: u32,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let check = expand_inner(arena, data.check, depth, diags);
    if matches!(arena.get(check), Type::TypeVar(_)) {
        // Still a free variable: leave the conditional unevaluated (spec
        // §4.3.5). Distribution over `any`/`unknown` is resolved the same
        // way, per the Open Question decision recorded in DESIGN.md.
        return arena.conditional(
            ConditionalTypeData {
                check,
                extends: data.extends,
                then_ty: data.then_ty,
                else_ty: data.else_ty,
                infer_params: data.infer_params.clone(),
            },
            None,
        );
    }
    if let Type::Union(u) = arena.get(check).clone() {
        let branches: Vec<TypeId> = u
            .members
            .iter()
            .map(|&m| {
                expand_conditional(
                    arena,
                    &ConditionalTypeData {
                        check: m,
                        extends: data.extends,
                        then_ty: data.then_ty,
                        else_ty: data.else_ty,
                        infer_params: data.infer_params.clone(),
                    },
                    depth,
                    diags,
                )
            })
            .collect();
        return arena.union(branches, None);
    }

    let limits = Limits::default();
    let trial = crate::unify::unify(arena, &CheckerOptions::default(), &limits, check, data.extends, None);
    if trial.is_empty() {
        expand_inner(arena, data.then_ty, depth.saturating_sub(1), diags)
    } else {
        expand_inner(arena, data.else_ty, depth.saturating_sub(1), diags)
    }
}

fn expand_template_lit(
    arena: &mut TypeArena,
    quasis: &[String],
    interpolations: &[TypeId],
    depth: u32,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let expanded: Vec<TypeId> = interpolations.iter().map(|&i| expand_inner(arena, i, depth, diags)).collect();

    // If every interpolation is a literal, concatenate into one string literal.
    let mut literal_parts: Vec<String> = Vec::new();
    let mut all_literal = true;
    for (i, quasi) in quasis.iter().enumerate() {
        literal_parts.push(quasi.clone());
        if let Some(&ty) = expanded.get(i) {
            if let Type::Literal(lit) = arena.get(ty).clone() {
                literal_parts.push(literal_to_string(&lit.value));
            } else {
                all_literal = false;
                break;
            }
        }
    }
    if all_literal {
        return arena.literal(LiteralValue::String(literal_parts.concat()), None);
    }

    // Distribute over the first union interpolation found (cartesian would
    // recurse through the remaining ones via the recursive calls below).
    for (idx, &ty) in expanded.iter().enumerate() {
        if let Type::Union(u) = arena.get(ty).clone() {
            let branches: Vec<TypeId> = u
                .members
                .iter()
                .map(|&branch| {
                    let mut next_interps = expanded.clone();
                    next_interps[idx] = branch;
                    arena.template_lit(quasis.to_vec(), next_interps, None)
                })
                .collect();
            return arena.union(branches, None);
        }
    }

    arena.template_lit(quasis.to_vec(), expanded, None)
}

fn literal_to_string(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => s.clone(),
        LiteralValue::Number(n) => n.to_string(),
        LiteralValue::BigInt(s) => s.clone(),
        LiteralValue::Boolean(b) => b.to_string(),
    }
}
