//! Builds `esc_types::TypeId`s out of `esc_ast::TypeAnn` surface syntax
//! (spec §4.3.1's construction helpers, driven by §4.1 name resolution).
//!
//! `locals` holds the names of type parameters currently in scope from an
//! enclosing `fn`/`class`/`type`/`Mapped`/`Conditional infer` clause —
//! those resolve to a bare `TypeRef { name, alias: None }` placeholder
//! (the convention `substitute`/`instantiate` already assume) rather than
//! going through the scope chain, since they aren't bound in any
//! `NamespaceData` the way top-level declarations are.

use esc_ast::{LiteralAnn, ModifierAnn, ObjMemberAnn, TupleElemAnn, TypeAnn, TypeParam};
use esc_binder::{resolve_qualified, ImportTable, Resolved, ScopeArena, ScopeId};
use esc_common::{Diagnostic, DiagnosticKind, Span};
use esc_types::{
    FunctionTypeData, LiteralValue, MappedModifier, MappedTypeData, ObjTypeElem, ObjectTypeData,
    ParamData, Primitive, PropKeyData, TupleElem, TupleTypeData, TypeArena, TypeId,
};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

pub fn literal_type(arena: &mut TypeArena, lit: &LiteralAnn, span: Span) -> TypeId {
    match lit {
        LiteralAnn::String(s) => arena.literal(LiteralValue::String(s.clone()), Some(span)),
        LiteralAnn::Number(n) => arena.literal(LiteralValue::Number(*n), Some(span)),
        LiteralAnn::Bool(b) => arena.literal(LiteralValue::Boolean(*b), Some(span)),
        LiteralAnn::BigInt(s) => arena.literal(LiteralValue::BigInt(s.clone()), Some(span)),
        LiteralAnn::Null => arena.primitive(Primitive::Null),
        LiteralAnn::Undefined => arena.primitive(Primitive::Undefined),
    }
}

pub fn build(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    locals: &FxHashSet<String>,
    ann: &TypeAnn,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    match ann {
        TypeAnn::Name { path, args, span } => build_name(arena, scopes, scope, imports, locals, path, args, *span, diags),
        TypeAnn::Object { members, span } => build_object(arena, scopes, scope, imports, locals, members, *span, diags),
        TypeAnn::Tuple { elems, span } => build_tuple(arena, scopes, scope, imports, locals, elems, *span, diags),
        TypeAnn::Function { type_params, params, return_ty, throws_ty, span } => {
            build_function(arena, scopes, scope, imports, locals, type_params, params, return_ty, throws_ty.as_deref(), *span, diags)
        }
        TypeAnn::Union(members, span) => {
            let built = members.iter().map(|m| build(arena, scopes, scope, imports, locals, m, diags)).collect();
            arena.union(built, Some(*span))
        }
        TypeAnn::Intersection(members, span) => {
            let built = members.iter().map(|m| build(arena, scopes, scope, imports, locals, m, diags)).collect();
            arena.intersection(built, Some(*span))
        }
        TypeAnn::Mutable(inner, span) => {
            let inner_ty = build(arena, scopes, scope, imports, locals, inner, diags);
            arena.mutable(inner_ty, Some(*span))
        }
        TypeAnn::TemplateLit { quasis, interpolations, span } => {
            let built = interpolations.iter().map(|i| build(arena, scopes, scope, imports, locals, i, diags)).collect();
            arena.template_lit(quasis.clone(), built, Some(*span))
        }
        TypeAnn::Regex { pattern, span } => arena.regex(pattern.clone(), Some(*span)),
        TypeAnn::Conditional { check, extends, then, els, span } => {
            let mut inner_locals = locals.clone();
            collect_infer_names(extends, &mut inner_locals);
            let check_ty = build(arena, scopes, scope, imports, locals, check, diags);
            let extends_ty = build(arena, scopes, scope, imports, &inner_locals, extends, diags);
            let then_ty = build(arena, scopes, scope, imports, &inner_locals, then, diags);
            let else_ty = build(arena, scopes, scope, imports, locals, els, diags);
            let infer_params = infer_ids(arena, &inner_locals, locals);
            arena.conditional(
                esc_types::ConditionalTypeData { check: check_ty, extends: extends_ty, then_ty, else_ty, infer_params },
                Some(*span),
            )
        }
        TypeAnn::KeyOf(inner, span) => {
            let inner_ty = build(arena, scopes, scope, imports, locals, inner, diags);
            arena.key_of(inner_ty, Some(*span))
        }
        TypeAnn::IndexedAccess { object, index, span } => {
            let object_ty = build(arena, scopes, scope, imports, locals, object, diags);
            let index_ty = build(arena, scopes, scope, imports, locals, index, diags);
            arena.indexed_access(object_ty, index_ty, Some(*span))
        }
        TypeAnn::Mapped { type_param, constraint, name_ty, template, readonly, optional, span } => {
            let constraint_ty = build(arena, scopes, scope, imports, locals, constraint, diags);
            let mut inner_locals = locals.clone();
            inner_locals.insert(type_param.clone());
            let type_param_ty = arena.type_ref(type_param.clone(), Vec::new(), None, Some(*span));
            let name_ty_built = name_ty.as_ref().map(|n| build(arena, scopes, scope, imports, &inner_locals, n, diags));
            let template_ty = build(arena, scopes, scope, imports, &inner_locals, template, diags);
            arena.mapped(
                MappedTypeData {
                    type_param: type_param_ty,
                    constraint: constraint_ty,
                    name_ty: name_ty_built,
                    template: template_ty,
                    readonly: map_modifier(*readonly),
                    optional: map_modifier(*optional),
                },
                Some(*span),
            )
        }
        TypeAnn::Infer { name, span } => arena.infer(name.clone(), Some(*span)),
        TypeAnn::Rest(inner, span) => {
            let inner_ty = build(arena, scopes, scope, imports, locals, inner, diags);
            arena.rest(inner_ty, Some(*span))
        }
        TypeAnn::Literal(lit, span) => literal_type(arena, lit, *span),
    }
}

fn map_modifier(m: ModifierAnn) -> MappedModifier {
    match m {
        ModifierAnn::Preserve => MappedModifier::Preserve,
        ModifierAnn::Add => MappedModifier::Add,
        ModifierAnn::Remove => MappedModifier::Remove,
    }
}

/// `Conditional`'s `infer X` positions are collected out of `extends` so
/// they're visible as locals in `then` (spec §4.3.5 "`infer` positions
/// bound within `extends`, visible in `then`").
fn collect_infer_names(ann: &TypeAnn, names: &mut FxHashSet<String>) {
    match ann {
        TypeAnn::Infer { name, .. } => {
            names.insert(name.clone());
        }
        TypeAnn::Name { args, .. } => args.iter().for_each(|a| collect_infer_names(a, names)),
        TypeAnn::Object { members, .. } => members.iter().for_each(|m| match m {
            ObjMemberAnn::Property { ty, .. } | ObjMemberAnn::Getter { ty, .. } | ObjMemberAnn::Setter { ty, .. } => {
                collect_infer_names(ty, names)
            }
            ObjMemberAnn::Method { return_ty, .. } | ObjMemberAnn::Call { return_ty, .. } | ObjMemberAnn::Constructor { return_ty, .. } => {
                collect_infer_names(return_ty, names)
            }
            ObjMemberAnn::Index { key_ty, value_ty, .. } => {
                collect_infer_names(key_ty, names);
                collect_infer_names(value_ty, names);
            }
        }),
        TypeAnn::Tuple { elems, .. } => elems.iter().for_each(|e| collect_infer_names(&e.ty, names)),
        TypeAnn::Function { params, return_ty, .. } => {
            params.iter().filter_map(|p| p.ty.as_ref()).for_each(|t| collect_infer_names(t, names));
            collect_infer_names(return_ty, names);
        }
        TypeAnn::Union(members, _) | TypeAnn::Intersection(members, _) => members.iter().for_each(|m| collect_infer_names(m, names)),
        TypeAnn::Mutable(inner, _) | TypeAnn::KeyOf(inner, _) | TypeAnn::Rest(inner, _) => collect_infer_names(inner, names),
        TypeAnn::TemplateLit { interpolations, .. } => interpolations.iter().for_each(|i| collect_infer_names(i, names)),
        TypeAnn::Conditional { check, extends, then, els, .. } => {
            collect_infer_names(check, names);
            collect_infer_names(extends, names);
            collect_infer_names(then, names);
            collect_infer_names(els, names);
        }
        TypeAnn::IndexedAccess { object, index, .. } => {
            collect_infer_names(object, names);
            collect_infer_names(index, names);
        }
        TypeAnn::Mapped { constraint, template, .. } => {
            collect_infer_names(constraint, names);
            collect_infer_names(template, names);
        }
        TypeAnn::Regex { .. } | TypeAnn::Infer { .. } | TypeAnn::Literal(..) => {}
    }
}

fn infer_ids(arena: &mut TypeArena, inner: &FxHashSet<String>, outer: &FxHashSet<String>) -> Vec<TypeId> {
    inner.difference(outer).map(|name| arena.type_ref(name.clone(), Vec::new(), None, None)).collect()
}

#[allow(clippy::too_many_arguments)]
fn build_name(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    locals: &FxHashSet<String>,
    path: &[String],
    args: &[TypeAnn],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let built_args: Vec<TypeId> = args.iter().map(|a| build(arena, scopes, scope, imports, locals, a, diags)).collect();

    if path.len() == 1 && locals.contains(&path[0]) {
        return arena.type_ref(path[0].clone(), built_args, None, Some(span));
    }

    match resolve_qualified(arena, scopes, scope, imports, path) {
        Some(Resolved::Type(alias_id)) => arena.type_ref(path.last().cloned().unwrap_or_default(), built_args, Some(alias_id), Some(span)),
        Some(Resolved::Value(_)) | Some(Resolved::Namespace(_)) => {
            diags.push(Diagnostic::new(DiagnosticKind::UnknownType, format!("unknown type '{}'", path.join(".")), span));
            arena.never()
        }
        None => {
            // Resolution failed somewhere along `path`. If even the head
            // segment doesn't resolve (no import, no value/type/namespace
            // in scope), the missing thing is the identifier itself, not a
            // type — spec §8.2 scenario 6 (`pkg.T` in a file that never
            // imported `pkg`) wants `UnknownIdentifier: pkg`, not
            // `UnknownType: pkg.T`.
            if resolve_qualified(arena, scopes, scope, imports, &path[..1]).is_none() {
                diags.push(Diagnostic::new(DiagnosticKind::UnknownIdentifier, format!("unknown identifier '{}'", path[0]), span));
            } else {
                diags.push(Diagnostic::new(DiagnosticKind::UnknownType, format!("unknown type '{}'", path.join(".")), span));
            }
            arena.never()
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_object(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    locals: &FxHashSet<String>,
    members: &[ObjMemberAnn],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let built: Vec<ObjTypeElem> = members.iter().map(|m| build_member(arena, scopes, scope, imports, locals, m, diags)).collect();
    let identity = arena.next_identity();
    arena.object(ObjectTypeData { object_flags: 0, members: built, extends: Vec::new(), identity }, Some(span))
}

fn build_member(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    locals: &FxHashSet<String>,
    member: &ObjMemberAnn,
    diags: &mut Vec<Diagnostic>,
) -> ObjTypeElem {
    match member {
        ObjMemberAnn::Property { key, ty, optional, readonly, .. } => ObjTypeElem::Property {
            key: PropKeyData::String(key.clone()),
            value: build(arena, scopes, scope, imports, locals, ty, diags),
            readonly: *readonly,
            optional: *optional,
        },
        ObjMemberAnn::Method { key, params, return_ty, span } => {
            let func = build_function(arena, scopes, scope, imports, locals, &[], params, return_ty, None, *span, diags);
            ObjTypeElem::Method { key: PropKeyData::String(key.clone()), func, is_static: false }
        }
        ObjMemberAnn::Getter { key, ty, .. } => {
            ObjTypeElem::Getter { key: PropKeyData::String(key.clone()), value: build(arena, scopes, scope, imports, locals, ty, diags) }
        }
        ObjMemberAnn::Setter { key, ty, .. } => {
            ObjTypeElem::Setter { key: PropKeyData::String(key.clone()), value: build(arena, scopes, scope, imports, locals, ty, diags) }
        }
        ObjMemberAnn::Index { key_ty, value_ty, readonly, .. } => ObjTypeElem::Index {
            key_type: build(arena, scopes, scope, imports, locals, key_ty, diags),
            value_type: build(arena, scopes, scope, imports, locals, value_ty, diags),
            readonly: *readonly,
        },
        ObjMemberAnn::Call { params, return_ty, span } => {
            ObjTypeElem::Call { func: build_function(arena, scopes, scope, imports, locals, &[], params, return_ty, None, *span, diags) }
        }
        ObjMemberAnn::Constructor { params, return_ty, span } => ObjTypeElem::Constructor {
            func: build_function(arena, scopes, scope, imports, locals, &[], params, return_ty, None, *span, diags),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn build_tuple(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    locals: &FxHashSet<String>,
    elems: &[TupleElemAnn],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let built: Vec<TupleElem> = elems
        .iter()
        .map(|e| TupleElem {
            ty: build(arena, scopes, scope, imports, locals, &e.ty, diags),
            optional: e.optional,
            rest: e.rest,
            name: e.name.clone(),
        })
        .collect();
    arena.tuple(TupleTypeData { elems: built }, Some(span))
}

#[allow(clippy::too_many_arguments)]
pub fn build_function(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    locals: &FxHashSet<String>,
    type_params: &[TypeParam],
    params: &[esc_ast::Param],
    return_ty: &TypeAnn,
    throws_ty: Option<&TypeAnn>,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let mut inner_locals = locals.clone();
    for tp in type_params {
        inner_locals.insert(tp.name.clone());
    }

    let type_param_ids: Vec<TypeId> = type_params.iter().map(|tp| arena.type_ref(tp.name.clone(), Vec::new(), None, Some(tp.span))).collect();

    let built_params: SmallVec<[ParamData; 4]> = params
        .iter()
        .map(|p| ParamData {
            name: param_name(p),
            ty: match &p.ty {
                Some(t) => build(arena, scopes, scope, imports, &inner_locals, t, diags),
                None => arena.any(),
            },
            optional: p.optional,
            rest: p.rest,
        })
        .collect();

    let return_ty_id = build(arena, scopes, scope, imports, &inner_locals, return_ty, diags);
    let throws_ty_id = match throws_ty {
        Some(t) => build(arena, scopes, scope, imports, &inner_locals, t, diags),
        None => arena.never(),
    };

    arena.function(
        FunctionTypeData { type_params: type_param_ids, params: built_params, return_ty: return_ty_id, throws_ty: throws_ty_id, self_param: None },
        Some(span),
    )
}

fn param_name(p: &esc_ast::Param) -> String {
    match &p.pat {
        esc_ast::Pat::Ident { name, .. } => name.clone(),
        _ => "_".to_string(),
    }
}
