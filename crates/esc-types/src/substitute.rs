//! `substitute(t, map)` (spec §4.3.3): recursively rewrites `TypeRef`s whose
//! name matches a key in `map` with the mapped type.

use rustc_hash::FxHashMap;

use crate::arena::TypeArena;
use crate::data::{
    ConditionalTypeData, FunctionTypeData, MappedTypeData, ObjTypeElem, ObjectTypeData, TupleElem,
    TupleTypeData, Type,
};
use crate::ids::TypeId;

/// Recursively substitutes free `TypeRef` names found in `map`, descending
/// into every child position the spec lists: function parameter types,
/// return, throws, object element values, tuple elements, union/
/// intersection members, conditional branches, and template interpolations.
pub fn substitute(arena: &mut TypeArena, id: TypeId, map: &FxHashMap<String, TypeId>) -> TypeId {
    if map.is_empty() {
        return id;
    }
    let kind = arena.get(id).clone();
    match kind {
        Type::Primitive(_)
        | Type::Literal(_)
        | Type::TypeVar(_)
        | Type::Regex(_)
        | Type::Namespace(_)
        | Type::UniqueSymbol(_)
        | Type::Infer { .. } => id,

        Type::TypeRef(data) => {
            if data.args.is_empty() {
                if let Some(&replacement) = map.get(&data.name) {
                    return replacement;
                }
            }
            let args: Vec<TypeId> = data.args.iter().map(|&a| substitute(arena, a, map)).collect();
            arena.type_ref(data.name.clone(), args, data.alias, None)
        }

        Type::Object(data) => {
            let members = data
                .members
                .iter()
                .map(|m| substitute_member(arena, m, map))
                .collect();
            let extends = data.extends.iter().map(|&e| substitute(arena, e, map)).collect();
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
                    ty: substitute(arena, e.ty, map),
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
                    ty: substitute(arena, p.ty, map),
                    optional: p.optional,
                    rest: p.rest,
                })
                .collect();
            let return_ty = substitute(arena, data.return_ty, map);
            let throws_ty = substitute(arena, data.throws_ty, map);
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
            let members = data.members.iter().map(|&m| substitute(arena, m, map)).collect();
            arena.union(members, None)
        }

        Type::Intersection(data) => {
            let members = data.members.iter().map(|&m| substitute(arena, m, map)).collect();
            arena.intersection(members, None)
        }

        Type::Mutable(inner) => {
            let inner = substitute(arena, inner, map);
            arena.mutable(inner, None)
        }

        Type::TemplateLit(data) => {
            let interpolations = data.interpolations.iter().map(|&t| substitute(arena, t, map)).collect();
            arena.template_lit(data.quasis.clone(), interpolations, None)
        }

        Type::Conditional(data) => {
            let check = substitute(arena, data.check, map);
            let extends = substitute(arena, data.extends, map);
            let then_ty = substitute(arena, data.then_ty, map);
            let else_ty = substitute(arena, data.else_ty, map);
            arena.conditional(
                ConditionalTypeData { check, extends, then_ty, else_ty, infer_params: data.infer_params.clone() },
                None,
            )
        }

        Type::KeyOf(inner) => {
            let inner = substitute(arena, inner, map);
            arena.key_of(inner, None)
        }

        Type::IndexedAccess { object, index } => {
            let object = substitute(arena, object, map);
            let index = substitute(arena, index, map);
            arena.indexed_access(object, index, None)
        }

        Type::Mapped(data) => {
            let constraint = substitute(arena, data.constraint, map);
            let name_ty = data.name_ty.map(|t| substitute(arena, t, map));
            let template = substitute(arena, data.template, map);
            arena.mapped(
                MappedTypeData {
                    type_param: data.type_param,
                    constraint,
                    name_ty,
                    template,
                    readonly: data.readonly,
                    optional: data.optional,
                },
                None,
            )
        }

        Type::Rest(inner) => {
            let inner = substitute(arena, inner, map);
            arena.rest(inner, None)
        }

        Type::Extractor(data) => {
            let ctor = substitute(arena, data.ctor, map);
            let args = data.args.iter().map(|&a| substitute(arena, a, map)).collect();
            arena.extractor(ctor, args, None)
        }
    }
}

fn substitute_member(arena: &mut TypeArena, elem: &ObjTypeElem, map: &FxHashMap<String, TypeId>) -> ObjTypeElem {
    match elem {
        ObjTypeElem::Property { key, value, readonly, optional } => ObjTypeElem::Property {
            key: *key,
            value: substitute(arena, *value, map),
            readonly: *readonly,
            optional: *optional,
        },
        ObjTypeElem::Method { key, func, is_static } => {
            ObjTypeElem::Method { key: *key, func: substitute(arena, *func, map), is_static: *is_static }
        }
        ObjTypeElem::Getter { key, value } => {
            ObjTypeElem::Getter { key: *key, value: substitute(arena, *value, map) }
        }
        ObjTypeElem::Setter { key, value } => {
            ObjTypeElem::Setter { key: *key, value: substitute(arena, *value, map) }
        }
        ObjTypeElem::Index { key_type, value_type, readonly } => ObjTypeElem::Index {
            key_type: substitute(arena, *key_type, map),
            value_type: substitute(arena, *value_type, map),
            readonly: *readonly,
        },
        ObjTypeElem::Call { func } => ObjTypeElem::Call { func: substitute(arena, *func, map) },
        ObjTypeElem::Constructor { func } => ObjTypeElem::Constructor { func: substitute(arena, *func, map) },
        ObjTypeElem::Mapped { template } => ObjTypeElem::Mapped { template: substitute(arena, *template, map) },
    }
}
