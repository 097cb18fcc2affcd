//! `normalizeIntersection`/union normalization (spec §4.3.6).

use esc_common::{CheckerOptions, Limits};

use crate::arena::TypeArena;
use crate::data::{ObjTypeElem, ObjectTypeData, Primitive, Type};
use crate::ids::TypeId;
use crate::prune::prune;

/// Structural equality after pruning TypeVars and unwrapping `Mutable`
/// (spec §4.3.1). Deliberately shallow on `Object` (field-by-field via
/// `PropKeyData` equality plus recursive value comparison) rather than
/// full graph isomorphism — sufficient for the dedup use sites here.
pub fn structurally_equal(arena: &mut TypeArena, a: TypeId, b: TypeId) -> bool {
    let a = strip_for_eq(arena, a);
    let b = strip_for_eq(arena, b);
    if a.0 == b.0 {
        return true;
    }
    match (arena.get(a).clone(), arena.get(b).clone()) {
        (Type::Primitive(p1), Type::Primitive(p2)) => p1 == p2,
        (Type::Literal(l1), Type::Literal(l2)) => l1.value == l2.value,
        (Type::TypeVar(v1), Type::TypeVar(v2)) => v1.var == v2.var,
        (Type::TypeRef(r1), Type::TypeRef(r2)) => {
            r1.name == r2.name
                && r1.args.len() == r2.args.len()
                && r1.args.clone().into_iter().zip(r2.args.clone()).all(|(x, y)| structurally_equal(arena, x, y))
        }
        (Type::Union(u1), Type::Union(u2)) => same_set(arena, &u1.members.clone(), &u2.members.clone()),
        (Type::Intersection(i1), Type::Intersection(i2)) => same_set(arena, &i1.members.clone(), &i2.members.clone()),
        (Type::Tuple(t1), Type::Tuple(t2)) => {
            t1.elems.len() == t2.elems.len()
                && t1
                    .elems
                    .clone()
                    .into_iter()
                    .zip(t2.elems.clone())
                    .all(|(x, y)| x.optional == y.optional && x.rest == y.rest && structurally_equal(arena, x.ty, y.ty))
        }
        (Type::Object(o1), Type::Object(o2)) => {
            o1.is_nominal() == o2.is_nominal()
                && if o1.is_nominal() {
                    o1.identity == o2.identity
                } else {
                    o1.members.len() == o2.members.len()
                        && o1.members.clone().into_iter().zip(o2.members.clone()).all(|(x, y)| member_eq(arena, &x, &y))
                }
        }
        _ => false,
    }
}

fn strip_for_eq(arena: &mut TypeArena, id: TypeId) -> TypeId {
    let id = prune(arena, id);
    if let Type::Mutable(inner) = arena.get(id).clone() {
        strip_for_eq(arena, inner)
    } else {
        id
    }
}

fn same_set(arena: &mut TypeArena, a: &[TypeId], b: &[TypeId]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|&x| b.iter().any(|&y| structurally_equal(arena, x, y)))
}

fn member_eq(arena: &mut TypeArena, a: &ObjTypeElem, b: &ObjTypeElem) -> bool {
    match (a, b) {
        (ObjTypeElem::Property { key: k1, value: v1, readonly: r1, optional: o1 }, ObjTypeElem::Property { key: k2, value: v2, readonly: r2, optional: o2 }) => {
            k1 == k2 && r1 == r2 && o1 == o2 && structurally_equal(arena, *v1, *v2)
        }
        _ => false,
    }
}

/// Applied bottom-up; `t` is expected to already be a freshly-constructed
/// `Intersection` (or something `distribute_intersection` turned into a
/// `Union` of intersections).
pub fn normalize_intersection(arena: &mut TypeArena, t: TypeId) -> TypeId {
    let t = prune(arena, t);
    match arena.get(t).clone() {
        Type::Union(u) => {
            let branches: Vec<TypeId> = u.members.clone().into_iter().map(|m| normalize_intersection(arena, m)).collect();
            normalize_union(arena, branches)
        }
        Type::Intersection(i) => normalize_intersection_members(arena, i.members.clone()),
        _ => t,
    }
}

fn flatten(arena: &mut TypeArena, members: Vec<TypeId>) -> Vec<TypeId> {
    let mut out = Vec::new();
    for m in members {
        let m = prune(arena, m);
        if let Type::Intersection(i) = arena.get(m).clone() {
            out.extend(flatten(arena, i.members.clone()));
        } else {
            out.push(m);
        }
    }
    out
}

fn dedup(arena: &mut TypeArena, members: Vec<TypeId>) -> Vec<TypeId> {
    let mut out: Vec<TypeId> = Vec::new();
    for m in members {
        if !out.iter().any(|&o| structurally_equal(arena, o, m)) {
            out.push(m);
        }
    }
    out
}

fn normalize_intersection_members(arena: &mut TypeArena, members: Vec<TypeId>) -> TypeId {
    let flattened = flatten(arena, members);
    let expanded: Vec<TypeId> = flattened
        .into_iter()
        .map(|m| {
            if matches!(arena.get(m), Type::TypeRef(_)) {
                crate::expand::expand_type(arena, m, Limits::default().max_expand_depth).0
            } else {
                m
            }
        })
        .collect();
    let members = dedup(arena, expanded);

    if members.iter().any(|&m| matches!(arena.get(m), Type::Primitive(Primitive::Never))) {
        return arena.never();
    }
    let has_any = members.iter().any(|&m| matches!(arena.get(m), Type::Primitive(Primitive::Any)));
    if has_any {
        return arena.any();
    }

    let primitive_kinds: Vec<Primitive> = members
        .iter()
        .filter_map(|&m| if let Type::Primitive(p) = arena.get(m) { Some(*p) } else { None })
        .collect();
    let distinct_primitives: Vec<Primitive> = {
        let mut v = Vec::new();
        for p in primitive_kinds {
            if !v.contains(&p) {
                v.push(p);
            }
        }
        v
    };
    if distinct_primitives.len() > 1 {
        return arena.never();
    }

    let all_primitive_equal = !distinct_primitives.is_empty()
        && members.iter().all(|&m| matches!(arena.get(m), Type::Primitive(p) if Some(*p) == distinct_primitives.first().copied()));
    if all_primitive_equal {
        return members[0];
    }

    let all_objects: bool = members.iter().all(|&m| matches!(arena.get(m), Type::Object(_)));
    if all_objects && members.len() > 1 {
        let objects: Vec<ObjectTypeData> = members
            .iter()
            .map(|&m| if let Type::Object(o) = arena.get(m) { (**o).clone() } else { unreachable!() })
            .collect();
        return merge_objects(arena, objects);
    }

    // Step 7: a primitive coexisting with an object (e.g. `string &
    // {__brand: "email"}`) stays an intersection rather than collapsing.
    if members.len() == 1 {
        return members[0];
    }
    arena.intersection(members, None)
}

fn merge_objects(arena: &mut TypeArena, objects: Vec<ObjectTypeData>) -> TypeId {
    let mut merged_members: Vec<ObjTypeElem> = Vec::new();
    for obj in objects {
        for member in obj.members {
            if let Some(key) = member.key().cloned() {
                if let Some(existing_idx) = merged_members.iter().position(|m| m.key() == Some(&key)) {
                    if let (
                        ObjTypeElem::Property { value: existing, readonly: r1, optional: o1, key: k },
                        ObjTypeElem::Property { value: incoming, readonly: r2, optional: o2, .. },
                    ) = (merged_members[existing_idx].clone(), member.clone())
                    {
                        let intersected = arena.intersection(vec![existing, incoming], None);
                        let normalized = normalize_intersection(arena, intersected);
                        merged_members[existing_idx] = ObjTypeElem::Property {
                            key: k,
                            value: normalized,
                            readonly: r1 || r2,
                            optional: o1 && o2,
                        };
                        continue;
                    }
                }
            }
            merged_members.push(member);
        }
    }
    let identity = arena.next_identity();
    arena.object(ObjectTypeData { object_flags: 0, members: merged_members, extends: Vec::new(), identity }, None)
}

/// Union normalization: flatten, prune, dedup, drop `never`, absorb
/// subsumed members.
pub fn normalize_union(arena: &mut TypeArena, members: Vec<TypeId>) -> TypeId {
    let mut flat = Vec::new();
    for m in members {
        let m = prune(arena, m);
        if let Type::Union(u) = arena.get(m).clone() {
            flat.extend(u.members.clone());
        } else {
            flat.push(m);
        }
    }
    let flat: Vec<TypeId> = flat.into_iter().filter(|&m| !matches!(arena.get(m), Type::Primitive(Primitive::Never))).collect();
    let deduped = dedup(arena, flat);

    let limits = Limits::default();
    let options = CheckerOptions::default();
    let mut survivors: Vec<TypeId> = Vec::new();
    for m in deduped {
        let subsumed = survivors.iter().any(|&s| {
            crate::unify::unify(arena, &options, &limits, m, s, None).is_empty() && !structurally_equal(arena, m, s)
        });
        if !subsumed {
            survivors.retain(|&s| !crate::unify::unify(arena, &options, &limits, s, m, None).is_empty() || structurally_equal(arena, s, m));
            survivors.push(m);
        }
    }

    if survivors.is_empty() {
        return arena.never();
    }
    if survivors.len() == 1 {
        return survivors[0];
    }
    arena.union(survivors, None)
}
