//! `unify(t1, t2) -> [Diagnostic]` (spec §4.3.4): asymmetric subtype
//! checking, "`t1` is assignable to `t2`". Rules are applied in the order
//! the spec lists them; later rules assume earlier ones have already
//! stripped `TypeVar`s and `Mutable` wrappers.

use esc_common::{CheckerOptions, Diagnostic, Limits, Span};
use tracing::debug;

use crate::arena::TypeArena;
use crate::data::{ObjTypeElem, ObjectTypeData, Primitive, PropKeyData, Type};
use crate::expand::expand_type;
use crate::ids::TypeId;
use crate::prune::prune;

/// `unify`'s recursion can revisit the same `(t1, t2)` pair when two
/// recursive nominal types reference each other; a depth bound (distinct
/// from `expandType`'s alias-unfolding depth) keeps that termination
/// guarantee explicit rather than accidental.
fn unify_inner(
    arena: &mut TypeArena,
    limits: &Limits,
    t1: TypeId,
    t2: TypeId,
    provenance: Option<Span>,
    depth: u32,
    diags: &mut Vec<Diagnostic>,
) {
    if depth > limits.max_expand_depth {
        return;
    }

    let t1 = prune(arena, t1);
    let t2 = prune(arena, t2);

    // Rule 1: type variables.
    if let Type::TypeVar(data) = arena.get(t1).clone() {
        if let Some(constraint) = arena.var_constraint(data.var) {
            unify_inner(arena, limits, t2, constraint, provenance, depth + 1, diags);
        }
        if occurs(arena, data.var, t2) {
            diags.push(Diagnostic::new(
                esc_common::DiagnosticKind::RecursiveType,
                "type variable occurs within the type it would be bound to".to_string(),
                sp(provenance),
            ));
            return;
        }
        arena.set_instance(data.var, t2);
        return;
    }
    if let Type::TypeVar(data) = arena.get(t2).clone() {
        if let Some(constraint) = arena.var_constraint(data.var) {
            unify_inner(arena, limits, t1, constraint, provenance, depth + 1, diags);
        }
        if occurs(arena, data.var, t1) {
            diags.push(Diagnostic::new(
                esc_common::DiagnosticKind::RecursiveType,
                "type variable occurs within the type it would be bound to".to_string(),
                sp(provenance),
            ));
            return;
        }
        arena.set_instance(data.var, t1);
        return;
    }

    // Rule 2: `any` on either side succeeds.
    if is_primitive(arena, t1, Primitive::Any) || is_primitive(arena, t2, Primitive::Any) {
        return;
    }

    // Rule 3: `unknown`.
    if is_primitive(arena, t2, Primitive::Unknown) {
        return;
    }
    if is_primitive(arena, t1, Primitive::Unknown) {
        if is_primitive(arena, t2, Primitive::Unknown) {
            return;
        }
        fail(diags, arena, t1, t2, provenance);
        return;
    }

    // Rule 4: `never`.
    if is_primitive(arena, t1, Primitive::Never) {
        return;
    }
    if is_primitive(arena, t2, Primitive::Never) {
        fail(diags, arena, t1, t2, provenance);
        return;
    }

    // Rule 5: `Mutable` wrappers.
    let (t1_inner, t1_was_mutable) = strip_mutable(arena, t1);
    let (t2_inner, t2_was_mutable) = strip_mutable(arena, t2);
    if t1_was_mutable || t2_was_mutable {
        if t2_was_mutable && !t1_was_mutable {
            fail(diags, arena, t1, t2, provenance);
            return;
        }
        unify_inner(arena, limits, t1_inner, t2_inner, provenance, depth + 1, diags);
        return;
    }

    // Rule 6: primitive / literal.
    if let (Type::Primitive(p1), Type::Primitive(p2)) = (arena.get(t1).clone(), arena.get(t2).clone()) {
        if p1 == p2 {
            return;
        }
        fail(diags, arena, t1, t2, provenance);
        return;
    }
    if let Type::Literal(lit) = arena.get(t1).clone() {
        if let Type::Primitive(p2) = arena.get(t2).clone() {
            if lit.base == p2 {
                return;
            }
        }
        if let Type::Literal(lit2) = arena.get(t2).clone() {
            if lit.value == lit2.value {
                return;
            }
        }
        fail(diags, arena, t1, t2, provenance);
        return;
    }
    if matches!(arena.get(t2), Type::Literal(_)) && !matches!(arena.get(t1), Type::Literal(_)) {
        fail(diags, arena, t1, t2, provenance);
        return;
    }

    // Rule 7: matching TypeRefs, else expand one step and retry. A lone
    // `TypeRef` against a concrete partner (an object literal assigned to
    // a declared alias, say) expands just that side rather than both —
    // expanding the concrete side would be a no-op anyway.
    let t1_is_ref = matches!(arena.get(t1), Type::TypeRef(_));
    let t2_is_ref = matches!(arena.get(t2), Type::TypeRef(_));
    if t1_is_ref && t2_is_ref {
        let (r1, r2) = match (arena.get(t1).clone(), arena.get(t2).clone()) {
            (Type::TypeRef(r1), Type::TypeRef(r2)) => (r1, r2),
            _ => unreachable!(),
        };
        if r1.name == r2.name && r1.args.len() == r2.args.len() {
            for (a1, a2) in r1.args.clone().into_iter().zip(r2.args.clone()) {
                unify_inner(arena, limits, a1, a2, provenance, depth + 1, diags);
                unify_inner(arena, limits, a2, a1, provenance, depth + 1, diags);
            }
            return;
        }
        let (e1, mut d1) = expand_type(arena, t1, limits.max_expand_depth);
        let (e2, mut d2) = expand_type(arena, t2, limits.max_expand_depth);
        diags.append(&mut d1);
        diags.append(&mut d2);
        unify_inner(arena, limits, e1, e2, provenance, depth + 1, diags);
        return;
    }
    if t1_is_ref {
        let (e1, mut d1) = expand_type(arena, t1, limits.max_expand_depth);
        diags.append(&mut d1);
        unify_inner(arena, limits, e1, t2, provenance, depth + 1, diags);
        return;
    }
    if t2_is_ref {
        let (e2, mut d2) = expand_type(arena, t2, limits.max_expand_depth);
        diags.append(&mut d2);
        unify_inner(arena, limits, t1, e2, provenance, depth + 1, diags);
        return;
    }

    // Rule 8: union.
    if let Type::Union(u1) = arena.get(t1).clone() {
        for &m in &u1.members {
            unify_inner(arena, limits, m, t2, provenance, depth + 1, diags);
        }
        return;
    }
    if let Type::Union(u2) = arena.get(t2).clone() {
        let mut local = Vec::new();
        for &m in &u2.members {
            let mut attempt = Vec::new();
            unify_inner(arena, limits, t1, m, provenance, depth + 1, &mut attempt);
            if attempt.is_empty() {
                return;
            }
            local = attempt;
        }
        diags.append(&mut local);
        return;
    }

    // Rule 9: intersection.
    if let Type::Intersection(i1) = arena.get(t1).clone() {
        let mut local = Vec::new();
        for &m in &i1.members {
            let mut attempt = Vec::new();
            unify_inner(arena, limits, m, t2, provenance, depth + 1, &mut attempt);
            if attempt.is_empty() {
                return;
            }
            local = attempt;
        }
        diags.append(&mut local);
        return;
    }
    if let Type::Intersection(i2) = arena.get(t2).clone() {
        for &m in &i2.members {
            unify_inner(arena, limits, t1, m, provenance, depth + 1, diags);
        }
        return;
    }

    // Rule 10: object <-> object.
    if let (Type::Object(o1), Type::Object(o2)) = (arena.get(t1).clone(), arena.get(t2).clone()) {
        unify_objects(arena, limits, &o1, &o2, provenance, depth, diags);
        return;
    }

    // Rule 11: tuple <-> tuple.
    if let (Type::Tuple(tp1), Type::Tuple(tp2)) = (arena.get(t1).clone(), arena.get(t2).clone()) {
        unify_tuples(arena, limits, &tp1, &tp2, provenance, depth, diags);
        return;
    }

    // Rule 12: function <-> function.
    if let (Type::Function(f1), Type::Function(f2)) = (arena.get(t1).clone(), arena.get(t2).clone()) {
        unify_functions(arena, limits, &f1, &f2, provenance, depth, diags);
        return;
    }

    // Rule 13: conditional / keyof / indexed access / mapped — expand then retry.
    if matches!(
        arena.get(t1),
        Type::Conditional(_) | Type::KeyOf(_) | Type::IndexedAccess { .. } | Type::Mapped(_)
    ) || matches!(
        arena.get(t2),
        Type::Conditional(_) | Type::KeyOf(_) | Type::IndexedAccess { .. } | Type::Mapped(_)
    ) {
        let (e1, mut d1) = expand_type(arena, t1, limits.max_expand_depth);
        let (e2, mut d2) = expand_type(arena, t2, limits.max_expand_depth);
        diags.append(&mut d1);
        diags.append(&mut d2);
        if e1.0 != t1.0 || e2.0 != t2.0 {
            unify_inner(arena, limits, e1, e2, provenance, depth + 1, diags);
            return;
        }
    }

    // Rule 14: template literal <-> literal string.
    if let Type::TemplateLit(tpl) = arena.get(t1).clone() {
        if let Type::Literal(lit) = arena.get(t2).clone() {
            if let crate::data::LiteralValue::String(s) = &lit.value {
                if template_matches(&tpl.quasis, s) {
                    return;
                }
            }
        }
        fail(diags, arena, t1, t2, provenance);
        return;
    }

    fail(diags, arena, t1, t2, provenance);
}

fn template_matches(quasis: &[String], s: &str) -> bool {
    // Conservative structural check: the literal string must contain every
    // quasi fragment in order (full capture-group extraction is the
    // checker layer's job when named captures are consumed).
    let mut rest = s;
    for q in quasis {
        match rest.find(q.as_str()) {
            Some(idx) => rest = &rest[idx + q.len()..],
            None => return false,
        }
    }
    true
}

fn strip_mutable(arena: &mut TypeArena, id: TypeId) -> (TypeId, bool) {
    if let Type::Mutable(inner) = arena.get(id).clone() {
        (inner, true)
    } else {
        (id, false)
    }
}

fn is_primitive(arena: &TypeArena, id: TypeId, kind: Primitive) -> bool {
    matches!(arena.get(id), Type::Primitive(p) if *p == kind)
}

fn sp(provenance: Option<Span>) -> Span {
    provenance.unwrap_or_else(Span::dummy)
}

fn fail(diags: &mut Vec<Diagnostic>, arena: &mut TypeArena, from: TypeId, to: TypeId, provenance: Option<Span>) {
    let msg = format!(
        "`{}` is not assignable to `{}`",
        crate::display::display_type(arena, from),
        crate::display::display_type(arena, to)
    );
    debug!(%msg, "unify failed");
    diags.push(Diagnostic::new(esc_common::DiagnosticKind::CannotAssign, msg, sp(provenance)));
}

fn occurs(arena: &mut TypeArena, var: crate::ids::TypeVarId, id: TypeId) -> bool {
    let id = prune(arena, id);
    match arena.get(id).clone() {
        Type::TypeVar(data) => data.var == var,
        Type::TypeRef(r) => r.args.iter().any(|&a| occurs(arena, var, a)),
        Type::Object(o) => o.members.iter().any(|m| member_children(m).into_iter().any(|c| occurs(arena, var, c)))
            || o.extends.iter().any(|&e| occurs(arena, var, e)),
        Type::Tuple(t) => t.elems.iter().any(|e| occurs(arena, var, e.ty)),
        Type::Function(f) => {
            f.params.iter().any(|p| occurs(arena, var, p.ty))
                || occurs(arena, var, f.return_ty)
                || occurs(arena, var, f.throws_ty)
        }
        Type::Union(u) => u.members.iter().any(|&m| occurs(arena, var, m)),
        Type::Intersection(i) => i.members.iter().any(|&m| occurs(arena, var, m)),
        Type::Mutable(inner) => occurs(arena, var, inner),
        Type::TemplateLit(t) => t.interpolations.iter().any(|&m| occurs(arena, var, m)),
        Type::Conditional(c) => {
            occurs(arena, var, c.check) || occurs(arena, var, c.extends) || occurs(arena, var, c.then_ty) || occurs(arena, var, c.else_ty)
        }
        Type::KeyOf(inner) => occurs(arena, var, inner),
        Type::IndexedAccess { object, index } => occurs(arena, var, object) || occurs(arena, var, index),
        Type::Mapped(m) => occurs(arena, var, m.constraint) || occurs(arena, var, m.template),
        Type::Rest(inner) => occurs(arena, var, inner),
        Type::Extractor(e) => occurs(arena, var, e.ctor) || e.args.iter().any(|&a| occurs(arena, var, a)),
        _ => false,
    }
}

fn member_children(elem: &ObjTypeElem) -> Vec<TypeId> {
    match elem {
        ObjTypeElem::Property { value, .. } | ObjTypeElem::Getter { value, .. } | ObjTypeElem::Setter { value, .. } => vec![*value],
        ObjTypeElem::Method { func, .. } | ObjTypeElem::Call { func } | ObjTypeElem::Constructor { func } => vec![*func],
        ObjTypeElem::Index { key_type, value_type, .. } => vec![*key_type, *value_type],
        ObjTypeElem::Mapped { template } => vec![*template],
    }
}

fn find_member(arena: &TypeArena, obj: &ObjectTypeData, key: &PropKeyData) -> Option<(TypeId, bool, bool)> {
    for m in &obj.members {
        match m {
            ObjTypeElem::Property { key: k, value, readonly, optional } if k == key => {
                return Some((*value, *readonly, *optional));
            }
            ObjTypeElem::Method { key: k, func, .. } if k == key => return Some((*func, false, false)),
            ObjTypeElem::Getter { key: k, value } if k == key => return Some((*value, false, false)),
            ObjTypeElem::Setter { key: k, value } if k == key => return Some((*value, false, false)),
            _ => {}
        }
    }
    for &ext in &obj.extends {
        if let Type::Object(parent) = arena.get(ext) {
            if let Some(found) = find_member(arena, parent, key) {
                return Some(found);
            }
        }
    }
    None
}

fn extends_chain_contains(arena: &TypeArena, obj: &ObjectTypeData, identity: u32) -> bool {
    obj.identity == identity
        || obj.extends.iter().any(|&e| {
            if let Type::Object(parent) = arena.get(e) {
                extends_chain_contains(arena, parent, identity)
            } else {
                false
            }
        })
}

#[allow(clippy::too_many_arguments)]
fn unify_objects(
    arena: &mut TypeArena,
    limits: &Limits,
    o1: &ObjectTypeData,
    o2: &ObjectTypeData,
    provenance: Option<Span>,
    depth: u32,
    diags: &mut Vec<Diagnostic>,
) {
    if o2.is_nominal() {
        if !o1.is_nominal() || !extends_chain_contains(arena, o1, o2.identity) {
            diags.push(Diagnostic::new(
                esc_common::DiagnosticKind::CannotAssign,
                "nominal types do not match and neither extends the other".to_string(),
                sp(provenance),
            ));
            return;
        }
        return;
    }

    for m in &o2.members {
        let (key, value, optional, target_readonly) = match m {
            ObjTypeElem::Property { key, value, optional, readonly } => (key, *value, *optional, *readonly),
            ObjTypeElem::Method { key, func, .. } => (key, *func, false, false),
            ObjTypeElem::Getter { key, value } => (key, *value, false, false),
            ObjTypeElem::Setter { key, value } => (key, *value, false, false),
            ObjTypeElem::Index { .. } | ObjTypeElem::Call { .. } | ObjTypeElem::Constructor { .. } | ObjTypeElem::Mapped { .. } => continue,
        };
        match find_member(arena, o1, key) {
            Some((found, source_readonly, _)) => {
                // A writable target property can't be satisfied by a
                // read-only source: the source's `readonly` capability is
                // weaker than what the target requires (mirrors rule 5's
                // `mut` handling).
                if source_readonly && !target_readonly {
                    diags.push(Diagnostic::new(
                        esc_common::DiagnosticKind::CannotAssign,
                        format!("property {key:?} is readonly in the source but the target requires it to be writable"),
                        sp(provenance),
                    ));
                }
                unify_inner(arena, limits, found, value, provenance, depth + 1, diags);
            }
            None if optional => {}
            None => {
                diags.push(Diagnostic::new(
                    esc_common::DiagnosticKind::UnknownMember,
                    format!("missing required property {key:?}"),
                    sp(provenance),
                ));
            }
        }
    }
}

fn unify_tuples(
    arena: &mut TypeArena,
    limits: &Limits,
    t1: &crate::data::TupleTypeData,
    t2: &crate::data::TupleTypeData,
    provenance: Option<Span>,
    depth: u32,
    diags: &mut Vec<Diagnostic>,
) {
    let rest2 = t2.elems.iter().position(|e| e.rest);
    let fixed_len = rest2.unwrap_or(t2.elems.len());

    if t1.elems.len() < fixed_len {
        diags.push(Diagnostic::new(
            esc_common::DiagnosticKind::ArityMismatch,
            format!("tuple of length {} cannot satisfy tuple of length {}", t1.elems.len(), fixed_len),
            sp(provenance),
        ));
        return;
    }

    for i in 0..fixed_len {
        unify_inner(arena, limits, t1.elems[i].ty, t2.elems[i].ty, provenance, depth + 1, diags);
    }

    if let Some(rest_idx) = rest2 {
        let rest_ty = t2.elems[rest_idx].ty;
        for elem in &t1.elems[fixed_len..] {
            unify_inner(arena, limits, elem.ty, rest_ty, provenance, depth + 1, diags);
        }
    }
}

fn unify_functions(
    arena: &mut TypeArena,
    limits: &Limits,
    f1: &crate::data::FunctionTypeData,
    f2: &crate::data::FunctionTypeData,
    provenance: Option<Span>,
    depth: u32,
    diags: &mut Vec<Diagnostic>,
) {
    // Contravariant parameters: f2's params must be assignable to f1's.
    for (p1, p2) in f1.params.iter().zip(f2.params.iter()) {
        unify_inner(arena, limits, p2.ty, p1.ty, provenance, depth + 1, diags);
    }
    if f2.params.len() > f1.params.len() && !f1.params.iter().any(|p| p.rest) {
        diags.push(Diagnostic::new(
            esc_common::DiagnosticKind::ArityMismatch,
            "target function accepts more parameters than the source provides".to_string(),
            sp(provenance),
        ));
    }
    // Covariant return and throws.
    unify_inner(arena, limits, f1.return_ty, f2.return_ty, provenance, depth + 1, diags);
    unify_inner(arena, limits, f1.throws_ty, f2.throws_ty, provenance, depth + 1, diags);
    // Contravariant self.
    match (f1.self_param, f2.self_param) {
        (Some(s1), Some(s2)) if s2.mutable && !s1.mutable => {
            diags.push(Diagnostic::new(
                esc_common::DiagnosticKind::CannotAssign,
                "cannot satisfy a mutable self receiver with an immutable one".to_string(),
                sp(provenance),
            ));
        }
        _ => {}
    }
}

/// Entry point matching spec §6.2's `Unify(ctx, from, to) -> [Diagnostic]`.
pub fn unify(arena: &mut TypeArena, _options: &CheckerOptions, limits: &Limits, from: TypeId, to: TypeId, provenance: Option<Span>) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    unify_inner(arena, limits, from, to, provenance, 0, &mut diags);
    diags
}
