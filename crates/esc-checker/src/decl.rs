//! Declaration inference (spec §4.4.3, plus SPEC_FULL.md §2's `namespace`
//! and `enum` kinds).
//!
//! One `infer_decl` serves two call sites: the scheduler (`scheduler.rs`),
//! which pre-declares a placeholder binding/alias for every member of a
//! component before inferring any of them (spec §4.2 step 2), and block-
//! level `Stmt::Decl` (no placeholder, no forward references within the
//! same block). `rebind_value`/`rebind_alias` paper over the difference:
//! if a placeholder already sits in the namespace, its `TypeVar` is bound
//! in place so every other reference that already captured its `TypeId`
//! sees the resolved type through `prune`; otherwise a fresh binding is
//! declared directly.

use esc_ast::{ClassMember, Decl};
use esc_binder::{lookup_type, lookup_value, ImportTable, ScopeArena, ScopeId};
use esc_common::{Diagnostic, Span};
use esc_types::{
    flags::object_flags, unify, Binding, FunctionTypeData, LiteralValue, NamespaceId, ObjTypeElem,
    ObjectTypeData, ParamData, PropKeyData, SelfParamData, Type, TypeArena, TypeId, TypeParamDef,
};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::env::Env;
use crate::expr::{infer_block, infer_expr_standalone};
use crate::pat::infer_pat;
use crate::type_ann::build as build_type_ann;

fn rebind_value(arena: &mut TypeArena, ns: NamespaceId, name: &str, actual: TypeId, mutable: bool, source: Option<Span>) {
    if let Some(existing) = arena.ns(ns).values.get(name).cloned() {
        if let Type::TypeVar(data) = arena.get(existing.ty).clone() {
            arena.set_instance(data.var, actual);
            return;
        }
    }
    arena.declare_binding(ns, name.to_string(), Binding { ty: actual, mutable, source });
}

/// SPEC_FULL.md §2: "did you mean `globalThis.X`?" — a `Suggestion`-category
/// diagnostic emitted when a declaration's name is already resolvable in an
/// enclosing scope, since the new declaration shadows it (spec §4.1,
/// `globalThis.X` remains a path to the original either way).
fn warn_if_shadowing(arena: &TypeArena, scopes: &ScopeArena, scope: ScopeId, name: &str, span: Span, diags: &mut Vec<Diagnostic>) {
    let Some(parent) = scopes.parent(scope) else {
        return;
    };
    let shadows = lookup_value(arena, scopes, parent, name).is_some() || lookup_type(arena, scopes, parent, name).is_some();
    if shadows {
        diags.push(Diagnostic::suggestion(format!("'{name}' shadows a declaration from an outer scope; use `globalThis.{name}` to reach it"), span));
    }
}

fn rebind_alias(arena: &mut TypeArena, ns: NamespaceId, name: &str, body: TypeId, type_params: Vec<TypeParamDef>, source: Option<Span>) {
    if let Some(&alias_id) = arena.ns(ns).types.get(name) {
        let alias = arena.alias_mut(alias_id);
        alias.ty = body;
        alias.type_params = type_params;
    } else {
        let alias_id = arena.declare_alias(body, type_params, source);
        arena.ns_mut(ns).types.insert(name.to_string(), alias_id);
    }
}

fn type_param_ids(arena: &mut TypeArena, type_params: &[esc_ast::TypeParam]) -> Vec<TypeId> {
    type_params.iter().map(|tp| arena.type_ref(tp.name.clone(), Vec::new(), None, Some(tp.span))).collect()
}

fn type_param_defs(
    arena: &mut TypeArena,
    scopes: &ScopeArena,
    scope: ScopeId,
    imports: &ImportTable,
    locals: &FxHashSet<String>,
    type_params: &[esc_ast::TypeParam],
    diags: &mut Vec<Diagnostic>,
) -> Vec<TypeParamDef> {
    type_params
        .iter()
        .map(|tp| TypeParamDef {
            name: tp.name.clone(),
            constraint: tp.constraint.as_ref().map(|c| build_type_ann(arena, scopes, scope, imports, locals, c, diags)),
            default: tp.default.as_ref().map(|d| build_type_ann(arena, scopes, scope, imports, locals, d, diags)),
        })
        .collect()
}

fn param_name(pat: &esc_ast::Pat) -> String {
    match pat {
        esc_ast::Pat::Ident { name, .. } => name.clone(),
        _ => "_".to_string(),
    }
}

/// Infers one declaration in `scope`, rebinding any placeholder already
/// sitting in `scope`'s namespace. `throws` is the enclosing function's
/// effect accumulator — empty/unused for module-level (scheduler-driven)
/// declarations, since those have no enclosing function.
#[allow(clippy::too_many_arguments)]
pub fn infer_decl(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    decl: &Decl,
    throws: &mut Vec<TypeId>,
    diags: &mut Vec<Diagnostic>,
) {
    if env.cancel.check().is_err() {
        return;
    }
    match decl {
        Decl::Val { pat, ty, init, declared, span, .. } => infer_val(arena, scopes, env, imports, scope, pat, ty.as_ref(), init.as_ref(), *declared, *span, throws, diags),
        Decl::Fn { name, self_param, type_params, params, return_ty, throws_ty, body, span, .. } => {
            infer_fn(arena, scopes, env, imports, scope, name, self_param.as_ref(), type_params, params, return_ty.as_ref(), throws_ty.as_ref(), body.as_deref(), *span, diags)
        }
        Decl::Type { name, type_params, ty, span, .. } => infer_type_alias(arena, scopes, env, imports, scope, name, type_params, ty, *span, diags),
        Decl::Class { name, type_params, extends, implements, members, span, .. } => {
            infer_class(arena, scopes, env, imports, scope, name, type_params, extends.as_ref(), implements, members, *span, diags)
        }
        Decl::Enum { name, variants, span, .. } => infer_enum(arena, scopes, scope, name, variants, *span, diags),
        Decl::Namespace { name, decls, span, .. } => {
            let ns = scopes.namespace(scope);
            let child_ns = match arena.ns(ns).namespaces.get(name) {
                Some(&existing) => existing,
                None => {
                    let created = arena.declare_namespace();
                    arena.ns_mut(ns).namespaces.insert(name.clone(), created);
                    created
                }
            };
            let child_scope = scopes.child(scope, child_ns);
            for member in decls {
                infer_decl(arena, scopes, env, imports, child_scope, member, throws, diags);
            }
            let _ = span;
        }
        Decl::Import(_) | Decl::Export { .. } => {}
    }
}

/// Entry point used by `scheduler.rs` for the module-level, placeholder-
/// aware path. Exists only so call sites read as "this is the scheduled
/// path" rather than threading a throwaway `throws` accumulator inline.
pub fn infer_module_decl(arena: &mut TypeArena, scopes: &mut ScopeArena, env: &Env, imports: &ImportTable, scope: ScopeId, decl: &Decl, diags: &mut Vec<Diagnostic>) {
    let mut throws = Vec::new();
    infer_decl(arena, scopes, env, imports, scope, decl, &mut throws, diags);
}

/// Entry point for block-level `Stmt::Decl` (spec §4.4.1's statement list):
/// no placeholder exists, so `infer_decl`'s `rebind_*` helpers fall to
/// their "declare fresh" branch.
pub fn infer_local_decl(arena: &mut TypeArena, scopes: &mut ScopeArena, env: &Env, imports: &ImportTable, scope: ScopeId, decl: &Decl, throws: &mut Vec<TypeId>, diags: &mut Vec<Diagnostic>) {
    infer_decl(arena, scopes, env, imports, scope, decl, throws, diags);
}

#[allow(clippy::too_many_arguments)]
fn infer_val(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    pat: &esc_ast::Pat,
    ty: Option<&esc_ast::TypeAnn>,
    init: Option<&esc_ast::Expr>,
    declared: bool,
    span: Span,
    throws: &mut Vec<TypeId>,
    diags: &mut Vec<Diagnostic>,
) {
    let ns = scopes.namespace(scope);
    let locals = FxHashSet::default();

    let pat_result = infer_pat(arena, scopes, env, imports, scope, pat, diags);
    let declared_ty = ty.map(|ann| build_type_ann(arena, scopes, scope, imports, &locals, ann, diags));
    if let Some(built) = declared_ty {
        diags.extend(unify(arena, env.options, env.limits, pat_result.ty, built, Some(span)));
    }
    if let Some(init_expr) = init {
        let init_ty = crate::expr::infer_expr(arena, scopes, env, imports, scope, throws, init_expr, diags);
        let target = declared_ty.unwrap_or(pat_result.ty);
        diags.extend(unify(arena, env.options, env.limits, init_ty, target, Some(span)));
    }
    let _ = declared;

    for (name, bound_ty) in pat_result.bindings {
        warn_if_shadowing(arena, scopes, scope, &name, span, diags);
        rebind_value(arena, ns, &name, bound_ty, false, Some(span));
    }
}

#[allow(clippy::too_many_arguments)]
fn infer_fn(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    name: &str,
    self_param: Option<&esc_ast::SelfParam>,
    type_params: &[esc_ast::TypeParam],
    params: &[esc_ast::Param],
    return_ty_ann: Option<&esc_ast::TypeAnn>,
    throws_ty_ann: Option<&esc_ast::TypeAnn>,
    body: Option<&[esc_ast::Stmt]>,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) {
    let ns = scopes.namespace(scope);
    let fn_scope = scopes.child(scope, arena.declare_namespace());
    let fn_ns = scopes.namespace(fn_scope);

    let mut inner_locals = FxHashSet::default();
    for tp in type_params {
        inner_locals.insert(tp.name.clone());
    }
    let tp_ids = type_param_ids(arena, type_params);
    let _tp_defs = type_param_defs(arena, scopes, fn_scope, imports, &inner_locals, type_params, diags);

    let self_binding = self_param.map(|s| {
        let fresh = arena.fresh_var(None, Some(s.span));
        arena.declare_binding(fn_ns, "self".to_string(), Binding { ty: fresh, mutable: s.mutable, source: Some(s.span) });
        SelfParamData { mutable: s.mutable }
    });

    let built_params: SmallVec<[ParamData; 4]> = params
        .iter()
        .map(|p| {
            let pat_result = infer_pat(arena, scopes, env, imports, fn_scope, &p.pat, diags);
            let ty = match &p.ty {
                Some(ann) => {
                    let built = build_type_ann(arena, scopes, fn_scope, imports, &inner_locals, ann, diags);
                    diags.extend(unify(arena, env.options, env.limits, pat_result.ty, built, Some(p.span)));
                    built
                }
                None => pat_result.ty,
            };
            for (bname, bty) in pat_result.bindings {
                arena.declare_binding(fn_ns, bname, Binding { ty: bty, mutable: false, source: Some(p.span) });
            }
            ParamData { name: param_name(&p.pat), ty, optional: p.optional, rest: p.rest }
        })
        .collect();

    let (return_ty, throws_ty) = match body {
        Some(stmts) => {
            let mut body_throws = Vec::new();
            let (returns, _) = infer_block(arena, scopes, env, imports, fn_scope, stmts, &mut body_throws, diags);
            let ret = match return_ty_ann {
                Some(ann) => {
                    let built = build_type_ann(arena, scopes, fn_scope, imports, &inner_locals, ann, diags);
                    diags.extend(unify(arena, env.options, env.limits, returns, built, Some(span)));
                    built
                }
                None => returns,
            };
            let thr = match throws_ty_ann {
                Some(ann) => build_type_ann(arena, scopes, fn_scope, imports, &inner_locals, ann, diags),
                None => esc_types::normalize_union(arena, body_throws),
            };
            (ret, thr)
        }
        None => {
            let ret = return_ty_ann.map(|ann| build_type_ann(arena, scopes, fn_scope, imports, &inner_locals, ann, diags)).unwrap_or_else(|| arena.any());
            let thr = throws_ty_ann.map(|ann| build_type_ann(arena, scopes, fn_scope, imports, &inner_locals, ann, diags)).unwrap_or_else(|| arena.never());
            (ret, thr)
        }
    };

    let func_ty = arena.function(FunctionTypeData { type_params: tp_ids, params: built_params, return_ty, throws_ty, self_param: self_binding }, Some(span));
    warn_if_shadowing(arena, scopes, scope, name, span, diags);
    rebind_value(arena, ns, name, func_ty, false, Some(span));
}

fn infer_type_alias(arena: &mut TypeArena, scopes: &mut ScopeArena, _env: &Env, imports: &ImportTable, scope: ScopeId, name: &str, type_params: &[esc_ast::TypeParam], ty: &esc_ast::TypeAnn, span: Span, diags: &mut Vec<Diagnostic>) {
    let ns = scopes.namespace(scope);
    let mut inner_locals = FxHashSet::default();
    for tp in type_params {
        inner_locals.insert(tp.name.clone());
    }
    let defs = type_param_defs(arena, scopes, scope, imports, &inner_locals, type_params, diags);
    let body = build_type_ann(arena, scopes, scope, imports, &inner_locals, ty, diags);
    warn_if_shadowing(arena, scopes, scope, name, span, diags);
    rebind_alias(arena, ns, name, body, defs, Some(span));
}

fn infer_enum(arena: &mut TypeArena, scopes: &mut ScopeArena, scope: ScopeId, name: &str, variants: &[String], span: Span, diags: &mut Vec<Diagnostic>) {
    let ns = scopes.namespace(scope);
    let identity = arena.next_identity();
    let members: Vec<ObjTypeElem> = variants
        .iter()
        .map(|v| {
            let lit = arena.literal(LiteralValue::String(v.clone()), Some(span));
            ObjTypeElem::Property { key: PropKeyData::String(v.clone()), value: lit, readonly: true, optional: false }
        })
        .collect();
    let body = arena.object(ObjectTypeData { object_flags: object_flags::NOMINAL, members, extends: Vec::new(), identity }, Some(span));
    warn_if_shadowing(arena, scopes, scope, name, span, diags);
    rebind_alias(arena, ns, name, body, Vec::new(), Some(span));
}

/// Builds the nominal instance type and the constructor (static-members +
/// `new` signature) type in one pass each: a method/getter/setter's
/// signature is minted with a fresh `TypeVar` standing in for any
/// unannotated param/return/throws, recorded in `signatures`, and its body
/// is checked in a second pass that unifies the body's inferred type
/// against that same `TypeVar` — the same placeholder trick the scheduler
/// uses for forward references, applied to `self`-referencing methods
/// instead (spec §4.4.3: "class (nominal Object instance type ...)").
///
/// `implements` is parsed but — absent a `static` keyword in the AST to
/// distinguish static from instance members, and absent a described
/// interface-merge rule — not woven into the instance's `Extends` list;
/// only `extends` is (documented in DESIGN.md).
#[allow(clippy::too_many_arguments)]
fn infer_class(
    arena: &mut TypeArena,
    scopes: &mut ScopeArena,
    env: &Env,
    imports: &ImportTable,
    scope: ScopeId,
    name: &str,
    type_params: &[esc_ast::TypeParam],
    extends: Option<&esc_ast::TypeAnn>,
    implements: &[esc_ast::TypeAnn],
    members: &[ClassMember],
    span: Span,
    diags: &mut Vec<Diagnostic>,
) {
    let ns = scopes.namespace(scope);
    let class_scope = scopes.child(scope, arena.declare_namespace());

    let mut inner_locals = FxHashSet::default();
    for tp in type_params {
        inner_locals.insert(tp.name.clone());
    }
    let tp_ids = type_param_ids(arena, type_params);
    let tp_defs = type_param_defs(arena, scopes, class_scope, imports, &inner_locals, type_params, diags);

    let extends_ty = extends.map(|e| build_type_ann(arena, scopes, class_scope, imports, &inner_locals, e, diags));
    for i in implements {
        let _ = build_type_ann(arena, scopes, class_scope, imports, &inner_locals, i, diags);
    }

    let mut instance_members = Vec::new();
    let mut static_members = Vec::new();
    let mut field_tys: FxHashMap<String, TypeId> = FxHashMap::default();
    let mut method_funcs: FxHashMap<String, TypeId> = FxHashMap::default();
    let mut getter_tys: FxHashMap<String, TypeId> = FxHashMap::default();
    let mut setter_tys: FxHashMap<String, TypeId> = FxHashMap::default();
    let mut ctor_func: Option<TypeId> = None;

    for member in members {
        match member {
            ClassMember::Field { name: fname, ty, init, readonly, span: fspan } => {
                let field_ty = match ty {
                    Some(ann) => build_type_ann(arena, scopes, class_scope, imports, &inner_locals, ann, diags),
                    None => match init {
                        Some(_) => arena.fresh_var(None, Some(*fspan)),
                        None => arena.any(),
                    },
                };
                field_tys.insert(fname.clone(), field_ty);
                instance_members.push(ObjTypeElem::Property { key: PropKeyData::String(fname.clone()), value: field_ty, readonly: *readonly, optional: false });
            }
            ClassMember::Method { name: mname, self_param, type_params: mtp, params, return_ty, throws_ty, span: mspan, .. } => {
                let mut m_locals = inner_locals.clone();
                for tp in mtp {
                    m_locals.insert(tp.name.clone());
                }
                let m_tp_ids = type_param_ids(arena, mtp);
                let m_params: SmallVec<[ParamData; 4]> = params
                    .iter()
                    .map(|p| ParamData {
                        name: param_name(&p.pat),
                        ty: match &p.ty {
                            Some(ann) => build_type_ann(arena, scopes, class_scope, imports, &m_locals, ann, diags),
                            None => arena.fresh_var(None, Some(p.span)),
                        },
                        optional: p.optional,
                        rest: p.rest,
                    })
                    .collect();
                let ret_ty = match return_ty {
                    Some(ann) => build_type_ann(arena, scopes, class_scope, imports, &m_locals, ann, diags),
                    None => arena.fresh_var(None, Some(*mspan)),
                };
                let thr_ty = match throws_ty {
                    Some(ann) => build_type_ann(arena, scopes, class_scope, imports, &m_locals, ann, diags),
                    None => arena.fresh_var(None, Some(*mspan)),
                };
                let self_data = self_param.as_ref().map(|s| SelfParamData { mutable: s.mutable });
                let func = arena.function(
                    FunctionTypeData { type_params: m_tp_ids, params: m_params, return_ty: ret_ty, throws_ty: thr_ty, self_param: self_data },
                    Some(*mspan),
                );
                method_funcs.insert(mname.clone(), func);
                if self_param.is_some() {
                    instance_members.push(ObjTypeElem::Method { key: PropKeyData::String(mname.clone()), func, is_static: false });
                } else {
                    static_members.push(ObjTypeElem::Method { key: PropKeyData::String(mname.clone()), func, is_static: true });
                }
            }
            ClassMember::Getter { name: gname, ty, span: gspan, .. } => {
                let value_ty = match ty {
                    Some(ann) => build_type_ann(arena, scopes, class_scope, imports, &inner_locals, ann, diags),
                    None => arena.fresh_var(None, Some(*gspan)),
                };
                getter_tys.insert(gname.clone(), value_ty);
                instance_members.push(ObjTypeElem::Getter { key: PropKeyData::String(gname.clone()), value: value_ty });
            }
            ClassMember::Setter { name: sname, ty, span: sspan, .. } => {
                let value_ty = match ty {
                    Some(ann) => build_type_ann(arena, scopes, class_scope, imports, &inner_locals, ann, diags),
                    None => arena.fresh_var(None, Some(*sspan)),
                };
                setter_tys.insert(sname.clone(), value_ty);
                instance_members.push(ObjTypeElem::Setter { key: PropKeyData::String(sname.clone()), value: value_ty });
            }
            ClassMember::Constructor { params, span: cspan, .. } => {
                let ctor_params: SmallVec<[ParamData; 4]> = params
                    .iter()
                    .map(|p| ParamData {
                        name: param_name(&p.pat),
                        ty: match &p.ty {
                            Some(ann) => build_type_ann(arena, scopes, class_scope, imports, &inner_locals, ann, diags),
                            None => arena.fresh_var(None, Some(p.span)),
                        },
                        optional: p.optional,
                        rest: p.rest,
                    })
                    .collect();
                let never = arena.never();
                ctor_func = Some(arena.function(
                    FunctionTypeData { type_params: Vec::new(), params: ctor_params, return_ty: never, throws_ty: never, self_param: None },
                    Some(*cspan),
                ));
            }
        }
    }

    let identity = arena.next_identity();
    let instance_ty = arena.object(
        ObjectTypeData { object_flags: object_flags::NOMINAL, members: instance_members, extends: extends_ty.into_iter().collect(), identity },
        Some(span),
    );
    warn_if_shadowing(arena, scopes, scope, name, span, diags);
    rebind_alias(arena, ns, name, instance_ty, tp_defs, Some(span));

    // Pass 2: check bodies, binding `self` to the now-complete instance
    // type and unifying inferred results against the pass-1 signatures.
    for member in members {
        match member {
            ClassMember::Field { .. } => {}
            ClassMember::Method { name: mname, self_param, params, body, .. } => {
                let Some(&func) = method_funcs.get(mname) else { continue };
                let Type::Function(sig) = arena.get(func).clone() else { continue };
                let method_scope = scopes.child(class_scope, arena.declare_namespace());
                let method_ns = scopes.namespace(method_scope);
                if self_param.is_some() {
                    arena.declare_binding(method_ns, "self".to_string(), Binding { ty: instance_ty, mutable: sig.self_param.map(|s| s.mutable).unwrap_or(false), source: Some(span) });
                }
                for (p, param_data) in params.iter().zip(sig.params.iter()) {
                    let pat_result = infer_pat(arena, scopes, env, imports, method_scope, &p.pat, diags);
                    diags.extend(unify(arena, env.options, env.limits, pat_result.ty, param_data.ty, Some(p.span)));
                    for (bname, bty) in pat_result.bindings {
                        arena.declare_binding(method_ns, bname, Binding { ty: bty, mutable: false, source: Some(p.span) });
                    }
                }
                let mut body_throws = Vec::new();
                let (returns, _) = infer_block(arena, scopes, env, imports, method_scope, body, &mut body_throws, diags);
                diags.extend(unify(arena, env.options, env.limits, returns, sig.return_ty, Some(span)));
                let thrown = esc_types::normalize_union(arena, body_throws);
                diags.extend(unify(arena, env.options, env.limits, thrown, sig.throws_ty, Some(span)));
            }
            ClassMember::Getter { name: gname, body, span: gspan, .. } => {
                let Some(&value_ty) = getter_tys.get(gname) else { continue };
                let method_scope = scopes.child(class_scope, arena.declare_namespace());
                let method_ns = scopes.namespace(method_scope);
                arena.declare_binding(method_ns, "self".to_string(), Binding { ty: instance_ty, mutable: false, source: Some(*gspan) });
                let mut body_throws = Vec::new();
                let (returns, _) = infer_block(arena, scopes, env, imports, method_scope, body, &mut body_throws, diags);
                diags.extend(unify(arena, env.options, env.limits, returns, value_ty, Some(*gspan)));
            }
            ClassMember::Setter { name: sname, body, span: sspan, .. } => {
                let Some(&value_ty) = setter_tys.get(sname) else { continue };
                let _ = value_ty;
                let method_scope = scopes.child(class_scope, arena.declare_namespace());
                let method_ns = scopes.namespace(method_scope);
                arena.declare_binding(method_ns, "self".to_string(), Binding { ty: instance_ty, mutable: true, source: Some(*sspan) });
                let mut body_throws = Vec::new();
                infer_block(arena, scopes, env, imports, method_scope, body, &mut body_throws, diags);
            }
            ClassMember::Constructor { body, span: cspan, .. } => {
                let method_scope = scopes.child(class_scope, arena.declare_namespace());
                let method_ns = scopes.namespace(method_scope);
                arena.declare_binding(method_ns, "self".to_string(), Binding { ty: instance_ty, mutable: true, source: Some(*cspan) });
                let mut body_throws = Vec::new();
                infer_block(arena, scopes, env, imports, method_scope, body, &mut body_throws, diags);
            }
        }
    }

    let ctor_identity = arena.next_identity();
    let ctor_func = ctor_func.unwrap_or_else(|| {
        let never = arena.never();
        arena.function(FunctionTypeData { type_params: Vec::new(), params: SmallVec::new(), return_ty: never, throws_ty: never, self_param: None }, Some(span))
    });
    if let Type::Function(ctor_sig) = arena.get(ctor_func).clone() {
        let mut ctor_members = static_members.clone();
        let complete_ctor = arena.function(
            FunctionTypeData { type_params: tp_ids, params: ctor_sig.params.clone(), return_ty: instance_ty, throws_ty: ctor_sig.throws_ty, self_param: None },
            Some(span),
        );
        ctor_members.push(ObjTypeElem::Constructor { func: complete_ctor });
        let constructor_ty = arena.object(ObjectTypeData { object_flags: 0, members: ctor_members, extends: Vec::new(), identity: ctor_identity }, Some(span));
        rebind_value(arena, ns, name, constructor_ty, false, Some(span));
    }
}
