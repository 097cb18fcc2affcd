//! Collects every name a declaration's body or type annotations mention, to
//! drive `DeclDeps` construction (spec §3.4).
//!
//! This is deliberately a conservative over-approximation: it does not
//! track pattern-bound locals that shadow an outer declaration name, so a
//! function parameter named the same as a sibling top-level `val` produces
//! a spurious dependency edge. Spurious edges only coarsen scheduling (they
//! can merge two components that didn't truly need to be merged, or order
//! one decl after another unnecessarily); they never produce an incorrect
//! schedule, which is the only property the scheduler (spec §4.2) needs
//! from this pass.

use esc_ast::{CatchArm, ClassMember, Decl, Expr, MatchArm, Param, Pat, PropKey, Stmt, TypeAnn, TypeParam};
use rustc_hash::FxHashSet;

pub fn collect_decl_dependencies(decl: &Decl, out: &mut FxHashSet<String>) {
    match decl {
        Decl::Val { pat, ty, init, .. } => {
            collect_pat(pat, out);
            if let Some(ty) = ty {
                collect_type(ty, out);
            }
            if let Some(init) = init {
                collect_expr(init, out);
            }
        }
        Decl::Fn { self_param: _, type_params, params, return_ty, throws_ty, body, .. } => {
            collect_type_params(type_params, out);
            for p in params {
                collect_param(p, out);
            }
            if let Some(ty) = return_ty {
                collect_type(ty, out);
            }
            if let Some(ty) = throws_ty {
                collect_type(ty, out);
            }
            if let Some(body) = body {
                for stmt in body {
                    collect_stmt(stmt, out);
                }
            }
        }
        Decl::Type { type_params, ty, .. } => {
            collect_type_params(type_params, out);
            collect_type(ty, out);
        }
        Decl::Class { type_params, extends, implements, members, .. } => {
            collect_type_params(type_params, out);
            if let Some(ty) = extends {
                collect_type(ty, out);
            }
            for ty in implements {
                collect_type(ty, out);
            }
            for member in members {
                collect_class_member(member, out);
            }
        }
        Decl::Enum { .. } => {}
        Decl::Namespace { decls, .. } => {
            for d in decls {
                collect_decl_dependencies(d, out);
            }
        }
        Decl::Import(_) => {}
        Decl::Export { .. } => {}
    }
}

fn collect_class_member(member: &ClassMember, out: &mut FxHashSet<String>) {
    match member {
        ClassMember::Field { ty, init, .. } => {
            if let Some(ty) = ty {
                collect_type(ty, out);
            }
            if let Some(init) = init {
                collect_expr(init, out);
            }
        }
        ClassMember::Method { type_params, params, return_ty, throws_ty, body, .. } => {
            collect_type_params(type_params, out);
            for p in params {
                collect_param(p, out);
            }
            if let Some(ty) = return_ty {
                collect_type(ty, out);
            }
            if let Some(ty) = throws_ty {
                collect_type(ty, out);
            }
            for stmt in body {
                collect_stmt(stmt, out);
            }
        }
        ClassMember::Getter { ty, body, .. } | ClassMember::Setter { ty, body, .. } => {
            if let Some(ty) = ty {
                collect_type(ty, out);
            }
            for stmt in body {
                collect_stmt(stmt, out);
            }
        }
        ClassMember::Constructor { params, body, .. } => {
            for p in params {
                collect_param(p, out);
            }
            for stmt in body {
                collect_stmt(stmt, out);
            }
        }
    }
}

fn collect_type_params(params: &[TypeParam], out: &mut FxHashSet<String>) {
    for p in params {
        if let Some(c) = &p.constraint {
            collect_type(c, out);
        }
        if let Some(d) = &p.default {
            collect_type(d, out);
        }
    }
}

fn collect_param(param: &Param, out: &mut FxHashSet<String>) {
    collect_pat(&param.pat, out);
    if let Some(ty) = &param.ty {
        collect_type(ty, out);
    }
    if let Some(default) = &param.default {
        collect_expr(default, out);
    }
}

fn collect_stmt(stmt: &Stmt, out: &mut FxHashSet<String>) {
    match stmt {
        Stmt::Decl(d) => collect_decl_dependencies(d, out),
        Stmt::Return(e, _) => {
            if let Some(e) = e {
                collect_expr(e, out);
            }
        }
        Stmt::ExprStmt(e, _) => collect_expr(e, out),
    }
}

fn collect_expr(expr: &Expr, out: &mut FxHashSet<String>) {
    match expr {
        Expr::Literal(..) => {}
        Expr::Ident(name, _) => {
            out.insert(name.clone());
        }
        Expr::Binary { left, right, .. } => {
            collect_expr(left, out);
            collect_expr(right, out);
        }
        Expr::Call { callee, type_args, args, .. } => {
            collect_expr(callee, out);
            for t in type_args {
                collect_type(t, out);
            }
            for a in args {
                collect_expr(a, out);
            }
        }
        Expr::Member { object, .. } => collect_expr(object, out),
        Expr::Index { object, index, .. } => {
            collect_expr(object, out);
            collect_expr(index, out);
        }
        Expr::ObjectLit { props, spreads, .. } => {
            for (key, value) in props {
                if let PropKey::Computed(e) = key {
                    collect_expr(e, out);
                }
                collect_expr(value, out);
            }
            for e in spreads {
                collect_expr(e, out);
            }
        }
        Expr::TupleLit { elems, .. } => {
            for e in elems {
                collect_expr(e, out);
            }
        }
        Expr::FunctionExpr { params, return_ty, throws_ty, body, .. } => {
            for p in params {
                collect_param(p, out);
            }
            if let Some(ty) = return_ty {
                collect_type(ty, out);
            }
            if let Some(ty) = throws_ty {
                collect_type(ty, out);
            }
            for stmt in body {
                collect_stmt(stmt, out);
            }
        }
        Expr::If { cond, then_branch, else_branch, .. } => {
            collect_expr(cond, out);
            collect_expr(then_branch, out);
            if let Some(e) = else_branch {
                collect_expr(e, out);
            }
        }
        Expr::Match { scrutinee, arms, .. } => {
            collect_expr(scrutinee, out);
            for arm in arms {
                collect_match_arm(arm, out);
            }
        }
        Expr::Try { body, catch, finally, .. } => {
            for stmt in body {
                collect_stmt(stmt, out);
            }
            if let Some(catch) = catch {
                collect_catch_arm(catch, out);
            }
            if let Some(finally) = finally {
                for stmt in finally {
                    collect_stmt(stmt, out);
                }
            }
        }
        Expr::Throw(e, _) => collect_expr(e, out),
        Expr::TaggedTemplate { tag, interpolations, .. } => {
            collect_expr(tag, out);
            for e in interpolations {
                collect_expr(e, out);
            }
        }
        Expr::Cast { expr, ty, .. } => {
            collect_expr(expr, out);
            collect_type(ty, out);
        }
        Expr::Block(stmts, _) => {
            for stmt in stmts {
                collect_stmt(stmt, out);
            }
        }
    }
}

fn collect_match_arm(arm: &MatchArm, out: &mut FxHashSet<String>) {
    collect_pat(&arm.pat, out);
    if let Some(guard) = &arm.guard {
        collect_expr(guard, out);
    }
    collect_expr(&arm.body, out);
}

fn collect_catch_arm(arm: &CatchArm, out: &mut FxHashSet<String>) {
    if let Some(pat) = &arm.pat {
        collect_pat(pat, out);
    }
    if let Some(ty) = &arm.ty {
        collect_type(ty, out);
    }
    for stmt in &arm.body {
        collect_stmt(stmt, out);
    }
}

fn collect_pat(pat: &Pat, out: &mut FxHashSet<String>) {
    match pat {
        Pat::Ident { ty, .. } => {
            if let Some(ty) = ty {
                collect_type(ty, out);
            }
        }
        Pat::Wildcard(_) | Pat::Literal(..) => {}
        Pat::Tuple { elems, rest, .. } => {
            for e in elems {
                collect_pat(e, out);
            }
            if let Some(rest) = rest {
                collect_pat(rest, out);
            }
        }
        Pat::Object { fields, .. } => {
            for field in fields {
                if let Some(default) = &field.default {
                    collect_expr(default, out);
                }
                if let Some(sub) = &field.sub {
                    collect_pat(sub, out);
                }
            }
        }
        Pat::Extractor { ctor, args, .. } => {
            if let Some(head) = ctor.first() {
                out.insert(head.clone());
            }
            for a in args {
                collect_pat(a, out);
            }
        }
    }
}

fn collect_type(ty: &TypeAnn, out: &mut FxHashSet<String>) {
    match ty {
        TypeAnn::Name { path, args, .. } => {
            if let Some(head) = path.first() {
                out.insert(head.clone());
            }
            for a in args {
                collect_type(a, out);
            }
        }
        TypeAnn::Object { members, .. } => {
            for member in members {
                collect_obj_member(member, out);
            }
        }
        TypeAnn::Tuple { elems, .. } => {
            for e in elems {
                collect_type(&e.ty, out);
            }
        }
        TypeAnn::Function { type_params, params, return_ty, throws_ty, .. } => {
            collect_type_params(type_params, out);
            for p in params {
                collect_param(p, out);
            }
            collect_type(return_ty, out);
            if let Some(ty) = throws_ty {
                collect_type(ty, out);
            }
        }
        TypeAnn::Union(members, _) | TypeAnn::Intersection(members, _) => {
            for m in members {
                collect_type(m, out);
            }
        }
        TypeAnn::Mutable(inner, _) | TypeAnn::KeyOf(inner, _) | TypeAnn::Rest(inner, _) => {
            collect_type(inner, out);
        }
        TypeAnn::TemplateLit { interpolations, .. } => {
            for i in interpolations {
                collect_type(i, out);
            }
        }
        TypeAnn::Regex { .. } => {}
        TypeAnn::Conditional { check, extends, then, els, .. } => {
            collect_type(check, out);
            collect_type(extends, out);
            collect_type(then, out);
            collect_type(els, out);
        }
        TypeAnn::IndexedAccess { object, index, .. } => {
            collect_type(object, out);
            collect_type(index, out);
        }
        TypeAnn::Mapped { constraint, name_ty, template, .. } => {
            collect_type(constraint, out);
            if let Some(n) = name_ty {
                collect_type(n, out);
            }
            collect_type(template, out);
        }
        TypeAnn::Infer { .. } => {}
        TypeAnn::Literal(..) => {}
    }
}

fn collect_obj_member(member: &esc_ast::ObjMemberAnn, out: &mut FxHashSet<String>) {
    use esc_ast::ObjMemberAnn;
    match member {
        ObjMemberAnn::Property { ty, .. } | ObjMemberAnn::Getter { ty, .. } | ObjMemberAnn::Setter { ty, .. } => {
            collect_type(ty, out);
        }
        ObjMemberAnn::Method { params, return_ty, .. } | ObjMemberAnn::Call { params, return_ty, .. } | ObjMemberAnn::Constructor { params, return_ty, .. } => {
            for p in params {
                collect_param(p, out);
            }
            collect_type(return_ty, out);
        }
        ObjMemberAnn::Index { key_ty, value_ty, .. } => {
            collect_type(key_ty, out);
            collect_type(value_ty, out);
        }
    }
}

/// Not itself a dependency source — `import` aliases live in the file's
/// import table (spec §4.1), handled by [`crate::imports`].
pub fn is_import(decl: &Decl) -> bool {
    matches!(decl, Decl::Import(_))
}
