//! Type-annotation syntax trees, as written by the programmer, prior to
//! any checking. These are the input to `esc-types`' construction helpers
//! (spec §4.3.1) and to `esc-checker`'s declaration inference (§4.4.3).

use esc_common::Span;

/// A declared type parameter, e.g. `T extends Comparable<T> = Default`.
#[derive(Clone, Debug)]
pub struct TypeParam {
    pub name: String,
    pub constraint: Option<TypeAnn>,
    pub default: Option<TypeAnn>,
    pub span: Span,
}

/// A modifier on a mapped-type clause: `+readonly` / `-readonly` / absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModifierAnn {
    #[default]
    Preserve,
    Add,
    Remove,
}

#[derive(Clone, Debug)]
pub enum ObjMemberAnn {
    Property { key: String, ty: TypeAnn, optional: bool, readonly: bool, span: Span },
    Method { key: String, params: Vec<super::expr::Param>, return_ty: TypeAnn, span: Span },
    Getter { key: String, ty: TypeAnn, span: Span },
    Setter { key: String, ty: TypeAnn, span: Span },
    Index { key_ty: TypeAnn, value_ty: TypeAnn, readonly: bool, span: Span },
    Call { params: Vec<super::expr::Param>, return_ty: TypeAnn, span: Span },
    Constructor { params: Vec<super::expr::Param>, return_ty: TypeAnn, span: Span },
}

#[derive(Clone, Debug)]
pub struct TupleElemAnn {
    pub ty: TypeAnn,
    pub optional: bool,
    pub rest: bool,
    pub name: Option<String>,
}

/// A type annotation as written in source, before resolution/expansion.
///
/// `Name` covers both simple references (`Array`) and qualified ones
/// (`pkg.T`, `globalThis.Array<T>`) — the resolver (spec §4.1) walks
/// `path` segment by segment.
#[derive(Clone, Debug)]
pub enum TypeAnn {
    Name { path: Vec<String>, args: Vec<TypeAnn>, span: Span },
    Object { members: Vec<ObjMemberAnn>, span: Span },
    Tuple { elems: Vec<TupleElemAnn>, span: Span },
    Function {
        type_params: Vec<TypeParam>,
        params: Vec<super::expr::Param>,
        return_ty: Box<TypeAnn>,
        throws_ty: Option<Box<TypeAnn>>,
        span: Span,
    },
    Union(Vec<TypeAnn>, Span),
    Intersection(Vec<TypeAnn>, Span),
    Mutable(Box<TypeAnn>, Span),
    TemplateLit { quasis: Vec<String>, interpolations: Vec<TypeAnn>, span: Span },
    Regex { pattern: String, span: Span },
    Conditional {
        check: Box<TypeAnn>,
        extends: Box<TypeAnn>,
        then: Box<TypeAnn>,
        els: Box<TypeAnn>,
        span: Span,
    },
    KeyOf(Box<TypeAnn>, Span),
    IndexedAccess { object: Box<TypeAnn>, index: Box<TypeAnn>, span: Span },
    Mapped {
        type_param: String,
        constraint: Box<TypeAnn>,
        name_ty: Option<Box<TypeAnn>>,
        template: Box<TypeAnn>,
        readonly: ModifierAnn,
        optional: ModifierAnn,
        span: Span,
    },
    Infer { name: String, span: Span },
    Rest(Box<TypeAnn>, Span),
    Literal(super::expr::LiteralAnn, Span),
}

impl TypeAnn {
    pub fn span(&self) -> Span {
        match self {
            TypeAnn::Name { span, .. }
            | TypeAnn::Object { span, .. }
            | TypeAnn::Tuple { span, .. }
            | TypeAnn::Function { span, .. }
            | TypeAnn::Union(_, span)
            | TypeAnn::Intersection(_, span)
            | TypeAnn::Mutable(_, span)
            | TypeAnn::TemplateLit { span, .. }
            | TypeAnn::Regex { span, .. }
            | TypeAnn::Conditional { span, .. }
            | TypeAnn::KeyOf(_, span)
            | TypeAnn::IndexedAccess { span, .. }
            | TypeAnn::Mapped { span, .. }
            | TypeAnn::Infer { span, .. }
            | TypeAnn::Rest(_, span)
            | TypeAnn::Literal(_, span) => *span,
        }
    }
}
