//! Binding patterns, shared between `val`/`fn` parameters and `match` arms
//! (spec §4.4.2).

use esc_common::Span;

use crate::expr::{Expr, LiteralAnn};
use crate::type_ann::TypeAnn;

#[derive(Clone, Debug)]
pub struct ObjPatField {
    pub key: String,
    pub rename: Option<String>,
    pub default: Option<Expr>,
    pub sub: Option<Pat>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum Pat {
    Ident { name: String, ty: Option<TypeAnn>, span: Span },
    Wildcard(Span),
    Literal(LiteralAnn, Span),
    Tuple { elems: Vec<Pat>, rest: Option<Box<Pat>>, span: Span },
    Object { fields: Vec<ObjPatField>, rest: Option<String>, span: Span },
    /// `Some(x)`, `Ok(value)` and similar extractor patterns (spec §4.4.2).
    Extractor { ctor: Vec<String>, args: Vec<Pat>, span: Span },
}

impl Pat {
    pub fn span(&self) -> Span {
        match self {
            Pat::Ident { span, .. }
            | Pat::Wildcard(span)
            | Pat::Literal(_, span)
            | Pat::Tuple { span, .. }
            | Pat::Object { span, .. }
            | Pat::Extractor { span, .. } => *span,
        }
    }
}
