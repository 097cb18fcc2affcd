//! Expression and statement syntax trees.

use esc_common::Span;

use crate::pat::Pat;
use crate::type_ann::TypeAnn;

#[derive(Clone, Debug)]
pub enum LiteralAnn {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    BigInt(String),
}

/// The optional `self` receiver on a method or function-expression (spec
/// §3.1's Function type: "an optional Self receiver with mutability").
#[derive(Clone, Debug)]
pub struct SelfParam {
    pub mutable: bool,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct Param {
    pub pat: Pat,
    pub ty: Option<TypeAnn>,
    pub default: Option<Expr>,
    pub optional: bool,
    pub rest: bool,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum PropKey {
    Ident(String),
    String(String),
    Number(f64),
    Computed(Box<Expr>),
}

#[derive(Clone, Debug)]
pub struct MatchArm {
    pub pat: Pat,
    pub guard: Option<Expr>,
    pub body: Expr,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct CatchArm {
    pub pat: Option<Pat>,
    pub ty: Option<TypeAnn>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum Expr {
    Literal(LiteralAnn, Span),
    Ident(String, Span),
    Binary { op: String, left: Box<Expr>, right: Box<Expr>, span: Span },
    Call { callee: Box<Expr>, type_args: Vec<TypeAnn>, args: Vec<Expr>, span: Span },
    Member { object: Box<Expr>, prop: String, optional: bool, span: Span },
    Index { object: Box<Expr>, index: Box<Expr>, optional: bool, span: Span },
    ObjectLit { props: Vec<(PropKey, Expr)>, spreads: Vec<Expr>, span: Span },
    TupleLit { elems: Vec<Expr>, span: Span },
    FunctionExpr {
        self_param: Option<SelfParam>,
        params: Vec<Param>,
        return_ty: Option<TypeAnn>,
        throws_ty: Option<TypeAnn>,
        body: Vec<Stmt>,
        span: Span,
    },
    If { cond: Box<Expr>, then_branch: Box<Expr>, else_branch: Option<Box<Expr>>, span: Span },
    Match { scrutinee: Box<Expr>, arms: Vec<MatchArm>, span: Span },
    Try { body: Vec<Stmt>, catch: Option<CatchArm>, finally: Option<Vec<Stmt>>, span: Span },
    Throw(Box<Expr>, Span),
    TaggedTemplate { tag: Box<Expr>, quasis: Vec<String>, interpolations: Vec<Expr>, span: Span },
    Cast { expr: Box<Expr>, ty: TypeAnn, span: Span },
    Block(Vec<Stmt>, Span),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(_, s)
            | Expr::Ident(_, s)
            | Expr::Binary { span: s, .. }
            | Expr::Call { span: s, .. }
            | Expr::Member { span: s, .. }
            | Expr::Index { span: s, .. }
            | Expr::ObjectLit { span: s, .. }
            | Expr::TupleLit { span: s, .. }
            | Expr::FunctionExpr { span: s, .. }
            | Expr::If { span: s, .. }
            | Expr::Match { span: s, .. }
            | Expr::Try { span: s, .. }
            | Expr::Throw(_, s)
            | Expr::TaggedTemplate { span: s, .. }
            | Expr::Cast { span: s, .. }
            | Expr::Block(_, s) => *s,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Stmt {
    Decl(crate::decl::Decl),
    Return(Option<Expr>, Span),
    ExprStmt(Expr, Span),
}
