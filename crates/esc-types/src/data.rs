//! The `Type` tagged variant (spec §3.1) and the binding/alias/namespace
//! storage that sits alongside it (§3.2) — kept in the same crate because
//! `Type::Namespace` and `Namespace::Types` are mutually referential (see
//! `DESIGN.md`).
//!
//! Large variants are boxed, matching `tsz-checker`'s `Type` enum, to keep
//! the common case (a primitive or a type-var reference) cheap to clone.

use esc_common::Span;
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::flags::object_flags;
use crate::ids::{AliasId, NamespaceId, TypeId, TypeVarId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Number,
    String,
    Boolean,
    BigInt,
    Symbol,
    Null,
    Undefined,
    Void,
    Never,
    Unknown,
    Any,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    BigInt(String),
    Boolean(bool),
}

#[derive(Clone, Debug)]
pub struct LiteralTypeData {
    pub value: LiteralValue,
    /// The primitive this literal widens to (spec's `widen_literal`,
    /// SPEC_FULL.md §2) — mirrors `tsz-checker`'s `LiteralType::regular_type`.
    pub base: Primitive,
}

#[derive(Clone, Debug)]
pub struct TypeVarData {
    pub var: TypeVarId,
    /// Stable, ordered id for diagnostics/display (spec §3.1: "an ordered
    /// unique id"); independent of the `ena` table index so display output
    /// stays stable across unrelated unifications.
    pub ordinal: u32,
}

#[derive(Clone, Debug)]
pub struct TypeReferenceData {
    pub name: String,
    pub args: Vec<TypeId>,
    /// Resolved once the name has been looked up in scope; `None` before
    /// resolution or when the name is unknown (spec §4.3.5: emits
    /// `UnknownType` and expands to `never` in that case).
    pub alias: Option<AliasId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropKeyData {
    String(String),
    Number(u64),
    UniqueSymbol(TypeId),
}

#[derive(Clone, Debug)]
pub enum ObjTypeElem {
    Property { key: PropKeyData, value: TypeId, readonly: bool, optional: bool },
    Method { key: PropKeyData, func: TypeId, is_static: bool },
    Getter { key: PropKeyData, value: TypeId },
    Setter { key: PropKeyData, value: TypeId },
    Index { key_type: TypeId, value_type: TypeId, readonly: bool },
    Call { func: TypeId },
    Constructor { func: TypeId },
    Mapped { template: TypeId },
}

impl ObjTypeElem {
    pub fn key(&self) -> Option<&PropKeyData> {
        match self {
            ObjTypeElem::Property { key, .. }
            | ObjTypeElem::Method { key, .. }
            | ObjTypeElem::Getter { key, .. }
            | ObjTypeElem::Setter { key, .. } => Some(key),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ObjectTypeData {
    pub object_flags: u32,
    pub members: Vec<ObjTypeElem>,
    /// Parent object types this type structurally/nominally extends (spec
    /// §3.1's `Extends` list).
    pub extends: Vec<TypeId>,
    /// Unique per-declaration identity, used for nominal equality and for
    /// `UniqueSymbol` disambiguation of class identity (spec §3.1, §4.3.1).
    pub identity: u32,
}

impl ObjectTypeData {
    pub fn is_nominal(&self) -> bool {
        self.object_flags & object_flags::NOMINAL != 0
    }
}

#[derive(Clone, Debug)]
pub struct TupleElem {
    pub ty: TypeId,
    pub optional: bool,
    pub rest: bool,
    pub name: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TupleTypeData {
    pub elems: Vec<TupleElem>,
}

#[derive(Clone, Debug)]
pub struct ParamData {
    pub name: String,
    pub ty: TypeId,
    pub optional: bool,
    pub rest: bool,
}

#[derive(Clone, Debug)]
pub struct FunctionTypeData {
    pub type_params: Vec<TypeId>,
    pub params: SmallVec<[ParamData; 4]>,
    pub return_ty: TypeId,
    /// Defaults to `never` when a function declares no throws clause (spec
    /// §3.1, §8.3 property test).
    pub throws_ty: TypeId,
    pub self_param: Option<SelfParamData>,
}

#[derive(Clone, Copy, Debug)]
pub struct SelfParamData {
    pub mutable: bool,
}

#[derive(Clone, Debug)]
pub struct UnionTypeData {
    pub members: Vec<TypeId>,
}

#[derive(Clone, Debug)]
pub struct IntersectionTypeData {
    pub members: Vec<TypeId>,
}

#[derive(Clone, Debug)]
pub struct TemplateLitTypeData {
    pub quasis: Vec<String>,
    pub interpolations: Vec<TypeId>,
}

#[derive(Clone, Debug)]
pub struct RegexTypeData {
    pub pattern: String,
}

#[derive(Clone, Debug)]
pub struct ConditionalTypeData {
    pub check: TypeId,
    pub extends: TypeId,
    pub then_ty: TypeId,
    pub else_ty: TypeId,
    /// `infer X` positions bound within `extends` and visible in `then_ty`.
    pub infer_params: Vec<TypeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappedModifier {
    Preserve,
    Add,
    Remove,
}

#[derive(Clone, Debug)]
pub struct MappedTypeData {
    pub type_param: TypeId,
    pub constraint: TypeId,
    pub name_ty: Option<TypeId>,
    pub template: TypeId,
    pub readonly: MappedModifier,
    pub optional: MappedModifier,
}

#[derive(Clone, Debug)]
pub struct UniqueSymbolData {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct ExtractorTypeData {
    pub ctor: TypeId,
    pub args: Vec<TypeId>,
}

/// Every type variant (spec §3.1). `provenance` is carried once at the
/// `TypeData` level rather than per-variant, since every variant needs it
/// uniformly for diagnostics and none of the unification/expansion logic
/// inspects it.
#[derive(Clone, Debug)]
pub enum Type {
    Primitive(Primitive),
    Literal(LiteralTypeData),
    TypeVar(TypeVarData),
    TypeRef(Box<TypeReferenceData>),
    Object(Box<ObjectTypeData>),
    Tuple(Box<TupleTypeData>),
    Function(Box<FunctionTypeData>),
    Union(Box<UnionTypeData>),
    Intersection(Box<IntersectionTypeData>),
    Mutable(TypeId),
    TemplateLit(Box<TemplateLitTypeData>),
    Regex(Box<RegexTypeData>),
    Conditional(Box<ConditionalTypeData>),
    Namespace(NamespaceId),
    UniqueSymbol(Box<UniqueSymbolData>),
    KeyOf(TypeId),
    IndexedAccess { object: TypeId, index: TypeId },
    Mapped(Box<MappedTypeData>),
    Infer { name: String },
    Rest(TypeId),
    Extractor(Box<ExtractorTypeData>),
}

/// A type plus its optional originating-AST-node link (spec §3.1:
/// "provenance ... used only for diagnostics").
#[derive(Clone, Debug)]
pub struct TypeData {
    pub kind: Type,
    pub provenance: Option<Span>,
}

// ---------------------------------------------------------------------
// Bindings, aliases, namespaces (spec §3.2)
// ---------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct Binding {
    pub ty: TypeId,
    pub mutable: bool,
    pub source: Option<Span>,
}

#[derive(Clone, Debug)]
pub struct TypeParamDef {
    pub name: String,
    pub constraint: Option<TypeId>,
    pub default: Option<TypeId>,
}

#[derive(Clone, Debug)]
pub struct TypeAlias {
    pub ty: TypeId,
    pub type_params: Vec<TypeParamDef>,
    pub source: Option<Span>,
}

/// Four ordered maps (spec §3.2): iteration order is insertion order so
/// generated/displayed output is reproducible across runs, matching the
/// teacher's use of `indexmap::IndexMap` for the same reason.
#[derive(Clone, Debug, Default)]
pub struct NamespaceData {
    pub values: IndexMap<String, Binding>,
    pub types: IndexMap<String, AliasId>,
    pub namespaces: IndexMap<String, NamespaceId>,
    /// File-scoped import-alias table (§4.1); populated per `File`, not
    /// per logical namespace, but stored with the same shape so lookup code
    /// is uniform.
    pub packages: IndexMap<String, NamespaceId>,
}
