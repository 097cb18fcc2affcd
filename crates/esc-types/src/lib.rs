//! Type representation, unification, expansion, normalization, and generic
//! instantiation for the esc type checker core (spec §3.1–§3.3, §4.3).
//!
//! `Namespace`/`Binding`/`TypeAlias` storage lives here rather than in
//! `esc-binder` because `Type::Namespace` wraps a `NamespaceId` and
//! `NamespaceData::Types` maps to an `AliasId` — the two are mutually
//! referential, so splitting them across crates would force a dependency
//! cycle.

pub mod ids;
pub use ids::{AliasId, NamespaceId, TypeId, TypeVarId, TypeVarValue};

pub mod flags;

pub mod data;
pub use data::{
    Binding, ConditionalTypeData, ExtractorTypeData, FunctionTypeData, IntersectionTypeData,
    LiteralValue, MappedModifier, MappedTypeData, NamespaceData, ObjTypeElem, ObjectTypeData,
    ParamData, Primitive, PropKeyData, RegexTypeData, SelfParamData, TemplateLitTypeData, Type,
    TypeAlias, TypeData, TypeParamDef, TypeReferenceData, TupleElem, TupleTypeData,
    UniqueSymbolData, UnionTypeData,
};

pub mod arena;
pub use arena::TypeArena;

pub mod prune;
pub use prune::prune;

pub mod substitute;
pub use substitute::substitute;

pub mod unify;
pub use unify::unify;

pub mod expand;
pub use expand::expand_type;

pub mod normalize;
pub use normalize::{normalize_intersection, normalize_union, structurally_equal};

pub mod generics;
pub use generics::instantiate;

pub mod display;
pub use display::display_type;
