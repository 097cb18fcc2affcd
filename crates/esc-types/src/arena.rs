//! The type arena: owns every `TypeData`, `TypeAlias`, and `NamespaceData`
//! allocated by a checker instance, plus the `ena` unification table
//! backing `TypeVar` instance assignment (spec §3.1, §3.6, §4.3.1).
//!
//! Types are never freed individually — the arena's lifetime is one
//! checker instance (spec §9: "the prelude and package registry are
//! per-checker, not process-wide").

use ena::unify::InPlaceUnificationTable;
use esc_common::Span;
use tracing::trace;

use crate::data::{
    Binding, LiteralTypeData, LiteralValue, NamespaceData, ObjectTypeData, Primitive, Type,
    TypeAlias, TypeData, TypeParamDef, TypeVarData,
};
use crate::ids::{AliasId, NamespaceId, TypeId, TypeVarId, TypeVarValue};

pub struct TypeArena {
    types: Vec<TypeData>,
    aliases: Vec<TypeAlias>,
    namespaces: Vec<NamespaceData>,
    vars: InPlaceUnificationTable<TypeVarId>,
    next_ordinal: u32,
    next_identity: u32,
    /// Interned singletons for the primitive kinds, so `arena.primitive(P)`
    /// doesn't re-allocate on every call.
    primitives: [Option<TypeId>; 11],
}

impl Default for TypeArena {
    fn default() -> Self {
        TypeArena {
            types: Vec::new(),
            aliases: Vec::new(),
            namespaces: Vec::new(),
            vars: InPlaceUnificationTable::new(),
            next_ordinal: 0,
            next_identity: 0,
            primitives: Default::default(),
        }
    }
}

impl TypeArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: Type, provenance: Option<Span>) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeData { kind, provenance });
        id
    }

    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize].kind
    }

    pub fn provenance(&self, id: TypeId) -> Option<Span> {
        self.types[id.0 as usize].provenance
    }

    fn primitive_slot(kind: Primitive) -> usize {
        match kind {
            Primitive::Number => 0,
            Primitive::String => 1,
            Primitive::Boolean => 2,
            Primitive::BigInt => 3,
            Primitive::Symbol => 4,
            Primitive::Null => 5,
            Primitive::Undefined => 6,
            Primitive::Void => 7,
            Primitive::Never => 8,
            Primitive::Unknown => 9,
            Primitive::Any => 10,
        }
    }

    pub fn primitive(&mut self, kind: Primitive) -> TypeId {
        let slot = Self::primitive_slot(kind);
        if let Some(id) = self.primitives[slot] {
            return id;
        }
        let id = self.push(Type::Primitive(kind), None);
        self.primitives[slot] = Some(id);
        id
    }

    pub fn never(&mut self) -> TypeId {
        self.primitive(Primitive::Never)
    }

    pub fn any(&mut self) -> TypeId {
        self.primitive(Primitive::Any)
    }

    pub fn unknown(&mut self) -> TypeId {
        self.primitive(Primitive::Unknown)
    }

    pub fn undefined(&mut self) -> TypeId {
        self.primitive(Primitive::Undefined)
    }

    pub fn literal(&mut self, value: LiteralValue, provenance: Option<Span>) -> TypeId {
        let base = match &value {
            LiteralValue::String(_) => Primitive::String,
            LiteralValue::Number(_) => Primitive::Number,
            LiteralValue::BigInt(_) => Primitive::BigInt,
            LiteralValue::Boolean(_) => Primitive::Boolean,
        };
        self.push(Type::Literal(LiteralTypeData { value, base }), provenance)
    }

    /// Widens a literal type to its base primitive (SPEC_FULL.md §2,
    /// `widen_literal`); returns the input unchanged for non-literals.
    pub fn widen_literal(&mut self, id: TypeId) -> TypeId {
        if let Type::Literal(lit) = self.get(id) {
            let base = lit.base;
            self.primitive(base)
        } else {
            id
        }
    }

    /// Mints a fresh unification variable (spec §3.1, §3.6: "TypeVars are
    /// minted by the checker").
    pub fn fresh_var(&mut self, constraint: Option<TypeId>, provenance: Option<Span>) -> TypeId {
        let var = self.vars.new_key(TypeVarValue::Unbound { constraint });
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        trace!(ordinal, "fresh_var");
        self.push(Type::TypeVar(TypeVarData { var, ordinal }), provenance)
    }

    pub fn var_constraint(&mut self, var: TypeVarId) -> Option<TypeId> {
        match self.vars.probe_value(var) {
            TypeVarValue::Unbound { constraint } => constraint,
            TypeVarValue::Bound(_) => None,
        }
    }

    /// Binds `var` to `target`. Callers (`unify`) are responsible for the
    /// occurs check before calling this (spec §4.3.4 rule 1).
    pub fn set_instance(&mut self, var: TypeVarId, target: TypeId) {
        self.vars
            .union_value(var, TypeVarValue::Bound(target));
    }

    pub fn var_instance(&mut self, var: TypeVarId) -> Option<TypeId> {
        match self.vars.probe_value(var) {
            TypeVarValue::Bound(t) => Some(t),
            TypeVarValue::Unbound { .. } => None,
        }
    }

    pub fn type_ref(
        &mut self,
        name: String,
        args: Vec<TypeId>,
        alias: Option<AliasId>,
        provenance: Option<Span>,
    ) -> TypeId {
        self.push(
            Type::TypeRef(Box::new(crate::data::TypeReferenceData { name, args, alias })),
            provenance,
        )
    }

    pub fn object(&mut self, data: ObjectTypeData, provenance: Option<Span>) -> TypeId {
        self.push(Type::Object(Box::new(data)), provenance)
    }

    pub fn next_identity(&mut self) -> u32 {
        let id = self.next_identity;
        self.next_identity += 1;
        id
    }

    pub fn tuple(&mut self, data: crate::data::TupleTypeData, provenance: Option<Span>) -> TypeId {
        self.push(Type::Tuple(Box::new(data)), provenance)
    }

    pub fn function(&mut self, data: crate::data::FunctionTypeData, provenance: Option<Span>) -> TypeId {
        self.push(Type::Function(Box::new(data)), provenance)
    }

    pub fn union(&mut self, members: Vec<TypeId>, provenance: Option<Span>) -> TypeId {
        self.push(Type::Union(Box::new(crate::data::UnionTypeData { members })), provenance)
    }

    pub fn intersection(&mut self, members: Vec<TypeId>, provenance: Option<Span>) -> TypeId {
        self.push(
            Type::Intersection(Box::new(crate::data::IntersectionTypeData { members })),
            provenance,
        )
    }

    pub fn mutable(&mut self, inner: TypeId, provenance: Option<Span>) -> TypeId {
        self.push(Type::Mutable(inner), provenance)
    }

    pub fn template_lit(
        &mut self,
        quasis: Vec<String>,
        interpolations: Vec<TypeId>,
        provenance: Option<Span>,
    ) -> TypeId {
        self.push(
            Type::TemplateLit(Box::new(crate::data::TemplateLitTypeData { quasis, interpolations })),
            provenance,
        )
    }

    pub fn regex(&mut self, pattern: String, provenance: Option<Span>) -> TypeId {
        self.push(Type::Regex(Box::new(crate::data::RegexTypeData { pattern })), provenance)
    }

    pub fn conditional(&mut self, data: crate::data::ConditionalTypeData, provenance: Option<Span>) -> TypeId {
        self.push(Type::Conditional(Box::new(data)), provenance)
    }

    pub fn namespace_type(&mut self, ns: NamespaceId, provenance: Option<Span>) -> TypeId {
        self.push(Type::Namespace(ns), provenance)
    }

    pub fn unique_symbol(&mut self, name: String, provenance: Option<Span>) -> TypeId {
        let id = self.next_identity();
        self.push(Type::UniqueSymbol(Box::new(crate::data::UniqueSymbolData { id, name })), provenance)
    }

    pub fn key_of(&mut self, inner: TypeId, provenance: Option<Span>) -> TypeId {
        self.push(Type::KeyOf(inner), provenance)
    }

    pub fn indexed_access(&mut self, object: TypeId, index: TypeId, provenance: Option<Span>) -> TypeId {
        self.push(Type::IndexedAccess { object, index }, provenance)
    }

    pub fn mapped(&mut self, data: crate::data::MappedTypeData, provenance: Option<Span>) -> TypeId {
        self.push(Type::Mapped(Box::new(data)), provenance)
    }

    pub fn infer(&mut self, name: String, provenance: Option<Span>) -> TypeId {
        self.push(Type::Infer { name }, provenance)
    }

    pub fn rest(&mut self, inner: TypeId, provenance: Option<Span>) -> TypeId {
        self.push(Type::Rest(inner), provenance)
    }

    pub fn extractor(&mut self, ctor: TypeId, args: Vec<TypeId>, provenance: Option<Span>) -> TypeId {
        self.push(Type::Extractor(Box::new(crate::data::ExtractorTypeData { ctor, args })), provenance)
    }

    // -- aliases --------------------------------------------------------

    pub fn declare_alias(
        &mut self,
        ty: TypeId,
        type_params: Vec<TypeParamDef>,
        source: Option<Span>,
    ) -> AliasId {
        let id = AliasId(self.aliases.len() as u32);
        self.aliases.push(TypeAlias { ty, type_params, source });
        id
    }

    pub fn alias(&self, id: AliasId) -> &TypeAlias {
        &self.aliases[id.0 as usize]
    }

    pub fn alias_mut(&mut self, id: AliasId) -> &mut TypeAlias {
        &mut self.aliases[id.0 as usize]
    }

    // -- namespaces -------------------------------------------------------

    pub fn declare_namespace(&mut self) -> NamespaceId {
        let id = NamespaceId(self.namespaces.len() as u32);
        self.namespaces.push(NamespaceData::default());
        id
    }

    pub fn ns(&self, id: NamespaceId) -> &NamespaceData {
        &self.namespaces[id.0 as usize]
    }

    pub fn ns_mut(&mut self, id: NamespaceId) -> &mut NamespaceData {
        &mut self.namespaces[id.0 as usize]
    }

    pub fn declare_binding(&mut self, ns: NamespaceId, name: String, binding: Binding) {
        self.ns_mut(ns).values.insert(name, binding);
    }
}
