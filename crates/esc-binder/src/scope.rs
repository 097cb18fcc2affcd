//! Scope chain over `esc_types::Namespace`s (spec §3.3, §4.1).
//!
//! A `Scope` is `{parent: Scope?, namespace: Namespace}`; lookups walk
//! parent links. Scopes are stored in an arena indexed by `ScopeId` the same
//! way types are stored in `TypeArena`, rather than as owned/boxed links,
//! so a component scope's intermediate namespace segments (one per dotted
//! path element, spec §4.1 "User scope chain") are cheap to create and
//! cheap for the checker to hold onto across a component's lifetime.

use esc_types::{AliasId, Binding, NamespaceId, TypeArena};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

struct ScopeData {
    parent: Option<ScopeId>,
    namespace: NamespaceId,
}

#[derive(Default)]
pub struct ScopeArena {
    scopes: Vec<ScopeData>,
}

impl ScopeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, namespace: NamespaceId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(ScopeData { parent: None, namespace });
        id
    }

    pub fn child(&mut self, parent: ScopeId, namespace: NamespaceId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(ScopeData { parent: Some(parent), namespace });
        id
    }

    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes[id.index()].parent
    }

    pub fn namespace(&self, id: ScopeId) -> NamespaceId {
        self.scopes[id.index()].namespace
    }

    /// Descends from `parent` through one intermediate scope per dotted
    /// namespace segment, creating the backing `NamespaceData` in `arena`
    /// when a segment hasn't been visited before under this parent
    /// (spec §4.1: "creating intermediate nested namespaces if missing").
    pub fn descend(&mut self, arena: &mut TypeArena, parent: ScopeId, path: &[String]) -> ScopeId {
        let mut scope = parent;
        for segment in path {
            let ns = self.namespace(scope);
            let next_ns = match arena.ns(ns).namespaces.get(segment) {
                Some(&existing) => existing,
                None => {
                    let created = arena.declare_namespace();
                    arena.ns_mut(ns).namespaces.insert(segment.clone(), created);
                    created
                }
            };
            scope = self.child(scope, next_ns);
        }
        scope
    }
}

impl ScopeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unqualified `lookupValue` (spec §3.3): walk up until a match is found or
/// the root is reached.
pub fn lookup_value(arena: &TypeArena, scopes: &ScopeArena, scope: ScopeId, name: &str) -> Option<Binding> {
    let mut current = Some(scope);
    while let Some(id) = current {
        let ns = scopes.namespace(id);
        if let Some(binding) = arena.ns(ns).values.get(name) {
            return Some(binding.clone());
        }
        current = scopes.parent(id);
    }
    None
}

/// Unqualified `lookupType` (spec §3.3).
pub fn lookup_type(arena: &TypeArena, scopes: &ScopeArena, scope: ScopeId, name: &str) -> Option<AliasId> {
    let mut current = Some(scope);
    while let Some(id) = current {
        let ns = scopes.namespace(id);
        if let Some(&alias) = arena.ns(ns).types.get(name) {
            return Some(alias);
        }
        current = scopes.parent(id);
    }
    None
}

pub fn lookup_namespace(arena: &TypeArena, scopes: &ScopeArena, scope: ScopeId, name: &str) -> Option<NamespaceId> {
    let mut current = Some(scope);
    while let Some(id) = current {
        let ns = scopes.namespace(id);
        if let Some(&nested) = arena.ns(ns).namespaces.get(name) {
            return Some(nested);
        }
        current = scopes.parent(id);
    }
    None
}
