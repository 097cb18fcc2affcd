//! The declaration dependency graph (spec §3.4, §4.2 step 1).

use esc_ast::{Decl, File, Module};
use rustc_hash::FxHashMap;
use tracing::{debug, span, Level};

use crate::free_vars::{collect_decl_dependencies, is_import};
use crate::ids::DeclId;
use crate::scc::strongly_connected_components;

/// One flattened declaration plus the metadata the scheduler needs. Nested
/// `Decl::Namespace` members are flattened into their own entries with an
/// extended `namespace` path rather than kept nested — the namespace decl
/// itself is not a graph node (spec §4.2 step 2a treats "descend the
/// namespace path" as a property of each ordinary declaration).
pub struct DeclEntry {
    pub decl: Decl,
    pub namespace: Vec<String>,
    pub file_id: u32,
}

pub struct DepGraph {
    pub decls: Vec<DeclEntry>,
    pub decl_deps: Vec<Vec<DeclId>>,
    pub value_bindings: FxHashMap<(Vec<String>, String), DeclId>,
    pub type_bindings: FxHashMap<(Vec<String>, String), DeclId>,
    pub components: Vec<Vec<DeclId>>,
}

impl DepGraph {
    pub fn decl(&self, id: DeclId) -> &DeclEntry {
        &self.decls[id.index()]
    }
}

fn flatten_file(file: &File, out: &mut Vec<DeclEntry>) {
    flatten_decls(&file.decls, &file.namespace, file.id, out);
}

fn flatten_decls(decls: &[Decl], namespace: &[String], file_id: u32, out: &mut Vec<DeclEntry>) {
    for decl in decls {
        if is_import(decl) {
            continue;
        }
        if let Decl::Namespace { name, decls: members, .. } = decl {
            let mut nested = namespace.to_vec();
            nested.push(name.clone());
            flatten_decls(members, &nested, file_id, out);
            continue;
        }
        out.push(DeclEntry { decl: decl.clone(), namespace: namespace.to_vec(), file_id });
    }
}

fn decl_name(decl: &Decl) -> Option<&str> {
    match decl {
        Decl::Val { pat: esc_ast::Pat::Ident { name, .. }, .. } => Some(name),
        Decl::Val { .. } => None,
        Decl::Fn { name, .. } | Decl::Type { name, .. } | Decl::Class { name, .. } | Decl::Enum { name, .. } => Some(name),
        Decl::Namespace { .. } | Decl::Import(_) | Decl::Export { .. } => None,
    }
}

fn binds_value(decl: &Decl) -> bool {
    matches!(decl, Decl::Val { .. } | Decl::Fn { .. } | Decl::Class { .. })
}

fn binds_type(decl: &Decl) -> bool {
    matches!(decl, Decl::Type { .. } | Decl::Class { .. } | Decl::Enum { .. })
}

/// Walks up `namespace`'s ancestor chain (dropping one trailing segment at
/// a time down to the module root `[]`) looking for `name`, mirroring the
/// scope-chain walk used for real name resolution (spec §3.3) but over the
/// DepGraph's auxiliary name maps instead of a `Namespace`.
fn resolve_in_chain<'a>(
    bindings: &'a FxHashMap<(Vec<String>, String), DeclId>,
    namespace: &[String],
    name: &str,
) -> Option<DeclId> {
    let mut path = namespace.to_vec();
    loop {
        if let Some(&id) = bindings.get(&(path.clone(), name.to_string())) {
            return Some(id);
        }
        if path.is_empty() {
            return None;
        }
        path.pop();
    }
}

pub fn build(module: &Module) -> DepGraph {
    let _span = span!(Level::DEBUG, "depgraph_build", module = %module.name).entered();

    let mut flattened = Vec::new();
    for file in &module.files {
        flatten_file(file, &mut flattened);
    }

    let mut value_bindings = FxHashMap::default();
    let mut type_bindings = FxHashMap::default();
    for (i, entry) in flattened.iter().enumerate() {
        let id = DeclId(i as u32);
        let Some(name) = decl_name(&entry.decl) else { continue };
        if binds_value(&entry.decl) {
            value_bindings.insert((entry.namespace.clone(), name.to_string()), id);
        }
        if binds_type(&entry.decl) {
            type_bindings.insert((entry.namespace.clone(), name.to_string()), id);
        }
    }

    let mut decl_deps: Vec<Vec<DeclId>> = Vec::with_capacity(flattened.len());
    for entry in &flattened {
        let mut names = rustc_hash::FxHashSet::default();
        collect_decl_dependencies(&entry.decl, &mut names);
        let mut deps = Vec::new();
        for name in names {
            if let Some(id) = resolve_in_chain(&value_bindings, &entry.namespace, &name) {
                deps.push(id);
            }
            if let Some(id) = resolve_in_chain(&type_bindings, &entry.namespace, &name) {
                if !deps.contains(&id) {
                    deps.push(id);
                }
            }
        }
        decl_deps.push(deps);
    }

    let adjacency: Vec<Vec<usize>> = decl_deps.iter().map(|d| d.iter().map(|id| id.index()).collect()).collect();
    let components = strongly_connected_components(&adjacency);
    debug!(decls = flattened.len(), components = components.len(), "depgraph built");

    DepGraph { decls: flattened, decl_deps, value_bindings, type_bindings, components }
}
