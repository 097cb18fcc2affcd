//! Scope chain, package registry, file-scoped imports, and the declaration
//! dependency graph for the esc type checker core (spec §3.3, §3.4, §4.1,
//! §4.2 step 1).
//!
//! Everything downstream of "which `DeclId` feeds which" — pre-declaring
//! placeholders, running finalization, actually inferring expressions —
//! belongs to `esc-checker`; this crate only builds the graph and the
//! lookup scaffolding the scheduler walks.

pub mod ids;
pub use ids::DeclId;

pub mod package_registry;
pub use package_registry::{PackageRegistry, RegisterError};

pub mod scope;
pub use scope::{lookup_namespace, lookup_type, lookup_value, ScopeArena, ScopeId};

pub mod imports;
pub use imports::{build_import_table, resolve_qualified, ImportTable, Resolved};

pub mod free_vars;

pub mod scc;
pub use scc::{component_index_of, strongly_connected_components};

pub mod depgraph;
pub use depgraph::{DeclEntry, DepGraph};
