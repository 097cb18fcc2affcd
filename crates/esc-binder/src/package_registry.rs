//! Package registry: `file-path -> Namespace`, keyed by resolved package
//! path so that monorepos with multiple versions of a named package coexist
//! (spec §4.1).
//!
//! A registry is owned by one checker instance, not shared across checkers
//! (spec §9 "Global singleton": "the prelude and package registry are
//! per-checker, not process-wide").

use esc_types::NamespaceId;
use rustc_hash::FxHashMap;
use tracing::{debug, span, Level};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    EmptyKey,
    Duplicate(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::EmptyKey => write!(f, "package registry key must not be empty"),
            RegisterError::Duplicate(key) => write!(f, "package '{key}' is already registered"),
        }
    }
}

impl std::error::Error for RegisterError {}

#[derive(Default)]
pub struct PackageRegistry {
    packages: FxHashMap<String, NamespaceId>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: &str, ns: NamespaceId) -> Result<(), RegisterError> {
        let _span = span!(Level::DEBUG, "package_registry_register", key).entered();
        if key.is_empty() {
            return Err(RegisterError::EmptyKey);
        }
        if self.packages.contains_key(key) {
            return Err(RegisterError::Duplicate(key.to_string()));
        }
        debug!(key, "registered package");
        self.packages.insert(key.to_string(), ns);
        Ok(())
    }

    pub fn lookup(&self, key: &str) -> Option<NamespaceId> {
        self.packages.get(key).copied()
    }

    pub fn has(&self, key: &str) -> bool {
        self.packages.contains_key(key)
    }

    /// Reserved for internal use where absence is a programming bug, not a
    /// recoverable fault (spec §4.1).
    pub fn must_lookup(&self, key: &str) -> NamespaceId {
        self.lookup(key)
            .unwrap_or_else(|| panic!("package registry: '{key}' must be registered"))
    }
}
