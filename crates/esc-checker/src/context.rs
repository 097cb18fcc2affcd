//! The checker's top-level state (spec §4, §9 "Global singleton": prelude
//! and package registry live per-checker, not process-wide).
//!
//! Trimmed relative to `tsz-checker`'s `CheckerState`/`TypeCache`: no LSP,
//! JSX, or flow-narrowing caches here — this core has no incremental
//! surface to invalidate (spec's Non-goals), so the only state worth
//! keeping across a run is the arena, the scope chain, the registry, and
//! the accumulated diagnostics.

use esc_binder::{ImportTable, PackageRegistry, ScopeArena, ScopeId};
use esc_common::{CancelToken, CheckerOptions, Diagnostic, Limits};
use esc_types::{NamespaceId, TypeArena, TypeId};
use rustc_hash::FxHashMap;

use crate::prelude;

/// One checker instance: one arena, one scope chain, one registry (spec §9).
pub struct CheckerContext {
    pub arena: TypeArena,
    pub scopes: ScopeArena,
    pub registry: PackageRegistry,
    pub options: CheckerOptions,
    pub limits: Limits,
    pub cancel: CancelToken,
    pub global_ns: NamespaceId,
    pub global_scope: ScopeId,
    /// `Symbol.customMatcher`'s identity, so extractor patterns (§4.4.2)
    /// can find it on an arbitrary constructor's member list without
    /// string-keyed lookup (unique symbols compare by identity, not name).
    pub custom_matcher_symbol: TypeId,
    /// Per-`File::id` import tables (spec §4.1: imports are file-scoped).
    pub import_tables: FxHashMap<u32, ImportTable>,
    /// Accumulated across every public operation run against this context.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckerContext {
    pub fn new(options: CheckerOptions) -> Self {
        Self::with_limits(options, Limits::default())
    }

    pub fn with_limits(options: CheckerOptions, limits: Limits) -> Self {
        let mut arena = TypeArena::new();
        let mut scopes = ScopeArena::new();
        let registry = PackageRegistry::new();

        let prelude::Prelude { global_ns, global_scope, custom_matcher_symbol } =
            prelude::install(&mut arena, &mut scopes);

        CheckerContext {
            arena,
            scopes,
            registry,
            options,
            limits,
            cancel: CancelToken::new(),
            global_ns,
            global_scope,
            custom_matcher_symbol,
            import_tables: FxHashMap::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn import_table(&self, file_id: u32) -> ImportTable {
        self.import_tables.get(&file_id).cloned().unwrap_or_default()
    }
}
