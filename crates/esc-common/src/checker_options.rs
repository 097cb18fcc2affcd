//! Compiler options for type checking.
//!
//! Lives in `esc-common` so that both `esc-types` and `esc-checker` can
//! reference `CheckerOptions` without a circular dependency, matching
//! `tsz_common::checker_options`.

/// Configuration flags that affect checker semantics. Loading these from a
/// config file is out of scope (spec §1); this struct is the shape the core
/// consumes once some external driver has populated it.
#[derive(Debug, Clone, Default)]
pub struct CheckerOptions {
    /// When true, a default value in an object pattern widens the
    /// property's type to `T | undefined` only when `T` already admits
    /// `undefined` (spec §4.4.2). When false, defaults never widen.
    pub strict_null_checks: bool,
    /// When true, `val` bindings without an explicit annotation widen their
    /// literal initializer to its base primitive (SPEC_FULL.md §2).
    /// `declare val` and explicitly annotated bindings never widen.
    pub widen_literal_initializers: bool,
}

impl CheckerOptions {
    pub fn strict() -> Self {
        CheckerOptions { strict_null_checks: true, widen_literal_initializers: true }
    }
}
