//! The read-only slice of `CheckerContext` inference needs threaded
//! through every call — kept separate from the mutable `arena`/`scopes` so
//! the many inference functions below don't need a dozen positional
//! parameters apiece.

use esc_binder::PackageRegistry;
use esc_common::{CancelToken, CheckerOptions, Limits};
use esc_types::TypeId;

pub struct Env<'a> {
    pub registry: &'a PackageRegistry,
    pub options: &'a CheckerOptions,
    pub limits: &'a Limits,
    pub cancel: &'a CancelToken,
    pub custom_matcher_symbol: TypeId,
}

impl<'a> Env<'a> {
    pub fn new(
        registry: &'a PackageRegistry,
        options: &'a CheckerOptions,
        limits: &'a Limits,
        cancel: &'a CancelToken,
        custom_matcher_symbol: TypeId,
    ) -> Self {
        Env { registry, options, limits, cancel, custom_matcher_symbol }
    }
}
