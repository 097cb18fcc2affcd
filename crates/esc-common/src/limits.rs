//! Centralized thresholds the checker must respect to guarantee termination
//! (spec §8.1: `expandType(t, d)` terminates for every input in bounded `d`
//! steps) and to avoid runaway scope walks on malformed input.

/// Tunable limits, threaded through the checker context.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Maximum recursion depth for alias expansion (spec §4.3.5).
    pub max_expand_depth: u32,
    /// Maximum number of scope-chain hops before giving up on a lookup.
    /// Guards against a malformed scope graph (a cycle in parent links)
    /// turning a lookup into an infinite loop.
    pub max_scope_walk: u32,
    /// Maximum number of distributive branches a conditional/template-literal
    /// expansion may produce before it is truncated (cartesian products over
    /// unions can blow up combinatorially).
    pub max_distribution_branches: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { max_expand_depth: 50, max_scope_walk: 10_000, max_distribution_branches: 4096 }
    }
}
