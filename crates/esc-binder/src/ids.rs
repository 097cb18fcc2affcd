//! Dense small-integer identifiers for declarations (spec §3.4).

/// Indexes into a `DepGraph`'s flattened declaration list. Dense and
/// contiguous so `DeclDeps`/`DeclNamespace`/`DeclFile` can be plain `Vec`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
