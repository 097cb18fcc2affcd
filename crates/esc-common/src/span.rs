//! Span — source location tracking for AST nodes, types, and diagnostics.
//!
//! A `Span` represents a range of source code by byte offsets. Spans are
//! small (8 bytes) and cheap to copy; every `Type` and `Decl`/`Expr`/`Pat`
//! node carries one as its *provenance*, used only for diagnostics.

use serde::{Deserialize, Serialize};

/// A span of source code, represented as a half-open byte range `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// An empty span at the given position.
    #[inline]
    pub const fn at(pos: u32) -> Self {
        Span { start: pos, end: pos }
    }

    /// A dummy span for synthetic nodes (placeholder bindings, built-ins).
    #[inline]
    pub const fn dummy() -> Self {
        Span { start: u32::MAX, end: u32::MAX }
    }

    #[inline]
    pub const fn is_dummy(&self) -> bool {
        self.start == u32::MAX && self.end == u32::MAX
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans to create a span covering both.
    #[inline]
    pub const fn merge(&self, other: Span) -> Span {
        let start = if self.start < other.start { self.start } else { other.start };
        let end = if self.end > other.end { self.end } else { other.end };
        Span { start, end }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A trait for types that carry a source span.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// Helper for building spans while walking a tree (e.g. merging a
/// declaration's span from its first and last child).
#[derive(Clone, Copy, Debug)]
pub struct SpanBuilder {
    start: u32,
}

impl SpanBuilder {
    #[inline]
    pub const fn start(pos: u32) -> Self {
        SpanBuilder { start: pos }
    }

    #[inline]
    pub const fn end(&self, pos: u32) -> Span {
        Span::new(self.start, pos)
    }
}

