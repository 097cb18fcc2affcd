//! Diagnostic types emitted by the checker.
//!
//! Diagnostics are values, not control-flow traps (spec §7): every inference
//! routine returns its result alongside a `Vec<Diagnostic>` rather than
//! raising. `DiagnosticKind` is the closed set spec §6.3 enumerates.

use serde::Serialize;

use crate::span::Span;

/// Diagnostic category, following the teacher's `DiagnosticCategory` shape.
/// This core currently only produces `Error` and `Suggestion` (the latter
/// for shadowing hints, §1 of SPEC_FULL.md), but the enum is carried in full
/// so a downstream reporter can treat this crate's diagnostics uniformly
/// with any other tsz-family checker output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Suggestion,
    Message,
}

/// The closed set of diagnostic kinds this checker core emits (spec §6.3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    CannotAssign,
    UnknownType,
    UnknownMember,
    UnknownIdentifier,
    DuplicateBinding,
    ArityMismatch,
    RecursiveType,
    InvalidTypeArg,
    Cancelled,
    Other,
}

/// Related information for a diagnostic (e.g. "Foo declared here").
#[derive(Clone, Debug, Serialize)]
pub struct DiagnosticRelatedInfo {
    pub span: Span,
    pub message: String,
}

/// A type-checking diagnostic, carrying its provenance and any related spans.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub category: DiagnosticCategory,
    pub message: String,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<DiagnosticRelatedInfo>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            kind,
            category: DiagnosticCategory::Error,
            message: message.into(),
            span,
            related: Vec::new(),
        }
    }

    pub fn suggestion(message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Other,
            category: DiagnosticCategory::Suggestion,
            message: message.into(),
            span,
            related: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(DiagnosticRelatedInfo { span, message: message.into() });
        self
    }

    pub fn cancelled() -> Self {
        Diagnostic::new(DiagnosticKind::Cancelled, "type checking was cancelled", Span::dummy())
    }
}
