//! Common types shared across the esc type checker crates.
//!
//! This crate provides foundational types used by `esc-ast`, `esc-types`,
//! `esc-binder`, and `esc-checker`:
//! - Source spans (`Span`, `Spanned`, `SpanBuilder`)
//! - Checker-wide limits and cancellation (`limits`, `cancel`)
//! - The diagnostic catalogue (`diagnostics`)
//! - Checker configuration (`checker_options`)

pub mod span;
pub use span::{Span, SpanBuilder, Spanned};

pub mod position;
pub use position::{Location, Position};

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticKind, DiagnosticRelatedInfo};

pub mod limits;
pub use limits::Limits;

pub mod checker_options;
pub use checker_options::CheckerOptions;

pub mod cancel;
pub use cancel::{CancelToken, Cancelled};
