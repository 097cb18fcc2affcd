//! Cancellation handle threaded through every public entry point (spec §4.2,
//! §5): `InferScript`/`InferModule`/`InferDepGraph`/`InferComponent` accept
//! one of these and must check it at component boundaries, before each
//! top-level declaration, and before each expression-level recursion in
//! long-running constructs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Marker error returned by [`CancelToken::check`] once cancellation has
/// been requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cancelled;

/// A cheaply-cloneable cancellation flag.
///
/// A single checker run shares one `CancelToken`; the caller (outside this
/// core's scope — see spec §1) flips it from another thread or a deadline
/// timer. The core never spawns threads itself (spec §5: single-threaded
/// cooperative within one checker instance).
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken { flag: Arc::new(AtomicBool::new(false)) }
    }

    /// A token that can never be cancelled, for call sites (tests, one-shot
    /// scripts) that don't need the machinery.
    pub fn never() -> Self {
        CancelToken::new()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Returns `Err(Cancelled)` if cancellation has been requested.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
