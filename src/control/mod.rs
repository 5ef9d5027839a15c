//! Restart and stop of a located layout.
//!
//! Both controllers are fire-and-forget: a failed call on one session is
//! reported and the loop moves on. Nothing verifies that a process actually
//! stopped or came back.

use serde::Serialize;

mod classify;
mod restart;
mod stop;

pub use classify::{classify_session_name, runs_idle_shell, PROD_TAB_INDEX};
pub use restart::restart_window;
pub use stop::stop_window;

/// Which tabs a controller touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlScope {
    /// Leave the production monitoring tab alone.
    pub local_only: bool,
}

impl ControlScope {
    pub fn includes_tab(self, tab_index: usize) -> bool {
        !(self.local_only && tab_index == PROD_TAB_INDEX)
    }
}

/// Outcome counters of one restart/stop run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControlReport {
    /// Sessions where every call succeeded.
    pub succeeded: usize,
    /// Sessions where a call failed.
    pub failed: usize,
    /// Sessions left untouched.
    pub skipped: usize,
}
