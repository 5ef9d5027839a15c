//! Command orchestration shared by the `devgrid` binary.
//!
//! Each `run_*` function takes its collaborators explicitly (terminal backend,
//! render sink, config) and returns an [`Outcome`] the binary maps to an exit
//! code. Errors that abort a command come back as [`DevgridError`].

use crate::config::Config;
use crate::terminal::TerminalApp;
use crate::ui::RenderSink;

mod control;
mod layouts;
mod prompts;

pub use control::{run_restart, run_status, run_stop};
pub use layouts::{run_layout, window_name};
pub use prompts::{run_confirm, run_confirm_sync, run_help_table};

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The user declined a confirmation.
    Cancelled,
    /// No devgrid layout is open.
    LayoutNotFound,
    /// Required arguments were missing; usage was printed.
    Usage,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Cancelled | Self::LayoutNotFound | Self::Usage => 1,
        }
    }
}

/// Collaborators for commands that talk to the terminal application.
#[derive(Clone, Copy)]
pub struct CommandEnv<'a> {
    pub terminal: &'a dyn TerminalApp,
    pub sink: &'a dyn RenderSink,
    pub config: &'a Config,
}
