//! Terminal-application automation contract.
//!
//! The layout builder, locator and controllers only talk to [`TerminalApp`].
//! The shipped backend drives tmux; tests use an in-memory fake.
//!
//! Vocabulary follows the terminal-emulator model: a *window* owns *tabs*,
//! a tab owns *sessions* (split panes) in creation order.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::AutomationError;

pub mod display;
pub mod tmux;

pub use display::{detect_display, DisplayInfo, DisplaySource};
pub use tmux::TmuxApp;

/// Pane attribute holding the stable role id of a created session.
pub const ROLE_TAG: &str = "devgrid_role";
/// Pane attribute holding the layout name a session was created by.
pub const LAYOUT_TAG: &str = "devgrid_layout";

/// How a new pane is carved out of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitDirection {
    /// New pane to the right of the source (vertical divider).
    SideBySide,
    /// New pane below the source (horizontal divider).
    Stacked,
}

/// Parameters for a newly created window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    /// Preferred window name; backends may suffix it to stay unique.
    pub name: String,
    pub working_dir: PathBuf,
    /// Initial size in cells, when known.
    pub size: Option<(u16, u16)>,
    /// Show each pane's name in its border.
    pub show_session_names: bool,
}

/// Handles returned when a window is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWindow {
    pub window_id: String,
    /// Final window name after any uniqueness suffix.
    pub name: String,
    pub tab_id: String,
    pub session_id: String,
}

/// Handles returned when a tab is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTab {
    pub tab_id: String,
    pub session_id: String,
}

/// Snapshot of one live window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowInfo {
    pub id: String,
    pub name: String,
    pub tabs: Vec<TabInfo>,
}

/// Snapshot of one tab; `sessions` are in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabInfo {
    pub id: String,
    pub index: usize,
    pub sessions: Vec<SessionInfo>,
}

/// Snapshot of one session (pane).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub id: String,
    /// Display name including the running job, e.g. `🤖 Bot (node)`.
    pub name: String,
    /// Pane-level attributes such as [`ROLE_TAG`].
    pub tags: BTreeMap<String, String>,
}

impl SessionInfo {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl WindowInfo {
    /// Total number of sessions across all tabs.
    pub fn session_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.sessions.len()).sum()
    }
}

/// Automation API of a terminal application.
///
/// Every call is awaited before the next one is issued; implementations do
/// not need to be reentrant.
#[async_trait]
pub trait TerminalApp: Send + Sync {
    /// Human-readable backend summary for status output.
    fn summary(&self) -> String;
    /// Command a user runs to bring a window to the foreground, if any.
    fn attach_hint(&self, window_name: &str) -> Option<String>;
    /// Create a window with one tab holding one session.
    async fn create_window(
        &self,
        request: &WindowRequest,
    ) -> Result<CreatedWindow, AutomationError>;
    /// Append a tab holding one session to `window_id`.
    async fn create_tab(
        &self,
        window_id: &str,
        working_dir: &Path,
    ) -> Result<CreatedTab, AutomationError>;
    /// Split `session_id`, returning the new session id.
    async fn split_session(
        &self,
        session_id: &str,
        direction: SplitDirection,
        working_dir: &Path,
    ) -> Result<String, AutomationError>;
    async fn set_session_name(&self, session_id: &str, name: &str) -> Result<(), AutomationError>;
    /// Store a pane-level attribute readable through [`TerminalApp::windows`].
    async fn set_session_tag(
        &self,
        session_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), AutomationError>;
    /// Type `text` into the session; `\n` presses Enter.
    async fn send_text(&self, session_id: &str, text: &str) -> Result<(), AutomationError>;
    /// Send Ctrl+C.
    async fn send_interrupt(&self, session_id: &str) -> Result<(), AutomationError>;
    /// Snapshot all windows in application iteration order.
    async fn windows(&self) -> Result<Vec<WindowInfo>, AutomationError>;
    async fn activate_window(&self, window_id: &str) -> Result<(), AutomationError>;
    async fn select_tab(&self, tab_id: &str) -> Result<(), AutomationError>;
}
