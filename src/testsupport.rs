//! Shared test fixtures: an in-memory terminal and a recording render sink.
//!
//! `FakeTerminal` keeps a window/tab/session tree and records every
//! automation call so builder/controller tests can assert exact sequences.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use crate::error::AutomationError;
use crate::terminal::{
    CreatedTab, CreatedWindow, SessionInfo, SplitDirection, TabInfo, TerminalApp, WindowInfo,
    WindowRequest,
};
use crate::ui::RenderSink;

/// One recorded automation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateWindow {
        name: String,
        size: Option<(u16, u16)>,
    },
    CreateTab { window: String },
    Split {
        session: String,
        direction: SplitDirection,
        new_session: String,
    },
    SetName { session: String, name: String },
    SetTag {
        session: String,
        key: String,
        value: String,
    },
    SendText { session: String, text: String },
    Interrupt { session: String },
    Activate { window: String },
    SelectTab { tab: String },
}

#[derive(Debug, Default)]
struct FakeState {
    windows: Vec<WindowInfo>,
    next_id: usize,
    calls: Vec<Call>,
    failing_sessions: HashSet<String>,
}

impl FakeState {
    fn next(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn session_mut(&mut self, session_id: &str) -> Result<&mut SessionInfo, AutomationError> {
        self.windows
            .iter_mut()
            .flat_map(|w| w.tabs.iter_mut())
            .flat_map(|t| t.sessions.iter_mut())
            .find(|s| s.id == session_id)
            .ok_or_else(|| AutomationError::UnknownTarget(session_id.to_string()))
    }

    fn check_failing(&self, session_id: &str) -> Result<(), AutomationError> {
        if self.failing_sessions.contains(session_id) {
            return Err(AutomationError::CommandFailed(format!(
                "session {session_id} is gone"
            )));
        }
        Ok(())
    }
}

/// In-memory [`TerminalApp`].
#[derive(Debug, Default)]
pub struct FakeTerminal {
    state: Mutex<FakeState>,
}

impl FakeTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing windows (e.g. a layout from an earlier run).
    pub fn with_windows(windows: Vec<WindowInfo>) -> Self {
        let fake = Self::default();
        fake.state.lock().expect("fake lock").windows = windows;
        fake
    }

    /// Make every text/interrupt call to `session_id` fail.
    pub fn fail_session(&self, session_id: &str) {
        self.state
            .lock()
            .expect("fake lock")
            .failing_sessions
            .insert(session_id.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().expect("fake lock").calls.clone()
    }

    /// Text sent to one session, concatenated in order.
    pub fn sent_text(&self, session_id: &str) -> String {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SendText { session, text } if session == session_id => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn interrupts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Interrupt { session } => Some(session),
                _ => None,
            })
            .collect()
    }

    pub fn snapshot(&self) -> Vec<WindowInfo> {
        self.state.lock().expect("fake lock").windows.clone()
    }
}

#[async_trait]
impl TerminalApp for FakeTerminal {
    fn summary(&self) -> String {
        "fake terminal".to_string()
    }

    fn attach_hint(&self, window_name: &str) -> Option<String> {
        Some(format!("fake attach {window_name}"))
    }

    async fn create_window(
        &self,
        request: &WindowRequest,
    ) -> Result<CreatedWindow, AutomationError> {
        let mut state = self.state.lock().expect("fake lock");
        let window_id = state.next("w");
        let tab_id = state.next("t");
        let session_id = state.next("s");
        state.calls.push(Call::CreateWindow {
            name: request.name.clone(),
            size: request.size,
        });
        state.windows.push(WindowInfo {
            id: window_id.clone(),
            name: request.name.clone(),
            tabs: vec![TabInfo {
                id: tab_id.clone(),
                index: 0,
                sessions: vec![session(&session_id, "")],
            }],
        });
        Ok(CreatedWindow {
            window_id,
            name: request.name.clone(),
            tab_id,
            session_id,
        })
    }

    async fn create_tab(
        &self,
        window_id: &str,
        _working_dir: &Path,
    ) -> Result<CreatedTab, AutomationError> {
        let mut state = self.state.lock().expect("fake lock");
        let tab_id = state.next("t");
        let session_id = state.next("s");
        state.calls.push(Call::CreateTab {
            window: window_id.to_string(),
        });
        let window = state
            .windows
            .iter_mut()
            .find(|w| w.id == window_id)
            .ok_or_else(|| AutomationError::UnknownTarget(window_id.to_string()))?;
        let index = window.tabs.len();
        window.tabs.push(TabInfo {
            id: tab_id.clone(),
            index,
            sessions: vec![session(&session_id, "")],
        });
        Ok(CreatedTab { tab_id, session_id })
    }

    async fn split_session(
        &self,
        session_id: &str,
        direction: SplitDirection,
        _working_dir: &Path,
    ) -> Result<String, AutomationError> {
        let mut state = self.state.lock().expect("fake lock");
        let new_session = state.next("s");
        state.calls.push(Call::Split {
            session: session_id.to_string(),
            direction,
            new_session: new_session.clone(),
        });
        let tab = state
            .windows
            .iter_mut()
            .flat_map(|w| w.tabs.iter_mut())
            .find(|t| t.sessions.iter().any(|s| s.id == session_id))
            .ok_or_else(|| AutomationError::UnknownTarget(session_id.to_string()))?;
        tab.sessions.push(session(&new_session, ""));
        Ok(new_session)
    }

    async fn set_session_name(&self, session_id: &str, name: &str) -> Result<(), AutomationError> {
        let mut state = self.state.lock().expect("fake lock");
        state.calls.push(Call::SetName {
            session: session_id.to_string(),
            name: name.to_string(),
        });
        state.session_mut(session_id)?.name = name.to_string();
        Ok(())
    }

    async fn set_session_tag(
        &self,
        session_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), AutomationError> {
        let mut state = self.state.lock().expect("fake lock");
        state.calls.push(Call::SetTag {
            session: session_id.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        });
        state
            .session_mut(session_id)?
            .tags
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn send_text(&self, session_id: &str, text: &str) -> Result<(), AutomationError> {
        let mut state = self.state.lock().expect("fake lock");
        state.check_failing(session_id)?;
        state.session_mut(session_id)?;
        state.calls.push(Call::SendText {
            session: session_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_interrupt(&self, session_id: &str) -> Result<(), AutomationError> {
        let mut state = self.state.lock().expect("fake lock");
        state.check_failing(session_id)?;
        state.session_mut(session_id)?;
        state.calls.push(Call::Interrupt {
            session: session_id.to_string(),
        });
        Ok(())
    }

    async fn windows(&self) -> Result<Vec<WindowInfo>, AutomationError> {
        Ok(self.snapshot())
    }

    async fn activate_window(&self, window_id: &str) -> Result<(), AutomationError> {
        self.state
            .lock()
            .expect("fake lock")
            .calls
            .push(Call::Activate {
                window: window_id.to_string(),
            });
        Ok(())
    }

    async fn select_tab(&self, tab_id: &str) -> Result<(), AutomationError> {
        self.state
            .lock()
            .expect("fake lock")
            .calls
            .push(Call::SelectTab {
                tab: tab_id.to_string(),
            });
        Ok(())
    }
}

/// Untagged session snapshot.
pub fn session(id: &str, name: &str) -> SessionInfo {
    SessionInfo {
        id: id.to_string(),
        name: name.to_string(),
        tags: BTreeMap::new(),
    }
}

/// Session snapshot carrying role and layout tags.
pub fn tagged_session(id: &str, name: &str, role: &str, layout: &str) -> SessionInfo {
    let mut info = session(id, name);
    info.tags
        .insert(crate::terminal::ROLE_TAG.to_string(), role.to_string());
    info.tags
        .insert(crate::terminal::LAYOUT_TAG.to_string(), layout.to_string());
    info
}

pub fn tab(id: &str, index: usize, sessions: Vec<SessionInfo>) -> TabInfo {
    TabInfo {
        id: id.to_string(),
        index,
        sessions,
    }
}

pub fn window(id: &str, name: &str, tabs: Vec<TabInfo>) -> WindowInfo {
    WindowInfo {
        id: id.to_string(),
        name: name.to_string(),
        tabs,
    }
}

/// Render sink capturing lines as `kind: text`.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock").clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, kind: &str, text: &str) {
        self.lines
            .lock()
            .expect("sink lock")
            .push(format!("{kind}: {text}"));
    }
}

impl RenderSink for RecordingSink {
    fn headline(&self, text: &str) {
        self.push("headline", text);
    }

    fn step(&self, text: &str) {
        self.push("step", text);
    }

    fn success(&self, text: &str) {
        self.push("success", text);
    }

    fn detail(&self, text: &str) {
        self.push("detail", text);
    }

    fn field(&self, key: &str, value: &str) {
        self.push("field", &format!("{key}={value}"));
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.push("error", msg);
    }

    fn block(&self, text: &str) {
        self.push("block", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn fake_terminal_tracks_splits_in_creation_order() {
        let fake = FakeTerminal::new();
        let created = fake
            .create_window(&WindowRequest {
                name: "w".to_string(),
                working_dir: PathBuf::from("/tmp"),
                size: None,
                show_session_names: true,
            })
            .await
            .expect("window");
        let second = fake
            .split_session(
                &created.session_id,
                SplitDirection::SideBySide,
                Path::new("/tmp"),
            )
            .await
            .expect("split");
        let windows = fake.snapshot();
        let ids: Vec<&str> = windows[0].tabs[0].sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![created.session_id.as_str(), second.as_str()]);
    }

    #[tokio::test]
    async fn failing_sessions_reject_input() {
        let fake = FakeTerminal::with_windows(vec![window(
            "w1",
            "dev",
            vec![tab("t1", 0, vec![session("s1", "Bot (bot)")])],
        )]);
        fake.fail_session("s1");
        assert!(fake.send_interrupt("s1").await.is_err());
        assert!(fake.interrupts().is_empty());
    }

    #[test]
    fn recording_sink_prefixes_kind() {
        let sink = RecordingSink::new();
        sink.success("done");
        assert_eq!(sink.lines(), vec!["success: done".to_string()]);
    }
}
