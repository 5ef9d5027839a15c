//! tmux backend for [`TerminalApp`].
//!
//! Mapping: window = tmux session, tab = tmux window, session = tmux pane.
//! Session names are pane titles; tags are pane-scoped user options
//! (`@devgrid_role`, `@devgrid_layout`). Any tmux-compatible multiplexer that
//! accepts the same CLI works through `tmux.binary`.

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use crate::config::TmuxConfig;
use crate::error::AutomationError;
use crate::terminal::{
    CreatedTab, CreatedWindow, SplitDirection, TerminalApp, WindowInfo, WindowRequest,
};

mod parser;
mod process;

use parser::{list_panes_format, parse_list_panes_output};
use process::{ensure_success, run_process};

/// Give up suffixing window names after this many collisions.
const MAX_NAME_ATTEMPTS: usize = 50;

/// Border line showing each pane's title.
const PANE_BORDER_FORMAT: &str = " #{pane_title} ";

/// Drives a tmux server through its command-line interface.
#[derive(Debug, Clone)]
pub struct TmuxApp {
    binary: String,
    socket: Option<String>,
    /// Whether devgrid itself runs inside a tmux client.
    inside_client: bool,
}

impl TmuxApp {
    pub fn new(config: &TmuxConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            socket: config.socket.clone(),
            inside_client: attached_to_server(
                std::env::var("TMUX").ok().as_deref(),
                config.socket.as_deref(),
            ),
        }
    }

    /// Full argv (minus the binary) for one tmux invocation.
    fn argv(&self, args: &[&str]) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 2);
        if let Some(socket) = &self.socket {
            argv.push("-L".to_string());
            argv.push(socket.clone());
        }
        argv.extend(args.iter().map(|arg| arg.to_string()));
        argv
    }

    async fn run(&self, args: &[&str]) -> Result<String, AutomationError> {
        let argv = self.argv(args);
        debug!(binary = %self.binary, ?argv, "tmux call");
        let output = run_process(&self.binary, &argv).await?;
        let output = ensure_success(output, || format!("{} {}", self.binary, args.join(" ")))?;
        Ok(output.stdout)
    }

    async fn has_session(&self, name: &str) -> Result<bool, AutomationError> {
        let target = format!("={name}");
        let argv = self.argv(&["has-session", "-t", &target]);
        let output = run_process(&self.binary, &argv).await?;
        Ok(output.exit_code == 0)
    }

    /// Turn on pane-title borders for one tmux window (a tab).
    async fn show_pane_titles(&self, tab_id: &str) -> Result<(), AutomationError> {
        for args in pane_title_commands(tab_id) {
            self.run(&args).await?;
        }
        Ok(())
    }

    /// Whether the current tab of `window_id` shows pane-title borders.
    async fn shows_pane_titles(&self, window_id: &str) -> Result<bool, AutomationError> {
        let target = format!("{window_id}:");
        let argv = self.argv(&[
            "show-options",
            "-w",
            "-v",
            "-t",
            &target,
            "pane-border-status",
        ]);
        let output = run_process(&self.binary, &argv).await?;
        Ok(output.exit_code == 0 && output.stdout.trim() == "top")
    }

    async fn unique_session_name(&self, base: &str) -> Result<String, AutomationError> {
        let base = sanitize_session_name(base);
        if !self.has_session(&base).await? {
            return Ok(base);
        }
        for attempt in 2..=MAX_NAME_ATTEMPTS {
            let candidate = format!("{base}-{attempt}");
            if !self.has_session(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(AutomationError::CommandFailed(format!(
            "no free window name derived from `{base}`"
        )))
    }
}

#[async_trait]
impl TerminalApp for TmuxApp {
    fn summary(&self) -> String {
        match &self.socket {
            Some(socket) => format!("{} (socket {socket})", self.binary),
            None => self.binary.clone(),
        }
    }

    fn attach_hint(&self, window_name: &str) -> Option<String> {
        let socket = self
            .socket
            .as_deref()
            .map(|socket| format!(" -L {socket}"))
            .unwrap_or_default();
        Some(format!("{}{socket} attach -t {window_name}", self.binary))
    }

    async fn create_window(
        &self,
        request: &WindowRequest,
    ) -> Result<CreatedWindow, AutomationError> {
        let name = self.unique_session_name(&request.name).await?;
        let dir = request.working_dir.display().to_string();
        let mut args = vec![
            "new-session",
            "-d",
            "-P",
            "-F",
            "#{session_id}\t#{window_id}\t#{pane_id}",
            "-s",
            name.as_str(),
            "-c",
            dir.as_str(),
        ];
        let size = request.size.map(|(w, h)| (w.to_string(), h.to_string()));
        if let Some((width, height)) = &size {
            args.extend(["-x", width.as_str(), "-y", height.as_str()]);
        }
        let stdout = self.run(&args).await?;
        let (window_id, tab_id, session_id) = parse_three_ids(&stdout)?;

        if request.show_session_names {
            self.show_pane_titles(&tab_id).await?;
        }

        Ok(CreatedWindow {
            window_id,
            name,
            tab_id,
            session_id,
        })
    }

    async fn create_tab(
        &self,
        window_id: &str,
        working_dir: &Path,
    ) -> Result<CreatedTab, AutomationError> {
        // New tabs copy the border setting of the tab they join.
        let show_titles = self.shows_pane_titles(window_id).await?;
        let target = format!("{window_id}:");
        let dir = working_dir.display().to_string();
        let stdout = self
            .run(&[
                "new-window",
                "-d",
                "-P",
                "-F",
                "#{window_id}\t#{pane_id}",
                "-t",
                &target,
                "-c",
                &dir,
            ])
            .await?;
        let mut fields = stdout.trim().split('\t');
        let created = match (fields.next(), fields.next()) {
            (Some(tab_id), Some(session_id)) if !tab_id.is_empty() && !session_id.is_empty() => {
                CreatedTab {
                    tab_id: tab_id.to_string(),
                    session_id: session_id.to_string(),
                }
            }
            _ => {
                return Err(AutomationError::UnexpectedOutput(format!(
                    "new-window returned `{}`",
                    stdout.trim()
                )));
            }
        };
        if show_titles {
            self.show_pane_titles(&created.tab_id).await?;
        }
        Ok(created)
    }

    async fn split_session(
        &self,
        session_id: &str,
        direction: SplitDirection,
        working_dir: &Path,
    ) -> Result<String, AutomationError> {
        let flag = match direction {
            SplitDirection::SideBySide => "-h",
            SplitDirection::Stacked => "-v",
        };
        let dir = working_dir.display().to_string();
        let stdout = self
            .run(&[
                "split-window",
                "-d",
                flag,
                "-P",
                "-F",
                "#{pane_id}",
                "-t",
                session_id,
                "-c",
                &dir,
            ])
            .await?;
        let pane_id = stdout.trim();
        if pane_id.is_empty() {
            return Err(AutomationError::UnexpectedOutput(
                "split-window returned no pane id".to_string(),
            ));
        }
        Ok(pane_id.to_string())
    }

    async fn set_session_name(&self, session_id: &str, name: &str) -> Result<(), AutomationError> {
        self.run(&["select-pane", "-t", session_id, "-T", name])
            .await
            .map(drop)
    }

    async fn set_session_tag(
        &self,
        session_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), AutomationError> {
        let option = format!("@{key}");
        self.run(&["set-option", "-p", "-t", session_id, &option, value])
            .await
            .map(drop)
    }

    async fn send_text(&self, session_id: &str, text: &str) -> Result<(), AutomationError> {
        let mut segments = text.split('\n').peekable();
        while let Some(segment) = segments.next() {
            if !segment.is_empty() {
                self.run(&["send-keys", "-t", session_id, "-l", segment])
                    .await?;
            }
            if segments.peek().is_some() {
                self.run(&["send-keys", "-t", session_id, "Enter"]).await?;
            }
        }
        Ok(())
    }

    async fn send_interrupt(&self, session_id: &str) -> Result<(), AutomationError> {
        self.run(&["send-keys", "-t", session_id, "C-c"])
            .await
            .map(drop)
    }

    async fn windows(&self) -> Result<Vec<WindowInfo>, AutomationError> {
        let format = list_panes_format();
        match self.run(&["list-panes", "-a", "-F", &format]).await {
            Ok(stdout) => parse_list_panes_output(&stdout),
            Err(AutomationError::CommandFailed(msg)) if is_no_server_error(&msg) => {
                debug!(%msg, "no tmux server, treating as zero windows");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    async fn activate_window(&self, window_id: &str) -> Result<(), AutomationError> {
        if !self.inside_client {
            // Nothing to switch; the caller prints the attach hint.
            return Ok(());
        }
        self.run(&["switch-client", "-t", window_id]).await.map(drop)
    }

    async fn select_tab(&self, tab_id: &str) -> Result<(), AutomationError> {
        self.run(&["select-window", "-t", tab_id]).await.map(drop)
    }
}

fn parse_three_ids(stdout: &str) -> Result<(String, String, String), AutomationError> {
    let fields: Vec<&str> = stdout.trim().split('\t').collect();
    match fields.as_slice() {
        [a, b, c] if !a.is_empty() && !b.is_empty() && !c.is_empty() => {
            Ok((a.to_string(), b.to_string(), c.to_string()))
        }
        _ => Err(AutomationError::UnexpectedOutput(format!(
            "new-session returned `{}`",
            stdout.trim()
        ))),
    }
}

/// `set-option` calls that put each pane's title in its top border.
fn pane_title_commands(tab_id: &str) -> [[&str; 6]; 2] {
    [
        [
            "set-option",
            "-w",
            "-t",
            tab_id,
            "pane-border-status",
            "top",
        ],
        [
            "set-option",
            "-w",
            "-t",
            tab_id,
            "pane-border-format",
            PANE_BORDER_FORMAT,
        ],
    ]
}

/// Whether the `TMUX` client variable points at the server devgrid drives.
///
/// `TMUX` is `<socket path>,<pid>,<session>`; the socket file is named after
/// the `-L` value, `default` without one.
fn attached_to_server(tmux_env: Option<&str>, socket: Option<&str>) -> bool {
    let Some(value) = tmux_env.filter(|value| !value.is_empty()) else {
        return false;
    };
    let path = value.split(',').next().unwrap_or_default();
    let server = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    server == socket.unwrap_or("default")
}

/// tmux rejects `.` and `:` in session names.
fn sanitize_session_name(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|ch| {
            if matches!(ch, '.' | ':') || ch.is_whitespace() {
                '-'
            } else {
                ch
            }
        })
        .collect();
    if cleaned.is_empty() {
        "devgrid".to_string()
    } else {
        cleaned
    }
}

pub(crate) fn is_no_server_error(error: &str) -> bool {
    let normalized = error.to_ascii_lowercase();
    normalized.contains("no server running")
        || normalized.contains("no current target")
        || normalized.contains("no sessions")
        || normalized.contains("error connecting to")
}
