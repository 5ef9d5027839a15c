//! `list-panes -a` output parsing into window/tab/session snapshots.

use std::collections::BTreeMap;

use crate::error::AutomationError;
use crate::terminal::{SessionInfo, TabInfo, WindowInfo, LAYOUT_TAG, ROLE_TAG};

/// Field separator unlikely to appear in titles or commands.
pub(super) const LIST_PANES_DELIM: &str = "__DEVGRID_FIELD__";

/// Format string handed to `list-panes -F`; field order matches the parser.
pub(super) fn list_panes_format() -> String {
    [
        "#{session_id}".to_string(),
        "#{session_name}".to_string(),
        "#{window_id}".to_string(),
        "#{window_index}".to_string(),
        "#{pane_id}".to_string(),
        "#{pane_title}".to_string(),
        "#{pane_current_command}".to_string(),
        format!("#{{@{ROLE_TAG}}}"),
        format!("#{{@{LAYOUT_TAG}}}"),
    ]
    .join(LIST_PANES_DELIM)
}

const FIELD_COUNT: usize = 9;

/// Parse `list-panes -a` output.
///
/// Windows keep tmux's listing order, tabs are ordered by window index, and
/// sessions by pane id (tmux hands out pane ids in creation order).
pub(super) fn parse_list_panes_output(output: &str) -> Result<Vec<WindowInfo>, AutomationError> {
    let mut windows: Vec<WindowInfo> = Vec::new();

    for line in output.lines().filter(|line| !line.trim().is_empty()) {
        let parts: Vec<&str> = line.split(LIST_PANES_DELIM).collect();
        if parts.len() != FIELD_COUNT {
            return Err(AutomationError::UnexpectedOutput(format!(
                "list-panes field count {}, line: {line}",
                parts.len()
            )));
        }
        let tab_index = parts[3].parse::<usize>().map_err(|err| {
            AutomationError::UnexpectedOutput(format!(
                "invalid window_index `{}` in line `{line}`: {err}",
                parts[3]
            ))
        })?;

        let window_pos = match windows.iter().position(|w| w.id == parts[0]) {
            Some(pos) => pos,
            None => {
                windows.push(WindowInfo {
                    id: parts[0].to_string(),
                    name: parts[1].to_string(),
                    tabs: Vec::new(),
                });
                windows.len() - 1
            }
        };
        let window = &mut windows[window_pos];
        let tab_pos = match window.tabs.iter().position(|t| t.id == parts[2]) {
            Some(pos) => pos,
            None => {
                window.tabs.push(TabInfo {
                    id: parts[2].to_string(),
                    index: tab_index,
                    sessions: Vec::new(),
                });
                window.tabs.len() - 1
            }
        };

        let mut tags = BTreeMap::new();
        if !parts[7].is_empty() {
            tags.insert(ROLE_TAG.to_string(), parts[7].to_string());
        }
        if !parts[8].is_empty() {
            tags.insert(LAYOUT_TAG.to_string(), parts[8].to_string());
        }
        window.tabs[tab_pos].sessions.push(SessionInfo {
            id: parts[4].to_string(),
            name: session_display_name(parts[5], parts[6]),
            tags,
        });
    }

    for window in &mut windows {
        window.tabs.sort_by_key(|tab| tab.index);
        for tab in &mut window.tabs {
            tab.sessions.sort_by_key(|session| pane_ordinal(&session.id));
        }
    }
    Ok(windows)
}

/// `<title> (<job>)`, mirroring how terminal emulators label sessions.
pub(super) fn session_display_name(title: &str, command: &str) -> String {
    match (title.trim(), command.trim()) {
        ("", "") => String::new(),
        (title, "") => title.to_string(),
        ("", command) => format!("({command})"),
        (title, command) => format!("{title} ({command})"),
    }
}

fn pane_ordinal(pane_id: &str) -> u64 {
    pane_id
        .trim_start_matches('%')
        .parse::<u64>()
        .unwrap_or(u64::MAX)
}
