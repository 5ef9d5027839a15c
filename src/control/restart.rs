use tokio::time::sleep;
use tracing::debug;

use super::{ControlReport, ControlScope};
use crate::config::TimingConfig;
use crate::error::AutomationError;
use crate::layout::{LayoutSpec, PaneSpec, TabLayout};
use crate::terminal::{SessionInfo, TerminalApp, WindowInfo, ROLE_TAG};
use crate::ui::RenderSink;

/// Re-seed every session of `window` from `layout`'s command tables.
///
/// Tab `t` uses `layout.tabs[t]`. A session whose role tag names a pane in
/// that table gets that pane; otherwise session `i` gets entry `i` when one
/// exists. Sessions past the table, and tabs without a table, are untouched.
pub async fn restart_window(
    app: &dyn TerminalApp,
    window: &WindowInfo,
    layout: &LayoutSpec,
    scope: ControlScope,
    timing: &TimingConfig,
    sink: &dyn RenderSink,
) -> Result<ControlReport, AutomationError> {
    let mut report = ControlReport::default();

    for (tab_index, tab) in window.tabs.iter().enumerate() {
        let Some(table) = layout.tabs.get(tab_index) else {
            debug!(tab_index, "no command table for tab, skipping");
            report.skipped += tab.sessions.len();
            continue;
        };
        if !scope.includes_tab(tab_index) {
            debug!(tab_index, "tab excluded by --local-only");
            report.skipped += tab.sessions.len();
            continue;
        }
        debug!(
            tab_index,
            sessions = tab.sessions.len(),
            expected = table.panes.len(),
            "restarting tab"
        );

        for (position, session) in tab.sessions.iter().enumerate() {
            let Some(pane) = pane_for_session(table, session, position) else {
                debug!(position, session = %session.id, "no table entry, untouched");
                report.skipped += 1;
                continue;
            };
            sink.step(&format!("↻ {}...", pane.label));
            match restart_session(app, &session.id, &pane.command, timing).await {
                Ok(()) => report.succeeded += 1,
                Err(err) => {
                    sink.warn(&format!("Error restarting {}: {err}", pane.label));
                    report.failed += 1;
                }
            }
        }
    }

    app.activate_window(&window.id).await?;
    if let Some(first) = window.tabs.first() {
        app.select_tab(&first.id).await?;
    }
    Ok(report)
}

fn pane_for_session<'a>(
    table: &'a TabLayout,
    session: &SessionInfo,
    position: usize,
) -> Option<&'a PaneSpec> {
    if let Some(pane) = session
        .tag(ROLE_TAG)
        .and_then(|role| table.pane_for_role(role))
    {
        debug!(position, role = pane.role, "matched by role tag");
        return Some(pane);
    }
    let pane = table.panes.get(position)?;
    debug!(position, role = pane.role, "matched by position");
    Some(pane)
}

/// Ctrl+C, settle, `clear`, settle, command.
async fn restart_session(
    app: &dyn TerminalApp,
    session_id: &str,
    command: &str,
    timing: &TimingConfig,
) -> Result<(), AutomationError> {
    app.send_interrupt(session_id).await?;
    sleep(timing.interrupt_settle()).await;
    app.send_text(session_id, "clear\n").await?;
    sleep(timing.clear_settle()).await;
    app.send_text(session_id, &format!("{command}\n")).await
}
