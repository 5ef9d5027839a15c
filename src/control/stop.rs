use tokio::time::sleep;
use tracing::debug;

use super::classify::{classify_session_name, runs_idle_shell};
use super::{ControlReport, ControlScope};
use crate::config::TimingConfig;
use crate::error::AutomationError;
use crate::layout::LayoutSpec;
use crate::terminal::{SessionInfo, TerminalApp, WindowInfo, ROLE_TAG};
use crate::ui::RenderSink;

/// Ctrl+C every recognized session of `window`.
///
/// Sessions are recognized by name pattern first, then by role tag (labels
/// come from `labels`). A role tag also wins over the pattern when the pane
/// only runs an idle shell. Unrecognized sessions are left alone.
pub async fn stop_window(
    app: &dyn TerminalApp,
    window: &WindowInfo,
    labels: &LayoutSpec,
    scope: ControlScope,
    timing: &TimingConfig,
    sink: &dyn RenderSink,
) -> Result<ControlReport, AutomationError> {
    let mut report = ControlReport::default();

    for (tab_index, tab) in window.tabs.iter().enumerate() {
        if !scope.includes_tab(tab_index) {
            debug!(tab_index, "tab excluded by --local-only");
            report.skipped += tab.sessions.len();
            continue;
        }
        for session in &tab.sessions {
            let Some(label) = label_for(session, tab_index, labels) else {
                debug!(session = %session.id, name = %session.name, "not a devgrid session");
                report.skipped += 1;
                continue;
            };
            debug!(name = %session.name, label, "stopping");
            sink.step(&format!("⏹ {label}..."));
            match app.send_interrupt(&session.id).await {
                Ok(()) => {
                    sleep(timing.stop_settle()).await;
                    report.succeeded += 1;
                }
                Err(err) => {
                    sink.warn(&format!("Error stopping {label}: {err}"));
                    report.failed += 1;
                }
            }
        }
    }
    Ok(report)
}

fn label_for(
    session: &SessionInfo,
    tab_index: usize,
    labels: &LayoutSpec,
) -> Option<&'static str> {
    let tagged = session
        .tag(ROLE_TAG)
        .and_then(|role| labels.label_for_role(role));
    match classify_session_name(&session.name, tab_index) {
        Some(_) if tagged.is_some() && runs_idle_shell(&session.name) => tagged,
        Some(label) => Some(label),
        None => tagged,
    }
}
