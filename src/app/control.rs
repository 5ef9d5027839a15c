use serde::Serialize;
use tracing::debug;

use super::{CommandEnv, Outcome};
use crate::control::{restart_window, stop_window, ControlScope};
use crate::error::DevgridError;
use crate::layout::{layout_for, restart_layout, CommandContext, LayoutKind, LayoutSpec};
use crate::locator::{locate, LocateStrategy, RESTART_STRATEGIES, STOP_STRATEGIES};
use crate::terminal::{WindowInfo, LAYOUT_TAG, ROLE_TAG};

/// Interrupt, clear and re-seed every pane of the open layout.
pub async fn run_restart(
    env: CommandEnv<'_>,
    scope: ControlScope,
) -> Result<Outcome, DevgridError> {
    let windows = env.terminal.windows().await?;
    let Some(located) = locate(&windows, &RESTART_STRATEGIES) else {
        env.sink.error("Dev window not found!");
        env.sink
            .detail("Run 'devgrid full' first to create the dev environment.");
        return Ok(Outcome::LayoutNotFound);
    };
    debug!(window = %located.window.id, strategy = ?located.strategy, "located layout");

    env.sink.headline("🔄 Restarting dev environment...");
    let ctx = CommandContext::from_project(&env.config.project);
    let report = restart_window(
        env.terminal,
        located.window,
        &command_tables(located.window, &ctx),
        scope,
        &env.config.timing,
        env.sink,
    )
    .await?;

    env.sink
        .success(&format!("Restarted {} sessions!", report.succeeded));
    if scope.local_only {
        env.sink
            .detail("(Used --local-only, prod monitoring was skipped)");
    }
    Ok(Outcome::Success)
}

/// Ctrl+C every recognized pane of the open layout.
pub async fn run_stop(env: CommandEnv<'_>, scope: ControlScope) -> Result<Outcome, DevgridError> {
    let windows = env.terminal.windows().await?;
    let Some(located) = locate(&windows, &STOP_STRATEGIES) else {
        env.sink.error("Dev window not found!");
        env.sink.detail("No dev environment to stop.");
        return Ok(Outcome::LayoutNotFound);
    };
    debug!(window = %located.window.id, strategy = ?located.strategy, "located layout");

    env.sink.headline("🛑 Stopping dev environment...");
    let ctx = CommandContext::from_project(&env.config.project);
    let report = stop_window(
        env.terminal,
        located.window,
        &command_tables(located.window, &ctx),
        scope,
        &env.config.timing,
        env.sink,
    )
    .await?;

    env.sink
        .success(&format!("Stopped {} sessions!", report.succeeded));
    if scope.local_only {
        env.sink
            .detail("(Used --local-only, prod monitoring was skipped)");
    } else {
        env.sink
            .detail("(Prod containers still running, only monitoring stopped)");
    }
    Ok(Outcome::Success)
}

/// Layout name stored on the window's sessions, if any.
fn layout_tag(window: &WindowInfo) -> Option<&str> {
    window
        .tabs
        .iter()
        .flat_map(|tab| &tab.sessions)
        .find_map(|session| session.tag(LAYOUT_TAG))
}

/// Command tables of the layout `window` was built from; `full` when untagged.
fn command_tables(window: &WindowInfo, ctx: &CommandContext) -> LayoutSpec {
    match layout_tag(window).and_then(LayoutKind::from_name) {
        Some(kind) => {
            debug!(layout = kind.name(), "using tagged layout tables");
            layout_for(kind, ctx)
        }
        None => restart_layout(ctx),
    }
}

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    backend: String,
    strategy: LocateStrategy,
    layout: Option<&'a str>,
    window: &'a WindowInfo,
}

/// Describe the open layout, as text or JSON.
pub async fn run_status(env: CommandEnv<'_>, json: bool) -> Result<Outcome, DevgridError> {
    let windows = env.terminal.windows().await?;
    let Some(located) = locate(&windows, &STOP_STRATEGIES) else {
        if json {
            env.sink.block("null");
        } else {
            env.sink.error("Dev window not found!");
        }
        return Ok(Outcome::LayoutNotFound);
    };

    let window = located.window;
    let layout = layout_tag(window);

    if json {
        let report = StatusReport {
            backend: env.terminal.summary(),
            strategy: located.strategy,
            layout,
            window,
        };
        let text = serde_json::to_string_pretty(&report)?;
        env.sink.block(&text);
        return Ok(Outcome::Success);
    }

    env.sink.headline(&format!("📋 {}", window.name));
    env.sink.field("Backend", &env.terminal.summary());
    env.sink.field("Matched by", &format!("{:?}", located.strategy));
    env.sink.field(
        "Layout",
        layout
            .and_then(LayoutKind::from_name)
            .map(LayoutKind::name)
            .unwrap_or("unknown"),
    );
    for (index, tab) in window.tabs.iter().enumerate() {
        env.sink.detail(&format!(
            "Tab {}: {} sessions",
            index + 1,
            tab.sessions.len()
        ));
        for session in &tab.sessions {
            let role = session.tag(ROLE_TAG).unwrap_or("-");
            env.sink.step(&format!("{role:<12} {}", session.name));
        }
    }
    Ok(Outcome::Success)
}
