use tracing::debug;

use super::{CommandEnv, Outcome};
use crate::config::Config;
use crate::error::DevgridError;
use crate::layout::{build_layout, layout_for, BuildOptions, CommandContext, LayoutKind};
use crate::terminal::{DisplayInfo, DisplaySource};

/// Preferred window name: `<project>-<layout>`.
pub fn window_name(config: &Config, kind: LayoutKind) -> String {
    format!("{}-{}", config.project.name, kind.name())
}

/// Build one layout in a new window sized for `display`.
pub async fn run_layout(
    env: CommandEnv<'_>,
    kind: LayoutKind,
    display: DisplayInfo,
) -> Result<Outcome, DevgridError> {
    let ctx = CommandContext::from_project(&env.config.project);
    let spec = layout_for(kind, &ctx);
    if display.source == DisplaySource::Fallback {
        env.sink.warn(&format!(
            "Could not measure the terminal, using {}x{}",
            display.columns, display.rows
        ));
    }
    debug!(
        layout = kind.name(),
        panes = spec.pane_count(),
        backend = %env.terminal.summary(),
        "building layout"
    );

    let built = build_layout(
        env.terminal,
        &spec,
        &BuildOptions {
            window_name: window_name(env.config, kind),
            working_dir: env.config.project.dir.clone(),
            size: Some(display.size()),
        },
    )
    .await?;

    let headline = match kind {
        LayoutKind::Dev => "Dev environment started!",
        LayoutKind::Full => "Full dev environment started!",
        LayoutKind::ProdWatch => "Production monitoring started!",
    };
    env.sink.success(headline);
    env.sink.field(
        "Window",
        &format!(
            "{} ({}x{}, {})",
            built.window.name,
            display.columns,
            display.rows,
            display.describe()
        ),
    );
    for (index, (tab, tab_spec)) in built.tabs.iter().zip(&spec.tabs).enumerate() {
        let labels: Vec<&str> = tab_spec.panes.iter().map(|pane| pane.label).collect();
        env.sink.detail(&format!(
            "Tab {}: {} ({})",
            index + 1,
            tab.title,
            labels.join(", ")
        ));
    }
    if kind != LayoutKind::Dev {
        env.sink.field("Server", &env.config.project.prod_server);
    }
    if let Some(hint) = env.terminal.attach_hint(&built.window.name) {
        env.sink.field("Attach", &hint);
    }
    Ok(Outcome::Success)
}
