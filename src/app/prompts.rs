use std::io::{BufRead, Write};

use super::Outcome;
use crate::config::Config;
use crate::error::DevgridError;
use crate::ui::{
    ask, confirm_box, render_help_table, sync_box, Choices, Decision, RenderSink, Theme, Tone,
    CONFIRM_CHOICES, SYNC_CHOICES,
};

/// Show the confirmation box and ask; `Cancelled` unless explicitly accepted.
pub async fn run_confirm(
    config: &Config,
    sink: &dyn RenderSink,
    title: Option<&str>,
    description: Option<&str>,
    danger: bool,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Outcome, DevgridError> {
    let (Some(title), Some(description)) = (title, description) else {
        sink.block("Usage: devgrid confirm 'TITLE' 'DESCRIPTION' [--danger]");
        return Ok(Outcome::Usage);
    };
    let theme = Theme::new(config.display.color);
    sink.block(&format!(
        "\n{}\n",
        confirm_box(title, description, danger, theme)
    ));
    decide(config, sink, theme, &CONFIRM_CHOICES, input, output).await
}

/// Database-sync warning: PROD data replaces DEV data.
pub async fn run_confirm_sync(
    config: &Config,
    sink: &dyn RenderSink,
    prod_server: Option<&str>,
    prod_dir: Option<&str>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Outcome, DevgridError> {
    let theme = Theme::new(config.display.color);
    let rendered = sync_box(
        prod_server.unwrap_or(&config.project.prod_server),
        prod_dir.unwrap_or(&config.project.prod_dir),
        &config.project.name,
        theme,
    );
    sink.block(&format!("\n{rendered}\n"));
    decide(config, sink, theme, &SYNC_CHOICES, input, output).await
}

pub fn run_help_table(config: &Config, sink: &dyn RenderSink) -> Outcome {
    let theme = Theme::new(config.display.color);
    sink.block(&render_help_table(&config.project.name, theme));
    Outcome::Success
}

async fn decide(
    config: &Config,
    sink: &dyn RenderSink,
    theme: Theme,
    choices: &Choices,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Outcome, DevgridError> {
    match ask(&config.prompt.chooser, choices, input, output).await? {
        Decision::Accepted => Ok(Outcome::Success),
        Decision::Cancelled => {
            sink.block(&format!("{} Cancelled.", theme.paint(Tone::Success, "✓")));
            Ok(Outcome::Cancelled)
        }
    }
}
