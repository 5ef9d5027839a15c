//! Confirmation dialogs guarding dangerous make targets.
//!
//! A red box explains the action, then an external chooser (`gum`) asks for
//! the decision. When the chooser is not installed a `[y/N]` question on
//! stdin takes its place.

use std::io::{BufRead, ErrorKind, Write};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::frame::BoxFrame;
use super::theme::{Theme, Tone};
use crate::error::PromptError;

/// Inner width of the generic confirmation box.
pub const CONFIRM_BOX_WIDTH: usize = 50;
/// Inner width of the database-sync box.
pub const SYNC_BOX_WIDTH: usize = 56;

/// Menu entries and fallback question for one dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choices {
    pub cancel: &'static str,
    pub accept: &'static str,
    pub fallback_question: &'static str,
}

pub const CONFIRM_CHOICES: Choices = Choices {
    cancel: "❌ Cancel",
    accept: "✅ Continue",
    fallback_question: "Continue? [y/N] ",
};

pub const SYNC_CHOICES: Choices = Choices {
    cancel: "❌ Cancel",
    accept: "✅ Yes, sync",
    fallback_question: "Really do it? [y/N] ",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Cancelled,
}

/// Description lines: split on the two-character sequence `\n` (as typed in
/// a Makefile) and on real newlines.
pub fn description_lines(description: &str) -> Vec<&str> {
    description
        .split("\\n")
        .flat_map(|chunk| chunk.split('\n'))
        .collect()
}

/// Box for `confirm TITLE DESCRIPTION`.
pub fn confirm_box(title: &str, description: &str, danger: bool, theme: Theme) -> String {
    let frame = BoxFrame::new(CONFIRM_BOX_WIDTH, theme);
    let title_tone = if danger { Tone::Danger } else { Tone::Strong };
    let mut lines = vec![
        frame.top(),
        frame.blank(),
        frame.line(&theme.bold(title_tone, &format!("⚠️  {title}"))),
        frame.blank(),
        frame.separator(),
        frame.blank(),
    ];
    lines.extend(
        description_lines(description)
            .into_iter()
            .map(|line| frame.line(&theme.paint(Tone::Danger, line))),
    );
    lines.push(frame.blank());
    lines.push(frame.bottom());
    lines.join("\n")
}

/// Box for `confirm-sync`: PROD database replaces DEV data.
pub fn sync_box(prod_server: &str, prod_dir: &str, project_name: &str, theme: Theme) -> String {
    let frame = BoxFrame::new(SYNC_BOX_WIDTH, theme);
    let prod = theme.paint(Tone::Highlight, "PROD");
    let dev = theme.paint(Tone::Caution, "DEV");
    [
        frame.top(),
        frame.blank(),
        frame.line(&theme.bold(Tone::Strong, "⚠️  WARNING!")),
        frame.blank(),
        frame.separator(),
        frame.blank(),
        frame.line(&format!("You are about to download the {prod} database")),
        frame.line(&format!("and load it into {dev}.")),
        frame.blank(),
        frame.line(&theme.paint(
            Tone::Danger,
            "All current data in the DEV database is lost",
        )),
        frame.line(&theme.paint(
            Tone::Danger,
            "and replaced with production data!",
        )),
        frame.blank(),
        frame.separator(),
        frame.line(&format!(
            "{} {}",
            theme.paint(Tone::Muted, "PROD:"),
            theme.paint(Tone::Highlight, &format!("{prod_server}:{prod_dir}"))
        )),
        frame.line(&format!(
            "{}  {}",
            theme.paint(Tone::Muted, "DEV:"),
            theme.paint(Tone::Caution, &format!("localhost:5433/{project_name}_dev"))
        )),
        frame.bottom(),
    ]
    .join("\n")
}

/// Ask through `chooser`, falling back to `input` when it is missing.
pub async fn ask(
    chooser: &str,
    choices: &Choices,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Decision, PromptError> {
    match run_chooser(chooser, choices).await {
        Ok(selected) => Ok(decide(&selected, choices)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(chooser, "chooser not installed, asking on stdin");
            ask_fallback(choices, input, output)
        }
        Err(err) => Err(PromptError::Chooser(err)),
    }
}

/// `<chooser> choose --cursor=→  --cursor.foreground=212 <cancel> <accept>`
///
/// The menu draws on the inherited stderr; the selection comes back on stdout.
pub fn chooser_args(choices: &Choices) -> Vec<String> {
    vec![
        "choose".to_string(),
        "--cursor=→ ".to_string(),
        "--cursor.foreground=212".to_string(),
        choices.cancel.to_string(),
        choices.accept.to_string(),
    ]
}

async fn run_chooser(chooser: &str, choices: &Choices) -> std::io::Result<String> {
    let output = Command::new(chooser)
        .args(chooser_args(choices))
        .env_remove("BOLD")
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .await?;
    debug!(status = ?output.status, "chooser finished");
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn decide(selected: &str, choices: &Choices) -> Decision {
    if selected == choices.accept {
        Decision::Accepted
    } else {
        Decision::Cancelled
    }
}

/// `[y/N]` question; only `y` (any case, surrounding space ignored) accepts.
pub fn ask_fallback(
    choices: &Choices,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Decision, PromptError> {
    write!(output, "{}", choices.fallback_question).map_err(PromptError::Input)?;
    output.flush().map_err(PromptError::Input)?;
    let mut answer = String::new();
    input.read_line(&mut answer).map_err(PromptError::Input)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(Decision::Accepted)
    } else {
        Ok(Decision::Cancelled)
    }
}
