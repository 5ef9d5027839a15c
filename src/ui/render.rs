//! Status-line rendering contract and the default terminal renderer.

use std::io::Write;

use super::theme::{Theme, Tone};

/// Injectable rendering interface used by command orchestration.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink.
pub trait RenderSink: Send + Sync {
    /// Top-level line announcing what a command does.
    fn headline(&self, text: &str);
    /// One per-session progress line.
    fn step(&self, text: &str);
    /// Final success line.
    fn success(&self, text: &str);
    /// Secondary indented note.
    fn detail(&self, text: &str);
    /// Key/value row.
    fn field(&self, key: &str, value: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Pre-rendered multi-line block (boxes, tables) written to stdout.
    fn block(&self, text: &str);
}

/// Writes status lines to stdout, warnings and errors to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            theme: Theme::new(color),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn out(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
    }

    fn err(&self, line: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }
}

impl RenderSink for Renderer {
    fn headline(&self, text: &str) {
        self.out(&self.theme.paint(Tone::Strong, text));
    }

    fn step(&self, text: &str) {
        self.out(&format!("   {text}"));
    }

    fn success(&self, text: &str) {
        self.out(&format!("{} {text}", self.theme.paint(Tone::Success, "✅")));
    }

    fn detail(&self, text: &str) {
        self.out(&format!("   {}", self.theme.paint(Tone::Muted, text)));
    }

    fn field(&self, key: &str, value: &str) {
        self.out(&format!(
            "   {} {value}",
            self.theme.paint(Tone::Muted, &format!("{key}:"))
        ));
    }

    fn warn(&self, msg: &str) {
        self.err(&format!(
            "   {} {msg}",
            self.theme.paint(Tone::Caution, "⚠️ ")
        ));
    }

    fn error(&self, msg: &str) {
        self.err(&format!("{} {msg}", self.theme.paint(Tone::Danger, "❌")));
    }

    fn block(&self, text: &str) {
        self.out(text);
    }
}
