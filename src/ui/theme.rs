//! Semantic colors for boxes, tables and status lines.
//!
//! Everything colored goes through [`Theme::paint`] so `--no-color`,
//! `NO_COLOR` and `[display] color = false` switch output to plain text in one
//! place.

use crossterm::style::{Color, Stylize};

/// Semantic color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Double-line confirmation box borders.
    BoxBorder,
    /// Help table borders.
    TableBorder,
    /// Destructive actions and warnings inside boxes.
    Danger,
    /// Success glyphs and everyday commands.
    Success,
    /// Process/database control commands, DEV endpoints.
    Caution,
    /// PROD endpoints.
    Highlight,
    /// Production commands.
    Production,
    /// Utility commands and the help title.
    Utility,
    /// Secondary text.
    Muted,
    /// Bold emphasis without color.
    Strong,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Self::BoxBorder | Self::Danger => Some(Color::DarkRed),
            Self::TableBorder | Self::Highlight => Some(Color::DarkCyan),
            Self::Success => Some(Color::DarkGreen),
            Self::Caution => Some(Color::DarkYellow),
            Self::Production => Some(Color::DarkBlue),
            Self::Utility => Some(Color::DarkMagenta),
            Self::Muted | Self::Strong => None,
        }
    }
}

/// Color switch plus painting helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn color_enabled(self) -> bool {
        self.color
    }

    /// Wrap `text` in the tone's escape sequences, or return it unchanged.
    pub fn paint(self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Muted => text.dim().to_string(),
            Tone::Strong => text.bold().to_string(),
            _ => match tone.color() {
                Some(color) => text.with(color).to_string(),
                None => text.to_string(),
            },
        }
    }

    pub fn bold(self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone.color() {
            Some(color) => text.with(color).bold().to_string(),
            None => text.bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::text::strip_ansi;

    #[test]
    fn plain_theme_never_emits_escapes() {
        let theme = Theme::plain();
        assert_eq!(theme.paint(Tone::Danger, "x"), "x");
        assert_eq!(theme.bold(Tone::Utility, "title"), "title");
    }

    #[test]
    fn colored_output_strips_back_to_text() {
        let theme = Theme::new(true);
        let painted = theme.bold(Tone::Danger, "rm -rf");
        assert!(painted.contains('\u{1b}'));
        assert_eq!(strip_ansi(&painted), "rm -rf");
        assert_eq!(strip_ansi(&theme.paint(Tone::Muted, "dim")), "dim");
    }
}
