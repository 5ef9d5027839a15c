//! Fixed-width bordered boxes and three-column tables.

use super::text::pad_to_width;
use super::theme::{Theme, Tone};

/// Double-line box with red borders; content is indented two cells.
#[derive(Debug, Clone, Copy)]
pub struct BoxFrame {
    inner_width: usize,
    theme: Theme,
}

impl BoxFrame {
    pub fn new(inner_width: usize, theme: Theme) -> Self {
        Self { inner_width, theme }
    }

    pub fn top(&self) -> String {
        self.rule('╔', '╗')
    }

    pub fn separator(&self) -> String {
        self.rule('╠', '╣')
    }

    pub fn bottom(&self) -> String {
        self.rule('╚', '╝')
    }

    pub fn blank(&self) -> String {
        self.line("")
    }

    /// `║  <content><padding>║`
    pub fn line(&self, content: &str) -> String {
        let edge = self.theme.paint(Tone::BoxBorder, "║");
        let body = pad_to_width(&format!("  {content}"), self.inner_width);
        format!("{edge}{body}{edge}")
    }

    fn rule(&self, left: char, right: char) -> String {
        let bar = "═".repeat(self.inner_width);
        self.theme
            .paint(Tone::BoxBorder, &format!("{left}{bar}{right}"))
    }
}

/// Single-line table with three fixed visual column widths.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    widths: [usize; 3],
    theme: Theme,
}

impl Table {
    pub fn new(widths: [usize; 3], theme: Theme) -> Self {
        Self { widths, theme }
    }

    pub fn top(&self) -> String {
        self.rule('┌', '┬', '┐')
    }

    pub fn separator(&self) -> String {
        self.rule('├', '┼', '┤')
    }

    pub fn bottom(&self) -> String {
        self.rule('└', '┴', '┘')
    }

    /// `│ a │ b │ c │` with each cell padded to its column width.
    pub fn row(&self, cells: [&str; 3]) -> String {
        let edge = self.theme.paint(Tone::TableBorder, "│");
        let mut out = edge.clone();
        for (cell, width) in cells.iter().zip(self.widths) {
            out.push(' ');
            out.push_str(&pad_to_width(cell, width));
            out.push(' ');
            out.push_str(&edge);
        }
        out
    }

    fn rule(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        let line = format!("{left}{}{right}", segments.join(&mid.to_string()));
        self.theme.paint(Tone::TableBorder, &line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::text::display_width;

    #[test]
    fn box_lines_share_one_width() {
        let frame = BoxFrame::new(20, Theme::new(true));
        let lines = [
            frame.top(),
            frame.line("⚠️  Title"),
            frame.line("日本語"),
            frame.separator(),
            frame.blank(),
            frame.bottom(),
        ];
        for line in &lines {
            assert_eq!(display_width(line), 22, "line: {line:?}");
        }
    }

    #[test]
    fn plain_box_layout() {
        let frame = BoxFrame::new(6, Theme::plain());
        assert_eq!(frame.top(), "╔══════╗");
        assert_eq!(frame.line("ok"), "║  ok  ║");
        assert_eq!(frame.separator(), "╠══════╣");
        assert_eq!(frame.bottom(), "╚══════╝");
    }

    #[test]
    fn table_rows_align_with_rules() {
        let table = Table::new([3, 4, 2], Theme::plain());
        assert_eq!(table.top(), "┌─────┬──────┬────┐");
        assert_eq!(table.row(["a", "bb", "c"]), "│ a   │ bb   │ c  │");
        assert_eq!(table.separator(), "├─────┼──────┼────┤");
        assert_eq!(table.bottom(), "└─────┴──────┴────┘");
    }

    #[test]
    fn colored_table_rows_keep_visual_width() {
        let theme = Theme::new(true);
        let table = Table::new([21, 35, 32], theme);
        let row = table.row([&theme.paint(Tone::Success, "dev"), "Local 日本", "x"]);
        assert_eq!(display_width(&row), display_width(&table.top()));
    }
}
