//! Terminal size lookup used to size newly created windows.

use serde::Serialize;
use tracing::debug;

/// Size used when the attached terminal cannot be measured.
pub const FALLBACK_SIZE: (u16, u16) = (200, 50);

/// Where a [`DisplayInfo`] measurement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplaySource {
    /// Measured from the terminal devgrid runs in.
    Terminal,
    /// Terminal size unavailable (no tty, CI); fixed fallback.
    Fallback,
}

/// Geometry of the display a new window is created for, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayInfo {
    pub columns: u16,
    pub rows: u16,
    pub source: DisplaySource,
}

impl DisplayInfo {
    pub fn size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    pub fn describe(&self) -> &'static str {
        match self.source {
            DisplaySource::Terminal => "current terminal",
            DisplaySource::Fallback => "fallback size",
        }
    }
}

/// Measure the attached terminal, falling back to [`FALLBACK_SIZE`].
pub fn detect_display() -> DisplayInfo {
    display_from_size(crossterm::terminal::size())
}

fn display_from_size(measured: std::io::Result<(u16, u16)>) -> DisplayInfo {
    match measured {
        Ok((columns, rows)) if columns > 0 && rows > 0 => DisplayInfo {
            columns,
            rows,
            source: DisplaySource::Terminal,
        },
        Ok((columns, rows)) => {
            debug!(
                columns,
                rows, "terminal reported empty size, using fallback"
            );
            fallback()
        }
        Err(err) => {
            debug!(error = %err, "could not detect terminal size, using fallback");
            fallback()
        }
    }
}

fn fallback() -> DisplayInfo {
    DisplayInfo {
        columns: FALLBACK_SIZE.0,
        rows: FALLBACK_SIZE.1,
        source: DisplaySource::Fallback,
    }
}
