//! Finding a previously built layout among live windows.

use serde::Serialize;

use crate::terminal::{WindowInfo, LAYOUT_TAG};

/// Substrings of a session name (`<title> (<job>)`) that mark devgrid panes.
pub const SESSION_NAME_PATTERNS: [&str; 8] = [
    "(bot)",
    "(api)",
    "(docker-compose)",
    "(node)",
    "(docker)",
    "(bash)",
    "(ssh)",
    "(sleep)",
];

/// How a window is recognized as a devgrid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocateStrategy {
    /// Some session carries the layout tag.
    Tagged,
    /// At least two tabs and at least four sessions in the first tab.
    Shape,
    /// Some session name contains a [`SESSION_NAME_PATTERNS`] entry.
    NamePattern,
}

/// Strategy order used before restarting.
pub const RESTART_STRATEGIES: [LocateStrategy; 2] = [LocateStrategy::Tagged, LocateStrategy::Shape];

/// Strategy order used before stopping.
pub const STOP_STRATEGIES: [LocateStrategy; 3] = [
    LocateStrategy::Tagged,
    LocateStrategy::NamePattern,
    LocateStrategy::Shape,
];

impl LocateStrategy {
    pub fn matches(self, window: &WindowInfo) -> bool {
        match self {
            Self::Tagged => window
                .tabs
                .iter()
                .flat_map(|tab| &tab.sessions)
                .any(|session| session.tag(LAYOUT_TAG).is_some()),
            Self::Shape => {
                window.tabs.len() >= 2
                    && window
                        .tabs
                        .first()
                        .is_some_and(|tab| tab.sessions.len() >= 4)
            }
            Self::NamePattern => window
                .tabs
                .iter()
                .flat_map(|tab| &tab.sessions)
                .any(|session| matches_name_pattern(&session.name)),
        }
    }
}

pub fn matches_name_pattern(name: &str) -> bool {
    SESSION_NAME_PATTERNS
        .iter()
        .any(|pattern| name.contains(pattern))
}

/// A window picked by [`locate`] plus the strategy that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<'a> {
    pub window: &'a WindowInfo,
    pub strategy: LocateStrategy,
}

/// First window matching the earliest strategy, in iteration order.
pub fn locate<'a>(windows: &'a [WindowInfo], strategies: &[LocateStrategy]) -> Option<Located<'a>> {
    strategies.iter().find_map(|&strategy| {
        windows
            .iter()
            .find(|window| strategy.matches(window))
            .map(|window| Located { window, strategy })
    })
}
