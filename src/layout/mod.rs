//! Pane-grid layouts and the builder that realizes them.
//!
//! A [`LayoutSpec`] is pure data: tabs of [`PaneSpec`]s in creation order.
//! `catalog` defines the shipped layouts, `builder` replays one against a
//! [`crate::terminal::TerminalApp`].

use serde::Serialize;

use crate::terminal::SplitDirection;

mod builder;
mod catalog;
mod templates;

pub use builder::{build_layout, BuildOptions, BuiltLayout, BuiltSession, BuiltTab};
pub use catalog::{dev_layout, full_layout, layout_for, prod_watch_layout, restart_layout};
pub use templates::CommandContext;

/// Shipped layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// One tab, 2x2 local grid.
    Dev,
    /// Local 3x2 grid plus a production monitoring tab.
    Full,
    /// One tab, 2x2 production log grid.
    ProdWatch,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 3] = [LayoutKind::Dev, LayoutKind::Full, LayoutKind::ProdWatch];

    /// Name stored in the layout tag and used in window names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Full => "full",
            Self::ProdWatch => "prod-watch",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Where a pane comes from: a split of an earlier pane in the same tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaneSplit {
    /// Index of the source pane within the tab.
    pub from: usize,
    pub direction: SplitDirection,
}

/// One pane: stable role, display label, startup command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaneSpec {
    pub role: &'static str,
    pub label: &'static str,
    pub command: String,
    /// `None` only for the first pane of a tab.
    pub split: Option<PaneSplit>,
}

impl PaneSpec {
    fn initial(role: &'static str, label: &'static str, command: String) -> Self {
        Self {
            role,
            label,
            command,
            split: None,
        }
    }

    fn split(
        role: &'static str,
        label: &'static str,
        command: String,
        from: usize,
        direction: SplitDirection,
    ) -> Self {
        Self {
            role,
            label,
            command,
            split: Some(PaneSplit { from, direction }),
        }
    }
}

/// One tab; `panes` are in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabLayout {
    pub title: &'static str,
    pub panes: Vec<PaneSpec>,
}

impl TabLayout {
    pub fn pane_for_role(&self, role: &str) -> Option<&PaneSpec> {
        self.panes.iter().find(|pane| pane.role == role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSpec {
    pub kind: LayoutKind,
    pub tabs: Vec<TabLayout>,
}

impl LayoutSpec {
    pub fn pane_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.panes.len()).sum()
    }

    /// Label for a role anywhere in the layout.
    pub fn label_for_role(&self, role: &str) -> Option<&'static str> {
        self.tabs
            .iter()
            .find_map(|tab| tab.pane_for_role(role))
            .map(|pane| pane.label)
    }
}
