//! The shipped layouts.
//!
//! Pane order inside each tab is the creation order the builder replays, and
//! the restart controller maps sessions onto it by position.

use super::templates::CommandContext;
use super::{LayoutKind, LayoutSpec, PaneSpec, TabLayout};
use crate::terminal::SplitDirection::{SideBySide, Stacked};

pub fn layout_for(kind: LayoutKind, ctx: &CommandContext) -> LayoutSpec {
    match kind {
        LayoutKind::Dev => dev_layout(ctx),
        LayoutKind::Full => full_layout(ctx),
        LayoutKind::ProdWatch => prod_watch_layout(ctx),
    }
}

/// Bot | API over Frontend | Tunnel.
pub fn dev_layout(ctx: &CommandContext) -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::Dev,
        tabs: vec![TabLayout {
            title: "Local Dev",
            panes: vec![
                PaneSpec::initial("bot", "🤖 Bot", ctx.make_target("bot")),
                PaneSpec::split("api", "⚡ API", ctx.make_target("api"), 0, SideBySide),
                PaneSpec::split(
                    "frontend",
                    "🎨 Frontend",
                    ctx.make_target("frontend"),
                    0,
                    Stacked,
                ),
                PaneSpec::split("tunnel", "🌐 Tunnel", ctx.make_target("tunnel"), 1, Stacked),
            ],
        }],
    }
}

/// 3x2 local grid plus the production monitoring tab.
pub fn full_layout(ctx: &CommandContext) -> LayoutSpec {
    let local = TabLayout {
        title: "Local Dev",
        panes: vec![
            PaneSpec::initial("bot", "🤖 Bot", ctx.make_target("bot")),
            PaneSpec::split("api", "⚡ API", ctx.make_target("api"), 0, SideBySide),
            PaneSpec::split(
                "db-logs",
                "📊 DB Logs",
                ctx.local_script("dx-db-logs.sh"),
                1,
                SideBySide,
            ),
            PaneSpec::split(
                "frontend",
                "🎨 Frontend",
                ctx.make_target("frontend"),
                0,
                Stacked,
            ),
            PaneSpec::split("tunnel", "🌐 Tunnel", ctx.make_target("tunnel"), 1, Stacked),
            PaneSpec::split(
                "status",
                "📋 Status",
                ctx.local_script("dx-status.sh"),
                2,
                Stacked,
            ),
        ],
    };
    LayoutSpec {
        kind: LayoutKind::Full,
        tabs: vec![local, prod_tab(ctx, true)],
    }
}

/// Production log grid on its own.
pub fn prod_watch_layout(ctx: &CommandContext) -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::ProdWatch,
        tabs: vec![prod_tab(ctx, false)],
    }
}

/// Command tables used by restart and stop for windows without a layout tag.
pub fn restart_layout(ctx: &CommandContext) -> LayoutSpec {
    full_layout(ctx)
}

fn prod_tab(ctx: &CommandContext, cd_first: bool) -> TabLayout {
    let wrap = |command: String| {
        if cd_first {
            ctx.from_project_dir(&command)
        } else {
            command
        }
    };
    TabLayout {
        title: "Prod Monitoring",
        panes: vec![
            PaneSpec::initial("prod-bot", "🤖 Prod Bot", wrap(ctx.remote_logs("bot"))),
            PaneSpec::split(
                "prod-api",
                "⚡ Prod API",
                wrap(ctx.remote_logs("api")),
                0,
                SideBySide,
            ),
            PaneSpec::split(
                "prod-db",
                "📊 Prod DB",
                wrap(ctx.remote_logs("db")),
                0,
                Stacked,
            ),
            PaneSpec::split(
                "prod-status",
                "📋 Prod Status",
                wrap(ctx.remote_prod_status()),
                1,
                Stacked,
            ),
        ],
    }
}
