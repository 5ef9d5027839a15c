//! Makefile command overview printed by `devgrid help-table`.

use super::frame::Table;
use super::theme::{Theme, Tone};

/// Visual widths of the command, description and when-to-use columns.
pub const HELP_COLUMN_WIDTHS: [usize; 3] = [21, 35, 32];

struct HelpRow {
    command: &'static str,
    description: &'static str,
    when: &'static str,
    /// Asks for confirmation before running.
    dangerous: bool,
}

const fn row(command: &'static str, description: &'static str, when: &'static str) -> HelpRow {
    HelpRow {
        command,
        description,
        when,
        dangerous: false,
    }
}

const fn danger(command: &'static str, description: &'static str, when: &'static str) -> HelpRow {
    HelpRow {
        command,
        description,
        when,
        dangerous: true,
    }
}

struct HelpSection {
    tone: Tone,
    rows: &'static [HelpRow],
}

const SECTIONS: &[HelpSection] = &[
    // Development
    HelpSection {
        tone: Tone::Success,
        rows: &[
            row(
                "dev",
                "Local development (2x2 grid)",
                "Day-to-day project work",
            ),
            row(
                "dev-full",
                "Local + prod logs (two tabs)",
                "Development with prod monitoring",
            ),
            row("api", "Start the API server", "Backend-only testing"),
            row("frontend", "Start the frontend", "Working on the UI"),
            row("bot", "Start the bot", "Testing bot logic"),
        ],
    },
    // Process control
    HelpSection {
        tone: Tone::Caution,
        rows: &[
            row(
                "bot-stop",
                "Stop all bot processes",
                "'other getUpdates' conflict",
            ),
            row(
                "dev-stop",
                "Stop the whole dev environment",
                "Before a restart",
            ),
            row("dev-restart", "Restart the dev environment", "Stop + start"),
        ],
    },
    // Database
    HelpSection {
        tone: Tone::Caution,
        rows: &[
            row("db", "Start the database", "Before starting development"),
            danger(
                "db-reset",
                "Drop and recreate the database",
                "Deletes all data!",
            ),
            danger(
                "db-sync-from-prod",
                "Download PROD → DEV",
                "Overwrites the DEV database",
            ),
            row("migrate", "Apply migrations (dev)", "After a schema change"),
            danger(
                "migrate-prod",
                "Apply migrations (prod)",
                "Changes the PROD schema!",
            ),
            danger("update-dev", "Refresh metadata (dev)", "Uses API quota!"),
            danger("update-prod", "Refresh metadata (prod)", "Uses API quota!"),
        ],
    },
    // Production
    HelpSection {
        tone: Tone::Production,
        rows: &[
            row("ssh", "SSH into the prod server", "Direct server access"),
            row(
                "prod-logs",
                "Prod logs (all services)",
                "Watching every service",
            ),
            row(
                "prod-watch",
                "Prod monitoring (2x2 grid)",
                "Close watch on production",
            ),
            row("prod-restart", "Restart containers", "After updating .env"),
            row(
                "prod-status",
                "Container status (CPU/RAM)",
                "Checking performance",
            ),
            row(
                "prod-sync-env",
                "Copy .env to the server",
                "Updating environment variables",
            ),
        ],
    },
    // Utilities
    HelpSection {
        tone: Tone::Utility,
        rows: &[
            row(
                "tunnel",
                "SSH tunnel for testing",
                "Show the mini-app on a phone",
            ),
            row("test", "Run the tests", "Before committing"),
            row("clean", "Remove temporary files", "Free disk space"),
            row(
                "deploy-watch",
                "Deploy notifications",
                "Desktop notifications",
            ),
        ],
    },
];

/// Full help listing: title, bordered table, usage footer.
pub fn render_help_table(project_name: &str, theme: Theme) -> String {
    let table = Table::new(HELP_COLUMN_WIDTHS, theme);
    let mut lines = vec![
        String::new(),
        theme.bold(Tone::Utility, &format!("🤖 {project_name} Makefile")),
        String::new(),
        table.top(),
        table.row([
            &theme.paint(Tone::Strong, "Command"),
            &theme.paint(Tone::Strong, "Description"),
            &theme.paint(Tone::Strong, "When to use"),
        ]),
    ];

    for section in SECTIONS {
        lines.push(table.separator());
        for entry in section.rows {
            let (tone, command) = if entry.dangerous {
                (Tone::Danger, format!("{} *", entry.command))
            } else {
                (section.tone, entry.command.to_string())
            };
            lines.push(table.row([
                &theme.paint(tone, &command),
                entry.description,
                entry.when,
            ]));
        }
    }

    lines.push(table.bottom());
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        theme.paint(Tone::Muted, "Usage:"),
        theme.paint(Tone::Strong, "make <command>")
    ));
    lines.push(theme.paint(Tone::Danger, "* = asks for confirmation"));
    lines.push(String::new());
    lines.join("\n")
}
