//! CLI argument parsing via clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use devgrid::build_info::LONG_VERSION;

/// Terminal pane-grid layouts for a bot/API/frontend dev stack.
#[derive(Debug, Parser)]
#[command(name = "devgrid", version, long_version = LONG_VERSION)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log every automation decision to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to config file (default: <project>/devgrid.toml or ~/.config/devgrid/devgrid.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// tmux socket name (`tmux -L`), isolating devgrid windows.
    #[arg(long, global = true, value_name = "NAME")]
    pub socket: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Local 2x2 grid: Bot, API, Frontend, Tunnel.
    Dev(ProjectArgs),
    /// Local 3x2 grid plus a production monitoring tab.
    Full(ProjectArgs),
    /// Production log grid over ssh.
    ProdWatch(ProjectArgs),
    /// Interrupt and re-run every pane of the open layout.
    Restart(ControlArgs),
    /// Ctrl+C every recognized pane of the open layout.
    Stop(ControlArgs),
    /// Show the open layout.
    Status {
        #[command(flatten)]
        project: ProjectArgs,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Ask before running a dangerous command. Exit 0 only on confirmation.
    Confirm {
        /// Headline shown in the box.
        title: Option<String>,
        /// Body text; `\n` starts a new line.
        description: Option<String>,
        /// Paint the headline red.
        #[arg(long)]
        danger: bool,
    },
    /// Ask before replacing DEV database data with PROD data.
    ConfirmSync {
        /// Defaults to PROD_SERVER.
        prod_server: Option<String>,
        /// Defaults to PROD_DIR.
        prod_dir: Option<String>,
    },
    /// Print the Makefile command table.
    #[command(alias = "make-help")]
    HelpTable,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ProjectArgs {
    /// Project root (default: current directory).
    pub project_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ControlArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
    /// Leave the production monitoring tab alone.
    #[arg(long = "local-only", visible_alias = "local")]
    pub local_only: bool,
}

impl Command {
    /// Project directory argument, for commands that take one.
    pub fn project_dir(&self) -> Option<&PathBuf> {
        match self {
            Self::Dev(project) | Self::Full(project) | Self::ProdWatch(project) => {
                project.project_dir.as_ref()
            }
            Self::Restart(control) | Self::Stop(control) => control.project.project_dir.as_ref(),
            Self::Status { project, .. } => project.project_dir.as_ref(),
            Self::Confirm { .. } | Self::ConfirmSync { .. } | Self::HelpTable => None,
        }
    }
}
