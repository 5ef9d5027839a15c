//! CLI entry point for devgrid.

mod cli;

use clap::Parser;
use devgrid::app::{
    run_confirm, run_confirm_sync, run_help_table, run_layout, run_restart, run_status, run_stop,
    CommandEnv, Outcome,
};
use devgrid::config::{load_config, Config};
use devgrid::control::ControlScope;
use devgrid::error::DevgridError;
use devgrid::layout::LayoutKind;
use devgrid::logging::init_logging;
use devgrid::terminal::{detect_display, TmuxApp};
use devgrid::ui::{RenderSink, Renderer};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use cli::Command;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_logging(args.debug);

    let project_dir = resolve_project_dir(args.command.project_dir());
    let mut config = match load_config(&project_dir, args.config.as_deref()) {
        Ok(loaded) => {
            debug!(source = ?loaded.source, dotenv = ?loaded.dotenv, "loaded config");
            loaded.config
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Apply CLI overrides.
    if args.no_color {
        config.display.color = false;
    }
    if let Some(socket) = &args.socket {
        config.tmux.socket = Some(socket.clone());
    }

    let renderer = Renderer::new(config.display.color);
    match dispatch(args.command, &config, &renderer).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            renderer.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(
    command: Command,
    config: &Config,
    renderer: &Renderer,
) -> Result<Outcome, DevgridError> {
    // Prompt commands never touch the multiplexer.
    match &command {
        Command::Confirm {
            title,
            description,
            danger,
        } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            return run_confirm(
                config,
                renderer,
                title.as_deref(),
                description.as_deref(),
                *danger,
                &mut input,
                &mut output,
            )
            .await;
        }
        Command::ConfirmSync {
            prod_server,
            prod_dir,
        } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            return run_confirm_sync(
                config,
                renderer,
                prod_server.as_deref(),
                prod_dir.as_deref(),
                &mut input,
                &mut output,
            )
            .await;
        }
        Command::HelpTable => return Ok(run_help_table(config, renderer)),
        _ => {}
    }

    let tmux = TmuxApp::new(&config.tmux);
    let env = CommandEnv {
        terminal: &tmux,
        sink: renderer,
        config,
    };
    match command {
        Command::Dev(_) => run_layout(env, LayoutKind::Dev, detect_display()).await,
        Command::Full(_) => run_layout(env, LayoutKind::Full, detect_display()).await,
        Command::ProdWatch(_) => run_layout(env, LayoutKind::ProdWatch, detect_display()).await,
        Command::Restart(control) => {
            run_restart(
                env,
                ControlScope {
                    local_only: control.local_only,
                },
            )
            .await
        }
        Command::Stop(control) => {
            run_stop(
                env,
                ControlScope {
                    local_only: control.local_only,
                },
            )
            .await
        }
        Command::Status { json, .. } => run_status(env, json).await,
        Command::Confirm { .. } | Command::ConfirmSync { .. } | Command::HelpTable => {
            Ok(Outcome::Success)
        }
    }
}

/// Absolute project root: the argument if given, else the working directory.
fn resolve_project_dir(arg: Option<&PathBuf>) -> PathBuf {
    let raw = match arg {
        Some(path) => path.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    canonical_or_raw(&raw)
}

fn canonical_or_raw(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
