//! devgrid: terminal pane-grid layouts for a bot/API/frontend dev stack.
//!
//! The crate builds named, tagged pane grids in a terminal multiplexer,
//! seeds each pane with a startup command (local `make` targets or
//! production log tails over ssh), and later finds the grid again to restart
//! or stop what runs in it. A few rendering helpers draw the confirmation
//! boxes and the help table used by the project's Makefile.
//!
//! # Quick start
//!
//! ```no_run
//! use devgrid::config::load_config;
//! use devgrid::layout::{build_layout, full_layout, BuildOptions, CommandContext};
//! use devgrid::terminal::TmuxApp;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = load_config(Path::new("."), None)?;
//! let tmux = TmuxApp::new(&loaded.config.tmux);
//! let spec = full_layout(&CommandContext::from_project(&loaded.config.project));
//! let options = BuildOptions {
//!     window_name: "mybot-full".to_string(),
//!     working_dir: loaded.config.project.dir.clone(),
//!     size: Some((200, 50)),
//! };
//! build_layout(&tmux, &spec, &options).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod control;
pub mod error;
pub mod layout;
pub mod locator;
pub mod logging;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
