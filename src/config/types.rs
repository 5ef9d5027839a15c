//! Configuration data model.
//!
//! Struct definitions plus default values. Source discovery and precedence
//! live in `loader`/`sources`/`env` so layering stays in one place.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{
    DEFAULT_CHOOSER, DEFAULT_CLEAR_SETTLE_MS, DEFAULT_INTERRUPT_SETTLE_MS, DEFAULT_PROD_DIR,
    DEFAULT_PROD_SERVER, DEFAULT_PROJECT_NAME, DEFAULT_STOP_SETTLE_MS, DEFAULT_TMUX_BINARY,
};

/// Top-level runtime configuration, loaded once and passed explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub tmux: TmuxConfig,
    pub timing: TimingConfig,
    pub display: DisplayConfig,
    pub prompt: PromptConfig,
}

/// Project identity and production endpoints substituted into pane commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Local project root. Set from the CLI, never from files.
    #[serde(skip)]
    pub dir: PathBuf,
    /// `PROJECT_NAME`; also the container-name prefix on the prod host.
    pub name: String,
    /// `PROD_SERVER`; an ssh destination such as `deploy@example.com`.
    pub prod_server: String,
    /// `PROD_DIR`; project directory on the prod host.
    pub prod_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            name: DEFAULT_PROJECT_NAME.to_string(),
            prod_server: DEFAULT_PROD_SERVER.to_string(),
            prod_dir: DEFAULT_PROD_DIR.to_string(),
        }
    }
}

/// Multiplexer backend settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    pub binary: String,
    /// Optional `-L` socket name to isolate devgrid windows.
    pub socket: Option<String>,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_TMUX_BINARY.to_string(),
            socket: None,
        }
    }
}

/// Fixed pauses between keystroke injections.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub interrupt_settle_ms: u64,
    pub clear_settle_ms: u64,
    pub stop_settle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            interrupt_settle_ms: DEFAULT_INTERRUPT_SETTLE_MS,
            clear_settle_ms: DEFAULT_CLEAR_SETTLE_MS,
            stop_settle_ms: DEFAULT_STOP_SETTLE_MS,
        }
    }
}

impl TimingConfig {
    /// No pauses at all; used by tests driving the in-memory terminal.
    pub fn immediate() -> Self {
        Self {
            interrupt_settle_ms: 0,
            clear_settle_ms: 0,
            stop_settle_ms: 0,
        }
    }

    pub fn interrupt_settle(&self) -> Duration {
        Duration::from_millis(self.interrupt_settle_ms)
    }

    pub fn clear_settle(&self) -> Duration {
        Duration::from_millis(self.clear_settle_ms)
    }

    pub fn stop_settle(&self) -> Duration {
        Duration::from_millis(self.stop_settle_ms)
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Confirmation prompt settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Chooser binary invoked for menu selection.
    pub chooser: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            chooser: DEFAULT_CHOOSER.to_string(),
        }
    }
}

/// Where the config file text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `<project_dir>/devgrid.toml`.
    Project(PathBuf),
    /// Config loaded from `~/.config/devgrid/devgrid.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Configuration payload plus where each layer came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    /// Dotenv file merged into the environment layer, when one was found.
    pub dotenv: Option<PathBuf>,
}
