//! Configuration loading from TOML files, `.env` and environment variables.
//!
//! Precedence (highest wins):
//! 1. Process environment (`PROD_SERVER`, `PROD_DIR`, `PROJECT_NAME`,
//!    `DEVGRID_TMUX`, `DEVGRID_CHOOSER`, `NO_COLOR`)
//! 2. `<project_dir>/.env`
//! 3. TOML file from `--config`, else `<project_dir>/devgrid.toml`, else
//!    `$XDG_CONFIG_HOME/devgrid/devgrid.toml` (or `~/.config/...`)
//! 4. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use defaults::{CONFIG_FILE_NAME, DOTENV_FILE_NAME};
pub use env::parse_dotenv;
pub use loader::load_config;
pub use sources::config_root_dir;
pub use types::{
    Config, ConfigSource, DisplayConfig, LoadedConfig, ProjectConfig, PromptConfig, TimingConfig,
    TmuxConfig,
};
