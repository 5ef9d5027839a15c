//! Default configuration constants.
//!
//! Every command reads its fallbacks from here so the layout builder, the
//! restart controller and the confirmation prompts cannot drift apart.

/// Project name used for container names and prompt titles.
pub(super) const DEFAULT_PROJECT_NAME: &str = "mybot";
/// SSH target for production log streaming.
pub(super) const DEFAULT_PROD_SERVER: &str = "deploy@server";
/// Project directory on the production host, relative to the login dir.
pub(super) const DEFAULT_PROD_DIR: &str = "project";
/// Multiplexer binary driven by the tmux backend.
pub(super) const DEFAULT_TMUX_BINARY: &str = "tmux";
/// Interactive chooser used by confirmation prompts.
pub(super) const DEFAULT_CHOOSER: &str = "gum";
/// Pause after Ctrl+C before clearing a restarted pane.
pub(super) const DEFAULT_INTERRUPT_SETTLE_MS: u64 = 300;
/// Pause after `clear` before re-sending the pane command.
pub(super) const DEFAULT_CLEAR_SETTLE_MS: u64 = 100;
/// Pause after Ctrl+C when stopping a pane.
pub(super) const DEFAULT_STOP_SETTLE_MS: u64 = 200;

/// Per-project config file name, looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "devgrid.toml";
/// Dotenv file name, looked up in the project directory.
pub const DOTENV_FILE_NAME: &str = ".env";
