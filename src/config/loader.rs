//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::DOTENV_FILE_NAME;
use super::env::{apply_env_overrides, layered_lookup, parse_dotenv};
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::{Config, LoadedConfig};

/// Load configuration for `project_dir` from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(
    project_dir: &Path,
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        project_dir,
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    project_dir: &Path,
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, project_dir, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    config.project.dir = project_dir.to_path_buf();

    let dotenv_path = project_dir.join(DOTENV_FILE_NAME);
    let (dotenv_vars, dotenv) = match read_file(&dotenv_path) {
        Ok(text) => (parse_dotenv(&text), Some(dotenv_path)),
        Err(_) => (Default::default(), None),
    };
    let lookup = layered_lookup(&env_lookup, &dotenv_vars);
    apply_env_overrides(&mut config, &lookup);

    if config.tmux.binary.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "tmux.binary must not be empty".to_string(),
        ));
    }

    Ok(LoadedConfig {
        config,
        source,
        dotenv,
    })
}
