//! Config-file source discovery.
//!
//! Source order: explicit path > project file > global file > built-in
//! defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::CONFIG_FILE_NAME;
use super::ConfigSource;

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    project_dir: &Path,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // Explicit path must be readable; no fallback.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    let project_file = project_dir.join(CONFIG_FILE_NAME);
    if let Ok(text) = read_file(&project_file) {
        return Ok((text, ConfigSource::Project(project_file)));
    }

    if let Some(dir) = config_root() {
        let global = dir.join("devgrid").join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Return the per-user config root (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
