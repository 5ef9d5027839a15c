//! Environment layer: dotenv parsing and env-var overrides.
//!
//! Process environment wins over the project's `.env`, which wins over any
//! config file value.

use std::collections::BTreeMap;

use super::Config;

/// Parse dotenv text into key/value pairs.
///
/// Supports `KEY=VALUE`, an optional `export ` prefix, `#` comments, and
/// single- or double-quoted values. Malformed lines are skipped.
pub fn parse_dotenv(text: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        vars.insert(key.to_string(), unquote_value(value.trim()));
    }
    vars
}

fn unquote_value(value: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }
    // Unquoted values may carry a trailing ` # comment`.
    match value.find(" #") {
        Some(idx) => value[..idx].trim_end().to_string(),
        None => value.to_string(),
    }
}

/// Combine process env and dotenv vars into one lookup; process env wins.
pub(super) fn layered_lookup<'a, FEnv>(
    env_lookup: &'a FEnv,
    dotenv: &'a BTreeMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a
where
    FEnv: Fn(&str) -> Option<String>,
{
    move |name| env_lookup(name).or_else(|| dotenv.get(name).cloned())
}

/// Apply env-var overrides on top of file/default values.
pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(server) = non_empty(env_lookup, "PROD_SERVER") {
        config.project.prod_server = server;
    }
    if let Some(dir) = non_empty(env_lookup, "PROD_DIR") {
        config.project.prod_dir = dir;
    }
    if let Some(name) = non_empty(env_lookup, "PROJECT_NAME") {
        config.project.name = name;
    }
    if let Some(binary) = non_empty(env_lookup, "DEVGRID_TMUX") {
        config.tmux.binary = binary;
    }
    if let Some(chooser) = non_empty(env_lookup, "DEVGRID_CHOOSER") {
        config.prompt.chooser = chooser;
    }
    if env_lookup("NO_COLOR").is_some() {
        config.display.color = false;
    }
}

/// Blank values count as unset so an empty `PROD_SERVER=` keeps the default.
fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
