//! Unified error types for devgrid.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// AutomationError
// ---------------------------------------------------------------------------

/// Errors raised while talking to the terminal application.
#[derive(Debug)]
pub enum AutomationError {
    /// The automation binary could not be started at all.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The automation call ran but reported failure.
    CommandFailed(String),
    /// The automation call succeeded but its output could not be understood.
    UnexpectedOutput(String),
    /// A window/tab/session handle no longer resolves.
    UnknownTarget(String),
}

impl fmt::Display for AutomationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => write!(f, "failed to run {program}: {source}"),
            Self::CommandFailed(msg) => write!(f, "automation call failed: {msg}"),
            Self::UnexpectedOutput(msg) => write!(f, "unexpected automation output: {msg}"),
            Self::UnknownTarget(target) => write!(f, "unknown target `{target}`"),
        }
    }
}

impl std::error::Error for AutomationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors from interactive confirmation prompts.
#[derive(Debug)]
pub enum PromptError {
    /// Reading the fallback answer from stdin failed.
    Input(std::io::Error),
    /// The chooser binary exists but could not be run.
    Chooser(std::io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "failed to read answer: {e}"),
            Self::Chooser(e) => write!(f, "failed to run chooser: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

// ---------------------------------------------------------------------------
// DevgridError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type surfaced by command entry points.
#[derive(Debug)]
pub enum DevgridError {
    Config(ConfigError),
    Automation(AutomationError),
    Prompt(PromptError),
    /// Serializing command output failed.
    Json(serde_json::Error),
}

impl fmt::Display for DevgridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Automation(e) => write!(f, "{e}"),
            Self::Prompt(e) => write!(f, "prompt: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
        }
    }
}

impl std::error::Error for DevgridError {}

impl From<ConfigError> for DevgridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<AutomationError> for DevgridError {
    fn from(e: AutomationError) -> Self {
        Self::Automation(e)
    }
}

impl From<PromptError> for DevgridError {
    fn from(e: PromptError) -> Self {
        Self::Prompt(e)
    }
}

impl From<serde_json::Error> for DevgridError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
