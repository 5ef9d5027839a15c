//! Embeds the git commit and build time for `devgrid --version`.
//!
//! Both values can be pinned through the environment for reproducible
//! builds; missing git or date tooling yields `unknown` markers.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const COMMIT_VAR: &str = "DEVGRID_GIT_COMMIT";
const BUILT_AT_VAR: &str = "DEVGRID_BUILT_AT";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-env-changed={COMMIT_VAR}");
    println!("cargo:rerun-if-env-changed={BUILT_AT_VAR}");

    let commit = pinned(COMMIT_VAR)
        .or_else(|| capture("git", &["rev-parse", "--short=10", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());
    let built_at = pinned(BUILT_AT_VAR)
        .or_else(|| capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]))
        .unwrap_or_else(unix_seconds);

    println!("cargo:rustc-env={COMMIT_VAR}={commit}");
    println!("cargo:rustc-env={BUILT_AT_VAR}={built_at}");
}

fn pinned(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn unix_seconds() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string()).filter(|value| !value.is_empty())
}
