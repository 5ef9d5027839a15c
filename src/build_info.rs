//! Compile-time build metadata for `devgrid --version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash, or `unknown` outside a git checkout.
pub const GIT_COMMIT: &str = env!("DEVGRID_GIT_COMMIT");

/// UTC build time.
pub const BUILD_TIMESTAMP: &str = env!("DEVGRID_BUILT_AT");

/// Text printed by `devgrid --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("DEVGRID_GIT_COMMIT"),
    ", built ",
    env!("DEVGRID_BUILT_AT"),
    ")"
);
