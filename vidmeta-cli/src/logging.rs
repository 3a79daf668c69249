// ============================================================================
// vidmeta-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the Vidmeta CLI
//
// Library code only talks to the `log` facade; this is the one place where a
// backend is installed. Logs go to stderr so stdout carries only reports.
//
// USAGE:
// - default: info
// - --verbose: debug
// - RUST_LOG=<filter>: overrides both

use env_logger::{Builder, Env, Target};

/// Returns the default filter for the given verbosity.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Installs env_logger. Call once, before any command runs.
pub fn init_logging(verbose: bool) {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .init();
}
