// vidmeta-cli/src/lib.rs
//
// Library portion of the Vidmeta CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{AnalyzeArgs, Cli, Commands, MergeArgs, ToolArgs, VersionArgs};
pub use commands::analyze::run_analyze;
pub use commands::merge::run_merge;
pub use commands::version::run_version;
