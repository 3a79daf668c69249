//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `analyze` command.
/// This command probes video files and prints their extracted metadata.
pub mod analyze;

/// Module containing the implementation of the `merge` command.
pub mod merge;

/// Module containing the implementation of the `version` command.
pub mod version;
