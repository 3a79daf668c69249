//! Configuration structures and constants for the vidmeta-core library.
//!
//! This module describes which inspection tool to run, where to look for it,
//! and which exit status counts as a successful inspection.

mod builder;

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

pub use builder::ProbeConfigBuilder;

// Default constants

/// Default inspection executable, resolved through `PATH`.
pub const DEFAULT_TOOL: &str = "ffmpeg";

/// Exit status ffmpeg uses after printing stream information when no output
/// file was requested ("At least one output file must be specified").
pub const DEFAULT_EXPECTED_EXIT_STATUS: i32 = 1;

/// Configuration for the prober and the version query.
///
/// # Examples
///
/// ```rust
/// use vidmeta_core::config::ProbeConfigBuilder;
///
/// let config = ProbeConfigBuilder::new()
///     .tool("/opt/ffmpeg/bin/ffmpeg")
///     .search_path("/usr/local/ffmpeg/bin")
///     .build();
/// assert_eq!(config.expected_exit_status, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Executable name or path of the inspection tool
    pub tool: PathBuf,

    /// Exit status that means "ran and printed inspection metadata"
    pub expected_exit_status: i32,

    /// Extra directories searched when `tool` is a bare name not found on `PATH`
    pub search_paths: Vec<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_TOOL),
            expected_exit_status: DEFAULT_EXPECTED_EXIT_STATUS,
            search_paths: Vec::new(),
        }
    }
}

impl ProbeConfig {
    /// Creates a config for the given tool with default settings otherwise.
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            ..Self::default()
        }
    }

    /// Name used for the tool in log lines and error messages.
    pub fn tool_name(&self) -> String {
        self.tool.display().to_string()
    }

    /// Resolves `tool` to an executable path.
    ///
    /// A value with more than one path component is taken as a path and must
    /// exist. A bare name is looked up on `PATH` first, then in each of the
    /// configured `search_paths`.
    pub fn resolve_tool(&self) -> CoreResult<PathBuf> {
        if is_explicit_path(&self.tool) {
            if self.tool.is_file() {
                return Ok(self.tool.clone());
            }
            log::warn!("Configured tool path does not exist: {}", self.tool.display());
            return Err(CoreError::ToolNotFound(self.tool_name()));
        }

        if let Ok(found) = which::which(&self.tool) {
            log::debug!("Resolved {} on PATH: {}", self.tool_name(), found.display());
            return Ok(found);
        }

        let search_paths = self.valid_search_paths();
        if !search_paths.is_empty() {
            let cwd = std::env::current_dir().map_err(|e| {
                CoreError::ProbeFailed(format!("cannot determine working directory: {}", e))
            })?;
            for dir in search_paths {
                if let Ok(found) = which::which_in(&self.tool, Some(dir), &cwd) {
                    log::debug!(
                        "Resolved {} in configured search path: {}",
                        self.tool_name(),
                        found.display()
                    );
                    return Ok(found);
                }
            }
        }

        log::warn!("Dependency '{}' not found.", self.tool_name());
        Err(CoreError::ToolNotFound(self.tool_name()))
    }

    /// Search directories that can be handed to the lookup. An entry holding
    /// the platform's `PATH` separator cannot be represented and is skipped.
    fn valid_search_paths(&self) -> Vec<&PathBuf> {
        self.search_paths
            .iter()
            .filter(|dir| match std::env::join_paths([dir.as_os_str()]) {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("Skipping search path {}: {}", dir.display(), e);
                    false
                }
            })
            .collect()
    }
}

fn is_explicit_path(tool: &Path) -> bool {
    tool.components().count() > 1
}
