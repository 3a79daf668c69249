// ============================================================================
// vidmeta-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ProbeConfig
//
// Provides a fluent API for assembling a ProbeConfig from CLI flags,
// environment variables or library callers, starting from the defaults.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::ProbeConfig;

/// Builder for creating ProbeConfig instances.
///
/// # Examples
///
/// ```rust
/// use vidmeta_core::config::ProbeConfigBuilder;
///
/// let config = ProbeConfigBuilder::new()
///     .tool("ffmpeg")
///     .expected_exit_status(1)
///     .search_paths(vec!["C:\\ffmpeg\\bin".into()])
///     .build();
/// assert_eq!(config.search_paths.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    /// Creates a new builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the executable name or path of the inspection tool.
    pub fn tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.config.tool = tool.into();
        self
    }

    /// Sets the exit status treated as a successful inspection.
    pub fn expected_exit_status(mut self, status: i32) -> Self {
        self.config.expected_exit_status = status;
        self
    }

    /// Appends one directory to the fallback search list.
    pub fn search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.search_paths.push(dir.into());
        self
    }

    /// Appends several directories to the fallback search list.
    pub fn search_paths(mut self, dirs: Vec<PathBuf>) -> Self {
        self.config.search_paths.extend(dirs);
        self
    }

    /// Builds the ProbeConfig.
    pub fn build(self) -> ProbeConfig {
        self.config
    }
}
