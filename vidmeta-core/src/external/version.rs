//! Version query for the inspection tool.
//!
//! The result is always a displayable string: failures are described in the
//! string itself rather than returned as errors.

use crate::config::ProbeConfig;
use crate::error::CoreError;

use std::io;
use std::process::{Command, Output, Stdio};

/// Shown when the tool cannot be located.
pub const TOOL_MISSING_MESSAGE: &str = "Error: FFmpeg is not installed or not in PATH.";

/// Returns the first line of `<tool> -version`, or a description of why it
/// could not be obtained.
///
/// ```rust,no_run
/// use vidmeta_core::config::ProbeConfig;
///
/// println!("{}", vidmeta_core::get_tool_version(&ProbeConfig::default()));
/// ```
pub fn get_tool_version(config: &ProbeConfig) -> String {
    let tool = match config.resolve_tool() {
        Ok(tool) => tool,
        Err(CoreError::ToolNotFound(_)) => return TOOL_MISSING_MESSAGE.to_string(),
        Err(e) => {
            log::error!("Could not resolve '{}': {}", config.tool_name(), e);
            return format!("Error while checking FFmpeg version: {}", e);
        }
    };

    log::debug!("Running: {} -version", tool.display());

    let result = Command::new(&tool)
        .arg("-version")
        .stdin(Stdio::null())
        .output();

    match result {
        Ok(output) => version_from_output(&output),
        Err(e) if e.kind() == io::ErrorKind::NotFound => TOOL_MISSING_MESSAGE.to_string(),
        Err(e) => {
            log::error!("Failed to start '{}': {}", config.tool_name(), e);
            format!("Error while checking FFmpeg version: {}", e)
        }
    }
}

fn version_from_output(output: &Output) -> String {
    if output.status.success() {
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::warn!("Version query failed: {}", stderr.trim());
        format!("Error while checking FFmpeg version: {}", stderr.trim())
    }
}
