//! Inspection-only invocation of the external tool.
//!
//! Runs `<tool> -i <path>` without an output file, so the tool prints what it
//! knows about the input to its diagnostic stream (stderr) and exits with its
//! conventional "no output file" status.

use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{ProbeOutput, Prober};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Prober that spawns the configured inspection tool.
#[derive(Debug, Clone, Default)]
pub struct FfmpegProber {
    config: ProbeConfig,
}

impl FfmpegProber {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}

impl Prober for FfmpegProber {
    fn probe(&self, path: &Path) -> CoreResult<ProbeOutput> {
        let tool = self.config.resolve_tool()?;

        let mut cmd = Command::new(&tool);
        cmd.arg("-i")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        log::debug!("Running: {} -i {}", tool.display(), path.display());

        let output = cmd
            .output()
            .map_err(|e| spawn_error(&self.config.tool_name(), e))?;

        let diagnostic_text = String::from_utf8_lossy(&output.stderr).into_owned();
        log::debug!(
            "{} exited with {:?}, captured {} bytes of diagnostic output",
            self.config.tool_name(),
            output.status.code(),
            diagnostic_text.len()
        );

        check_exit_status(&self.config, output.status.code(), diagnostic_text)
    }
}

/// Maps a spawn failure onto the error taxonomy.
pub(crate) fn spawn_error(tool: &str, err: io::Error) -> CoreError {
    if err.kind() == io::ErrorKind::NotFound {
        log::warn!("Dependency '{}' not found.", tool);
        CoreError::ToolNotFound(tool.to_string())
    } else {
        log::error!("Failed to start '{}': {}", tool, err);
        CoreError::ProbeFailed(format!("{}: {}", tool, err))
    }
}

/// Accepts only the configured "printed metadata" status.
fn check_exit_status(
    config: &ProbeConfig,
    status: Option<i32>,
    diagnostic_text: String,
) -> CoreResult<ProbeOutput> {
    match status {
        Some(code) if code == config.expected_exit_status => Ok(ProbeOutput {
            exit_status: code,
            diagnostic_text,
        }),
        _ => {
            log::warn!(
                "{} exited with {:?}, expected {}",
                config.tool_name(),
                status,
                config.expected_exit_status
            );
            Err(CoreError::UnexpectedExitStatus {
                tool: config.tool_name(),
                status,
                diagnostic_text,
            })
        }
    }
}
