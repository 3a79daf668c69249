//! Multitrack merge through the external tool.
//!
//! Copies the first video track and the first two audio tracks of an input
//! into a Matroska file next to it, without re-encoding:
//!
//! ```text
//! <tool> -i <input> -map 0:v:0 -map 0:a:0 -map 0:a:1 -c:v copy -c:a copy <stem>_combined.mkv
//! ```

use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::Merger;
use crate::external::prober::spawn_error;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Suffix replacing the input's extension to form the merge output name.
pub const COMBINED_SUFFIX: &str = "_combined.mkv";

/// Stream selection: first video track, first and second audio tracks.
const STREAM_MAPS: [&str; 3] = ["0:v:0", "0:a:0", "0:a:1"];

/// Output path for merging `input`: the extension is replaced by
/// `_combined.mkv`, or the suffix is appended when there is no extension.
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use vidmeta_core::external::merger::combined_output_path;
///
/// assert_eq!(
///     combined_output_path(Path::new("/media/show.s01e02.mp4")),
///     PathBuf::from("/media/show.s01e02_combined.mkv")
/// );
/// ```
pub fn combined_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(COMBINED_SUFFIX);
    input.with_file_name(name)
}

/// True for files a previous merge produced.
pub fn is_combined_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(COMBINED_SUFFIX))
}

/// Arguments passed to the tool for one merge.
pub fn merge_args(input: &Path, output: &Path, overwrite: bool) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    if overwrite {
        args.push("-y".into());
    }
    args.push("-i".into());
    args.push(input.as_os_str().to_os_string());
    for map in STREAM_MAPS {
        args.push("-map".into());
        args.push(map.into());
    }
    args.extend(["-c:v", "copy", "-c:a", "copy"].map(OsString::from));
    args.push(output.as_os_str().to_os_string());
    args
}

/// Merger that spawns the configured ffmpeg.
#[derive(Debug, Clone, Default)]
pub struct FfmpegMerger {
    config: ProbeConfig,
    overwrite: bool,
}

impl FfmpegMerger {
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            config,
            overwrite: false,
        }
    }

    /// Replace existing output files instead of refusing to merge.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}

impl Merger for FfmpegMerger {
    fn merge(&self, input: &Path, output: &Path) -> CoreResult<()> {
        if !self.overwrite && output.exists() {
            return Err(CoreError::PathError(format!(
                "Output '{}' already exists",
                output.display()
            )));
        }

        let tool = self.config.resolve_tool()?;
        let args = merge_args(input, output, self.overwrite);
        log::debug!("Running: {} {:?}", tool.display(), args);

        let result = Command::new(&tool)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| spawn_error(&self.config.tool_name(), e))?;

        if result.status.success() {
            log::info!("Merged {} -> {}", input.display(), output.display());
            return Ok(());
        }

        let diagnostic_text = String::from_utf8_lossy(&result.stderr).into_owned();
        log::warn!(
            "{} failed to merge {} (status {:?})",
            self.config.tool_name(),
            input.display(),
            result.status.code()
        );
        Err(CoreError::UnexpectedExitStatus {
            tool: self.config.tool_name(),
            status: result.status.code(),
            diagnostic_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            combined_output_path(Path::new("/videos/pilot.mp4")),
            PathBuf::from("/videos/pilot_combined.mkv")
        );
        assert_eq!(
            combined_output_path(Path::new("clip.mkv")),
            PathBuf::from("clip_combined.mkv")
        );
    }

    #[test]
    fn test_output_path_only_drops_last_extension() {
        assert_eq!(
            combined_output_path(Path::new("show.s01e02.avi")),
            PathBuf::from("show.s01e02_combined.mkv")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(
            combined_output_path(Path::new("/videos/raw")),
            PathBuf::from("/videos/raw_combined.mkv")
        );
    }

    #[test]
    fn test_combined_output_detection() {
        assert!(is_combined_output(Path::new("/v/pilot_combined.mkv")));
        assert!(!is_combined_output(Path::new("/v/pilot.mkv")));
        assert!(!is_combined_output(Path::new("/v/combined.mp4")));
    }

    #[test]
    fn test_merge_args() {
        let args = merge_args(Path::new("in.mp4"), Path::new("in_combined.mkv"), false);
        let expected: Vec<OsString> = [
            "-i", "in.mp4", "-map", "0:v:0", "-map", "0:a:0", "-map", "0:a:1", "-c:v", "copy",
            "-c:a", "copy", "in_combined.mkv",
        ]
        .map(OsString::from)
        .to_vec();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_merge_args_overwrite() {
        let args = merge_args(Path::new("a.mkv"), Path::new("a_combined.mkv"), true);
        assert_eq!(args[0], OsString::from("-y"));
        assert_eq!(args.len(), 14);
    }

    #[test]
    fn test_existing_output_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("a_combined.mkv");
        std::fs::write(&output, "").unwrap();

        // The check happens before the tool is resolved.
        let merger = FfmpegMerger::new(ProbeConfig::new("vidmeta-no-such-inspection-tool"));
        match merger.merge(&dir.path().join("a.mkv"), &output) {
            Err(CoreError::PathError(msg)) => assert!(msg.contains("already exists")),
            other => panic!("expected PathError, got {:?}", other),
        }
    }
}
