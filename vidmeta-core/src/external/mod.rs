// ============================================================================
// vidmeta-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Inspection Executable
//
// This module encapsulates every interaction with the external media
// inspection tool: the inspection-only run whose diagnostic stream feeds the
// metadata extractor, the multitrack merge, and the version query shown to
// users.
//
// KEY COMPONENTS:
// - Prober trait: the seam between callers and the external process
// - FfmpegProber: concrete implementation spawning the configured tool
// - Merger trait / FfmpegMerger: stream-copy merge into `<stem>_combined.mkv`
// - get_tool_version: first line of `<tool> -version`
//
// Callers may substitute their own Prober, which is how the unit tests run
// without a real ffmpeg installation.

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Spawns the inspection tool and captures its diagnostic stream
pub mod prober;

/// Copies selected video/audio tracks into a combined Matroska file
pub mod merger;

/// Queries the inspection tool for its version string
pub mod version;

#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use merger::FfmpegMerger;
pub use prober::FfmpegProber;
pub use version::get_tool_version;

// ============================================================================
// PROBER TRAIT
// ============================================================================

/// Raw result of an inspection-only run that exited with the expected status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Exit status reported by the tool
    pub exit_status: i32,
    /// Everything the tool wrote to its diagnostic stream, in order
    pub diagnostic_text: String,
}

/// Trait for running the inspection tool against a file.
///
/// Implementations spawn at most one child process per call and block until
/// it exits. Any status other than the tool's conventional "printed metadata"
/// status is reported as `CoreError::UnexpectedExitStatus`.
///
/// # Examples
///
/// ```rust
/// use vidmeta_core::external::{ProbeOutput, Prober};
/// use vidmeta_core::CoreResult;
/// use std::path::Path;
///
/// struct CannedProber;
///
/// impl Prober for CannedProber {
///     fn probe(&self, _path: &Path) -> CoreResult<ProbeOutput> {
///         Ok(ProbeOutput {
///             exit_status: 1,
///             diagnostic_text: "  Duration: 00:00:05.00, start: 0.000000".to_string(),
///         })
///     }
/// }
///
/// let metadata = vidmeta_core::probe_and_extract_with(&CannedProber, Path::new("clip.mkv")).unwrap();
/// assert_eq!(metadata.duration.as_deref(), Some("00:00:05.00"));
/// ```
pub trait Prober {
    /// Runs the inspection tool against `path` and returns its diagnostic text.
    fn probe(&self, path: &Path) -> CoreResult<ProbeOutput>;
}

// ============================================================================
// MERGER TRAIT
// ============================================================================

/// Trait for merging an input's selected tracks into a new file.
///
/// One child process per call; a non-zero exit is reported as
/// `CoreError::UnexpectedExitStatus` carrying the tool's diagnostic text.
pub trait Merger {
    /// Writes the merged tracks of `input` to `output`.
    fn merge(&self, input: &Path, output: &Path) -> CoreResult<()>;
}
