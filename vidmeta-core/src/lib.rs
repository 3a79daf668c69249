//! Core library for inspecting video files through ffmpeg's diagnostic output.
//!
//! The prober runs the inspection tool in inspection-only mode and captures
//! its diagnostic stream; the extractor turns that text into a
//! [`MediaMetadata`] record. The merge operation copies an input's first
//! video track and first two audio tracks into `<stem>_combined.mkv`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidmeta_core::config::ProbeConfigBuilder;
//! use vidmeta_core::{FfmpegProber, probe_and_extract_with};
//! use std::path::Path;
//!
//! let config = ProbeConfigBuilder::new()
//!     .search_path("/opt/ffmpeg/bin")
//!     .build();
//! let prober = FfmpegProber::new(config);
//!
//! let metadata = probe_and_extract_with(&prober, Path::new("episode.mkv")).unwrap();
//! println!("{}", metadata.title_or_placeholder());
//! ```

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod merge;
pub mod metadata;

// Re-exports for public API
pub use analysis::{probe_and_extract, probe_and_extract_with};
pub use config::{ProbeConfig, ProbeConfigBuilder};
pub use discovery::{find_video_files, is_supported_video_file};
pub use error::{CoreError, CoreResult};
pub use external::merger::{combined_output_path, is_combined_output};
pub use external::{FfmpegMerger, FfmpegProber, Merger, ProbeOutput, Prober, get_tool_version};
pub use merge::{MergeReport, merge, merge_files_with, merge_with};
pub use metadata::{MediaMetadata, extract};
