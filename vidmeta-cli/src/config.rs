// vidmeta-cli/src/config.rs
//
// Defines default configuration constants for the `vidmeta-cli` application,
// primarily where to find the inspection tool.

/// Inspection tool used when neither --ffmpeg nor VIDMETA_FFMPEG is given.
pub const DEFAULT_FFMPEG: &str = vidmeta_core::config::DEFAULT_TOOL;

/// Environment variable naming the ffmpeg executable.
pub const ENV_FFMPEG: &str = "VIDMETA_FFMPEG";

/// Environment variable holding comma-separated fallback search directories.
pub const ENV_SEARCH_PATH: &str = "VIDMETA_SEARCH_PATH";
