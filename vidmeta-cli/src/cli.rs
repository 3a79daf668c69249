// vidmeta-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use crate::config::{DEFAULT_FFMPEG, ENV_FFMPEG, ENV_SEARCH_PATH};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vidmeta_core::config::{ProbeConfig, ProbeConfigBuilder};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidmeta: Video metadata viewer",
    long_about = "Shows the title, episode, duration and stream information ffmpeg reports for video files, and merges video and audio tracks into combined Matroska files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyzes a video file, or every supported video file in a directory
    Analyze(AnalyzeArgs),
    /// Copies the first video and first two audio tracks into <name>_combined.mkv
    Merge(MergeArgs),
    /// Prints the version line reported by ffmpeg
    Version(VersionArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Video file or directory containing .mp4/.mkv/.avi files
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Print one JSON object per file instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub tool: ToolArgs,
}

#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Video file or directory containing .mp4/.mkv/.avi files
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Replace existing _combined.mkv files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[command(flatten)]
    pub tool: ToolArgs,
}

#[derive(Parser, Debug)]
pub struct VersionArgs {
    #[command(flatten)]
    pub tool: ToolArgs,
}

/// Options locating the inspection tool, shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// ffmpeg executable name or path.
    /// Can also be set via the VIDMETA_FFMPEG environment variable.
    #[arg(long = "ffmpeg", value_name = "PATH", env = ENV_FFMPEG, default_value = DEFAULT_FFMPEG)]
    pub ffmpeg: PathBuf,

    /// Extra directory to search when ffmpeg is not on PATH (repeatable, comma-separated).
    /// Can also be set via the VIDMETA_SEARCH_PATH environment variable.
    #[arg(long = "search-path", value_name = "DIR", env = ENV_SEARCH_PATH, value_delimiter = ',')]
    pub search_paths: Vec<PathBuf>,
}

impl ToolArgs {
    pub fn to_probe_config(&self) -> ProbeConfig {
        ProbeConfigBuilder::new()
            .tool(self.ffmpeg.clone())
            .search_paths(self.search_paths.clone())
            .build()
    }
}
