//! Implementation of the 'analyze' subcommand.
//!
//! Resolves the input into a list of video files, probes each one through
//! vidmeta-core and prints the extracted metadata.

use crate::cli::AnalyzeArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output;

use vidmeta_core::{CoreError, FfmpegProber, probe_and_extract_with};

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

/// Resolves the input path (file or directory) into the files to analyze.
///
/// A file is accepted whatever its extension; a directory contributes its
/// top-level .mp4/.mkv/.avi files.
pub fn discover_input_files(input_path: &Path) -> CliResult<Vec<PathBuf>> {
    let input_path = input_path
        .canonicalize()
        .cli_with_context(|| format!("Invalid input path '{}'", input_path.display()))?;

    let metadata = fs::metadata(&input_path)
        .cli_with_context(|| format!("Failed to access input path '{}'", input_path.display()))?;

    if metadata.is_dir() {
        vidmeta_core::find_video_files(&input_path)
    } else if metadata.is_file() {
        if !vidmeta_core::is_supported_video_file(&input_path) {
            warn!(
                "'{}' does not have a .mp4, .mkv or .avi extension; analyzing anyway",
                input_path.display()
            );
        }
        Ok(vec![input_path])
    } else {
        Err(CoreError::PathError(format!(
            "Input path '{}' is neither a file nor a directory",
            input_path.display()
        )))
    }
}

/// Runs the analyze command.
///
/// With a single file, probe errors are returned unchanged. With a directory,
/// each failure is reported and the remaining files are still analyzed; the
/// command fails at the end if any file failed.
pub fn run_analyze(args: AnalyzeArgs) -> CliResult<()> {
    let files = discover_input_files(&args.input_path)?;
    let prober = FfmpegProber::new(args.tool.to_probe_config());
    debug!("Using probe configuration: {:?}", prober.config());

    if let [file] = files.as_slice() {
        let metadata = probe_and_extract_with(&prober, file)?;
        report(file, &metadata, args.json);
        return Ok(());
    }

    info!("Analyzing {} files", files.len());
    let mut failed = 0usize;
    for file in &files {
        match probe_and_extract_with(&prober, file) {
            Ok(metadata) => report(file, &metadata, args.json),
            Err(e) => {
                error!("Failed to analyze {}: {}", file.display(), e);
                output::print_error(&format!("{}: {}", file.display(), e));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CoreError::OperationFailed(format!(
            "{} of {} files could not be analyzed",
            failed,
            files.len()
        )));
    }
    Ok(())
}

fn report(path: &Path, metadata: &vidmeta_core::MediaMetadata, json: bool) {
    if json {
        output::print_json_report(path, metadata);
    } else {
        output::print_metadata_report(path, metadata);
    }
}
