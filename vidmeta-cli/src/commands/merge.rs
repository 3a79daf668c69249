//! Implementation of the 'merge' subcommand.
//!
//! Resolves the input the same way `analyze` does and writes one
//! `<name>_combined.mkv` per video file.

use crate::cli::MergeArgs;
use crate::commands::analyze::discover_input_files;
use crate::error::CliResult;
use crate::output;

use vidmeta_core::{CoreError, FfmpegMerger, is_combined_output, merge_files_with};

use std::path::PathBuf;

use log::{debug, info};

/// Drops outputs of earlier merges so a directory can be merged again
/// without producing `_combined_combined.mkv` files.
fn merge_inputs(files: Vec<PathBuf>) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|file| {
            let keep = !is_combined_output(file);
            if !keep {
                debug!("Skipping earlier merge output {}", file.display());
            }
            keep
        })
        .collect()
}

/// Runs the merge command.
///
/// Every file is attempted and reported; the command fails at the end if
/// any merge failed.
pub fn run_merge(args: MergeArgs) -> CliResult<()> {
    let files = merge_inputs(discover_input_files(&args.input_path)?);
    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    let merger = FfmpegMerger::new(args.tool.to_probe_config()).overwrite(args.overwrite);
    debug!("Using merge configuration: {:?}", merger.config());
    info!("Merging {} file(s)", files.len());

    let reports = merge_files_with(&merger, &files);
    for report in &reports {
        output::print_merge_report(report);
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        return Err(CoreError::OperationFailed(format!(
            "{} of {} files could not be merged",
            failed,
            reports.len()
        )));
    }
    Ok(())
}
