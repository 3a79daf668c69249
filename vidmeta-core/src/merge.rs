//! Batch multitrack merge: one combined file per input, with a result per
//! file so one failure never stops the rest.

use crate::config::ProbeConfig;
use crate::error::CoreResult;
use crate::external::merger::combined_output_path;
use crate::external::{FfmpegMerger, Merger};

use std::path::{Path, PathBuf};

/// Outcome of merging one input.
#[derive(Debug)]
pub struct MergeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: CoreResult<()>,
}

impl MergeReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Merges `input` with the default ffmpeg configuration and returns the
/// output path.
pub fn merge(input: &Path) -> CoreResult<PathBuf> {
    merge_with(&FfmpegMerger::new(ProbeConfig::default()), input)
}

/// Merges `input` into `<stem>_combined.mkv` beside it.
pub fn merge_with<M: Merger + ?Sized>(merger: &M, input: &Path) -> CoreResult<PathBuf> {
    let output = combined_output_path(input);
    log::info!("Merging {}", input.display());
    merger.merge(input, &output)?;
    Ok(output)
}

/// Merges every input in order, collecting a report for each.
pub fn merge_files_with<M: Merger + ?Sized>(merger: &M, inputs: &[PathBuf]) -> Vec<MergeReport> {
    inputs
        .iter()
        .map(|input| {
            let output = combined_output_path(input);
            let result = merge_with(merger, input).map(|_| ());
            if let Err(e) = &result {
                log::error!("Failed to merge {}: {}", input.display(), e);
            }
            MergeReport {
                input: input.clone(),
                output,
                result,
            }
        })
        .collect()
}
