//! Probe-then-extract composition used by callers.

use crate::config::ProbeConfig;
use crate::error::CoreResult;
use crate::external::{FfmpegProber, Prober};
use crate::metadata::{MediaMetadata, extract};

use std::path::Path;

/// Probes `path` with the default ffmpeg configuration and extracts metadata.
pub fn probe_and_extract(path: &Path) -> CoreResult<MediaMetadata> {
    probe_and_extract_with(&FfmpegProber::new(ProbeConfig::default()), path)
}

/// Probes `path` with the given prober and extracts metadata.
///
/// Probe errors propagate unchanged; in particular no extraction is attempted
/// when the tool exits with an unexpected status.
pub fn probe_and_extract_with<P: Prober + ?Sized>(
    prober: &P,
    path: &Path,
) -> CoreResult<MediaMetadata> {
    log::info!("Analyzing {}", path.display());
    let output = prober.probe(path)?;
    let metadata = extract(&output.diagnostic_text);
    if !metadata.has_any() {
        log::warn!("No metadata recognised for {}", path.display());
    }
    Ok(metadata)
}
