// ============================================================================
// vidmeta-core/src/metadata.rs
// ============================================================================
//
// METADATA EXTRACTION: Best-Effort Parsing of Inspection Diagnostics
//
// The inspection tool's diagnostic stream is free text written for humans and
// changes between releases. Extraction is therefore a single pass of plain
// substring tests over trimmed lines, and anything unrecognised is skipped.
//
// KEY COMPONENTS:
// - MediaMetadata: the record handed back to callers
// - extract: diagnostic text -> MediaMetadata (pure, never fails)
// - Placeholder helpers used when rendering absent fields
//
// FIELD POLICIES:
// - title, episode, duration: the first line that gives a non-empty value wins;
//   an empty value is kept only until a later line supplies a real one
// - video_streams, audio_streams: every matching line is kept, in order

// ---- External crate imports ----
use serde::Serialize;

// ============================================================================
// MARKERS
// ============================================================================

const TITLE_MARKER: &str = "title";
const EPISODE_MARKER: &str = "episode_id";
const DURATION_MARKER: &str = "Duration";
const DURATION_PREFIX: &str = "Duration:";
const STREAM_MARKER: &str = "Stream";
const VIDEO_MARKER: &str = "Video:";
const AUDIO_MARKER: &str = "Audio:";

// ============================================================================
// PLACEHOLDERS
// ============================================================================

pub const NO_TITLE: &str = "No title information available.";
pub const NO_EPISODE: &str = "No episode information available.";
pub const NO_DURATION: &str = "No duration information available.";
pub const NO_VIDEO_STREAMS: &str = "No video stream information available.";
pub const NO_AUDIO_STREAMS: &str = "No audio stream information available.";

// ============================================================================
// METADATA RECORD
// ============================================================================

/// Metadata recovered from one inspection run.
///
/// `None` means no line supplied the field; `Some("")` means matching lines
/// were found but none of them carried a value. Rendering treats both alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaMetadata {
    /// Free-text title tag
    pub title: Option<String>,
    /// Free-text episode identifier tag
    pub episode: Option<String>,
    /// Duration as printed upstream, e.g. `00:42:13.20`
    pub duration: Option<String>,
    /// Full `Stream ... Video:` lines, in source order
    pub video_streams: Vec<String>,
    /// Full `Stream ... Audio:` lines, in source order
    pub audio_streams: Vec<String>,
}

impl MediaMetadata {
    /// True when at least one field was populated.
    pub fn has_any(&self) -> bool {
        self.title.is_some()
            || self.episode.is_some()
            || self.duration.is_some()
            || !self.video_streams.is_empty()
            || !self.audio_streams.is_empty()
    }

    /// Title, or the placeholder when absent or empty.
    pub fn title_or_placeholder(&self) -> &str {
        value_or(&self.title, NO_TITLE)
    }

    /// Episode identifier, or the placeholder when absent or empty.
    pub fn episode_or_placeholder(&self) -> &str {
        value_or(&self.episode, NO_EPISODE)
    }

    /// Duration, or the placeholder when absent or empty.
    pub fn duration_or_placeholder(&self) -> &str {
        value_or(&self.duration, NO_DURATION)
    }

    /// Video stream lines joined by newlines, or the placeholder.
    pub fn video_streams_or_placeholder(&self) -> String {
        join_or(&self.video_streams, NO_VIDEO_STREAMS)
    }

    /// Audio stream lines joined by newlines, or the placeholder.
    pub fn audio_streams_or_placeholder(&self) -> String {
        join_or(&self.audio_streams, NO_AUDIO_STREAMS)
    }
}

fn value_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => placeholder,
    }
}

fn join_or(lines: &[String], placeholder: &str) -> String {
    if lines.is_empty() {
        placeholder.to_string()
    } else {
        lines.join("\n")
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extracts metadata from the inspection tool's diagnostic text.
///
/// Each line is trimmed and tested against the markers in priority order
/// (title, episode, duration, stream); a line feeds at most one field.
///
/// # Examples
///
/// ```rust
/// use vidmeta_core::extract;
///
/// let text = "\
///     title           : My Show Title
///   Duration: 00:42:13.20, start: 0.000000, bitrate: 128 kb/s
///   Stream #0:0: Video: h264, yuv420p, 1920x1080
///   Stream #0:1: Audio: aac, 48000 Hz";
///
/// let metadata = extract(text);
/// assert_eq!(metadata.title.as_deref(), Some("My Show Title"));
/// assert_eq!(metadata.duration.as_deref(), Some("00:42:13.20"));
/// assert_eq!(metadata.video_streams.len(), 1);
/// assert_eq!(metadata.audio_streams.len(), 1);
/// ```
pub fn extract(diagnostic_text: &str) -> MediaMetadata {
    let mut metadata = MediaMetadata::default();

    for line in diagnostic_text.lines().map(str::trim) {
        if line.contains(TITLE_MARKER) && is_unset(&metadata.title) {
            fill(&mut metadata.title, value_after_colon(line));
        } else if line.contains(EPISODE_MARKER) && is_unset(&metadata.episode) {
            let value = line
                .find(EPISODE_MARKER)
                .and_then(|pos| value_after_colon(&line[pos..]));
            fill(&mut metadata.episode, value);
        } else if line.contains(DURATION_MARKER) && is_unset(&metadata.duration) {
            fill(&mut metadata.duration, duration_value(line));
        } else if line.contains(STREAM_MARKER) {
            if line.contains(VIDEO_MARKER) {
                metadata.video_streams.push(line.to_string());
            } else if line.contains(AUDIO_MARKER) {
                metadata.audio_streams.push(line.to_string());
            }
            // Subtitle and data streams are dropped.
        }
    }

    log::debug!(
        "Extracted metadata: title={}, episode={}, duration={}, {} video / {} audio stream(s)",
        metadata.title.is_some(),
        metadata.episode.is_some(),
        metadata.duration.is_some(),
        metadata.video_streams.len(),
        metadata.audio_streams.len()
    );

    metadata
}

/// A scalar field stays open until it holds a non-empty value.
fn is_unset(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

/// Stores `value` unless the line produced nothing; an earlier empty match
/// is never erased back to `None`.
fn fill(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *field = Some(value);
    }
}

/// Text after the first colon, trimmed. `None` if the line has no colon.
fn value_after_colon(line: &str) -> Option<String> {
    line.split_once(':').map(|(_, value)| value.trim().to_string())
}

/// Text between `Duration:` and the next comma, trimmed. Without a comma the
/// whole remainder is taken.
fn duration_value(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(DURATION_PREFIX)?;
    let value = rest.split(',').next().unwrap_or(rest);
    Some(value.trim().to_string())
}
