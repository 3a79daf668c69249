// vidmeta-cli/src/output.rs
//
// Terminal rendering of extracted metadata: a styled text report per file, or
// one JSON object per line with --json. Also the per-file merge results.

use console::style;
use serde_json::{Value, json};
use std::path::Path;
use vidmeta_core::{MediaMetadata, MergeReport};

/// Labelled report sections, in display order, with placeholders applied.
pub fn report_sections(metadata: &MediaMetadata) -> Vec<(&'static str, String)> {
    vec![
        ("Title", metadata.title_or_placeholder().to_string()),
        ("Episode", metadata.episode_or_placeholder().to_string()),
        ("Duration", metadata.duration_or_placeholder().to_string()),
        ("Video Stream Information", metadata.video_streams_or_placeholder()),
        ("Audio Stream Information", metadata.audio_streams_or_placeholder()),
    ]
}

/// JSON object for one analyzed file.
pub fn json_report(path: &Path, metadata: &MediaMetadata) -> Value {
    json!({
        "path": path.display().to_string(),
        "title": metadata.title,
        "episode": metadata.episode,
        "duration": metadata.duration,
        "video_streams": metadata.video_streams,
        "audio_streams": metadata.audio_streams,
    })
}

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);

    println!("\n{}", style(&line).blue().bright());
    println!(" {} ", style(text).bold().white());
    println!("{}", style(&line).blue().bright());
}

/// Print the text report for one file.
pub fn print_metadata_report(path: &Path, metadata: &MediaMetadata) {
    print_heading(&path.display().to_string());
    for (label, body) in report_sections(metadata) {
        println!("\n{}", style(label).cyan().bright().bold());
        for line in body.lines() {
            println!("  {}", line);
        }
    }
}

/// Print the JSON report for one file on a single line.
pub fn print_json_report(path: &Path, metadata: &MediaMetadata) {
    println!("{}", json_report(path, metadata));
}

/// Print the result of merging one file: the output path on success, or the
/// error and whatever the tool wrote to stderr.
pub fn print_merge_report(report: &MergeReport) {
    let name = report.input.display();
    match &report.result {
        Ok(()) => println!(
            "{} {} -> {}",
            style("Processed").green().bold(),
            name,
            report.output.display()
        ),
        Err(e) => {
            print_error(&format!("processing {}: {}", name, e));
            if let Some(text) = e.diagnostic_text().filter(|t| !t.trim().is_empty()) {
                for line in text.lines() {
                    eprintln!("  {}", line);
                }
            }
        }
    }
}

/// Print an error line on stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold().for_stderr(), message);
}
