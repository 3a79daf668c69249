//! File discovery module for finding video files to inspect.
//!
//! Recognises the container extensions the viewer has always offered in its
//! file picker (.mp4, .mkv, .avi, case-insensitive) and only looks at the top
//! level of a directory.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Extensions offered for inspection.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi"];

/// Returns true when `path` has one of the supported video extensions.
pub fn is_supported_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Finds supported video files in the top level of `input_dir`.
///
/// Files are returned sorted by path so repeated runs print in a stable order.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The discovered files
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoFilesFound)` - If no supported files are present
///
/// # Examples
///
/// ```rust,no_run
/// use vidmeta_core::find_video_files;
/// use std::path::Path;
///
/// match find_video_files(Path::new("/path/to/videos")) {
///     Ok(files) => {
///         for file in files {
///             println!("{}", file.display());
///         }
///     }
///     Err(e) => println!("Error finding video files: {}", e),
/// }
/// ```
pub fn find_video_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            (path.is_file() && is_supported_video_file(&path)).then_some(path)
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    files.sort();
    log::debug!(
        "Found {} video file(s) in {}",
        files.len(),
        input_dir.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_video_file(Path::new("a.mkv")));
        assert!(is_supported_video_file(Path::new("a.MP4")));
        assert!(is_supported_video_file(Path::new("/x/y/a.Avi")));
        assert!(!is_supported_video_file(Path::new("a.txt")));
        assert!(!is_supported_video_file(Path::new("mkv")));
    }

    #[test]
    fn test_find_video_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.mkv"), "").unwrap();
        fs::write(dir.path().join("a.MP4"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub.mkv")).unwrap();

        let files = find_video_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.MP4"), dir.path().join("b.mkv")]
        );
    }

    #[test]
    fn test_find_video_files_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_video_files(dir.path()),
            Err(CoreError::NoFilesFound)
        ));
    }

    #[test]
    fn test_find_video_files_missing_dir() {
        assert!(matches!(
            find_video_files(Path::new("/definitely/not/a/dir")),
            Err(CoreError::Io(_))
        ));
    }
}
