//! This module provides the `TapeLoader` struct, responsible for loading locator tapes
//! from various sources, including files and strings.
//!
//! A `.tape` file holds a single tape. Blank lines and lines starting with `#` are
//! ignored; the rest of the file is concatenated and parsed as the tape.

use crate::parser::{parse, Layout};
use crate::types::LocatorError;
use std::fs;
use std::path::{Path, PathBuf};

/// The file extension of tape files.
pub const TAPE_EXTENSION: &str = "tape";

/// `TapeLoader` is a utility struct for loading locator tapes.
pub struct TapeLoader;

impl TapeLoader {
    /// Loads a single tape from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(Layout)` if the file is successfully read and parsed.
    /// * `Err(LocatorError::FileError)` if the file cannot be read.
    /// * `Err(LocatorError::ParseError | ValidationError)` if the content is not a valid tape.
    pub fn load_tape(path: &Path) -> Result<Layout, LocatorError> {
        let content = fs::read_to_string(path).map_err(|e| {
            LocatorError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_tape_from_string(&content)
    }

    /// Loads a single tape from the provided string content, skipping comments.
    pub fn load_tape_from_string(content: &str) -> Result<Layout, LocatorError> {
        let tape: String = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        parse(&tape)
    }

    /// Loads all tape files (`.tape` extension) from a given directory.
    ///
    /// Directories and files with other extensions are skipped. Each element of the
    /// result is either the loaded tape with its path, or the error for that file.
    pub fn load_tapes(directory: &Path) -> Vec<Result<(PathBuf, Layout), LocatorError>> {
        if !directory.exists() {
            return vec![Err(LocatorError::FileError(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(LocatorError::FileError(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        let mut results: Vec<_> = entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        return Some(Err(LocatorError::FileError(format!(
                            "Failed to read directory entry: {}",
                            e
                        ))))
                    }
                };

                let path = entry.path();

                if path.is_dir() || path.extension().is_none_or(|ext| ext != TAPE_EXTENSION) {
                    return None;
                }

                match Self::load_tape(&path) {
                    Ok(layout) => Some(Ok((path, layout))),
                    Err(e) => Some(Err(LocatorError::FileError(format!(
                        "Failed to load tape from {}: {}",
                        path.display(),
                        e
                    )))),
                }
            })
            .collect();

        // `read_dir` order is platform dependent.
        results.sort_by(|a, b| match (a, b) {
            (Ok((a, _)), Ok((b, _))) => a.cmp(b),
            (Ok(_), Err(_)) => std::cmp::Ordering::Less,
            (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
            (Err(_), Err(_)) => std::cmp::Ordering::Equal,
        });

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &str) {
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_valid_tape() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("mismatch.tape");
        write_file(&file_path, "# target 11, one candidate\nY11X00Y\n");

        let layout = TapeLoader::load_tape(&file_path).unwrap();
        assert_eq!(layout.to_string(), "Y11X00Y");
        assert_eq!(layout.head(), 3);
    }

    #[test]
    fn test_load_multiline_tape() {
        let layout = TapeLoader::load_tape_from_string("Y10\n  X011\n\nX10Y\n").unwrap();
        assert_eq!(layout.to_string(), "Y10X011X10Y");
    }

    #[test]
    fn test_load_invalid_tape() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.tape");
        write_file(&file_path, "YX11Y");

        let result = TapeLoader::load_tape(&file_path);
        assert!(matches!(result, Err(LocatorError::ValidationError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = TapeLoader::load_tape(&dir.path().join("missing.tape"));
        assert!(matches!(result, Err(LocatorError::FileError(_))));
    }

    #[test]
    fn test_load_tapes_from_directory() {
        let dir = tempdir().unwrap();

        write_file(&dir.path().join("b.tape"), "Y11X11Y");
        write_file(&dir.path().join("a.tape"), "Y11X00Y");
        write_file(&dir.path().join("broken.tape"), "Y11X1");
        write_file(&dir.path().join("ignored.txt"), "Y11X00Y");
        fs::create_dir(dir.path().join("nested.tape")).unwrap();

        let results = TapeLoader::load_tapes(dir.path());
        assert_eq!(results.len(), 3);

        let loaded: Vec<String> = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|(_, layout)| layout.to_string())
            .collect();
        assert_eq!(loaded, vec!["Y11X00Y", "Y11X11Y"]);

        let error = results.last().unwrap().as_ref().unwrap_err();
        assert!(error.to_string().contains("broken.tape"));
    }

    #[test]
    fn test_load_tapes_missing_directory() {
        let dir = tempdir().unwrap();
        let results = TapeLoader::load_tapes(&dir.path().join("nope"));

        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(LocatorError::FileError(_))));
    }
}
