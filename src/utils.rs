// ABOUTME: Utility functions for the lesson-deck application
// ABOUTME: Provides text sanitization plus path validation helpers

use crate::errors::{DeckError, Result};
use std::fs;
use std::path::Path;

/// Remove emphasis markers and normalize line endings in generated text.
///
/// Generated lesson plans use `*` for bold and bullets; slides show the
/// plain text, so every asterisk is removed.
pub fn strip_emphasis(text: &str) -> String {
    text.replace("\r\n", "\n").replace('*', "")
}

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeckError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(DeckError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(DeckError::FileReadError)?;
    } else if !path.is_dir() {
        return Err(DeckError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

/// Read a lesson text file, optionally stripping emphasis markers
pub fn read_lesson_text(path: &Path, strip: bool) -> Result<String> {
    validate_file_exists(path)?;
    let raw = fs::read_to_string(path).map_err(DeckError::FileReadError)?;
    Ok(if strip { strip_emphasis(&raw) } else { raw })
}
