//! Display-title resolution for Markdown documents.
//!
//! Titles come from the first level-1 heading anywhere in the document;
//! documents without one get a title derived from their file name. Title
//! resolution is total and never fails.

use std::{fs, path::Path, sync::LazyLock};

use log::error;
use regex::Regex;

use crate::utils::never_matching_regex;

/// First top-level heading: `#` followed by whitespace then text.
static H1_HEADING: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap_or_else(|e| {
    error!("Failed to compile H1_HEADING regex: {e}");
    never_matching_regex()
  })
});

/// Runs of separator characters in file stems.
static STEM_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[-_]+").unwrap_or_else(|e| {
    error!("Failed to compile STEM_SEPARATORS regex: {e}");
    never_matching_regex()
  })
});

/// Extract the first level-1 heading from document text, if any.
///
/// The heading does not have to be the first line of the document.
#[must_use]
pub fn extract_title(text: &str) -> Option<String> {
  H1_HEADING
    .captures(text)
    .map(|caps| caps[1].trim().to_string())
}

/// Derive a title from a file's base name with the extension stripped.
///
/// Runs of hyphens and underscores become a single space and the first
/// letter of every word is uppercased: `getting-started.md` becomes
/// `Getting Started`.
#[must_use]
pub fn title_from_stem(path: &Path) -> String {
  let stem = path.file_stem().unwrap_or_default().to_string_lossy();
  let spaced = STEM_SEPARATORS.replace_all(&stem, " ");

  spaced
    .split_whitespace()
    .map(capitalize_first)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Resolve the display title for a Markdown file on disk.
///
/// Falls back to the file-name derivation when the file has no level-1
/// heading or cannot be read; an unreadable document is not an error here.
#[must_use]
pub fn resolve_title(path: &Path) -> String {
  fs::read_to_string(path)
    .ok()
    .and_then(|content| extract_title(&content))
    .unwrap_or_else(|| title_from_stem(path))
}

/// Capitalize the first letter of a string.
fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  chars.next().map_or_else(String::new, |c| {
    c.to_uppercase().collect::<String>() + chars.as_str()
  })
}
