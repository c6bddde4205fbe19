use std::path::{Path, PathBuf};

use log::trace;
use regex::Regex;
use walkdir::WalkDir;

/// Collect all Markdown files under a content directory, recursively.
#[must_use]
pub fn collect_markdown_files(root: &Path) -> Vec<PathBuf> {
  let mut files = Vec::new();

  for entry in WalkDir::new(root)
    .follow_links(true)
    .sort_by_file_name()
    .into_iter()
    .filter_map(Result::ok)
  {
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
      files.push(path.to_owned());
    }
  }

  trace!("Found {} markdown files under {}", files.len(), root.display());
  files
}

/// Fallback for static regexes that failed to compile.
///
/// The pattern asserts something impossible and is guaranteed to be valid,
/// so a broken pattern degrades to "never matches" instead of panicking.
#[must_use]
#[allow(clippy::expect_used, reason = "The fallback pattern is known valid")]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").expect("Failed to compile never-matching regex")
}
