//! Recursive sidebar synthesis from toctree directives.
//!
//! The synthesizer walks a content tree once, at configuration-build time:
//! it parses the root index document's directive, resolves every entry to a
//! file, and recurses into subdirectories whose `index.md` is referenced as
//! an entry. The whole pass is synchronous and single-threaded; every
//! document is read at most twice (directive extraction and title
//! resolution) and nothing is cached across builds.

use std::{
  collections::BTreeSet,
  fs, io,
  path::{Path, PathBuf},
  str::FromStr,
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  directive::extract_toctree,
  route::{self, INDEX_FILE},
  title,
  types::NavItem,
};

/// Error type for sidebar synthesis.
#[derive(Debug, Error)]
pub enum SidebarError {
  /// A toctree entry referenced a file that does not exist. Only raised
  /// under [`Strictness::Strict`]; the lenient mode skips and warns.
  #[error("toctree entry `{entry}` in {}: file not found", index.display())]
  MissingEntry {
    entry: String,
    index: PathBuf,
  },

  /// A toctree entry resolved to a file outside its own section directory,
  /// e.g. via `..` segments. Only raised under [`Strictness::Strict`].
  #[error("toctree entry `{entry}` in {}: escapes the section directory", index.display())]
  EscapedEntry {
    entry: String,
    index: PathBuf,
  },

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

/// How to treat toctree entries whose target file does not exist.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
  /// Skip the entry and log a warning. This is the default policy; a
  /// missing file never aborts the build.
  #[default]
  Lenient,

  /// Fail the build on the first missing entry.
  Strict,
}

impl FromStr for Strictness {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "lenient" => Ok(Self::Lenient),
      "strict" => Ok(Self::Strict),
      _ => Err(format!("Unknown strictness mode: {s}")),
    }
  }
}

/// Result of one synthesis pass.
#[derive(Debug, Clone, Default)]
pub struct SidebarResult {
  /// The synthesized navigation tree, in directive entry order.
  pub items: Vec<NavItem>,

  /// Every source file a navigation node was built from, including the
  /// index documents themselves. Used by orphan detection.
  pub resolved_files: BTreeSet<PathBuf>,

  /// Raw entry references that were skipped because their target file was
  /// missing. One warning is logged per skipped entry.
  pub skipped_entries: Vec<String>,
}

/// Builds a navigation tree from a content root's toctree directives.
///
/// Routes are always computed relative to the original content root and
/// joined under the fixed base route, so recursion into a subsection only
/// changes the directory entries are resolved against.
#[derive(Debug, Clone)]
pub struct SidebarSynthesizer {
  root:       PathBuf,
  base_route: String,
  strictness: Strictness,
}

impl SidebarSynthesizer {
  /// Create a synthesizer for a content root served under a base route.
  pub fn new(root: impl Into<PathBuf>, base_route: impl Into<String>) -> Self {
    Self {
      root:       root.into(),
      base_route: route::normalize_route(&base_route.into()),
      strictness: Strictness::default(),
    }
  }

  /// Set the missing-entry policy.
  #[must_use]
  pub const fn strictness(mut self, strictness: Strictness) -> Self {
    self.strictness = strictness;
    self
  }

  /// Build the full sidebar tree from the root directory's `index.md`.
  ///
  /// A root index that is missing, unreadable, or carries no toctree
  /// directive yields an empty sidebar; none of those are errors.
  ///
  /// # Errors
  ///
  /// Under [`Strictness::Strict`], returns [`SidebarError::MissingEntry`]
  /// for the first directive entry whose target file does not exist, or
  /// [`SidebarError::EscapedEntry`] for one resolving outside its section
  /// directory.
  pub fn synthesize(&self) -> Result<SidebarResult, SidebarError> {
    let index = self.root.join(INDEX_FILE);
    let mut result = SidebarResult::default();

    if index.is_file() {
      result.resolved_files.insert(index.clone());
    }

    result.items = self.synthesize_section(&self.root, &index, &mut result)?;
    debug!(
      "Synthesized {} top-level sidebar items from {}",
      result.items.len(),
      index.display()
    );

    Ok(result)
  }

  /// Build the navigation nodes for one section.
  ///
  /// `scan_dir` is the directory entry references are resolved against; it
  /// changes on recursion while routes stay anchored to `self.root`.
  fn synthesize_section(
    &self,
    scan_dir: &Path,
    index: &Path,
    result: &mut SidebarResult,
  ) -> Result<Vec<NavItem>, SidebarError> {
    // An unreadable index document contributes no children; per policy
    // this is indistinguishable from a missing directive.
    let Ok(text) = fs::read_to_string(index) else {
      return Ok(Vec::new());
    };
    let Some(toctree) = extract_toctree(&text) else {
      return Ok(Vec::new());
    };

    let scan_canon = scan_dir.canonicalize().ok();
    let mut items = Vec::with_capacity(toctree.entries.len());
    for entry in &toctree.entries {
      let file = route::source_path(scan_dir, entry);

      if !file.is_file() {
        match self.strictness {
          Strictness::Lenient => {
            warn!(
              "Skipping toctree entry `{entry}` in {}: {} does not exist",
              index.display(),
              file.display()
            );
            result.skipped_entries.push(entry.clone());
            continue;
          },
          Strictness::Strict => {
            return Err(SidebarError::MissingEntry {
              entry: entry.clone(),
              index: index.to_path_buf(),
            });
          },
        }
      }

      // Entries may only reference files within their own section; an
      // entry escaping through `..` could otherwise recurse back into an
      // ancestor index and never terminate.
      if let Some(scan_canon) = &scan_canon
        && let Ok(file_canon) = file.canonicalize()
        && !file_canon.starts_with(scan_canon)
      {
        match self.strictness {
          Strictness::Lenient => {
            warn!(
              "Skipping toctree entry `{entry}` in {}: {} is outside the \
               section directory",
              index.display(),
              file.display()
            );
            result.skipped_entries.push(entry.clone());
            continue;
          },
          Strictness::Strict => {
            return Err(SidebarError::EscapedEntry {
              entry: entry.clone(),
              index: index.to_path_buf(),
            });
          },
        }
      }

      result.resolved_files.insert(file.clone());
      let link = route::route_for(&self.root, &file, &self.base_route);
      let text = title::resolve_title(&file);

      if route::is_section_index(scan_dir, &file) {
        let subdir = file.parent().unwrap_or(scan_dir).to_path_buf();
        let nested = self.synthesize_section(&subdir, &file, result)?;
        items.push(NavItem::section(text, link, nested));
      } else {
        items.push(NavItem::leaf(text, link));
      }
    }

    Ok(items)
  }
}
