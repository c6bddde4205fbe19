//! Resolution of toctree entry references to source paths and site routes.
//!
//! Routes are derived from a file's location relative to a fixed content
//! root: separators are normalized to forward slashes, the `.md` extension
//! is stripped, and a directory's `index.md` collapses to the directory's
//! own route with a trailing slash. Only an exact base-name match of
//! `index.md` is treated as special.

use std::path::{Component, Path, PathBuf};

/// Reserved base name of a section's index document.
pub const INDEX_FILE: &str = "index.md";

/// Resolve a raw entry reference against a directory, appending the `.md`
/// extension when the reference omits it.
#[must_use]
pub fn source_path(dir: &Path, entry: &str) -> PathBuf {
  if entry.ends_with(".md") {
    dir.join(entry)
  } else {
    dir.join(format!("{entry}.md"))
  }
}

/// Compute the site-relative route for a resolved source path.
///
/// `base` is the fixed route prefix the site is served under. A trailing
/// `index.md` collapses to its containing directory's route (with trailing
/// slash); the root's own index collapses to `base` itself.
#[must_use]
pub fn route_for(root: &Path, path: &Path, base: &str) -> String {
  let rel = path.strip_prefix(root).unwrap_or(path);

  let mut segments: Vec<String> = rel
    .components()
    .filter_map(|c| {
      match c {
        Component::Normal(seg) => Some(seg.to_string_lossy().into_owned()),
        _ => None,
      }
    })
    .collect();

  let is_index = segments.last().is_some_and(|s| s == INDEX_FILE);
  if is_index {
    segments.pop();
  } else if let Some(last) = segments.last_mut()
    && let Some(stripped) = last.strip_suffix(".md")
  {
    *last = stripped.to_string();
  }

  let mut route = String::from(base.trim_end_matches('/'));
  route.push('/');
  route.push_str(&segments.join("/"));
  if is_index && !route.ends_with('/') {
    route.push('/');
  }

  normalize_route(&route)
}

/// Collapse any run of trailing slashes down to exactly one.
///
/// Idempotent: normalizing an already-normalized route is a no-op.
#[must_use]
pub fn normalize_route(route: &str) -> String {
  let trimmed = route.trim_end_matches('/');
  if route.len() > trimmed.len() {
    format!("{trimmed}/")
  } else {
    route.to_string()
  }
}

/// Whether a resolved path is a subsection index: its base name is exactly
/// `index.md` and its containing directory is not the directory currently
/// being scanned. The scanned directory's own index never qualifies, which
/// is what bounds the recursion.
#[must_use]
pub fn is_section_index(scan_dir: &Path, path: &Path) -> bool {
  path.file_name().is_some_and(|name| name == INDEX_FILE)
    && path.parent() != Some(scan_dir)
}
