use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use log::info;
use sitetoc_toctree::{SidebarResult, utils::collect_markdown_files};

use crate::manifest::SiteManifest;

/// Write the site manifest as pretty-printed JSON.
pub fn write_manifest(manifest: &SiteManifest, path: &Path) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
  }

  let mut json = serde_json::to_string_pretty(manifest)
    .wrap_err("Failed to serialize site manifest")?;
  json.push('\n');

  fs::write(path, json).wrap_err_with(|| {
    format!("Failed to write site manifest to {}", path.display())
  })?;

  info!("Site manifest written to {}", path.display());
  Ok(())
}

/// Find Markdown files under the content root that no toctree references.
///
/// The returned paths are relative to the content root, sorted.
#[must_use]
pub fn find_orphans(
  content_dir: &Path,
  sidebar: &SidebarResult,
) -> Vec<PathBuf> {
  collect_markdown_files(content_dir)
    .into_iter()
    .filter(|file| !sidebar.resolved_files.contains(file))
    .map(|file| {
      file
        .strip_prefix(content_dir)
        .map_or_else(|_| file.clone(), Path::to_path_buf)
    })
    .collect()
}
