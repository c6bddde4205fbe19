//! Assembly of the site manifest handed to the static site generator.

use color_eyre::eyre::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use sitetoc_config::{Config, nav::NavLink, theme::ThemeConfig};
use sitetoc_toctree::{NavItem, SidebarResult, SidebarSynthesizer};

/// The complete declarative site configuration: flat metadata straight from
/// [`Config`], plus the sidebar tree synthesized from the content tree's
/// toctree directives.
#[derive(Debug, Clone, Serialize)]
pub struct SiteManifest {
  pub title: String,

  #[serde(skip_serializing_if = "String::is_empty")]
  pub description: String,

  /// Effective base route, after any environment override.
  pub base: String,

  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub nav: Vec<NavLink>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub theme: Option<ThemeConfig>,

  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub rewrites: IndexMap<String, String>,

  pub sidebar: Vec<NavItem>,
}

/// Synthesize the sidebar and assemble the manifest for a configuration.
///
/// Returns the manifest together with the raw [`SidebarResult`] so callers
/// can inspect which files were resolved or skipped.
///
/// # Errors
///
/// Fails when sidebar synthesis fails, which under the default lenient
/// policy only happens on I/O errors outside the tolerated cases.
pub fn assemble(config: &Config) -> Result<(SiteManifest, SidebarResult)> {
  let base = config.resolved_base();
  let sidebar = SidebarSynthesizer::new(&config.content_dir, &base)
    .strictness(config.strictness)
    .synthesize()
    .wrap_err_with(|| {
      format!(
        "Failed to synthesize sidebar from {}",
        config.content_dir.display()
      )
    })?;

  let manifest = SiteManifest {
    title:       config.title.clone(),
    description: config.description.clone(),
    base,
    nav:         config.nav.clone(),
    theme:       config.theme.clone(),
    rewrites:    config.rewrites.clone(),
    sidebar:     sidebar.items.clone(),
  };

  Ok((manifest, sidebar))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use sitetoc_toctree::Strictness;
  use tempfile::TempDir;

  use super::*;

  fn fixture_config(dir: &TempDir) -> Config {
    Config {
      title: "Fixture Docs".to_string(),
      content_dir: dir.path().to_path_buf(),
      base: "/manual/".to_string(),
      ..Default::default()
    }
  }

  #[test]
  fn test_assemble_builds_sidebar_under_base() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
      dir.path().join("index.md"),
      "# Docs\n\n```{toctree}\noverview\n```\n",
    )
    .expect("write");
    fs::write(dir.path().join("overview.md"), "# Overview\n")
      .expect("write");

    let (manifest, sidebar) =
      assemble(&fixture_config(&dir)).expect("assemble");

    assert_eq!(manifest.base, "/manual/");
    assert_eq!(manifest.sidebar.len(), 1);
    assert_eq!(
      manifest.sidebar[0].link.as_deref(),
      Some("/manual/overview")
    );
    assert!(sidebar.skipped_entries.is_empty());
  }

  #[test]
  fn test_assemble_serializes_without_empty_fields() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("index.md"), "# Docs\n").expect("write");

    let (manifest, _) = assemble(&fixture_config(&dir)).expect("assemble");
    let json = serde_json::to_value(&manifest).expect("serialize");

    // No nav, theme, rewrites, or description were configured, so none of
    // them appear in the output object.
    let object = json.as_object().expect("manifest is an object");
    assert!(!object.contains_key("nav"));
    assert!(!object.contains_key("theme"));
    assert!(!object.contains_key("rewrites"));
    assert!(!object.contains_key("description"));
    assert_eq!(object["sidebar"], serde_json::json!([]));
  }

  #[test]
  fn test_assemble_strict_propagates_missing_entries() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
      dir.path().join("index.md"),
      "```{toctree}\nmissing-page\n```\n",
    )
    .expect("write");

    let config = Config {
      strictness: Strictness::Strict,
      ..fixture_config(&dir)
    };

    assert!(assemble(&config).is_err());
  }
}
