use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sitetoc_toctree::Strictness;

use crate::{error::ConfigError, nav::NavLink, theme::ThemeConfig};

/// Embedded default configuration written by `sitetoc init`.
const DEFAULT_CONFIG: &str = include_str!("../templates/default.toml");

/// Configuration for the sitetoc navigation synthesizer.
///
/// [`Config`] holds the site's declarative surface (metadata, top
/// navigation, theme options, rewrites) plus the knobs that drive sidebar
/// synthesis: the content root, the base route, and the missing-entry
/// policy. Fields are typically loaded from a TOML or JSON config file, but
/// can also be overridden via CLI arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
  /// Site title, forwarded to the generator.
  pub title: String,

  /// Site description, forwarded to the generator.
  pub description: String,

  /// Directory containing the Markdown content tree.
  pub content_dir: PathBuf,

  /// Path the synthesized site manifest is written to.
  pub output: PathBuf,

  /// Route prefix the site is served under.
  pub base: String,

  /// Environment variable that overrides `base` at build time, if set.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub base_env: Option<String>,

  /// Top navigation links.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub nav: Vec<NavLink>,

  /// Theme options forwarded verbatim to the generator.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub theme: Option<ThemeConfig>,

  /// Route rewrites applied by the generator, in declaration order.
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub rewrites: IndexMap<String, String>,

  /// How to treat toctree entries whose target file is missing.
  pub strictness: Strictness,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      title:       "sitetoc documentation".to_string(),
      description: String::new(),
      content_dir: PathBuf::from("docs"),
      output:      PathBuf::from("site-manifest.json"),
      base:        "/".to_string(),
      base_env:    None,
      nav:         Vec::new(),
      theme:       None,
      rewrites:    IndexMap::new(),
      strictness:  Strictness::default(),
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the
  /// format is unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("json") => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some(ext) if ext.eq_ignore_ascii_case("toml") => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some(_) => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from an explicit file, a discovered file, or
  /// defaults, in that order of preference.
  ///
  /// # Errors
  ///
  /// Returns an error if an explicit or discovered config file fails to
  /// load.
  pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
    if let Some(path) = config_file {
      return Self::from_file(path);
    }

    if let Some(discovered) = Self::find_config_file() {
      log::info!("Using discovered config file: {}", discovered.display());
      return Self::from_file(&discovered);
    }

    Ok(Self::default())
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let config_filenames = [
          "sitetoc.toml",
          "sitetoc.json",
          ".sitetoc.toml",
          ".sitetoc.json",
          ".config/sitetoc.toml",
          ".config/sitetoc.json",
        ];

        let current_dir = std::env::current_dir().ok()?;
        for filename in &config_filenames {
          let config_path = current_dir.join(filename);
          if config_path.exists() {
            return Some(config_path);
          }
        }

        None
      })
      .clone()
  }

  /// The effective base route: the `base_env` environment variable when set,
  /// otherwise the configured `base`, normalized to exactly one leading and
  /// one trailing slash.
  #[must_use]
  pub fn resolved_base(&self) -> String {
    let raw = self
      .base_env
      .as_ref()
      .and_then(|var| std::env::var(var).ok())
      .unwrap_or_else(|| self.base.clone());

    normalize_base(&raw)
  }

  /// Validate all paths specified in the configuration
  ///
  /// # Errors
  ///
  /// Returns an error if any configured path does not exist or is invalid.
  pub fn validate_paths(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if !self.content_dir.exists() {
      errors.push(format!(
        "Content directory does not exist: {}",
        self.content_dir.display()
      ));
    } else if !self.content_dir.is_dir() {
      errors.push(format!(
        "Content directory path is not a directory: {}",
        self.content_dir.display()
      ));
    }

    if !errors.is_empty() {
      let error_message = errors.join("\n");
      return Err(ConfigError::Config(format!(
        "Configuration path validation errors:\n{error_message}"
      )));
    }

    Ok(())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be written.
  pub fn generate_default_config(path: &Path) -> Result<(), ConfigError> {
    fs::write(path, DEFAULT_CONFIG).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

/// Normalize a base route to exactly one leading and one trailing slash.
fn normalize_base(raw: &str) -> String {
  let trimmed = raw.trim().trim_matches('/');
  if trimmed.is_empty() {
    "/".to_string()
  } else {
    format!("/{trimmed}/")
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.content_dir, PathBuf::from("docs"));
    assert_eq!(config.base, "/");
    assert!(config.nav.is_empty());
    assert!(config.theme.is_none());
    assert_eq!(config.strictness, Strictness::Lenient);
  }

  #[test]
  fn test_config_toml_deserialization() {
    let toml = r#"
title = "Example Docs"
description = "Documentation for Example"
content_dir = "content"
base = "/docs"
strictness = "strict"

nav = [
  { text = "Home", link = "/" },
  { text = "Guide", link = "/guide/" },
]

[rewrites]
"old/intro" = "guide/intro"

[theme]
repo = "https://github.com/example/example"
"#;

    let config: Config =
      toml::from_str(toml).expect("Failed to parse config TOML");
    assert_eq!(config.title, "Example Docs");
    assert_eq!(config.content_dir, PathBuf::from("content"));
    assert_eq!(config.strictness, Strictness::Strict);
    assert_eq!(config.nav.len(), 2);
    assert_eq!(
      config.rewrites.get("old/intro").map(String::as_str),
      Some("guide/intro")
    );
    assert_eq!(
      config.theme.and_then(|t| t.repo),
      Some("https://github.com/example/example".to_string())
    );
  }

  #[test]
  fn test_config_json_deserialization() {
    let json = r#"{
  "title": "Example Docs",
  "base": "/docs/",
  "nav": [{ "text": "Home", "link": "/" }]
}"#;

    let config: Config =
      serde_json::from_str(json).expect("Failed to parse config JSON");
    assert_eq!(config.title, "Example Docs");
    assert_eq!(config.nav.len(), 1);
    // Unspecified fields fall back to defaults
    assert_eq!(config.content_dir, PathBuf::from("docs"));
  }

  #[test]
  fn test_from_file_rejects_unknown_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sitetoc.yaml");
    fs::write(&path, "title: nope").expect("write");

    let err = Config::from_file(&path).expect_err("yaml is unsupported");
    assert!(err.to_string().contains("Unsupported config file format"));
  }

  #[test]
  fn test_from_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sitetoc.toml");
    fs::write(&path, "title = \"From File\"\nbase = \"/x/\"\n")
      .expect("write");

    let config = Config::from_file(&path).expect("load config");
    assert_eq!(config.title, "From File");
    assert_eq!(config.base, "/x/");
  }

  #[test]
  fn test_normalize_base() {
    assert_eq!(normalize_base("/"), "/");
    assert_eq!(normalize_base(""), "/");
    assert_eq!(normalize_base("docs"), "/docs/");
    assert_eq!(normalize_base("/docs"), "/docs/");
    assert_eq!(normalize_base("/docs///"), "/docs/");
    assert_eq!(normalize_base("a/b"), "/a/b/");
  }

  #[test]
  fn test_resolved_base_without_env_override() {
    let config = Config {
      base: "manual".to_string(),
      ..Default::default()
    };
    assert_eq!(config.resolved_base(), "/manual/");
  }

  #[test]
  fn test_resolved_base_with_env_override() {
    let config = Config {
      base: "/fallback/".to_string(),
      base_env: Some("SITETOC_TEST_BASE_OVERRIDE".to_string()),
      ..Default::default()
    };

    // SAFETY: test-local variable name, no other thread in this test
    // process reads or writes it.
    unsafe {
      std::env::set_var("SITETOC_TEST_BASE_OVERRIDE", "from-env");
    }
    assert_eq!(config.resolved_base(), "/from-env/");

    // SAFETY: same as above.
    unsafe {
      std::env::remove_var("SITETOC_TEST_BASE_OVERRIDE");
    }
    assert_eq!(config.resolved_base(), "/fallback/");
  }

  #[test]
  fn test_validate_paths_reports_missing_content_dir() {
    let config = Config {
      content_dir: PathBuf::from("/definitely/not/here"),
      ..Default::default()
    };

    let err = config.validate_paths().expect_err("should be invalid");
    assert!(err.to_string().contains("Content directory does not exist"));
  }

  #[test]
  fn test_generate_default_config_is_loadable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sitetoc.toml");

    Config::generate_default_config(&path).expect("generate");
    let config = Config::from_file(&path).expect("generated config loads");
    assert_eq!(config.title, "My Documentation");
    assert_eq!(config.strictness, Strictness::Lenient);
  }
}
