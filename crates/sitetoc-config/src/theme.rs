//! Theme options forwarded verbatim to the site generator.

use serde::{Deserialize, Serialize};

/// Flat theme configuration. Every field is optional; the generator applies
/// its own defaults for anything left unset.
#[derive(
  Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq,
)]
#[serde(default)]
pub struct ThemeConfig {
  /// Path or URL of the site logo.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub logo: Option<String>,

  /// Repository URL shown in the navigation.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repo: Option<String>,

  /// Footer message.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub footer_message: Option<String>,

  /// Copyright line.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub copyright: Option<String>,
}
