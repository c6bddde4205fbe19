//! Top-navigation declarations.
//!
//! These are flat, declarative entries copied into the site manifest as-is;
//! unlike the sidebar they are never derived from the content tree.

use serde::{Deserialize, Serialize};

/// One link in the site's top navigation bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
  /// Display text for the link.
  pub text: String,

  /// Target route or external URL.
  pub link: String,
}
