//! Types for the sitetoc-toctree public API.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One sidebar entry in the synthesized navigation tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
  /// Display text, taken from the document's first level-1 heading or
  /// derived from its file name.
  pub text: String,

  /// Site-relative route for the entry. Every resolved entry carries a
  /// link; the field is optional so purely structural nodes remain
  /// representable.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link: Option<String>,

  /// Nested entries, present only for section index documents.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub items: Vec<NavItem>,

  /// Collapse hint for sections with children. Leaves carry no hint.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub collapsed: Option<bool>,
}

impl NavItem {
  /// Create a leaf entry with no children.
  #[must_use]
  pub const fn leaf(text: String, link: String) -> Self {
    Self {
      text,
      link: Some(link),
      items: Vec::new(),
      collapsed: None,
    }
  }

  /// Create a section entry with nested children, initially expanded.
  #[must_use]
  pub const fn section(text: String, link: String, items: Vec<Self>) -> Self {
    Self {
      text,
      link: Some(link),
      items,
      collapsed: Some(false),
    }
  }
}

/// The parsed body of one `{toctree}` directive block.
///
/// Both the entry sequence and the option map preserve document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toctree {
  /// Raw entry references, in document order. May omit the `.md` extension
  /// and may include subdirectory segments.
  pub entries: Vec<String>,

  /// Directive options (`:maxdepth: 2`, `:hidden:`, ...) in insertion order.
  pub options: IndexMap<String, OptionValue>,
}

/// Value of a single directive option.
///
/// An option without an explicit value is `Bool(true)`, an all-digit value
/// is `Int`, anything else is kept as a trimmed string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
  Bool(bool),
  Int(u64),
  Str(String),
}
