#![allow(clippy::expect_used, reason = "Fine in tests")]
use std::fs;

use sitetoc_toctree::{SidebarSynthesizer, Strictness};
use tempfile::tempdir;

/// End-to-end synthesis over a realistic content tree.
#[test]
fn test_nested_content_tree_synthesis() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let root = temp_dir.path();

  fs::write(
    root.join("index.md"),
    r"# My Section

```{toctree}
:maxdepth: 2
overview
concepts/index
```
",
  )
  .expect("Failed to write index.md in test");
  fs::write(root.join("overview.md"), "# Overview\n\nIntro text.\n")
    .expect("Failed to write overview.md in test");

  fs::create_dir_all(root.join("concepts"))
    .expect("Failed to create dir in test");
  fs::write(
    root.join("concepts/index.md"),
    "# Concepts\n\n```{toctree}\nbasics\n```\n",
  )
  .expect("Failed to write concepts/index.md in test");
  fs::write(root.join("concepts/basics.md"), "# Basics\n")
    .expect("Failed to write concepts/basics.md in test");

  let result = SidebarSynthesizer::new(root, "/")
    .synthesize()
    .expect("synthesis should succeed");

  assert_eq!(result.items.len(), 2);
  assert!(result.skipped_entries.is_empty());

  assert_eq!(result.items[0].text, "Overview");
  assert_eq!(result.items[0].link.as_deref(), Some("/overview"));

  assert_eq!(result.items[1].text, "Concepts");
  assert_eq!(result.items[1].link.as_deref(), Some("/concepts/"));
  assert_eq!(result.items[1].collapsed, Some(false));
  assert_eq!(result.items[1].items.len(), 1);
  assert_eq!(result.items[1].items[0].text, "Basics");
  assert_eq!(
    result.items[1].items[0].link.as_deref(),
    Some("/concepts/basics")
  );
}

/// Three levels of nesting resolve depth-first in entry order.
#[test]
fn test_deep_nesting() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let root = temp_dir.path();

  fs::create_dir_all(root.join("a/b")).expect("Failed to create dir in test");
  fs::write(root.join("index.md"), "```{toctree}\na/index\n```\n")
    .expect("Failed to write index.md in test");
  fs::write(root.join("a/index.md"), "# A\n\n```{toctree}\nb/index\n```\n")
    .expect("Failed to write a/index.md in test");
  fs::write(root.join("a/b/index.md"), "# B\n\n```{toctree}\nleaf\n```\n")
    .expect("Failed to write a/b/index.md in test");
  fs::write(root.join("a/b/leaf.md"), "# Leaf\n")
    .expect("Failed to write a/b/leaf.md in test");

  let result = SidebarSynthesizer::new(root, "/")
    .synthesize()
    .expect("synthesis should succeed");

  let a = &result.items[0];
  assert_eq!(a.link.as_deref(), Some("/a/"));
  let b = &a.items[0];
  assert_eq!(b.link.as_deref(), Some("/a/b/"));
  let leaf = &b.items[0];
  assert_eq!(leaf.link.as_deref(), Some("/a/b/leaf"));
  assert!(leaf.items.is_empty());
}

/// The serialized tree omits empty collections and absent hints, so the
/// generator receives a compact object.
#[test]
fn test_sidebar_serialization_shape() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let root = temp_dir.path();

  fs::write(root.join("index.md"), "```{toctree}\npage\n```\n")
    .expect("Failed to write index.md in test");
  fs::write(root.join("page.md"), "# Page\n")
    .expect("Failed to write page.md in test");

  let result = SidebarSynthesizer::new(root, "/")
    .synthesize()
    .expect("synthesis should succeed");

  let json =
    serde_json::to_value(&result.items).expect("serialization should succeed");
  assert_eq!(
    json,
    serde_json::json!([{ "text": "Page", "link": "/page" }])
  );
}

/// Lenient and strict synthesizers agree whenever nothing is missing.
#[test]
fn test_strict_mode_matches_lenient_on_complete_trees() {
  let temp_dir = tempdir().expect("Failed to create temp dir in test");
  let root = temp_dir.path();

  fs::write(root.join("index.md"), "```{toctree}\nalpha\nbeta\n```\n")
    .expect("Failed to write index.md in test");
  fs::write(root.join("alpha.md"), "# Alpha\n")
    .expect("Failed to write alpha.md in test");
  fs::write(root.join("beta.md"), "# Beta\n")
    .expect("Failed to write beta.md in test");

  let lenient = SidebarSynthesizer::new(root, "/")
    .synthesize()
    .expect("lenient synthesis should succeed");
  let strict = SidebarSynthesizer::new(root, "/")
    .strictness(Strictness::Strict)
    .synthesize()
    .expect("strict synthesis should succeed");

  assert_eq!(lenient.items, strict.items);
}
