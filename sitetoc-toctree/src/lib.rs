//! # sitetoc-toctree
//!
//! Sidebar synthesis for Markdown documentation sites that organize their
//! content with Sphinx-style `{toctree}` directives.
//!
//! A content tree is expected to carry an `index.md` at its root, with
//! optional nested subdirectories each carrying their own `index.md` acting
//! as that subdirectory's section root. Each index document may declare a
//! single fenced `{toctree}` block listing its children; this crate resolves
//! those references recursively into a navigation tree.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sitetoc_toctree::SidebarSynthesizer;
//!
//! let sidebar = SidebarSynthesizer::new("docs", "/").synthesize()?;
//!
//! for item in &sidebar.items {
//!   println!("{} -> {:?}", item.text, item.link);
//! }
//! # Ok::<(), sitetoc_toctree::SidebarError>(())
//! ```

pub mod directive;
pub mod route;
pub mod sidebar;
pub mod title;
pub mod utils;

mod types;

pub use crate::{
  sidebar::{SidebarError, SidebarResult, SidebarSynthesizer, Strictness},
  types::{NavItem, OptionValue, Toctree},
};
