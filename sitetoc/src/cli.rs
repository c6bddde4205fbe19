use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use sitetoc_toctree::Strictness;

/// Command line interface for sitetoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "sitetoc: sidebar synthesis for Markdown documentation sites"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to the configuration file (TOML or JSON). When omitted, standard
  /// locations are probed.
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the sitetoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new sitetoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "sitetoc.toml")]
    output: PathBuf,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Synthesize the sidebar and write the site manifest.
  Build {
    /// Directory containing the Markdown content tree.
    #[arg(short = 'i', long)]
    content_dir: Option<PathBuf>,

    /// Output path for the site manifest.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base route the site is served under.
    #[arg(short, long)]
    base: Option<String>,

    /// Missing-entry policy: lenient skips with a warning, strict fails
    /// the build.
    #[arg(long, value_parser = Strictness::from_str)]
    strictness: Option<Strictness>,
  },

  /// Report Markdown files not reachable from any toctree.
  Check {
    /// Directory containing the Markdown content tree.
    #[arg(short = 'i', long)]
    content_dir: Option<PathBuf>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
