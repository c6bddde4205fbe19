use std::{fs, path::PathBuf};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info, warn};
use sitetoc_config::Config;

mod cli;
mod manifest;
mod utils;

use cli::{Cli, Commands};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Init { output, force } => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      // Create parent directories if needed
      if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
      {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
        info!("Created directory: {}", parent.display());
      }

      Config::generate_default_config(output).wrap_err_with(|| {
        format!(
          "Failed to generate configuration file: {}",
          output.display()
        )
      })?;

      info!(
        "Configuration file created successfully. Edit it to customize your \
         site."
      );
      Ok(())
    },

    Commands::Build {
      content_dir,
      output,
      base,
      strictness,
    } => {
      let mut config = Config::load(cli.config_file.as_deref())?;
      merge_build_args(
        &mut config,
        content_dir.clone(),
        output.clone(),
        base.clone(),
      );
      if let Some(strictness) = strictness {
        config.strictness = *strictness;
      }

      build_site(&config)
    },

    Commands::Check { content_dir } => {
      let mut config = Config::load(cli.config_file.as_deref())?;
      if let Some(dir) = content_dir {
        config.content_dir.clone_from(dir);
      }

      check_site(&config)
    },
  }
}

/// Fold `build` CLI arguments into the loaded configuration. CLI arguments
/// always win over config file values.
fn merge_build_args(
  config: &mut Config,
  content_dir: Option<PathBuf>,
  output: Option<PathBuf>,
  base: Option<String>,
) {
  if let Some(dir) = content_dir {
    config.content_dir = dir;
  }
  if let Some(path) = output {
    config.output = path;
  }
  if let Some(base) = base {
    config.base = base;
  }
}

/// Synthesize the sidebar and write the site manifest.
fn build_site(config: &Config) -> Result<()> {
  info!("Starting site manifest build...");
  config.validate_paths()?;

  let (site_manifest, sidebar) = manifest::assemble(config)?;

  if !sidebar.skipped_entries.is_empty() {
    warn!(
      "{} toctree entries were skipped (missing files)",
      sidebar.skipped_entries.len()
    );
  }

  utils::write_manifest(&site_manifest, &config.output)?;
  info!(
    "Site manifest built successfully with {} top-level sidebar items",
    site_manifest.sidebar.len()
  );

  Ok(())
}

/// Report Markdown files not reachable from any toctree.
fn check_site(config: &Config) -> Result<()> {
  config.validate_paths()?;

  let (_, sidebar) = manifest::assemble(config)?;
  let orphans = utils::find_orphans(&config.content_dir, &sidebar);

  for orphan in &orphans {
    warn!(
      "Document is not referenced by any toctree: {}",
      orphan.display()
    );
  }

  if !orphans.is_empty() {
    bail!(
      "{} document(s) under {} are not reachable from any toctree",
      orphans.len(),
      config.content_dir.display()
    );
  }

  info!("All documents are reachable from the sidebar");
  Ok(())
}
