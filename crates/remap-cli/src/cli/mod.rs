//! CLI for remap.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use remap_core::config::{self, MigrationConfig};
use remap_core::workspace::Workspace;
use std::path::PathBuf;

use commands::{run_align, run_map, run_repair, run_scan, run_verify};

/// Top-level CLI for remap.
#[derive(Debug, Parser)]
#[command(name = "remap")]
#[command(about = "remap: map legacy media URLs to their new uploads", long_about = None)]
pub struct Cli {
    /// Working directory: scanned for local files, holds every artifact.
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan the working directory and write the inventory of new URLs.
    Scan {
        /// URL prefix for generated URLs (overrides config).
        #[arg(long)]
        prefix: Option<String>,
        /// Suffix inserted before each extension (overrides config).
        #[arg(long, allow_hyphen_values = true)]
        suffix: Option<String>,
    },

    /// Align the inventory with a CSV of legacy URLs and write the alignment table.
    Align {
        /// CSV whose first column holds the old URLs.
        old_csv: PathBuf,
    },

    /// Write the old→new mapping document from the alignment table.
    Map,

    /// Check every generated URL and write the error documents.
    Verify,

    /// Regenerate URLs of broken entries with the repair suffix.
    Repair {
        /// URL prefix for regenerated URLs (overrides config).
        #[arg(long)]
        prefix: Option<String>,
        /// Repair suffix (overrides config, default "-1").
        #[arg(long, allow_hyphen_values = true)]
        suffix: Option<String>,
    },
}

fn apply_overrides(cfg: &mut MigrationConfig, command: &CliCommand) {
    match command {
        CliCommand::Scan { prefix, suffix } => {
            if let Some(p) = prefix {
                cfg.new_url_prefix = p.clone();
            }
            if let Some(s) = suffix {
                cfg.new_url_suffix = s.clone();
            }
        }
        CliCommand::Repair { prefix, suffix } => {
            if let Some(p) = prefix {
                cfg.new_url_prefix = p.clone();
            }
            if let Some(s) = suffix {
                cfg.repair_suffix = s.clone();
            }
        }
        CliCommand::Align { .. } | CliCommand::Map | CliCommand::Verify => {}
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        apply_overrides(&mut cfg, &cli.command);
        tracing::debug!("loaded config: {:?}", cfg);
        let ws = Workspace::new(cli.dir, &cfg.artifacts);

        match cli.command {
            CliCommand::Scan { .. } => run_scan(&ws, &cfg)?,
            CliCommand::Align { old_csv } => run_align(&ws, &old_csv)?,
            CliCommand::Map => run_map(&ws)?,
            CliCommand::Verify => run_verify(&ws, &cfg)?,
            CliCommand::Repair { .. } => run_repair(&ws, &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
