//! Config Commands

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{print_success, Data};

use super::RenderOpts;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    View,

    /// Update a setting (output, inventory or page-limit)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },
}

pub fn execute(cmd: ConfigCommands, path: &Path, effective: &CliConfig, opts: &RenderOpts) -> Result<()> {
    match cmd {
        ConfigCommands::View => opts.print(&Data::item(effective)),
        ConfigCommands::Set { key, value } => {
            let mut config = CliConfig::load(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            config.set(&key, &value)?;
            config
                .save(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(%key, path = %path.display(), "updated config");
            print_success(&format!("Set {} in {}", key, path.display()));
            Ok(())
        }
    }
}
