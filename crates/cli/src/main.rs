//! cloudctl CLI - Main Entry Point
//!
//! Queries a cloud platform inventory and renders the results as tables,
//! JSON, YAML or plain text.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use cloudctl_cli::client::FileInventory;
use cloudctl_cli::commands::{config, describe, get, summary, RenderOpts};
use cloudctl_cli::config::CliConfig;
use cloudctl_cli::output::OutputFormat;

/// cloudctl - Cloud Infrastructure Inventory CLI
#[derive(Parser)]
#[command(name = "cloudctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to $CLOUDCTL_CONFIG or ~/.cloudctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Inventory snapshot (JSON or YAML)
    #[arg(long, global = true, env = "CLOUDCTL_INVENTORY", value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// Output format (table, json, yaml, text)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Comma-separated fields to keep
    #[arg(long, global = true, value_delimiter = ',')]
    fields: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List resources
    #[command(subcommand)]
    Get(get::GetCommands),

    /// Show one resource by name or UUID
    Describe(describe::DescribeArgs),

    /// Count resources of every kind
    Summary,

    /// Manage CLI configuration
    #[command(subcommand)]
    Config(config::ConfigCommands),

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(CliConfig::default_path);
    let mut effective = CliConfig::load(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    if let Some(output) = &cli.output {
        effective.output = OutputFormat::parse(output).to_string();
    }
    if let Some(inventory) = &cli.inventory {
        effective.inventory = Some(inventory.clone());
    }

    let opts = RenderOpts::new(effective.output_format(), cli.fields, effective.page_limit);

    match cli.command {
        Commands::Get(cmd) => {
            let client = open_inventory(effective.inventory.as_deref())?;
            get::execute(cmd, &client, &opts).await?
        }
        Commands::Describe(args) => {
            let client = open_inventory(effective.inventory.as_deref())?;
            describe::execute(args, &client, &opts).await?
        }
        Commands::Summary => {
            let client = open_inventory(effective.inventory.as_deref())?;
            summary::execute(&client, &opts).await?
        }
        Commands::Config(cmd) => config::execute(cmd, &config_path, &effective, &opts)?,
        Commands::Version => {
            println!("cloudctl v{}", cloudctl_common::VERSION);
        }
    }

    Ok(())
}

fn open_inventory(path: Option<&Path>) -> Result<FileInventory> {
    let path = path.ok_or_else(|| {
        anyhow!(
            "no inventory configured; pass --inventory, set CLOUDCTL_INVENTORY \
             or run `cloudctl config set inventory <path>`"
        )
    })?;
    FileInventory::open(path).with_context(|| format!("failed to open inventory {}", path.display()))
}
