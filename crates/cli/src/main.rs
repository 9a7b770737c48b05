//! Cluster dashboard CLI
//!
//! A command-line tool for inspecting cluster resources through the
//! dashboard view model: resource kinds, selector matching and pod metrics.

mod commands;
mod config;
mod output;
mod source;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use commands::{kinds, metrics, selector};
use dashboard_common::MetricsConfig;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Cluster dashboard CLI
#[derive(Parser)]
#[command(name = "dashctl")]
#[command(author, version, about = "CLI for the cluster dashboard view model", long_about = None)]
pub struct Cli {
    /// Path to kubeconfig file (uses default if not specified)
    #[arg(long, env = "KUBECONFIG")]
    pub kubeconfig: Option<String>,

    /// Output format (falls back to the config file, then table)
    #[arg(long, short)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the resource kinds known to the dashboard
    Kinds,

    /// Show the pods a label selector targets
    Match {
        /// Selector as key=value[,key=value]
        #[arg(long, short = 'l')]
        selector: String,

        /// Read pods from a `kubectl get pods -o json` export instead of the cluster
        #[arg(long)]
        file: Option<PathBuf>,

        /// Namespace to list pods from (all namespaces if not specified)
        #[arg(long, short)]
        namespace: Option<String>,
    },

    /// Build per-pod usage metrics from a raw sample export
    Metrics {
        /// JSON file with raw usage samples
        #[arg(long)]
        file: PathBuf,

        /// Maximum samples retained per history (overrides DASHBOARD_HISTORY_LIMIT)
        #[arg(long)]
        history_limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::load()?;
    let format = match (cli.format, config.default_format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => output::OutputFormat::from_str(name, true)
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid default_format in config file")?,
        (None, None) => output::OutputFormat::default(),
    };

    match cli.command {
        Commands::Kinds => kinds::list_kinds(format)?,
        Commands::Match {
            selector: raw_selector,
            file,
            namespace,
        } => {
            let label_selector = selector::parse_selector(&raw_selector)?;
            let pods = match file {
                Some(path) => source::read_pods(&path)?,
                None => {
                    let namespace = namespace.or(config.default_namespace);
                    source::fetch_pods(cli.kubeconfig.as_deref(), namespace.as_deref()).await?
                }
            };
            selector::show_matching_pods(&label_selector, &pods, format)?;
        }
        Commands::Metrics {
            file,
            history_limit,
        } => {
            let mut metrics_config = MetricsConfig::load()?;
            if let Some(limit) = history_limit {
                metrics_config = metrics_config.with_history_limit(limit);
            }
            let samples = source::read_samples(&file)?;
            metrics::show_metrics(&samples, metrics_config, format)?;
        }
    }

    Ok(())
}
