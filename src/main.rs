//! Hot Ones Fan Engagement Dashboard
//!
//! Renders the dashboard to a file or serves it over HTTP.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use hotones_dashboard::analysis::{load_data_cached, write_joined_csv, DashboardAggregates};
use hotones_dashboard::app::{self, App};
use hotones_dashboard::DashboardConfig;

#[derive(Parser, Debug)]
#[command(name = "hotones-dashboard", version, about = "Hot Ones fan engagement dashboard")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the episode, season and sauce CSVs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Number of guests in the popularity ranking
    #[arg(long, global = true)]
    top_guests: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the dashboard as a standalone HTML file
    Render {
        /// Output path, or "-" for stdout
        #[arg(short, long, default_value = "hotones_dashboard.html")]
        output: String,
    },
    /// Serve the dashboard, re-rendering on every request
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,
    },
    /// Write the joined episode and sauce table as CSV
    Export {
        /// Output path, or "-" for stdout
        #[arg(short, long, default_value = "-")]
        output: String,
    },
    /// Print the headline numbers
    Summary {
        /// Emit every aggregate as JSON
        #[arg(long)]
        json: bool,
    },
}

fn resolve_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config =
        DashboardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(top) = cli.top_guests {
        config.top_guests = top;
    }
    if let Command::Serve { bind: Some(bind) } = &cli.command {
        config.bind_addr = bind.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!("Reading data from {}", config.data_dir.display());

    match cli.command {
        Command::Render { output } => {
            let rt = Runtime::new().context("Failed to start runtime")?;
            let app = App::new(config);
            let html = rt.block_on(app.render()).context("Failed to render dashboard")?;
            if output == "-" {
                std::io::stdout()
                    .write_all(html.as_bytes())
                    .context("Failed to write to stdout")?;
            } else {
                std::fs::write(&output, html)
                    .with_context(|| format!("Failed to write {}", output))?;
                info!("Dashboard written to {}", output);
            }
        }
        Command::Serve { .. } => {
            let rt = Runtime::new().context("Failed to start runtime")?;
            rt.block_on(app::serve(App::new(config)))
                .context("Server stopped")?;
        }
        Command::Export { output } => {
            let dataset = load_data_cached(&config.data_paths()).context("Failed to load data")?;
            if output == "-" {
                write_joined_csv(&dataset, std::io::stdout().lock())
                    .context("Failed to write to stdout")?;
            } else {
                let file = std::fs::File::create(&output)
                    .with_context(|| format!("Failed to create {}", output))?;
                write_joined_csv(&dataset, file)
                    .with_context(|| format!("Failed to write {}", output))?;
            }
        }
        Command::Summary { json } => {
            let dataset = load_data_cached(&config.data_paths()).context("Failed to load data")?;
            let aggregates = DashboardAggregates::compute(&dataset, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&aggregates)?);
            } else {
                println!("Total Guests:    {}", aggregates.kpis.total_guests);
                println!("Total Episodes:  {}", aggregates.kpis.total_episodes);
                println!("Completion Rate: {}", aggregates.kpis.completion_label());
            }
        }
    }

    Ok(())
}
