use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{analyze, dashboard, forecast, init_config, serve};

#[derive(Parser)]
#[command(name = "seafood-forecast")]
#[command(about = "Seafood demand forecasting API, dashboard server and offline tools")]
#[command(version)]
pub struct Cli {
    /// Path to the YAML configuration file
    ///
    /// Defaults to config/config.yaml, which may be absent. Every key can be
    /// overridden with SEAFOOD__SECTION__KEY environment variables.
    #[arg(short, long, global = true, env = "SEAFOOD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Bind address for the API server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Serve the built dashboard bundle
    Dashboard {
        /// Bind address for the dashboard server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8501)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory with the built dashboard (index.html and assets)
        #[arg(short, long)]
        dist_dir: Option<PathBuf>,
    },
    /// Write the default configuration as YAML
    InitConfig {
        /// Output file
        #[arg(short, long, default_value = "config/config.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Analyze a demand CSV offline and print the summary as JSON
    Analyze {
        /// CSV file with historical demand
        #[arg(short, long)]
        file: PathBuf,

        /// Months to project
        #[arg(short, long, default_value_t = 12)]
        months: u32,

        /// Print the dataset overview instead of the forecast summary
        #[arg(long)]
        overview: bool,
    },
    /// Forecast several centers and items from the history dataset and print JSON
    Forecast {
        /// Center to forecast; repeat for several. Defaults to all centers.
        #[arg(long = "center")]
        centers: Vec<String>,

        /// Item to forecast; repeat for several. Defaults to all items.
        #[arg(long = "item")]
        items: Vec<String>,

        /// Horizon in days
        #[arg(short, long, default_value_t = 30)]
        days: u32,

        /// Model identifier (xgboost or lightgbm)
        #[arg(short, long, default_value = "xgboost")]
        model: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = self.config;
        match self.command {
            Commands::Serve { bind_address } => {
                serve(config.as_deref(), bind_address).await?;
            }
            Commands::Dashboard { bind_address, dist_dir } => {
                dashboard(config.as_deref(), bind_address, dist_dir).await?;
            }
            Commands::InitConfig { output, force } => {
                init_config(&output, force)?;
            }
            Commands::Analyze { file, months, overview } => {
                analyze(config.as_deref(), &file, months, overview)?;
            }
            Commands::Forecast { centers, items, days, model } => {
                forecast(config.as_deref(), centers, items, days, &model)?;
            }
        }
        Ok(())
    }
}
