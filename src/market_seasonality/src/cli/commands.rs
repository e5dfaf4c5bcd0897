use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (seasonality.toml). Falls back to $SEASONALITY_CONFIG.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the record and analysis for a single date
    Day {
        /// Date in ISO format (e.g. "2024-02-15")
        #[arg(long)]
        date: String,
    },

    /// Print the calendar grid and summary for a month
    Month {
        #[arg(long)]
        year: i32,

        /// Month number, 1-12
        #[arg(long)]
        month: u32,

        /// Cell labels: daily, weekly or monthly
        #[arg(long, default_value = "daily")]
        view: String,

        /// Date to mark as selected (ISO format)
        #[arg(long)]
        selected: Option<String>,
    },

    /// Print a freshly generated 24-hour walk
    Intraday {
        /// Overrides intraday.start_price from the config
        #[arg(long)]
        start_price: Option<f64>,
    },

    /// Run the live feed and print each refreshed point
    Live {
        /// Number of refreshes before exiting
        #[arg(long, default_value = "5")]
        ticks: u64,
    },

    /// Write a month's records and summary to a JSON file
    Export {
        #[arg(long)]
        year: i32,

        #[arg(long)]
        month: u32,

        /// Output directory (defaults to <temp dir>/market_seasonality)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
