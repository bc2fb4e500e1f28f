use clap::{Parser, Subcommand};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "sportcheck")]
#[command(about = "Record sports performances and grade them against age-group benchmarks")]
pub struct CliConfig {
    /// Path of the CSV worksheet holding the recorded performances
    #[arg(long, default_value = "performance_results.csv")]
    pub store_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Submit a performance result, grade it and record it
    Submit {
        #[arg(long)]
        name: String,

        /// Discipline, e.g. "3.000 m Lauf" or the short form "3000m"
        #[arg(long)]
        discipline: String,

        /// Age bracket, e.g. "20-24" or "ab90"
        #[arg(long)]
        age_group: String,

        /// Measured result in the discipline's unit (seconds or meters)
        #[arg(long)]
        result: f64,
    },

    /// List all recorded performances
    List,

    /// Show the benchmark thresholds for a discipline and age group
    Benchmarks {
        #[arg(long)]
        discipline: String,

        #[arg(long)]
        age_group: String,
    },

    /// Export the recorded performances
    Export {
        /// Output format: csv or json
        #[arg(long, default_value = "csv")]
        format: String,

        /// Target file; stdout when omitted
        #[arg(long)]
        output: Option<String>,
    },
}

impl ConfigProvider for CliConfig {
    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store_path", &self.store_path)
    }
}
