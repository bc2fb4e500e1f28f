pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::csv_store::CsvFileStore;
pub use crate::config::{CliConfig, Command};
pub use crate::core::benchmarks::BenchmarkTable;
pub use crate::core::classifier::classify;
pub use crate::core::submission::{FormState, SubmissionService};
pub use crate::core::timeparse::parse_time;
pub use crate::domain::model::{AgeGroup, Discipline, PerformanceRecord, ThresholdSet, Tier, Unit};
pub use crate::utils::error::{Result, TrackerError};
