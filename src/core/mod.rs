pub mod benchmarks;
pub mod classifier;
pub mod submission;
pub mod timeparse;

pub use crate::domain::model::{AgeGroup, Discipline, PerformanceRecord, ThresholdSet, Tier, Unit};
pub use crate::domain::ports::{ConfigProvider, RecordStore};
pub use crate::utils::error::Result;
