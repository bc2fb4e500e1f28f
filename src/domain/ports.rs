use crate::domain::model::PerformanceRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The shared tabular store holding classified submissions. Reads return the
/// full set in insertion order; writes persist the full updated set.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn read_all(&self) -> Result<Vec<PerformanceRecord>>;
    async fn persist_all(&self, records: &[PerformanceRecord]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_path(&self) -> &str;
    fn verbose(&self) -> bool;
}
