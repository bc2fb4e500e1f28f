use chrono::{Local, Timelike};

use crate::core::benchmarks::BenchmarkTable;
use crate::core::classifier::classify;
use crate::domain::model::{AgeGroup, Discipline, PerformanceRecord};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_non_negative};

/// Caller-owned state of the entry form. Handlers take it by value and hand
/// back an updated copy; there is no ambient session state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub name: String,
    pub discipline: Discipline,
    pub age_group: AgeGroup,
    pub result: f64,
    pub submitted: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            discipline: Discipline::ALL[0],
            age_group: AgeGroup::ALL[0],
            result: 0.0,
            submitted: false,
        }
    }
}

/// Classifies submissions and keeps the record store up to date. The store is
/// updated read-then-append-then-persist: fine for a single writer, last
/// write wins if several writers race.
pub struct SubmissionService<S: RecordStore> {
    table: BenchmarkTable,
    store: S,
}

impl<S: RecordStore> SubmissionService<S> {
    pub fn new(table: BenchmarkTable, store: S) -> Self {
        Self { table, store }
    }

    pub fn table(&self) -> &BenchmarkTable {
        &self.table
    }

    /// Validates the form, classifies the result and appends the record to
    /// the store. Returns the cleared-for-reuse form state together with the
    /// record that was persisted.
    pub async fn submit(&self, form: FormState) -> Result<(FormState, PerformanceRecord)> {
        validate_non_empty_string("name", &form.name)?;
        validate_non_negative("result", form.result)?;

        let achieved_level = classify(&self.table, form.discipline, form.age_group, form.result)?;
        // Whole-second precision, matching the worksheet's timestamp format.
        let now = Local::now().naive_local();
        let now = now.with_nanosecond(0).unwrap_or(now);
        let record = PerformanceRecord {
            name: form.name.trim().to_string(),
            discipline: form.discipline,
            age_group: form.age_group,
            result: form.result,
            achieved_level,
            timestamp: now,
        };

        let mut records = self.store.read_all().await?;
        records.push(record.clone());
        self.store.persist_all(&records).await?;

        tracing::debug!(
            "recorded {} for {} ({}, {}): {}",
            record.result,
            record.name,
            record.discipline,
            record.age_group,
            record.achieved_level
        );

        let mut form = form;
        form.submitted = true;
        Ok((form, record))
    }

    /// Full-table read, in insertion order.
    pub async fn records(&self) -> Result<Vec<PerformanceRecord>> {
        self.store.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Tier;
    use crate::utils::error::TrackerError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStore {
        records: Arc<Mutex<Vec<PerformanceRecord>>>,
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn read_all(&self) -> Result<Vec<PerformanceRecord>> {
            Ok(self.records.lock().await.clone())
        }

        async fn persist_all(&self, records: &[PerformanceRecord]) -> Result<()> {
            *self.records.lock().await = records.to_vec();
            Ok(())
        }
    }

    fn service() -> SubmissionService<MemoryStore> {
        SubmissionService::new(BenchmarkTable::standard().unwrap(), MemoryStore::default())
    }

    fn form(name: &str, discipline: Discipline, age_group: AgeGroup, result: f64) -> FormState {
        FormState {
            name: name.to_string(),
            discipline,
            age_group,
            result,
            submitted: false,
        }
    }

    #[tokio::test]
    async fn submit_classifies_and_appends() {
        let service = service();
        let (state, record) = service
            .submit(form("Anna", Discipline::Kugelstossen, AgeGroup::A18_19, 8.75))
            .await
            .unwrap();

        assert!(state.submitted);
        assert_eq!(record.achieved_level, Tier::Gold);

        let stored = service.records().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], record);
    }

    #[tokio::test]
    async fn submissions_keep_insertion_order() {
        let service = service();
        for (i, result) in [800.0, 950.0, 1200.0].iter().enumerate() {
            service
                .submit(form(
                    &format!("Runner {}", i + 1),
                    Discipline::Lauf3000,
                    AgeGroup::A20_24,
                    *result,
                ))
                .await
                .unwrap();
        }

        let stored = service.records().await.unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].name, "Runner 1");
        assert_eq!(stored[0].achieved_level, Tier::Gold);
        assert_eq!(stored[1].achieved_level, Tier::Bronze);
        assert_eq!(stored[2].achieved_level, Tier::BelowBronze);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_before_the_store_is_touched() {
        let service = service();
        let err = service
            .submit(form("  ", Discipline::Lauf10Km, AgeGroup::A35_39, 3500.0))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput { .. }));
        assert!(service.records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn negative_result_is_rejected_at_the_boundary() {
        let service = service();
        let err = service
            .submit(form("Max", Discipline::Medizinball, AgeGroup::A45_49, -2.0))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn name_is_trimmed_on_the_record() {
        let service = service();
        let (_, record) = service
            .submit(form(
                "  Lena  ",
                Discipline::Medizinball,
                AgeGroup::A25_29,
                13.0,
            ))
            .await
            .unwrap();
        assert_eq!(record.name, "Lena");
        assert_eq!(record.achieved_level, Tier::Silber);
    }
}
