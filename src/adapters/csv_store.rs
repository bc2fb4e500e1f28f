use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::model::PerformanceRecord;
use crate::domain::ports::RecordStore;
use crate::utils::error::{Result, TrackerError};

const HEADERS: [&str; 6] = [
    "Name",
    "Discipline",
    "Age Group",
    "Result",
    "Achieved Level",
    "Timestamp",
];

/// Record store backed by a single CSV worksheet file. A missing file reads
/// as an empty sheet; persisting rewrites the whole file.
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for CsvFileStore {
    async fn read_all(&self) -> Result<Vec<PerformanceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    async fn persist_all(&self, records: &[PerformanceRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = export_csv(records)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Serializes records to UTF-8 CSV with the worksheet's header row. The
/// header is present even for an empty set; embedded commas get standard
/// quoting from the csv writer.
pub fn export_csv(records: &[PerformanceRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer.write_record(HEADERS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.into_inner().map_err(|e| TrackerError::StoreError {
        message: format!("failed to flush CSV output: {}", e),
    })
}

pub fn export_json(records: &[PerformanceRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AgeGroup, Discipline, Tier};
    use chrono::NaiveDate;

    fn sample(name: &str) -> PerformanceRecord {
        PerformanceRecord {
            name: name.to_string(),
            discipline: Discipline::Lauf3000,
            age_group: AgeGroup::A20_24,
            result: 800.0,
            achieved_level: Tier::Gold,
            timestamp: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn export_has_the_contract_header_even_when_empty() {
        let bytes = export_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "Name,Discipline,Age Group,Result,Achieved Level,Timestamp"
        );
    }

    #[test]
    fn export_quotes_embedded_commas() {
        let record = sample("Müller, Hans");
        let bytes = export_csv(&[record]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Müller, Hans\""));
        assert!(text.contains("2025-03-14 09:30:00"));
    }

    #[test]
    fn export_json_round_trips() {
        let records = vec![sample("Anna"), sample("Ben")];
        let bytes = export_json(&records).unwrap();
        let parsed: Vec<PerformanceRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, records);
    }
}
