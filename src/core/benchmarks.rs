use std::collections::HashMap;

use crate::core::timeparse::parse_time;
use crate::domain::model::{AgeGroup, Discipline, ThresholdSet};
use crate::utils::error::{Result, TrackerError};

/// Tier boundaries per age group, tuple order (age group, bronze, silber,
/// gold). Running events are clock durations, throwing events meters.
const RUNNING_3000: [(AgeGroup, &str, &str, &str); 16] = [
    (AgeGroup::A18_19, "17:50", "15:50", "13:50"),
    (AgeGroup::A20_24, "17:20", "15:20", "13:20"),
    (AgeGroup::A25_29, "17:40", "15:40", "13:40"),
    (AgeGroup::A30_34, "18:30", "16:30", "14:30"),
    (AgeGroup::A35_39, "19:50", "17:20", "15:00"),
    (AgeGroup::A40_44, "21:00", "18:30", "15:50"),
    (AgeGroup::A45_49, "22:10", "19:30", "16:30"),
    (AgeGroup::A50_54, "23:20", "20:20", "17:20"),
    (AgeGroup::A55_59, "23:50", "20:50", "17:50"),
    (AgeGroup::A60_64, "24:30", "21:30", "18:30"),
    (AgeGroup::A65_69, "25:00", "22:00", "19:00"),
    (AgeGroup::A70_74, "25:20", "22:20", "19:20"),
    (AgeGroup::A75_79, "26:00", "23:00", "20:00"),
    (AgeGroup::A80_84, "26:30", "23:30", "20:30"),
    (AgeGroup::A85_89, "27:30", "24:30", "21:30"),
    (AgeGroup::Ab90, "29:50", "26:50", "23:50"),
];

const RUNNING_10KM: [(AgeGroup, &str, &str, &str); 16] = [
    (AgeGroup::A18_19, "63:20", "57:20", "51:20"),
    (AgeGroup::A20_24, "62:30", "56:30", "50:00"),
    (AgeGroup::A25_29, "66:00", "59:20", "52:00"),
    (AgeGroup::A30_34, "69:40", "61:10", "54:50"),
    (AgeGroup::A35_39, "74:10", "65:30", "56:50"),
    (AgeGroup::A40_44, "78:50", "69:30", "60:10"),
    (AgeGroup::A45_49, "83:40", "73:10", "63:30"),
    (AgeGroup::A50_54, "88:20", "76:40", "65:30"),
    (AgeGroup::A55_59, "91:30", "79:40", "67:40"),
    (AgeGroup::A60_64, "94:40", "82:40", "70:40"),
    (AgeGroup::A65_69, "98:00", "86:00", "74:00"),
    (AgeGroup::A70_74, "102:10", "90:10", "78:10"),
    (AgeGroup::A75_79, "107:20", "95:20", "83:20"),
    (AgeGroup::A80_84, "113:10", "101:10", "89:10"),
    (AgeGroup::A85_89, "120:10", "108:10", "96:10"),
    (AgeGroup::Ab90, "127:40", "115:40", "103:40"),
];

const MED_BALL: [(AgeGroup, f64, f64, f64); 16] = [
    (AgeGroup::A18_19, 11.00, 13.00, 14.00),
    (AgeGroup::A20_24, 11.00, 13.50, 14.50),
    (AgeGroup::A25_29, 10.50, 13.00, 14.50),
    (AgeGroup::A30_34, 10.00, 13.00, 14.00),
    (AgeGroup::A35_39, 9.50, 12.50, 14.00),
    (AgeGroup::A40_44, 9.00, 12.00, 13.50),
    (AgeGroup::A45_49, 8.00, 11.50, 13.50),
    (AgeGroup::A50_54, 7.50, 11.00, 13.00),
    (AgeGroup::A55_59, 7.00, 10.50, 12.50),
    (AgeGroup::A60_64, 6.50, 10.00, 12.50),
    (AgeGroup::A65_69, 6.00, 9.50, 11.50),
    (AgeGroup::A70_74, 6.00, 9.00, 10.50),
    (AgeGroup::A75_79, 5.50, 8.00, 9.50),
    (AgeGroup::A80_84, 5.00, 7.50, 9.00),
    (AgeGroup::A85_89, 4.50, 6.50, 8.00),
    (AgeGroup::Ab90, 4.00, 5.50, 8.00),
];

const KUGELSTOSSEN: [(AgeGroup, f64, f64, f64); 16] = [
    (AgeGroup::A18_19, 7.75, 8.25, 8.75),
    (AgeGroup::A20_24, 7.75, 8.50, 9.00),
    (AgeGroup::A25_29, 7.50, 8.25, 8.75),
    (AgeGroup::A30_34, 7.00, 7.75, 8.25),
    (AgeGroup::A35_39, 6.75, 7.25, 8.00),
    (AgeGroup::A40_44, 6.25, 7.00, 7.75),
    (AgeGroup::A45_49, 6.00, 6.75, 7.50),
    (AgeGroup::A50_54, 5.50, 6.75, 7.50),
    (AgeGroup::A55_59, 5.00, 5.75, 6.50),
    (AgeGroup::A60_64, 4.75, 5.50, 6.25),
    (AgeGroup::A65_69, 4.50, 5.25, 6.15),
    (AgeGroup::A70_74, 4.25, 5.00, 6.00),
    (AgeGroup::A75_79, 4.25, 5.25, 6.25),
    (AgeGroup::A80_84, 4.00, 5.00, 5.75),
    (AgeGroup::A85_89, 3.75, 4.50, 5.50),
    (AgeGroup::Ab90, 3.25, 4.25, 5.00),
];

/// Immutable lookup from (discipline, age group) to tier boundaries. Built
/// once at startup, consumed read-only by the classifier.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    entries: HashMap<Discipline, HashMap<AgeGroup, ThresholdSet>>,
}

impl BenchmarkTable {
    /// Assembles the standard table from the literal data above and validates
    /// it: every discipline must cover every age group, and every threshold
    /// row must be monotonic for its discipline's comparison direction. Any
    /// violation is fatal here rather than a surprise at lookup time.
    pub fn standard() -> Result<Self> {
        let mut entries = HashMap::new();
        entries.insert(Discipline::Lauf3000, running_thresholds(&RUNNING_3000)?);
        entries.insert(Discipline::Lauf10Km, running_thresholds(&RUNNING_10KM)?);
        entries.insert(Discipline::Medizinball, throwing_thresholds(&MED_BALL));
        entries.insert(Discipline::Kugelstossen, throwing_thresholds(&KUGELSTOSSEN));

        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Tier boundaries for one (discipline, age group) pair.
    pub fn thresholds(
        &self,
        discipline: Discipline,
        age_group: AgeGroup,
    ) -> Result<&ThresholdSet> {
        self.entries
            .get(&discipline)
            .ok_or_else(|| TrackerError::LookupError {
                message: format!("no benchmark data for discipline '{}'", discipline),
            })?
            .get(&age_group)
            .ok_or_else(|| TrackerError::LookupError {
                message: format!(
                    "no thresholds for '{}' in age group '{}'",
                    discipline, age_group
                ),
            })
    }

    fn validate(&self) -> Result<()> {
        for discipline in Discipline::ALL {
            let per_age = self.entries.get(&discipline).ok_or_else(|| {
                TrackerError::ConstructionError {
                    message: format!("discipline '{}' has no threshold table", discipline),
                }
            })?;
            for age_group in AgeGroup::ALL {
                let set = per_age.get(&age_group).ok_or_else(|| {
                    TrackerError::ConstructionError {
                        message: format!(
                            "missing thresholds for '{}' in age group '{}'",
                            discipline, age_group
                        ),
                    }
                })?;
                if !set.is_monotonic(discipline.lower_is_better()) {
                    return Err(TrackerError::ConstructionError {
                        message: format!(
                            "non-monotonic thresholds for '{}' in age group '{}': {:?}",
                            discipline, age_group, set
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

fn running_thresholds(
    rows: &[(AgeGroup, &str, &str, &str); 16],
) -> Result<HashMap<AgeGroup, ThresholdSet>> {
    let mut map = HashMap::with_capacity(rows.len());
    for &(age_group, bronze, silber, gold) in rows {
        map.insert(
            age_group,
            ThresholdSet {
                bronze: f64::from(parse_time(bronze)?),
                silber: f64::from(parse_time(silber)?),
                gold: f64::from(parse_time(gold)?),
            },
        );
    }
    Ok(map)
}

fn throwing_thresholds(rows: &[(AgeGroup, f64, f64, f64); 16]) -> HashMap<AgeGroup, ThresholdSet> {
    rows.iter()
        .map(|&(age_group, bronze, silber, gold)| {
            (
                age_group,
                ThresholdSet {
                    bronze,
                    silber,
                    gold,
                },
            )
        })
        .collect()
}
