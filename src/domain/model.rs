use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::error::TrackerError;

/// Achievement tier. Ordering follows quality: `Gold` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Below Bronze")]
    BelowBronze,
    Bronze,
    Silber,
    Gold,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::BelowBronze => "Below Bronze",
            Tier::Bronze => "Bronze",
            Tier::Silber => "Silber",
            Tier::Gold => "Gold",
        };
        write!(f, "{}", label)
    }
}

/// Measurement unit of a discipline's results and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Seconds,
    Meters,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Seconds => write!(f, "seconds"),
            Unit::Meters => write!(f, "meters"),
        }
    }
}

/// The measured activities. A closed set: every variant carries its own
/// comparison direction and unit, and the benchmark table must cover all of
/// them for every age group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    #[serde(rename = "3.000 m Lauf")]
    Lauf3000,
    #[serde(rename = "10 km Lauf")]
    Lauf10Km,
    #[serde(rename = "Medizinball (2kg)")]
    Medizinball,
    #[serde(rename = "Kugelstoßen")]
    Kugelstossen,
}

impl Discipline {
    pub const ALL: [Discipline; 4] = [
        Discipline::Lauf3000,
        Discipline::Lauf10Km,
        Discipline::Medizinball,
        Discipline::Kugelstossen,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Lauf3000 => "3.000 m Lauf",
            Discipline::Lauf10Km => "10 km Lauf",
            Discipline::Medizinball => "Medizinball (2kg)",
            Discipline::Kugelstossen => "Kugelstoßen",
        }
    }

    /// Whether a smaller result is the better one (run times yes, throws no).
    pub fn lower_is_better(&self) -> bool {
        match self {
            Discipline::Lauf3000 | Discipline::Lauf10Km => true,
            Discipline::Medizinball | Discipline::Kugelstossen => false,
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Discipline::Lauf3000 | Discipline::Lauf10Km => Unit::Seconds,
            Discipline::Medizinball | Discipline::Kugelstossen => Unit::Meters,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Discipline {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact labels plus short aliases for command-line use.
        match s.trim().to_lowercase().as_str() {
            "3.000 m lauf" | "3000m" | "3000 m" => Ok(Discipline::Lauf3000),
            "10 km lauf" | "10km" | "10 km" => Ok(Discipline::Lauf10Km),
            "medizinball (2kg)" | "medizinball" => Ok(Discipline::Medizinball),
            "kugelstoßen" | "kugelstossen" => Ok(Discipline::Kugelstossen),
            _ => Err(TrackerError::LookupError {
                message: format!("unknown discipline: '{}'", s),
            }),
        }
    }
}

/// The 16 fixed age brackets, "18–19" through the open-ended "ab90".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18–19")]
    A18_19,
    #[serde(rename = "20–24")]
    A20_24,
    #[serde(rename = "25–29")]
    A25_29,
    #[serde(rename = "30–34")]
    A30_34,
    #[serde(rename = "35–39")]
    A35_39,
    #[serde(rename = "40–44")]
    A40_44,
    #[serde(rename = "45–49")]
    A45_49,
    #[serde(rename = "50–54")]
    A50_54,
    #[serde(rename = "55–59")]
    A55_59,
    #[serde(rename = "60–64")]
    A60_64,
    #[serde(rename = "65–69")]
    A65_69,
    #[serde(rename = "70–74")]
    A70_74,
    #[serde(rename = "75–79")]
    A75_79,
    #[serde(rename = "80–84")]
    A80_84,
    #[serde(rename = "85–89")]
    A85_89,
    #[serde(rename = "ab90")]
    Ab90,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 16] = [
        AgeGroup::A18_19,
        AgeGroup::A20_24,
        AgeGroup::A25_29,
        AgeGroup::A30_34,
        AgeGroup::A35_39,
        AgeGroup::A40_44,
        AgeGroup::A45_49,
        AgeGroup::A50_54,
        AgeGroup::A55_59,
        AgeGroup::A60_64,
        AgeGroup::A65_69,
        AgeGroup::A70_74,
        AgeGroup::A75_79,
        AgeGroup::A80_84,
        AgeGroup::A85_89,
        AgeGroup::Ab90,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::A18_19 => "18–19",
            AgeGroup::A20_24 => "20–24",
            AgeGroup::A25_29 => "25–29",
            AgeGroup::A30_34 => "30–34",
            AgeGroup::A35_39 => "35–39",
            AgeGroup::A40_44 => "40–44",
            AgeGroup::A45_49 => "45–49",
            AgeGroup::A50_54 => "50–54",
            AgeGroup::A55_59 => "55–59",
            AgeGroup::A60_64 => "60–64",
            AgeGroup::A65_69 => "65–69",
            AgeGroup::A70_74 => "70–74",
            AgeGroup::A75_79 => "75–79",
            AgeGroup::A80_84 => "80–84",
            AgeGroup::A85_89 => "85–89",
            AgeGroup::Ab90 => "ab90",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AgeGroup {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The sheet labels use an en-dash; accept the plain hyphen spelling too.
        let normalized = s.trim().replace('-', "–");
        AgeGroup::ALL
            .iter()
            .copied()
            .find(|group| group.label() == normalized)
            .ok_or_else(|| TrackerError::LookupError {
                message: format!("unknown age group: '{}'", s),
            })
    }
}

/// Tier boundaries for one (discipline, age group) pair, in the discipline's
/// unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSet {
    pub bronze: f64,
    pub silber: f64,
    pub gold: f64,
}

impl ThresholdSet {
    /// Checks the tier boundaries are ordered for the given comparison
    /// direction: gold must be the strictest boundary, bronze the loosest.
    pub fn is_monotonic(&self, lower_is_better: bool) -> bool {
        if lower_is_better {
            self.gold <= self.silber && self.silber <= self.bronze
        } else {
            self.gold >= self.silber && self.silber >= self.bronze
        }
    }
}

/// One classified submission, as stored in the worksheet. The serde field
/// names are the worksheet's column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Discipline")]
    pub discipline: Discipline,
    #[serde(rename = "Age Group")]
    pub age_group: AgeGroup,
    #[serde(rename = "Result")]
    pub result: f64,
    #[serde(rename = "Achieved Level")]
    pub achieved_level: Tier,
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// Serde helper for the worksheet's timestamp column format.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TrackerError;

    #[test]
    fn tier_ordering_follows_quality() {
        assert!(Tier::Gold > Tier::Silber);
        assert!(Tier::Silber > Tier::Bronze);
        assert!(Tier::Bronze > Tier::BelowBronze);
    }

    #[test]
    fn age_group_parses_both_dash_spellings() {
        assert_eq!("20–24".parse::<AgeGroup>().unwrap(), AgeGroup::A20_24);
        assert_eq!("20-24".parse::<AgeGroup>().unwrap(), AgeGroup::A20_24);
        assert_eq!("ab90".parse::<AgeGroup>().unwrap(), AgeGroup::Ab90);
    }

    #[test]
    fn unknown_age_group_is_a_lookup_error() {
        let err = "91–95".parse::<AgeGroup>().unwrap_err();
        assert!(matches!(err, TrackerError::LookupError { .. }));
    }

    #[test]
    fn discipline_aliases_parse() {
        assert_eq!("3000m".parse::<Discipline>().unwrap(), Discipline::Lauf3000);
        assert_eq!(
            "10 km Lauf".parse::<Discipline>().unwrap(),
            Discipline::Lauf10Km
        );
        assert_eq!(
            "kugelstossen".parse::<Discipline>().unwrap(),
            Discipline::Kugelstossen
        );
        assert!("Weitsprung".parse::<Discipline>().is_err());
    }

    #[test]
    fn threshold_monotonicity_both_directions() {
        let running = ThresholdSet {
            bronze: 1070.0,
            silber: 950.0,
            gold: 830.0,
        };
        assert!(running.is_monotonic(true));
        assert!(!running.is_monotonic(false));

        let throwing = ThresholdSet {
            bronze: 7.75,
            silber: 8.25,
            gold: 8.75,
        };
        assert!(throwing.is_monotonic(false));
        assert!(!throwing.is_monotonic(true));
    }

    #[test]
    fn every_discipline_has_direction_and_unit() {
        for discipline in Discipline::ALL {
            match discipline.unit() {
                Unit::Seconds => assert!(discipline.lower_is_better()),
                Unit::Meters => assert!(!discipline.lower_is_better()),
            }
        }
    }
}
