use crate::core::benchmarks::BenchmarkTable;
use crate::domain::model::{AgeGroup, Discipline, Tier};
use crate::utils::error::Result;

/// Classifies a numeric result against the benchmark table.
///
/// Boundaries qualify: for run times a result equal to the gold threshold is
/// still Gold, for throws likewise. Comparisons run in strict Gold, Silber,
/// Bronze order and the first match wins. Negative or zero results are not
/// special-cased here; non-negativity is a concern of the input boundary.
pub fn classify(
    table: &BenchmarkTable,
    discipline: Discipline,
    age_group: AgeGroup,
    result: f64,
) -> Result<Tier> {
    let set = table.thresholds(discipline, age_group)?;

    let tier = if discipline.lower_is_better() {
        if result <= set.gold {
            Tier::Gold
        } else if result <= set.silber {
            Tier::Silber
        } else if result <= set.bronze {
            Tier::Bronze
        } else {
            Tier::BelowBronze
        }
    } else if result >= set.gold {
        Tier::Gold
    } else if result >= set.silber {
        Tier::Silber
    } else if result >= set.bronze {
        Tier::Bronze
    } else {
        Tier::BelowBronze
    };

    Ok(tier)
}
