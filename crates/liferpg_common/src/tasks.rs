//! Projects and todos: deadline-bearing work items with one-shot completion.

use crate::areas::AreaName;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A paid project. Completing it adds its value to the month's earnings and
/// distributes deadline-scaled XP across the Work Skills areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub value: i64,
    pub deadline: NaiveDate,
    pub completed: bool,
    pub completion_date: Option<NaiveDate>,
    pub created: NaiveDate,
}

/// A todo bound to a single life area, rewarded with deadline-scaled XP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub area: AreaName,
    pub base_xp: i64,
    pub deadline: NaiveDate,
    pub completed: bool,
    pub completion_date: Option<NaiveDate>,
    pub created: NaiveDate,
}

/// XP multiplier from completion date vs. deadline.
///
/// On time or early: 1.5x. Up to a week late: 1.0x. Later: 0.5x.
pub fn calculate_time_multiplier(deadline: NaiveDate, completed: NaiveDate) -> f64 {
    let days_diff = (completed - deadline).num_days();
    if days_diff <= 0 {
        1.5
    } else if days_diff <= 7 {
        1.0
    } else {
        0.5
    }
}

/// Scale a base XP value by a multiplier, truncating to an integer.
pub fn scaled_xp(base_xp: i64, multiplier: f64) -> i64 {
    (base_xp as f64 * multiplier) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_multiplier_on_time() {
        assert_eq!(
            calculate_time_multiplier(day("2025-01-10"), day("2025-01-10")),
            1.5
        );
        assert_eq!(
            calculate_time_multiplier(day("2025-01-10"), day("2025-01-02")),
            1.5
        );
    }

    #[test]
    fn test_multiplier_within_a_week_late() {
        assert_eq!(
            calculate_time_multiplier(day("2025-01-10"), day("2025-01-15")),
            1.0
        );
        assert_eq!(
            calculate_time_multiplier(day("2025-01-10"), day("2025-01-17")),
            1.0
        );
    }

    #[test]
    fn test_multiplier_over_a_week_late() {
        assert_eq!(
            calculate_time_multiplier(day("2025-01-10"), day("2025-01-20")),
            0.5
        );
    }

    #[test]
    fn test_scaled_xp_truncates() {
        assert_eq!(scaled_xp(15, 1.5), 22);
        assert_eq!(scaled_xp(40, 1.0), 40);
        assert_eq!(scaled_xp(25, 0.5), 12);
    }
}
