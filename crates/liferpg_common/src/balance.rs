//! Screen-time and social-interaction limits.
//!
//! Both feed the same penalty mechanic: a violation produces a total penalty
//! that the engine divides evenly across every life area (integer division,
//! remainder dropped).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily screen-time log. One entry per date; re-logging a day overwrites.
///
/// `weekly_violations` is carried in the persisted layout but is not
/// currently updated by any operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenTimeLog {
    pub daily_log: BTreeMap<NaiveDate, f64>,
    pub weekly_violations: u32,
}

impl ScreenTimeLog {
    pub fn log(&mut self, date: NaiveDate, hours: f64) {
        self.daily_log.insert(date, hours);
    }

    pub fn hours_on(&self, date: NaiveDate) -> Option<f64> {
        self.daily_log.get(&date).copied()
    }
}

/// Weekly rolling social-interaction counter with an anchor date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialCounter {
    pub weekly_count: u32,
    pub week_start: NaiveDate,
}

impl SocialCounter {
    pub fn new(week_start: NaiveDate) -> Self {
        Self {
            weekly_count: 0,
            week_start,
        }
    }

    /// Zero the count and re-anchor if the anchor is at least 7 days old.
    pub fn roll_week(&mut self, today: NaiveDate) {
        if (today - self.week_start).num_days() >= 7 {
            self.weekly_count = 0;
            self.week_start = today;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_screen_time_overwrites_same_day() {
        let mut log = ScreenTimeLog::default();
        log.log(day("2025-01-10"), 1.5);
        log.log(day("2025-01-10"), 3.0);
        assert_eq!(log.hours_on(day("2025-01-10")), Some(3.0));
        assert_eq!(log.daily_log.len(), 1);
    }

    #[test]
    fn test_week_rolls_after_seven_days() {
        let mut social = SocialCounter::new(day("2025-01-01"));
        social.weekly_count = 3;

        social.roll_week(day("2025-01-07"));
        assert_eq!(social.weekly_count, 3, "six days in, same week");

        social.roll_week(day("2025-01-08"));
        assert_eq!(social.weekly_count, 0);
        assert_eq!(social.week_start, day("2025-01-08"));
    }
}
