//! Daily habits with consecutive-day streak tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak state for a daily habit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub streak: u32,
    pub last_done: Option<NaiveDate>,
}

impl HabitRecord {
    /// Apply the streak rule for a completion on `today` and record the
    /// date. A one-day gap extends the streak, a longer gap resets it to 1,
    /// and a same-day repeat leaves the count untouched. Callers that treat
    /// repeats as errors (shower) must reject before calling this.
    pub fn advance(&mut self, today: NaiveDate) {
        match self.last_done {
            Some(last) => {
                let gap = (today - last).num_days();
                if gap == 1 {
                    self.streak += 1;
                } else if gap > 1 {
                    self.streak = 1;
                }
            }
            None => self.streak = 1,
        }
        self.last_done = Some(today);
    }

    pub fn done_on(&self, date: NaiveDate) -> bool {
        self.last_done == Some(date)
    }
}

/// One logged pushup session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushupRecord {
    pub date: NaiveDate,
    pub count: u32,
}

/// Workout habit: streak plus the full pushup history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHabit {
    #[serde(flatten)]
    pub record: HabitRecord,
    pub pushup_history: Vec<PushupRecord>,
}

/// Both tracked habits, in the persisted layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Habits {
    pub shower: HabitRecord,
    pub workout: WorkoutHabit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_completion_starts_streak() {
        let mut habit = HabitRecord::default();
        habit.advance(day("2025-01-10"));
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.last_done, Some(day("2025-01-10")));
    }

    #[test]
    fn test_next_day_extends_streak() {
        let mut habit = HabitRecord {
            streak: 4,
            last_done: Some(day("2025-01-09")),
        };
        habit.advance(day("2025-01-10"));
        assert_eq!(habit.streak, 5);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut habit = HabitRecord {
            streak: 12,
            last_done: Some(day("2025-01-07")),
        };
        habit.advance(day("2025-01-10"));
        assert_eq!(habit.streak, 1);
    }

    #[test]
    fn test_same_day_repeat_keeps_streak() {
        let mut habit = HabitRecord {
            streak: 3,
            last_done: Some(day("2025-01-10")),
        };
        habit.advance(day("2025-01-10"));
        assert_eq!(habit.streak, 3);
        assert_eq!(habit.last_done, Some(day("2025-01-10")));
    }

    #[test]
    fn test_workout_serde_layout_is_flat() {
        let workout = WorkoutHabit {
            record: HabitRecord {
                streak: 2,
                last_done: Some(day("2025-01-10")),
            },
            pushup_history: vec![PushupRecord {
                date: day("2025-01-10"),
                count: 120,
            }],
        };
        let json = serde_json::to_value(&workout).unwrap();
        // streak/last_done sit next to pushup_history, not nested
        assert_eq!(json["streak"], 2);
        assert_eq!(json["last_done"], "2025-01-10");
        assert_eq!(json["pushup_history"][0]["count"], 120);
    }
}
