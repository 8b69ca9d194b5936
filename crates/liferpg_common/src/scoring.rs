//! Daily performance score and letter grade.
//!
//! A pure derivation over the current profile. The presentation layers call
//! the same functions the engine uses, so displayed scores can never drift
//! from recorded ones.

use crate::profile::Profile;
use crate::settings::Settings;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded end-of-day score. Appended by the daily summary; a second
/// summary on the same day appends a second record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyScoreRecord {
    pub date: NaiveDate,
    pub score: u8,
    pub grade: String,
}

/// Letter grade for a 0-100 score.
pub fn grade_for(score: u8) -> &'static str {
    match score {
        95..=u8::MAX => "SSS",
        90..=94 => "SS",
        85..=89 => "S",
        80..=84 => "A+",
        75..=79 => "A",
        70..=74 => "A-",
        60..=69 => "B",
        50..=59 => "C",
        40..=49 => "D",
        _ => "F",
    }
}

/// Compute today's score from the profile.
///
/// Additive components: shower done +20, workout done +20, completed todos
/// at 10 each capped at 30, screen time logged and within limit +15, weekly
/// social count within limit +15.
pub fn daily_score(profile: &Profile, settings: &Settings, today: NaiveDate) -> (u8, &'static str) {
    let mut score = 0u8;

    if profile.habits.shower.done_on(today) {
        score += 20;
    }
    if profile.habits.workout.record.done_on(today) {
        score += 20;
    }

    score += (profile.todos_completed_on(today) * 10).min(30) as u8;

    if let Some(hours) = profile.screen_time.hours_on(today) {
        if hours <= settings.screen_time_limit_hours {
            score += 15;
        }
    }

    if profile.social_interactions.weekly_count <= settings.social_weekly_limit {
        score += 15;
    }

    (score, grade_for(score))
}
