//! The profile document: the single owned aggregate holding every entity.
//!
//! Loaded (or created) once at startup, mutated only through the engine,
//! persisted whole after every mutation. Field names here are the persisted
//! layout; changing them breaks existing profiles.

use crate::areas::{self, AreaName, AreaStats};
use crate::balance::{ScreenTimeLog, SocialCounter};
use crate::habits::Habits;
use crate::income::IncomeTracker;
use crate::milestones::{self, EpicMilestone};
use crate::scoring::DailyScoreRecord;
use crate::tasks::{Project, Todo};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default monthly income goal for a fresh profile.
const DEFAULT_MONTHLY_GOAL: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub life_areas: BTreeMap<AreaName, AreaStats>,
    pub projects: Vec<Project>,
    pub todos: Vec<Todo>,
    pub habits: Habits,
    pub epic_milestones: BTreeMap<String, EpicMilestone>,
    pub screen_time: ScreenTimeLog,
    pub social_interactions: SocialCounter,
    pub income: IncomeTracker,
    pub daily_scores: Vec<DailyScoreRecord>,
    pub achievements: Vec<String>,
    pub last_login: NaiveDate,
}

impl Profile {
    /// A fresh profile seeded with the starter areas and milestone table.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            life_areas: areas::starter_areas(today),
            projects: Vec::new(),
            todos: Vec::new(),
            habits: Habits::default(),
            epic_milestones: milestones::starter_milestones(),
            screen_time: ScreenTimeLog::default(),
            social_interactions: SocialCounter::new(today),
            income: IncomeTracker::new(DEFAULT_MONTHLY_GOAL, today.format("%Y-%m").to_string()),
            daily_scores: Vec::new(),
            achievements: Vec::new(),
            last_login: today,
        }
    }

    pub fn area(&self, name: &AreaName) -> Option<&AreaStats> {
        self.life_areas.get(name)
    }

    pub fn area_mut(&mut self, name: &AreaName) -> Option<&mut AreaStats> {
        self.life_areas.get_mut(name)
    }

    /// Areas that receive project-completion XP.
    pub fn work_skill_areas(&self) -> Vec<AreaName> {
        self.life_areas
            .keys()
            .filter(|name| name.is_work_skill())
            .cloned()
            .collect()
    }

    /// Ids are sequential from 1, derived from the list length.
    pub fn next_project_id(&self) -> u64 {
        self.projects.len() as u64 + 1
    }

    pub fn next_todo_id(&self) -> u64 {
        self.todos.len() as u64 + 1
    }

    pub fn todos_completed_on(&self, date: NaiveDate) -> usize {
        self.todos
            .iter()
            .filter(|t| t.completion_date == Some(date))
            .count()
    }

    pub fn pending_todos(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|t| !t.completed)
    }

    pub fn pending_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.completed)
    }

    /// Areas grouped by category, in map order. Used by the stats view and
    /// the dashboard.
    pub fn areas_by_category(&self) -> BTreeMap<&str, Vec<(&AreaName, &AreaStats)>> {
        let mut grouped: BTreeMap<&str, Vec<(&AreaName, &AreaStats)>> = BTreeMap::new();
        for (name, stats) in &self.life_areas {
            grouped
                .entry(name.category.as_str())
                .or_default()
                .push((name, stats));
        }
        grouped
    }

    pub fn total_xp(&self) -> i64 {
        self.life_areas.values().map(|s| s.xp).sum()
    }

    /// Mean level across all areas.
    pub fn average_level(&self) -> f64 {
        if self.life_areas.is_empty() {
            return 0.0;
        }
        let total: i64 = self.life_areas.values().map(|s| s.level).sum();
        total as f64 / self.life_areas.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_profile_shape() {
        let today = day("2025-01-10");
        let profile = Profile::new(today);

        assert!(!profile.life_areas.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.todos.is_empty());
        assert_eq!(profile.last_login, today);
        assert_eq!(profile.social_interactions.week_start, today);
        assert_eq!(profile.income.target_month, "2025-01");
        assert_eq!(profile.income.monthly_goal, DEFAULT_MONTHLY_GOAL);
    }

    #[test]
    fn test_sequential_ids_start_at_one() {
        let profile = Profile::new(day("2025-01-10"));
        assert_eq!(profile.next_project_id(), 1);
        assert_eq!(profile.next_todo_id(), 1);
    }

    #[test]
    fn test_areas_by_category_groups_prefixes() {
        let profile = Profile::new(day("2025-01-10"));
        let grouped = profile.areas_by_category();

        assert!(grouped.contains_key("Health"));
        assert!(grouped.contains_key("Work Skills"));
        assert_eq!(grouped["Health"].len(), 3);
        assert_eq!(grouped["Social Balance"].len(), 1);
    }

    #[test]
    fn test_json_roundtrip_is_identity() {
        let today = day("2025-01-10");
        let mut profile = Profile::new(today);
        profile.habits.shower.advance(today);
        profile.screen_time.log(today, 2.5);
        profile.achievements.push("Health - Exercise - Bronze Tier".to_string());

        let json = serde_json::to_string_pretty(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_persisted_field_names() {
        let profile = Profile::new(day("2025-01-10"));
        let json = serde_json::to_value(&profile).unwrap();

        for field in [
            "life_areas",
            "projects",
            "todos",
            "habits",
            "epic_milestones",
            "screen_time",
            "social_interactions",
            "income",
            "daily_scores",
            "achievements",
            "last_login",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }

        assert_eq!(json["last_login"], "2025-01-10");
        assert!(json["life_areas"]["Health - Exercise"]["xp"].is_i64());
    }
}
