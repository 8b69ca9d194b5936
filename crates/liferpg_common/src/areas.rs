//! Life areas: skill tracks keyed by category and subskill.
//!
//! The persisted document keys areas by their display name
//! (`"Category - Subskill"`, or just the category for standalone areas such
//! as `"Social Balance"`). In memory the name is an explicit two-field
//! structure so display consumers can group by category without re-parsing
//! strings.

use crate::levels;
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Category name for areas that receive project-completion XP.
pub const WORK_SKILLS: &str = "Work Skills";

/// Structured area name. Orders by category first, which keeps map
/// iteration grouped the way the stats view renders it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AreaName {
    pub category: String,
    pub subskill: Option<String>,
}

impl AreaName {
    pub fn new(category: &str, subskill: &str) -> Self {
        Self {
            category: category.to_string(),
            subskill: Some(subskill.to_string()),
        }
    }

    /// Area whose display name is just the category (no subskill).
    pub fn solo(category: &str) -> Self {
        Self {
            category: category.to_string(),
            subskill: None,
        }
    }

    pub fn exercise() -> Self {
        Self::new("Health", "Exercise")
    }

    pub fn sleep() -> Self {
        Self::new("Health", "Sleep")
    }

    pub fn hygiene() -> Self {
        Self::new("Health", "Hygiene")
    }

    pub fn social_balance() -> Self {
        Self::solo("Social Balance")
    }

    pub fn memory_techniques() -> Self {
        Self::solo("Memory Techniques")
    }

    pub fn is_work_skill(&self) -> bool {
        self.category == WORK_SKILLS
    }

    /// Short label for compact listings: the subskill when present,
    /// otherwise the category.
    pub fn short(&self) -> &str {
        self.subskill.as_deref().unwrap_or(&self.category)
    }

    /// Parse a display string. Never fails: without a " - " separator the
    /// whole string is a solo category.
    pub fn parse_display(s: &str) -> Self {
        match s.split_once(" - ") {
            Some((category, subskill)) => Self::new(category, subskill),
            None => Self::solo(s),
        }
    }
}

impl fmt::Display for AreaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subskill {
            Some(sub) => write!(f, "{} - {}", self.category, sub),
            None => write!(f, "{}", self.category),
        }
    }
}

impl FromStr for AreaName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_display(s))
    }
}

impl Serialize for AreaName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AreaName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Per-area progression stats. `level` is always re-derived from `xp`
/// through [`levels::calculate_level`] after any XP change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaStats {
    pub level: i64,
    pub xp: i64,
    pub last_active: NaiveDate,
}

impl AreaStats {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            level: 1,
            xp: 0,
            last_active: today,
        }
    }

    /// Re-derive the stored level from the current XP total.
    pub fn rederive_level(&mut self) {
        self.level = levels::calculate_level(self.xp);
    }
}

/// The starter area set for a fresh profile.
pub fn starter_areas(today: NaiveDate) -> BTreeMap<AreaName, AreaStats> {
    let names = [
        AreaName::exercise(),
        AreaName::sleep(),
        AreaName::hygiene(),
        AreaName::new("University", "Databases"),
        AreaName::new("University", "Software Engineering"),
        AreaName::new("University", "App Development"),
        AreaName::new("University", "Cybersecurity"),
        AreaName::new("University", "Fuzzing"),
        AreaName::new("University", "Research Basics"),
        AreaName::new(WORK_SKILLS, "React"),
        AreaName::new(WORK_SKILLS, "SEO"),
        AreaName::new(WORK_SKILLS, "DevOps"),
        AreaName::new(WORK_SKILLS, "Databases"),
        AreaName::new(WORK_SKILLS, "iOS"),
        AreaName::new(WORK_SKILLS, "Android"),
        AreaName::new("Personal Sciences", "Math"),
        AreaName::new("Personal Sciences", "Physics"),
        AreaName::new("Personal Sciences", "Chemistry"),
        AreaName::new("Personal Sciences", "Game Dev"),
        AreaName::memory_techniques(),
        AreaName::social_balance(),
    ];

    names
        .into_iter()
        .map(|name| (name, AreaStats::fresh(today)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_roundtrip() {
        let name = AreaName::new("Health", "Exercise");
        assert_eq!(name.to_string(), "Health - Exercise");
        assert_eq!("Health - Exercise".parse::<AreaName>().unwrap(), name);

        let solo = AreaName::solo("Social Balance");
        assert_eq!(solo.to_string(), "Social Balance");
        assert_eq!("Social Balance".parse::<AreaName>().unwrap(), solo);
    }

    #[test]
    fn test_serializes_as_display_string() {
        let name = AreaName::new("Work Skills", "DevOps");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Work Skills - DevOps\"");

        let back: AreaName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_map_key_serialization() {
        let mut map = BTreeMap::new();
        map.insert(AreaName::hygiene(), AreaStats::fresh(day("2025-01-10")));
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"Health - Hygiene\""));

        let back: BTreeMap<AreaName, AreaStats> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_work_skill_tagging() {
        assert!(AreaName::new(WORK_SKILLS, "React").is_work_skill());
        assert!(!AreaName::new("University", "Databases").is_work_skill());
        assert!(!AreaName::social_balance().is_work_skill());
    }

    #[test]
    fn test_rederive_level() {
        let mut stats = AreaStats::fresh(day("2025-01-10"));
        stats.xp = 450;
        stats.rederive_level();
        assert_eq!(stats.level, 4);
    }

    #[test]
    fn test_starter_areas_grouping() {
        let areas = starter_areas(day("2025-01-10"));
        let work: Vec<_> = areas.keys().filter(|a| a.is_work_skill()).collect();
        assert_eq!(work.len(), 6);
        assert!(areas.contains_key(&AreaName::exercise()));
        assert!(areas.contains_key(&AreaName::social_balance()));
        assert!(areas.values().all(|s| s.level == 1 && s.xp == 0));
    }
}
