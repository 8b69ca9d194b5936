//! Epic milestones: one-shot achievements with a large fixed XP reward
//! distributed evenly across every life area.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpicMilestone {
    pub completed: bool,
    pub xp_reward: i64,
    pub description: String,
}

impl EpicMilestone {
    fn pending(xp_reward: i64, description: &str) -> Self {
        Self {
            completed: false,
            xp_reward,
            description: description.to_string(),
        }
    }
}

/// The seeded milestone table for a fresh profile.
pub fn starter_milestones() -> BTreeMap<String, EpicMilestone> {
    let entries = [
        (
            "algorithms_paper",
            EpicMilestone::pending(847, "Publish a research paper on algorithms"),
        ),
        (
            "rating_2000",
            EpicMilestone::pending(1203, "Reach 2000 rating in competitive programming"),
        ),
        (
            "target_weight",
            EpicMilestone::pending(672, "Reach target body weight"),
        ),
        (
            "masters_acceptance",
            EpicMilestone::pending(1847, "Get accepted into a masters programme"),
        ),
        (
            "gold_medal",
            EpicMilestone::pending(2341, "Win gold at an international championship"),
        ),
    ];

    entries
        .into_iter()
        .map(|(key, m)| (key.to_string(), m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_milestones_all_pending() {
        let milestones = starter_milestones();
        assert_eq!(milestones.len(), 5);
        assert!(milestones.values().all(|m| !m.completed));
        assert!(milestones.values().all(|m| m.xp_reward > 0));
    }

    #[test]
    fn test_serde_layout() {
        let milestones = starter_milestones();
        let json = serde_json::to_value(&milestones).unwrap();
        assert_eq!(json["rating_2000"]["completed"], false);
        assert_eq!(json["rating_2000"]["xp_reward"], 1203);
    }
}
