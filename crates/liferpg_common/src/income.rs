//! Monthly income tracking.
//!
//! Earnings grow through completed projects; a manual override replaces the
//! running total and remembers the corrected value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTracker {
    pub monthly_goal: i64,
    pub current_month_earnings: i64,
    pub target_month: String,
    pub manual_override: Option<i64>,
}

impl IncomeTracker {
    pub fn new(monthly_goal: i64, target_month: String) -> Self {
        Self {
            monthly_goal,
            current_month_earnings: 0,
            target_month,
            manual_override: None,
        }
    }

    pub fn add_earnings(&mut self, amount: i64) {
        self.current_month_earnings += amount;
    }

    pub fn set_earnings(&mut self, amount: i64) {
        self.current_month_earnings = amount;
        self.manual_override = Some(amount);
    }

    /// Goal progress in percent. Unbounded above 100.
    pub fn progress_percent(&self) -> f64 {
        if self.monthly_goal > 0 {
            self.current_month_earnings as f64 / self.monthly_goal as f64 * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_earnings_accumulate() {
        let mut income = IncomeTracker::new(10_000, "2025-02".to_string());
        income.add_earnings(1500);
        income.add_earnings(500);
        assert_eq!(income.current_month_earnings, 2000);
        assert_eq!(income.manual_override, None);
    }

    #[test]
    fn test_manual_override_replaces_total() {
        let mut income = IncomeTracker::new(10_000, "2025-02".to_string());
        income.add_earnings(1500);
        income.set_earnings(800);
        assert_eq!(income.current_month_earnings, 800);
        assert_eq!(income.manual_override, Some(800));
    }

    #[test]
    fn test_progress_percent() {
        let mut income = IncomeTracker::new(10_000, "2025-02".to_string());
        income.add_earnings(2500);
        assert_eq!(income.progress_percent(), 25.0);

        let zero_goal = IncomeTracker::new(0, "2025-02".to_string());
        assert_eq!(zero_goal.progress_percent(), 0.0);
    }
}
