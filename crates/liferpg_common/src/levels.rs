//! Level arithmetic.
//!
//! Flat 150-XP-per-level curve. Every level shown or compared anywhere in
//! the tool comes from [`calculate_level`]; nothing re-derives it with
//! different rounding.

/// XP required per level.
pub const XP_PER_LEVEL: i64 = 150;

/// Derive the level for a cumulative XP total.
///
/// `floor(xp / 150) + 1`. Uses euclidean division so that negative XP
/// (possible through manual adjustments, which are not validated) floors
/// the same way the formula reads.
pub fn calculate_level(xp: i64) -> i64 {
    xp.div_euclid(XP_PER_LEVEL) + 1
}

/// XP accumulated inside the current level band.
pub fn xp_into_level(xp: i64) -> i64 {
    xp.rem_euclid(XP_PER_LEVEL)
}

/// XP still missing to reach the next level.
pub fn xp_to_next_level(xp: i64) -> i64 {
    XP_PER_LEVEL - xp_into_level(xp)
}

/// Progress through the current level band (0.0 - 1.0).
pub fn progress_to_next(xp: i64) -> f64 {
    xp_into_level(xp) as f64 / XP_PER_LEVEL as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_at_zero_xp() {
        assert_eq!(calculate_level(0), 1);
    }

    #[test]
    fn test_level_increments_at_each_multiple_of_150() {
        assert_eq!(calculate_level(149), 1);
        assert_eq!(calculate_level(150), 2);
        assert_eq!(calculate_level(299), 2);
        assert_eq!(calculate_level(300), 3);
        assert_eq!(calculate_level(1500), 11);
    }

    #[test]
    fn test_negative_xp_floors() {
        // Manual adjustments can push XP below zero; the formula keeps
        // flooring rather than truncating toward zero.
        assert_eq!(calculate_level(-1), 0);
        assert_eq!(calculate_level(-150), 0);
        assert_eq!(calculate_level(-151), -1);
    }

    #[test]
    fn test_xp_to_next_level() {
        assert_eq!(xp_to_next_level(0), 150);
        assert_eq!(xp_to_next_level(140), 10);
        assert_eq!(xp_to_next_level(150), 150);
    }

    #[test]
    fn test_progress_to_next() {
        assert_eq!(progress_to_next(0), 0.0);
        assert_eq!(progress_to_next(75), 0.5);
        assert_eq!(progress_to_next(150), 0.0);
    }
}
