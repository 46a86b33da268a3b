//! D&D 5th Edition ability score formulas.

use std::fmt;

/// An ability modifier derived from an ability score.
///
/// Displays with an explicit sign, e.g. `+2`, `+0`, `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Modifier(i32);

impl Modifier {
    /// Derive the modifier for an ability score: `floor((score - 10) / 2)`.
    pub fn from_score(score: i32) -> Self {
        // floor((score - 10) / 2) == floor(score / 2) - 5, which cannot overflow
        Self(score.div_euclid(2) - 5)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        write!(f, "{}{}", sign, self.0.unsigned_abs())
    }
}

impl From<Modifier> for i32 {
    fn from(modifier: Modifier) -> Self {
        modifier.0
    }
}

/// Gets the signed display form of the modifier for an ability score.
///
/// # Examples
///
/// ```
/// use nc_utilities::get_modifier;
///
/// assert_eq!(get_modifier(14), "+2");
/// assert_eq!(get_modifier(10), "+0");
/// assert_eq!(get_modifier(7), "-2");
/// ```
pub fn get_modifier(score: i32) -> String {
    Modifier::from_score(score).to_string()
}

/// Gets the ability score modifier as a number.
pub fn get_ability_score_modifier(score: i32) -> i32 {
    Modifier::from_score(score).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_modifier_calculation() {
        assert_eq!(get_ability_score_modifier(1), -5);
        assert_eq!(get_ability_score_modifier(7), -2);
        assert_eq!(get_ability_score_modifier(8), -1);
        assert_eq!(get_ability_score_modifier(9), -1);
        assert_eq!(get_ability_score_modifier(10), 0);
        assert_eq!(get_ability_score_modifier(11), 0);
        assert_eq!(get_ability_score_modifier(12), 1);
        assert_eq!(get_ability_score_modifier(20), 5);
        assert_eq!(get_ability_score_modifier(30), 10);
    }

    #[test]
    fn test_ability_modifier_below_one() {
        assert_eq!(get_ability_score_modifier(0), -5);
        assert_eq!(get_ability_score_modifier(-1), -6);
    }

    #[test]
    fn test_ability_modifier_extreme_scores() {
        assert_eq!(get_ability_score_modifier(i32::MIN), -1_073_741_829);
        assert_eq!(get_ability_score_modifier(i32::MIN + 5), -1_073_741_827);
        assert_eq!(get_ability_score_modifier(i32::MAX), 1_073_741_818);
        assert_eq!(get_modifier(i32::MIN), "-1073741829");
        assert_eq!(get_modifier(i32::MAX), "+1073741818");
    }

    #[test]
    fn test_get_modifier_formats_sign() {
        assert_eq!(get_modifier(10), "+0");
        assert_eq!(get_modifier(11), "+0");
        assert_eq!(get_modifier(7), "-2");
        assert_eq!(get_modifier(9), "-1");
        assert_eq!(get_modifier(20), "+5");
    }

    #[test]
    fn test_get_modifier_matches_numeric_form() {
        for score in 1..=30 {
            let numeric = get_ability_score_modifier(score);
            assert_eq!(get_modifier(score), format!("{numeric:+}"));
        }
    }

    #[test]
    fn test_modifier_conversions() {
        let modifier = Modifier::from_score(16);
        assert_eq!(modifier.value(), 3);
        assert_eq!(i32::from(modifier), 3);
        assert!(Modifier::from_score(8) < Modifier::from_score(12));
    }
}
