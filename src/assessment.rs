//! Assessment data model: the structured result of evaluating a single
//! password, combining entropy estimates, character-class coverage, weak
//! pattern flags, and the derived strength label.
//!
//! An `Assessment` is produced once by [`crate::evaluator::evaluate`],
//! consumed for display or export, and discarded. Every field is a pure
//! function of the trimmed password (and, for `is_common`, the common set).
use serde::Serialize;

/// Score below which a password is labeled WEAK.
pub const WEAK_CEILING: f64 = 1.5;
/// Score at or above which a password is labeled STRONG.
pub const STRONG_FLOOR: f64 = 4.0;

/// Strength verdict derived from the raw score with fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Classify a rounded raw score. Total over all finite inputs.
    pub fn from_score(raw_score: f64) -> Self {
        if raw_score < WEAK_CEILING {
            Strength::Weak
        } else if raw_score < STRONG_FLOOR {
            Strength::Moderate
        } else {
            Strength::Strong
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Strength::Weak => "WEAK",
            Strength::Moderate => "MODERATE",
            Strength::Strong => "STRONG",
        };
        f.write_str(s)
    }
}

/// Represents the full measurement record for one evaluated password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// The exact string evaluated, after whitespace trimming.
    pub password: String,
    /// Length in Unicode code points, not bytes.
    pub length: usize,
    /// Total Shannon information estimate in bits (per-char entropy x length).
    pub shannon_entropy: f64,
    /// Uniform-draw estimate in bits: length x log2(charset size).
    pub bruteforce_entropy: f64,
    /// Sum of nominal bucket sizes for the character classes present (0-94).
    pub charset_size: u32,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Exact, case-sensitive match in the common-password set.
    pub is_common: bool,
    /// Whole-string periodic repetition, or a run of 4+ identical chars.
    pub has_repeated_sequence: bool,
    /// Contains an ascending or descending code-point run of 4+.
    pub is_sequential: bool,
    /// Entirely digits or entirely letters. Vacuously true when empty.
    pub only_digits_or_letters: bool,
    /// Combined score, rounded to two decimal places.
    pub raw_score: f64,
    pub strength: Strength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_half_open() {
        assert_eq!(Strength::from_score(1.49), Strength::Weak);
        assert_eq!(Strength::from_score(1.5), Strength::Moderate);
        assert_eq!(Strength::from_score(3.99), Strength::Moderate);
        assert_eq!(Strength::from_score(4.0), Strength::Strong);
        assert_eq!(Strength::from_score(-5.5), Strength::Weak);
        assert_eq!(Strength::from_score(8.0), Strength::Strong);
    }

    #[test]
    fn display_matches_report_labels() {
        assert_eq!(Strength::Weak.to_string(), "WEAK");
        assert_eq!(Strength::Moderate.to_string(), "MODERATE");
        assert_eq!(Strength::Strong.to_string(), "STRONG");
    }
}
