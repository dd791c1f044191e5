//! The combining scorer: runs every measurement over a trimmed password and
//! folds them into a raw score and strength label with a fixed linear
//! formula.
//!
//! Evaluation is side-effect-free and total: any string is valid input,
//! including the empty string, and identical inputs always produce
//! identical Assessments.
use crate::assessment::{Assessment, Strength};
use crate::heuristics::{
    CharClasses, MIN_RUN_LEN, bruteforce_entropy, has_repeated_sequence, has_sequential_run,
    is_only_digits_or_letters, shannon_entropy,
};
use crate::wordlist::CommonSet;

/// Divisor applied to the brute-force estimate before capping.
const ENTROPY_DIVISOR: f64 = 20.0;
/// Cap on the entropy term, so sheer length cannot dominate the score.
const ENTROPY_CAP: f64 = 5.0;
const MIXED_CASE_BONUS: f64 = 1.0;
const DIGIT_BONUS: f64 = 1.0;
const SYMBOL_BONUS: f64 = 1.0;
const COMMON_PENALTY: f64 = 5.0;
const REPEATED_PENALTY: f64 = 2.0;
const SEQUENTIAL_PENALTY: f64 = 2.0;
const SINGLE_CLASS_PENALTY: f64 = 0.5;

/// Evaluate one password against the given common-password set.
///
/// The password is whitespace-trimmed before any measurement. The penalties
/// are sized so that a matched weak pattern caps an otherwise perfect
/// password at MODERATE.
pub fn evaluate(password: &str, common: &CommonSet) -> Assessment {
    let pw = password.trim();
    let length = pw.chars().count();

    let classes = CharClasses::of(pw);
    let charset_size = classes.charset_size();
    let shannon = shannon_entropy(pw);
    let bruteforce = bruteforce_entropy(length, charset_size);
    let is_common = common.contains(pw);
    let repeated = has_repeated_sequence(pw);
    let sequential = has_sequential_run(pw, MIN_RUN_LEN);
    let single_class = is_only_digits_or_letters(pw);

    let mut score = (bruteforce / ENTROPY_DIVISOR).min(ENTROPY_CAP);
    if classes.has_upper && classes.has_lower {
        score += MIXED_CASE_BONUS;
    }
    if classes.has_digit {
        score += DIGIT_BONUS;
    }
    if classes.has_symbol {
        score += SYMBOL_BONUS;
    }
    if is_common {
        score -= COMMON_PENALTY;
    }
    if repeated {
        score -= REPEATED_PENALTY;
    }
    if sequential {
        score -= SEQUENTIAL_PENALTY;
    }
    if single_class {
        score -= SINGLE_CLASS_PENALTY;
    }
    let raw_score = round2(score);

    Assessment {
        password: pw.to_string(),
        length,
        shannon_entropy: shannon,
        bruteforce_entropy: bruteforce,
        charset_size,
        has_upper: classes.has_upper,
        has_lower: classes.has_lower,
        has_digit: classes.has_digit,
        has_symbol: classes.has_symbol,
        is_common,
        has_repeated_sequence: repeated,
        is_sequential: sequential,
        only_digits_or_letters: single_class,
        raw_score,
        strength: Strength::from_score(raw_score),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(pw: &str) -> Assessment {
        evaluate(pw, &CommonSet::new())
    }

    #[test]
    fn empty_password_is_neutral_and_weak() {
        let a = eval("");
        assert_eq!(a.length, 0);
        assert_eq!(a.shannon_entropy, 0.0);
        assert_eq!(a.bruteforce_entropy, 0.0);
        assert_eq!(a.charset_size, 0);
        assert!(!a.has_repeated_sequence);
        assert!(!a.is_sequential);
        assert!(a.only_digits_or_letters);
        assert_eq!(a.raw_score, -0.5);
        assert_eq!(a.strength, Strength::Weak);
    }

    #[test]
    fn trims_before_measuring() {
        let a = eval("  abc123  ");
        assert_eq!(a.password, "abc123");
        assert_eq!(a.length, 6);
        assert!(!a.has_symbol);
    }

    #[test]
    fn length_counts_code_points() {
        let a = eval("p\u{e4}ss");
        assert_eq!(a.length, 4);
    }

    #[test]
    fn common_password_is_forced_weak() {
        let a = eval("123456");
        assert!(a.is_common);
        assert!(a.is_sequential);
        assert!(a.only_digits_or_letters);
        assert_eq!(a.strength, Strength::Weak);
        assert!(a.raw_score < 1.5);
    }

    #[test]
    fn strong_mixed_class_password() {
        let a = eval("Tr0ub4dor&3XyZ!");
        assert!(a.has_upper && a.has_lower && a.has_digit && a.has_symbol);
        assert!(!a.is_common);
        assert!(!a.has_repeated_sequence);
        assert!(!a.is_sequential);
        assert_eq!(a.charset_size, 94);
        assert_eq!(a.strength, Strength::Strong);
        assert!(a.raw_score >= 4.0);
    }

    #[test]
    fn repeated_single_character() {
        let a = eval("aaaa");
        assert_eq!(a.charset_size, 26);
        assert!(a.has_repeated_sequence);
        // Single observed character: zero Shannon information.
        assert_eq!(a.shannon_entropy, 0.0);
        assert_eq!(a.strength, Strength::Weak);
    }

    #[test]
    fn sequential_runs_detected_in_context() {
        let a = eval("abcd1234");
        assert!(a.is_sequential);
        let b = eval("abdc");
        assert!(!b.is_sequential);
    }

    #[test]
    fn entropy_term_is_capped() {
        // 64 chars over all four classes: bruteforce estimate far above the
        // cap, so the score lands exactly at cap + bonuses.
        let pw: String = "aB3!".repeat(16);
        let a = evaluate(&pw, &CommonSet::new());
        assert!(a.has_repeated_sequence); // periodic, by construction
        assert_eq!(a.raw_score, 6.0); // 5.0 + 3.0 bonuses - 2.0 repeated
    }

    #[test]
    fn evaluation_is_idempotent() {
        let set = CommonSet::from_contents("hunter2\n");
        let a = evaluate("Tr0ub4dor&3", &set);
        let b = evaluate("Tr0ub4dor&3", &set);
        assert_eq!(a, b);
    }

    #[test]
    fn adding_a_class_never_hurts_beyond_coefficients() {
        let base = eval("abcdefgh");
        let with_digit = eval("abcdefgh7");
        assert!(with_digit.has_digit);
        // Digit bonus plus a longer, wider brute-force term.
        assert!(with_digit.raw_score >= base.raw_score);
    }

    #[test]
    fn supplemental_set_flips_is_common() {
        let without = eval("hunter2");
        assert!(!without.is_common);
        let set = CommonSet::from_contents("hunter2\n");
        let with = evaluate("hunter2", &set);
        assert!(with.is_common);
        assert!(with.raw_score < without.raw_score);
    }

    #[test]
    fn score_is_rounded_to_two_decimals() {
        let a = eval("abcdefgh7");
        assert_eq!(a.raw_score, (a.raw_score * 100.0).round() / 100.0);
    }
}
