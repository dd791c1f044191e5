//! Human-readable report rendering for terminal output.
//!
//! Produces a colored per-password audit report (entropy estimates, charset
//! estimate, strength verdict, and in verbose mode the individual heuristic
//! flags) plus the batch summary section.
use colored::*;

use crate::assessment::{Assessment, Strength};
use crate::stats::BatchStats;

fn visible_len(s: &str) -> usize {
    // Strip ANSI escape sequences (\x1b[ ... m) to compute printable width
    let mut len = 0;
    let mut iter = s.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == '\u{1b}' {
            if let Some('[') = iter.peek().cloned() {
                let _ = iter.next();
            }
            for c in iter.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

fn section_header(title: &str) -> String {
    let len = visible_len(title);
    let mut s = String::new();
    s.push_str(title);
    s.push('\n');
    s.push_str(&"─".repeat(len));
    s.push('\n');
    s
}

fn strength_label(strength: Strength) -> ColoredString {
    match strength {
        Strength::Weak => strength.to_string().bold().red(),
        Strength::Moderate => strength.to_string().bold().yellow(),
        Strength::Strong => strength.to_string().bold().green(),
    }
}

/// Render the audit report for one password. The verbose form adds the
/// class-presence and pattern flags behind the headline numbers.
pub fn render_assessment(a: &Assessment, verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(&section_header(
        &"Password audit result".bold().cyan().to_string(),
    ));
    out.push_str(&format!("Length: {}\n", a.length));
    out.push_str(&format!(
        "Strength: {} (score: {:.2})\n",
        strength_label(a.strength),
        a.raw_score
    ));
    out.push_str(&format!(
        "Shannon entropy (est): {:.2} bits\n",
        a.shannon_entropy
    ));
    out.push_str(&format!(
        "Bruteforce entropy (est): {:.2} bits\n",
        a.bruteforce_entropy
    ));
    out.push_str(&format!("Charset size estimate: {}\n", a.charset_size));
    if verbose {
        out.push_str(&format!(
            "Has upper: {}, Has lower: {}, Has digit: {}, Has symbol: {}\n",
            a.has_upper, a.has_lower, a.has_digit, a.has_symbol
        ));
        out.push_str(&format!("Is common password: {}\n", a.is_common));
        out.push_str(&format!(
            "Repeated sequence: {}, Sequential: {}, Only digits/letters: {}\n",
            a.has_repeated_sequence, a.is_sequential, a.only_digits_or_letters
        ));
    }
    out
}

/// Render the batch summary section for `--summary`.
pub fn render_batch_summary(stats: &BatchStats) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&section_header(&"Batch Summary".bold().cyan().to_string()));
    out.push_str(&format!("Passwords evaluated: {}\n", stats.total));
    for (label, count, p) in [
        ("WEAK", stats.weak_count, &stats.weak_percentage),
        ("MODERATE", stats.moderate_count, &stats.moderate_percentage),
        ("STRONG", stats.strong_count, &stats.strong_percentage),
    ] {
        out.push_str(&format!("  {}: {} ({})\n", label, count, p));
    }
    out.push_str(&format!("Common passwords: {}\n", stats.common_count));
    out.push_str(&format!(
        "Pattern hits: repeated {}, sequential {}, single-class {}\n",
        stats.repeated_count, stats.sequential_count, stats.single_class_count
    ));
    out.push_str(&format!("Mean score: {:.2}\n", stats.mean_score));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::stats::summarize;
    use crate::wordlist::CommonSet;

    #[test]
    fn terse_report_surfaces_headline_fields() {
        colored::control::set_override(false);
        let a = evaluate("123456", &CommonSet::new());
        let r = render_assessment(&a, false);
        assert!(r.contains("Length: 6"));
        assert!(r.contains("Strength: WEAK"));
        assert!(r.contains("Shannon entropy (est):"));
        assert!(r.contains("Bruteforce entropy (est):"));
        assert!(r.contains("Charset size estimate: 10"));
        assert!(!r.contains("Is common password:"));
    }

    #[test]
    fn verbose_report_adds_flags() {
        colored::control::set_override(false);
        let a = evaluate("123456", &CommonSet::new());
        let r = render_assessment(&a, true);
        assert!(r.contains("Is common password: true"));
        assert!(r.contains("Sequential: true"));
        assert!(r.contains("Only digits/letters: true"));
        assert!(r.contains("Has digit: true"));
    }

    #[test]
    fn batch_summary_lists_label_counts() {
        colored::control::set_override(false);
        let set = CommonSet::new();
        let batch = vec![evaluate("123456", &set), evaluate("Tr0ub4dor&3XyZ!", &set)];
        let s = render_batch_summary(&summarize(&batch));
        assert!(s.contains("Passwords evaluated: 2"));
        assert!(s.contains("WEAK: 1 (50.00%)"));
        assert!(s.contains("STRONG: 1 (50.00%)"));
        assert!(s.contains("Mean score:"));
    }

    #[test]
    fn header_underline_ignores_ansi_codes() {
        let h = section_header("\u{1b}[1mabc\u{1b}[0m");
        assert!(h.contains(&"─".repeat(3)));
        assert!(!h.contains(&"─".repeat(4)));
    }
}
