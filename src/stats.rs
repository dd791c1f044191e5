//! Statistical summaries over a batch of assessments.
//!
//! Defines `BatchStats` (per-label counts with percentages, flagged-pattern
//! counts, and the mean raw score) for the `--summary` section of a batch
//! run.
use crate::assessment::{Assessment, Strength};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub weak_count: usize,
    pub moderate_count: usize,
    pub strong_count: usize,
    pub weak_percentage: String,
    pub moderate_percentage: String,
    pub strong_percentage: String,
    pub common_count: usize,
    pub repeated_count: usize,
    pub sequential_count: usize,
    pub single_class_count: usize,
    pub mean_score: f64,
}

fn pct(n: usize, d: usize) -> String {
    if d == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", (n as f64) / (d as f64) * 100.0)
}

pub fn summarize(assessments: &[Assessment]) -> BatchStats {
    let total = assessments.len();
    let mut stats = BatchStats {
        total,
        ..BatchStats::default()
    };
    let mut score_sum = 0.0;
    for a in assessments {
        match a.strength {
            Strength::Weak => stats.weak_count += 1,
            Strength::Moderate => stats.moderate_count += 1,
            Strength::Strong => stats.strong_count += 1,
        }
        if a.is_common {
            stats.common_count += 1;
        }
        if a.has_repeated_sequence {
            stats.repeated_count += 1;
        }
        if a.is_sequential {
            stats.sequential_count += 1;
        }
        if a.only_digits_or_letters {
            stats.single_class_count += 1;
        }
        score_sum += a.raw_score;
    }
    stats.weak_percentage = pct(stats.weak_count, total);
    stats.moderate_percentage = pct(stats.moderate_count, total);
    stats.strong_percentage = pct(stats.strong_count, total);
    stats.mean_score = if total == 0 { 0.0 } else { score_sum / total as f64 };
    stats
}
