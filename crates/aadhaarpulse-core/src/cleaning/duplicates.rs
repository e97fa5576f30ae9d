//! Near-duplicate district-name detection and triage policy.

use std::cmp::Ordering;

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::{DistrictNamePair, Recommendation};

/// Most similar labels reported per district name.
const MAX_MATCHES_PER_NAME: usize = 5;

/// Severity of a duplicate pair's record-count imbalance.
///
/// The dominant spelling is almost certainly the canonical one; the larger
/// the ratio, the cheaper the merge and the stronger the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioSeverity {
    Low,
    Medium,
    High,
}

impl RatioSeverity {
    /// `ratio > 50` → High, `> 20` → Medium, else Low.
    pub fn from_count_ratio(ratio: f64) -> Self {
        if ratio > 50.0 {
            Self::High
        } else if ratio > 20.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Badge color used by the cleaning dashboard.
    pub fn color(&self) -> &'static str {
        match self {
            Self::High => "#dc2626",
            Self::Medium => "#f59e0b",
            Self::Low => "#059669",
        }
    }
}

/// Bar width percentage for a similarity score, floored at 20% so even
/// weak matches stay visible.
pub fn similarity_bar_width(similarity: f64) -> f64 {
    (similarity * 100.0).max(20.0)
}

/// Blended string similarity over lowercased input.
///
/// Jaro-Winkler is weighted more heavily as it handles prefix typos well;
/// normalized Levenshtein anchors overall edit distance.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    jaro_winkler(&a, &b) * 0.6 + normalized_levenshtein(&a, &b) * 0.4
}

/// Detect near-duplicate district labels within one state's rows.
///
/// `counts` maps district label to its row count. Each label is compared
/// against the labels sorting after it; pairs scoring at or above
/// `similarity_cutoff` are reported (at most [`MAX_MATCHES_PER_NAME`] per
/// label, best first) with their count-dominance ratio. Ratios at or above
/// `min_count_ratio` are recommended for review, the rest for a check.
pub fn detect_duplicates(
    counts: &[(String, u64)],
    similarity_cutoff: f64,
    min_count_ratio: f64,
) -> Vec<DistrictNamePair> {
    let mut names: Vec<&(String, u64)> = counts.iter().collect();
    names.sort_by(|a, b| a.0.cmp(&b.0));
    names.dedup_by(|a, b| a.0 == b.0);

    let mut pairs = Vec::new();

    for (i, (name_a, rows_a)) in names.iter().enumerate() {
        let mut matches: Vec<(&(String, u64), f64)> = names[i + 1..]
            .iter()
            .map(|candidate| (*candidate, name_similarity(name_a, &candidate.0)))
            .filter(|(_, score)| *score >= similarity_cutoff)
            .collect();
        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        for ((name_b, rows_b), score) in matches.into_iter().take(MAX_MATCHES_PER_NAME) {
            let ratio = (*rows_a).max(*rows_b) as f64 / (*rows_a).min(*rows_b).max(1) as f64;
            let count_ratio = round_to(ratio, 2);
            let recommendation = if count_ratio >= min_count_ratio {
                Recommendation::Review
            } else {
                Recommendation::Check
            };

            pairs.push(DistrictNamePair {
                district_a: name_a.clone(),
                district_b: name_b.clone(),
                similarity: round_to(score, 3),
                rows_a: *rows_a,
                rows_b: *rows_b,
                count_ratio,
                recommendation: Some(recommendation),
            });
        }
    }

    pairs
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(digits as i32);
    (value * factor).round() / factor
}
