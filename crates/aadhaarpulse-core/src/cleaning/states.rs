//! State-name normalization.
//!
//! Handles:
//! - Alias resolution (Pondicherry → Puducherry, Jammu & Kashmir → Jammu And Kashmir)
//! - Typo correction via fuzzy match against the canonical state/UT list
//! - Rejection of numeric garbage in the state column

use std::collections::HashMap;

use super::duplicates::name_similarity;
use crate::models::{Correction, CorrectionKind};

/// Minimum similarity for a fuzzy state correction.
const DEFAULT_FUZZY_CUTOFF: f64 = 0.9;

/// Canonical states and union territories (ground truth).
const CANONICAL_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    // UTs
    "Delhi",
    "Jammu And Kashmir",
    "Ladakh",
    "Puducherry",
    "Chandigarh",
    "Dadra And Nagar Haveli And Daman And Diu",
    "Andaman And Nicobar Islands",
    "Lakshadweep",
];

/// Normalizer for raw state labels.
pub struct StateNormalizer {
    /// Alias map: observed spelling → canonical spelling
    aliases: HashMap<String, String>,
    cutoff: f64,
}

impl Default for StateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StateNormalizer {
    /// Normalizer with the default alias table and fuzzy cutoff.
    pub fn new() -> Self {
        Self {
            aliases: Self::default_aliases(),
            cutoff: DEFAULT_FUZZY_CUTOFF,
        }
    }

    /// Normalizer with a custom fuzzy cutoff.
    pub fn with_cutoff(cutoff: f64) -> Self {
        Self {
            aliases: Self::default_aliases(),
            cutoff,
        }
    }

    /// Normalize one raw state label.
    ///
    /// Returns `None` when the value is numeric garbage and must be dropped.
    /// Every rewrite appends a [`Correction`] describing what changed.
    pub fn normalize(&self, raw: &str, corrections: &mut Vec<Correction>) -> Option<String> {
        let original = raw.trim();

        if !original.is_empty() && original.chars().all(|c| c.is_ascii_digit()) {
            corrections.push(Correction {
                kind: CorrectionKind::InvalidState,
                from: original.to_string(),
                to: None,
            });
            return None;
        }

        let mut cleaned = title_case(original);

        // Alias resolution first
        if let Some(target) = self.aliases.get(&cleaned) {
            corrections.push(Correction {
                kind: CorrectionKind::StateAlias,
                from: cleaned.clone(),
                to: Some(target.clone()),
            });
            cleaned = target.clone();
        }

        // Fuzzy match for typos
        if let Some((best, score)) = self.closest_canonical(&cleaned) {
            if score >= self.cutoff && best != cleaned {
                corrections.push(Correction {
                    kind: CorrectionKind::StateFuzzy,
                    from: original.to_string(),
                    to: Some(best.clone()),
                });
                return Some(best);
            }
        }

        Some(cleaned)
    }

    /// Add a custom alias mapping.
    pub fn add_alias(&mut self, from: &str, to: &str) {
        self.aliases
            .insert(title_case(from), title_case(to));
    }

    fn closest_canonical(&self, name: &str) -> Option<(String, f64)> {
        CANONICAL_STATES
            .iter()
            .map(|canonical| ((*canonical).to_string(), name_similarity(name, canonical)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Observed alternate spellings in the source datasets.
    fn default_aliases() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("Pondicherry".into(), "Puducherry".into());
        map.insert("Jammu & Kashmir".into(), "Jammu And Kashmir".into());
        map.insert("Daman & Diu".into(), "Daman And Diu".into());
        map.insert("Dadra & Nagar Haveli".into(), "Dadra And Nagar Haveli".into());
        map.insert(
            "Dadra And Nagar Haveli".into(),
            "Dadra And Nagar Haveli And Daman And Diu".into(),
        );
        map.insert(
            "Daman And Diu".into(),
            "Dadra And Nagar Haveli And Daman And Diu".into(),
        );
        map
    }
}

/// District label cleanup: trim and title-case.
pub fn normalize_district(raw: &str) -> String {
    title_case(raw.trim())
}

/// Capitalize each whitespace-separated word, lowercasing the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_passes_through() {
        let normalizer = StateNormalizer::new();
        let mut corrections = Vec::new();
        assert_eq!(
            normalizer.normalize("Kerala", &mut corrections),
            Some("Kerala".into())
        );
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_case_fix_without_correction_entry() {
        let normalizer = StateNormalizer::new();
        let mut corrections = Vec::new();
        assert_eq!(
            normalizer.normalize("tamil nadu", &mut corrections),
            Some("Tamil Nadu".into())
        );
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_numeric_garbage_dropped() {
        let normalizer = StateNormalizer::new();
        let mut corrections = Vec::new();
        assert_eq!(normalizer.normalize("12345", &mut corrections), None);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].kind, CorrectionKind::InvalidState);
        assert_eq!(corrections[0].to, None);
    }

    #[test]
    fn test_alias_resolution() {
        let normalizer = StateNormalizer::new();
        let mut corrections = Vec::new();
        assert_eq!(
            normalizer.normalize("Pondicherry", &mut corrections),
            Some("Puducherry".into())
        );
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].kind, CorrectionKind::StateAlias);
        assert_eq!(corrections[0].to.as_deref(), Some("Puducherry"));
    }

    #[test]
    fn test_ampersand_alias() {
        let normalizer = StateNormalizer::new();
        let mut corrections = Vec::new();
        assert_eq!(
            normalizer.normalize("Jammu & Kashmir", &mut corrections),
            Some("Jammu And Kashmir".into())
        );
        assert_eq!(corrections[0].kind, CorrectionKind::StateAlias);
    }

    #[test]
    fn test_fuzzy_typo_correction() {
        let normalizer = StateNormalizer::new();
        let mut corrections = Vec::new();
        assert_eq!(
            normalizer.normalize("Keralaa", &mut corrections),
            Some("Kerala".into())
        );
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].kind, CorrectionKind::StateFuzzy);
        assert_eq!(corrections[0].from, "Keralaa");
    }

    #[test]
    fn test_unknown_name_passes_through_titled() {
        // Far from every canonical name, below any sane cutoff
        let normalizer = StateNormalizer::new();
        let mut corrections = Vec::new();
        assert_eq!(
            normalizer.normalize("ruritania", &mut corrections),
            Some("Ruritania".into())
        );
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_custom_alias() {
        let mut normalizer = StateNormalizer::new();
        normalizer.add_alias("Orissa", "Odisha");
        let mut corrections = Vec::new();
        assert_eq!(
            normalizer.normalize("orissa", &mut corrections),
            Some("Odisha".into())
        );
    }

    #[test]
    fn test_normalize_district() {
        assert_eq!(normalize_district("  kanpur nagar "), "Kanpur Nagar");
        assert_eq!(normalize_district("ERNAKULAM"), "Ernakulam");
    }
}
