use std::collections::BTreeMap;

use super::NEUTRAL_SCORE;

const MULTI_MATCH_BONUS: f64 = 0.1;

/// Purpose-element ("ikigai") similarity.
///
/// Each matched element adds its weight; every match beyond the first adds a
/// 10% bonus to the sum. The result is divided by the number of requested
/// elements, so unmatched elements dilute it, and capped at 1.0.
pub fn purpose_similarity(user_elements: &[String], purpose_weights: &BTreeMap<String, f64>) -> f64 {
    if user_elements.is_empty() {
        return NEUTRAL_SCORE;
    }

    let mut total = 0.0;
    let mut matched = 0usize;
    for element in user_elements {
        if let Some(weight) = purpose_weights.get(element) {
            total += weight;
            matched += 1;
        }
    }

    if matched > 1 {
        total *= 1.0 + MULTI_MATCH_BONUS * (matched - 1) as f64;
    }

    (total / user_elements.len() as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    fn weights(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_elements_are_neutral() {
        assert_eq!(purpose_similarity(&[], &weights(&[("mission", 0.9)])), 0.5);
    }

    #[test]
    fn test_multi_match_bonus() {
        let w = weights(&[("mission", 0.9), ("passion", 0.8)]);
        let score = purpose_similarity(&elements(&["mission", "passion"]), &w);
        // 1.7 * 1.1 / 2
        assert!((score - 0.935).abs() < 1e-9);
    }

    #[test]
    fn test_single_match_has_no_bonus() {
        let w = weights(&[("mission", 0.9)]);
        let score = purpose_similarity(&elements(&["mission"]), &w);
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_unmatched_elements_dilute() {
        let w = weights(&[("mission", 0.9)]);
        let score = purpose_similarity(&elements(&["mission", "passion"]), &w);
        assert!((score - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_capped_at_one() {
        let w = weights(&[("mission", 1.0), ("passion", 1.0)]);
        let score = purpose_similarity(&elements(&["mission", "passion"]), &w);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_no_matches_score_zero() {
        let w = weights(&[("vocation", 0.9)]);
        assert_eq!(purpose_similarity(&elements(&["passion"]), &w), 0.0);
    }
}
