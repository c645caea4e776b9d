use std::collections::BTreeMap;

use super::NEUTRAL_SCORE;

/// Weight of the interest at `index` in the user's priority list
pub fn positional_weight(index: usize) -> f64 {
    1.0 / (index as f64 + 1.0)
}

/// Interest-code similarity, weighting the primary interest highest.
///
/// Normalized by the sum of positional weights so list length does not
/// inflate the score.
pub fn interest_similarity(user_interests: &[String], interest_weights: &BTreeMap<String, f64>) -> f64 {
    if user_interests.is_empty() {
        return NEUTRAL_SCORE;
    }

    let (total, max_possible) = user_interests.iter().enumerate().fold(
        (0.0, 0.0),
        |(total, max_possible), (index, code)| {
            let weight = positional_weight(index);
            let score = interest_weights.get(code).copied().unwrap_or(0.0) * weight;
            (total + score, max_possible + weight)
        },
    );

    total / max_possible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    fn weights(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_interests_are_neutral() {
        assert_eq!(interest_similarity(&[], &weights(&[("I", 0.9)])), 0.5);
    }

    #[test]
    fn test_positional_weights_decrease() {
        assert_eq!(positional_weight(0), 1.0);
        assert_eq!(positional_weight(1), 0.5);
        assert!((positional_weight(2) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_primary_interest_counts_double() {
        let w = weights(&[("I", 1.0)]);
        let primary = interest_similarity(&codes(&["I", "A"]), &w);
        let secondary = interest_similarity(&codes(&["A", "I"]), &w);

        assert!((primary - 1.0 / 1.5).abs() < 1e-9);
        assert!((secondary - 0.5 / 1.5).abs() < 1e-9);
        assert!((primary - 2.0 * secondary).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_average() {
        let w = weights(&[("I", 0.9), ("A", 0.6)]);
        let score = interest_similarity(&codes(&["I", "A"]), &w);
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_codes_score_zero() {
        let w = weights(&[("I", 0.9)]);
        assert_eq!(interest_similarity(&codes(&["X", "Y"]), &w), 0.0);
    }
}
