use std::collections::BTreeMap;

use super::NEUTRAL_SCORE;
use crate::models::NEUTRAL_TRAIT_VALUE;

/// Trait-vector similarity: mean of `1 - |user - career|` over the career's
/// trait keys. `user_traits` is expected to be baseline-merged; keys it lacks
/// count as neutral.
pub fn trait_similarity(
    user_traits: &BTreeMap<String, f64>,
    career_traits: &BTreeMap<String, f64>,
) -> f64 {
    if career_traits.is_empty() {
        return NEUTRAL_SCORE;
    }

    let total: f64 = career_traits
        .iter()
        .map(|(name, career_value)| {
            let user_value = user_traits.get(name).copied().unwrap_or(NEUTRAL_TRAIT_VALUE);
            1.0 - (user_value - career_value).abs()
        })
        .sum();

    total / career_traits.len() as f64
}
