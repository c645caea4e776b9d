use std::collections::{BTreeMap, HashSet};

use super::NEUTRAL_SCORE;
use crate::catalog::{CognitiveFunction, Lexicon};

const FUNCTIONS_PER_TYPE: f64 = 4.0;
const EXACT_MATCH_WEIGHT: f64 = 0.7;
const COGNITIVE_WEIGHT: f64 = 0.3;

/// Personality-type similarity.
///
/// Blends the career's weight for the user's exact type with the best
/// cognitive-function overlap against any type the career lists, scaled by
/// that type's weight.
pub fn type_similarity(
    user_type: Option<&str>,
    type_weights: &BTreeMap<String, f64>,
    lexicon: &Lexicon,
) -> f64 {
    let Some(user_type) = user_type else {
        return NEUTRAL_SCORE;
    };

    let base = type_weights.get(user_type).copied().unwrap_or(0.0);

    let user_functions = lexicon.cognitive_functions(user_type);
    let cognitive = type_weights
        .iter()
        .map(|(career_type, weight)| {
            let shared = shared_functions(user_functions, lexicon.cognitive_functions(career_type));
            shared as f64 / FUNCTIONS_PER_TYPE * weight
        })
        .fold(0.0, f64::max);

    EXACT_MATCH_WEIGHT * base + COGNITIVE_WEIGHT * cognitive
}

fn shared_functions(a: &[CognitiveFunction], b: &[CognitiveFunction]) -> usize {
    let a: HashSet<_> = a.iter().collect();
    let b: HashSet<_> = b.iter().collect();
    a.intersection(&b).count()
}
