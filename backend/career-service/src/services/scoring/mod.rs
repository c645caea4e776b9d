// ============================================
// Dimension Scorers
// ============================================
//
// Five independent pure functions, one per assessment framework. Each maps
// (user input, career weights) to a similarity score and defines its own
// fallback for missing input:
//
// - personality type: 0.5 when absent
// - interest codes:   0.5 when empty
// - purpose elements: 0.5 when empty
// - skills:           0.3 when empty (weak negative signal)
// - traits:           0.5 when the career has no trait profile

pub mod interest;
pub mod personality;
pub mod purpose;
pub mod skills;
pub mod traits;

pub use interest::{interest_similarity, positional_weight};
pub use personality::type_similarity;
pub use purpose::purpose_similarity;
pub use skills::skill_similarity;
pub use traits::trait_similarity;

use std::collections::BTreeMap;

use crate::catalog::Lexicon;
use crate::models::{CareerRecord, DimensionScores, UserProfile};

/// Default for a missing dimension
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Default for a user who listed no skills
pub const NO_SKILLS_SCORE: f64 = 0.3;

/// Contribution of each dimension to the total score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionWeights {
    pub personality_type: f64,
    pub interest: f64,
    pub purpose: f64,
    pub skills: f64,
    pub traits: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            personality_type: 0.30,
            interest: 0.25,
            purpose: 0.20,
            skills: 0.15,
            traits: 0.10,
        }
    }
}

impl DimensionWeights {
    pub fn sum(&self) -> f64 {
        self.personality_type + self.interest + self.purpose + self.skills + self.traits
    }

    /// Weighted sum of the five dimension scores
    pub fn combine(&self, scores: &DimensionScores) -> f64 {
        self.personality_type * scores.personality_type
            + self.interest * scores.interest
            + self.purpose * scores.purpose
            + self.skills * scores.skills
            + self.traits * scores.traits
    }
}

/// Score one career on all five dimensions
pub fn score_career(
    profile: &UserProfile,
    user_traits: &BTreeMap<String, f64>,
    career: &CareerRecord,
    lexicon: &Lexicon,
) -> DimensionScores {
    let weights = &career.personality_profile;

    DimensionScores {
        personality_type: type_similarity(
            profile.personality_type(),
            &weights.type_weights,
            lexicon,
        ),
        interest: interest_similarity(&profile.interests, &weights.interest_weights),
        purpose: purpose_similarity(&profile.purpose_elements, &weights.purpose_weights),
        skills: skill_similarity(&profile.skills, &weights.skill_domains),
        traits: trait_similarity(user_traits, &weights.trait_profile),
    }
}
