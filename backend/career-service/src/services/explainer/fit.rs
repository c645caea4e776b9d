use crate::models::{CareerRecord, FitBreakdown, UserProfile, NEUTRAL_TRAIT_VALUE};

/// Traits compared in the fit breakdown, in reporting order
pub const FIT_TRAITS: [&str; 7] = [
    "creativity",
    "analytical",
    "social",
    "technical",
    "leadership",
    "structured",
    "practical",
];

const STRONG_MATCH_MAX_DIFF: f64 = 0.2;
const GROWTH_AREA_MIN_DIFF: f64 = 0.4;

/// Per-trait comparison of the user with a career.
///
/// User values are the top-level ratings of the profile, not the nested
/// `traits` map the trait scorer reads.
pub fn personality_fit(profile: &UserProfile, career: &CareerRecord) -> FitBreakdown {
    let career_traits = &career.personality_profile.trait_profile;
    let mut fit = FitBreakdown::default();

    for name in FIT_TRAITS {
        let user_value = profile.rating(name);
        let career_value = career_traits
            .get(name)
            .copied()
            .unwrap_or(NEUTRAL_TRAIT_VALUE);
        let difference = (user_value - career_value).abs();

        if difference < STRONG_MATCH_MAX_DIFF {
            fit.strong_matches.push(format!("Strong {} alignment", name));
        } else if difference > GROWTH_AREA_MIN_DIFF {
            fit.growth_areas.push(format!("Develop {} skills", name));
        }
    }

    fit.compatibility_score = (100 * fit.strong_matches.len() / FIT_TRAITS.len()) as u32;
    fit
}
