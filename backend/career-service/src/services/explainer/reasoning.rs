use crate::models::{CareerRecord, DimensionScores, UserProfile};

const TYPE_THRESHOLD: f64 = 0.7;
const INTEREST_THRESHOLD: f64 = 0.7;
const PURPOSE_THRESHOLD: f64 = 0.7;
const SKILLS_THRESHOLD: f64 = 0.6;
const TRAITS_THRESHOLD: f64 = 0.7;
const COMBINED_TYPE_INTEREST_THRESHOLD: f64 = 1.2;

/// Human-readable reasons for a recommendation.
///
/// `scores` are the rounded scores shown to the user. Every qualifying
/// dimension contributes one line, in a fixed order; the fallback lines only
/// apply when no dimension qualified.
pub fn generate_reasoning(
    scores: &DimensionScores,
    profile: &UserProfile,
    career: &CareerRecord,
) -> Vec<String> {
    let mut reasoning = Vec::new();
    let weights = &career.personality_profile;

    if let Some(user_type) = profile.personality_type() {
        if scores.personality_type > TYPE_THRESHOLD {
            if weights.type_weights.contains_key(user_type) {
                reasoning.push(format!("Excellent match for your {} personality type", user_type));
            } else {
                reasoning
                    .push("Good cognitive function alignment despite MBTI type difference".to_string());
            }
        }
    }

    if !profile.interests.is_empty() && scores.interest > INTEREST_THRESHOLD {
        let shared: Vec<&str> = profile
            .interests
            .iter()
            .filter(|code| weights.interest_weights.contains_key(code.as_str()))
            .map(String::as_str)
            .collect();
        if !shared.is_empty() {
            reasoning.push(format!("Aligns with your {} interests", shared.join(", ")));
        }
    }

    if !profile.purpose_elements.is_empty() && scores.purpose > PURPOSE_THRESHOLD {
        reasoning.push("Matches your purpose and fulfillment drivers".to_string());
    }

    if !profile.skills.is_empty() && scores.skills > SKILLS_THRESHOLD {
        reasoning.push("Leverages your existing skills and competencies".to_string());
    }

    if reasoning.is_empty() {
        let fallback = if scores.personality_type + scores.interest > COMBINED_TYPE_INTEREST_THRESHOLD {
            "Strong personality and interest alignment"
        } else if scores.traits > TRAITS_THRESHOLD {
            "Excellent fit with your core personality traits"
        } else {
            "Good potential match with development opportunities"
        };
        reasoning.push(fallback.to_string());
    }

    reasoning
}
