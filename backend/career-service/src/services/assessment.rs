use serde::Serialize;

use crate::catalog::Lexicon;
use crate::models::UserProfile;

const FALLBACK_TYPE_DESCRIPTION: &str = "Personality type analysis";
const FALLBACK_CAREER_IMPLICATIONS: &str = "Versatile across many career paths";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAnalysis {
    #[serde(rename = "type")]
    pub type_code: String,
    pub description: String,
    pub career_implications: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestAnalysis {
    pub types: Vec<String>,
    /// One entry per code, empty for unknown codes
    pub descriptions: Vec<String>,
    pub primary_type: Option<String>,
}

/// Descriptive summary of the assessment inputs, echoed back with every
/// recommendation response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentBreakdown {
    #[serde(rename = "mbti_analysis", skip_serializing_if = "Option::is_none")]
    pub type_analysis: Option<TypeAnalysis>,
    #[serde(rename = "riasec_analysis", skip_serializing_if = "Option::is_none")]
    pub interest_analysis: Option<InterestAnalysis>,
}

impl AssessmentBreakdown {
    pub fn describe(profile: &UserProfile, lexicon: &Lexicon) -> Self {
        let type_analysis = profile.personality_type().map(|code| {
            let known = lexicon.type_profile(code);
            TypeAnalysis {
                type_code: code.to_string(),
                description: known
                    .map(|p| p.description.clone())
                    .unwrap_or_else(|| FALLBACK_TYPE_DESCRIPTION.to_string()),
                career_implications: known
                    .map(|p| p.career_implications.clone())
                    .unwrap_or_else(|| FALLBACK_CAREER_IMPLICATIONS.to_string()),
            }
        });

        let interest_analysis = (!profile.interests.is_empty()).then(|| InterestAnalysis {
            types: profile.interests.clone(),
            descriptions: profile
                .interests
                .iter()
                .map(|code| lexicon.interest_description(code).unwrap_or_default().to_string())
                .collect(),
            primary_type: profile.interests.first().cloned(),
        });

        Self {
            type_analysis,
            interest_analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_type_and_interests() {
        let lexicon = Lexicon::standard().unwrap();
        let profile = UserProfile::default().with_type("INTJ").with_interests(["I", "X"]);

        let breakdown = AssessmentBreakdown::describe(&profile, &lexicon);

        let type_analysis = breakdown.type_analysis.unwrap();
        assert_eq!(type_analysis.description, "Strategic, independent, and knowledge-oriented");
        assert_eq!(
            type_analysis.career_implications,
            "Excels in strategic planning, research, and systems design"
        );

        let interests = breakdown.interest_analysis.unwrap();
        assert_eq!(interests.primary_type.as_deref(), Some("I"));
        assert_eq!(interests.descriptions[1], "");
        assert!(interests.descriptions[0].starts_with("Investigative"));
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let lexicon = Lexicon::standard().unwrap();
        let profile = UserProfile::default().with_type("ABCD");

        let type_analysis = AssessmentBreakdown::describe(&profile, &lexicon)
            .type_analysis
            .unwrap();
        assert_eq!(type_analysis.description, "Personality type analysis");
        assert_eq!(type_analysis.career_implications, "Versatile across many career paths");
    }

    #[test]
    fn test_empty_profile_serializes_empty_object() {
        let lexicon = Lexicon::standard().unwrap();
        let breakdown = AssessmentBreakdown::describe(&UserProfile::default(), &lexicon);
        assert_eq!(serde_json::to_value(&breakdown).unwrap(), serde_json::json!({}));
    }
}
