use serde::{Deserialize, Serialize};

use super::CareerRecord;

/// Per-dimension similarity scores for one career
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "mbti")]
    pub personality_type: f64,
    #[serde(rename = "riasec")]
    pub interest: f64,
    #[serde(rename = "ikigai")]
    pub purpose: f64,
    pub skills: f64,
    pub traits: f64,
}

impl DimensionScores {
    /// Scores rounded to 3 decimals, the precision reported to clients
    pub fn rounded(&self) -> Self {
        Self {
            personality_type: round_to(self.personality_type, 3),
            interest: round_to(self.interest, 3),
            purpose: round_to(self.purpose, 3),
            skills: round_to(self.skills, 3),
            traits: round_to(self.traits, 3),
        }
    }
}

/// Rounds to `decimals` places on the exact decimal value of `value`,
/// ties to even.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Trait-level comparison between the user and a career
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitBreakdown {
    #[serde(rename = "traits_match")]
    pub strong_matches: Vec<String>,
    #[serde(rename = "areas_growth")]
    pub growth_areas: Vec<String>,
    /// Percentage of canonical traits in strong alignment
    pub compatibility_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStage {
    pub duration: String,
    pub focus: String,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub foundation: LearningStage,
    pub specialization: LearningStage,
    pub professional: LearningStage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerResources {
    pub courses: Vec<Course>,
    pub books: Vec<String>,
    pub tools: Vec<String>,
    pub communities: Vec<String>,
    pub certifications: Vec<String>,
}

/// One ranked career with its explanation
#[derive(Debug, Clone, Serialize)]
pub struct CareerRecommendation {
    #[serde(flatten)]
    pub career: CareerRecord,
    /// 1-based position in the ranking
    pub rank: usize,
    /// Total score as a percentage, 1 decimal
    #[serde(rename = "match")]
    pub match_percent: f64,
    pub score_breakdown: DimensionScores,
    #[serde(rename = "ai_reasoning")]
    pub reasoning: Vec<String>,
    #[serde(rename = "personality_fit")]
    pub fit: FitBreakdown,
    pub learning_path: LearningPath,
    pub resources: CareerResources,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileAnalysis {
    #[serde(rename = "personality_archetype")]
    pub archetype: String,
    pub strengths: Vec<String>,
    pub career_clusters: Vec<String>,
}

/// Result of a single recommendation request
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSet {
    pub fingerprint: String,
    pub recommendations: Vec<CareerRecommendation>,
    pub analysis: ProfileAnalysis,
    pub total_considered: usize,
}
