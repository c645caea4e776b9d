pub mod career;
pub mod profile;
pub mod recommendation;

pub use career::{CareerCategory, CareerRecord, PersonalityProfile, Requirements};
pub use profile::{UserProfile, BASELINE_TRAITS, NEUTRAL_TRAIT_VALUE};
pub use recommendation::{
    CareerRecommendation, CareerResources, Course, DimensionScores, FitBreakdown, LearningPath,
    LearningStage, ProfileAnalysis, RecommendationSet,
};
