use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;

use super::RecommendationHandlerState;
use crate::models::UserProfile;

const CANNED_TOP_N: usize = 5;
const CANNED_SHOWN: usize = 3;
const NO_REASONING: &str = "Good match";

#[derive(Debug, Serialize)]
struct CannedRecommendation {
    title: String,
    #[serde(rename = "match")]
    match_percent: f64,
    category: String,
    reasoning: String,
}

#[derive(Debug, Serialize)]
struct CannedResult {
    test_case: &'static str,
    profile_hash: String,
    archetype: String,
    top_recommendations: Vec<CannedRecommendation>,
}

/// Six contrasting profiles used to eyeball that scoring differentiates
pub fn canned_profiles() -> Vec<(&'static str, UserProfile)> {
    vec![
        (
            "Analytical Researcher (INTJ)",
            UserProfile::default()
                .with_type("INTJ")
                .with_interests(["I", "R"])
                .with_purpose(["profession", "mission"])
                .with_skills(["research", "analysis", "programming"])
                .with_trait("analytical", 0.9)
                .with_trait("technical", 0.8),
        ),
        (
            "Creative Helper (ENFP)",
            UserProfile::default()
                .with_type("ENFP")
                .with_interests(["A", "S"])
                .with_purpose(["passion", "mission"])
                .with_skills(["creative", "communication", "empathy"])
                .with_trait("creativity", 0.9)
                .with_trait("social", 0.8),
        ),
        (
            "Practical Leader (ESTJ)",
            UserProfile::default()
                .with_type("ESTJ")
                .with_interests(["E", "C"])
                .with_purpose(["profession", "vocation"])
                .with_skills(["leadership", "organization", "planning"])
                .with_trait("leadership", 0.9)
                .with_trait("structured", 0.8),
        ),
        (
            "Technical Problem-Solver (ISTP)",
            UserProfile::default()
                .with_type("ISTP")
                .with_interests(["R", "I"])
                .with_purpose(["vocation", "profession"])
                .with_skills(["technical", "hands-on", "troubleshooting"])
                .with_trait("practical", 0.9)
                .with_trait("technical", 0.8),
        ),
        (
            "ENTJ Business Leader",
            UserProfile::default()
                .with_type("ENTJ")
                .with_interests(["E", "C"])
                .with_purpose(["profession", "mission"])
                .with_skills(["leadership", "strategy", "analysis"])
                .with_trait("leadership", 0.9)
                .with_trait("analytical", 0.8),
        ),
        (
            "INFP Creative Writer",
            UserProfile::default()
                .with_type("INFP")
                .with_interests(["A", "I"])
                .with_purpose(["passion", "vocation"])
                .with_skills(["writing", "creative", "empathy"])
                .with_trait("creativity", 0.9)
                .with_trait("social", 0.7),
        ),
    ]
}

pub async fn test_recommendation(state: web::Data<RecommendationHandlerState>) -> HttpResponse {
    let engine = &state.engine;

    let results: Vec<CannedResult> = canned_profiles()
        .into_iter()
        .map(|(name, profile)| {
            let set = engine.recommend(&profile, CANNED_TOP_N);
            CannedResult {
                test_case: name,
                profile_hash: set.fingerprint,
                archetype: set.analysis.archetype,
                top_recommendations: set
                    .recommendations
                    .into_iter()
                    .take(CANNED_SHOWN)
                    .map(|rec| CannedRecommendation {
                        reasoning: rec
                            .reasoning
                            .into_iter()
                            .next()
                            .unwrap_or_else(|| NO_REASONING.to_string()),
                        title: rec.career.title,
                        match_percent: rec.match_percent,
                        category: rec.career.category.to_string(),
                    })
                    .collect(),
            }
        })
        .collect();

    info!(cases = results.len(), "Completed canned-profile differentiation run");

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "test_results": results,
        "message": "Recommendation differentiation test completed successfully",
    }))
}
