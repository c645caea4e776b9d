use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{debug, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use super::RecommendationHandlerState;
use crate::config::MAX_TOP_N;
use crate::error::Result;
use crate::models::UserProfile;
use crate::services::AssessmentBreakdown;

#[derive(Debug, Deserialize, Validate)]
pub struct RecommendCareersRequest {
    #[serde(default)]
    pub user_profile: UserProfile,
    #[validate(range(min = 1, max = 100))]
    pub top_n: Option<usize>,
}

impl RecommendCareersRequest {
    pub fn validate_request(&self) -> std::result::Result<(), ValidationErrors> {
        Validate::validate(self)?;

        if let Some((name, value)) = self
            .user_profile
            .traits
            .iter()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            let mut errors = ValidationErrors::new();
            let mut error = ValidationError::new("trait_out_of_range");
            error.message = Some(format!("trait '{}' = {} is outside [0, 1]", name, value).into());
            errors.add("user_profile.traits", error);
            return Err(errors);
        }

        Ok(())
    }
}

pub async fn recommend_careers(
    state: web::Data<RecommendationHandlerState>,
    body: web::Json<RecommendCareersRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    if let Err(errors) = request.validate_request() {
        warn!(error = %errors, "Rejected recommendation request");
        return Err(errors.into());
    }

    let top_n = request.top_n.unwrap_or(state.default_top_n).min(MAX_TOP_N);
    let profile = request.user_profile;
    debug!(
        personality_type = profile.personality_type().unwrap_or("-"),
        interests = profile.interests.len(),
        skills = profile.skills.len(),
        top_n,
        "Received recommendation request"
    );

    let engine = &state.engine;
    let set = engine.recommend(&profile, top_n);
    let assessment = AssessmentBreakdown::describe(&profile, engine.lexicon());

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "total_recommendations": set.recommendations.len(),
        "total_careers_considered": set.total_considered,
        "recommendations": set.recommendations,
        "user_profile_analysis": set.analysis,
        "profile_hash": set.fingerprint,
        "assessment_breakdown": assessment,
    })))
}
