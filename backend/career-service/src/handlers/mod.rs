/// HTTP handlers for the career service
///
/// - recommend: score a user profile against the catalog
/// - careers: browse the catalog
/// - diagnostics: canned-profile differentiation check
/// - health: liveness and catalog summary
pub mod careers;
pub mod diagnostics;
pub mod health;
pub mod recommend;

pub use careers::{get_career, list_careers};
pub use diagnostics::test_recommendation;
pub use health::health_check;
pub use recommend::recommend_careers;

use actix_web::web;
use std::sync::Arc;

use crate::error::AppError;
use crate::services::RecommendationEngine;

pub struct RecommendationHandlerState {
    pub engine: Arc<RecommendationEngine>,
    pub default_top_n: usize,
}

/// Malformed JSON bodies become 400s with the standard error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/recommend-careers", web::post().to(recommend_careers))
            .route("/careers", web::get().to(list_careers))
            .route("/careers/{career_id}", web::get().to(get_career))
            .route("/test-recommendation", web::get().to(test_recommendation))
            .route("/health", web::get().to(health_check)),
    );
}
