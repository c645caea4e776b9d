use actix_web::{web, HttpResponse};
use tracing::debug;

use super::RecommendationHandlerState;
use crate::error::{AppError, Result};

pub async fn list_careers(state: web::Data<RecommendationHandlerState>) -> Result<HttpResponse> {
    let catalog = state.engine.catalog();
    debug!(careers = catalog.len(), "Listing career catalog");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "careers": catalog.careers(),
        "total": catalog.len(),
        "categories": catalog.categories(),
    })))
}

pub async fn get_career(
    state: web::Data<RecommendationHandlerState>,
    path: web::Path<u32>,
) -> Result<HttpResponse> {
    let career_id = path.into_inner();
    let career = state
        .engine
        .catalog()
        .get(career_id)
        .ok_or_else(|| AppError::NotFound(format!("Career {} does not exist", career_id)))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "career": career,
    })))
}
