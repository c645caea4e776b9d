use actix_web::{web, HttpResponse};

use super::RecommendationHandlerState;

pub async fn health_check(state: web::Data<RecommendationHandlerState>) -> HttpResponse {
    let catalog = state.engine.catalog();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "total_careers": catalog.len(),
        "career_categories": catalog.categories(),
        "message": format!(
            "Career recommendation API with {} careers is running",
            catalog.len()
        ),
    }))
}
