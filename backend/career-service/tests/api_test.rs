use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use career_service::handlers::{configure_routes, RecommendationHandlerState};
use career_service::{Catalog, Lexicon, RecommendationEngine};

fn state() -> web::Data<RecommendationHandlerState> {
    let engine = RecommendationEngine::new(
        Arc::new(Catalog::reference().unwrap()),
        Arc::new(Lexicon::standard().unwrap()),
    );
    web::Data::new(RecommendationHandlerState {
        engine: Arc::new(engine),
        default_top_n: 15,
    })
}

macro_rules! app {
    () => {
        test::init_service(App::new().app_data(state()).configure(configure_routes)).await
    };
}

#[actix_web::test]
async fn test_recommend_careers_full_payload() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/recommend-careers")
        .set_json(json!({
            "user_profile": {
                "mbti": "INTJ",
                "riasec": ["I", "R"],
                "ikigai": ["profession", "mission"],
                "skills": ["programming", "research"],
                "traits": {"analytical": 0.9, "technical": 0.8}
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_recommendations"], 15);
    assert_eq!(body["total_careers_considered"], 15);
    assert_eq!(body["profile_hash"].as_str().unwrap().len(), 8);
    assert_eq!(body["user_profile_analysis"]["personality_archetype"], "analytical_thinker");
    assert_eq!(body["assessment_breakdown"]["mbti_analysis"]["type"], "INTJ");
    assert_eq!(body["assessment_breakdown"]["riasec_analysis"]["primary_type"], "I");

    let top = &body["recommendations"][0];
    assert_eq!(top["rank"], 1);
    assert_eq!(top["title"], "Data Scientist");
    assert!(top["match"].as_f64().unwrap() > 80.0);
    assert!(top["score_breakdown"]["mbti"].is_number());
    assert!(!top["ai_reasoning"].as_array().unwrap().is_empty());
    assert!(top["personality_fit"]["compatibility_score"].is_u64());
    assert_eq!(top["learning_path"]["foundation"]["duration"], "3-6 months");
    assert_eq!(top["resources"]["courses"][0]["platform"], "Coursera");
}

#[actix_web::test]
async fn test_recommend_careers_respects_top_n_and_aliases() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/recommend-careers")
        .set_json(json!({
            "user_profile": {"type": "ENFP", "interests": ["A", "S"], "purposeElements": ["passion"]},
            "top_n": 3
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_recommendations"], 3);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(body["assessment_breakdown"]["mbti_analysis"]["type"], "ENFP");
}

#[actix_web::test]
async fn test_empty_profile_still_recommends() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/recommend-careers")
        .set_json(json!({"user_profile": {}}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["total_recommendations"], 15);
    assert_eq!(body["assessment_breakdown"], json!({}));
}

#[actix_web::test]
async fn test_invalid_requests_are_rejected() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/recommend-careers")
        .set_json(json!({"user_profile": {}, "top_n": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], 400);

    let req = test::TestRequest::post()
        .uri("/api/recommend-careers")
        .set_json(json!({"user_profile": {"traits": {"social": -0.2}}}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/recommend-careers")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_list_and_get_careers() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/careers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 15);
    assert_eq!(body["careers"][0]["title"], "AI/ML Engineer");
    assert_eq!(body["categories"][0], "technology");
    assert_eq!(body["categories"].as_array().unwrap().len(), 10);

    let req = test::TestRequest::get().uri("/api/careers/7").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["career"]["title"], "Social Worker");

    let req = test::TestRequest::get().uri("/api/careers/404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_diagnostic_run() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/test-recommendation").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let results = body["test_results"].as_array().unwrap();
    assert_eq!(results.len(), 6);
    for result in results {
        assert_eq!(result["top_recommendations"].as_array().unwrap().len(), 3);
        assert!(result["top_recommendations"][0]["reasoning"].is_string());
    }
    assert_eq!(results[0]["test_case"], "Analytical Researcher (INTJ)");
}

#[actix_web::test]
async fn test_health() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["total_careers"], 15);
    assert_eq!(body["career_categories"].as_array().unwrap().len(), 10);
}
