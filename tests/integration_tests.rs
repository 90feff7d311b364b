// Integration tests for SpeedHeart Algo
//
// These drive the HTTP boundary through the actix test harness, the same
// surface the mobile client hits.

use actix_web::{test, web, App};
use serde_json::json;
use speedheart_algo::config::{MatchingSettings, ModelSettings};
use speedheart_algo::models::{
    CompatibilityResponse, GenerateResponse, InitializeResponse, ModelStatus, RankResponse,
};
use speedheart_algo::routes;
use speedheart_algo::routes::compatibility::AppState;
use speedheart_algo::services::ChatbotService;
use std::sync::Arc;

fn test_state() -> AppState {
    AppState {
        chatbot: Arc::new(ChatbotService::new()),
        matching: MatchingSettings::default(),
        model: ModelSettings::default(),
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_predict_returns_probability() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/predict")
        .set_json(json!({
            "features": {
                "adventure": 0.8,
                "tech": 0.9,
                "agreeableness": 4.0,
                "openness": 3.5,
                "same_location": 1.0
            }
        }))
        .to_request();

    let body: CompatibilityResponse = test::call_and_read_body_json(&app, req).await;

    assert!(body.probability > 0.0 && body.probability < 1.0);
}

#[actix_web::test]
async fn test_predict_accepts_mobile_client_field_names() {
    // The Capacitor client sends interest keys capitalized
    let app = test_app!(test_state());

    let capitalized = test::TestRequest::post()
        .uri("/api/v1/compatibility/predict")
        .set_json(json!({
            "features": { "Adventure": 1.0, "Anime": 1.0, "Tech": 1.0 }
        }))
        .to_request();
    let lowercase = test::TestRequest::post()
        .uri("/api/v1/compatibility/predict")
        .set_json(json!({
            "features": { "adventure": 1.0, "anime": 1.0, "tech": 1.0 }
        }))
        .to_request();

    let a: CompatibilityResponse = test::call_and_read_body_json(&app, capitalized).await;
    let b: CompatibilityResponse = test::call_and_read_body_json(&app, lowercase).await;

    assert_eq!(a.probability.to_bits(), b.probability.to_bits());
}

#[actix_web::test]
async fn test_predict_defaults_missing_fields_to_zero() {
    let app = test_app!(test_state());

    let empty_features = test::TestRequest::post()
        .uri("/api/v1/compatibility/predict")
        .set_json(json!({ "features": {} }))
        .to_request();

    let body: CompatibilityResponse = test::call_and_read_body_json(&app, empty_features).await;

    // The all-defaults bundle has a known probability well below 0.5
    assert!((body.probability - 0.07871033717053523).abs() < 1e-12);
}

#[actix_web::test]
async fn test_predict_rejects_missing_features() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/predict")
        .set_json(json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_predict_rejects_non_numeric_field() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/predict")
        .set_json(json!({ "features": { "adventure": "high" } }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_rank_orders_and_limits() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/rank")
        .set_json(json!({
            "candidates": [
                { "userId": "low", "features": {} },
                { "userId": "high", "features": { "agreeableness": 5.0, "same_location": 1.0 } },
                { "userId": "mid", "features": { "agreeableness": 2.0 } }
            ],
            "limit": 2
        }))
        .to_request();

    let body: RankResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.total_candidates, 3);
    assert_eq!(body.matches.len(), 2);
    assert_eq!(body.matches[0].user_id, "high");
    assert_eq!(body.matches[1].user_id, "mid");
}

#[actix_web::test]
async fn test_rank_defaults_limit_to_ten() {
    let app = test_app!(test_state());

    let candidates: Vec<_> = (0..15)
        .map(|i| json!({ "userId": format!("user_{}", i), "features": {} }))
        .collect();

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/rank")
        .set_json(json!({ "candidates": candidates }))
        .to_request();

    let body: RankResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.total_candidates, 15);
    assert_eq!(body.matches.len(), 10);
}

#[actix_web::test]
async fn test_chatbot_lifecycle() {
    let app = test_app!(test_state());

    // Generation before initialization is rejected
    let premature = test::TestRequest::post()
        .uri("/api/v1/chatbot/generate")
        .set_json(json!({ "prompt": "hello" }))
        .to_request();
    let resp = test::call_service(&app, premature).await;
    assert_eq!(resp.status(), 400);

    // Initialize
    let init = test::TestRequest::post()
        .uri("/api/v1/chatbot/initialize")
        .set_json(json!({ "modelPath": "/models/tiny.gguf" }))
        .to_request();
    let body: InitializeResponse = test::call_and_read_body_json(&app, init).await;
    assert!(body.success);

    // Status reflects the loaded session
    let status_req = test::TestRequest::get()
        .uri("/api/v1/chatbot/status")
        .to_request();
    let status: ModelStatus = test::call_and_read_body_json(&app, status_req).await;
    assert!(status.loaded);
    assert!(status.session_id.is_some());

    // Generate
    let gen = test::TestRequest::post()
        .uri("/api/v1/chatbot/generate")
        .set_json(json!({ "prompt": "hello", "maxTokens": 50 }))
        .to_request();
    let body: GenerateResponse = test::call_and_read_body_json(&app, gen).await;
    assert_eq!(body.response, "Generated response for: hello");

    // Cleanup drops the session
    let cleanup = test::TestRequest::post()
        .uri("/api/v1/chatbot/cleanup")
        .to_request();
    let resp = test::call_service(&app, cleanup).await;
    assert_eq!(resp.status(), 204);

    let status_req = test::TestRequest::get()
        .uri("/api/v1/chatbot/status")
        .to_request();
    let status: ModelStatus = test::call_and_read_body_json(&app, status_req).await;
    assert!(!status.loaded);
    assert_eq!(status.model_size, 0);
}

#[actix_web::test]
async fn test_chatbot_rejects_empty_prompt() {
    let app = test_app!(test_state());

    let init = test::TestRequest::post()
        .uri("/api/v1/chatbot/initialize")
        .set_json(json!({ "modelPath": "/models/tiny.gguf" }))
        .to_request();
    let _: InitializeResponse = test::call_and_read_body_json(&app, init).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/chatbot/generate")
        .set_json(json!({ "prompt": "" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_reports_model_state() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], false);
}
