use actix_web::{web, HttpResponse, Responder};
use crate::config::{MatchingSettings, ModelSettings};
use crate::core::{rank_candidates, score_features, ScoreError};
use crate::models::{CompatibilityResponse, ErrorResponse, HealthResponse, PredictRequest, RankRequest, RankResponse};
use crate::services::ChatbotService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub chatbot: Arc<ChatbotService>,
    pub matching: MatchingSettings,
    pub model: ModelSettings,
}

/// Configure compatibility and service-level routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/predict", web::post().to(predict))
        .route("/compatibility/rank", web::post().to(rank))
        .route("/debug/echo", web::post().to(debug_echo));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let model_status = state.chatbot.status().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_loaded: model_status.loaded,
        timestamp: chrono::Utc::now(),
    })
}

/// Debug endpoint to echo raw JSON for debugging
async fn debug_echo(
    body: web::Bytes,
    req: actix_web::HttpRequest,
) -> impl Responder {
    let body_str = String::from_utf8_lossy(&body);
    tracing::info!("DEBUG echo - path: {}, method: {}, body: {}", req.path(), req.method(), body_str);
    HttpResponse::Ok().json(serde_json::json!({
        "path": req.path(),
        "method": req.method().to_string(),
        "body": body_str,
    }))
}

/// Single-bundle prediction endpoint
///
/// POST /api/v1/compatibility/predict
///
/// Request body:
/// ```json
/// {
///   "features": {
///     "adventure": 0.8, "anime": 0.2, "creative": 0.5,
///     "fantasy": 0.1, "tech": 0.9,
///     "agreeableness": 3.5, "conscientiousness": 4.0,
///     "extraversion": 2.0, "neuroticism": 1.5, "openness": 4.5,
///     "same_location": 1.0
///   }
/// }
/// ```
///
/// Unspecified fields default to 0.0. The capitalized interest keys the
/// mobile client sends ("Adventure", "Tech", ...) are accepted as aliases.
async fn predict(req: web::Json<PredictRequest>) -> impl Responder {
    match score_features(&req.features) {
        Ok(probability) => {
            tracing::debug!("Predicted compatibility: {:.4}", probability);
            HttpResponse::Ok().json(CompatibilityResponse { probability })
        }
        Err(e) => score_error_response(e),
    }
}

/// Candidate ranking endpoint
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "candidates": [
///     { "userId": "string", "features": { ... } }
///   ],
///   "limit": 10
/// }
/// ```
async fn rank(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    let req = req.into_inner();

    // Cap limit to prevent oversized responses
    let max_limit = state.matching.max_limit.unwrap_or(100);
    let limit = req.limit.min(max_limit) as usize;

    tracing::info!(
        "Ranking {} candidates, limit: {}",
        req.candidates.len(),
        limit
    );

    match rank_candidates(req.candidates, limit) {
        Ok(result) => {
            tracing::info!(
                "Returning {} matches (from {} candidates)",
                result.matches.len(),
                result.total_candidates
            );

            HttpResponse::Ok().json(RankResponse {
                matches: result.matches,
                total_candidates: result.total_candidates,
            })
        }
        Err(e) => score_error_response(e),
    }
}

/// Map a scoring error onto the boundary's error contract
fn score_error_response(e: ScoreError) -> HttpResponse {
    match e {
        ScoreError::InvalidInput(_) => {
            tracing::info!("Rejected scoring request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_input".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
        ScoreError::ComputationError(_) => {
            tracing::error!("Compatibility computation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "computation_error".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
