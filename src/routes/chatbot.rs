use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, GenerateRequest, GenerateResponse, InitializeRequest, InitializeResponse};
use crate::routes::compatibility::AppState;
use crate::services::ChatbotError;

/// Configure chatbot model routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/chatbot/initialize", web::post().to(initialize))
        .route("/chatbot/generate", web::post().to(generate))
        .route("/chatbot/status", web::get().to(status))
        .route("/chatbot/cleanup", web::post().to(cleanup));
}

/// Initialize the chatbot model
///
/// POST /api/v1/chatbot/initialize
///
/// Request body:
/// ```json
/// { "modelPath": "string" }
/// ```
async fn initialize(
    state: web::Data<AppState>,
    req: web::Json<InitializeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_input".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.chatbot.initialize(&req.model_path).await {
        Ok(session_id) => {
            tracing::info!("Initialized chatbot session {}", session_id);
            HttpResponse::Ok().json(InitializeResponse { success: true })
        }
        Err(e) => {
            tracing::error!("Failed to initialize model: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "initialization_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Generate a chatbot response
///
/// POST /api/v1/chatbot/generate
///
/// Request body:
/// ```json
/// { "prompt": "string", "maxTokens": 100 }
/// ```
async fn generate(
    state: web::Data<AppState>,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_input".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap token count to prevent runaway generations once a real backend exists
    let max_tokens = req.max_tokens.min(state.model.max_tokens.unwrap_or(512));

    match state.chatbot.generate(&req.prompt, max_tokens).await {
        Ok(response) => HttpResponse::Ok().json(GenerateResponse { response }),
        Err(e @ ChatbotError::NotInitialized) => {
            tracing::info!("Generation rejected: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "model_not_initialized".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}

/// Report the chatbot model status
///
/// GET /api/v1/chatbot/status
async fn status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.chatbot.status().await)
}

/// Release the chatbot model
///
/// POST /api/v1/chatbot/cleanup
async fn cleanup(state: web::Data<AppState>) -> impl Responder {
    state.chatbot.cleanup().await;
    HttpResponse::NoContent().finish()
}
