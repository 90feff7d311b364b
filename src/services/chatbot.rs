use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::ModelStatus;

/// Errors that can occur when driving the chatbot model
#[derive(Debug, Error)]
pub enum ChatbotError {
    #[error("Model not initialized")]
    NotInitialized,
}

/// Session-scoped context for a loaded model
///
/// Everything the service knows about the current model lives here, so
/// replacing or dropping the model is a single swap of this object.
#[derive(Debug, Clone)]
pub struct ModelSession {
    pub id: Uuid,
    pub model_path: String,
    pub model_size: u64,
    pub loaded_at: DateTime<Utc>,
}

/// Stub interface to the on-device language model
///
/// The native llama.cpp backend is not wired in; initialization and
/// generation are mocked while keeping the contract the mobile client
/// expects. Handlers share one instance behind an `Arc`.
pub struct ChatbotService {
    session: RwLock<Option<ModelSession>>,
}

impl ChatbotService {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }

    /// Load a model session, replacing any existing one
    ///
    /// The real implementation would hand `model_path` to the native
    /// runtime; the stub records the session and reports success.
    pub async fn initialize(&self, model_path: &str) -> Result<Uuid, ChatbotError> {
        let session = ModelSession {
            id: Uuid::new_v4(),
            model_path: model_path.to_string(),
            model_size: 0, // size reporting needs the native backend
            loaded_at: Utc::now(),
        };
        let session_id = session.id;

        let mut guard = self.session.write().await;
        if let Some(previous) = guard.as_ref() {
            tracing::info!(
                "Replacing model session {} ({})",
                previous.id,
                previous.model_path
            );
        }
        *guard = Some(session);

        tracing::info!("Model session {} initialized from {}", session_id, model_path);
        Ok(session_id)
    }

    /// Generate a response for a prompt
    ///
    /// Fails if no model session is loaded. The stub echoes the prompt the
    /// same way the mobile plugin's mock does; `max_tokens` is accepted and
    /// logged but only meaningful once real inference exists.
    pub async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, ChatbotError> {
        let guard = self.session.read().await;
        let session = guard.as_ref().ok_or(ChatbotError::NotInitialized)?;

        tracing::debug!(
            "Generating up to {} tokens with session {}",
            max_tokens,
            session.id
        );

        Ok(format!("Generated response for: {}", prompt))
    }

    /// Snapshot the current model state
    pub async fn status(&self) -> ModelStatus {
        let guard = self.session.read().await;

        match guard.as_ref() {
            Some(session) => ModelStatus {
                loaded: true,
                model_size: session.model_size,
                session_id: Some(session.id),
            },
            None => ModelStatus {
                loaded: false,
                model_size: 0,
                session_id: None,
            },
        }
    }

    /// Drop the current model session, if any
    pub async fn cleanup(&self) {
        let mut guard = self.session.write().await;
        if let Some(session) = guard.take() {
            let uptime = Utc::now() - session.loaded_at;
            tracing::info!(
                "Model session {} cleaned up after {}s",
                session.id,
                uptime.num_seconds()
            );
        }
    }
}

impl Default for ChatbotService {
    fn default() -> Self {
        Self::new()
    }
}
