use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateFeatures, FeatureBundle};

/// Request to predict compatibility for a single feature bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: FeatureBundle,
}

/// Request to rank a batch of candidates by compatibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    pub candidates: Vec<CandidateFeatures>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    10
}

/// Request to initialize the chatbot model
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InitializeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "model_path", rename = "modelPath")]
    pub model_path: String,
}

/// Request to generate a chatbot response
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1))]
    pub prompt: String,
    #[serde(default = "default_max_tokens")]
    #[serde(alias = "max_tokens", rename = "maxTokens")]
    pub max_tokens: u32,
}

fn default_max_tokens() -> u32 {
    100
}
