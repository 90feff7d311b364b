use serde::{Deserialize, Serialize};

/// Feature bundle for a single compatibility prediction
///
/// All eleven fields are optional on the wire and default to 0.0. Interest
/// affinities keep their capitalized aliases because the mobile client sends
/// them that way; personality traits are nominally on a 0-5 scale but the
/// range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeatureBundle {
    #[serde(alias = "Adventure")]
    pub adventure: f64,
    #[serde(alias = "Anime")]
    pub anime: f64,
    #[serde(alias = "Creative")]
    pub creative: f64,
    #[serde(alias = "Fantasy")]
    pub fantasy: f64,
    #[serde(alias = "Tech")]
    pub tech: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub neuroticism: f64,
    pub openness: f64,
    pub same_location: f64,
}

impl FeatureBundle {
    /// Helper to check that every field is a finite number
    pub fn is_finite(&self) -> bool {
        self.adventure.is_finite()
            && self.anime.is_finite()
            && self.creative.is_finite()
            && self.fantasy.is_finite()
            && self.tech.is_finite()
            && self.agreeableness.is_finite()
            && self.conscientiousness.is_finite()
            && self.extraversion.is_finite()
            && self.neuroticism.is_finite()
            && self.openness.is_finite()
            && self.same_location.is_finite()
    }
}

/// A candidate profile paired with its feature bundle, as submitted to the
/// ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFeatures {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub features: FeatureBundle,
}

/// Scored ranking result for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub probability: f64,
}

/// Snapshot of the chatbot model state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub loaded: bool,
    #[serde(rename = "modelSize")]
    pub model_size: u64,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<uuid::Uuid>,
}
