// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateFeatures, FeatureBundle, ModelStatus, RankedCandidate};
pub use requests::{GenerateRequest, InitializeRequest, PredictRequest, RankRequest};
pub use responses::{
    CompatibilityResponse, ErrorResponse, GenerateResponse, HealthResponse, InitializeResponse,
    RankResponse,
};
