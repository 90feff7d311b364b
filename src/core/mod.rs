// Core algorithm exports
pub mod ranker;
pub mod scoring;

pub use ranker::{rank_candidates, RankResult};
pub use scoring::{compatibility_probability, score_features, ScoreError};
