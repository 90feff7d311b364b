use thiserror::Error;

use crate::models::FeatureBundle;

/// Errors surfaced by the scoring boundary
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation error: {0}")]
    ComputationError(String),
}

/// Weight of shared-interest affinity in the combined score
pub const INTEREST_WEIGHT: f64 = 0.3;
/// Weight of personality alignment in the combined score
pub const PERSONALITY_WEIGHT: f64 = 0.6;
/// Weight of the location signal in the combined score
pub const LOCATION_WEIGHT: f64 = 0.1;

/// Top of the nominal 0-5 personality trait scale
const TRAIT_SCALE_MAX: f64 = 5.0;

/// Logistic transform midpoint and steepness
const SIGMOID_MIDPOINT: f64 = 0.5;
const SIGMOID_STEEPNESS: f64 = 6.0;

/// Calculate a compatibility probability (0-1) for a feature bundle
///
/// Scoring formula (kept numerically identical to the mobile client's
/// native plugin so both produce the same predictions):
/// ```text
/// interest    = mean of the five interest affinities
/// personality = (agreeableness*0.25 + conscientiousness*0.2
///                + extraversion*0.2 + openness*0.2
///                + (5 - neuroticism)*0.15) / 5
/// final       = interest*0.3 + personality*0.6 + same_location*0.1
/// probability = sigmoid centered at 0.5 with steepness 6, after clamping
///               final into [0, 1]
/// ```
///
/// Neuroticism is inverted before weighting; a calmer profile scores higher.
/// Inputs are not range-checked, so out-of-range values shift the combined
/// score until the clamp absorbs them.
pub fn compatibility_probability(features: &FeatureBundle) -> f64 {
    let interest = interest_score(features);
    let personality = personality_score(features);
    let location = features.same_location;

    // Weighted combination, clamped before the logistic transform
    let final_score = (interest * INTEREST_WEIGHT
        + personality * PERSONALITY_WEIGHT
        + location * LOCATION_WEIGHT)
        .min(1.0)
        .max(0.0);

    sigmoid(final_score)
}

/// Scoring entry point for the request boundary
///
/// Rejects non-finite inputs (JSON cannot encode them, but programmatic
/// callers can) and verifies the result is a real number in [0, 1].
pub fn score_features(features: &FeatureBundle) -> Result<f64, ScoreError> {
    if !features.is_finite() {
        return Err(ScoreError::InvalidInput(
            "feature bundle contains a non-finite value".to_string(),
        ));
    }

    let probability = compatibility_probability(features);

    if !probability.is_finite() {
        return Err(ScoreError::ComputationError(format!(
            "probability is not a finite number: {}",
            probability
        )));
    }

    Ok(probability)
}

/// Mean affinity across the five interest categories (0-1 for nominal input)
#[inline]
fn interest_score(features: &FeatureBundle) -> f64 {
    (features.adventure + features.anime + features.creative + features.fantasy + features.tech)
        / 5.0
}

/// Weighted personality alignment (0-1 for nominal input)
///
/// Agreeableness carries the largest weight; neuroticism is subtracted from
/// the top of the trait scale so that lower values contribute positively.
#[inline]
fn personality_score(features: &FeatureBundle) -> f64 {
    (features.agreeableness * 0.25
        + features.conscientiousness * 0.2
        + features.extraversion * 0.2
        + features.openness * 0.2
        + (TRAIT_SCALE_MAX - features.neuroticism) * 0.15)
        / 5.0
}

/// Logistic transform spreading mid-range scores away from 0.5
#[inline]
fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-((score - SIGMOID_MIDPOINT) * SIGMOID_STEEPNESS)).exp())
}
