use crate::core::scoring::{score_features, ScoreError};
use crate::models::{CandidateFeatures, RankedCandidate};

/// Result of ranking a candidate batch
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Score a batch of candidates and return the top matches
///
/// Every candidate is scored with the same compatibility formula, then the
/// batch is sorted by probability (descending) and truncated to `limit`.
/// A single invalid bundle fails the whole batch; partial rankings would be
/// misleading to the caller.
pub fn rank_candidates(
    candidates: Vec<CandidateFeatures>,
    limit: usize,
) -> Result<RankResult, ScoreError> {
    let total_candidates = candidates.len();

    let mut matches = candidates
        .into_iter()
        .map(|candidate| {
            let probability = score_features(&candidate.features).map_err(|e| match e {
                ScoreError::InvalidInput(msg) => ScoreError::InvalidInput(format!(
                    "candidate {}: {}",
                    candidate.user_id, msg
                )),
                other => other,
            })?;

            Ok(RankedCandidate {
                user_id: candidate.user_id,
                probability,
            })
        })
        .collect::<Result<Vec<_>, ScoreError>>()?;

    // Sort by probability (descending); stable sort keeps submission order
    // for equal scores
    matches.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches.truncate(limit);

    Ok(RankResult {
        matches,
        total_candidates,
    })
}
