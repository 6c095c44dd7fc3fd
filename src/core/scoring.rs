use std::collections::HashSet;

use crate::models::ScoringWeights;

/// Proximity score used when a pair is outside the near radius
const FAR_SCORE: f64 = 0.1;

/// Neutral interest score when neither user lists any interests
const NO_INFORMATION_SCORE: f64 = 0.5;

/// Score distance proximity (0-1)
///
/// Deliberately a coarse step function rather than a decay curve: a pair
/// within `near_radius_km` (inclusive) counts as near, everything else
/// scores a flat residual.
#[inline]
pub fn proximity_score(distance_km: f64, near_radius_km: f64) -> f64 {
    if distance_km <= near_radius_km {
        1.0
    } else {
        FAR_SCORE
    }
}

/// Jaccard similarity of two interest tag lists (0-1)
///
/// Tags are compared as case-sensitive sets; order and repetition in the
/// input lists are irrelevant. An empty union means "no information", which
/// scores the neutral 0.5 rather than 0 or 1.
pub fn interest_similarity(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return NO_INFORMATION_SCORE;
    }

    let common = set_a.intersection(&set_b).count();
    common as f64 / union as f64
}

/// Compose the component scores into the total compatibility score (0-1)
///
/// Weighted combination:
/// total = proximity * 0.3 + interests * 0.4 + traits * 0.3
///
/// Components should already be in range, but the composer clamps the
/// result rather than trusting callers.
#[inline]
pub fn compose_score(proximity: f64, interests: f64, traits: f64, weights: &ScoringWeights) -> f64 {
    let total = proximity * weights.proximity
        + interests * weights.interests
        + traits * weights.traits;

    total.clamp(0.0, 1.0)
}
