use crate::core::{
    distance::haversine_distance,
    scoring::{compose_score, interest_similarity, proximity_score},
};
use crate::models::{CompatibilityResult, MeetingDecision, MeetingId, ScoringWeights, UserRecord};
use crate::services::{
    directory::Directory,
    roster::MeetingRoster,
    traits::{LabelTraitProvider, TraitProvider},
};

/// Minimum compatibility score at which a meeting is scheduled
pub const DEFAULT_SCHEDULE_THRESHOLD: f64 = 0.7;

/// Pairs within this distance count as near
pub const DEFAULT_NEAR_RADIUS_KM: f64 = 10.0;

/// Compatibility engine for a pair of user records
///
/// Composes proximity, interest overlap, and trait similarity into a single
/// score in [0, 1] and gates meeting scheduling on it. Stateless and pure
/// over its inputs; safe to share across threads without coordination.
pub struct CompatibilityEngine {
    weights: ScoringWeights,
    schedule_threshold: f64,
    near_radius_km: f64,
    trait_provider: Box<dyn TraitProvider>,
}

impl CompatibilityEngine {
    pub fn new(
        weights: ScoringWeights,
        schedule_threshold: f64,
        near_radius_km: f64,
        trait_provider: Box<dyn TraitProvider>,
    ) -> Self {
        Self {
            weights,
            schedule_threshold,
            near_radius_km,
            trait_provider,
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            schedule_threshold: DEFAULT_SCHEDULE_THRESHOLD,
            near_radius_km: DEFAULT_NEAR_RADIUS_KM,
            trait_provider: Box::new(LabelTraitProvider),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a pair of resolved records
    ///
    /// Missing sub-data never faults the call: a pair without stored
    /// locations scores 0.0 on proximity, and an absent trait reading
    /// scores 0.0 on traits.
    pub fn compatibility(&self, a: &UserRecord, b: &UserRecord) -> CompatibilityResult {
        let proximity = match (a.location, b.location) {
            (Some(loc_a), Some(loc_b)) => {
                let distance_km = haversine_distance(loc_a, loc_b);
                proximity_score(distance_km, self.near_radius_km)
            }
            _ => {
                tracing::debug!(
                    "Missing location for {} or {}, proximity component dropped",
                    a.user_id,
                    b.user_id
                );
                0.0
            }
        };

        let interests = interest_similarity(&a.interests, &b.interests);

        // Providers are untrusted: absent data is neutral, out-of-range
        // readings are clamped.
        let traits = self
            .trait_provider
            .similarity(a, b)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);

        let total = compose_score(proximity, interests, traits, &self.weights);

        tracing::debug!(
            "Compatibility {} <-> {}: proximity={:.2} interests={:.2} traits={:.2} total={:.2}",
            a.user_id,
            b.user_id,
            proximity,
            interests,
            traits,
            total
        );

        CompatibilityResult {
            proximity,
            interests,
            traits,
            total,
        }
    }

    /// Score a pair by identifier, resolving through the directory
    ///
    /// An unresolvable record yields the all-zero result rather than an
    /// error; the caller always gets a concrete score.
    pub fn compatibility_by_id(
        &self,
        directory: &dyn Directory,
        user_id_a: &str,
        user_id_b: &str,
    ) -> CompatibilityResult {
        let (a, b) = match (directory.resolve(user_id_a), directory.resolve(user_id_b)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                tracing::warn!(
                    "Could not resolve user records for {} and {}",
                    user_id_a,
                    user_id_b
                );
                return CompatibilityResult::zero();
            }
        };

        self.compatibility(&a, &b)
    }

    /// Threshold comparison for a composed score; pure, no side effects
    pub fn decide(&self, score: f64) -> MeetingDecision {
        MeetingDecision {
            score,
            scheduled: score >= self.schedule_threshold,
        }
    }

    /// Evaluate a pair and create a roster meeting when they clear the bar
    ///
    /// Meeting creation is the roster's job; this just wires decision to
    /// roster and logs the outcome.
    pub fn schedule_if_compatible(
        &self,
        directory: &dyn Directory,
        roster: &mut MeetingRoster,
        user_id_a: &str,
        user_id_b: &str,
    ) -> (MeetingDecision, Option<MeetingId>) {
        let result = self.compatibility_by_id(directory, user_id_a, user_id_b);
        let decision = self.decide(result.total);

        if !decision.scheduled {
            tracing::info!(
                "Meeting not scheduled between {} and {}. Compatibility rate: {:.2}",
                user_id_a,
                user_id_b,
                decision.score
            );
            return (decision, None);
        }

        let meeting_id = roster.create(vec![user_id_a.to_string(), user_id_b.to_string()]);
        tracing::info!(
            "Meeting {} scheduled between {} and {} with a compatibility rate of {:.2}",
            meeting_id,
            user_id_a,
            user_id_b,
            decision.score
        );

        (decision, Some(meeting_id))
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
