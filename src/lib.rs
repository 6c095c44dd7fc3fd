//! Amora Engine - Compatibility scoring for the Amora dating app
//!
//! This library computes a pairwise compatibility score from geographic
//! proximity, shared interests, and psychological-trait similarity, and
//! gates meeting scheduling on it. The collaborator services (user
//! directory, consent, geolocation, meeting roster, moderation) are
//! in-process stores injected by the caller.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    find_users_within_radius, haversine_distance, CompatibilityEngine, DEFAULT_NEAR_RADIUS_KM,
    DEFAULT_SCHEDULE_THRESHOLD,
};
pub use crate::models::{
    CompatibilityResult, GeoPoint, MeetingDecision, MeetingId, ScoringWeights, UserRecord,
};
pub use crate::services::{ConsentService, InMemoryDirectory, MeetingRoster, ModerationService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let engine = CompatibilityEngine::with_defaults();
        let decision = engine.decide(0.9);
        assert!(decision.scheduled);
    }
}
