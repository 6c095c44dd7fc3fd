// Model exports
pub mod domain;

pub use domain::{
    CompatibilityResult, GeoPoint, Meeting, MeetingDecision, MeetingId, ScoringWeights, UserRecord,
};
