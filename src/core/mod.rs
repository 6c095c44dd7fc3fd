// Core algorithm exports
pub mod distance;
pub mod engine;
pub mod nearby;
pub mod scoring;

pub use distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box, BoundingBox};
pub use engine::{CompatibilityEngine, DEFAULT_NEAR_RADIUS_KM, DEFAULT_SCHEDULE_THRESHOLD};
pub use nearby::find_users_within_radius;
pub use scoring::{compose_score, interest_similarity, proximity_score};
