use crate::core::distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
use crate::models::UserRecord;

/// Find candidates within `radius_km` of the target user
///
/// Input order of `candidates` is preserved; results are not sorted by
/// distance. The target is excluded by identifier even when it appears in
/// the candidate list, and candidates without a stored location are skipped
/// since their distance is undefined.
pub fn find_users_within_radius<'a>(
    target: &UserRecord,
    candidates: &'a [UserRecord],
    radius_km: f64,
) -> Vec<&'a UserRecord> {
    let Some(origin) = target.location else {
        tracing::warn!(
            "User {} has no stored location, radius search returns nothing",
            target.user_id
        );
        return Vec::new();
    };

    // Cheap bounding-box pre-filter before the exact Haversine check
    let bbox = calculate_bounding_box(origin, radius_km);

    candidates
        .iter()
        .filter(|candidate| candidate.user_id != target.user_id)
        .filter(|candidate| {
            candidate.location.is_some_and(|location| {
                is_within_bounding_box(location, &bbox)
                    && haversine_distance(origin, location) <= radius_km
            })
        })
        .collect()
}
