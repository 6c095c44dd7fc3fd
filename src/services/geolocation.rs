use crate::models::GeoPoint;
use crate::services::consent::ConsentService;
use crate::services::directory::{Directory, InMemoryDirectory};

/// Stored location for a user, if any
pub fn get_location(directory: &dyn Directory, user_id: &str) -> Option<GeoPoint> {
    directory.resolve(user_id).and_then(|record| record.location)
}

/// Save or update a user's geolocation, gated on consent
///
/// A user without recorded consent is asked once via the consent service's
/// prompter; a declined request leaves the location unsaved and returns
/// false. Unknown users also return false. Both are reported, non-fatal
/// outcomes.
pub fn save_location(
    directory: &mut InMemoryDirectory,
    consent: &mut ConsentService,
    user_id: &str,
    location: GeoPoint,
) -> bool {
    if !consent.get(user_id) && !consent.request(user_id) {
        tracing::warn!(
            "User {} has not granted geolocation consent. Location not saved.",
            user_id
        );
        return false;
    }

    match directory.update_location(user_id, location) {
        Ok(()) => {
            tracing::info!(
                "Updated geolocation for user {}: latitude={}, longitude={}",
                user_id,
                location.latitude,
                location.longitude
            );
            true
        }
        Err(e) => {
            tracing::warn!("Could not save location for {}: {}", user_id, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;
    use crate::services::consent::ConsentPrompter;

    struct ScriptedPrompter(bool);

    impl ConsentPrompter for ScriptedPrompter {
        fn request(&self, _user_id: &str) -> bool {
            self.0
        }
    }

    fn setup(answer: bool) -> (InMemoryDirectory, ConsentService) {
        let mut directory = InMemoryDirectory::new();
        directory
            .create_user(UserRecord::new("u1", "Alice"))
            .unwrap();
        let consent = ConsentService::new(Box::new(ScriptedPrompter(answer)));
        (directory, consent)
    }

    #[test]
    fn test_save_with_granted_consent() {
        let (mut directory, mut consent) = setup(false);
        consent.set("u1", true);

        let point = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert!(save_location(&mut directory, &mut consent, "u1", point));
        assert_eq!(get_location(&directory, "u1"), Some(point));
    }

    #[test]
    fn test_declined_request_does_not_save() {
        let (mut directory, mut consent) = setup(false);

        let point = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert!(!save_location(&mut directory, &mut consent, "u1", point));
        assert_eq!(get_location(&directory, "u1"), None);
        // The decline was recorded
        assert!(!consent.get("u1"));
    }

    #[test]
    fn test_prompt_granted_on_the_spot() {
        let (mut directory, mut consent) = setup(true);

        let point = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert!(save_location(&mut directory, &mut consent, "u1", point));
        assert!(consent.get("u1"));
    }

    #[test]
    fn test_unknown_user_reports_false() {
        let (mut directory, mut consent) = setup(true);

        let point = GeoPoint::new(0.0, 0.0).unwrap();
        assert!(!save_location(&mut directory, &mut consent, "ghost", point));
    }

    #[test]
    fn test_get_location_absent() {
        let (directory, _) = setup(true);
        assert_eq!(get_location(&directory, "u1"), None);
        assert_eq!(get_location(&directory, "ghost"), None);
    }
}
