use std::collections::HashMap;

use chrono::Weekday;
use thiserror::Error;

use crate::models::{GeoPoint, UserRecord};

/// Errors reported by the user directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user {0} already exists")]
    AlreadyExists(String),

    #[error("user {0} not found")]
    NotFound(String),

    #[error("user {0} is not currently blocked")]
    NotBlocked(String),
}

/// Read interface the engine resolves user records through
///
/// Must be idempotent and side-effect-free from the engine's perspective;
/// the engine only ever receives snapshots.
pub trait Directory {
    fn resolve(&self, user_id: &str) -> Option<UserRecord>;
}

/// In-memory user directory
///
/// Owns the user records and the blocked-user table. Constructed once per
/// process (or per test) and passed by reference to the engine's callers.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: HashMap<String, UserRecord>,
    blocked: HashMap<String, String>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user record
    pub fn create_user(&mut self, record: UserRecord) -> Result<(), DirectoryError> {
        if self.users.contains_key(&record.user_id) {
            return Err(DirectoryError::AlreadyExists(record.user_id));
        }
        self.users.insert(record.user_id.clone(), record);
        Ok(())
    }

    /// Replace the stored location for a user
    pub fn update_location(
        &mut self,
        user_id: &str,
        location: GeoPoint,
    ) -> Result<(), DirectoryError> {
        let record = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))?;
        record.location = Some(location);
        Ok(())
    }

    /// Replace the interest tags for a user
    pub fn update_interests(
        &mut self,
        user_id: &str,
        interests: Vec<String>,
    ) -> Result<(), DirectoryError> {
        let record = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))?;
        record.interests = interests;
        Ok(())
    }

    /// Replace the preferred in-app games for a user
    pub fn update_game_preferences(
        &mut self,
        user_id: &str,
        preferences: Vec<String>,
    ) -> Result<(), DirectoryError> {
        let record = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))?;
        record.game_preferences = preferences;
        Ok(())
    }

    /// Replace the weekdays a user is available for speed dating
    pub fn update_speed_dating_days(
        &mut self,
        user_id: &str,
        days: Vec<Weekday>,
    ) -> Result<(), DirectoryError> {
        let record = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))?;
        record.speed_dating_days = days;
        Ok(())
    }

    /// Replace the weekdays a user is available for blind matching
    pub fn update_blind_matching_days(
        &mut self,
        user_id: &str,
        days: Vec<Weekday>,
    ) -> Result<(), DirectoryError> {
        let record = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))?;
        record.blind_matching_days = days;
        Ok(())
    }

    /// Block a user, recording the reason
    pub fn block_user(&mut self, user_id: &str, reason: &str) {
        tracing::info!("Blocking user {}: {}", user_id, reason);
        self.blocked.insert(user_id.to_string(), reason.to_string());
    }

    /// Lift a block; reports an error if the user was not blocked
    pub fn unblock_user(&mut self, user_id: &str) -> Result<(), DirectoryError> {
        match self.blocked.remove(user_id) {
            Some(_) => Ok(()),
            None => Err(DirectoryError::NotBlocked(user_id.to_string())),
        }
    }

    pub fn is_blocked(&self, user_id: &str) -> bool {
        self.blocked.contains_key(user_id)
    }

    /// The reason a user was blocked, if they are
    pub fn block_reason(&self, user_id: &str) -> Option<&str> {
        self.blocked.get(user_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Snapshot of every record, for candidate sweeps
    pub fn all_users(&self) -> Vec<UserRecord> {
        self.users.values().cloned().collect()
    }
}

impl Directory for InMemoryDirectory {
    fn resolve(&self, user_id: &str) -> Option<UserRecord> {
        self.users.get(user_id).cloned()
    }
}
