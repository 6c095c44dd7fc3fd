use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a validated point; rejects out-of-range coordinates
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationErrors> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }
}

/// User record as resolved by the directory service
///
/// The engine only ever sees read-only snapshots of this; mutation goes
/// through the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    /// Last saved geolocation, if the user consented to storing one
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Interest tags; case-sensitive, compared as a set
    #[serde(default)]
    pub interests: Vec<String>,
    /// Psychological trait labels supplied by a trait provider, if any
    #[serde(default)]
    pub traits: Vec<String>,
    /// Preferred in-app games
    #[serde(rename = "gamePreferences", default)]
    pub game_preferences: Vec<String>,
    /// Weekdays the user is available for speed dating
    #[serde(rename = "speedDatingDays", default)]
    pub speed_dating_days: Vec<Weekday>,
    /// Weekdays the user is available for blind matching
    #[serde(rename = "blindMatchingDays", default)]
    pub blind_matching_days: Vec<Weekday>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            location: None,
            interests: Vec::new(),
            traits: Vec::new(),
            game_preferences: Vec::new(),
            speed_dating_days: Vec::new(),
            blind_matching_days: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }
}

/// Component scores plus the composed total, all in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub proximity: f64,
    pub interests: f64,
    pub traits: f64,
    pub total: f64,
}

impl CompatibilityResult {
    /// Result for a pair that could not be scored (unresolvable record)
    pub fn zero() -> Self {
        Self {
            proximity: 0.0,
            interests: 0.0,
            traits: 0.0,
            total: 0.0,
        }
    }
}

/// Outcome of the scheduling decision for a scored pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeetingDecision {
    pub score: f64,
    pub scheduled: bool,
}

/// Identifier for a meeting on the roster
pub type MeetingId = Uuid;

/// A meeting tracked by the roster, with its ordered participant list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    /// Participant user ids in join order; duplicates are possible
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Scoring weights for the compatibility composer
///
/// The defaults form a convex combination; overriding them from
/// configuration is supported but the composer clamps the total either way.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub proximity: f64,
    pub interests: f64,
    pub traits: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            proximity: 0.3,
            interests: 0.4,
            traits: 0.3,
        }
    }
}
