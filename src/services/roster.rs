use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Meeting, MeetingId};

/// Errors reported by the meeting roster
///
/// All of these are non-fatal bookkeeping failures the caller can surface
/// and move on from.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("meeting {0} not found")]
    MeetingNotFound(MeetingId),

    #[error("user {user_id} not found in meeting {meeting_id}")]
    ParticipantNotFound {
        meeting_id: MeetingId,
        user_id: String,
    },
}

/// In-memory roster mapping meeting ids to ordered participant lists
#[derive(Debug, Default)]
pub struct MeetingRoster {
    meetings: HashMap<MeetingId, Meeting>,
}

impl MeetingRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a meeting with the given participants, in order
    pub fn create(&mut self, participants: Vec<String>) -> MeetingId {
        let id = Uuid::new_v4();
        self.meetings.insert(
            id,
            Meeting {
                id,
                participants,
                created_at: Utc::now(),
            },
        );
        tracing::info!("Created meeting {}", id);
        id
    }

    /// Append a user to an existing meeting
    pub fn join(&mut self, meeting_id: MeetingId, user_id: &str) -> Result<(), RosterError> {
        let meeting = self
            .meetings
            .get_mut(&meeting_id)
            .ok_or(RosterError::MeetingNotFound(meeting_id))?;
        meeting.participants.push(user_id.to_string());
        Ok(())
    }

    /// Remove the first occurrence of a user from a meeting
    pub fn leave(&mut self, meeting_id: MeetingId, user_id: &str) -> Result<(), RosterError> {
        let meeting = self
            .meetings
            .get_mut(&meeting_id)
            .ok_or(RosterError::MeetingNotFound(meeting_id))?;

        let position = meeting
            .participants
            .iter()
            .position(|participant| participant == user_id)
            .ok_or_else(|| RosterError::ParticipantNotFound {
                meeting_id,
                user_id: user_id.to_string(),
            })?;

        meeting.participants.remove(position);
        Ok(())
    }

    /// End a meeting, dropping it from the roster
    pub fn end(&mut self, meeting_id: MeetingId) -> Result<(), RosterError> {
        match self.meetings.remove(&meeting_id) {
            Some(_) => {
                tracing::info!("Ended meeting {}", meeting_id);
                Ok(())
            }
            None => Err(RosterError::MeetingNotFound(meeting_id)),
        }
    }

    /// Ordered participant ids for a meeting, if it exists
    pub fn participants(&self, meeting_id: MeetingId) -> Option<&[String]> {
        self.meetings
            .get(&meeting_id)
            .map(|meeting| meeting.participants.as_slice())
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}
