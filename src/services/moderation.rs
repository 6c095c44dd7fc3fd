use std::collections::HashMap;

use crate::services::directory::InMemoryDirectory;

/// Flag count at which a user is considered dangerous
pub const DEFAULT_FLAG_THRESHOLD: u32 = 3;

/// Capability that judges uploaded media
///
/// Real analysis is out of scope; implementations return whether the media
/// is appropriate.
pub trait MediaModerator: Send + Sync {
    fn is_appropriate(&self, media: &[u8], uploader_id: &str) -> bool;
}

/// Default media moderator; approves everything
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproveAllMedia;

impl MediaModerator for ApproveAllMedia {
    fn is_appropriate(&self, _media: &[u8], _uploader_id: &str) -> bool {
        true
    }
}

/// Keyword-blocklist moderation with repeat-offender tracking
pub struct ModerationService {
    /// Blocklisted keywords, held lowercase for case-insensitive matching
    blocklist: Vec<String>,
    flags: HashMap<String, u32>,
    flag_threshold: u32,
    media: Box<dyn MediaModerator>,
}

impl ModerationService {
    pub fn new(blocklist: Vec<String>, flag_threshold: u32) -> Self {
        Self {
            blocklist: blocklist.into_iter().map(|w| w.to_lowercase()).collect(),
            flags: HashMap::new(),
            flag_threshold,
            media: Box::new(ApproveAllMedia),
        }
    }

    pub fn with_media_moderator(mut self, media: Box<dyn MediaModerator>) -> Self {
        self.media = media;
        self
    }

    /// Moderate a text message between two users
    ///
    /// A blocklisted substring (case-insensitive) blocks the sender in the
    /// directory, once, and fails the message.
    pub fn moderate_text(
        &self,
        text: &str,
        sender_id: &str,
        _recipient_id: &str,
        directory: &mut InMemoryDirectory,
    ) -> bool {
        let lowered = text.to_lowercase();
        for word in &self.blocklist {
            if lowered.contains(word) {
                tracing::warn!("Message from {} rejected, matched blocklist", sender_id);
                directory.block_user(sender_id, "Inappropriate language used.");
                return false;
            }
        }
        true
    }

    /// Content-only safety check; no block action is taken
    ///
    /// Empty or whitespace-only content is safe by definition.
    pub fn moderate_content(&self, content: &str) -> bool {
        if content.trim().is_empty() {
            return true;
        }

        let lowered = content.to_lowercase();
        !self.blocklist.iter().any(|word| lowered.contains(word))
    }

    /// Moderate uploaded media through the injected capability
    pub fn moderate_media(&self, media: &[u8], uploader_id: &str) -> bool {
        let appropriate = self.media.is_appropriate(media, uploader_id);
        if !appropriate {
            tracing::warn!("Media from {} rejected by moderator", uploader_id);
        }
        appropriate
    }

    /// Flag a user; returns true once they cross the danger threshold
    pub fn flag_user(&mut self, user_id: &str) -> bool {
        let count = self.flags.entry(user_id.to_string()).or_insert(0);
        *count += 1;

        if *count >= self.flag_threshold {
            tracing::warn!("User {} flagged {} times, now considered dangerous", user_id, count);
            return true;
        }
        false
    }

    /// Users at or above the danger threshold
    pub fn dangerous_users(&self) -> Vec<String> {
        self.flags
            .iter()
            .filter(|(_, &count)| count >= self.flag_threshold)
            .map(|(user_id, _)| user_id.clone())
            .collect()
    }
}

impl Default for ModerationService {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_FLAG_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ModerationService {
        ModerationService::new(
            vec!["badword1".to_string(), "badword2".to_string()],
            DEFAULT_FLAG_THRESHOLD,
        )
    }

    #[test]
    fn test_clean_text_passes() {
        let moderation = service();
        let mut directory = InMemoryDirectory::new();

        assert!(moderation.moderate_text("hello there", "u1", "u2", &mut directory));
        assert!(!directory.is_blocked("u1"));
    }

    #[test]
    fn test_blocklisted_substring_blocks_sender() {
        let moderation = service();
        let mut directory = InMemoryDirectory::new();

        assert!(!moderation.moderate_text("well BADWORD1 then", "u1", "u2", &mut directory));
        assert!(directory.is_blocked("u1"));
        assert_eq!(
            directory.block_reason("u1"),
            Some("Inappropriate language used.")
        );
    }

    #[test]
    fn test_multiple_hits_block_once() {
        let moderation = service();
        let mut directory = InMemoryDirectory::new();

        // Two blocklisted words in one message still mean one block action
        assert!(!moderation.moderate_text("badword1 badword2", "u1", "u2", &mut directory));
        assert!(directory.is_blocked("u1"));

        directory.unblock_user("u1").unwrap();
        assert!(!directory.is_blocked("u1"));
    }

    #[test]
    fn test_moderate_content() {
        let moderation = service();

        assert!(moderation.moderate_content(""));
        assert!(moderation.moderate_content("   \n"));
        assert!(moderation.moderate_content("perfectly fine"));
        assert!(!moderation.moderate_content("contains Badword2 here"));
    }

    #[test]
    fn test_moderate_media_default_approves() {
        let moderation = service();
        assert!(moderation.moderate_media(&[0u8; 16], "u1"));
    }

    #[test]
    fn test_media_moderator_capability() {
        struct RejectAll;
        impl MediaModerator for RejectAll {
            fn is_appropriate(&self, _media: &[u8], _uploader_id: &str) -> bool {
                false
            }
        }

        let moderation = service().with_media_moderator(Box::new(RejectAll));
        assert!(!moderation.moderate_media(&[0u8; 16], "u1"));
    }

    #[test]
    fn test_flag_user_threshold() {
        let mut moderation = service();

        assert!(!moderation.flag_user("u1"));
        assert!(!moderation.flag_user("u1"));
        assert!(moderation.flag_user("u1"));
        // Stays dangerous past the threshold
        assert!(moderation.flag_user("u1"));
    }

    #[test]
    fn test_dangerous_users() {
        let mut moderation = service();

        moderation.flag_user("u1");
        for _ in 0..3 {
            moderation.flag_user("u2");
        }

        assert_eq!(moderation.dangerous_users(), vec!["u2".to_string()]);
    }
}
