// Service exports
pub mod consent;
pub mod directory;
pub mod geolocation;
pub mod moderation;
pub mod roster;
pub mod traits;

pub use consent::{ConsentPrompter, ConsentService, ConsolePrompter};
pub use directory::{Directory, DirectoryError, InMemoryDirectory};
pub use geolocation::{get_location, save_location};
pub use moderation::{ApproveAllMedia, MediaModerator, ModerationService, DEFAULT_FLAG_THRESHOLD};
pub use roster::{MeetingRoster, RosterError};
pub use traits::{LabelTraitProvider, NoTraitData, TraitProvider};
