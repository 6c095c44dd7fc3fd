use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// Capability that asks a user for geolocation permission
///
/// Injected into the consent service so the blocking I/O can be swapped for
/// a UI flow or a scripted double in tests.
pub trait ConsentPrompter: Send + Sync {
    fn request(&self, user_id: &str) -> bool;
}

/// Interactive prompter reading a yes/no answer from stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompter;

impl ConsentPrompter for ConsolePrompter {
    fn request(&self, user_id: &str) -> bool {
        println!("This app needs access to your geolocation to find nearby users.");
        print!(
            "Do you allow this app to access your geolocation for user {}? (yes/no): ",
            user_id
        );
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("yes")
    }
}

/// Consent table for geolocation storage
///
/// A user with no recorded decision counts as not having consented; a
/// declined request is a normal outcome, not an error.
pub struct ConsentService {
    decisions: HashMap<String, bool>,
    prompter: Box<dyn ConsentPrompter>,
}

impl ConsentService {
    pub fn new(prompter: Box<dyn ConsentPrompter>) -> Self {
        Self {
            decisions: HashMap::new(),
            prompter,
        }
    }

    /// Current consent status; unset means not granted
    pub fn get(&self, user_id: &str) -> bool {
        self.decisions.get(user_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, user_id: &str, consent: bool) {
        self.decisions.insert(user_id.to_string(), consent);
    }

    /// Prompt the user and record their answer
    pub fn request(&mut self, user_id: &str) -> bool {
        let granted = self.prompter.request(user_id);
        tracing::debug!("Consent request for {}: granted={}", user_id, granted);
        self.set(user_id, granted);
        granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prompter that always answers the same way
    pub struct ScriptedPrompter(pub bool);

    impl ConsentPrompter for ScriptedPrompter {
        fn request(&self, _user_id: &str) -> bool {
            self.0
        }
    }

    #[test]
    fn test_unset_consent_is_false() {
        let consent = ConsentService::new(Box::new(ScriptedPrompter(true)));
        assert!(!consent.get("u1"));
    }

    #[test]
    fn test_set_and_get() {
        let mut consent = ConsentService::new(Box::new(ScriptedPrompter(false)));
        consent.set("u1", true);
        assert!(consent.get("u1"));
        consent.set("u1", false);
        assert!(!consent.get("u1"));
    }

    #[test]
    fn test_request_records_answer() {
        let mut consent = ConsentService::new(Box::new(ScriptedPrompter(true)));
        assert!(consent.request("u1"));
        assert!(consent.get("u1"));

        let mut declined = ConsentService::new(Box::new(ScriptedPrompter(false)));
        assert!(!declined.request("u1"));
        assert!(!declined.get("u1"));
    }
}
