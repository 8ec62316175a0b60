//! User fixture records and the mocked onboarding state machine.

use crate::store::Record;
use crate::types::{RecordId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Onboarding state label, advanced via [`transition_target`].
    pub state: String,
}

impl Record for User {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl User {
    /// Placeholder user created when `GET /user` is called against an empty
    /// store. The client under test only needs *a* current user to exist.
    pub fn placeholder(id: UserId) -> Self {
        Self {
            id,
            username: format!("user_{id}"),
            email: format!("user_{id}@example.com"),
            first_name: None,
            last_name: None,
            state: "signed_up".to_string(),
        }
    }
}

/// Fixed lookup mocking the backend's onboarding state machine. Returns the
/// state a transition token lands in, or `None` for unrecognized tokens.
pub fn transition_target(token: &str) -> Option<&'static str> {
    match token {
        "edit_profile" => Some("edited_profile"),
        "select_categories" => Some("selected_categories"),
        "select_roles" => Some("selected_roles"),
        "select_skills" => Some("selected_skills"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_targets() {
        assert_eq!(transition_target("edit_profile"), Some("edited_profile"));
        assert_eq!(transition_target("select_categories"), Some("selected_categories"));
        assert_eq!(transition_target("select_roles"), Some("selected_roles"));
        assert_eq!(transition_target("select_skills"), Some("selected_skills"));
        assert_eq!(transition_target("launch_rocket"), None);
    }
}
