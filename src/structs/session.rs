/// Identity of the viewer for the lifetime of one page load. Built by the
/// session guard and handed to every component that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl Session {
    pub fn authenticated(username: Option<String>) -> Self {
        Self {
            authenticated: true,
            username,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Username if one is known and non-empty.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether the delete control should be shown for a record written by
    /// `reviewer_name`. The server performs the authoritative check.
    pub fn can_delete(&self, reviewer_name: &str) -> bool {
        self.username()
            .is_some_and(|name| name.to_lowercase() == reviewer_name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_is_case_insensitive() {
        let session = Session::authenticated(Some("Alice".to_string()));
        assert!(session.can_delete("alice"));
        assert!(session.can_delete("ALICE"));
        assert!(!session.can_delete("Bob"));
    }

    #[test]
    fn anonymous_session_owns_nothing() {
        let session = Session::anonymous();
        assert!(!session.can_delete(""));
        assert!(!session.can_delete("alice"));

        let nameless = Session::authenticated(Some(String::new()));
        assert!(!nameless.can_delete(""));
    }
}
