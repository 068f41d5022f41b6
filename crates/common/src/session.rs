use std::fmt;

use uuid::Uuid;

/// Identity of an authenticated transport session.
///
/// Owned by the transport layer. The resolution core only ever reads
/// the username and uses the id to tell sessions apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionHandle {
    id: Uuid,
    username: String,
}

impl SessionHandle {
    /// Create a handle for a freshly authenticated user
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), username)
    }

    pub fn with_id(id: Uuid, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.id)
    }
}
