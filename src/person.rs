use std::fmt;

use serde::Deserialize;

const SEED_JSON: &str = include_str!("../assets/seed.json");

/// One row of the roster. Never edited in place; a change means a new record.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
}

impl Person {
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
            email: email.into(),
        }
    }

    /// Placeholder record created by the Add command.
    pub fn placeholder(id: u32) -> Self {
        Self::new(
            id,
            "New",
            "User",
            "Student",
            format!("new.user{}@example.com", id),
        )
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// Full field dump shown by the details dialog
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}\nFirst: {}\nLast: {}\nRole: {}\nEmail: {}",
            self.id, self.first_name, self.last_name, self.role, self.email
        )
    }
}

/// Sample records every session starts with.
pub fn seed() -> Result<Vec<Person>, serde_json::Error> {
    serde_json::from_str(SEED_JSON)
}
