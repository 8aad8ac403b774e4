use crate::person::Person;

/// Case-insensitive substring search over name and email.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    needle: String,
}

impl Filter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    pub fn matches(&self, person: &Person) -> bool {
        if !self.is_active() {
            return true;
        }

        [
            person.first_name.to_lowercase(),
            person.last_name.to_lowercase(),
            person.email.to_lowercase(),
            person.full_name().to_lowercase(),
        ]
        .iter()
        .any(|field| field.contains(&self.needle))
    }
}
