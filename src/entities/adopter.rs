// 🙋 Adopter Entity - the person behind one adoption request
//
// Identity is a generated UUID. The old "name + age" handle is kept for
// display only: two people called "Jane" aged 30 would collide on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdopterId(Uuid);

impl AdopterId {
    pub fn new() -> Self {
        AdopterId(Uuid::new_v4())
    }
}

impl Default for AdopterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AdopterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adopter {
    pub id: AdopterId,
    pub name: String,
    pub age: u32,

    /// Free text, `None` when the prompt was skipped
    pub preferred_pet: Option<String>,
}

impl Adopter {
    pub fn new(name: impl Into<String>, age: u32, preferred_pet: Option<String>) -> Self {
        let preferred_pet = preferred_pet
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Adopter {
            id: AdopterId::new(),
            name: name.into(),
            age,
            preferred_pet,
        }
    }

    /// Legacy display handle: name without spaces followed by age
    pub fn handle(&self) -> String {
        format!("{}{}", self.name.replace(' ', ""), self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adopter_creation() {
        let adopter = Adopter::new("Jane", 30, Some("Calm cat".to_string()));

        assert_eq!(adopter.name, "Jane");
        assert_eq!(adopter.age, 30);
        assert_eq!(adopter.preferred_pet.as_deref(), Some("Calm cat"));
    }

    #[test]
    fn test_blank_preference_is_none() {
        let adopter = Adopter::new("Jane", 30, Some("   ".to_string()));
        assert_eq!(adopter.preferred_pet, None);
    }

    #[test]
    fn test_same_name_and_age_get_distinct_ids() {
        let first = Adopter::new("Jane Doe", 30, None);
        let second = Adopter::new("Jane Doe", 30, None);

        // Same legacy handle...
        assert_eq!(first.handle(), "JaneDoe30");
        assert_eq!(first.handle(), second.handle());

        // ...but different identities
        assert_ne!(first.id, second.id);
    }
}
