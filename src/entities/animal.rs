// 🐾 Animal Entity - one adoptable resident of the shelter
//
// Identity: the catalog ID ("cat01", "dog03", ...) - never changes
// Values: name, age, gender, species attributes - editable
// State: adopted flag - Available → Adopted, never back

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// GENDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        }
    }

    /// Lenient parse used for roster files and edits ("f", "FEMALE", ...)
    pub fn parse(text: &str) -> Gender {
        match text.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SPECIES
// ============================================================================

/// Species discriminator without the per-species payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesKind {
    Cat,
    Dog,
}

impl SpeciesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeciesKind::Cat => "Cat",
            SpeciesKind::Dog => "Dog",
        }
    }

    /// Console species prompt: "cat" in any case picks cats, anything else dogs
    pub fn from_choice(answer: &str) -> SpeciesKind {
        if answer.trim().eq_ignore_ascii_case("cat") {
            SpeciesKind::Cat
        } else {
            SpeciesKind::Dog
        }
    }
}

impl fmt::Display for SpeciesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeciesKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cat" | "cats" => Ok(SpeciesKind::Cat),
            "dog" | "dogs" => Ok(SpeciesKind::Dog),
            other => Err(format!("unknown species '{}' (expected cat or dog)", other)),
        }
    }
}

/// Species-specific attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat { indoor: bool },
    Dog { breed: String },
}

impl Species {
    pub fn kind(&self) -> SpeciesKind {
        match self {
            Species::Cat { .. } => SpeciesKind::Cat,
            Species::Dog { .. } => SpeciesKind::Dog,
        }
    }

    /// Short description for tables: "Indoor cat", "Beagle"
    pub fn describe(&self) -> String {
        match self {
            Species::Cat { indoor: true } => "Indoor cat".to_string(),
            Species::Cat { indoor: false } => "Outdoor cat".to_string(),
            Species::Dog { breed } => breed.clone(),
        }
    }
}

// ============================================================================
// ADOPTION STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdoptionStatus {
    Available,
    Adopted,
}

impl AdoptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionStatus::Available => "Available",
            AdoptionStatus::Adopted => "Adopted",
        }
    }
}

// ============================================================================
// ADOPTABLE CAPABILITY
// ============================================================================

/// Anything that can go through the adoption flow
pub trait Adoptable {
    fn adoption_status(&self) -> AdoptionStatus;

    /// Handover notes for the new owner
    fn prepare_adoption(&self) -> Vec<String>;

    fn adoption_status_line(&self) -> String {
        format!(
            "Adoption status: {}",
            self.adoption_status() == AdoptionStatus::Adopted
        )
    }
}

// ============================================================================
// ANIMAL ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animal {
    /// Catalog identifier - unique by convention, not validated
    id: String,

    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub species: Species,

    /// Only the adoption flow may set this
    adopted: bool,
}

impl Animal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        species: Species,
    ) -> Self {
        Animal {
            id: id.into(),
            name: name.into(),
            age,
            gender,
            species,
            adopted: false,
        }
    }

    pub fn cat(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        indoor: bool,
    ) -> Self {
        Animal::new(id, name, age, gender, Species::Cat { indoor })
    }

    pub fn dog(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        breed: impl Into<String>,
    ) -> Self {
        Animal::new(id, name, age, gender, Species::Dog { breed: breed.into() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SpeciesKind {
        self.species.kind()
    }

    pub fn is_adopted(&self) -> bool {
        self.adopted
    }

    pub fn status(&self) -> AdoptionStatus {
        if self.adopted {
            AdoptionStatus::Adopted
        } else {
            AdoptionStatus::Available
        }
    }

    /// One-way transition; there is no way back to Available
    pub(crate) fn mark_adopted(&mut self) {
        self.adopted = true;
    }

    /// Put back the catalog ID and adopted flag after an edit
    pub(crate) fn restore_identity(&mut self, id: String, adopted: bool) {
        self.id = id;
        self.adopted = adopted;
    }

    /// Console detail line
    pub fn details(&self) -> String {
        format!(
            "ID: {}, Name: {}, Age: {}, Gender: {}, Adopted: {}",
            self.id,
            self.name,
            self.age,
            self.gender,
            if self.adopted { "Yes" } else { "No" }
        )
    }
}

impl Adoptable for Animal {
    fn adoption_status(&self) -> AdoptionStatus {
        self.status()
    }

    fn prepare_adoption(&self) -> Vec<String> {
        let mut notes = Vec::new();

        match &self.species {
            Species::Cat { indoor: true } => {
                notes.push(format!("{} is an indoor cat; keep windows screened.", self.name));
            }
            Species::Cat { indoor: false } => {
                notes.push(format!("{} is used to going outdoors.", self.name));
            }
            Species::Dog { breed } => {
                notes.push(format!("{} is a {}.", self.name, breed));
            }
        }

        if self.age <= 1 {
            notes.push(format!("{} is still young and needs a vet check-up plan.", self.name));
        }

        notes
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_animal_is_available() {
        let cat = Animal::cat("cat01", "Whiskers", 3, Gender::Female, true);

        assert_eq!(cat.id(), "cat01");
        assert!(!cat.is_adopted());
        assert_eq!(cat.status(), AdoptionStatus::Available);
        assert_eq!(cat.kind(), SpeciesKind::Cat);
    }

    #[test]
    fn test_details_line() {
        let mut dog = Animal::dog("dog01", "Buddy", 5, Gender::Male, "Labrador");
        assert_eq!(
            dog.details(),
            "ID: dog01, Name: Buddy, Age: 5, Gender: Male, Adopted: No"
        );

        dog.mark_adopted();
        assert_eq!(
            dog.details(),
            "ID: dog01, Name: Buddy, Age: 5, Gender: Male, Adopted: Yes"
        );
    }

    #[test]
    fn test_adoption_status_line() {
        let mut cat = Animal::cat("cat02", "Shadow", 4, Gender::Male, false);
        assert_eq!(cat.adoption_status_line(), "Adoption status: false");

        cat.mark_adopted();
        assert_eq!(cat.adoption_status_line(), "Adoption status: true");
    }

    #[test]
    fn test_prepare_adoption_by_species() {
        let cat = Animal::cat("cat04", "Oliver", 1, Gender::Male, false);
        let notes = cat.prepare_adoption();
        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("outdoors"));

        let dog = Animal::dog("dog05", "Daisy", 3, Gender::Female, "Poodle");
        assert_eq!(dog.prepare_adoption(), vec!["Daisy is a Poodle.".to_string()]);
    }

    #[test]
    fn test_species_choice_is_case_insensitive() {
        assert_eq!(SpeciesKind::from_choice("Cat"), SpeciesKind::Cat);
        assert_eq!(SpeciesKind::from_choice("  cAT "), SpeciesKind::Cat);
        assert_eq!(SpeciesKind::from_choice("dog"), SpeciesKind::Dog);
        // Anything that is not a cat falls through to dogs
        assert_eq!(SpeciesKind::from_choice("hamster"), SpeciesKind::Dog);
    }

    #[test]
    fn test_species_kind_from_str() {
        assert_eq!("DOG".parse::<SpeciesKind>(), Ok(SpeciesKind::Dog));
        assert_eq!("cats".parse::<SpeciesKind>(), Ok(SpeciesKind::Cat));
        assert!("hamster".parse::<SpeciesKind>().is_err());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Female"), Gender::Female);
        assert_eq!(Gender::parse("m"), Gender::Male);
        assert_eq!(Gender::parse("?"), Gender::Unknown);
    }

    #[test]
    fn test_species_describe() {
        assert_eq!(Species::Cat { indoor: true }.describe(), "Indoor cat");
        assert_eq!(
            Species::Dog { breed: "German Shepherd".to_string() }.describe(),
            "German Shepherd"
        );
    }
}
