// 🗂️ Roster - where the catalog's animals come from
//
// Either the built-in sample set (5 cats, 5 dogs) or a JSON roster file.
// Nothing is ever written back; every run starts from the roster.

use crate::entities::{Animal, Gender, Species};
use crate::error::{Result, ShelterError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// One animal as written in a roster file
///
/// ```json
/// { "id": "cat01", "name": "Whiskers", "age": 3, "gender": "Female",
///   "species": { "cat": { "indoor": true } } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    pub species: Species,
}

impl From<RosterEntry> for Animal {
    fn from(entry: RosterEntry) -> Self {
        // Adopted flag is not part of the file: everyone starts Available
        Animal::new(
            entry.id,
            entry.name,
            entry.age,
            Gender::parse(&entry.gender),
            entry.species,
        )
    }
}

/// The fixed sample population
pub fn sample_animals() -> Vec<Animal> {
    vec![
        Animal::cat("cat01", "Whiskers", 3, Gender::Female, true),
        Animal::cat("cat02", "Shadow", 4, Gender::Male, false),
        Animal::cat("cat03", "Luna", 2, Gender::Female, true),
        Animal::cat("cat04", "Oliver", 1, Gender::Male, false),
        Animal::cat("cat05", "Milo", 3, Gender::Male, true),
        Animal::dog("dog01", "Buddy", 5, Gender::Male, "Labrador"),
        Animal::dog("dog02", "Max", 6, Gender::Male, "Beagle"),
        Animal::dog("dog03", "Bella", 2, Gender::Female, "German Shepherd"),
        Animal::dog("dog04", "Charlie", 4, Gender::Male, "Bulldog"),
        Animal::dog("dog05", "Daisy", 3, Gender::Female, "Poodle"),
    ]
}

/// Load animals from a JSON roster file (array of [`RosterEntry`])
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Animal>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    // Syntax/shape problems surface as ShelterError::Json
    let entries: Vec<RosterEntry> = serde_json::from_str(&content)?;

    if entries.is_empty() {
        return Err(ShelterError::Roster(format!(
            "{} contains no animals",
            path.display()
        )));
    }

    info!(path = %path.display(), count = entries.len(), "roster loaded");
    Ok(entries.into_iter().map(Animal::from).collect())
}
