// 📚 Animal Catalog - every animal the shelter knows about
//
// Owned arena: animals live in a Vec (insertion order), with an index
// from ID to the FIRST slot carrying that ID. All mutation goes through
// the catalog's own methods; callers only ever see shared references or
// clones.

use crate::adoption::{self, AdoptionOutcome};
use crate::entities::{Adopter, Animal, SpeciesKind};
use crate::error::{Result, ShelterError};
use crate::roster;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone)]
pub struct AnimalCatalog {
    animals: Vec<Animal>,
    index: HashMap<String, usize>,
}

impl AnimalCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog populated with the built-in 5 cats and 5 dogs
    pub fn with_sample_animals() -> Self {
        Self::from_animals(roster::sample_animals())
    }

    pub fn from_animals(animals: impl IntoIterator<Item = Animal>) -> Self {
        let mut catalog = Self::new();
        for animal in animals {
            catalog.add(animal);
        }
        catalog
    }

    /// Append an animal. IDs are not checked for uniqueness; a repeated ID
    /// is stored but lookups keep returning the first one.
    pub fn add(&mut self, animal: Animal) {
        let slot = self.animals.len();

        if self.index.contains_key(animal.id()) {
            warn!(id = animal.id(), "duplicate animal ID added to catalog");
        } else {
            self.index.insert(animal.id().to_string(), slot);
        }

        debug!(id = animal.id(), name = %animal.name, species = %animal.kind(), "animal added");
        self.animals.push(animal);
    }

    /// All animals, insertion order (copy)
    pub fn list_all(&self) -> Vec<Animal> {
        self.animals.clone()
    }

    /// Animals not yet adopted, insertion order
    pub fn list_available(&self) -> Vec<Animal> {
        self.animals
            .iter()
            .filter(|a| !a.is_adopted())
            .cloned()
            .collect()
    }

    /// Available animals of one species, insertion order
    pub fn available_by_species(&self, kind: SpeciesKind) -> Vec<Animal> {
        self.animals
            .iter()
            .filter(|a| !a.is_adopted() && a.kind() == kind)
            .cloned()
            .collect()
    }

    /// First animal with this ID, if any
    pub fn find_by_id(&self, id: &str) -> Option<&Animal> {
        self.index.get(id).map(|&slot| &self.animals[slot])
    }

    /// Edit descriptive attributes (name, age, gender, species).
    ///
    /// The ID and adopted flag are restored after the closure runs, even if
    /// it replaced the whole value, so the index and the one-way adoption
    /// state always hold.
    pub fn edit<F>(&mut self, id: &str, edit_fn: F) -> Result<&Animal>
    where
        F: FnOnce(&mut Animal),
    {
        let animal = self.animal_mut(id)?;
        let (original_id, was_adopted) = (animal.id().to_string(), animal.is_adopted());

        edit_fn(&mut *animal);

        if animal.id() != original_id || animal.is_adopted() != was_adopted {
            warn!(id, "edit tried to change identity or adoption state; restored");
            animal.restore_identity(original_id, was_adopted);
        }

        debug!(id, "animal edited");
        Ok(animal)
    }

    /// Run the adoption transaction on the animal with this ID.
    ///
    /// Returns a snapshot of the animal after the flag flip. Does NOT touch
    /// any ledger; see [`crate::Shelter::complete_adoption`] for the
    /// combined step.
    pub fn adopt(&mut self, id: &str, adopter: &Adopter) -> Result<(Animal, AdoptionOutcome)> {
        let animal = self.animal_mut(id)?;
        let outcome = adoption::request_adoption(adopter, animal)?;
        Ok((animal.clone(), outcome))
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn count_available(&self) -> usize {
        self.animals.iter().filter(|a| !a.is_adopted()).count()
    }

    pub(crate) fn animal_mut(&mut self, id: &str) -> Result<&mut Animal> {
        let slot = *self.index.get(id).ok_or_else(|| ShelterError::NotFound {
            id: id.to_string(),
        })?;
        Ok(&mut self.animals[slot])
    }
}

// ============================================================================
// TESTS
// ============================================================================
