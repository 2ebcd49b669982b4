// 🤝 Adoption - the one state-changing operation
//
// request_adoption:  check flag → set flag           (no ledger)
// Shelter::complete_adoption: check flag → set flag → append ledger
//
// complete_adoption takes &mut Shelter, so the three steps run as one
// exclusive section; nothing can observe the flag set without the record.

use crate::catalog::AnimalCatalog;
use crate::entities::{Adoptable, Adopter, Animal, SpeciesKind};
use crate::error::{Result, ShelterError};
use crate::ledger::{AdoptionLedger, AdoptionRecord};
use tracing::{info, warn};

// ============================================================================
// TRANSACTION OPERATION
// ============================================================================

/// Successful adoption report
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionOutcome {
    pub animal_id: String,

    /// "Adoption request for <name> is complete."
    pub message: String,

    /// Handover notes from [`Adoptable::prepare_adoption`]
    pub notes: Vec<String>,
}

/// Flip `animal` from Available to Adopted on behalf of `adopter`.
///
/// Fails with [`ShelterError::AlreadyAdopted`] and leaves the animal
/// untouched when it was adopted before.
pub fn request_adoption(adopter: &Adopter, animal: &mut Animal) -> Result<AdoptionOutcome> {
    if animal.is_adopted() {
        warn!(
            animal_id = animal.id(),
            adopter_id = %adopter.id,
            "adoption rejected: animal already adopted"
        );
        return Err(ShelterError::AlreadyAdopted {
            id: animal.id().to_string(),
            name: animal.name.clone(),
        });
    }

    animal.mark_adopted();

    info!(
        animal_id = animal.id(),
        adopter_id = %adopter.id,
        adopter = %adopter.name,
        "adoption complete"
    );

    Ok(AdoptionOutcome {
        animal_id: animal.id().to_string(),
        message: format!("Adoption request for {} is complete.", animal.name),
        notes: animal.prepare_adoption(),
    })
}

// ============================================================================
// SHELTER (catalog + ledger)
// ============================================================================

/// The whole in-memory state of one run
#[derive(Debug, Default, Clone)]
pub struct Shelter {
    pub catalog: AnimalCatalog,
    pub ledger: AdoptionLedger,
}

impl Shelter {
    pub fn new(catalog: AnimalCatalog) -> Self {
        Shelter {
            catalog,
            ledger: AdoptionLedger::new(),
        }
    }

    /// Shelter stocked with the built-in sample animals
    pub fn with_sample_animals() -> Self {
        Self::new(AnimalCatalog::with_sample_animals())
    }

    /// Adopt the animal with `animal_id` and record the pairing.
    ///
    /// On any error nothing changes: no flag flip, no ledger entry.
    pub fn complete_adoption(
        &mut self,
        adopter: Adopter,
        animal_id: &str,
    ) -> Result<(&AdoptionRecord, AdoptionOutcome)> {
        let (animal, outcome) = self.catalog.adopt(animal_id, &adopter)?;
        let record = self.ledger.record(adopter, animal);
        Ok((record, outcome))
    }

    /// Available animals of a species, or `Unavailable` when there are none
    pub fn offer(&self, kind: SpeciesKind) -> Result<Vec<Animal>> {
        let animals = self.catalog.available_by_species(kind);
        if animals.is_empty() {
            return Err(ShelterError::Unavailable {
                species: kind.to_string(),
            });
        }
        Ok(animals)
    }
}

// ============================================================================
// TESTS
// ============================================================================
