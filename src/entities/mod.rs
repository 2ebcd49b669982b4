// Entity Models
// The two kinds of records the shelter keeps:
// - Animal: identity (catalog ID) + editable values + one-way adopted flag
// - Adopter: generated identity + contact/preference values

pub mod adopter;
pub mod animal;

pub use adopter::{Adopter, AdopterId};
pub use animal::{Adoptable, AdoptionStatus, Animal, Gender, Species, SpeciesKind};
