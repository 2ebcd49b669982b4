// Shelter Registry - Core Library
// Exposes the catalog, ledger and adoption flow for the CLI and tests

pub mod adoption;
pub mod catalog;
pub mod cli;
pub mod console;
pub mod entities;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod roster;

// Only compile the terminal browser when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use adoption::{request_adoption, AdoptionOutcome, Shelter};
pub use catalog::AnimalCatalog;
pub use console::{parse_age, Session};
pub use entities::{
    Adoptable, Adopter, AdopterId, AdoptionStatus, Animal, Gender, Species, SpeciesKind,
};
pub use error::{Result, ShelterError};
pub use ledger::{AdoptionLedger, AdoptionRecord};
pub use roster::{load_roster, sample_animals, RosterEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
