// 📒 Adoption Ledger - append-only log of completed adoptions
//
// Records are values: once written they are never edited or removed.

use crate::entities::{Adopter, Animal};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// ADOPTION RECORD
// ============================================================================

/// One completed adoption: who took which animal, and when
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdoptionRecord {
    adopter: Adopter,

    /// Snapshot of the animal right after it was marked adopted
    animal: Animal,

    adopted_at: DateTime<Utc>,
}

impl AdoptionRecord {
    pub fn adopter(&self) -> &Adopter {
        &self.adopter
    }

    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    pub fn adopted_at(&self) -> DateTime<Utc> {
        self.adopted_at
    }

    /// "Adopter: Jane has adopted Whiskers."
    pub fn summary(&self) -> String {
        format!(
            "Adopter: {} has adopted {}.",
            self.adopter.name, self.animal.name
        )
    }
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct AdoptionLedger {
    records: Vec<AdoptionRecord>,
}

impl AdoptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pairing. No duplicate check.
    pub fn record(&mut self, adopter: Adopter, animal: Animal) -> &AdoptionRecord {
        let slot = self.records.len();
        self.records.push(AdoptionRecord {
            adopter,
            animal,
            adopted_at: Utc::now(),
        });
        &self.records[slot]
    }

    /// All records, oldest first
    pub fn list_all(&self) -> &[AdoptionRecord] {
        &self.records
    }

    /// Records for one animal (normally zero or one)
    pub fn for_animal(&self, animal_id: &str) -> Vec<&AdoptionRecord> {
        self.records
            .iter()
            .filter(|r| r.animal.id() == animal_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Gender;

    #[test]
    fn test_record_appends_in_order() {
        let mut ledger = AdoptionLedger::new();
        assert!(ledger.is_empty());

        ledger.record(
            Adopter::new("Jane", 30, None),
            Animal::cat("cat01", "Whiskers", 3, Gender::Female, true),
        );
        ledger.record(
            Adopter::new("Sam", 41, None),
            Animal::dog("dog02", "Max", 6, Gender::Male, "Beagle"),
        );

        let names: Vec<&str> = ledger
            .list_all()
            .iter()
            .map(|r| r.adopter().name.as_str())
            .collect();
        assert_eq!(names, vec!["Jane", "Sam"]);
        assert!(ledger.list_all()[0].adopted_at() <= ledger.list_all()[1].adopted_at());
    }

    #[test]
    fn test_record_allows_duplicates() {
        let mut ledger = AdoptionLedger::new();
        let cat = Animal::cat("cat01", "Whiskers", 3, Gender::Female, true);

        ledger.record(Adopter::new("Jane", 30, None), cat.clone());
        ledger.record(Adopter::new("Jane", 30, None), cat);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.for_animal("cat01").len(), 2);
        assert!(ledger.for_animal("dog01").is_empty());
    }

    #[test]
    fn test_record_returns_the_new_entry() {
        let mut ledger = AdoptionLedger::new();
        ledger.record(
            Adopter::new("Jane", 30, None),
            Animal::cat("cat01", "Whiskers", 3, Gender::Female, true),
        );

        let second = ledger.record(
            Adopter::new("Sam", 41, None),
            Animal::dog("dog02", "Max", 6, Gender::Male, "Beagle"),
        );
        assert_eq!(second.adopter().name, "Sam");
        assert_eq!(second.animal().id(), "dog02");
    }

    #[test]
    fn test_summary_line() {
        let mut ledger = AdoptionLedger::new();
        let record = ledger.record(
            Adopter::new("Jane", 30, None),
            Animal::cat("cat01", "Whiskers", 3, Gender::Female, true),
        );

        assert_eq!(record.summary(), "Adopter: Jane has adopted Whiskers.");
    }
}
