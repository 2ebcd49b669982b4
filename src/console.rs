// 🖥️ Console Session - the text menu in front of the shelter
//
// Generic over input/output so the whole dialogue can be scripted in
// tests. Request-level errors are printed and the menu starts over;
// only I/O failures end the session with an error.

use crate::adoption::Shelter;
use crate::entities::{Adopter, SpeciesKind};
use crate::error::{Result, ShelterError};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Parse the age prompt. Whole, non-negative numbers only.
pub fn parse_age(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ShelterError::InvalidAge {
            input: input.trim().to_string(),
        })
}

pub struct Session<'a, R, W> {
    shelter: &'a mut Shelter,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(shelter: &'a mut Shelter, input: R, output: W) -> Self {
        Session {
            shelter,
            input,
            output,
        }
    }

    /// Run the menu until the user picks anything other than 1 or 2,
    /// or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Welcome to the Pet Adoption System!")?;
            writeln!(self.output, "1. Check Adoption Status")?;
            writeln!(self.output, "2. Prepare an Adoption Request")?;
            writeln!(
                self.output,
                "Please choose an option (or any other key to exit):"
            )?;
            self.output.flush()?;

            let option = self.read_line()?;
            debug!(option = ?option, "menu choice");

            match option.as_deref().map(str::trim) {
                Some("1") => self.check_adoption_status()?,
                Some("2") => match self.prepare_adoption_request() {
                    Ok(()) => {}
                    Err(e) if e.is_request_error() => {
                        info!(error = %e, "adoption request aborted");
                        writeln!(self.output, "{}", e)?;
                    }
                    Err(e) => return Err(e),
                },
                _ => {
                    writeln!(self.output, "Exiting system.")?;
                    self.output.flush()?;
                    return Ok(());
                }
            }
        }
    }

    fn check_adoption_status(&mut self) -> Result<()> {
        let records = self.shelter.ledger.list_all();

        if records.is_empty() {
            writeln!(self.output, "No adoptions have been completed yet.")?;
        } else {
            for record in records {
                writeln!(self.output, "{}", record.summary())?;
            }
        }

        Ok(())
    }

    fn prepare_adoption_request(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Please enter your name:")? else {
            return Ok(());
        };

        let Some(age) = self.prompt("Please enter your age:")? else {
            return Ok(());
        };
        let age = parse_age(&age)?;

        let Some(species) = self.prompt("Are you interested in adopting a Cat or a Dog?")? else {
            return Ok(());
        };
        let kind = SpeciesKind::from_choice(&species);

        let preferred_pet = self
            .prompt("What is your preferred pet (optional, press Enter to skip):")?
            .unwrap_or_default();

        let animals = self.shelter.offer(kind)?;

        writeln!(self.output, "Available {}s:", kind)?;
        for animal in &animals {
            writeln!(self.output, "{}", animal.details())?;
        }

        let prompt = format!("Enter the ID of the {} you wish to adopt:", kind);
        let Some(animal_id) = self.prompt(&prompt)? else {
            return Ok(());
        };

        let adopter = Adopter::new(name.trim(), age, Some(preferred_pet));

        match self.shelter.complete_adoption(adopter, animal_id.trim()) {
            Ok((_, outcome)) => {
                writeln!(self.output, "{}", outcome.message)?;
                writeln!(self.output, "Thank you for adopting a {}!", kind)?;
                Ok(())
            }
            Err(ShelterError::NotFound { id }) => {
                info!(animal_id = %id, "selected animal not in catalog");
                writeln!(self.output, "Sorry, the selected {} is not available.", kind)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AnimalCatalog;
    use crate::entities::{Animal, Gender};
    use std::io::Cursor;

    fn run_script(shelter: &mut Shelter, script: &str) -> String {
        let mut output = Vec::new();
        Session::new(shelter, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("30").unwrap(), 30);
        assert_eq!(parse_age(" 7 ").unwrap(), 7);
        assert!(matches!(parse_age("thirty"), Err(ShelterError::InvalidAge { .. })));
        assert!(parse_age("-3").is_err());
        assert!(parse_age("").is_err());
    }

    #[test]
    fn test_exit_on_other_input() {
        let mut shelter = Shelter::with_sample_animals();
        let out = run_script(&mut shelter, "q\n");

        assert!(out.starts_with("Welcome to the Pet Adoption System!\n"));
        assert!(out.ends_with("Exiting system.\n"));
    }

    #[test]
    fn test_exit_on_end_of_input() {
        let mut shelter = Shelter::with_sample_animals();
        let out = run_script(&mut shelter, "");
        assert!(out.ends_with("Exiting system.\n"));
    }

    #[test]
    fn test_status_with_no_adoptions() {
        let mut shelter = Shelter::with_sample_animals();
        let out = run_script(&mut shelter, "1\nx\n");
        assert!(out.contains("No adoptions have been completed yet.\n"));
    }

    #[test]
    fn test_successful_request() {
        let mut shelter = Shelter::with_sample_animals();
        let out = run_script(&mut shelter, "2\nJane\n30\ncat\n\ncat01\n1\nx\n");

        assert!(out.contains("Available Cats:\n"));
        assert!(out.contains("ID: cat01, Name: Whiskers, Age: 3, Gender: Female, Adopted: No\n"));
        assert!(!out.contains("dog01"));
        assert!(out.contains("Adoption request for Whiskers is complete.\n"));
        assert!(out.contains("Thank you for adopting a Cat!\n"));
        assert!(out.contains("Adopter: Jane has adopted Whiskers.\n"));

        assert_eq!(shelter.ledger.len(), 1);
        assert_eq!(shelter.ledger.list_all()[0].adopter().preferred_pet, None);
    }

    #[test]
    fn test_invalid_age_aborts_request_only() {
        let mut shelter = Shelter::with_sample_animals();
        let out = run_script(&mut shelter, "2\nJane\nthirty\n1\nx\n");

        assert!(out.contains("Invalid age: 'thirty' is not a whole number.\n"));
        assert!(out.contains("No adoptions have been completed yet.\n"));
        assert!(out.ends_with("Exiting system.\n"));
    }

    #[test]
    fn test_unknown_id() {
        let mut shelter = Shelter::with_sample_animals();
        let out = run_script(&mut shelter, "2\nJane\n30\nDog\nA beagle\ndog99\nx\n");

        assert!(out.contains("Sorry, the selected Dog is not available.\n"));
        assert!(shelter.ledger.is_empty());
    }

    #[test]
    fn test_no_animals_of_species() {
        let catalog = AnimalCatalog::from_animals(vec![Animal::dog(
            "dog01",
            "Buddy",
            5,
            Gender::Male,
            "Labrador",
        )]);
        let mut shelter = Shelter::new(catalog);
        let out = run_script(&mut shelter, "2\nJane\n30\nCAT\n\nx\n");

        assert!(out.contains("Sorry, there are no available Cats for adoption at this time.\n"));
        assert!(!out.contains("Enter the ID"));
    }

    #[test]
    fn test_already_adopted_via_id_from_other_listing() {
        let mut shelter = Shelter::with_sample_animals();
        let script = "2\nJane\n30\ncat\n\ncat01\n2\nSam\n41\ncat\n\ncat01\n1\nx\n";
        let out = run_script(&mut shelter, script);

        // Second request does not list cat01 but the ID is still typed in
        assert!(out.contains("This animal is already adopted.\n"));
        assert_eq!(shelter.ledger.len(), 1);
        assert_eq!(out.matches("Adopter: ").count(), 1);
    }

    #[test]
    fn test_end_of_input_mid_request() {
        let mut shelter = Shelter::with_sample_animals();
        let out = run_script(&mut shelter, "2\nJane\n");

        assert!(out.ends_with("Exiting system.\n"));
        assert!(shelter.ledger.is_empty());
    }
}
