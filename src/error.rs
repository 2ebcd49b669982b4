// ⚠️ Shelter Errors
// Every failure the catalog, ledger and adoption flow can report.
//
// None of these are fatal: the console prints the message and aborts
// the current request, then returns to the menu.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelterError {
    /// The animal's adopted flag is already set
    #[error("This animal is already adopted.")]
    AlreadyAdopted { id: String, name: String },

    /// No catalog entry carries this identifier
    #[error("No animal with ID '{id}' exists in the catalog.")]
    NotFound { id: String },

    /// No animals of the requested species are left
    #[error("Sorry, there are no available {species}s for adoption at this time.")]
    Unavailable { species: String },

    /// Age prompt answered with something that is not a whole number
    #[error("Invalid age: '{input}' is not a whole number.")]
    InvalidAge { input: String },

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShelterError>;

impl ShelterError {
    /// True for errors the console recovers from by aborting the request
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            ShelterError::AlreadyAdopted { .. }
                | ShelterError::NotFound { .. }
                | ShelterError::Unavailable { .. }
                | ShelterError::InvalidAge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_adopted_message() {
        let err = ShelterError::AlreadyAdopted {
            id: "cat01".to_string(),
            name: "Whiskers".to_string(),
        };
        assert_eq!(err.to_string(), "This animal is already adopted.");
        assert!(err.is_request_error());
    }

    #[test]
    fn test_unavailable_message() {
        let err = ShelterError::Unavailable {
            species: "Cat".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sorry, there are no available Cats for adoption at this time."
        );
    }

    #[test]
    fn test_io_error_is_not_request_error() {
        let err: ShelterError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(!err.is_request_error());
        assert!(err.to_string().contains("boom"));
    }
}
