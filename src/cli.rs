use crate::entities::SpeciesKind;
use crate::logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shelter: adoption record keeping for a small animal shelter
#[derive(Parser, Debug)]
#[command(name = "shelter")]
#[command(version)]
#[command(about = "Track adoptable animals and completed adoptions")]
pub struct Cli {
    /// JSON roster to populate the catalog from (default: built-in sample animals)
    #[arg(long, global = true)]
    pub roster: Option<PathBuf>,

    /// Log level for stderr diagnostics (RUST_LOG overrides)
    #[arg(long, global = true, default_value = logging::DEFAULT_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Interactive adoption menu (default)
    Run,

    /// Print the catalog and exit
    List {
        /// Only animals that have not been adopted
        #[arg(short, long)]
        available: bool,

        /// Only one species (cat or dog)
        #[arg(short, long)]
        species: Option<SpeciesKind>,

        /// Print JSON instead of detail lines
        #[arg(long)]
        json: bool,
    },

    /// Browse the catalog in a terminal UI
    Browse,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_run() {
        let cli = Cli::try_parse_from(["shelter"]).unwrap();
        assert_eq!(cli.command(), Commands::Run);
        assert_eq!(cli.log_level, "warn");
        assert!(cli.roster.is_none());
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::try_parse_from([
            "shelter", "list", "--available", "--species", "Cat", "--roster", "pets.json",
        ])
        .unwrap();

        assert_eq!(
            cli.command(),
            Commands::List {
                available: true,
                species: Some(SpeciesKind::Cat),
                json: false,
            }
        );
        assert_eq!(cli.roster, Some(PathBuf::from("pets.json")));
    }

    #[test]
    fn test_unknown_species_rejected() {
        assert!(Cli::try_parse_from(["shelter", "list", "--species", "ferret"]).is_err());
    }
}
