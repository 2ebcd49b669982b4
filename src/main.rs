use anyhow::{Context, Result};
use clap::Parser;
use shelter_registry::cli::{Cli, Commands};
use shelter_registry::{load_roster, logging, AnimalCatalog, Session, Shelter, SpeciesKind};
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let shelter = build_shelter(&cli)?;
    debug!(animals = shelter.catalog.len(), version = shelter_registry::VERSION, "shelter ready");

    match cli.command() {
        Commands::Run => run_menu(shelter)?,
        Commands::List {
            available,
            species,
            json,
        } => run_list(&shelter, available, species, json)?,
        Commands::Browse => run_browse(shelter)?,
    }

    Ok(())
}

fn build_shelter(cli: &Cli) -> Result<Shelter> {
    let catalog = match &cli.roster {
        Some(path) => {
            let animals = load_roster(path)
                .with_context(|| format!("Failed to load roster: {}", path.display()))?;
            AnimalCatalog::from_animals(animals)
        }
        None => AnimalCatalog::with_sample_animals(),
    };

    Ok(Shelter::new(catalog))
}

fn run_menu(mut shelter: Shelter) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(&mut shelter, stdin.lock(), stdout.lock())
        .run()
        .context("Console session failed")?;

    Ok(())
}

fn run_list(
    shelter: &Shelter,
    available: bool,
    species: Option<SpeciesKind>,
    json: bool,
) -> Result<()> {
    let animals: Vec<_> = if available {
        shelter.catalog.list_available()
    } else {
        shelter.catalog.list_all()
    }
    .into_iter()
    .filter(|a| species.map_or(true, |kind| a.kind() == kind))
    .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&animals)?);
    } else {
        for animal in &animals {
            println!("{}", animal.details());
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_browse(shelter: Shelter) -> Result<()> {
    let mut app = shelter_registry::ui::App::new(&shelter);
    shelter_registry::ui::run_ui(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_browse(_shelter: Shelter) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
