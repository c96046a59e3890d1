use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "wijnproeverij")]
#[command(about = "Bestelbeheer voor een wijnproeverij")]
pub struct Cli {
    /// Directory met het assortiment en de bestellingen
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Alternatief configuratiebestand (standaard: ./proeverij.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Voeg een bestelling toe
    Bestel {
        /// Naam van de persoon
        naam: String,
        /// Wijn uit het assortiment
        wijn: String,
        /// Aantal flessen
        aantal: u32,
    },
    /// Toon de bestellingen van deze avond
    Bestellingen,
    /// Eindafrekening en korting
    Overzicht {
        /// Schrijf het overzicht als JSON
        #[arg(long)]
        json: bool,
    },
    /// Toon het assortiment
    Wijnen,
    /// Beheer het assortiment
    #[command(subcommand)]
    Wijn(WijnCommand),
    /// Genereer het PDF-rapport
    Rapport {
        /// Schrijf het rapport naar dit pad in plaats van de data directory
        #[arg(long)]
        uitvoer: Option<PathBuf>,
    },
    /// Wis de hele proeverij (nieuwe start)
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum WijnCommand {
    /// Voeg een wijn toe of werk de prijs bij
    Set {
        naam: String,
        prijs: f64,
    },
    /// Verwijder een wijn uit het assortiment
    Verwijder {
        naam: String,
    },
    /// Vervang het hele assortiment door de inhoud van een CSV-bestand
    Vervang {
        bestand: PathBuf,
    },
}
