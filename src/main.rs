use std::fs;

use anyhow::Context;
use clap::Parser;

use wijnproeverij::config::{AppConfig, FileConfig};
use wijnproeverij::core::store;
use wijnproeverij::report::pdf;
use wijnproeverij::utils::logger;
use wijnproeverij::{
    AppError, Cli, Command, LocalStorage, Storage, Tasting, TastingSummary, WijnCommand,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)
            .with_context(|| format!("kan configuratie {} niet lezen", path.display()))?,
        None => FileConfig::load_default()?,
    };
    let config = AppConfig::resolve(file_config, cli.data_dir.clone());
    tracing::debug!("data directory: {}", config.data_dir.display());

    let storage = LocalStorage::new(config.data_dir.clone());
    let mut tasting = Tasting::open(storage.clone(), config.tasting_files())?;

    match cli.command {
        Command::Bestel { naam, wijn, aantal } => {
            match tasting.add_order(&naam, &wijn, aantal) {
                Ok(line) => println!(
                    "✅ Toegevoegd: {}x {} voor {}",
                    line.quantity, line.wine, line.person
                ),
                Err(AppError::EmptyCatalog) => {
                    eprintln!("⚠️  Voeg eerst wijnen toe met 'wijnproeverij wijn set <naam> <prijs>'.");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Bestellingen => print_orders(&tasting),
        Command::Overzicht { json } => {
            let summary = tasting.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Command::Wijnen => print_catalog(&tasting),
        Command::Wijn(cmd) => {
            match cmd {
                WijnCommand::Set { naam, prijs } => tasting.set_wine(&naam, prijs)?,
                WijnCommand::Verwijder { naam } => tasting.remove_wine(&naam)?,
                WijnCommand::Vervang { bestand } => {
                    let raw = fs::read(&bestand)
                        .with_context(|| format!("kan {} niet lezen", bestand.display()))?;
                    tasting.apply_edits(store::decode_records(&raw)?)?;
                }
            }
            println!("💾 Wijnlijst bijgewerkt!");
        }
        Command::Rapport { uitvoer } => {
            let summary = tasting.summary();
            let generated_on = chrono::Local::now().date_naive();
            let bytes = pdf::render(&summary, generated_on)?;
            let shown = match uitvoer {
                Some(path) => {
                    fs::write(&path, &bytes)
                        .with_context(|| format!("kan {} niet schrijven", path.display()))?;
                    path
                }
                None => {
                    storage.write_file(&config.report_file, &bytes)?;
                    config.data_dir.join(&config.report_file)
                }
            };
            println!("📄 Rapport opgeslagen als {}", shown.display());
        }
        Command::Reset => {
            tasting.reset()?;
            println!("🗑️  Proeverij gewist, klaar voor een nieuwe start.");
        }
    }

    Ok(())
}

fn print_catalog(tasting: &Tasting<LocalStorage>) {
    if tasting.catalog().is_empty() {
        println!("Het assortiment is nog leeg.");
        return;
    }
    println!("{:<24} {:>10}", "Wijnnaam", "Prijs");
    for entry in tasting.catalog() {
        println!("{:<24} {:>10}", entry.name, format!("€ {:.2}", entry.price));
    }
}

fn print_orders(tasting: &Tasting<LocalStorage>) {
    if tasting.orders().is_empty() {
        println!("Nog geen bestellingen ingevoerd.");
        return;
    }
    println!(
        "{:<20} {:<24} {:>7} {:>12}",
        "Naam", "Wijnnaam", "Aantal", "Prijs p/st"
    );
    for line in tasting.orders() {
        println!(
            "{:<20} {:<24} {:>7} {:>12}",
            line.person,
            line.wine,
            line.quantity,
            format!("€ {:.2}", line.unit_price)
        );
    }
}

fn print_summary(summary: &TastingSummary) {
    if summary.per_person.is_empty() {
        println!("Nog geen bestellingen ingevoerd.");
        return;
    }
    println!("Totaal bestelde flessen: {}", summary.total_bottles);
    println!("🎁 Gratis flessen verdiend: {}", summary.free_bottles);
    println!("Totaalbedrag Groep: € {:.2}", summary.total_amount);
    println!();
    println!("Overzicht per persoon:");
    for row in &summary.per_person {
        println!(
            "  {:<20} {:>3} flessen  € {:>8.2}",
            row.name, row.bottles, row.amount
        );
    }
}
