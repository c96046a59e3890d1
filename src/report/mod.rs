pub mod pdf;

use chrono::NaiveDate;

use crate::domain::model::{PersonTotal, TastingSummary};

pub const REPORT_TITLE: &str = "Besteloverzicht Wijnproeverij";
pub const REPORT_FILE: &str = "wijn_bestelling.pdf";

/// `<name>: <n> flessen - Totaal: €<amount>` with the amount to two
/// decimals.
pub fn person_line(row: &PersonTotal) -> String {
    format!(
        "{}: {} flessen - Totaal: €{:.2}",
        row.name, row.bottles, row.amount
    )
}

pub fn group_total_line(summary: &TastingSummary) -> String {
    format!("Totaal Groep: {} flessen", summary.total_bottles)
}

pub fn free_bottles_line(summary: &TastingSummary) -> String {
    format!(
        "Gratis flessen verdiend door groep: {}",
        summary.free_bottles
    )
}

pub fn generated_line(generated_on: NaiveDate) -> String {
    format!("Gegenereerd op {}", generated_on.format("%d-%m-%Y"))
}
