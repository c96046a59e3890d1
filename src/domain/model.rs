use serde::{Deserialize, Serialize};

/// Catalog row: a wine and its current bottle price.
///
/// Serde renames map onto the column names of the persisted CSV artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineEntry {
    #[serde(rename = "Wijnnaam")]
    pub name: String,
    #[serde(rename = "Prijs")]
    pub price: f64,
}

/// One line of the order log.
///
/// `unit_price` is the catalog price captured at entry time. Later catalog
/// edits never touch it, and the referenced wine may no longer exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "Naam")]
    pub person: String,
    #[serde(rename = "Wijnnaam")]
    pub wine: String,
    #[serde(rename = "Aantal")]
    pub quantity: u32,
    #[serde(rename = "Prijs_per_stuk")]
    pub unit_price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Aggregated bottles and amount for a single person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonTotal {
    pub name: String,
    pub bottles: u32,
    pub amount: f64,
}

/// Group-level view over the whole order log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TastingSummary {
    pub per_person: Vec<PersonTotal>,
    pub total_bottles: u32,
    pub total_amount: f64,
    pub free_bottles: u32,
}
