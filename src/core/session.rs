use std::collections::HashSet;

use crate::core::aggregate::aggregate;
use crate::core::store;
use crate::domain::model::{OrderLine, TastingSummary, WineEntry};
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_price, validate_quantity};

pub const WINE_FILE: &str = "mijn_wijnen.csv";
pub const ORDER_FILE: &str = "huidige_proeverij.csv";

/// Artifact names of the two persisted record sets.
#[derive(Debug, Clone)]
pub struct TastingFiles {
    pub wines: String,
    pub orders: String,
}

impl Default for TastingFiles {
    fn default() -> Self {
        Self {
            wines: WINE_FILE.to_string(),
            orders: ORDER_FILE.to_string(),
        }
    }
}

/// One evening's session state: the wine catalog and the order log.
///
/// Both tables are loaded eagerly at construction and written through to
/// storage after every mutation. The session is the single writer to its
/// artifacts; concurrent sessions against the same directory are
/// last-writer-wins.
pub struct Tasting<S: Storage> {
    storage: S,
    files: TastingFiles,
    catalog: Vec<WineEntry>,
    orders: Vec<OrderLine>,
}

impl<S: Storage> Tasting<S> {
    pub fn open(storage: S, files: TastingFiles) -> Result<Self> {
        let catalog = store::read_records(&storage, &files.wines)?;
        let orders = store::read_records(&storage, &files.orders)?;
        tracing::debug!(
            "session opened with {} wines and {} order lines",
            catalog.len(),
            orders.len()
        );
        Ok(Self {
            storage,
            files,
            catalog,
            orders,
        })
    }

    pub fn catalog(&self) -> &[WineEntry] {
        &self.catalog
    }

    pub fn orders(&self) -> &[OrderLine] {
        &self.orders
    }

    /// Appends one order line, snapshotting the wine's current catalog
    /// price into it, and persists the updated log.
    pub fn add_order(&mut self, person: &str, wine: &str, quantity: u32) -> Result<OrderLine> {
        if self.catalog.is_empty() {
            return Err(AppError::EmptyCatalog);
        }
        validate_non_empty_string("person name", person)?;
        validate_quantity("quantity", quantity)?;

        let unit_price = self
            .catalog
            .iter()
            .find(|entry| entry.name == wine)
            .map(|entry| entry.price)
            .ok_or_else(|| AppError::UnknownWine {
                name: wine.to_string(),
            })?;

        let line = OrderLine {
            person: person.to_string(),
            wine: wine.to_string(),
            quantity,
            unit_price,
        };
        self.orders.push(line.clone());
        store::write_records(&self.storage, &self.files.orders, &self.orders)?;

        tracing::info!("order added: {}x {} for {}", quantity, wine, person);
        Ok(line)
    }

    /// Replaces the whole catalog in one operation; insertions, in-place
    /// edits and deletions all arrive as the full edited table.
    ///
    /// Blank names, negative prices and duplicate names are rejected
    /// before anything is persisted. Existing order lines are never
    /// touched by a catalog edit.
    pub fn apply_edits(&mut self, edited: Vec<WineEntry>) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &edited {
            validate_non_empty_string("wine name", &entry.name)?;
            validate_price("price", entry.price)?;
            if !seen.insert(entry.name.as_str()) {
                return Err(AppError::ValidationError {
                    message: format!("duplicate wine name: {}", entry.name),
                });
            }
        }

        self.catalog = edited;
        store::write_records(&self.storage, &self.files.wines, &self.catalog)?;

        tracing::info!("catalog replaced, now {} wines", self.catalog.len());
        Ok(())
    }

    /// Insert-or-update a single wine, expressed as a full-table edit.
    pub fn set_wine(&mut self, name: &str, price: f64) -> Result<()> {
        let mut edited = self.catalog.clone();
        match edited.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.price = price,
            None => edited.push(WineEntry {
                name: name.to_string(),
                price,
            }),
        }
        self.apply_edits(edited)
    }

    /// Remove a single wine. Order lines referencing it keep their
    /// snapshot price.
    pub fn remove_wine(&mut self, name: &str) -> Result<()> {
        let mut edited = self.catalog.clone();
        let before = edited.len();
        edited.retain(|entry| entry.name != name);
        if edited.len() == before {
            return Err(AppError::UnknownWine {
                name: name.to_string(),
            });
        }
        self.apply_edits(edited)
    }

    /// Clears the order log and deletes its artifact entirely. Calling
    /// reset on an already empty tasting is a no-op.
    pub fn reset(&mut self) -> Result<()> {
        self.orders.clear();
        self.storage.remove_file(&self.files.orders)?;
        tracing::info!("tasting reset, order log removed");
        Ok(())
    }

    pub fn summary(&self) -> TastingSummary {
        aggregate(&self.orders)
    }
}
