use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::model::{OrderLine, WineEntry};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Column names of a record set's CSV artifact, used to keep the header
/// row present even when the table is empty.
pub trait CsvSchema {
    const HEADERS: &'static [&'static str];
}

impl CsvSchema for WineEntry {
    const HEADERS: &'static [&'static str] = &["Wijnnaam", "Prijs"];
}

impl CsvSchema for OrderLine {
    const HEADERS: &'static [&'static str] = &["Naam", "Wijnnaam", "Aantal", "Prijs_per_stuk"];
}

/// Decodes CSV bytes into typed records. Field types are checked here, at
/// the storage boundary; a malformed row fails the whole load.
pub fn decode_records<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Loads a record set. A missing artifact is the empty table, not an error.
pub fn read_records<T, S>(storage: &S, name: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: Storage,
{
    let Some(bytes) = storage.read_file(name)? else {
        tracing::debug!("{} not found, starting with an empty table", name);
        return Ok(Vec::new());
    };
    decode_records(&bytes)
}

/// Overwrites the whole artifact with `rows`, header row included.
pub fn write_records<T, S>(storage: &S, name: &str, rows: &[T]) -> Result<()>
where
    T: Serialize + CsvSchema,
    S: Storage,
{
    let mut bytes = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut bytes);
        if rows.is_empty() {
            writer.write_record(T::HEADERS)?;
        }
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    storage.write_file(name, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::MemoryStorage;
    use crate::utils::error::AppError;

    fn sample_wines() -> Vec<WineEntry> {
        vec![
            WineEntry {
                name: "Merlot".to_string(),
                price: 10.0,
            },
            WineEntry {
                name: "Shiraz".to_string(),
                price: 12.5,
            },
        ]
    }

    #[test]
    fn wine_table_round_trips() {
        let storage = MemoryStorage::new();
        let wines = sample_wines();

        write_records(&storage, "wijnen.csv", &wines).unwrap();
        let loaded: Vec<WineEntry> = read_records(&storage, "wijnen.csv").unwrap();

        assert_eq!(loaded, wines);
    }

    #[test]
    fn order_table_round_trips() {
        let storage = MemoryStorage::new();
        let orders = vec![OrderLine {
            person: "Alice".to_string(),
            wine: "Merlot".to_string(),
            quantity: 2,
            unit_price: 10.0,
        }];

        write_records(&storage, "orders.csv", &orders).unwrap();
        let loaded: Vec<OrderLine> = read_records(&storage, "orders.csv").unwrap();

        assert_eq!(loaded, orders);
    }

    #[test]
    fn empty_table_keeps_its_header_row() {
        let storage = MemoryStorage::new();
        let empty: Vec<WineEntry> = Vec::new();

        write_records(&storage, "wijnen.csv", &empty).unwrap();

        let raw = storage.raw("wijnen.csv").unwrap();
        assert_eq!(String::from_utf8(raw).unwrap(), "Wijnnaam,Prijs\n");

        let loaded: Vec<WineEntry> = read_records(&storage, "wijnen.csv").unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn missing_artifact_reads_as_empty_table() {
        let storage = MemoryStorage::new();
        let loaded: Vec<OrderLine> = read_records(&storage, "nergens.csv").unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_row_fails_the_load() {
        let storage = MemoryStorage::new();
        storage
            .write_file("wijnen.csv", b"Wijnnaam,Prijs\nMerlot,veel\n")
            .unwrap();

        let result: Result<Vec<WineEntry>> = read_records(&storage, "wijnen.csv");
        assert!(matches!(result, Err(AppError::CsvError(_))));
    }

    #[test]
    fn serialized_headers_match_the_declared_schema() {
        let storage = MemoryStorage::new();
        write_records(&storage, "wijnen.csv", &sample_wines()).unwrap();

        let raw = String::from_utf8(storage.raw("wijnen.csv").unwrap()).unwrap();
        assert!(raw.starts_with("Wijnnaam,Prijs\n"));
    }
}
