//! Seed documents for the in-memory stores
//!
//! A seed is a JSON export of both collections in the document store's own
//! field layout: `{ "orders": [...], "members": [...] }`. Records that do not
//! fit the domain types are skipped with a warning; only a document that is
//! not JSON of that shape fails to load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::domain::{Member, Order, StoredRecord};
use crate::error::Result;
use crate::infrastructure::log_messages::configuration as log;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl SeedDocument {
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        info!("{}", log::LOADING_SEED);
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawSeed = serde_json::from_str(text)?;
        Ok(Self {
            orders: keep_valid(raw.orders),
            members: keep_valid(raw.members),
        })
    }
}

#[derive(Deserialize)]
struct RawSeed {
    #[serde(default)]
    orders: Vec<Value>,
    #[serde(default)]
    members: Vec<Value>,
}

fn keep_valid<R: StoredRecord + DeserializeOwned>(documents: Vec<Value>) -> Vec<R> {
    documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| match serde_json::from_value(document) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(collection = R::COLLECTION, index, %error, "{}", log::SKIPPED_RECORD);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const SEED: &str = r#"{
        "orders": [
            { "id": "o1", "store": "A Tea", "date": "2024-06-01", "time": "12:00",
              "participants": { "m1": 2 }, "totalCups": 2, "timestamp": 1717200000000,
              "createdBy": "anon-1" }
        ],
        "members": [ { "id": "m1", "name": "Alice", "active": true } ]
    }"#;

    #[test]
    fn test_seed_documents_parse() {
        let seed = SeedDocument::parse(SEED).unwrap();
        assert_eq!(seed.orders.len(), 1);
        assert_eq!(seed.members[0].name.as_ref(), "Alice");
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let seed = SeedDocument::parse("{}").unwrap();
        assert_eq!(seed, SeedDocument::default());
    }

    #[test]
    fn test_seed_files_are_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, SEED).unwrap();

        let seed = SeedDocument::load(&path).unwrap();
        assert_eq!(seed.orders[0].store.as_ref(), "A Tea");
    }

    #[test]
    fn test_missing_seed_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SeedDocument::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let seed = SeedDocument::parse(
            r#"{
                "orders": [
                    { "id": "o1", "store": "  ", "date": "2024-06-01", "timestamp": 1 },
                    { "id": "o2", "store": "A Tea", "date": "2024-06-01", "totalCups": "3",
                      "timestamp": 2 },
                    { "id": "o3", "store": "A Tea", "date": "2024-06-02", "timestamp": 3 }
                ],
                "members": [
                    { "id": "m1", "name": "" },
                    { "id": "m2", "name": "Bob" }
                ]
            }"#,
        )
        .unwrap();

        let orders: Vec<&str> = seed.orders.iter().map(|o| o.id.as_ref()).collect();
        assert_eq!(orders, vec!["o3"]);
        assert_eq!(seed.members.len(), 1);
        assert_eq!(seed.members[0].name.as_ref(), "Bob");
    }

    #[test]
    fn test_non_json_seed_is_a_serialization_error() {
        let result = SeedDocument::parse("orders: []");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_collections_of_the_wrong_shape_are_a_serialization_error() {
        let result = SeedDocument::parse(r#"{ "orders": { "o1": {} } }"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
