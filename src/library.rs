//! Saved tone guides and the stored credential.
//!
//! All saved records live in one JSON object under [`SAVED_KEY`], keyed by
//! brand name. Writes are read-modify-write with last-write-wins semantics.

use crate::error::StorageResult;
use crate::record::{BrandToneRecord, SavedRecord};
use crate::storage::KeyValueStore;
use std::collections::BTreeMap;
use tracing::{info, warn};

pub const SAVED_KEY: &str = "brand_tone_trainer_saved";
pub const CREDENTIAL_KEY: &str = "brand_tone_trainer_api_key";

pub type SavedBrands = BTreeMap<String, SavedRecord>;

pub struct BrandLibrary {
    store: Box<dyn KeyValueStore>,
}

impl BrandLibrary {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Every saved record. Unreadable or corrupt state reads as empty.
    pub fn saved_brands(&self) -> SavedBrands {
        let raw = match self.store.get(SAVED_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SavedBrands::new(),
            Err(e) => {
                warn!("Failed to read saved brands: {}", e);
                return SavedBrands::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Discarding unreadable saved brands: {}", e);
            SavedBrands::new()
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.saved_brands().into_keys().collect()
    }

    /// Saves `record` under its brand, replacing any earlier entry.
    pub fn save(&mut self, record: &BrandToneRecord) -> StorageResult<()> {
        let mut saved = self.saved_brands();
        saved.insert(record.brand.clone(), SavedRecord::new(record.clone()));
        self.write(&saved)?;
        info!("Saved tone guide for {}", record.brand);
        Ok(())
    }

    pub fn load(&self, name: &str) -> Option<BrandToneRecord> {
        self.saved_brands().remove(name).map(|saved| saved.record)
    }

    /// Removes the entry for `name`, reporting whether one existed.
    pub fn delete(&mut self, name: &str) -> StorageResult<bool> {
        let mut saved = self.saved_brands();
        if saved.remove(name).is_none() {
            return Ok(false);
        }
        self.write(&saved)?;
        info!("Deleted tone guide for {}", name);
        Ok(true)
    }

    fn write(&mut self, saved: &SavedBrands) -> StorageResult<()> {
        let raw = serde_json::to_string(saved)?;
        self.store.set(SAVED_KEY, &raw)
    }

    pub fn stored_credential(&self) -> Option<String> {
        match self.store.get(CREDENTIAL_KEY) {
            Ok(value) => value.filter(|key| !key.is_empty()),
            Err(e) => {
                warn!("Failed to read stored API key: {}", e);
                None
            }
        }
    }

    /// Stores a non-empty key; an empty one clears the stored key.
    pub fn persist_credential(&mut self, key: &str) -> StorageResult<()> {
        let key = key.trim();
        if key.is_empty() {
            self.store.remove(CREDENTIAL_KEY)
        } else {
            self.store.set(CREDENTIAL_KEY, key)
        }
    }
}
