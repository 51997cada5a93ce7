use anyhow::{bail, Result};
use crate::api::GeminiClient;
use crate::config::Config;
use crate::fallback::generate_fallback;
use crate::library::BrandLibrary;
use crate::record::BrandToneRecord;
use crate::storage::{FileStore, KeyValueStore};
use tracing::{info, warn};

/// Where a generated record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub record: BrandToneRecord,
    pub source: Source,
    /// Set when the remote call failed and templates were used instead.
    pub advisory: Option<String>,
}

pub struct App {
    pub config: Config,
    pub api_client: GeminiClient,
    pub library: BrandLibrary,
    /// Most recently generated or loaded record. Last writer wins.
    pub current: Option<BrandToneRecord>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let store = FileStore::new(config.storage.dir.clone());
        Self::with_store(config, Box::new(store))
    }

    pub fn with_store(config: Config, store: Box<dyn KeyValueStore>) -> Result<Self> {
        let api_client = GeminiClient::from_config(&config)?;

        Ok(Self {
            config,
            api_client,
            library: BrandLibrary::new(store),
            current: None,
        })
    }

    /// Explicit key if given, then the environment, then the stored key.
    pub fn resolve_credential(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .or_else(|| {
                std::env::var(crate::config::CREDENTIAL_ENV)
                    .ok()
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
            })
            .or_else(|| self.library.stored_credential())
    }

    /// Tries the remote service once, falling back to templates when there is
    /// no credential or the call fails. Always yields a complete record.
    pub async fn generate(&mut self, brand: &str, credential: Option<&str>) -> Result<Generation> {
        let brand = brand.trim();
        if brand.is_empty() {
            bail!("Please enter a brand name");
        }

        let generation = match self.api_client.generate(brand, credential).await {
            Ok(Some(record)) => {
                info!("AI generation successful");
                Generation {
                    record,
                    source: Source::Remote,
                    advisory: None,
                }
            }
            Ok(None) => {
                info!("Using fallback templates");
                Generation {
                    record: generate_fallback(brand),
                    source: Source::Fallback,
                    advisory: None,
                }
            }
            Err(e) => {
                warn!("API call failed, using templates: {}", e);
                Generation {
                    record: generate_fallback(brand),
                    source: Source::Fallback,
                    advisory: Some(format!("⚠️ {}. Using template mode instead.", e)),
                }
            }
        };

        self.current = Some(generation.record.clone());
        Ok(generation)
    }

    /// Persists the current record. Returns `false` when there is none.
    pub fn save_current(&mut self) -> Result<bool> {
        let Some(record) = &self.current else {
            return Ok(false);
        };
        self.library.save(record)?;
        Ok(true)
    }

    pub fn load_saved(&mut self, name: &str) -> Option<&BrandToneRecord> {
        let record = self.library.load(name)?;
        self.current = Some(record);
        self.current.as_ref()
    }

    pub fn delete_saved(&mut self, name: &str) -> Result<bool> {
        let removed = self.library.delete(name)?;
        if self.current.as_ref().is_some_and(|r| r.brand == name) {
            self.current = None;
        }
        Ok(removed)
    }
}
