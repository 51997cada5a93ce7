//! Brand tone guide generation: a Gemini-backed generator with a
//! deterministic template fallback, plus persistence of named results.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod fallback;
pub mod hash;
pub mod library;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod record;
pub mod storage;
pub mod templates;

pub use api::GeminiClient;
pub use app::{App, Generation, Source};
pub use error::{ApiError, StorageError};
pub use fallback::generate_fallback;
pub use hash::hash_code;
pub use library::BrandLibrary;
pub use parser::parse_text_response;
pub use prompt::build_prompt;
pub use record::{BrandToneRecord, CopyVariant, ParsedGuide, SavedRecord};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
