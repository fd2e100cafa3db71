//! Internationalization (i18n) module for bilingual support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Closed `Language` enum validated against the registry
//! - `store`: Persisted key-value storage (memory and JSON file backends)
//! - `state`: The selected language, read once from the store and written only
//!   through its setter
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_site::i18n::{Language, LanguageState, MemoryStore};
//!
//! let state = LanguageState::initialize(MemoryStore::new());
//! assert_eq!(state.current(), Language::English);
//!
//! state.set_language(Language::Spanish)?;
//! ```

mod language;
mod registry;
mod state;
mod store;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use state::{LanguageState, LANGUAGE_STORAGE_KEY};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
