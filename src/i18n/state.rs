//! Language State: the user's selected language, backed by a persisted store.
//!
//! A `LanguageState` can only be obtained through [`LanguageState::initialize`],
//! which performs the single read of the persisted value. Consumers receive
//! it explicitly rather than through a global, so reading the language before
//! initialization cannot compile.

use crate::i18n::store::{PreferenceStore, StoreError};
use crate::i18n::Language;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Key under which the selected language code is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

pub struct LanguageState {
    current: RwLock<Language>,
    store: Box<dyn PreferenceStore>,
}

impl LanguageState {
    /// Read the persisted language once and build the state.
    ///
    /// An absent, unknown, or unreadable stored value falls back to the
    /// primary language.
    pub fn initialize(store: impl PreferenceStore + 'static) -> Self {
        let current = match store.load(LANGUAGE_STORAGE_KEY) {
            Ok(Some(code)) => match Language::from_code(&code) {
                Ok(language) => language,
                Err(e) => {
                    warn!("Ignoring persisted language: {}", e);
                    Language::primary()
                }
            },
            Ok(None) => {
                debug!("No persisted language, using primary");
                Language::primary()
            }
            Err(e) => {
                warn!("Failed to read persisted language, using primary: {}", e);
                Language::primary()
            }
        };

        debug!(language = current.code(), "Language state initialized");

        Self {
            current: RwLock::new(current),
            store: Box::new(store),
        }
    }

    /// The currently selected language.
    pub fn current(&self) -> Language {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select `next` and persist it.
    ///
    /// The write lock is held across the store write, so readers see either
    /// the old language or the new one, and never a state where memory and
    /// store disagree. When the store write fails the selection is unchanged.
    pub fn set_language(&self, next: Language) -> Result<(), StoreError> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        self.store.save(LANGUAGE_STORAGE_KEY, next.code())?;

        if *current != next {
            info!(from = current.code(), to = next.code(), "Language changed");
        }
        *current = next;
        Ok(())
    }

    /// Switch to the other language and return it.
    pub fn toggle(&self) -> Result<Language, StoreError> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = current.other();
        self.store.save(LANGUAGE_STORAGE_KEY, next.code())?;

        info!(from = current.code(), to = next.code(), "Language toggled");
        *current = next;
        Ok(next)
    }
}

impl std::fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageState")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::store::MemoryStore;

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(Some("es".to_string()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    /// Store whose reads always fail
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_initialize_without_stored_value_uses_primary() {
        let state = LanguageState::initialize(MemoryStore::new());
        assert_eq!(state.current(), Language::English);
    }

    #[test]
    fn test_initialize_adopts_stored_language() {
        for language in Language::ALL {
            let store = MemoryStore::with_entry(LANGUAGE_STORAGE_KEY, language.code());
            let state = LanguageState::initialize(store);
            assert_eq!(state.current(), language);
        }
    }

    #[test]
    fn test_initialize_ignores_invalid_stored_value() {
        for invalid in ["fr", "", "EN", "english", " es"] {
            let store = MemoryStore::with_entry(LANGUAGE_STORAGE_KEY, invalid);
            let state = LanguageState::initialize(store);
            assert_eq!(state.current(), Language::English, "stored {:?}", invalid);
        }
    }

    #[test]
    fn test_initialize_survives_store_read_failure() {
        let state = LanguageState::initialize(BrokenStore);
        assert_eq!(state.current(), Language::English);
    }

    // ==================== Setter Tests ====================

    #[test]
    fn test_set_language_updates_memory_and_store() {
        let store = MemoryStore::new();
        let state = LanguageState::initialize(store.clone());

        state.set_language(Language::Spanish).unwrap();

        assert_eq!(state.current(), Language::Spanish);
        assert_eq!(
            store.load(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
            Some("es")
        );
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let store = MemoryStore::new();
        let state = LanguageState::initialize(store.clone());

        state.set_language(Language::Spanish).unwrap();
        state.set_language(Language::Spanish).unwrap();

        assert_eq!(state.current(), Language::Spanish);
        assert_eq!(
            store.load(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
            Some("es")
        );
    }

    #[test]
    fn test_set_language_failure_leaves_state_unchanged() {
        let state = LanguageState::initialize(ReadOnlyStore);
        assert_eq!(state.current(), Language::Spanish);

        assert!(state.set_language(Language::English).is_err());
        assert_eq!(state.current(), Language::Spanish);
    }

    #[test]
    fn test_toggle_switches_and_persists() {
        let store = MemoryStore::new();
        let state = LanguageState::initialize(store.clone());

        assert_eq!(state.toggle().unwrap(), Language::Spanish);
        assert_eq!(state.toggle().unwrap(), Language::English);
        assert_eq!(
            store.load(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
            Some("en")
        );
    }

    // ==================== Concurrency Tests ====================

    #[test]
    fn test_concurrent_setters_leave_memory_and_store_in_agreement() {
        for _ in 0..20 {
            let store = MemoryStore::new();
            let state = LanguageState::initialize(store.clone());
            let (state, store) = (&state, &store);

            std::thread::scope(|scope| {
                for writer in 0..4 {
                    scope.spawn(move || {
                        for i in 0..100 {
                            let next = if (i + writer) % 2 == 0 {
                                Language::Spanish
                            } else {
                                Language::English
                            };
                            state.set_language(next).unwrap();
                        }
                    });
                }
                for _ in 0..4 {
                    scope.spawn(move || {
                        for _ in 0..400 {
                            assert!(Language::ALL.contains(&state.current()));
                        }
                    });
                }
            });

            assert_eq!(
                store.load(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
                Some(state.current().code())
            );
        }
    }

    #[test]
    fn test_each_set_is_observed_in_memory_and_store() {
        let store = MemoryStore::new();
        let state = LanguageState::initialize(store.clone());
        let (state, store) = (&state, &store);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(move || {
                    for _ in 0..400 {
                        let _ = state.current();
                    }
                });
            }
            scope.spawn(move || {
                for i in 0..200 {
                    let next = if i % 2 == 0 {
                        Language::Spanish
                    } else {
                        Language::English
                    };
                    state.set_language(next).unwrap();
                    assert_eq!(state.current(), next);
                    assert_eq!(
                        store.load(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
                        Some(next.code())
                    );
                }
            });
        });
    }

    #[test]
    fn test_debug_shows_current_language() {
        let state = LanguageState::initialize(MemoryStore::new());
        assert!(format!("{:?}", state).contains("English"));
    }
}
