//! Player preferences
//!
//! Only the chosen username and difficulty survive between sessions.
//! LocalStorage on the web, a JSON file on native builds.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Preferences {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bug_swat_preferences";

    /// Set the username, trimming surrounding whitespace
    pub fn set_username(&mut self, username: &str) {
        self.username = username.trim().to_string();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// A round can only be started once a name is chosen
    pub fn is_ready(&self) -> bool {
        !self.username.is_empty()
    }

    /// Load preferences from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(prefs) = serde_json::from_str(&json) {
                    log::info!("Loaded preferences from LocalStorage");
                    return prefs;
                }
            }
        }

        log::info!("Using default preferences");
        Self::default()
    }

    /// Save preferences to LocalStorage (WASM only). Returns true when stored.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> bool {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, preferences not saved");
            return false;
        };
        match serde_json::to_string(self) {
            Ok(json) => report_saved(&storage.set_item(Self::STORAGE_KEY, &json)),
            Err(e) => report_saved(&Err(e)),
        }
    }

    /// Load preferences from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(prefs) => {
                    log::info!("Loaded preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable preferences {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default preferences");
                Self::default()
            }
        }
    }

    /// Save preferences to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let outcome = std::fs::write(path, json);
        report_saved(&outcome);
        outcome.map_err(Into::into)
    }
}

/// Log the outcome of a preferences write
fn report_saved<E: std::fmt::Debug>(outcome: &Result<(), E>) -> bool {
    match outcome {
        Ok(()) => {
            log::info!("Preferences saved");
            true
        }
        Err(e) => {
            log::warn!("Failed to save preferences: {e:?}");
            false
        }
    }
}
