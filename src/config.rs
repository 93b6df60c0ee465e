//! Board Configuration
//!
//! Compile-time defaults; the app has no settings UI.

use tracing::Level;

/// Local storage key for the item list
pub const STORAGE_KEY: &str = "to-do list";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Key the item list is saved under
    pub storage_key: String,
    /// Start from the starter list when nothing is saved
    pub seed_on_empty: bool,
    /// Most verbose level sent to the browser console
    pub log_level: Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            seed_on_empty: true,
            log_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
        }
    }
}
