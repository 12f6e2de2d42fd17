//! Configuration for an adventure sheet store.

use std::path::PathBuf;

/// Key the sheet is saved under.
pub const DEFAULT_STORAGE_KEY: &str = "templo-terror-save";

/// Directory name under the platform data directory.
const APP_DIR: &str = "templo";

/// Configuration for a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Key the record is stored under.
    pub storage_key: String,
    /// RNG seed for reproducible dice; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Directory for file storage; `None` uses the platform data directory.
    pub save_dir: Option<PathBuf>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: None,
            save_dir: None,
        }
    }
}

impl SheetConfig {
    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the save directory.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    /// The directory file storage should use.
    ///
    /// Falls back to the working directory when the platform has no data
    /// directory.
    pub fn resolved_save_dir(&self) -> PathBuf {
        if let Some(dir) = &self.save_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}
