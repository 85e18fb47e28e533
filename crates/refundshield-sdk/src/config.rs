//! Configuration types for DetectionEngine

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the keyword document inside a data directory
pub const PATTERNS_FILE_NAME: &str = "scam_patterns.json";

/// File name of the bank registry document inside a data directory
pub const BANKS_FILE_NAME: &str = "legitimate_banks.json";

/// Where the engine looks for its pattern documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory holding `scam_patterns.json` and `legitimate_banks.json`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Explicit keyword document, overrides `data_dir`
    #[serde(default)]
    pub patterns_file: Option<PathBuf>,

    /// Explicit bank registry document, overrides `data_dir`
    #[serde(default)]
    pub banks_file: Option<PathBuf>,
}

impl EngineConfig {
    /// Create an empty configuration (built-in defaults only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Resolved path of the keyword document, if any
    pub fn patterns_path(&self) -> Option<PathBuf> {
        Self::resolve(&self.patterns_file, &self.data_dir, PATTERNS_FILE_NAME)
    }

    /// Resolved path of the bank registry document, if any
    pub fn banks_path(&self) -> Option<PathBuf> {
        Self::resolve(&self.banks_file, &self.data_dir, BANKS_FILE_NAME)
    }

    fn resolve(explicit: &Option<PathBuf>, dir: &Option<PathBuf>, name: &str) -> Option<PathBuf> {
        explicit
            .clone()
            .or_else(|| dir.as_deref().map(|d: &Path| d.join(name)))
    }
}
