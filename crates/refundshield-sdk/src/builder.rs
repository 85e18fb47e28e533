//! Builder pattern for DetectionEngine

use crate::config::EngineConfig;
use crate::detection_engine::DetectionEngine;
use crate::error::{Result, SdkError};
use crate::rules::{Rule, RuleEvaluator};
use refundshield_core::{BankRegistry, PatternStore, ScamPatterns};
use std::path::{Path, PathBuf};
use tracing::info;

/// Builder for DetectionEngine
///
/// # Example
///
/// ```rust,ignore
/// use refundshield_sdk::DetectionEngineBuilder;
///
/// // From a data directory with scam_patterns.json / legitimate_banks.json
/// let engine = DetectionEngineBuilder::new()
///     .with_data_dir("data")
///     .build()
///     .await?;
///
/// // Built-in defaults only
/// let engine = DetectionEngineBuilder::new().build().await?;
/// ```
pub struct DetectionEngineBuilder {
    config: EngineConfig,
    patterns: Option<ScamPatterns>,
    banks: Option<BankRegistry>,
    extra_rules: Vec<Box<dyn Rule>>,
}

impl DetectionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            patterns: None,
            banks: None,
            extra_rules: Vec::new(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Directory holding the pattern documents
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = Some(dir.into());
        self
    }

    /// Explicit keyword document
    pub fn with_patterns_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.patterns_file = Some(path.into());
        self
    }

    /// Explicit bank registry document
    pub fn with_banks_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.banks_file = Some(path.into());
        self
    }

    /// Use these keyword lists instead of loading a document
    pub fn with_patterns(mut self, patterns: ScamPatterns) -> Self {
        self.patterns = Some(patterns);
        self
    }

    /// Use this bank registry instead of loading a document
    pub fn with_bank_registry(mut self, banks: BankRegistry) -> Self {
        self.banks = Some(banks);
        self
    }

    /// Append a rule after the built-in ones
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.extra_rules.push(rule);
        self
    }

    /// Build the detection engine
    ///
    /// A configured document that does not exist falls back to the built-in
    /// defaults. A document that exists but cannot be read or parsed is an error.
    pub async fn build(self) -> Result<DetectionEngine> {
        if let Some(dir) = &self.config.data_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(SdkError::ConfigError(format!(
                    "data dir {} is not a directory",
                    dir.display()
                )));
            }
        }

        let patterns = match self.patterns {
            Some(patterns) => patterns,
            None => match self.config.patterns_path() {
                Some(path) => match read_document(&path).await? {
                    Some(content) => {
                        info!("Loaded scam patterns from {}", path.display());
                        ScamPatterns::from_json(&content)?
                    }
                    None => {
                        info!("{} not found, using built-in scam patterns", path.display());
                        ScamPatterns::default()
                    }
                },
                None => ScamPatterns::default(),
            },
        };

        let banks = match self.banks {
            Some(banks) => banks,
            None => match self.config.banks_path() {
                Some(path) => match read_document(&path).await? {
                    Some(content) => {
                        info!("Loaded bank registry from {}", path.display());
                        BankRegistry::from_json(&content)?
                    }
                    None => {
                        info!("{} not found, using built-in bank registry", path.display());
                        BankRegistry::default()
                    }
                },
                None => BankRegistry::default(),
            },
        };

        let mut evaluator = RuleEvaluator::new();
        for rule in self.extra_rules {
            evaluator.push(rule);
        }

        Ok(DetectionEngine::with_evaluator(
            PatternStore::new(patterns, banks),
            evaluator,
        ))
    }
}

impl Default for DetectionEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a document, `None` if the file does not exist
async fn read_document(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
