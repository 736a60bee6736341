//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for building a [`PromoEngine`](crate::PromoEngine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rule files to load (multi-document YAML)
    #[serde(default)]
    pub rule_files: Vec<PathBuf>,

    /// Inline rule contents: `(id, yaml)` pairs, loaded after the files
    #[serde(skip)]
    pub rule_contents: Vec<(String, String)>,

    /// Maximum condition tree depth accepted at build time
    #[serde(default = "default_max_condition_depth")]
    pub max_condition_depth: usize,
}

fn default_max_condition_depth() -> usize {
    16
}

impl EngineConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            rule_files: Vec::new(),
            rule_contents: Vec::new(),
            max_condition_depth: default_max_condition_depth(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
