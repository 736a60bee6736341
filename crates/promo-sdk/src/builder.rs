//! Builder pattern for PromoEngine

use crate::config::EngineConfig;
use crate::engine::PromoEngine;
use crate::error::{Result, SdkError};
use crate::validator::validate_rule_set;
use promo_core::Rule;
use promo_parser::{ActionRegistry, ConditionRegistry, RuleParser};
use std::path::PathBuf;

/// Builder for [`PromoEngine`]
///
/// # Example
///
/// ```rust,ignore
/// use promo_sdk::PromoEngineBuilder;
///
/// let engine = PromoEngineBuilder::new()
///     .add_rule_file("rules/cart_rules.yaml")
///     .build()?;
/// ```
pub struct PromoEngineBuilder {
    config: EngineConfig,
    conditions: ConditionRegistry,
    actions: ActionRegistry,
}

impl PromoEngineBuilder {
    /// Create a new builder with the standard registries
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            conditions: ConditionRegistry::standard(),
            actions: ActionRegistry::standard(),
        }
    }

    /// Create a builder from an existing configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            conditions: ConditionRegistry::standard(),
            actions: ActionRegistry::standard(),
        }
    }

    /// Add a rule file
    pub fn add_rule_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rule_files.push(path.into());
        self
    }

    /// Add multiple rule files
    pub fn add_rule_files(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.rule_files.extend(paths);
        self
    }

    /// Add rule content directly (alternative to a file path)
    ///
    /// # Arguments
    /// * `id` - Identifier used in error messages (e.g., a logical name)
    /// * `content` - YAML content holding one or more rule documents
    pub fn add_rule_content(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.config.rule_contents.push((id.into(), content.into()));
        self
    }

    /// Replace the condition registry (after registering custom kinds)
    pub fn with_condition_registry(mut self, registry: ConditionRegistry) -> Self {
        self.conditions = registry;
        self
    }

    /// Replace the action registry (after registering custom kinds)
    pub fn with_action_registry(mut self, registry: ActionRegistry) -> Self {
        self.actions = registry;
        self
    }

    /// Set the maximum accepted condition tree depth
    pub fn with_max_condition_depth(mut self, depth: usize) -> Self {
        self.config.max_condition_depth = depth;
        self
    }

    /// Load every configured source, validate the rule set, and build
    /// the engine
    pub fn build(self) -> Result<PromoEngine> {
        let mut rules: Vec<Rule> = Vec::new();

        for path in &self.config.rule_files {
            let content = std::fs::read_to_string(path)?;
            let parsed =
                RuleParser::parse_multi_document_with(&content, &self.conditions, &self.actions)?;
            if parsed.is_empty() {
                return Err(SdkError::InvalidRuleFile(format!(
                    "no rule documents in {}",
                    path.display()
                )));
            }
            tracing::debug!(file = %path.display(), count = parsed.len(), "loaded rule file");
            rules.extend(parsed);
        }

        for (id, content) in &self.config.rule_contents {
            let parsed =
                RuleParser::parse_multi_document_with(content, &self.conditions, &self.actions)?;
            if parsed.is_empty() {
                return Err(SdkError::InvalidRuleFile(format!(
                    "no rule documents in inline content '{}'",
                    id
                )));
            }
            rules.extend(parsed);
        }

        validate_rule_set(&rules, self.config.max_condition_depth)?;

        tracing::info!(rules = rules.len(), "promo engine built");
        Ok(PromoEngine::from_parts(rules, self.config))
    }
}

impl Default for PromoEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
