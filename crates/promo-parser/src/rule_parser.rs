//! Rule parser
//!
//! Parses serialized rule documents into `Rule` model values. A document
//! holds the rule definition under a top-level `rule:` key; bare rule
//! dictionaries are accepted too. Multi-document YAML (`---` separated)
//! yields one rule per document.

use crate::error::{ParseError, Result};
use crate::raw::{RawDocument, RawRule};
use crate::registry::{ActionRegistry, ConditionRegistry};
use promo_core::{Condition, Rule};
use serde::Deserialize;

/// Rule parser
pub struct RuleParser;

impl RuleParser {
    /// Parse a single rule from YAML with the standard registries
    pub fn parse_yaml(yaml_str: &str) -> Result<Rule> {
        Self::parse_yaml_with(
            yaml_str,
            &ConditionRegistry::standard(),
            &ActionRegistry::standard(),
        )
    }

    /// Parse a single rule from YAML with caller-supplied registries
    pub fn parse_yaml_with(
        yaml_str: &str,
        conditions: &ConditionRegistry,
        actions: &ActionRegistry,
    ) -> Result<Rule> {
        let document: RawDocument = serde_yaml::from_str(yaml_str)?;
        let raw = match document.rule {
            Some(raw) => raw,
            // Bare rule dictionary without the `rule:` wrapper
            None => serde_yaml::from_str::<RawRule>(yaml_str)?,
        };
        Self::from_raw(raw, conditions, actions)
    }

    /// Parse a single rule from JSON with the standard registries
    pub fn parse_json(json_str: &str) -> Result<Rule> {
        Self::parse_json_with(
            json_str,
            &ConditionRegistry::standard(),
            &ActionRegistry::standard(),
        )
    }

    /// Parse a single rule from JSON with caller-supplied registries
    pub fn parse_json_with(
        json_str: &str,
        conditions: &ConditionRegistry,
        actions: &ActionRegistry,
    ) -> Result<Rule> {
        let document: RawDocument = serde_json::from_str(json_str)?;
        let raw = match document.rule {
            Some(raw) => raw,
            None => serde_json::from_str::<RawRule>(json_str)?,
        };
        Self::from_raw(raw, conditions, actions)
    }

    /// Parse every rule out of a multi-document YAML string
    ///
    /// Documents without a `rule:` key are skipped, so rule files can sit
    /// next to other configuration in the same stream.
    pub fn parse_multi_document(yaml_str: &str) -> Result<Vec<Rule>> {
        Self::parse_multi_document_with(
            yaml_str,
            &ConditionRegistry::standard(),
            &ActionRegistry::standard(),
        )
    }

    /// Multi-document parse with caller-supplied registries
    pub fn parse_multi_document_with(
        yaml_str: &str,
        conditions: &ConditionRegistry,
        actions: &ActionRegistry,
    ) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();

        for document in serde_yaml::Deserializer::from_str(yaml_str) {
            let document = RawDocument::deserialize(document)
                .map_err(|e| ParseError::ParseError(e.to_string()))?;
            if let Some(raw) = document.rule {
                rules.push(Self::from_raw(raw, conditions, actions)?);
            }
        }

        Ok(rules)
    }

    /// Turn a raw rule into the typed model, resolving condition and
    /// action nodes through the registries
    fn from_raw(
        raw: RawRule,
        conditions: &ConditionRegistry,
        actions: &ActionRegistry,
    ) -> Result<Rule> {
        if raw.id.trim().is_empty() {
            return Err(ParseError::InvalidValue {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if let (Some(from), Some(to)) = (raw.from_date, raw.to_date) {
            if from > to {
                return Err(ParseError::InvalidValue {
                    field: "from_date".to_string(),
                    message: format!("window is inverted: {} > {}", from, to),
                });
            }
        }

        let condition_tree = match &raw.conditions {
            Some(raw_condition) => conditions.build(raw_condition)?,
            None => Condition::default(),
        };

        let action_list = raw
            .actions
            .iter()
            .map(|raw_action| actions.build(raw_action))
            .collect::<Result<Vec<_>>>()?;

        let name = raw.name.unwrap_or_else(|| raw.id.clone());

        let mut rule = Rule::new(raw.id, name)
            .with_conditions(condition_tree)
            .with_window(raw.from_date, raw.to_date)
            .with_sort_order(raw.sort_order.unwrap_or(0));

        if let Some(description) = raw.description {
            rule = rule.with_description(description);
        }
        rule.active = raw.active.unwrap_or(true);
        rule.stop_processing = raw.stop_processing.unwrap_or(false);
        rule.actions = action_list;

        log::debug!(
            "parsed rule '{}' ({} leaves, {} actions)",
            rule.id,
            rule.conditions.leaf_count(),
            rule.actions.len()
        );

        Ok(rule)
    }
}
