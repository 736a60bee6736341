//! Rule set validation
//!
//! Structural checks run once at build time, before the engine accepts
//! traffic: duplicate ids and runaway condition trees are configuration
//! bugs, not conditions to discover during pricing.

use crate::error::{Result, SdkError};
use promo_core::Rule;
use std::collections::HashSet;

/// Validate a parsed rule set against the configured limits
pub fn validate_rule_set(rules: &[Rule], max_condition_depth: usize) -> Result<()> {
    if rules.is_empty() {
        return Err(SdkError::InvalidRuleSet(
            "no rules were loaded".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.id.as_str()) {
            return Err(SdkError::InvalidRuleSet(format!(
                "duplicate rule id '{}'",
                rule.id
            )));
        }

        let depth = rule.conditions.max_depth();
        if depth > max_condition_depth {
            return Err(SdkError::InvalidRuleSet(format!(
                "rule '{}' condition tree depth {} exceeds limit {}",
                rule.id, depth, max_condition_depth
            )));
        }
    }

    Ok(())
}
