//! Apply result types

use serde::{Deserialize, Serialize};

/// Result of applying a rule set to a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyResult {
    /// IDs of the rules whose actions executed, in application order
    pub applied_rules: Vec<String>,

    /// Total discount produced by this pass
    pub total_discount: f64,

    /// Per-rule outcomes, in processing order
    pub outcomes: Vec<RuleOutcome>,
}

/// Outcome of processing one rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Rule ID
    pub rule_id: String,

    /// Whether the condition tree validated
    pub matched: bool,

    /// Discount the rule's actions produced
    pub discount: f64,
}

impl ApplyResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self {
            applied_rules: Vec::new(),
            total_discount: 0.0,
            outcomes: Vec::new(),
        }
    }

    /// Record a rule that matched and executed its actions
    pub fn record_applied(&mut self, rule_id: &str, discount: f64) {
        self.applied_rules.push(rule_id.to_string());
        self.total_discount += discount;
        self.outcomes.push(RuleOutcome {
            rule_id: rule_id.to_string(),
            matched: true,
            discount,
        });
    }

    /// Record a rule whose conditions did not validate
    pub fn record_skipped(&mut self, rule_id: &str) {
        self.outcomes.push(RuleOutcome {
            rule_id: rule_id.to_string(),
            matched: false,
            discount: 0.0,
        });
    }

    /// Whether any rule applied
    pub fn any_applied(&self) -> bool {
        !self.applied_rules.is_empty()
    }
}

impl Default for ApplyResult {
    fn default() -> Self {
        Self::new()
    }
}
