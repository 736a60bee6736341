//! Rule engine
//!
//! Runs a prioritized rule list over a quote: validate each rule's
//! condition tree, execute its actions on match, honor the
//! stop-processing flag. Action errors abort the pass fail-fast; every
//! mutation made up to that point stays on the quote.

use crate::actions;
use crate::context::{EvaluationContext, StoreContext};
use crate::error::Result;
use crate::evaluator::validate;
use crate::pricing::Quote;
use crate::result::ApplyResult;
use promo_core::Rule;

/// A prioritized set of rules ready to apply
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Create an engine; rules are ordered by `(sort_order, id)` once here
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { rules }
    }

    /// The rules in processing order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply the rule set to a quote
    pub fn apply(&self, quote: &mut Quote, store: &StoreContext) -> Result<ApplyResult> {
        let mut result = ApplyResult::new();

        for rule in &self.rules {
            if !rule.is_active_on(store.today) {
                tracing::debug!(rule = %rule.id, "rule inactive or outside window, skipped");
                continue;
            }

            let matched = {
                let ctx = EvaluationContext::for_quote(quote, store);
                validate(&rule.conditions, &ctx)
            };

            if !matched {
                tracing::debug!(rule = %rule.id, "conditions did not validate");
                result.record_skipped(&rule.id);
                continue;
            }

            let before = quote.discount_amount;
            for action in &rule.actions {
                actions::execute(action, quote, store)?;
            }
            let discount = quote.discount_amount - before;

            tracing::info!(rule = %rule.id, discount, "rule applied");
            result.record_applied(&rule.id, discount);

            if rule.stop_processing {
                tracing::debug!(rule = %rule.id, "stop_processing set, halting rule list");
                break;
            }
        }

        Ok(result)
    }
}
