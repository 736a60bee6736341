//! Condition tree evaluation
//!
//! A post-order walk over the tree: leaves resolve and compare one
//! attribute, combine nodes fold their children with short-circuiting.
//! Leaf failures never propagate: an unresolvable attribute or a
//! comparison error makes that leaf non-matching and the walk continues.

mod compare;

use crate::context::EvaluationContext;
use promo_core::condition::{Aggregator, Combine, Condition, Leaf, Scope};

/// Validate a condition tree against the given context
pub fn validate(condition: &Condition, ctx: &EvaluationContext) -> bool {
    match condition {
        Condition::Combine(combine) => validate_combine(combine, ctx),
        Condition::Leaf(leaf) => validate_leaf(leaf, ctx),
    }
}

fn validate_combine(combine: &Combine, ctx: &EvaluationContext) -> bool {
    // Iterator adapters give both the short-circuit and the empty-list
    // semantics: all([]) is true, any([]) is false, none([]) is true.
    let aggregated = match combine.aggregator {
        Aggregator::All => combine.children.iter().all(|child| validate(child, ctx)),
        Aggregator::Any => combine.children.iter().any(|child| validate(child, ctx)),
        Aggregator::None => !combine.children.iter().any(|child| validate(child, ctx)),
    };

    if combine.negate {
        !aggregated
    } else {
        aggregated
    }
}

fn validate_leaf(leaf: &Leaf, ctx: &EvaluationContext) -> bool {
    // An item-scoped leaf evaluated at cart level matches if any line
    // item satisfies it.
    if matches!(leaf.scope, Scope::Item | Scope::Product) && ctx.current_item().is_none() {
        return ctx
            .quote()
            .items
            .iter()
            .any(|item| validate_leaf(leaf, &ctx.for_item(item)));
    }

    let resolved = match ctx.resolve(leaf.scope, &leaf.attribute) {
        Some(value) => value,
        None => {
            tracing::debug!(
                attribute = %leaf.attribute,
                scope = ?leaf.scope,
                "attribute not resolvable, leaf does not match"
            );
            return false;
        }
    };

    match compare::compare(&resolved, leaf.operator, &leaf.value) {
        Ok(matched) => matched,
        Err(error) => {
            tracing::debug!(
                attribute = %leaf.attribute,
                %error,
                "leaf comparison failed, treated as non-matching"
            );
            false
        }
    }
}
