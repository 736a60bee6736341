//! Condition and action registries
//!
//! The serialized configuration resolves node constructors by the `type`
//! discriminant. Both registries are plain tables from discriminant to
//! constructor function, populated once at startup; an unknown
//! discriminant is a parse error naming the offending type, never a
//! runtime lookup failure.

use crate::error::{ParseError, Result};
use crate::raw::{RawAction, RawCondition};
use promo_core::condition::{Aggregator, Combine, Condition, Leaf, Scope};
use promo_core::{Action, Value};
use std::collections::HashMap;

/// Constructor for one condition node kind
pub type ConditionBuilder = fn(&RawCondition, &ConditionRegistry) -> Result<Condition>;

/// Constructor for one action kind
pub type ActionBuilder = fn(&RawAction) -> Result<Action>;

/// Registry of condition node constructors keyed by `type` discriminant
pub struct ConditionRegistry {
    builders: HashMap<String, ConditionBuilder>,
}

impl ConditionRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registry with the standard node kinds: `combine`, and the leaf
    /// kinds `cart`, `item`, `product`, `address`
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("combine", build_combine);
        registry.register("cart", build_cart_leaf);
        registry.register("item", build_item_leaf);
        registry.register("product", build_product_leaf);
        registry.register("address", build_address_leaf);
        registry
    }

    /// Register a constructor for a node kind, replacing any existing one
    pub fn register(&mut self, kind: impl Into<String>, builder: ConditionBuilder) {
        self.builders.insert(kind.into(), builder);
    }

    /// Build a condition node from its raw form
    pub fn build(&self, raw: &RawCondition) -> Result<Condition> {
        let builder = self
            .builders
            .get(&raw.kind)
            .ok_or_else(|| ParseError::UnknownConditionType(raw.kind.clone()))?;
        builder(raw, self)
    }

    /// Registered discriminants, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Registry of action constructors keyed by `type` discriminant
pub struct ActionRegistry {
    builders: HashMap<String, ActionBuilder>,
}

impl ActionRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registry with the standard action kinds
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("by_percent", build_by_percent);
        registry.register("by_fixed", build_by_fixed);
        registry.register("cart_fixed", build_cart_fixed);
        registry.register("to_percent", build_to_percent);
        registry.register("to_fixed", build_to_fixed);
        registry.register("set_attribute", build_set_attribute);
        registry
    }

    /// Register a constructor for an action kind, replacing any existing one
    pub fn register(&mut self, kind: impl Into<String>, builder: ActionBuilder) {
        self.builders.insert(kind.into(), builder);
    }

    /// Build an action from its raw form
    pub fn build(&self, raw: &RawAction) -> Result<Action> {
        let builder = self
            .builders
            .get(&raw.kind)
            .ok_or_else(|| ParseError::UnknownActionType(raw.kind.clone()))?;
        builder(raw)
    }

    /// Registered discriminants, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

// ========== Standard condition constructors ==========

fn build_combine(raw: &RawCondition, registry: &ConditionRegistry) -> Result<Condition> {
    let aggregator = match raw.aggregator.as_deref() {
        None | Some("all") => Aggregator::All,
        Some("any") => Aggregator::Any,
        Some("none") => Aggregator::None,
        Some(other) => {
            return Err(ParseError::InvalidValue {
                field: "aggregator".to_string(),
                message: format!("expected all/any/none, got '{}'", other),
            })
        }
    };

    let children = raw
        .children
        .iter()
        .map(|child| registry.build(child))
        .collect::<Result<Vec<_>>>()?;

    Ok(Condition::Combine(Combine {
        aggregator,
        negate: raw.negate,
        children,
    }))
}

fn build_leaf(raw: &RawCondition, scope: Scope) -> Result<Condition> {
    let attribute = raw
        .attribute
        .as_deref()
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ParseError::MissingField {
            field: "attribute".to_string(),
        })?;
    let operator = raw.operator.ok_or_else(|| ParseError::MissingField {
        field: "operator".to_string(),
    })?;
    let value = raw.value.clone().unwrap_or(Value::Null);

    Ok(Condition::Leaf(Leaf::new(scope, attribute, operator, value)))
}

fn build_cart_leaf(raw: &RawCondition, _registry: &ConditionRegistry) -> Result<Condition> {
    build_leaf(raw, Scope::Cart)
}

fn build_item_leaf(raw: &RawCondition, _registry: &ConditionRegistry) -> Result<Condition> {
    build_leaf(raw, Scope::Item)
}

fn build_product_leaf(raw: &RawCondition, _registry: &ConditionRegistry) -> Result<Condition> {
    build_leaf(raw, Scope::Product)
}

fn build_address_leaf(raw: &RawCondition, _registry: &ConditionRegistry) -> Result<Condition> {
    build_leaf(raw, Scope::Address)
}

// ========== Standard action constructors ==========

fn required_amount(raw: &RawAction) -> Result<f64> {
    let amount = raw.amount.ok_or_else(|| ParseError::MissingField {
        field: "amount".to_string(),
    })?;
    if !amount.is_finite() {
        return Err(ParseError::InvalidValue {
            field: "amount".to_string(),
            message: "must be finite".to_string(),
        });
    }
    Ok(amount)
}

fn build_by_percent(raw: &RawAction) -> Result<Action> {
    Ok(Action::ByPercent {
        amount: required_amount(raw)?,
        max_qty: raw.max_qty,
    })
}

fn build_by_fixed(raw: &RawAction) -> Result<Action> {
    Ok(Action::ByFixed {
        amount: required_amount(raw)?,
        max_qty: raw.max_qty,
    })
}

fn build_cart_fixed(raw: &RawAction) -> Result<Action> {
    Ok(Action::CartFixed {
        amount: required_amount(raw)?,
    })
}

fn build_to_percent(raw: &RawAction) -> Result<Action> {
    Ok(Action::ToPercent {
        amount: required_amount(raw)?,
    })
}

fn build_to_fixed(raw: &RawAction) -> Result<Action> {
    Ok(Action::ToFixed {
        amount: required_amount(raw)?,
    })
}

fn build_set_attribute(raw: &RawAction) -> Result<Action> {
    let attribute = raw
        .attribute
        .as_deref()
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ParseError::MissingField {
            field: "attribute".to_string(),
        })?;
    let value = raw.value.clone().ok_or_else(|| ParseError::MissingField {
        field: "value".to_string(),
    })?;

    Ok(Action::SetAttribute {
        attribute: attribute.to_string(),
        value,
    })
}
