//! Raw serialized forms
//!
//! These structs mirror the on-disk dictionaries one-to-one. Absent keys
//! default the way the serialized arrays in rule storage omit them; the
//! registries turn raw nodes into typed model values.

use chrono::NaiveDate;
use promo_core::condition::Operator;
use promo_core::Value;
use serde::Deserialize;

/// A serialized condition node: `type` plus either combine fields
/// (`aggregator`, `negate`, `children`) or leaf fields (`attribute`,
/// `operator`, `value`)
#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    /// Node type discriminant, resolved through the condition registry
    #[serde(rename = "type")]
    pub kind: String,

    /// Combine: aggregator name, defaults to `all`
    #[serde(default)]
    pub aggregator: Option<String>,

    /// Combine: negate the aggregated result
    #[serde(default)]
    pub negate: bool,

    /// Combine: child nodes
    #[serde(default)]
    pub children: Vec<RawCondition>,

    /// Leaf: attribute code
    #[serde(default)]
    pub attribute: Option<String>,

    /// Leaf: comparison operator
    #[serde(default)]
    pub operator: Option<Operator>,

    /// Leaf: configured comparison value
    #[serde(default)]
    pub value: Option<Value>,
}

/// A serialized action: `type` plus its parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    /// Action type discriminant, resolved through the action registry
    #[serde(rename = "type")]
    pub kind: String,

    /// Discount amount / target value for the pricing actions
    #[serde(default)]
    pub amount: Option<f64>,

    /// Cap on the quantity discounted per item
    #[serde(default)]
    pub max_qty: Option<f64>,

    /// Attribute code for `set_attribute`
    #[serde(default)]
    pub attribute: Option<String>,

    /// Value for `set_attribute`
    #[serde(default)]
    pub value: Option<Value>,
}

/// A serialized rule
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    /// Unique rule ID
    pub id: String,

    /// Human-readable name
    #[serde(default)]
    pub name: Option<String>,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the rule participates in processing
    #[serde(default)]
    pub active: Option<bool>,

    /// First day the rule applies, inclusive
    #[serde(default)]
    pub from_date: Option<NaiveDate>,

    /// Last day the rule applies, inclusive
    #[serde(default)]
    pub to_date: Option<NaiveDate>,

    /// Processing priority, lower runs first
    #[serde(default)]
    pub sort_order: Option<i32>,

    /// Halt rule processing after this rule matches
    #[serde(default)]
    pub stop_processing: Option<bool>,

    /// Serialized condition tree root
    #[serde(default)]
    pub conditions: Option<RawCondition>,

    /// Serialized action list
    #[serde(default)]
    pub actions: Vec<RawAction>,
}

/// A rule document: the rule definition under a `rule:` key
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub rule: Option<RawRule>,
}
