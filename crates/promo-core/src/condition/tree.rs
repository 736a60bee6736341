//! Condition tree nodes

use super::operator::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Boolean aggregator for a combine node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregator {
    /// Every child must validate (empty list is vacuously true)
    All,
    /// At least one child must validate (empty list is false)
    Any,
    /// No child may validate (empty list is vacuously true)
    None,
}

/// Which entity a leaf's attribute resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The quote (cart) itself
    Cart,
    /// A quote line item
    Item,
    /// The product view of a line item
    Product,
    /// The quote address
    Address,
}

/// Internal node: aggregates its children's results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combine {
    /// How child results are folded together
    pub aggregator: Aggregator,

    /// Negate the aggregated result
    #[serde(default)]
    pub negate: bool,

    /// Ordered child nodes, leaf and combine interchangeable
    #[serde(default)]
    pub children: Vec<Condition>,
}

/// Terminal node: one attribute compared against a configured value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    /// Entity the attribute resolves against
    pub scope: Scope,

    /// Attribute code, dotted paths traverse object payloads
    pub attribute: String,

    /// Comparison operator
    pub operator: Operator,

    /// Configured comparison value
    pub value: Value,
}

/// A condition tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// Aggregating node
    Combine(Combine),
    /// Terminal comparison
    Leaf(Leaf),
}

impl Combine {
    /// Create a combine node with the given aggregator and children
    pub fn new(aggregator: Aggregator, children: Vec<Condition>) -> Self {
        Self {
            aggregator,
            negate: false,
            children,
        }
    }

    /// Negate the aggregated result
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Append a child node
    pub fn add_child(mut self, child: Condition) -> Self {
        self.children.push(child);
        self
    }
}

impl Leaf {
    /// Create a leaf comparing `attribute` against `value` with `operator`
    pub fn new(scope: Scope, attribute: impl Into<String>, operator: Operator, value: Value) -> Self {
        Self {
            scope,
            attribute: attribute.into(),
            operator,
            value,
        }
    }
}

impl Condition {
    /// `all` combine node over the given children
    pub fn all(children: Vec<Condition>) -> Self {
        Condition::Combine(Combine::new(Aggregator::All, children))
    }

    /// `any` combine node over the given children
    pub fn any(children: Vec<Condition>) -> Self {
        Condition::Combine(Combine::new(Aggregator::Any, children))
    }

    /// `none` combine node over the given children
    pub fn none_of(children: Vec<Condition>) -> Self {
        Condition::Combine(Combine::new(Aggregator::None, children))
    }

    /// Leaf node
    pub fn leaf(scope: Scope, attribute: impl Into<String>, operator: Operator, value: Value) -> Self {
        Condition::Leaf(Leaf::new(scope, attribute, operator, value))
    }

    /// Number of leaf nodes in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Condition::Leaf(_) => 1,
            Condition::Combine(combine) => {
                combine.children.iter().map(Condition::leaf_count).sum()
            }
        }
    }

    /// Depth of the tree; a single leaf has depth 1
    pub fn max_depth(&self) -> usize {
        match self {
            Condition::Leaf(_) => 1,
            Condition::Combine(combine) => {
                1 + combine
                    .children
                    .iter()
                    .map(Condition::max_depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

impl Default for Condition {
    /// An empty `all` combine, which validates everything
    fn default() -> Self {
        Condition::all(Vec::new())
    }
}
