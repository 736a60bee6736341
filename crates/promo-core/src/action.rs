//! Action definitions
//!
//! Actions mutate a quote's pricing state once a rule's condition tree has
//! validated. The list order is the execution order; there is no rollback,
//! a failure mid-list leaves earlier mutations in place.

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// A single pricing action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Percentage discount on each item row
    ByPercent {
        /// Percentage of the row total to discount
        amount: f64,
        /// Cap on the quantity discounted per item
        #[serde(skip_serializing_if = "Option::is_none")]
        max_qty: Option<f64>,
    },

    /// Fixed discount per unit
    ByFixed {
        /// Amount off per unit
        amount: f64,
        /// Cap on the quantity discounted per item
        #[serde(skip_serializing_if = "Option::is_none")]
        max_qty: Option<f64>,
    },

    /// Fixed discount on the whole cart, clamped to the remaining
    /// discountable subtotal
    CartFixed {
        /// Amount off the cart
        amount: f64,
    },

    /// Override each item's unit price to a percentage of itself
    ToPercent {
        /// Target percentage of the original price
        amount: f64,
    },

    /// Override each item's unit price toward a fixed value
    ToFixed {
        /// Target unit price
        amount: f64,
    },

    /// Set a quote-level attribute to a fixed value
    SetAttribute {
        /// Attribute code to set
        attribute: String,
        /// Value to store
        value: Value,
    },
}

impl Action {
    /// The serialized `type` discriminant of this action
    pub fn kind(&self) -> &'static str {
        match self {
            Action::ByPercent { .. } => "by_percent",
            Action::ByFixed { .. } => "by_fixed",
            Action::CartFixed { .. } => "cart_fixed",
            Action::ToPercent { .. } => "to_percent",
            Action::ToFixed { .. } => "to_fixed",
            Action::SetAttribute { .. } => "set_attribute",
        }
    }

    /// The configured amount, for the discount actions
    pub fn amount(&self) -> Option<f64> {
        match self {
            Action::ByPercent { amount, .. }
            | Action::ByFixed { amount, .. }
            | Action::CartFixed { amount }
            | Action::ToPercent { amount }
            | Action::ToFixed { amount } => Some(*amount),
            Action::SetAttribute { .. } => None,
        }
    }
}
