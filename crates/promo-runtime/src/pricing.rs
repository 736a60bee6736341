//! Quote pricing state
//!
//! The mutable context actions execute against: a quote with line items,
//! an optional address, and free-form attributes. Discounts accumulate on
//! the items and the quote; nothing here is transactional.

use crate::context::AttributeSource;
use promo_core::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One line item of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Product SKU
    pub sku: String,

    /// Ordered quantity
    pub qty: f64,

    /// Unit price before discounts
    pub price: f64,

    /// Discount accumulated on this row
    #[serde(default)]
    pub discount_amount: f64,

    /// Product and item attributes visible to conditions
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl QuoteItem {
    /// Create a line item
    pub fn new(sku: impl Into<String>, qty: f64, price: f64) -> Self {
        Self {
            sku: sku.into(),
            qty,
            price,
            discount_amount: 0.0,
            attributes: HashMap::new(),
        }
    }

    /// Attach an attribute
    pub fn with_attribute(mut self, code: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(code.into(), value.into());
        self
    }

    /// Row total before discounts
    pub fn row_total(&self) -> f64 {
        self.price * self.qty
    }

    /// Portion of the row total still open to discounting
    pub fn discountable(&self) -> f64 {
        (self.row_total() - self.discount_amount).max(0.0)
    }

    /// Apply a discount to this row, clamped so the row never goes
    /// negative. Returns the amount actually applied.
    pub fn add_discount(&mut self, amount: f64) -> f64 {
        let applied = amount.min(self.discountable()).max(0.0);
        self.discount_amount += applied;
        applied
    }
}

impl AttributeSource for QuoteItem {
    fn attribute(&self, code: &str) -> Option<Value> {
        match code {
            "sku" => Some(Value::String(self.sku.clone())),
            "qty" => Some(Value::Number(self.qty)),
            "price" => Some(Value::Number(self.price)),
            "row_total" => Some(Value::Number(self.row_total())),
            "discount_amount" => Some(Value::Number(self.discount_amount)),
            _ => self.attributes.get(code).cloned(),
        }
    }
}

/// Product-scoped view of a line item
///
/// Exposes the catalog side of the item (sku, price, product attributes)
/// without the cart-side codes like `qty` and `row_total`.
pub struct ProductView<'a> {
    item: &'a QuoteItem,
}

impl<'a> ProductView<'a> {
    /// View the product behind a line item
    pub fn new(item: &'a QuoteItem) -> Self {
        Self { item }
    }
}

impl AttributeSource for ProductView<'_> {
    fn attribute(&self, code: &str) -> Option<Value> {
        match code {
            "sku" => Some(Value::String(self.item.sku.clone())),
            "price" => Some(Value::Number(self.item.price)),
            _ => self.item.attributes.get(code).cloned(),
        }
    }
}

/// Quote address (shipping destination)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Address attributes visible to conditions (`country_id`,
    /// `postcode`, `region`, ...)
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl Address {
    /// Create an empty address
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an attribute
    pub fn with_attribute(mut self, code: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(code.into(), value.into());
        self
    }
}

impl AttributeSource for Address {
    fn attribute(&self, code: &str) -> Option<Value> {
        self.attributes.get(code).cloned()
    }
}

/// A quote: the cart being priced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Line items
    #[serde(default)]
    pub items: Vec<QuoteItem>,

    /// Shipping address, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Quote-level attributes (`coupon_code`, custom flags set by
    /// `set_attribute` actions, ...)
    #[serde(default)]
    pub attributes: HashMap<String, Value>,

    /// Total discount accumulated across items and cart-level actions
    #[serde(default)]
    pub discount_amount: f64,
}

impl Quote {
    /// Create an empty quote
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item
    pub fn add_item(mut self, item: QuoteItem) -> Self {
        self.items.push(item);
        self
    }

    /// Set the address
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Attach a quote-level attribute
    pub fn with_attribute(mut self, code: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(code.into(), value.into());
        self
    }

    /// Sum of row totals before discounts
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(QuoteItem::row_total).sum()
    }

    /// Total ordered quantity
    pub fn items_qty(&self) -> f64 {
        self.items.iter().map(|item| item.qty).sum()
    }

    /// Subtotal still open to discounting
    pub fn discountable(&self) -> f64 {
        (self.subtotal() - self.discount_amount).max(0.0)
    }

    /// Subtotal minus accumulated discounts
    pub fn grand_total(&self) -> f64 {
        (self.subtotal() - self.discount_amount).max(0.0)
    }
}

impl AttributeSource for Quote {
    fn attribute(&self, code: &str) -> Option<Value> {
        match code {
            "base_subtotal" | "subtotal" => Some(Value::Number(self.subtotal())),
            "items_qty" => Some(Value::Number(self.items_qty())),
            "items_count" => Some(Value::Number(self.items.len() as f64)),
            "discount_amount" => Some(Value::Number(self.discount_amount)),
            _ => self.attributes.get(code).cloned(),
        }
    }
}
