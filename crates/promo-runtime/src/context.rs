//! Evaluation context
//!
//! All state needed to evaluate a condition tree is passed in explicitly:
//! the quote being priced, the current line item (when validating
//! per-item), and the store context. There are no global registries.

use crate::pricing::{ProductView, Quote, QuoteItem};
use chrono::NaiveDate;
use promo_core::condition::Scope;
use promo_core::Value;

/// Capability every candidate entity exposes: resolve one attribute code
/// to a value, or report it unresolvable with `None`.
pub trait AttributeSource {
    /// Resolve a single (undotted) attribute code
    fn attribute(&self, code: &str) -> Option<Value>;
}

/// Store-level parameters for one evaluation pass
#[derive(Debug, Clone)]
pub struct StoreContext {
    /// Store (website view) the quote belongs to
    pub store_id: u32,

    /// ISO currency code amounts are denominated in
    pub currency_code: String,

    /// Date rules' activity windows are checked against
    pub today: NaiveDate,
}

impl StoreContext {
    /// Create a store context
    pub fn new(store_id: u32, currency_code: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            store_id,
            currency_code: currency_code.into(),
            today,
        }
    }
}

/// Borrowed view of everything a condition tree may inspect
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    quote: &'a Quote,
    item: Option<&'a QuoteItem>,
    store: &'a StoreContext,
}

impl<'a> EvaluationContext<'a> {
    /// Context for validating against the quote as a whole
    pub fn for_quote(quote: &'a Quote, store: &'a StoreContext) -> Self {
        Self {
            quote,
            item: None,
            store,
        }
    }

    /// Context focused on one line item of the quote
    pub fn for_item(&self, item: &'a QuoteItem) -> Self {
        Self {
            quote: self.quote,
            item: Some(item),
            store: self.store,
        }
    }

    /// The quote under evaluation
    pub fn quote(&self) -> &'a Quote {
        self.quote
    }

    /// The current line item, if the context is item-focused
    pub fn current_item(&self) -> Option<&'a QuoteItem> {
        self.item
    }

    /// The store context
    pub fn store(&self) -> &'a StoreContext {
        self.store
    }

    /// Resolve an attribute code for the given scope
    ///
    /// Dotted codes traverse object payloads segment by segment. Item and
    /// product scopes resolve against the current item; with no current
    /// item they are unresolvable here (the evaluator falls back to
    /// any-item mode instead).
    pub fn resolve(&self, scope: Scope, code: &str) -> Option<Value> {
        match scope {
            Scope::Cart => resolve_path(self.quote, code),
            Scope::Address => self
                .quote
                .address
                .as_ref()
                .and_then(|address| resolve_path(address, code)),
            Scope::Item => self.item.and_then(|item| resolve_path(item, code)),
            Scope::Product => self
                .item
                .map(ProductView::new)
                .and_then(|product| resolve_path(&product, code)),
        }
    }
}

/// Resolve a possibly dotted attribute code against a source: the first
/// segment goes through the source, the rest traverse object values.
pub fn resolve_path(source: &dyn AttributeSource, code: &str) -> Option<Value> {
    let mut segments = code.split('.');
    let first = segments.next()?;
    let mut current = source.attribute(first)?;

    for segment in segments {
        match current {
            Value::Object(mut map) => {
                current = map.remove(segment)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_core::condition::Scope;
    use std::collections::HashMap;

    fn store() -> StoreContext {
        StoreContext::new(1, "USD", NaiveDate::from_ymd_opt(2026, 7, 1).unwrap())
    }

    #[test]
    fn test_resolve_cart_attribute() {
        let quote = Quote::new().add_item(QuoteItem::new("WS-01", 2.0, 30.0));
        let store = store();
        let ctx = EvaluationContext::for_quote(&quote, &store);

        assert_eq!(
            ctx.resolve(Scope::Cart, "base_subtotal"),
            Some(Value::Number(60.0))
        );
    }

    #[test]
    fn test_resolve_missing_attribute_is_none() {
        let quote = Quote::new();
        let store = store();
        let ctx = EvaluationContext::for_quote(&quote, &store);

        assert_eq!(ctx.resolve(Scope::Cart, "no_such_code"), None);
    }

    #[test]
    fn test_item_scope_requires_current_item() {
        let quote = Quote::new().add_item(QuoteItem::new("WS-01", 1.0, 10.0));
        let store = store();
        let ctx = EvaluationContext::for_quote(&quote, &store);

        assert_eq!(ctx.resolve(Scope::Item, "qty"), None);

        let item_ctx = ctx.for_item(&quote.items[0]);
        assert_eq!(item_ctx.resolve(Scope::Item, "qty"), Some(Value::Number(1.0)));
    }

    #[test]
    fn test_address_scope_without_address() {
        let quote = Quote::new();
        let store = store();
        let ctx = EvaluationContext::for_quote(&quote, &store);
        assert_eq!(ctx.resolve(Scope::Address, "country_id"), None);
    }

    #[test]
    fn test_resolve_dotted_path() {
        let mut shipping = HashMap::new();
        shipping.insert("method".to_string(), Value::String("flatrate".to_string()));

        let quote = Quote::new().with_attribute("shipping", Value::Object(shipping));
        let store = store();
        let ctx = EvaluationContext::for_quote(&quote, &store);

        assert_eq!(
            ctx.resolve(Scope::Cart, "shipping.method"),
            Some(Value::String("flatrate".to_string()))
        );
        assert_eq!(ctx.resolve(Scope::Cart, "shipping.carrier"), None);
        // Traversal through a non-object dead-ends
        assert_eq!(ctx.resolve(Scope::Cart, "shipping.method.deeper"), None);
    }
}
