//! Action execution
//!
//! Actions mutate the quote's pricing state directly and in order. There
//! is no rollback: an error mid-list propagates and leaves every earlier
//! mutation in place.

use crate::context::StoreContext;
use crate::error::{Result, RuntimeError};
use crate::pricing::Quote;
use promo_core::Action;

/// Execute one action against the quote, returning the discount it
/// produced (zero for non-discount actions).
pub fn execute(action: &Action, quote: &mut Quote, _store: &StoreContext) -> Result<f64> {
    match action {
        Action::ByPercent { amount, max_qty } => {
            check_percent(action, *amount)?;
            let mut applied = 0.0;
            for item in &mut quote.items {
                let qty = capped_qty(item.qty, *max_qty);
                let discount = item.price * qty * amount / 100.0;
                applied += item.add_discount(discount);
            }
            quote.discount_amount += applied;
            Ok(applied)
        }

        Action::ByFixed { amount, max_qty } => {
            check_amount(action, *amount)?;
            let mut applied = 0.0;
            for item in &mut quote.items {
                let qty = capped_qty(item.qty, *max_qty);
                applied += item.add_discount(amount * qty);
            }
            quote.discount_amount += applied;
            Ok(applied)
        }

        Action::CartFixed { amount } => {
            check_amount(action, *amount)?;
            let applied = amount.min(quote.discountable());
            quote.discount_amount += applied;
            Ok(applied)
        }

        Action::ToPercent { amount } => {
            check_percent(action, *amount)?;
            let mut applied = 0.0;
            for item in &mut quote.items {
                let target = item.price * amount / 100.0;
                let per_unit = (item.price - target).max(0.0);
                applied += item.add_discount(per_unit * item.qty);
            }
            quote.discount_amount += applied;
            Ok(applied)
        }

        Action::ToFixed { amount } => {
            check_amount(action, *amount)?;
            let mut applied = 0.0;
            for item in &mut quote.items {
                let per_unit = (item.price - amount).max(0.0);
                applied += item.add_discount(per_unit * item.qty);
            }
            quote.discount_amount += applied;
            Ok(applied)
        }

        Action::SetAttribute { attribute, value } => {
            quote.attributes.insert(attribute.clone(), value.clone());
            Ok(0.0)
        }
    }
}

fn capped_qty(qty: f64, max_qty: Option<f64>) -> f64 {
    match max_qty {
        Some(max) => qty.min(max),
        None => qty,
    }
}

fn check_amount(action: &Action, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(RuntimeError::InvalidAmount {
            action: action.kind().to_string(),
            amount,
        });
    }
    Ok(())
}

fn check_percent(action: &Action, amount: f64) -> Result<()> {
    check_amount(action, amount)?;
    if amount > 100.0 {
        return Err(RuntimeError::InvalidAmount {
            action: action.kind().to_string(),
            amount,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::QuoteItem;
    use chrono::NaiveDate;
    use promo_core::Value;

    fn store() -> StoreContext {
        StoreContext::new(1, "USD", NaiveDate::from_ymd_opt(2026, 7, 1).unwrap())
    }

    fn quote() -> Quote {
        Quote::new()
            .add_item(QuoteItem::new("A", 2.0, 50.0)) // row 100
            .add_item(QuoteItem::new("B", 4.0, 10.0)) // row 40
    }

    #[test]
    fn test_by_percent() {
        let mut quote = quote();
        let applied = execute(
            &Action::ByPercent {
                amount: 10.0,
                max_qty: None,
            },
            &mut quote,
            &store(),
        )
        .unwrap();

        assert_eq!(applied, 14.0);
        assert_eq!(quote.items[0].discount_amount, 10.0);
        assert_eq!(quote.items[1].discount_amount, 4.0);
        assert_eq!(quote.discount_amount, 14.0);
        assert_eq!(quote.grand_total(), 126.0);
    }

    #[test]
    fn test_by_percent_with_qty_cap() {
        let mut quote = quote();
        let applied = execute(
            &Action::ByPercent {
                amount: 50.0,
                max_qty: Some(1.0),
            },
            &mut quote,
            &store(),
        )
        .unwrap();

        // One unit of each row: 25 + 5
        assert_eq!(applied, 30.0);
    }

    #[test]
    fn test_by_fixed() {
        let mut quote = quote();
        let applied = execute(
            &Action::ByFixed {
                amount: 3.0,
                max_qty: None,
            },
            &mut quote,
            &store(),
        )
        .unwrap();

        // 3 per unit: 6 + 12
        assert_eq!(applied, 18.0);
    }

    #[test]
    fn test_by_fixed_clamped_to_row_total() {
        let mut quote = Quote::new().add_item(QuoteItem::new("C", 2.0, 1.0));
        let applied = execute(
            &Action::ByFixed {
                amount: 5.0,
                max_qty: None,
            },
            &mut quote,
            &store(),
        )
        .unwrap();

        // 10 requested, row total is 2
        assert_eq!(applied, 2.0);
        assert_eq!(quote.grand_total(), 0.0);
    }

    #[test]
    fn test_cart_fixed() {
        let mut quote = quote();
        let applied = execute(&Action::CartFixed { amount: 25.0 }, &mut quote, &store()).unwrap();
        assert_eq!(applied, 25.0);
        assert_eq!(quote.grand_total(), 115.0);
        // Items untouched, the discount is cart-level
        assert_eq!(quote.items[0].discount_amount, 0.0);
    }

    #[test]
    fn test_cart_fixed_clamped_to_subtotal() {
        let mut quote = Quote::new().add_item(QuoteItem::new("C", 1.0, 30.0));
        let applied = execute(&Action::CartFixed { amount: 100.0 }, &mut quote, &store()).unwrap();
        assert_eq!(applied, 30.0);
        assert_eq!(quote.grand_total(), 0.0);
    }

    #[test]
    fn test_to_percent() {
        let mut quote = Quote::new().add_item(QuoteItem::new("C", 2.0, 40.0));
        let applied = execute(&Action::ToPercent { amount: 75.0 }, &mut quote, &store()).unwrap();

        // Price goes to 30, so 10 off per unit
        assert_eq!(applied, 20.0);
        assert_eq!(quote.grand_total(), 60.0);
    }

    #[test]
    fn test_to_fixed() {
        let mut quote = Quote::new()
            .add_item(QuoteItem::new("C", 1.0, 40.0))
            .add_item(QuoteItem::new("D", 1.0, 5.0));
        let applied = execute(&Action::ToFixed { amount: 9.99 }, &mut quote, &store()).unwrap();

        // 40 -> 9.99; 5 is already below the target and stays
        assert!((applied - 30.01).abs() < 1e-9);
        assert_eq!(quote.items[1].discount_amount, 0.0);
    }

    #[test]
    fn test_set_attribute() {
        let mut quote = quote();
        let applied = execute(
            &Action::SetAttribute {
                attribute: "free_shipping".to_string(),
                value: Value::Bool(true),
            },
            &mut quote,
            &store(),
        )
        .unwrap();

        assert_eq!(applied, 0.0);
        assert_eq!(quote.attributes.get("free_shipping"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        let mut quote = quote();
        let store = store();

        assert!(matches!(
            execute(
                &Action::ByPercent {
                    amount: 120.0,
                    max_qty: None
                },
                &mut quote,
                &store
            ),
            Err(RuntimeError::InvalidAmount { .. })
        ));
        assert!(matches!(
            execute(&Action::CartFixed { amount: -5.0 }, &mut quote, &store),
            Err(RuntimeError::InvalidAmount { .. })
        ));
        assert!(matches!(
            execute(
                &Action::ByFixed {
                    amount: f64::NAN,
                    max_qty: None
                },
                &mut quote,
                &store
            ),
            Err(RuntimeError::InvalidAmount { .. })
        ));

        // Nothing was mutated by the rejected actions
        assert_eq!(quote.discount_amount, 0.0);
    }
}
