//! Integration tests for the promo SDK
//!
//! File loading, validation, and the end-to-end apply path.

use chrono::NaiveDate;
use promo_sdk::{
    Address, ApplyRequest, PromoEngineBuilder, Quote, QuoteItem, SdkError, StoreContextSpec,
};
use std::io::Write;

const CART_RULES: &str = r#"
rule:
  id: summer_sale
  name: Summer Sale
  from_date: 2026-06-01
  to_date: 2026-08-31
  sort_order: 10
  conditions:
    type: combine
    aggregator: all
    children:
      - type: cart
        attribute: base_subtotal
        operator: gteq
        value: 100
      - type: address
        attribute: country_id
        operator: in
        value: [US, CA]
  actions:
    - type: by_percent
      amount: 15
---
rule:
  id: clearance_cap
  name: Clearance Cap
  sort_order: 20
  conditions:
    type: product
    attribute: clearance
    operator: eq
    value: true
  actions:
    - type: cart_fixed
      amount: 5
"#;

fn store_spec() -> StoreContextSpec {
    StoreContextSpec {
        store_id: 1,
        currency_code: "USD".to_string(),
        today: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
    }
}

fn write_rule_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_build_engine_from_file_and_apply() {
    let file = write_rule_file(CART_RULES);

    let engine = PromoEngineBuilder::new()
        .add_rule_file(file.path())
        .build()
        .unwrap();

    assert_eq!(engine.rules().len(), 2);

    let quote = Quote::new()
        .add_item(QuoteItem::new("TSHIRT-M", 2.0, 60.0).with_attribute("clearance", true))
        .with_address(Address::new().with_attribute("country_id", "US"));

    let response = engine.apply(ApplyRequest::new(quote, store_spec())).unwrap();

    // Both rules match: 15% of 120 = 18, then 5 flat
    assert_eq!(
        response.result.applied_rules,
        vec!["summer_sale", "clearance_cap"]
    );
    assert_eq!(response.result.total_discount, 23.0);
    assert_eq!(response.quote.grand_total(), 97.0);
}

#[test]
fn test_small_cart_only_matches_clearance() {
    let file = write_rule_file(CART_RULES);
    let engine = PromoEngineBuilder::new()
        .add_rule_file(file.path())
        .build()
        .unwrap();

    let quote = Quote::new()
        .add_item(QuoteItem::new("MUG-01", 1.0, 15.0).with_attribute("clearance", true))
        .with_address(Address::new().with_attribute("country_id", "US"));

    let response = engine.apply(ApplyRequest::new(quote, store_spec())).unwrap();

    assert_eq!(response.result.applied_rules, vec!["clearance_cap"]);
    assert_eq!(response.quote.grand_total(), 10.0);
}

#[test]
fn test_duplicate_rule_ids_across_files_rejected() {
    let first = write_rule_file("rule:\n  id: dup\n");
    let second = write_rule_file("rule:\n  id: dup\n");

    let result = PromoEngineBuilder::new()
        .add_rule_file(first.path())
        .add_rule_file(second.path())
        .build();

    match result {
        Err(SdkError::InvalidRuleSet(message)) => assert!(message.contains("dup")),
        other => panic!("Expected InvalidRuleSet, got {:?}", other.err()),
    }
}

#[test]
fn test_depth_limit_enforced_at_build() {
    let content = r#"
rule:
  id: deep
  conditions:
    type: combine
    children:
      - type: combine
        children:
          - type: combine
            children:
              - type: cart
                attribute: base_subtotal
                operator: gt
                value: 0
"#;

    let result = PromoEngineBuilder::new()
        .add_rule_content("deep", content)
        .with_max_condition_depth(2)
        .build();

    assert!(matches!(result, Err(SdkError::InvalidRuleSet(_))));
}

#[test]
fn test_unknown_action_in_file_surfaces_parse_error() {
    let file = write_rule_file(
        r#"
rule:
  id: bad
  actions:
    - type: teleport_items
      amount: 1
"#,
    );

    let result = PromoEngineBuilder::new().add_rule_file(file.path()).build();
    assert!(matches!(result, Err(SdkError::ParseError(_))));
}

#[test]
fn test_response_serializes() {
    let engine = PromoEngineBuilder::new()
        .add_rule_content("r", "rule:\n  id: noop\n")
        .build()
        .unwrap();

    let quote = Quote::new().add_item(QuoteItem::new("A", 1.0, 10.0));
    let response = engine.apply(ApplyRequest::new(quote, store_spec())).unwrap();

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"applied_rules\""));
    assert!(json.contains("\"processing_time_ms\""));
}
