//! PROMO Runtime - Rule evaluation and pricing execution
//!
//! Validates condition trees against quote state and executes action
//! lists against it. Evaluation is pure and synchronous; the only state is
//! the quote being priced and the explicit store context passed in.

pub mod actions;
pub mod context;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod pricing;
pub mod result;

pub use context::{AttributeSource, EvaluationContext, StoreContext};
pub use engine::RuleEngine;
pub use error::{Result, RuntimeError};
pub use evaluator::validate;
pub use pricing::{Address, ProductView, Quote, QuoteItem};
pub use result::{ApplyResult, RuleOutcome};
