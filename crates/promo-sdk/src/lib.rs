//! PROMO SDK
//!
//! High-level API for building and running the promo rule engine: load
//! rule files, validate the set, price quotes.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod validator;

// Re-export main types
pub use builder::PromoEngineBuilder;
pub use config::EngineConfig;
pub use engine::{ApplyRequest, ApplyResponse, PromoEngine, StoreContextSpec};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use promo_core::{Action, Condition, Rule, Value};
pub use promo_runtime::{Address, ApplyResult, Quote, QuoteItem, StoreContext};
