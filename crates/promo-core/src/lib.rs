//! PROMO Core - Core types and definitions for the promo rule engine
//!
//! This crate provides the fundamental types used across the PROMO workspace:
//! - Value types for attribute data
//! - Condition tree definitions (combine/leaf nodes)
//! - Rule and action definitions
//! - Error types

pub mod action;
pub mod condition;
pub mod error;
pub mod rule;
pub mod types;

// Keep old path for backward compatibility
#[doc(hidden)]
pub use types::value;

// Re-export commonly used types
pub use action::Action;
pub use condition::{Aggregator, Combine, Condition, Leaf, Operator, Scope};
pub use error::CoreError;
pub use rule::Rule;
pub use types::Value;
