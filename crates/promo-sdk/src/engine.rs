//! PromoEngine - Main API for pricing quotes

use crate::config::EngineConfig;
use crate::error::Result;
use promo_core::Rule;
use promo_runtime::{ApplyResult, Quote, RuleEngine, StoreContext};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pricing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyRequest {
    /// Quote to price
    pub quote: Quote,

    /// Store context the quote is priced under
    pub store: StoreContextSpec,

    /// Request metadata, echoed back in the response
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Serializable store context carried on requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreContextSpec {
    /// Store (website view) ID
    pub store_id: u32,

    /// ISO currency code
    pub currency_code: String,

    /// Date the rule windows are checked against
    pub today: chrono::NaiveDate,
}

impl From<&StoreContextSpec> for StoreContext {
    fn from(spec: &StoreContextSpec) -> Self {
        StoreContext::new(spec.store_id, spec.currency_code.clone(), spec.today)
    }
}

impl ApplyRequest {
    /// Create a pricing request
    pub fn new(quote: Quote, store: StoreContextSpec) -> Self {
        Self {
            quote,
            store,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Pricing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResponse {
    /// Per-rule outcome of the pass
    pub result: ApplyResult,

    /// The quote after pricing, discounts applied
    pub quote: Quote,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Request metadata (echoed back)
    pub metadata: HashMap<String, String>,
}

/// Main promo engine
pub struct PromoEngine {
    /// Prioritized rule engine
    engine: RuleEngine,

    /// Configuration the engine was built with
    config: EngineConfig,
}

impl PromoEngine {
    pub(crate) fn from_parts(rules: Vec<Rule>, config: EngineConfig) -> Self {
        Self {
            engine: RuleEngine::new(rules),
            config,
        }
    }

    /// Price a quote
    ///
    /// The request's quote is consumed, mutated by the matched rules'
    /// actions, and returned in the response alongside the per-rule
    /// outcomes.
    pub fn apply(&self, request: ApplyRequest) -> Result<ApplyResponse> {
        let start = std::time::Instant::now();

        let store = StoreContext::from(&request.store);
        let mut quote = request.quote;

        let result = self.engine.apply(&mut quote, &store)?;

        let processing_time_ms = start.elapsed().as_millis() as u64;

        Ok(ApplyResponse {
            result,
            quote,
            processing_time_ms,
            metadata: request.metadata,
        })
    }

    /// The rules in processing order
    pub fn rules(&self) -> &[Rule] {
        self.engine.rules()
    }

    /// The configuration the engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
