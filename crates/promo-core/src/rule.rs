//! Rule definitions

use crate::action::Action;
use crate::condition::Condition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A promotion rule: a condition tree plus an ordered action list
///
/// Rules are applied in ascending `sort_order`; a matched rule with
/// `stop_processing` set halts the remaining rule list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule ID
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the rule participates in processing at all
    #[serde(default = "default_active")]
    pub active: bool,

    /// First day the rule applies, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,

    /// Last day the rule applies, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,

    /// Processing priority, lower runs first
    #[serde(default)]
    pub sort_order: i32,

    /// Halt rule processing after this rule matches
    #[serde(default)]
    pub stop_processing: bool,

    /// Condition tree deciding whether the rule applies
    #[serde(default)]
    pub conditions: Condition,

    /// Actions executed in order once the rule matches
    #[serde(default)]
    pub actions: Vec<Action>,
}

fn default_active() -> bool {
    true
}

impl Rule {
    /// Create a new active rule with no conditions or actions
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Rule {
            id: id.into(),
            name: name.into(),
            description: None,
            active: true,
            from_date: None,
            to_date: None,
            sort_order: 0,
            stop_processing: false,
            conditions: Condition::default(),
            actions: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the condition tree
    pub fn with_conditions(mut self, conditions: Condition) -> Self {
        self.conditions = conditions;
        self
    }

    /// Append an action
    pub fn add_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Set the activity window (both ends inclusive, either may be open)
    pub fn with_window(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from_date = from;
        self.to_date = to;
        self
    }

    /// Set the processing priority
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Halt further rule processing after this rule matches
    pub fn stop_processing(mut self) -> Self {
        self.stop_processing = true;
        self
    }

    /// Deactivate the rule
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether `date` falls inside the rule's activity window
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if !self.active {
            return false;
        }
        if let Some(from) = self.from_date {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to_date {
            if date > to {
                return false;
            }
        }
        true
    }
}
