//! Numeric range query - matches numeric field values within bounds

use serde::{Deserialize, Serialize};

/// Sentinel for an effectively unbounded upper limit
pub const MAX_NUMERIC: f64 = f64::INFINITY;

/// Sentinel for an effectively unbounded lower limit
pub const MIN_NUMERIC: f64 = f64::NEG_INFINITY;

/// Query that matches documents whose numeric field value lies in
/// `[min, max]`, with per-bound inclusivity
///
/// One-sided ranges use [`MAX_NUMERIC`] / [`MIN_NUMERIC`] for the open end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericRangeQuery {
    /// Field to search in; empty for unqualified clauses
    #[serde(default)]
    pub field: String,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Whether `min` itself is in range
    pub min_inclusive: bool,
    /// Whether `max` itself is in range
    pub max_inclusive: bool,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f64,
}

fn default_boost() -> f64 {
    1.0
}

impl NumericRangeQuery {
    /// Create a new inclusive-configurable numeric range query
    pub fn new(min: f64, max: f64, min_inclusive: bool, max_inclusive: bool) -> Self {
        Self {
            field: String::new(),
            min,
            max,
            min_inclusive,
            max_inclusive,
            boost: 1.0,
        }
    }

    /// Set the field to search in
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }
}
