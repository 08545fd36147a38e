//! Date range query - matches date field values within bounds

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Query that matches documents whose date field value lies between `min`
/// and `max`, with per-bound inclusivity
///
/// `None` marks an unbounded end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateRangeQuery {
    /// Field to search in; empty for unqualified clauses
    #[serde(default)]
    pub field: String,
    /// Lower bound, unbounded when `None`
    #[serde(with = "time::serde::rfc3339::option")]
    pub min: Option<OffsetDateTime>,
    /// Upper bound, unbounded when `None`
    #[serde(with = "time::serde::rfc3339::option")]
    pub max: Option<OffsetDateTime>,
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

impl DateRangeQuery {
    /// Create a new inclusive-configurable date range query
    pub fn new(
        min: Option<OffsetDateTime>,
        max: Option<OffsetDateTime>,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Self {
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

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_date_range_creation() {
        let start = datetime!(2006-01-02 15:04:05 UTC);
        let query = DateRangeQuery::new(Some(start), None, true, true).with_field("created_at");
        assert_eq!(query.field, "created_at");
        assert_eq!(query.min, Some(start));
        assert_eq!(query.max, None);
        assert!(query.min_inclusive);
        assert!(query.max_inclusive);
    }
}
