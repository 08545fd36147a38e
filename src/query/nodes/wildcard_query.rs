//! Wildcard query - matches terms using `*` and `?` wildcards

use serde::{Deserialize, Serialize};

/// Query that matches documents containing a term matching the wildcard
/// pattern
///
/// `*` matches any sequence of characters (including none); `?` matches
/// exactly one character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WildcardQuery {
    /// Field to search in; empty for unqualified clauses
    #[serde(default)]
    pub field: String,
    /// Wildcard pattern
    pub pattern: String,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f64,
}

fn default_boost() -> f64 {
    1.0
}

impl WildcardQuery {
    /// Create a new wildcard query
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            pattern: pattern.into(),
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

    #[test]
    fn test_wildcard_query_creation() {
        let query = WildcardQuery::new("mart*").with_field("name");
        assert_eq!(query.field, "name");
        assert_eq!(query.pattern, "mart*");
        assert_eq!(query.boost, 1.0);
    }
}
