//! Regexp query - matches terms against a regular expression

use serde::{Deserialize, Serialize};

/// Query that matches documents containing a term matching `pattern`
///
/// The pattern is stored verbatim; compilation and evaluation belong to the
/// search engine consuming the query tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegexpQuery {
    /// Field to search in; empty for unqualified clauses
    #[serde(default)]
    pub field: String,
    /// Regular expression pattern, without the surrounding slashes
    pub pattern: String,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f64,
}

fn default_boost() -> f64 {
    1.0
}

impl RegexpQuery {
    /// Create a new regexp query
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
    fn test_regexp_query_creation() {
        let query = RegexpQuery::new("mar.*ty").with_field("name");
        assert_eq!(query.field, "name");
        assert_eq!(query.pattern, "mar.*ty");
        assert_eq!(query.boost, 1.0);
    }
}
