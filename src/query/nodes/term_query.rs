//! Term query - exact token match, bypassing analysis

use serde::{Deserialize, Serialize};

/// Query that matches documents containing the exact token `term`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermQuery {
    /// Field to search in; empty for unqualified clauses
    #[serde(default)]
    pub field: String,
    /// Token to match exactly
    pub term: String,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f64,
}

fn default_boost() -> f64 {
    1.0
}

impl TermQuery {
    /// Create a new term query
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            term: term.into(),
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
