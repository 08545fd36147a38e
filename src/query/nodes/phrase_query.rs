//! Phrase query - matches an exact sequence of terms

use serde::{Deserialize, Serialize};

/// Query that matches documents containing the terms of `phrase` in order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhraseQuery {
    /// Field to search in; empty for unqualified clauses
    #[serde(default)]
    pub field: String,
    /// The phrase to match (analyzed downstream)
    pub phrase: String,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f64,
}

fn default_boost() -> f64 {
    1.0
}

impl PhraseQuery {
    /// Create a new phrase query
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            phrase: phrase.into(),
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
