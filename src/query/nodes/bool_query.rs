//! Boolean query - combines sub-queries with must, should, must-not roles

use serde::{Deserialize, Serialize};

use crate::query::ast::Query;

/// Boolean query combining sub-queries by clause role
///
/// - `musts`: every clause must match
/// - `shoulds`: at least `min_should` clauses must match
/// - `must_nots`: no clause may match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolQuery {
    /// Clauses that must all match
    #[serde(default)]
    pub musts: Vec<Query>,
    /// Clauses of which at least `min_should` must match
    #[serde(default)]
    pub shoulds: Vec<Query>,
    /// Clauses that must not match
    #[serde(default)]
    pub must_nots: Vec<Query>,
    /// Minimum number of should clauses that must match
    #[serde(default)]
    pub min_should: usize,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f64,
}

fn default_boost() -> f64 {
    1.0
}

impl BoolQuery {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self {
            musts: Vec::new(),
            shoulds: Vec::new(),
            must_nots: Vec::new(),
            min_should: 0,
            boost: 1.0,
        }
    }

    /// Add a must clause
    pub fn must(mut self, query: impl Into<Query>) -> Self {
        self.musts.push(query.into());
        self
    }

    /// Add a should clause
    pub fn should(mut self, query: impl Into<Query>) -> Self {
        self.shoulds.push(query.into());
        self
    }

    /// Add a must-not clause
    pub fn must_not(mut self, query: impl Into<Query>) -> Self {
        self.must_nots.push(query.into());
        self
    }

    /// Set the minimum number of should clauses that must match
    pub fn with_min_should(mut self, min_should: usize) -> Self {
        self.min_should = min_should;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }
}
