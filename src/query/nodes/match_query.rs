//! Match query - full-text search over an analyzed field

use serde::{Deserialize, Serialize};

/// Operator for combining the analyzed terms of a match query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOperator {
    /// All terms must match (AND)
    And,
    /// At least one term must match (OR)
    #[default]
    Or,
}

/// Query that matches documents containing the analyzed terms of `text`
///
/// An empty `field` means the clause was not qualified with a field name.
/// `fuzziness` is the maximum edit distance allowed per term; zero means
/// exact matching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchQuery {
    /// Field to search in; empty for unqualified clauses
    #[serde(default)]
    pub field: String,
    /// Text to search for (analyzed downstream)
    pub text: String,
    /// How the analyzed terms combine
    #[serde(default)]
    pub operator: MatchOperator,
    /// Maximum edit distance per term
    #[serde(default)]
    pub fuzziness: u32,
    /// Boost factor for scoring
    #[serde(default = "default_boost")]
    pub boost: f64,
}

fn default_boost() -> f64 {
    1.0
}

impl MatchQuery {
    /// Create a new match query over the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            text: text.into(),
            operator: MatchOperator::default(),
            fuzziness: 0,
            boost: 1.0,
        }
    }

    /// Set the field to search in
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Set the operator to AND (all terms must match)
    pub fn with_and_operator(mut self) -> Self {
        self.operator = MatchOperator::And;
        self
    }

    /// Set the operator to OR (at least one term must match)
    pub fn with_or_operator(mut self) -> Self {
        self.operator = MatchOperator::Or;
        self
    }

    /// Set the maximum edit distance per term
    pub fn with_fuzziness(mut self, fuzziness: u32) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }
}
