//! Query tree representation
//!
//! A parsed query is a tree of [`Query`] values. The enum is a closed set
//! of node shapes, so consumers (and the post-parse coalescer) can pattern
//! match instead of downcasting.

use serde::{Deserialize, Serialize};

use crate::query::nodes::{
    BoolQuery, DateRangeQuery, MatchQuery, NumericRangeQuery, PhraseQuery, RegexpQuery, TermQuery,
    WildcardQuery,
};

/// A node in the query tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Full-text match over analyzed terms
    Match(MatchQuery),
    /// Exact term sequence
    Phrase(PhraseQuery),
    /// Exact token, bypassing analysis
    Term(TermQuery),
    /// Regular expression over terms
    Regexp(RegexpQuery),
    /// `*`/`?` wildcard over terms
    Wildcard(WildcardQuery),
    /// Numeric interval
    NumericRange(NumericRangeQuery),
    /// Date interval
    DateRange(DateRangeQuery),
    /// Combination of sub-queries by clause role
    Boolean(BoolQuery),
    /// Matches nothing; returned for empty input
    MatchNone,
}

impl Query {
    /// Get the query type name for debugging and logging
    pub fn query_type(&self) -> &'static str {
        match self {
            Query::Match(_) => "match",
            Query::Phrase(_) => "phrase",
            Query::Term(_) => "term",
            Query::Regexp(_) => "regexp",
            Query::Wildcard(_) => "wildcard",
            Query::NumericRange(_) => "numeric_range",
            Query::DateRange(_) => "date_range",
            Query::Boolean(_) => "bool",
            Query::MatchNone => "match_none",
        }
    }

    /// Get the boost factor carried by this node
    pub fn boost(&self) -> f64 {
        match self {
            Query::Match(q) => q.boost,
            Query::Phrase(q) => q.boost,
            Query::Term(q) => q.boost,
            Query::Regexp(q) => q.boost,
            Query::Wildcard(q) => q.boost,
            Query::NumericRange(q) => q.boost,
            Query::DateRange(q) => q.boost,
            Query::Boolean(q) => q.boost,
            Query::MatchNone => 1.0,
        }
    }
}

impl From<MatchQuery> for Query {
    fn from(query: MatchQuery) -> Self {
        Query::Match(query)
    }
}

impl From<PhraseQuery> for Query {
    fn from(query: PhraseQuery) -> Self {
        Query::Phrase(query)
    }
}

impl From<TermQuery> for Query {
    fn from(query: TermQuery) -> Self {
        Query::Term(query)
    }
}

impl From<RegexpQuery> for Query {
    fn from(query: RegexpQuery) -> Self {
        Query::Regexp(query)
    }
}

impl From<WildcardQuery> for Query {
    fn from(query: WildcardQuery) -> Self {
        Query::Wildcard(query)
    }
}

impl From<NumericRangeQuery> for Query {
    fn from(query: NumericRangeQuery) -> Self {
        Query::NumericRange(query)
    }
}

impl From<DateRangeQuery> for Query {
    fn from(query: DateRangeQuery) -> Self {
        Query::DateRange(query)
    }
}

impl From<BoolQuery> for Query {
    fn from(query: BoolQuery) -> Self {
        Query::Boolean(query)
    }
}
