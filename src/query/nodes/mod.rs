//! Concrete query node implementations
//!
//! One file per node shape; every node carries a field, its payload, and a
//! boost factor, with builder-style modifiers.

mod bool_query;
mod date_range_query;
mod match_query;
mod numeric_range_query;
mod phrase_query;
mod regexp_query;
mod term_query;
mod wildcard_query;

pub use bool_query::BoolQuery;
pub use date_range_query::DateRangeQuery;
pub use match_query::{MatchOperator, MatchQuery};
pub use numeric_range_query::{NumericRangeQuery, MAX_NUMERIC, MIN_NUMERIC};
pub use phrase_query::PhraseQuery;
pub use regexp_query::RegexpQuery;
pub use term_query::TermQuery;
pub use wildcard_query::WildcardQuery;
