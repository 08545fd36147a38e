//! Query string parsing
//!
//! Translates a compact, human-written query string into a [`Query`] tree.
//! Supported syntax:
//!
//! - free terms: `animated scifi` (adjacent terms merge into one
//!   conjunctive match)
//! - phrases: `"test phrase"`
//! - field qualification: `title:rust`, `field:"a phrase"`
//! - clause prefixes: `+must`, `-mustnot`, `?should` (no prefix means must)
//! - comparisons: `score:>5`, `score:<=-1.5`,
//!   `created:>="2006-01-02T15:04:05Z"`
//! - patterns: `/mar.*ty/` (regexp), `mart*`, `te?t` (wildcards)
//! - fuzziness: `watex~`, `watex~2`
//! - boosts: `term^3`, `"a phrase"^0.5`
//! - escapes: `name\:marty`, `marty\ couchbase`, `\+marty`
//!
//! Parsing never stops at the first problem: every error found in the
//! input is accumulated and reported in a single failure.
//!
//! # Example
//!
//! ```rust
//! use squall::{parse_query_string, QueryStringOptions};
//!
//! let query = parse_query_string(
//!     r#"+title:rust -status:draft score:>=4.5 "exact phrase""#,
//!     &QueryStringOptions::default(),
//! )
//! .unwrap();
//! ```

mod builders;
mod coalesce;
pub mod lexer;
pub mod parser;

pub use lexer::{Lexer, Token};
pub use parser::{ClauseRole, QueryStringParser};

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::config::QueryStringOptions;
use crate::error::{Result, SquallError};
use crate::query::ast::Query;

/// Parse a query string into a query tree
///
/// Empty input returns [`Query::MatchNone`]. Any other input produces the
/// root boolean query with one clause per search part, or an error listing
/// every problem found, one per line. A query is never returned alongside
/// errors.
pub fn parse_query_string(query: &str, options: &QueryStringOptions) -> Result<Query> {
    if query.is_empty() {
        return Ok(Query::MatchNone);
    }

    let mut parser = QueryStringParser::new(query, options);
    if catch_unwind(AssertUnwindSafe(|| parser.run())).is_err() {
        parser.record_error("parse error: internal parser failure");
    }

    let (root, errors) = parser.into_parts();
    if !errors.is_empty() {
        return Err(SquallError::QueryParse(errors.join("\n")));
    }

    Ok(Query::Boolean(coalesce::coalesce_adjacent_terms(root)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::nodes::BoolQuery;

    #[test]
    fn test_empty_input_matches_none() {
        let query = parse_query_string("", &QueryStringOptions::default()).unwrap();
        assert_eq!(query, Query::MatchNone);
    }

    #[test]
    fn test_whitespace_only_input_is_an_empty_boolean() {
        let query = parse_query_string("   ", &QueryStringOptions::default()).unwrap();
        assert_eq!(query, Query::Boolean(BoolQuery::new().with_min_should(1)));
    }

    #[test]
    fn test_errors_joined_one_per_line() {
        let err = parse_query_string("^ field:~text", &QueryStringOptions::default()).unwrap_err();
        assert_eq!(err.messages().count(), 2);
    }
}
