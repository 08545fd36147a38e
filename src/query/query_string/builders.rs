//! Semantic builders: turn `(field, value, payload)` tuples from the
//! grammar into typed query nodes
//!
//! Builders return `Err(message)` for semantic problems (unparseable
//! numbers, fuzziness, boosts, dates); the parser accumulates the message
//! and keeps going.

use crate::config::QueryStringOptions;
use crate::query::ast::Query;
use crate::query::nodes::{
    BoolQuery, DateRangeQuery, MatchQuery, NumericRangeQuery, PhraseQuery, RegexpQuery, TermQuery,
    WildcardQuery, MAX_NUMERIC, MIN_NUMERIC,
};

/// Canonicalise a field name per the options
pub(crate) fn resolve_field(options: &QueryStringOptions, field: String) -> String {
    if options.lowercase_fields {
        field.to_lowercase()
    } else {
        field
    }
}

/// Build the query for a bare or field-qualified string clause
///
/// `/…/` becomes a regexp query, `*`/`?` a wildcard query, a term-field an
/// exact term query, `true`/`false` a unit numeric range over 1/0, and
/// anything else a conjunctive match.
pub(crate) fn string_query(options: &QueryStringOptions, field: &str, text: String) -> Query {
    if text.len() >= 2 && text.starts_with('/') && text.ends_with('/') {
        let pattern = text[1..text.len() - 1].to_string();
        return RegexpQuery::new(pattern).with_field(field).into();
    }
    if text.contains(['*', '?']) {
        return WildcardQuery::new(text).with_field(field).into();
    }
    if options.term_fields.contains(field) {
        return TermQuery::new(text).with_field(field).into();
    }
    if text == "true" {
        return NumericRangeQuery::new(1.0, 1.0, true, true)
            .with_field(field)
            .into();
    }
    if text == "false" {
        return NumericRangeQuery::new(0.0, 0.0, true, true)
            .with_field(field)
            .into();
    }
    MatchQuery::new(text)
        .with_field(field)
        .with_and_operator()
        .into()
}

/// Build a fuzzy match from a string clause and the tilde payload
pub(crate) fn fuzzy_query(field: &str, text: String, fuzziness: &str) -> Result<Query, String> {
    let fuzziness: f64 = fuzziness
        .parse()
        .map_err(|err| format!("invalid fuzziness value: {err}"))?;
    Ok(MatchQuery::new(text)
        .with_field(field)
        .with_fuzziness(fuzziness as u32)
        .into())
}

/// Build the query for a number clause: a disjunction over the literal text
/// and the `[v, v]` numeric range, so the value matches fields indexed as
/// text as well as fields indexed numerically
pub(crate) fn number_query(field: &str, text: String) -> Result<Query, String> {
    let value: f64 = text
        .parse()
        .map_err(|err| format!("error parsing number: {err}"))?;
    let text_match = MatchQuery::new(text).with_field(field);
    let value_range = NumericRangeQuery::new(value, value, true, true).with_field(field);
    Ok(BoolQuery::new()
        .with_min_should(1)
        .should(text_match)
        .should(value_range)
        .into())
}

/// Build the query for a phrase clause
///
/// A fielded phrase is a phrase match (or an exact term for term fields).
/// An unfielded phrase also matches documents holding the whole phrase as
/// one exact token.
pub(crate) fn phrase_query(options: &QueryStringOptions, field: &str, phrase: String) -> Query {
    if options.term_fields.contains(field) {
        return TermQuery::new(phrase).with_field(field).into();
    }
    if field.is_empty() {
        return BoolQuery::new()
            .with_min_should(1)
            .should(PhraseQuery::new(phrase.clone()))
            .should(TermQuery::new(phrase))
            .into();
    }
    PhraseQuery::new(phrase).with_field(field).into()
}

pub(crate) fn numeric_range_greater(
    field: &str,
    text: &str,
    or_equal: bool,
) -> Result<Query, String> {
    let min: f64 = text
        .parse()
        .map_err(|err| format!("error parsing number: {err}"))?;
    Ok(NumericRangeQuery::new(min, MAX_NUMERIC, or_equal, true)
        .with_field(field)
        .into())
}

pub(crate) fn numeric_range_less(
    field: &str,
    text: &str,
    or_equal: bool,
) -> Result<Query, String> {
    let max: f64 = text
        .parse()
        .map_err(|err| format!("error parsing number: {err}"))?;
    Ok(NumericRangeQuery::new(MIN_NUMERIC, max, true, or_equal)
        .with_field(field)
        .into())
}

pub(crate) fn date_range_greater(
    options: &QueryStringOptions,
    field: &str,
    text: &str,
    or_equal: bool,
) -> Result<Query, String> {
    let min = options
        .date_format
        .parse_datetime(text)
        .map_err(|err| format!("invalid time: {err}"))?;
    Ok(DateRangeQuery::new(Some(min), None, or_equal, true)
        .with_field(field)
        .into())
}

pub(crate) fn date_range_less(
    options: &QueryStringOptions,
    field: &str,
    text: &str,
    or_equal: bool,
) -> Result<Query, String> {
    let max = options
        .date_format
        .parse_datetime(text)
        .map_err(|err| format!("invalid time: {err}"))?;
    Ok(DateRangeQuery::new(None, Some(max), true, or_equal)
        .with_field(field)
        .into())
}

/// Parse the caret payload into a boost factor
pub(crate) fn parse_boost(text: &str) -> Result<f64, String> {
    text.parse()
        .map_err(|err| format!("invalid boost value: {err}"))
}

/// Attach a boost to an already-built query
pub(crate) fn apply_boost(query: Query, boost: f64) -> Result<Query, String> {
    match query {
        Query::Match(q) => Ok(q.with_boost(boost).into()),
        Query::Phrase(q) => Ok(q.with_boost(boost).into()),
        Query::Term(q) => Ok(q.with_boost(boost).into()),
        Query::Regexp(q) => Ok(q.with_boost(boost).into()),
        Query::Wildcard(q) => Ok(q.with_boost(boost).into()),
        Query::NumericRange(q) => Ok(q.with_boost(boost).into()),
        Query::DateRange(q) => Ok(q.with_boost(boost).into()),
        Query::Boolean(q) => Ok(q.with_boost(boost).into()),
        Query::MatchNone => Err(format!(
            "cannot boost {} query",
            Query::MatchNone.query_type()
        )),
    }
}
