use std::collections::HashSet;

use time::format_description::well_known::Rfc3339;
use time::format_description::OwnedFormatItem;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::Result;

/// Date format used for the quoted operand of a date range clause.
#[derive(Clone, Debug, Default)]
pub enum DateTimeFormat {
    /// RFC 3339, e.g. `2006-01-02T15:04:05Z`
    #[default]
    Rfc3339,
    /// A custom format built from a `time` format description
    Custom(OwnedFormatItem),
}

impl DateTimeFormat {
    /// Build a custom format from a `time` format description string,
    /// e.g. `"[year]-[month]-[day]"`.
    pub fn custom(description: &str) -> Result<Self> {
        let items = time::format_description::parse_owned::<2>(description)?;
        Ok(DateTimeFormat::Custom(items))
    }

    /// Parse a date/time string with this format.
    ///
    /// Custom descriptions without an offset component parse as a local
    /// date/time and are assumed to be UTC.
    pub fn parse_datetime(
        &self,
        input: &str,
    ) -> std::result::Result<OffsetDateTime, time::error::Parse> {
        match self {
            DateTimeFormat::Rfc3339 => OffsetDateTime::parse(input, &Rfc3339),
            DateTimeFormat::Custom(items) => OffsetDateTime::parse(input, items).or_else(|err| {
                PrimitiveDateTime::parse(input, items)
                    .map(|dt| dt.assume_utc())
                    .map_err(|_| err)
            }),
        }
    }
}

/// Configuration for query string parsing
///
/// All fields have usable defaults; the `with_*` methods allow chaining:
///
/// ```rust
/// use squall::QueryStringOptions;
///
/// let options = QueryStringOptions::default()
///     .with_term_fields(["status", "id"])
///     .with_lowercase_fields(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueryStringOptions {
    /// Format used to parse quoted date range operands (default: RFC 3339)
    pub date_format: DateTimeFormat,
    /// Fields that produce exact term queries instead of analyzed matches
    pub term_fields: HashSet<String>,
    /// Canonicalise field names to lower case before use
    pub lowercase_fields: bool,
    /// Emit a debug trace event per token
    pub debug_lexer: bool,
    /// Emit a debug trace event per grammar reduction
    pub debug_parser: bool,
}

impl QueryStringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date format for date range operands
    pub fn with_date_format(mut self, date_format: DateTimeFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Set the fields that should produce exact term queries
    pub fn with_term_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.term_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Lowercase field names before use and before term-field lookup
    pub fn with_lowercase_fields(mut self, lowercase: bool) -> Self {
        self.lowercase_fields = lowercase;
        self
    }

    /// Trace each token produced by the lexer
    pub fn with_debug_lexer(mut self, debug: bool) -> Self {
        self.debug_lexer = debug;
        self
    }

    /// Trace each grammar reduction in the parser
    pub fn with_debug_parser(mut self, debug: bool) -> Self {
        self.debug_parser = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_default_format_is_rfc3339() {
        let options = QueryStringOptions::default();
        let parsed = options
            .date_format
            .parse_datetime("2006-01-02T15:04:05Z")
            .unwrap();
        assert_eq!(parsed, datetime!(2006-01-02 15:04:05 UTC));
    }

    #[test]
    fn test_custom_format_without_offset_assumes_utc() {
        let format = DateTimeFormat::custom("[year]-[month]-[day] [hour]:[minute]:[second]")
            .unwrap();
        let parsed = format.parse_datetime("2024-06-30 08:15:00").unwrap();
        assert_eq!(parsed, datetime!(2024-06-30 08:15:00 UTC));
    }

    #[test]
    fn test_custom_format_rejects_bad_input() {
        let format = DateTimeFormat::custom("[year]-[month]-[day]").unwrap();
        assert!(format.parse_datetime("not a date").is_err());
    }

    #[test]
    fn test_option_builders() {
        let options = QueryStringOptions::new()
            .with_term_fields(["Field"])
            .with_lowercase_fields(true)
            .with_debug_lexer(true)
            .with_debug_parser(true);

        assert!(options.term_fields.contains("Field"));
        assert!(options.lowercase_fields);
        assert!(options.debug_lexer);
        assert!(options.debug_parser);
    }
}
