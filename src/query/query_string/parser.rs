//! Grammar driver for query strings
//!
//! Folds the token stream into clauses of the root boolean query:
//!
//! ```text
//! query        := search_part*
//! search_part  := prefix clause boost
//! prefix       := ε | '?' | '+' | '-'
//! clause       := STRING [ '~'fuzz ]
//!               | STRING ':' STRING [ '~'fuzz ]
//!               | NUMBER | STRING ':' NUMBER
//!               | PHRASE | STRING ':' PHRASE
//!               | STRING ':' ('>' | '>=' | '<' | '<=') (NUMBER | '-' NUMBER | PHRASE)
//! boost        := ε | '^'value
//! ```
//!
//! Errors never abort the parse: each problem is recorded, the offending
//! token is skipped, and parsing continues so a single run reports every
//! problem in the input.

use tracing::debug;

use super::builders;
use super::lexer::{Lexer, Token};
use crate::config::QueryStringOptions;
use crate::query::ast::Query;
use crate::query::nodes::BoolQuery;

/// Boolean role of a clause within the root query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseRole {
    /// Clause must match (`+` prefix, or no prefix)
    Must,
    /// Clause should match (`?` prefix)
    Should,
    /// Clause must not match (`-` prefix)
    MustNot,
}

/// Parser accumulating clauses onto a root boolean query
///
/// Most callers want [`parse_query_string`](super::parse_query_string); the
/// parser itself is exposed for callers that need the raw, uncoalesced root
/// and the individual error messages.
pub struct QueryStringParser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    options: &'a QueryStringOptions,
    root: BoolQuery,
    errors: Vec<String>,
}

impl<'a> QueryStringParser<'a> {
    /// Create a new parser for the given query string
    pub fn new(input: &str, options: &'a QueryStringOptions) -> Self {
        let lexer = Lexer::new(input, options);
        let mut parser = Self {
            lexer,
            current: Token::Eof,
            options,
            root: BoolQuery::new().with_min_should(1),
            errors: Vec::new(),
        };
        parser.advance();
        parser
    }

    /// Consume the whole input, accumulating clauses and errors
    pub fn run(&mut self) {
        while self.current != Token::Eof {
            self.parse_search_part();
        }
    }

    /// Record an error message against this parse
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Extract the accumulated root query and error messages
    pub fn into_parts(self) -> (BoolQuery, Vec<String>) {
        (self.root, self.errors)
    }

    fn parse_search_part(&mut self) {
        let role = self.parse_prefix();
        let clause = self.parse_clause();
        let boost = self.parse_boost();

        let Some(mut query) = clause else { return };
        if let Some(boost) = boost {
            match builders::apply_boost(query, boost) {
                Ok(boosted) => query = boosted,
                Err(message) => {
                    self.errors.push(message);
                    return;
                }
            }
        }
        self.dispatch(role, query);
    }

    fn parse_prefix(&mut self) -> ClauseRole {
        match self.current {
            Token::Question => {
                self.log_grammar(format_args!("QUESTION"));
                self.advance();
                ClauseRole::Should
            }
            Token::Plus => {
                self.log_grammar(format_args!("PLUS"));
                self.advance();
                ClauseRole::Must
            }
            Token::Minus => {
                self.log_grammar(format_args!("MINUS"));
                self.advance();
                ClauseRole::MustNot
            }
            _ => ClauseRole::Must,
        }
    }

    fn parse_clause(&mut self) -> Option<Query> {
        match self.current.clone() {
            Token::Term(text) => {
                self.advance();
                if self.current == Token::Colon {
                    self.advance();
                    return self.parse_field_clause(text);
                }
                if let Token::Tilde(fuzziness) = self.current.clone() {
                    self.advance();
                    self.log_grammar(format_args!("FUZZY STRING - {text} {fuzziness}"));
                    return self.build(builders::fuzzy_query("", text, &fuzziness));
                }
                self.log_grammar(format_args!("STRING - {text}"));
                Some(builders::string_query(self.options, "", text))
            }
            Token::Number(text) => {
                self.advance();
                self.log_grammar(format_args!("NUMBER - {text}"));
                self.build(builders::number_query("", text))
            }
            Token::Phrase(text) => {
                self.advance();
                self.log_grammar(format_args!("PHRASE - {text}"));
                Some(builders::phrase_query(self.options, "", text))
            }
            Token::Eof => {
                self.errors.push(
                    "syntax error: unexpected end of input, expecting STRING, NUMBER, or PHRASE"
                        .to_string(),
                );
                None
            }
            other => {
                self.errors.push(format!(
                    "syntax error: unexpected {}, expecting STRING, NUMBER, or PHRASE",
                    other.name()
                ));
                self.advance();
                None
            }
        }
    }

    fn parse_field_clause(&mut self, raw_field: String) -> Option<Query> {
        let field = builders::resolve_field(self.options, raw_field);
        match self.current.clone() {
            Token::Term(text) => {
                self.advance();
                if let Token::Tilde(fuzziness) = self.current.clone() {
                    self.advance();
                    self.log_grammar(format_args!(
                        "FIELD - {field} FUZZY STRING - {text} {fuzziness}"
                    ));
                    return self.build(builders::fuzzy_query(&field, text, &fuzziness));
                }
                self.log_grammar(format_args!("FIELD - {field} STRING - {text}"));
                Some(builders::string_query(self.options, &field, text))
            }
            Token::Number(text) => {
                self.advance();
                self.log_grammar(format_args!("FIELD - {field} NUMBER - {text}"));
                self.build(builders::number_query(&field, text))
            }
            Token::Minus => {
                self.advance();
                match self.current.clone() {
                    Token::Number(text) => {
                        self.advance();
                        let negated = format!("-{text}");
                        self.log_grammar(format_args!("FIELD - {field} NUMBER - {negated}"));
                        self.build(builders::number_query(&field, negated))
                    }
                    Token::Eof => {
                        self.errors.push(
                            "syntax error: unexpected end of input, expecting NUMBER after '-'"
                                .to_string(),
                        );
                        None
                    }
                    other => {
                        self.errors.push(format!(
                            "syntax error: unexpected {}, expecting NUMBER after '-'",
                            other.name()
                        ));
                        self.advance();
                        None
                    }
                }
            }
            Token::Phrase(text) => {
                self.advance();
                self.log_grammar(format_args!("FIELD - {field} PHRASE - {text}"));
                Some(builders::phrase_query(self.options, &field, text))
            }
            Token::Greater => {
                self.advance();
                let or_equal = self.eat_equal();
                self.parse_range_operand(field, true, or_equal)
            }
            Token::Less => {
                self.advance();
                let or_equal = self.eat_equal();
                self.parse_range_operand(field, false, or_equal)
            }
            Token::Eof => {
                self.errors.push(format!(
                    "syntax error: unexpected end of input after '{field}:', \
                     expecting STRING, NUMBER, PHRASE, GREATER, or LESS"
                ));
                None
            }
            other => {
                self.errors.push(format!(
                    "syntax error: unexpected {} after '{field}:', \
                     expecting STRING, NUMBER, PHRASE, GREATER, or LESS",
                    other.name()
                ));
                self.advance();
                None
            }
        }
    }

    fn parse_range_operand(&mut self, field: String, greater: bool, or_equal: bool) -> Option<Query> {
        match self.current.clone() {
            Token::Number(text) => {
                self.advance();
                self.build_range(&field, &text, greater, or_equal)
            }
            Token::Minus => {
                self.advance();
                match self.current.clone() {
                    Token::Number(text) => {
                        self.advance();
                        let negated = format!("-{text}");
                        self.build_range(&field, &negated, greater, or_equal)
                    }
                    Token::Eof => {
                        self.errors.push(
                            "syntax error: unexpected end of input, expecting NUMBER after '-'"
                                .to_string(),
                        );
                        None
                    }
                    other => {
                        self.errors.push(format!(
                            "syntax error: unexpected {}, expecting NUMBER after '-'",
                            other.name()
                        ));
                        self.advance();
                        None
                    }
                }
            }
            Token::Phrase(text) => {
                self.advance();
                let comparison = range_name(greater, or_equal);
                self.log_grammar(format_args!("FIELD - {field} {comparison} DATE - {text}"));
                let result = if greater {
                    builders::date_range_greater(self.options, &field, &text, or_equal)
                } else {
                    builders::date_range_less(self.options, &field, &text, or_equal)
                };
                self.build(result)
            }
            Token::Eof => {
                self.errors.push(format!(
                    "syntax error: unexpected end of input in range for '{field}', \
                     expecting NUMBER, MINUS, or PHRASE"
                ));
                None
            }
            other => {
                self.errors.push(format!(
                    "syntax error: unexpected {} in range for '{field}', \
                     expecting NUMBER, MINUS, or PHRASE",
                    other.name()
                ));
                self.advance();
                None
            }
        }
    }

    fn build_range(
        &mut self,
        field: &str,
        text: &str,
        greater: bool,
        or_equal: bool,
    ) -> Option<Query> {
        let comparison = range_name(greater, or_equal);
        self.log_grammar(format_args!("FIELD - {field} {comparison} {text}"));
        let result = if greater {
            builders::numeric_range_greater(field, text, or_equal)
        } else {
            builders::numeric_range_less(field, text, or_equal)
        };
        self.build(result)
    }

    fn parse_boost(&mut self) -> Option<f64> {
        let Token::Caret(text) = self.current.clone() else {
            return None;
        };
        self.advance();
        self.log_grammar(format_args!("BOOST {text}"));
        match builders::parse_boost(&text) {
            Ok(boost) => Some(boost),
            Err(message) => {
                self.errors.push(message);
                None
            }
        }
    }

    fn eat_equal(&mut self) -> bool {
        if self.current == Token::Equal {
            self.advance();
            true
        } else {
            false
        }
    }

    fn dispatch(&mut self, role: ClauseRole, query: Query) {
        if self.options.debug_parser {
            debug!("{:?} clause - {}", role, query.query_type());
        }
        match role {
            ClauseRole::Must => self.root.musts.push(query),
            ClauseRole::Should => self.root.shoulds.push(query),
            ClauseRole::MustNot => self.root.must_nots.push(query),
        }
    }

    fn build(&mut self, result: Result<Query, String>) -> Option<Query> {
        match result {
            Ok(query) => Some(query),
            Err(message) => {
                self.errors.push(message);
                None
            }
        }
    }

    /// Advance to the next token, accumulating lex errors along the way
    fn advance(&mut self) {
        loop {
            match self.lexer.next_token() {
                Ok(token) => {
                    self.current = token;
                    return;
                }
                Err(message) => self.errors.push(message),
            }
        }
    }

    fn log_grammar(&self, args: std::fmt::Arguments<'_>) {
        if self.options.debug_parser {
            debug!("{}", args);
        }
    }
}

fn range_name(greater: bool, or_equal: bool) -> &'static str {
    match (greater, or_equal) {
        (true, false) => "GREATER THAN",
        (true, true) => "GREATER THAN OR EQUAL",
        (false, false) => "LESS THAN",
        (false, true) => "LESS THAN OR EQUAL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::nodes::MatchQuery;

    fn run(input: &str) -> (BoolQuery, Vec<String>) {
        let options = QueryStringOptions::default();
        let mut parser = QueryStringParser::new(input, &options);
        parser.run();
        parser.into_parts()
    }

    #[test]
    fn test_root_has_min_should_one() {
        let (root, errors) = run("test");
        assert!(errors.is_empty());
        assert_eq!(root.min_should, 1);
    }

    #[test]
    fn test_prefixes_select_roles() {
        let (root, errors) = run("+a -b ?c d");
        assert!(errors.is_empty());
        assert_eq!(root.musts.len(), 2);
        assert_eq!(root.must_nots.len(), 1);
        assert_eq!(root.shoulds.len(), 1);
    }

    #[test]
    fn test_boost_applied_to_clause() {
        let (root, errors) = run("test^3");
        assert!(errors.is_empty());
        assert_eq!(
            root.musts,
            vec![Query::Match(
                MatchQuery::new("test").with_and_operator().with_boost(3.0)
            )]
        );
    }

    #[test]
    fn test_clauses_kept_in_input_order() {
        let (root, errors) = run("one two three");
        assert!(errors.is_empty());
        let texts: Vec<&str> = root
            .musts
            .iter()
            .map(|q| match q {
                Query::Match(m) => m.text.as_str(),
                _ => panic!("expected match clauses"),
            })
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_error_recovery_keeps_draining() {
        // text after 'field:-' is an error; the offending token is skipped
        // and what follows still parses as its own clause
        let (root, errors) = run("field:-text other");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("expecting NUMBER after '-'"));
        assert_eq!(root.musts.len(), 1);
    }

    #[test]
    fn test_negative_number_after_field() {
        let (root, errors) = run("field:-5");
        assert!(errors.is_empty());
        assert_eq!(root.musts.len(), 1);
        assert!(matches!(&root.musts[0], Query::Boolean(_)));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let (_, errors) = run("^ field:~text");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("unexpected BOOST"));
        assert!(errors[1].contains("unexpected TILDE"));
    }

    #[test]
    fn test_boost_without_clause_is_an_error() {
        let (root, errors) = run("^5");
        assert_eq!(errors.len(), 1);
        assert!(root.musts.is_empty());
    }

    #[test]
    fn test_double_colon_is_an_error() {
        let (_, errors) = run("field::text");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unexpected COLON"));
    }

    #[test]
    fn test_dangling_prefix_is_an_error() {
        let (_, errors) = run("+");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unexpected end of input"));
    }

    #[test]
    fn test_invalid_boost_value() {
        let (root, errors) = run(r"cat^3\:");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("invalid boost value"));
        // the clause survives unboosted; the error alone fails the parse
        assert_eq!(root.musts.len(), 1);
    }

    #[test]
    fn test_invalid_fuzziness_value() {
        let (_, errors) = run(r"cat~3\0");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("invalid fuzziness value"));
    }
}
