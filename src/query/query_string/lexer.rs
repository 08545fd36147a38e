//! Lexer for the query string syntax
//!
//! Tokenizes query strings into a stream of tokens. The lexer is a single
//! pass state machine; escape resolution happens here, so the parser only
//! ever sees resolved text.

use tracing::debug;

use crate::config::QueryStringOptions;

/// Longest accepted lexeme, in characters. Anything longer is reported as
/// an error and the remainder of the lexeme is consumed without a token.
pub const MAX_LEXEME_LEN: usize = 256;

/// Token types for query string parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A bare term, after escape resolution
    Term(String),
    /// Content of a double-quoted phrase, with escapes resolved
    Phrase(String),
    /// A decimal literal, retained as text
    Number(String),

    /// Plus sign (required clause)
    Plus,
    /// Minus sign (excluded clause)
    Minus,
    /// Question mark (optional clause)
    Question,
    /// Colon separator (field:value)
    Colon,
    /// Greater-than comparison
    Greater,
    /// Less-than comparison
    Less,
    /// Equal sign (makes a comparison inclusive)
    Equal,

    /// Tilde with its fuzziness text; a bare `~` carries `"1"`
    Tilde(String),
    /// Caret with its boost text; a bare `^` carries `"1"`
    Caret(String),

    /// End of input
    Eof,
}

impl Token {
    /// Token vocabulary name, used in syntax error messages
    pub fn name(&self) -> &'static str {
        match self {
            Token::Term(_) => "STRING",
            Token::Phrase(_) => "PHRASE",
            Token::Number(_) => "NUMBER",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Question => "QUESTION",
            Token::Colon => "COLON",
            Token::Greater => "GREATER",
            Token::Less => "LESS",
            Token::Equal => "EQUAL",
            Token::Tilde(_) => "TILDE",
            Token::Caret(_) => "BOOST",
            Token::Eof => "end of input",
        }
    }
}

/// Lexer for tokenizing query strings
pub struct Lexer<'a> {
    input: Vec<char>,
    position: usize,
    options: &'a QueryStringOptions,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input string
    pub fn new(input: &str, options: &'a QueryStringOptions) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            options,
        }
    }

    /// Get the next token from the input
    ///
    /// Errors carry the message to accumulate; the lexer stays usable and
    /// the next call resumes after the offending lexeme.
    pub fn next_token(&mut self) -> Result<Token, String> {
        self.skip_whitespace();

        if self.position >= self.input.len() {
            return Ok(Token::Eof);
        }

        let token = match self.current_char() {
            ':' => {
                self.advance();
                Token::Colon
            }
            '+' => {
                self.advance();
                Token::Plus
            }
            '-' => {
                self.advance();
                Token::Minus
            }
            '?' => {
                self.advance();
                Token::Question
            }
            '>' => {
                self.advance();
                Token::Greater
            }
            '<' => {
                self.advance();
                Token::Less
            }
            '=' => {
                self.advance();
                Token::Equal
            }
            '~' => {
                self.advance();
                Token::Tilde(self.read_op_tail()?)
            }
            '^' => {
                self.advance();
                Token::Caret(self.read_op_tail()?)
            }
            '"' => {
                self.advance();
                Token::Phrase(self.read_phrase()?)
            }
            '/' => Token::Term(self.read_regex()?),
            _ => self.read_term_or_number()?,
        };

        if self.options.debug_lexer {
            log_token(&token);
        }

        Ok(token)
    }

    /// Check if the lexer has consumed all input
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Read a bare term, classifying it as a number on exit when it is a
    /// pure decimal literal and no escape was applied
    fn read_term_or_number(&mut self) -> Result<Token, String> {
        let mut buf = String::new();
        let mut saw_escape = false;
        let mut decimal = true;
        let mut seen_dot = false;

        while self.position < self.input.len() {
            let ch = self.current_char();
            match ch {
                ':' | '^' | '~' | ' ' | '\t' | '"' => break,
                '\\' => {
                    saw_escape = true;
                    self.advance();
                    self.read_escaped(&mut buf);
                }
                _ => {
                    if ch.is_ascii_digit() {
                        // still a candidate number
                    } else if ch == '.' && !seen_dot {
                        seen_dot = true;
                    } else {
                        decimal = false;
                    }
                    buf.push(ch);
                    self.advance();
                }
            }
        }

        self.check_length(&buf)?;

        if decimal && !saw_escape && !buf.is_empty() {
            Ok(Token::Number(buf))
        } else {
            Ok(Token::Term(buf))
        }
    }

    /// Read the remainder of a phrase, after the opening quote
    fn read_phrase(&mut self) -> Result<String, String> {
        let mut buf = String::new();

        while self.position < self.input.len() {
            let ch = self.current_char();
            match ch {
                '"' => {
                    self.advance();
                    self.check_length(&buf)?;
                    return Ok(buf);
                }
                '\\' => {
                    self.advance();
                    if self.position >= self.input.len() {
                        break;
                    }
                    let escaped = self.current_char();
                    match escaped {
                        '"' | '\\' => buf.push(escaped),
                        _ => {
                            buf.push('\\');
                            buf.push(escaped);
                        }
                    }
                    self.advance();
                }
                _ => {
                    buf.push(ch);
                    self.advance();
                }
            }
        }

        Err("unterminated phrase, missing closing '\"'".to_string())
    }

    /// Read a `/pattern/` lexeme, returned with both slashes so the
    /// semantic layer can recognise the shape
    fn read_regex(&mut self) -> Result<String, String> {
        let mut buf = String::new();
        buf.push('/');
        self.advance();

        while self.position < self.input.len() {
            let ch = self.current_char();
            match ch {
                '/' => {
                    buf.push('/');
                    self.advance();
                    self.check_length(&buf)?;
                    return Ok(buf);
                }
                '\\' => {
                    // keep regex escapes verbatim; the next char never ends
                    // the pattern
                    buf.push('\\');
                    self.advance();
                    if self.position < self.input.len() {
                        buf.push(self.current_char());
                        self.advance();
                    }
                }
                _ => {
                    buf.push(ch);
                    self.advance();
                }
            }
        }

        Err("unterminated regular expression, missing closing '/'".to_string())
    }

    /// Read the payload following `~` or `^`: everything up to unescaped
    /// whitespace, with term escape resolution applied. An empty payload
    /// becomes `"1"`, the default fuzziness/boost.
    fn read_op_tail(&mut self) -> Result<String, String> {
        let mut buf = String::new();

        while self.position < self.input.len() {
            let ch = self.current_char();
            match ch {
                ' ' | '\t' => break,
                '\\' => {
                    self.advance();
                    self.read_escaped(&mut buf);
                }
                _ => {
                    buf.push(ch);
                    self.advance();
                }
            }
        }

        self.check_length(&buf)?;

        if buf.is_empty() {
            Ok("1".to_string())
        } else {
            Ok(buf)
        }
    }

    /// Resolve one escape sequence into `buf`; the backslash is already
    /// consumed. Unsupported escapes keep the backslash; a trailing
    /// backslash at end of input is kept literally.
    fn read_escaped(&mut self, buf: &mut String) {
        if self.position >= self.input.len() {
            buf.push('\\');
            return;
        }
        let escaped = self.current_char();
        if is_escapable(escaped) {
            buf.push(escaped);
        } else {
            buf.push('\\');
            buf.push(escaped);
        }
        self.advance();
    }

    fn check_length(&self, buf: &str) -> Result<(), String> {
        if buf.chars().count() > MAX_LEXEME_LEN {
            Err(format!(
                "lexeme exceeds maximum length of {MAX_LEXEME_LEN} characters"
            ))
        } else {
            Ok(())
        }
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.position < self.input.len() {
            match self.current_char() {
                ' ' | '\t' => self.advance(),
                _ => break,
            }
        }
    }
}

/// Characters that an escape resolves to themselves; anything else keeps
/// its backslash
fn is_escapable(ch: char) -> bool {
    matches!(ch, ':' | ' ' | '+' | '-' | '"' | '\\')
}

fn log_token(token: &Token) {
    match token {
        Token::Term(s) => debug!("STRING - '{}'", s),
        Token::Phrase(s) => debug!("PHRASE - '{}'", s),
        Token::Number(s) => debug!("NUMBER - '{}'", s),
        Token::Tilde(s) => debug!("TILDE - '{}'", s),
        Token::Caret(s) => debug!("BOOST - '{}'", s),
        other => debug!("{}", other.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Result<Token, String>> {
        let options = QueryStringOptions::default();
        let mut lexer = Lexer::new(input, &options);
        let mut out = Vec::new();
        loop {
            match lexer.next_token() {
                Ok(Token::Eof) => break,
                other => out.push(other),
            }
            if lexer.is_eof() && matches!(out.last(), Some(Err(_))) {
                break;
            }
        }
        out
    }

    fn ok_tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .into_iter()
            .map(|t| t.expect("unexpected lex error"))
            .collect()
    }

    fn term(s: &str) -> Token {
        Token::Term(s.to_string())
    }

    fn number(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    #[test]
    fn test_simple_term() {
        assert_eq!(ok_tokens("hello"), vec![term("hello")]);
    }

    #[test]
    fn test_field_value() {
        assert_eq!(
            ok_tokens("title:rust"),
            vec![term("title"), Token::Colon, term("rust")]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(ok_tokens("42 3.14"), vec![number("42"), number("3.14")]);
    }

    #[test]
    fn test_dotted_quad_is_a_term() {
        assert_eq!(ok_tokens("127.0.0.1"), vec![term("127.0.0.1")]);
    }

    #[test]
    fn test_hex_id_is_a_term() {
        assert_eq!(
            ok_tokens("555c3bb06f7a127cda000005"),
            vec![term("555c3bb06f7a127cda000005")]
        );
    }

    #[test]
    fn test_minus_before_number() {
        assert_eq!(ok_tokens("-10"), vec![Token::Minus, number("10")]);
    }

    #[test]
    fn test_comparison_run() {
        assert_eq!(
            ok_tokens("field:>=-5"),
            vec![
                term("field"),
                Token::Colon,
                Token::Greater,
                Token::Equal,
                Token::Minus,
                number("5"),
            ]
        );
    }

    #[test]
    fn test_operators_legal_inside_terms() {
        assert_eq!(ok_tokens("t-est"), vec![term("t-est")]);
        assert_eq!(ok_tokens("t+est"), vec![term("t+est")]);
        assert_eq!(ok_tokens("t>est"), vec![term("t>est")]);
        assert_eq!(ok_tokens("t<est"), vec![term("t<est")]);
        assert_eq!(ok_tokens("t=est"), vec![term("t=est")]);
    }

    #[test]
    fn test_plus_minus_question_prefixes() {
        assert_eq!(
            ok_tokens("+req -exc ?opt"),
            vec![
                Token::Plus,
                term("req"),
                Token::Minus,
                term("exc"),
                Token::Question,
                term("opt"),
            ]
        );
    }

    #[test]
    fn test_quoted_phrase() {
        assert_eq!(
            ok_tokens("\"hello world\""),
            vec![Token::Phrase("hello world".to_string())]
        );
    }

    #[test]
    fn test_phrase_escaped_quote() {
        assert_eq!(
            ok_tokens(r#""what does \"quote\" mean""#),
            vec![Token::Phrase(r#"what does "quote" mean"#.to_string())]
        );
    }

    #[test]
    fn test_phrase_keeps_other_escapes() {
        assert_eq!(
            ok_tokens(r#""a\b""#),
            vec![Token::Phrase(r"a\b".to_string())]
        );
    }

    #[test]
    fn test_unterminated_phrase() {
        let tokens = tokenize("\"unterminated");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_err());
    }

    #[test]
    fn test_fuzzy_with_distance() {
        assert_eq!(
            ok_tokens("rust~2"),
            vec![term("rust"), Token::Tilde("2".to_string())]
        );
    }

    #[test]
    fn test_fuzzy_defaults_to_one() {
        assert_eq!(
            ok_tokens("rust~"),
            vec![term("rust"), Token::Tilde("1".to_string())]
        );
    }

    #[test]
    fn test_tilde_ends_at_whitespace() {
        assert_eq!(
            ok_tokens("watex~ 2"),
            vec![term("watex"), Token::Tilde("1".to_string()), number("2")]
        );
    }

    #[test]
    fn test_boost_with_value() {
        assert_eq!(
            ok_tokens("rust^2.5"),
            vec![term("rust"), Token::Caret("2.5".to_string())]
        );
    }

    #[test]
    fn test_boost_defaults_to_one() {
        assert_eq!(
            ok_tokens("term^"),
            vec![term("term"), Token::Caret("1".to_string())]
        );
    }

    #[test]
    fn test_boost_payload_swallows_escapes() {
        // the escaped colon lands in the payload, which no longer parses
        // as a number downstream
        assert_eq!(
            ok_tokens(r"cat^3\:"),
            vec![term("cat"), Token::Caret("3:".to_string())]
        );
        assert_eq!(
            ok_tokens(r"cat~3\0"),
            vec![term("cat"), Token::Tilde(r"3\0".to_string())]
        );
    }

    #[test]
    fn test_escape_colon_in_term() {
        assert_eq!(ok_tokens(r"name\:marty"), vec![term("name:marty")]);
    }

    #[test]
    fn test_escape_space_in_term() {
        assert_eq!(ok_tokens(r"marty\ couchbase"), vec![term("marty couchbase")]);
    }

    #[test]
    fn test_escape_leading_operators() {
        assert_eq!(ok_tokens(r"\+marty"), vec![term("+marty")]);
        assert_eq!(ok_tokens(r"\-marty"), vec![term("-marty")]);
    }

    #[test]
    fn test_unsupported_escape_keeps_backslash() {
        assert_eq!(ok_tokens(r"escap\e"), vec![term(r"escap\e")]);
    }

    #[test]
    fn test_escape_forces_term_classification() {
        assert_eq!(ok_tokens(r"3.0\:"), vec![term("3.0:")]);
        assert_eq!(ok_tokens(r"3.0\a"), vec![term(r"3.0\a")]);
    }

    #[test]
    fn test_regex_lexeme_keeps_slashes() {
        assert_eq!(ok_tokens("/mar.*ty/"), vec![term("/mar.*ty/")]);
    }

    #[test]
    fn test_regex_escaped_slash() {
        assert_eq!(ok_tokens(r"/a\/b/"), vec![term(r"/a\/b/")]);
    }

    #[test]
    fn test_unterminated_regex() {
        let tokens = tokenize("/mar.*ty");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_err());
    }

    #[test]
    fn test_wildcards_stay_in_terms() {
        assert_eq!(ok_tokens("mart*"), vec![term("mart*")]);
        assert_eq!(ok_tokens("te?t"), vec![term("te?t")]);
    }

    #[test]
    fn test_leading_question_is_an_operator() {
        assert_eq!(ok_tokens("?opt"), vec![Token::Question, term("opt")]);
    }

    #[test]
    fn test_lexeme_at_limit_is_accepted() {
        let input = "9".repeat(MAX_LEXEME_LEN);
        assert_eq!(ok_tokens(&input), vec![number(&input)]);
    }

    #[test]
    fn test_lexeme_over_limit_is_rejected() {
        let tokens = tokenize(&"9".repeat(MAX_LEXEME_LEN + 1));
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_err());

        let tokens = tokenize(&"9".repeat(369));
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_err());
    }

    #[test]
    fn test_leading_whitespace_skipped() {
        assert_eq!(ok_tokens("   what"), vec![term("what")]);
    }
}
