use thiserror::Error;

/// Main error type for squall operations
#[derive(Error, Debug)]
pub enum SquallError {
    /// One or more problems found while parsing a query string.
    ///
    /// Parsing drains the whole input before failing, so the message may
    /// describe several independent problems, one per line.
    #[error("{0}")]
    QueryParse(String),

    #[error("invalid date format description: {0}")]
    DateFormat(#[from] time::error::InvalidFormatDescription),
}

/// Result type alias for squall operations
pub type Result<T> = std::result::Result<T, SquallError>;

impl SquallError {
    /// Iterate the individual problem messages carried by this error.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        match self {
            SquallError::QueryParse(all) => all.lines(),
            SquallError::DateFormat(_) => "".lines(),
        }
    }
}
