//! squall - search query string parser
//!
//! Parses Lucene-flavored query strings into structured query trees:
//!
//! ```rust
//! use squall::{parse_query_string, Query, QueryStringOptions};
//!
//! let options = QueryStringOptions::default();
//! let query = parse_query_string("+title:rust -status:draft watex~2 score:>=4.5", &options)
//!     .unwrap();
//!
//! match query {
//!     Query::Boolean(root) => {
//!         assert_eq!(root.musts.len(), 3);
//!         assert_eq!(root.must_nots.len(), 1);
//!     }
//!     _ => unreachable!("non-empty input parses to a boolean root"),
//! }
//! ```
//!
//! All problems in an input are diagnosed in one pass and reported as a
//! single error; see [`parse_query_string`] for the syntax.

pub mod config;
pub mod error;
pub mod query;

pub use config::{DateTimeFormat, QueryStringOptions};
pub use error::{Result, SquallError};
pub use query::{parse_query_string, Query};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
