use anyhow::Result;
use clap::Parser;
use squall::{parse_query_string, DateTimeFormat, QueryStringOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squall")]
#[command(about = "Parse a search query string and print the query tree", long_about = None)]
#[command(version = squall::VERSION)]
struct Args {
    /// Query string to parse
    query: String,

    /// Comma-separated fields that produce exact term queries
    #[arg(long, env = "SQUALL_TERM_FIELDS", value_delimiter = ',')]
    term_fields: Vec<String>,

    /// Lowercase field names before use
    #[arg(long)]
    lowercase_fields: bool,

    /// Custom date format description for date ranges (default: RFC 3339)
    #[arg(long)]
    date_format: Option<String>,

    /// Trace lexer tokens
    #[arg(long)]
    debug_lexer: bool,

    /// Trace grammar reductions
    #[arg(long)]
    debug_parser: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing; the --debug-* flags need debug level visible
    let default_level = if args.debug_lexer || args.debug_parser {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut options = QueryStringOptions::default()
        .with_term_fields(args.term_fields)
        .with_lowercase_fields(args.lowercase_fields)
        .with_debug_lexer(args.debug_lexer)
        .with_debug_parser(args.debug_parser);
    if let Some(description) = &args.date_format {
        options = options.with_date_format(DateTimeFormat::custom(description)?);
    }

    let query = parse_query_string(&args.query, &options)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&query)?
    } else {
        serde_json::to_string(&query)?
    };
    println!("{rendered}");

    Ok(())
}
