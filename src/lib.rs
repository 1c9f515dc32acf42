//! idspy library: classify a target and collect information about it.
//!
//! A raw input string is classified as an IPv4 address, an IPv6 address, a
//! domain name, or invalid input, then handed to the matching collector:
//!
//! - addresses go to the geolocation collector
//! - domains go to the DNS + WHOIS collector
//! - invalid input produces a fixed list of format hints
//!
//! Every collector returns a [`ResultList`]: ordered label/value fields where
//! errors appear as fields too.
//!
//! # Example
//!
//! ```no_run
//! use idspy::{init_context, lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: std::env::var("IDSPY_API_KEY").ok(),
//!     ..Default::default()
//! };
//! let ctx = init_context(&config)?;
//!
//! let outcome = lookup(&ctx, "example.com").await?;
//! print!("{}", outcome.results);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod classify;
pub mod collectors;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod output;
pub mod results;
pub mod timestamp;

// Re-export public API
pub use classify::{classify, ClassificationKind};
pub use config::{Config, Endpoints, LogFormat, LogLevel, RecordIndexing};
pub use error_handling::{InitializationError, LookupError};
pub use fetch::LookupContext;
pub use initialization::{init_context, init_logger_with};
pub use results::{Field, FieldKind, ResultList};

/// Outcome of [`lookup`]: how the input was classified and what was found.
#[derive(Debug, Clone)]
pub struct Lookup {
    /// Classification of the raw input
    pub kind: ClassificationKind,
    /// Collected fields, in display order
    pub results: ResultList,
}

/// The fixed result list shown for input that is neither an address nor a domain.
pub fn invalid_input_results() -> ResultList {
    let mut results = ResultList::new();
    results.push_error_with_label("Invalid Input", "Please enter a valid IPv4, IPv6, or TLD.");
    results.push_separator();
    results.push("IPv4 Format", "xxx.xxx.xxx.xxx");
    results.push("IPv6 Format", "xxxx:xxxx:xxxx:xxxx:xxxx:xxxx:xxxx:xxxx");
    results.push("TLD Format", "(www).example.com");
    results
}

/// Classifies `input` and runs the matching collector.
///
/// # Errors
///
/// Returns the collector's error when the lookup is fatal: any failure of an
/// address lookup, or a DNS-stage failure of a domain lookup. Invalid input
/// is not an error.
pub async fn lookup(ctx: &LookupContext, input: &str) -> Result<Lookup, LookupError> {
    let kind = classify(input);
    log::debug!("Classified {:?} as {}", input, kind);

    let results = match kind {
        ClassificationKind::Ipv4 | ClassificationKind::Ipv6 => {
            collectors::lookup_ip(ctx, input).await?
        }
        ClassificationKind::Domain => collectors::lookup_domain(ctx, input).await?,
        ClassificationKind::Invalid => invalid_input_results(),
    };

    Ok(Lookup { kind, results })
}
