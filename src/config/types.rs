//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_KEY_ENV, DEFAULT_GEOLOCATION_URL, DEFAULT_NINJAS_URL, DEFAULT_PUBLIC_IP_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How repeated DNS record types are numbered in the result list.
///
/// With `Restart`, the occurrence index resets whenever the record type
/// differs from the previous record, so a type that reappears after another
/// type starts again at the bare label. With `PerType`, each record type keeps
/// its own counter for the whole response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RecordIndexing {
    /// Reset the index on every change of record type
    #[default]
    Restart,
    /// Keep one running counter per record type
    PerType,
}

/// Remote service endpoints.
///
/// All of them can be overridden, which is how the integration tests point
/// the collectors at local mock servers.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Geolocation service base URL (`{base}/json/{ip}`)
    pub geolocation: String,
    /// DNS lookup / WHOIS service base URL
    pub ninjas: String,
    /// Public IP discovery endpoint
    pub public_ip: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geolocation: DEFAULT_GEOLOCATION_URL.to_string(),
            ninjas: DEFAULT_NINJAS_URL.to_string(),
            public_ip: DEFAULT_PUBLIC_IP_URL.to_string(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use idspy::Config;
///
/// let config = Config {
///     api_key: Some("secret".to_string()),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// API key for the DNS lookup and WHOIS services
    pub api_key: Option<String>,

    /// Numbering scheme for repeated DNS record types
    pub record_indexing: RecordIndexing,

    /// Remote service endpoints
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_key: None,
            record_indexing: RecordIndexing::default(),
            endpoints: Endpoints::default(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Host information
/// idspy
///
/// # Geolocate an address
/// idspy 8.8.8.8
///
/// # DNS and WHOIS for a domain
/// IDSPY_API_KEY=... idspy example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "idspy",
    version,
    about = "Looks up an IPv4/IPv6 address or a domain name.",
    after_help = "DISCLAIMER. This tool is for educational purposes only. Use Responsibly."
)]
pub struct Opt {
    /// IPv4 address, IPv6 address or domain name (omit for host information)
    pub target: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// API key for the DNS lookup and WHOIS services (falls back to IDSPY_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Numbering of repeated DNS record types: restart|per-type
    #[arg(long, value_enum, default_value_t = RecordIndexing::Restart)]
    pub record_indexing: RecordIndexing,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Geolocation service base URL
    #[arg(long, default_value = DEFAULT_GEOLOCATION_URL)]
    pub geolocation_url: String,

    /// DNS lookup / WHOIS service base URL
    #[arg(long, default_value = DEFAULT_NINJAS_URL)]
    pub ninjas_url: String,

    /// Public IP discovery endpoint
    #[arg(long, default_value = DEFAULT_PUBLIC_IP_URL)]
    pub public_ip_url: String,
}

impl Opt {
    /// Builds the library configuration, reading the API key from the
    /// environment when it was not given on the command line.
    pub fn to_config(&self) -> Config {
        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty());

        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_key,
            record_indexing: self.record_indexing,
            endpoints: Endpoints {
                geolocation: self.geolocation_url.clone(),
                ninjas: self.ninjas_url.clone(),
                public_ip: self.public_ip_url.clone(),
            },
        }
    }
}
