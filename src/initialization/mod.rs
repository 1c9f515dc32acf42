//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - Lookup context handed to the collectors

mod client;
mod logger;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::fetch::LookupContext;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Builds the lookup context used by every collector.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
pub fn init_context(config: &Config) -> Result<LookupContext, InitializationError> {
    let client = init_client(config)?;
    Ok(LookupContext::new(
        client,
        config.api_key.clone(),
        config.endpoints.clone(),
        config.record_indexing,
    ))
}
