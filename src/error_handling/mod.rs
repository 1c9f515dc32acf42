//! Error handling.
//!
//! Errors are split by phase:
//! - **Initialization**: logger and HTTP client setup
//! - **Lookup**: remote calls made by the collectors
//!
//! Lookup errors are not always fatal. Collectors decide per stage whether an
//! error aborts the call or becomes an inline error field in the result list.

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError};
