//! Remote fetching.
//!
//! Every collector talks to its service through [`LookupContext`], which
//! applies the shared client, the API key header and the error mapping from
//! `reqwest` failures to [`LookupError`](crate::error_handling::LookupError).

mod context;

pub use context::{LookupContext, RawResponse};
pub(crate) use context::endpoint;
