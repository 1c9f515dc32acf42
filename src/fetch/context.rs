//! Lookup context shared by the collectors.
//!
//! This module defines the `LookupContext` struct that groups the resources
//! every collector needs: the HTTP client, the API key and the endpoints.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Endpoints, RecordIndexing, API_KEY_HEADER};
use crate::error_handling::LookupError;

/// A fetched response whose status the caller wants to inspect itself.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

/// Context containing all shared resources needed for lookups.
///
/// Created once per invocation. Holds no mutable state, so one context can
/// serve any number of sequential lookups.
#[derive(Debug, Clone)]
pub struct LookupContext {
    /// HTTP client (timeout and User-Agent already applied)
    pub client: reqwest::Client,
    /// API key for the DNS lookup and WHOIS services
    pub api_key: Option<String>,
    /// Remote service endpoints
    pub endpoints: Endpoints,
    /// Numbering scheme for repeated DNS record types
    pub record_indexing: RecordIndexing,
}

impl LookupContext {
    /// Creates a new `LookupContext` with the given resources.
    pub fn new(
        client: reqwest::Client,
        api_key: Option<String>,
        endpoints: Endpoints,
        record_indexing: RecordIndexing,
    ) -> Self {
        Self {
            client,
            api_key,
            endpoints,
            record_indexing,
        }
    }

    /// Returns the API key headers, or `MissingApiKey` when none is configured.
    pub fn api_key_headers(&self) -> Result<HeaderMap, LookupError> {
        let key = self.api_key.as_deref().ok_or(LookupError::MissingApiKey)?;
        let mut headers = HeaderMap::new();
        let value: HeaderValue = key
            .parse()
            .map_err(|_| LookupError::Service("API key is not a valid header value".into()))?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        Ok(headers)
    }

    /// Fetches `url` and returns status and body without judging the status.
    pub async fn fetch_raw(&self, url: Url, headers: HeaderMap) -> Result<RawResponse, LookupError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status();
        let body = response.text().await?;
        log::debug!("{} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }

    /// Fetches `url` and decodes a successful JSON body into `T`.
    ///
    /// A non-success status becomes `LookupError::Status`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: Url,
        headers: HeaderMap,
    ) -> Result<T, LookupError> {
        let raw = self.fetch_raw(url, headers).await?;
        if !raw.status.is_success() {
            return Err(LookupError::from_status(raw.status));
        }
        Ok(serde_json::from_str(&raw.body)?)
    }
}

/// Joins `path` onto a base URL that may or may not end in a slash.
pub(crate) fn endpoint(base: &str, path: &str) -> Result<Url, LookupError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path);
    Ok(Url::parse(&joined)?)
}
