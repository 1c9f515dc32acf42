// Shared test helpers for pointing collectors at mock servers.

use idspy::{init_context, Config, LookupContext, RecordIndexing};
use wiremock::MockServer;

/// API key the mock servers expect.
pub const TEST_API_KEY: &str = "test-key";

/// Builds a lookup context whose endpoints all point at `server`.
///
/// Geolocation lives at the server root, the DNS/WHOIS service under `/v1`
/// and public-IP discovery at `/ip`.
#[allow(dead_code)] // Not every test file uses every helper
pub fn context_for(server: &MockServer) -> LookupContext {
    context_with(server, 2, RecordIndexing::Restart)
}

/// Like `context_for`, with an explicit timeout and indexing mode.
#[allow(dead_code)]
pub fn context_with(
    server: &MockServer,
    timeout_seconds: u64,
    record_indexing: RecordIndexing,
) -> LookupContext {
    let mut config = Config {
        api_key: Some(TEST_API_KEY.to_string()),
        timeout_seconds,
        record_indexing,
        ..Default::default()
    };
    config.endpoints.geolocation = server.uri();
    config.endpoints.ninjas = format!("{}/v1", server.uri());
    config.endpoints.public_ip = format!("{}/ip", server.uri());
    init_context(&config).expect("Failed to build lookup context")
}

/// Collects `(label, value)` pairs as owned strings for easy comparison.
#[allow(dead_code)]
pub fn pairs(results: &idspy::ResultList) -> Vec<(String, String)> {
    results
        .pairs()
        .map(|(l, v)| (l.to_string(), v.to_string()))
        .collect()
}

/// Shorthand for an owned `(label, value)` pair.
#[allow(dead_code)]
pub fn pair(label: &str, value: &str) -> (String, String) {
    (label.to_string(), value.to_string())
}
