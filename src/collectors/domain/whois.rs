//! WHOIS stage of the domain collector.
//!
//! Nothing in this stage aborts the lookup: every failure becomes an inline
//! error field and the DNS section already in the result list stays intact.

use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{UNKNOWN_REGISTRAR, WHOIS_HEADER, WHOIS_MALFORMED_DOMAIN};
use crate::error_handling::LookupError;
use crate::fetch::{endpoint, LookupContext};
use crate::results::ResultList;
use crate::timestamp::format_date_value;

/// WHOIS proxy response. Dates are epoch seconds in whatever JSON shape the
/// service chose (number, string, or array of either).
#[derive(Debug, Clone, Default, Deserialize)]
struct WhoisResponse {
    #[serde(default)]
    registrar: Option<Value>,
    #[serde(default)]
    creation_date: Option<Value>,
    #[serde(default)]
    updated_date: Option<Value>,
}

impl WhoisResponse {
    fn registrar(&self) -> String {
        match &self.registrar {
            None | Some(Value::Null) => UNKNOWN_REGISTRAR.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Parses a successful WHOIS body.
///
/// `Ok(None)` means the service had nothing to say (blank body, `null`, `{}`
/// or `[]`), which is how it answers for malformed names and many subdomains.
fn parse_whois_body(body: &str) -> Result<Option<WhoisResponse>, LookupError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<Value>(body)? {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        value @ Value::Object(_) => Ok(Some(serde_json::from_value(value)?)),
        _ => Err(LookupError::Service("unexpected WHOIS response".into())),
    }
}

fn record_failure(results: &mut ResultList, domain: &str, error: &LookupError) {
    log::warn!("WHOIS lookup failed for {}: {}", domain, error);
    results.push_error(format!("WHOIS lookup failed: {}", error));
}

/// Runs the WHOIS stage, appending its section to `results`.
pub(super) async fn append_whois(
    ctx: &LookupContext,
    domain: &str,
    headers: HeaderMap,
    results: &mut ResultList,
) {
    results.push_separator();
    results.push_header(WHOIS_HEADER);

    let mut url = match endpoint(&ctx.endpoints.ninjas, "whois") {
        Ok(url) => url,
        Err(e) => return record_failure(results, domain, &e),
    };
    url.query_pairs_mut().append_pair("domain", domain);

    log::debug!("Starting WHOIS lookup for {}", domain);
    let raw = match ctx.fetch_raw(url, headers).await {
        Ok(raw) => raw,
        Err(e) => return record_failure(results, domain, &e),
    };

    if !raw.status.is_success() {
        let status_line = LookupError::from_status(raw.status).to_string();
        log::warn!("WHOIS service answered {} for {}", status_line, domain);
        results.push_error_with_label(
            status_line.trim_end(),
            format!("WHOIS LOOKUP FAILED FOR {}", domain),
        );
        return;
    }

    match parse_whois_body(&raw.body) {
        Ok(Some(whois)) => {
            results.push("Registrar", whois.registrar());
            results.push(
                "Creation Date",
                format_date_value(whois.creation_date.as_ref()),
            );
            results.push("Last Updated", format_date_value(whois.updated_date.as_ref()));
        }
        Ok(None) => results.push_error(WHOIS_MALFORMED_DOMAIN),
        Err(e) => record_failure(results, domain, &e),
    }
}
