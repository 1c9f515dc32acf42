//! Domain collector: DNS records, A-record owner and WHOIS.
//!
//! The stages run strictly one after another:
//!
//! 1. **NSLOOKUP** - fetch the record list and fold it into labeled fields.
//!    An empty answer ends the lookup with an error field. A transport fault
//!    aborts the whole call.
//! 2. **A Record Owner** - geolocate the first `A` record (skipped if there
//!    is none).
//! 3. **WHOIS** - registrar and dates. Failures here are reported inline and
//!    never discard the DNS section.

mod fold;
mod whois;

use std::net::Ipv4Addr;

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::collectors::ip::lookup_owner;
use crate::config::{
    A_RECORD_OWNER_LABEL, DOMAIN_NOT_REGISTERED, LOOKUP_UNAVAILABLE, NSLOOKUP_HEADER,
    PROTOCOL_PREFIXES,
};
use crate::error_handling::LookupError;
use crate::fetch::{endpoint, LookupContext};
use crate::results::ResultList;

pub use fold::{fold_records, DnsRecord, RecordFolder};

/// Strips one leading `https://` or `http://` (checked in that order).
///
/// # Examples
///
/// ```
/// use idspy::collectors::domain::normalize_domain;
///
/// assert_eq!(normalize_domain("https://example.com"), "example.com");
/// assert_eq!(normalize_domain("example.com"), "example.com");
/// ```
pub fn normalize_domain(domain: &str) -> &str {
    PROTOCOL_PREFIXES
        .iter()
        .find_map(|prefix| domain.strip_prefix(*prefix))
        .unwrap_or(domain)
}

/// Interprets the DNS lookup body.
///
/// A blank body, `null`, `{}` and `[]` all mean "no records".
fn parse_dns_body(body: &str) -> Result<Vec<DnsRecord>, LookupError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(body)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(map) => {
            let message = map
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unexpected DNS lookup response")
                .to_string();
            Err(LookupError::Service(message))
        }
        _ => Err(LookupError::Service(
            "unexpected DNS lookup response".into(),
        )),
    }
}

async fn fetch_dns_records(
    ctx: &LookupContext,
    domain: &str,
    headers: HeaderMap,
) -> Result<Vec<DnsRecord>, LookupError> {
    let mut url = endpoint(&ctx.endpoints.ninjas, "dnslookup")?;
    url.query_pairs_mut().append_pair("domain", domain);

    log::debug!("Starting DNS lookup for {}", domain);
    let raw = ctx.fetch_raw(url, headers).await?;
    if !raw.status.is_success() {
        return Err(LookupError::from_status(raw.status));
    }
    parse_dns_body(&raw.body)
}

/// Appends `A Record Owner` for the first `A` record, if there is one.
///
/// A first `A` value that is not an IPv4 address is reported as unavailable
/// without contacting the geolocation service.
async fn append_a_record_owner(ctx: &LookupContext, results: &mut ResultList) {
    let Some(value) = results.get("A") else {
        log::debug!("No A record; skipping owner lookup");
        return;
    };

    // An empty path segment makes the geolocation service answer for the caller
    let Ok(address) = value.trim().parse::<Ipv4Addr>() else {
        log::warn!("First A record {:?} is not an IPv4 address; skipping owner lookup", value);
        results.push(A_RECORD_OWNER_LABEL, LOOKUP_UNAVAILABLE);
        return;
    };

    let owner = match lookup_owner(ctx, &address.to_string()).await {
        Ok(owner) => owner,
        Err(e) => {
            log::warn!("Owner lookup for A record {} failed: {}", address, e);
            LOOKUP_UNAVAILABLE.to_string()
        }
    };
    results.push(A_RECORD_OWNER_LABEL, owner);
}

/// Gathers DNS, A-record owner and WHOIS information for `domain`.
///
/// # Errors
///
/// Only the DNS stage can fail the call: a missing API key, a transport
/// fault or timeout, an undecodable body, a non-success status or a service
/// error object. Everything after the DNS stage reports failures as fields.
pub async fn lookup_domain(ctx: &LookupContext, domain: &str) -> Result<ResultList, LookupError> {
    let domain = normalize_domain(domain);
    let headers = ctx.api_key_headers()?;

    let mut results = ResultList::new();
    results.push_header(NSLOOKUP_HEADER);

    let records = fetch_dns_records(ctx, domain, headers.clone()).await?;
    if records.is_empty() {
        log::info!("No DNS records for {}", domain);
        results.push_error(DOMAIN_NOT_REGISTERED);
        return Ok(results);
    }

    fold_records(&records, ctx.record_indexing, &mut results);
    append_a_record_owner(ctx, &mut results).await;

    whois::append_whois(ctx, domain, headers, &mut results).await;
    Ok(results)
}
