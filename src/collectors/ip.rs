//! IP geolocation collector.

use serde::Deserialize;

use crate::error_handling::LookupError;
use crate::fetch::{endpoint, LookupContext};
use crate::results::ResultList;

/// Label of the owning network / ISP field.
pub const OWNER_LABEL: &str = "Owner";

/// Geolocation service response.
///
/// Every field is optional: the service omits most of them for private or
/// reserved ranges.
#[derive(Debug, Clone, Default, Deserialize)]
struct GeolocationResponse {
    status: Option<String>,
    message: Option<String>,
    query: Option<String>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
    zip: Option<String>,
    isp: Option<String>,
}

impl GeolocationResponse {
    fn into_results(self) -> ResultList {
        let mut results = ResultList::new();
        results.push("IP", self.query.unwrap_or_default());
        results.push("City", self.city.unwrap_or_default());
        results.push("Region", self.region_name.unwrap_or_default());
        results.push("Country", self.country.unwrap_or_default());
        results.push("ZIP", self.zip.unwrap_or_default());
        results.push(OWNER_LABEL, self.isp.unwrap_or_default());
        results
    }
}

/// Looks up geolocation data for a single IPv4 or IPv6 address.
///
/// Returns the fields IP, City, Region, Country, ZIP and Owner in that order.
///
/// # Errors
///
/// Transport, timeout and decode failures are returned as-is. A response
/// with `"status": "fail"` becomes `LookupError::Service` carrying the
/// service's message.
pub async fn lookup_ip(ctx: &LookupContext, ip: &str) -> Result<ResultList, LookupError> {
    let mut url = endpoint(&ctx.endpoints.geolocation, "json")?;
    url.path_segments_mut()
        .map_err(|_| LookupError::Service("geolocation endpoint cannot take a path".into()))?
        .push(ip);

    log::debug!("Starting geolocation lookup for {}", ip);
    let response: GeolocationResponse = ctx.fetch_json(url, Default::default()).await?;

    if response.status.as_deref() == Some("fail") {
        let message = response
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        log::warn!("Geolocation lookup for {} rejected: {}", ip, message);
        return Err(LookupError::Service(message));
    }

    Ok(response.into_results())
}

/// Looks up only the owning network / ISP of `ip`.
pub async fn lookup_owner(ctx: &LookupContext, ip: &str) -> Result<String, LookupError> {
    let results = lookup_ip(ctx, ip).await?;
    Ok(results.get(OWNER_LABEL).unwrap_or_default().to_string())
}
