//! Configuration constants.
//!
//! Endpoint defaults, environment variable names and fixed labels used when
//! building result lists.

/// Default per-request timeout in seconds.
///
/// Applies to every remote call (geolocation, DNS lookup, WHOIS, public IP).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("idspy/", env!("CARGO_PKG_VERSION"));

/// Base URL of the IP geolocation service (`{base}/json/{ip}`).
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com";

/// Base URL of the DNS lookup and WHOIS proxy service.
///
/// Requests go to `{base}/dnslookup?domain=` and `{base}/whois?domain=`.
pub const DEFAULT_NINJAS_URL: &str = "https://api.api-ninjas.com/v1";

/// Endpoint returning the caller's public IPv4 address as `{"ip": "..."}`.
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org?format=json";

/// Header carrying the API key for the DNS lookup and WHOIS services.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable supplying the API key when `--api-key` is absent.
pub const API_KEY_ENV: &str = "IDSPY_API_KEY";

/// Protocol prefixes stripped from domain input, checked in this order.
pub const PROTOCOL_PREFIXES: [&str; 2] = ["https://", "http://"];

/// Header opening the DNS section of a domain lookup.
pub const NSLOOKUP_HEADER: &str = "NSLOOKUP";
/// Header opening the WHOIS section of a domain lookup.
pub const WHOIS_HEADER: &str = "WHOIS";
/// Default label of inline error fields.
pub const ERROR_LABEL: &str = "Error";
/// Reported when the DNS lookup returns no records.
pub const DOMAIN_NOT_REGISTERED: &str = "This Domain Is Not Registered or Is Malformed";
/// Reported when the WHOIS service answers with an empty body.
pub const WHOIS_MALFORMED_DOMAIN: &str = "WHOIS Failed - Malformed Domain Name";
/// Label of the geolocated owner of the first `A` record.
pub const A_RECORD_OWNER_LABEL: &str = "A Record Owner";
/// Value of `A Record Owner` when the nested geolocation lookup fails.
pub const LOOKUP_UNAVAILABLE: &str = "Lookup unavailable";
/// Registrar value used when the WHOIS response omits the field.
pub const UNKNOWN_REGISTRAR: &str = "Unknown";
