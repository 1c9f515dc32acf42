//! Collectors gather information about one target and return it as a
//! [`ResultList`](crate::results::ResultList).
//!
//! - `ip` - geolocation for a single address
//! - `domain` - DNS records, A-record owner and WHOIS for a domain
//! - `host` - facts about the local machine

pub mod domain;
pub mod host;
pub mod ip;

pub use domain::lookup_domain;
pub use host::lookup_host;
pub use ip::lookup_ip;
