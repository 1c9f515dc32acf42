//! Input classification.
//!
//! Decides whether a raw string is an IPv4 address, an IPv6 address, a domain
//! name, or none of those. Classification is total: every string maps to
//! exactly one [`ClassificationKind`], and `Invalid` is an ordinary outcome.
//!
//! Patterns are tried in a fixed order (IPv4, IPv6, Domain) and the first
//! match wins.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use strum_macros::EnumIter as EnumIterMacro;

/// One IPv4 octet, 0-255 (leading zeros tolerated).
const OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// IPv4 octet as written inside mixed IPv6 notation.
const EMBEDDED_OCTET: &str = r"(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])";

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{OCTET}\.){{3}}{OCTET}$")).expect("IPv4 pattern is valid")
});

static IPV6_RE: LazyLock<Regex> = LazyLock::new(|| {
    let h = "[0-9a-fA-F]{1,4}";
    let v4 = format!(r"(?:{EMBEDDED_OCTET}\.){{3}}{EMBEDDED_OCTET}");
    let forms = [
        // full eight groups
        format!("(?:{h}:){{7}}{h}"),
        // compressed forms
        format!("(?:{h}:){{1,7}}:"),
        format!("(?:{h}:){{1,6}}:{h}"),
        format!("(?:{h}:){{1,5}}(?::{h}){{1,2}}"),
        format!("(?:{h}:){{1,4}}(?::{h}){{1,3}}"),
        format!("(?:{h}:){{1,3}}(?::{h}){{1,4}}"),
        format!("(?:{h}:){{1,2}}(?::{h}){{1,5}}"),
        format!("{h}:(?::{h}){{1,6}}"),
        format!(":(?:(?::{h}){{1,7}}|:)"),
        // link-local with zone index
        "fe80:(?::[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+".to_string(),
        // IPv4-mapped / translated
        format!("::(?:ffff(?::0{{1,4}})?:)?{v4}"),
        // IPv4-embedded
        format!("(?:{h}:){{1,4}}:?{v4}"),
    ];
    Regex::new(&format!("^(?:{})$", forms.join("|"))).expect("IPv6 pattern is valid")
});

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:[a-z0-9]+(?:-[a-z0-9]+)*\.)+[a-z]{2,}$")
        .expect("domain pattern is valid")
});

/// The kind of target a string denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ClassificationKind {
    /// Dotted-quad IPv4 address
    Ipv4,
    /// IPv6 address in any textual form, zone index included
    Ipv6,
    /// Domain name, optionally prefixed with `http://` or `https://`
    Domain,
    /// Anything else
    Invalid,
}

impl ClassificationKind {
    /// Display name (`IPv4`, `IPv6`, `Domain`, `Invalid`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationKind::Ipv4 => "IPv4",
            ClassificationKind::Ipv6 => "IPv6",
            ClassificationKind::Domain => "Domain",
            ClassificationKind::Invalid => "Invalid",
        }
    }

    /// True for both address families.
    pub fn is_ip(&self) -> bool {
        matches!(self, ClassificationKind::Ipv4 | ClassificationKind::Ipv6)
    }
}

impl fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `input` as IPv4, IPv6, Domain or Invalid.
///
/// Pure and deterministic. The whole string must match; surrounding
/// whitespace makes an otherwise valid address `Invalid`.
///
/// # Examples
///
/// ```
/// use idspy::classify::{classify, ClassificationKind};
///
/// assert_eq!(classify("8.8.8.8"), ClassificationKind::Ipv4);
/// assert_eq!(classify("2001:db8::1"), ClassificationKind::Ipv6);
/// assert_eq!(classify("https://example.com"), ClassificationKind::Domain);
/// assert_eq!(classify("not a domain"), ClassificationKind::Invalid);
/// ```
pub fn classify(input: &str) -> ClassificationKind {
    if IPV4_RE.is_match(input) {
        ClassificationKind::Ipv4
    } else if IPV6_RE.is_match(input) {
        ClassificationKind::Ipv6
    } else if DOMAIN_RE.is_match(input) {
        ClassificationKind::Domain
    } else {
        ClassificationKind::Invalid
    }
}
