//! URL utility functions.
//!
//! Hostname extraction and the readable-name fallback derived from a domain
//! when a page declares no publisher.

use url::Url;

/// Extract the hostname from a page URL.
///
/// Returns an empty string when the URL does not parse or has no host,
/// matching how the page context reports an unavailable hostname.
#[must_use]
pub fn extract_hostname(url_str: &str) -> String {
    Url::parse(url_str.trim())
        .ok()
        .and_then(|url| url.host_str().map(std::string::ToString::to_string))
        .unwrap_or_default()
}

/// Derive a readable publisher name from a domain.
///
/// Strips a leading "www.", keeps the label before the first ".", and
/// capitalizes the first letter ("www.example.com" becomes "Example").
/// Returns `None` when the domain is empty or yields no label.
#[must_use]
pub fn publisher_from_domain(domain: &str) -> Option<String> {
    let stripped = domain.strip_prefix("www.").unwrap_or(domain);
    let label = stripped.split('.').next().unwrap_or(stripped);

    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().collect::<String>() + chars.as_str())
}
