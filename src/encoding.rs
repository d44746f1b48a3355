//! Character encoding detection and transcoding.
//!
//! A page snapshot captured outside a browser context may not be UTF-8.
//! The charset is detected from meta declarations in the document head and
//! the bytes are transcoded losslessly where possible, with invalid
//! sequences replaced by U+FFFD.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Matches the charset value in either `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Detect the character encoding declared in the first 1024 bytes.
///
/// Defaults to UTF-8 when no declaration is found or the label is unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(1024)]);

    CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid characters are replaced with the Unicode replacement character
/// rather than causing errors.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
