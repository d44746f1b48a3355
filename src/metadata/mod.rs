//! Metadata extraction module.
//!
//! Scans a parsed page snapshot using ordered candidate-selector lists per
//! field and returns a best-effort metadata record. Missing metadata is
//! never an error: optional fields are simply left absent, and the required
//! fields (title, url, domain, access date) are always populated from the
//! page context, empty strings included.

pub mod chains;
pub mod dates;

use chrono::{NaiveDate, Utc};
use dom_query::{Document, Selection};
use regex::Regex;
use std::sync::LazyLock;

use crate::result::PageMetadata;
use crate::url_utils;

pub use chains::{first_match, ReadPlan};
pub use dates::parse_page_date;

/// Leading "By " byline prefix.
#[allow(clippy::expect_used)]
static BY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^by\s+").expect("valid regex"));

/// Extract all metadata from a page snapshot.
///
/// `page_url` is the address the snapshot was taken from; it populates the
/// `url` and `domain` fields the way the page's own location would. The
/// access date is the current UTC day.
#[must_use]
pub fn extract_metadata(doc: &Document, page_url: &str) -> PageMetadata {
    extract_metadata_at(doc, page_url, Utc::now().date_naive())
}

/// Extract all metadata with an explicit access date.
#[must_use]
pub fn extract_metadata_at(
    doc: &Document,
    page_url: &str,
    access_date: NaiveDate,
) -> PageMetadata {
    let mut metadata = PageMetadata {
        title: document_title(doc),
        url: page_url.to_string(),
        domain: url_utils::extract_hostname(page_url),
        access_date: access_date.format(dates::DATE_FORMAT).to_string(),
        ..PageMetadata::default()
    };

    metadata.author = chains::first_match(doc, chains::AUTHOR_CHAIN)
        .map(|author| clean_author(&author))
        .filter(|author| !author.is_empty());

    metadata.publish_date = extract_publish_date(doc);

    metadata.publisher = chains::first_match(doc, chains::PUBLISHER_CHAIN)
        .map(|publisher| clean_publisher(&publisher))
        .filter(|publisher| !publisher.is_empty())
        .or_else(|| url_utils::publisher_from_domain(&metadata.domain));

    metadata.description = chains::first_match(doc, chains::DESCRIPTION_CHAIN);

    metadata.language = extract_language(doc);

    metadata.page_type = chains::first_match(doc, chains::TYPE_CHAIN);

    metadata
}

/// The page's raw title, from the `<title>` element. Empty string when the
/// document has none.
fn document_title(doc: &Document) -> String {
    let title = doc.select("title");
    if title.is_empty() {
        return String::new();
    }
    title.text().trim().to_string()
}

/// Walk the date chain, skipping values that fail to parse as a calendar
/// date. The first parseable value wins.
fn extract_publish_date(doc: &Document) -> Option<String> {
    for (selector, plan) in chains::DATE_CHAIN {
        let matched = doc.select(selector);
        let Some(node) = matched.nodes().first() else {
            continue;
        };

        let element = Selection::from(*node);
        let Some(raw) = chains::read_value(&element, *plan) else {
            continue;
        };

        if let Some(date) = dates::parse_page_date(&raw) {
            return Some(date);
        }
    }

    None
}

/// Document language: root `lang` attribute, else a content-language meta,
/// else a language meta. Any region subtag ("en-US") is stripped down to
/// the primary code.
fn extract_language(doc: &Document) -> Option<String> {
    let raw = root_lang(doc)
        .or_else(|| meta_content(doc, "meta[http-equiv='content-language']"))
        .or_else(|| meta_content(doc, "meta[name='language']"))?;

    let code = raw.split('-').next().unwrap_or(&raw).trim().to_string();
    (!code.is_empty()).then_some(code)
}

fn root_lang(doc: &Document) -> Option<String> {
    let node = *doc.select("html").nodes().first()?;
    Selection::from(node)
        .attr("lang")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    let node = *doc.select(selector).nodes().first()?;
    Selection::from(node)
        .attr("content")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Strip a leading "By " prefix (case-insensitive) and trim.
fn clean_author(raw: &str) -> String {
    BY_PREFIX.replace(raw.trim(), "").trim().to_string()
}

/// Strip one leading "@" (Twitter-style site handles) and trim.
fn clean_publisher(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str, url: &str) -> PageMetadata {
        let doc = Document::from(html);
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        extract_metadata_at(&doc, url, date)
    }

    #[test]
    fn required_fields_always_populated() {
        let metadata = extract("<html><body></body></html>", "https://example.com/a");

        assert_eq!(metadata.title, "");
        assert_eq!(metadata.url, "https://example.com/a");
        assert_eq!(metadata.domain, "example.com");
        assert_eq!(metadata.access_date, "2024-03-05");
    }

    #[test]
    fn title_from_title_element() {
        let metadata = extract(
            "<html><head><title>  My Page  </title></head></html>",
            "https://example.com/a",
        );
        assert_eq!(metadata.title, "My Page");
    }

    #[test]
    fn author_by_prefix_stripped() {
        let html = r#"<html><body><p class="byline">By Jane Doe</p></body></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn publisher_at_sign_stripped() {
        let html = r#"<html><head>
            <meta property="twitter:site" content="@nytimes">
        </head></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert_eq!(metadata.publisher.as_deref(), Some("nytimes"));
    }

    #[test]
    fn publisher_falls_back_to_domain() {
        let metadata = extract("<html></html>", "https://www.example.com/a");
        assert_eq!(metadata.publisher.as_deref(), Some("Example"));
    }

    #[test]
    fn publisher_fallback_absent_without_domain() {
        let metadata = extract("<html></html>", "not a url");
        assert_eq!(metadata.domain, "");
        assert!(metadata.publisher.is_none());
    }

    #[test]
    fn unparseable_date_skips_to_next_selector() {
        let html = r#"<html><head>
            <meta property="article:published_time" content="last Tuesday">
            <meta name="date" content="2024-03-01">
        </head></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert_eq!(metadata.publish_date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn all_dates_unparseable_leaves_field_absent() {
        let html = r#"<html><head>
            <meta name="date" content="no date here">
        </head></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert!(metadata.publish_date.is_none());
    }

    #[test]
    fn language_region_subtag_stripped() {
        let html = r#"<html lang="en-US"><body></body></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert_eq!(metadata.language.as_deref(), Some("en"));
    }

    #[test]
    fn language_from_content_language_meta() {
        let html = r#"<html><head>
            <meta http-equiv="content-language" content="fr-CA">
        </head></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert_eq!(metadata.language.as_deref(), Some("fr"));
    }

    #[test]
    fn page_type_from_og_type() {
        let html = r#"<html><head>
            <meta property="og:type" content="article">
        </head></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert_eq!(metadata.page_type.as_deref(), Some("article"));
    }

    #[test]
    fn description_trimmed() {
        let html = r#"<html><head>
            <meta name="description" content="  A summary.  ">
        </head></html>"#;
        let metadata = extract(html, "https://example.com/a");
        assert_eq!(metadata.description.as_deref(), Some("A summary."));
    }

    #[test]
    fn clean_author_cases() {
        assert_eq!(clean_author("By Jane Doe"), "Jane Doe");
        assert_eq!(clean_author("by Jane Doe"), "Jane Doe");
        assert_eq!(clean_author("  BY  Jane Doe "), "Jane Doe");
        assert_eq!(clean_author("Byron Smith"), "Byron Smith");
    }

    #[test]
    fn clean_publisher_cases() {
        assert_eq!(clean_publisher("@example"), "example");
        assert_eq!(clean_publisher("  Example News  "), "Example News");
        assert_eq!(clean_publisher("@"), "");
    }
}
