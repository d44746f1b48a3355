//! # wikicite
//!
//! Wikipedia citation template generator.
//!
//! Takes a snapshot of a web page's markup, extracts bibliographic metadata
//! (title, author, publisher, dates, language) through ordered selector
//! fallback chains, classifies the page as news or generic web content, and
//! renders a `{{cite news}}` or `{{cite web}}` template string.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikicite::generate;
//!
//! let html = r#"<html lang="en"><head>
//!   <title>Rust 1.85 Released - Example News</title>
//!   <meta name="author" content="Jane Doe">
//!   <meta property="og:site_name" content="Example News">
//! </head><body></body></html>"#;
//!
//! let citation = generate(html, "https://example-news.com/rust-185");
//! assert!(citation.template.starts_with("{{cite news"));
//! assert_eq!(citation.metadata.author.as_deref(), Some("Jane Doe"));
//! ```
//!
//! ## Pipeline
//!
//! The pipeline is stateless and synchronous: extraction reads an immutable
//! snapshot, classification and rendering are pure functions of the
//! extracted record and the options. Missing metadata never fails
//! extraction; absent fields are simply omitted from the template.

mod classify;
mod error;
mod options;
mod result;
mod template;

/// Metadata extraction (ordered selector fallback chains).
pub mod metadata;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL utilities for hostname extraction and publisher derivation.
pub mod url_utils;

// Public API - re-exports
pub use classify::is_news_article;
pub use error::{Error, Result};
pub use options::RenderOptions;
pub use result::{Citation, PageMetadata};
pub use template::{clean_page_title, render_template, TemplateKind};

use dom_query::Document;

/// Extracts page metadata from an HTML snapshot.
///
/// `page_url` is the address the snapshot was taken from; it populates the
/// `url` and `domain` fields. Extraction never fails: missing metadata
/// leaves optional fields absent, and required fields fall back to empty
/// strings.
///
/// # Example
///
/// ```rust
/// use wikicite::extract;
///
/// let html = r#"<html><head><title>My Article</title></head></html>"#;
/// let metadata = extract(html, "https://example.com/article");
/// assert_eq!(metadata.title, "My Article");
/// assert_eq!(metadata.domain, "example.com");
/// ```
#[must_use]
pub fn extract(html: &str, page_url: &str) -> PageMetadata {
    let doc = Document::from(html);
    metadata::extract_metadata(&doc, page_url)
}

/// Extracts page metadata from raw HTML bytes with encoding detection.
///
/// The charset is detected from meta declarations and the bytes are
/// transcoded to UTF-8 before extraction, with invalid characters replaced
/// rather than causing errors.
#[must_use]
pub fn extract_bytes(html: &[u8], page_url: &str) -> PageMetadata {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str, page_url)
}

/// Renders a citation template using default options.
///
/// Use [`render_template`] to pass custom [`RenderOptions`].
#[must_use]
pub fn render(metadata: &PageMetadata) -> String {
    template::render_template(metadata, &RenderOptions::default())
}

/// Extracts metadata and renders the citation in one step, with default
/// options.
#[must_use]
pub fn generate(html: &str, page_url: &str) -> Citation {
    generate_with_options(html, page_url, &RenderOptions::default())
}

/// Extracts metadata and renders the citation in one step.
///
/// # Example
///
/// ```rust
/// use wikicite::{generate_with_options, RenderOptions};
///
/// let html = r#"<html><head><title>My Article</title></head></html>"#;
/// let options = RenderOptions {
///     multiline_format: false,
///     include_access_date: false,
///     ..RenderOptions::default()
/// };
/// let citation = generate_with_options(html, "https://example.com/a", &options);
/// assert!(citation.template.ends_with("}}"));
/// ```
#[must_use]
pub fn generate_with_options(html: &str, page_url: &str, options: &RenderOptions) -> Citation {
    let metadata = extract(html, page_url);
    let template = template::render_template(&metadata, options);
    Citation { template, metadata }
}

/// Extracts and renders from raw HTML bytes with encoding detection.
#[must_use]
pub fn generate_bytes(html: &[u8], page_url: &str, options: &RenderOptions) -> Citation {
    let html_str = encoding::transcode_to_utf8(html);
    generate_with_options(&html_str, page_url, options)
}
