//! News/web content classification.
//!
//! A cheap heuristic deciding which template kind a page gets. Not
//! guaranteed correct: keyword matching is a plain substring test, so a blog
//! with "journal" in its name misclassifies as news.

use crate::result::PageMetadata;

/// Substrings that mark a domain or publisher as a news outlet.
const NEWS_INDICATORS: [&str; 18] = [
    "news",
    "reuters",
    "cnn",
    "bbc",
    "associated press",
    "ap news",
    "npr",
    "fox news",
    "abc news",
    "cbs news",
    "nbc news",
    "guardian",
    "times",
    "post",
    "journal",
    "herald",
    "tribune",
    "gazette",
];

/// Decide whether a page looks like a news article.
///
/// A content-type hint containing "article" wins immediately. Otherwise the
/// domain and publisher are lowercased and tested for any of the fixed news
/// indicators as substrings.
#[must_use]
pub fn is_news_article(metadata: &PageMetadata) -> bool {
    if let Some(ref page_type) = metadata.page_type {
        if page_type.contains("article") {
            return true;
        }
    }

    let domain = metadata.domain.to_lowercase();
    let publisher = metadata
        .publisher
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    NEWS_INDICATORS
        .iter()
        .any(|indicator| domain.contains(indicator) || publisher.contains(indicator))
}
