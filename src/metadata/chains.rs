//! Ordered selector fallback chains.
//!
//! Each optional metadata field is described by a fixed, priority-ordered
//! list of CSS selectors paired with a read plan. A single generic routine
//! walks the list and takes the first selector that matches an element and
//! yields a non-empty trimmed value. Values are never merged across
//! selectors, so precedence between conflicting sources is exactly the list
//! order.

use dom_query::{Document, Selection};

/// Where to read a candidate value from a matched element, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPlan {
    /// `content` attribute only (meta tags).
    Content,
    /// `content` attribute, else text content, else `title` attribute.
    ContentTextTitle,
    /// `content` attribute, else `datetime` attribute, else text content.
    ContentDatetimeText,
}

/// One step of a fallback chain: a selector and how to read the match.
pub type ChainStep = (&'static str, ReadPlan);

/// Author sources, most trustworthy first. Meta tags win over structural
/// class-based selectors like bylines.
pub const AUTHOR_CHAIN: &[ChainStep] = &[
    ("meta[name='author']", ReadPlan::ContentTextTitle),
    ("meta[property='article:author']", ReadPlan::ContentTextTitle),
    ("meta[name='twitter:creator']", ReadPlan::ContentTextTitle),
    ("meta[name='dcterms.creator']", ReadPlan::ContentTextTitle),
    ("[rel='author']", ReadPlan::ContentTextTitle),
    (".author", ReadPlan::ContentTextTitle),
    (".byline", ReadPlan::ContentTextTitle),
    (".post-author", ReadPlan::ContentTextTitle),
    (".article-author", ReadPlan::ContentTextTitle),
];

/// Publication date sources. Values still have to survive date parsing;
/// the date extractor keeps walking on parse failure.
pub const DATE_CHAIN: &[ChainStep] = &[
    ("meta[property='article:published_time']", ReadPlan::ContentDatetimeText),
    ("meta[name='publication_date']", ReadPlan::ContentDatetimeText),
    ("meta[name='date']", ReadPlan::ContentDatetimeText),
    ("meta[name='dcterms.created']", ReadPlan::ContentDatetimeText),
    ("meta[name='dcterms.date']", ReadPlan::ContentDatetimeText),
    ("time[datetime]", ReadPlan::ContentDatetimeText),
    (".publish-date", ReadPlan::ContentDatetimeText),
    (".post-date", ReadPlan::ContentDatetimeText),
    (".article-date", ReadPlan::ContentDatetimeText),
    (".date", ReadPlan::ContentDatetimeText),
];

/// Publisher sources. Meta content only; the domain-derived fallback lives
/// in the orchestrator.
pub const PUBLISHER_CHAIN: &[ChainStep] = &[
    ("meta[property='og:site_name']", ReadPlan::Content),
    ("meta[name='application-name']", ReadPlan::Content),
    ("meta[property='twitter:site']", ReadPlan::Content),
    ("meta[name='publisher']", ReadPlan::Content),
    ("meta[name='dcterms.publisher']", ReadPlan::Content),
];

/// Description sources.
pub const DESCRIPTION_CHAIN: &[ChainStep] = &[
    ("meta[name='description']", ReadPlan::Content),
    ("meta[property='og:description']", ReadPlan::Content),
    ("meta[name='twitter:description']", ReadPlan::Content),
    ("meta[name='dcterms.description']", ReadPlan::Content),
];

/// Content-type hint sources.
pub const TYPE_CHAIN: &[ChainStep] = &[
    ("meta[property='og:type']", ReadPlan::Content),
    ("meta[name='type']", ReadPlan::Content),
];

/// First-match-wins walk of a fallback chain.
///
/// Returns the trimmed value from the first step whose selector matches an
/// element and whose read plan yields a non-empty string. A matching element
/// with an empty value does not stop the walk.
#[must_use]
pub fn first_match(doc: &Document, chain: &[ChainStep]) -> Option<String> {
    for (selector, plan) in chain {
        let matched = doc.select(selector);
        let Some(node) = matched.nodes().first() else {
            continue;
        };

        let element = Selection::from(*node);
        if let Some(value) = read_value(&element, *plan) {
            return Some(value);
        }
    }

    None
}

/// Read a value from an element according to its plan.
pub(crate) fn read_value(element: &Selection, plan: ReadPlan) -> Option<String> {
    match plan {
        ReadPlan::Content => attr_value(element, "content"),
        ReadPlan::ContentTextTitle => attr_value(element, "content")
            .or_else(|| text_value(element))
            .or_else(|| attr_value(element, "title")),
        ReadPlan::ContentDatetimeText => attr_value(element, "content")
            .or_else(|| attr_value(element, "datetime"))
            .or_else(|| text_value(element)),
    }
}

fn attr_value(element: &Selection, name: &str) -> Option<String> {
    element
        .attr(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn text_value(element: &Selection) -> Option<String> {
    let text = element.text().trim().to_string();
    (!text.is_empty()).then_some(text)
}
