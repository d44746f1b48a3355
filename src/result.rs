//! Result types for extraction and rendering output.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Metadata extracted from a web page snapshot.
///
/// Required fields (`title`, `url`, `domain`, `access_date`) are always
/// populated from the page context, with empty strings when genuinely
/// unavailable. Optional fields are absent when no selector in their
/// fallback chain produced a value.
///
/// Serializes with camelCase keys, the shape a presentation layer consumes
/// alongside the rendered template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Raw page title, from the `<title>` element.
    pub title: String,

    /// Canonical page address.
    pub url: String,

    /// Hostname, used for classification and the publisher fallback.
    pub domain: String,

    /// Date the page was retrieved, always set, formatted `YYYY-MM-DD`.
    pub access_date: String,

    /// Author name, first match from the ordered author sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Publication date, formatted `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,

    /// Publisher or site name, else derived from the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Page description. Informational only, never rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Language code with any region subtag stripped (e.g. "en" from "en-US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Content-type hint (e.g. "article") from `og:type`, used by the
    /// news classifier.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
}

/// A rendered citation together with the metadata it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// The formatted `{{cite web}}` or `{{cite news}}` template text.
    pub template: String,

    /// The metadata record the template was rendered from.
    pub metadata: PageMetadata,
}

impl Citation {
    /// Serialize for handoff to a presentation layer.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::SerializationError(e.to_string()))
    }
}
