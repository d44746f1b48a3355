//! Citation template rendering.
//!
//! Turns a metadata record and user options into a `{{cite news}}` or
//! `{{cite web}}` template string. Rendering is pure and deterministic;
//! absence of a field is the only variability.

use regex::Regex;

use crate::classify::is_news_article;
use crate::options::RenderOptions;
use crate::result::PageMetadata;

/// Template kind selected for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// `{{cite news}}`, publisher labelled `newspaper`.
    News,
    /// `{{cite web}}`, publisher labelled `website`.
    Web,
}

impl TemplateKind {
    fn name(self) -> &'static str {
        match self {
            Self::News => "cite news",
            Self::Web => "cite web",
        }
    }

    fn publisher_param(self) -> &'static str {
        match self {
            Self::News => "newspaper",
            Self::Web => "website",
        }
    }
}

/// Strip a leading or trailing publisher name from a page title.
///
/// Two patterns are removed, case-insensitively: a trailing
/// `<separator> <publisher> <anything>` and a leading
/// `<publisher> <separator>`, where the separator is `-`, `|` or `::`.
/// The publisher is escaped before use, so metacharacters in names like
/// "C++ Weekly" are matched literally. The result is trimmed.
///
/// A title that does not contain the publisher passes through unchanged
/// (modulo trim), as does any title when no publisher is known.
#[must_use]
pub fn clean_page_title(title: &str, publisher: Option<&str>) -> String {
    let Some(publisher) = publisher.filter(|p| !p.is_empty() && title.contains(*p)) else {
        return title.trim().to_string();
    };

    let escaped = regex::escape(publisher);
    let mut cleaned = title.to_string();

    if let Ok(re) = Regex::new(&format!(r"(?i)\s*(?:-|\||::)\s*{escaped}.*$")) {
        cleaned = re.replace(&cleaned, "").into_owned();
    }
    if let Ok(re) = Regex::new(&format!(r"(?i)^{escaped}\s*(?:-|\||::)\s*")) {
        cleaned = re.replace(&cleaned, "").into_owned();
    }

    cleaned.trim().to_string()
}

/// Render a citation template from a metadata record and options.
///
/// Field order is fixed: title, url, author, publisher, date, access-date,
/// language. Each optional field is emitted iff its value is non-empty and
/// any governing option allows it; `url` is always emitted, even when empty.
#[must_use]
pub fn render_template(metadata: &PageMetadata, options: &RenderOptions) -> String {
    let clean_title = clean_page_title(&metadata.title, metadata.publisher.as_deref());

    let kind = if options.auto_detect_news && is_news_article(metadata) {
        TemplateKind::News
    } else {
        TemplateKind::Web
    };

    let mut fields: Vec<(&str, &str)> = Vec::new();

    if !clean_title.is_empty() {
        fields.push(("title", clean_title.as_str()));
    }

    // url is structurally mandatory
    fields.push(("url", metadata.url.as_str()));

    let author = metadata
        .author
        .as_deref()
        .filter(|a| !a.is_empty())
        .or_else(|| {
            (!options.default_author.is_empty()).then_some(options.default_author.as_str())
        });
    if let Some(author) = author {
        fields.push(("author", author));
    }

    if let Some(publisher) = metadata.publisher.as_deref().filter(|p| !p.is_empty()) {
        fields.push((kind.publisher_param(), publisher));
    }

    if let Some(date) = metadata.publish_date.as_deref().filter(|d| !d.is_empty()) {
        fields.push(("date", date));
    }

    if options.include_access_date {
        fields.push(("access-date", metadata.access_date.as_str()));
    }

    if options.include_language {
        if let Some(language) = metadata
            .language
            .as_deref()
            .filter(|l| !l.is_empty() && *l != "en")
        {
            fields.push(("language", language));
        }
    }

    if options.multiline_format {
        let mut out = format!("{{{{{}\n", kind.name());
        for (key, value) in &fields {
            out.push_str(&format!(" |{key}={value}\n"));
        }
        out.push_str("}}");
        out
    } else {
        let params: Vec<String> = fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("{{{{{} |{}}}}}", kind.name(), params.join(" |"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_title_strips_trailing_publisher() {
        assert_eq!(
            clean_page_title("Breaking Story - Reuters", Some("Reuters")),
            "Breaking Story"
        );
        assert_eq!(
            clean_page_title("Breaking Story | Reuters", Some("Reuters")),
            "Breaking Story"
        );
    }

    #[test]
    fn clean_title_supports_double_colon_separator() {
        assert_eq!(
            clean_page_title("Breaking Story :: Reuters", Some("Reuters")),
            "Breaking Story"
        );
    }

    #[test]
    fn clean_title_strips_leading_publisher() {
        assert_eq!(
            clean_page_title("Reuters | Breaking Story", Some("Reuters")),
            "Breaking Story"
        );
    }

    #[test]
    fn clean_title_strips_everything_after_publisher() {
        assert_eq!(
            clean_page_title("Story - Reuters - World News", Some("Reuters")),
            "Story"
        );
    }

    #[test]
    fn clean_title_without_publisher_is_trim_only() {
        assert_eq!(clean_page_title("  Plain Title  ", None), "Plain Title");
    }

    #[test]
    fn clean_title_when_publisher_not_contained() {
        assert_eq!(
            clean_page_title("Unrelated Title", Some("Reuters")),
            "Unrelated Title"
        );
    }

    #[test]
    fn clean_title_escapes_publisher_metacharacters() {
        assert_eq!(
            clean_page_title("Intro - C++ Weekly", Some("C++ Weekly")),
            "Intro"
        );
    }

    #[test]
    fn clean_title_never_invents_text_from_empty_input() {
        assert_eq!(clean_page_title("", None), "");
        assert_eq!(clean_page_title("", Some("Reuters")), "");
    }

    #[test]
    fn template_kind_labels() {
        assert_eq!(TemplateKind::News.name(), "cite news");
        assert_eq!(TemplateKind::News.publisher_param(), "newspaper");
        assert_eq!(TemplateKind::Web.name(), "cite web");
        assert_eq!(TemplateKind::Web.publisher_param(), "website");
    }
}
