//! User-facing rendering options.
//!
//! The options mirror what an external settings store supplies. Every field
//! carries a serde default so a partial JSON document resolves to the
//! documented defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration options for template rendering.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wikicite::RenderOptions;
///
/// // Use defaults
/// let options = RenderOptions::default();
///
/// // Customize specific fields
/// let options = RenderOptions {
///     multiline_format: false,
///     ..RenderOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Emit the access-date field.
    ///
    /// Default: `true`
    pub include_access_date: bool,

    /// Enable news auto-detection. When `false`, always render the
    /// "cite web" template.
    ///
    /// Default: `true`
    pub auto_detect_news: bool,

    /// Emit the language field when a language was extracted and it is not
    /// the default "en".
    ///
    /// Default: `true`
    pub include_language: bool,

    /// Fallback author used when extraction found none. Ignored when empty.
    ///
    /// Default: `""`
    pub default_author: String,

    /// Multi-line template layout (one field per line) instead of
    /// single-line.
    ///
    /// Default: `true`
    pub multiline_format: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_access_date: true,
            auto_detect_news: true,
            include_language: true,
            default_author: String::new(),
            multiline_format: true,
        }
    }
}

impl RenderOptions {
    /// Resolve options from a settings-store JSON document.
    ///
    /// Missing keys fall back to the documented defaults, so `{}` is a valid
    /// document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))
    }
}
