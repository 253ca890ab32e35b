//! Render configuration.
//!
//! Configuration is an explicit value threaded through every call, so
//! independent compiles can run concurrently or nested without interference.

use std::collections::BTreeSet;

use crate::tags;

/// Fixed XML declaration line emitted ahead of XML output.
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Output dialect.
///
/// Governs the self-closing rule, doctype/header emission and the structural
/// layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// HTML5 semantics: doctype for `html` roots, fixed void-element set.
    #[default]
    Html,
    /// XML semantics: declaration header, any childless element self-closes.
    Xml,
}

/// Per-call render configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Output dialect.
    pub mode: Mode,
    /// Words appended after `DOCTYPE` for HTML `html` elements.
    pub doctype: Vec<String>,
    /// Allowed tag names beyond the standard HTML5 set.
    pub extension_tags: BTreeSet<String>,
    /// Declaration line prepended to XML output.
    pub xml_header: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            doctype: vec!["html".to_owned()],
            extension_tags: BTreeSet::new(),
            xml_header: XML_HEADER.to_owned(),
        }
    }
}

impl RenderConfig {
    /// Create an HTML-mode configuration with defaults.
    #[must_use]
    pub fn html() -> Self {
        Self::default()
    }

    /// Create an XML-mode configuration with defaults.
    #[must_use]
    pub fn xml() -> Self {
        Self {
            mode: Mode::Xml,
            ..Self::default()
        }
    }

    /// Replace the doctype word list.
    #[must_use]
    pub fn with_doctype<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doctype = words.into_iter().map(Into::into).collect();
        self
    }

    /// Add tags to the extension allow-list.
    #[must_use]
    pub fn with_extension_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extension_tags
            .extend(tags.into_iter().map(Into::into));
        self
    }

    /// Replace the XML declaration line.
    #[must_use]
    pub fn with_xml_header(mut self, header: impl Into<String>) -> Self {
        self.xml_header = header.into();
        self
    }

    /// Whether `tag` may be rendered under this configuration.
    #[must_use]
    pub fn is_allowed_tag(&self, tag: &str) -> bool {
        tags::is_standard_tag(tag) || self.extension_tags.contains(tag)
    }
}
