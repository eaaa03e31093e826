//! Rich quote block extension.
//!
//! Transforms a `[richquote]` block whose body is a TOML document into a
//! `<figure>/<blockquote>/<figcaption>` HTML fragment.

use std::fmt;

use serde::Deserialize;

use crate::extension::{
    AttrList, BlockContext, BlockExtension, ExtensionError, ExtensionOutput, RenderContext,
};

/// Separator between caption parts.
const CAPTION_SEPARATOR: &str = ", ";

/// Parsed `richquote` block configuration.
///
/// All markup-valued fields (`text`, `creator`, `source`, `note`) hold source
/// markup and are rendered through the host engine on output. Unknown keys
/// in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteConfig {
    /// The quoted content (markup). Required.
    pub text: Option<String>,
    /// Display name of the creator of the quoted content (markup).
    pub creator: Option<String>,
    /// Document or event where the quoted content first appeared (markup).
    pub source: Option<String>,
    /// URI of the quote source, used as the `cite` attribute.
    pub uri: Option<UriValue>,
    /// Published date of the quoted content.
    pub published: Option<DateValue>,
    /// Updated date of the quoted content.
    pub updated: Option<DateValue>,
    /// Datetime when the content was referred to and quoted.
    pub referred: Option<DateValue>,
    /// Note about the quote (markup).
    pub note: Option<String>,
}

/// A citation-source URI: a single string or an array of strings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UriValue {
    /// A single URI.
    One(String),
    /// Several URIs; the first is used for the `cite` attribute.
    Many(Vec<String>),
}

impl UriValue {
    /// The URI used for the `cite` attribute.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::One(uri) => Some(uri),
            Self::Many(uris) => uris.first().map(String::as_str),
        }
    }
}

/// A datetime field value: a TOML datetime scalar or a plain string.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// A TOML datetime scalar (`published = 2000-01-01T00:00:00+09:00`).
    Timestamp(toml::value::Datetime),
    /// A string spelling (`published = '2000-01-01T00:00:00+09:00'`).
    Text(String),
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(datetime) => datetime.fmt(f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match toml::Value::deserialize(deserializer)? {
            toml::Value::Datetime(datetime) => Ok(Self::Timestamp(datetime)),
            toml::Value::String(text) => Ok(Self::Text(text)),
            other => Err(serde::de::Error::custom(format!(
                "expected datetime or string, found {}",
                other.type_str()
            ))),
        }
    }
}

/// Block extension rendering rich quotes with TOML-encoded metadata.
///
/// The block body is a TOML document:
///
/// ```text
/// [richquote]
/// ====
/// text = '''
/// Quoted text in markup format.
/// '''
/// creator = "@user"
/// source = 'Quote source'
/// uri = 'https://example.com/'
/// note = '*emphasis* added'
/// ====
/// ```
///
/// Output is a `<figure>` wrapping a `<blockquote>` (with a `cite` attribute
/// when `uri` is given) and a `<figcaption>` joining `creator`, `source` and
/// `note` with `", "` (omitted entirely when all three are absent).
pub struct RichQuoteBlock {
    /// When `true`, append the `referred` datetime to the caption as a
    /// `<time>` element.
    referred_display: bool,
}

impl RichQuoteBlock {
    /// Create a new rich quote handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            referred_display: false,
        }
    }

    /// Create a handler that appends the `referred` datetime to the caption
    /// as a `<time datetime="...">` element.
    #[must_use]
    pub fn with_referred_display() -> Self {
        Self {
            referred_display: true,
        }
    }

    fn render_quote(
        &self,
        config: &QuoteConfig,
        ctx: &RenderContext,
    ) -> Result<String, ExtensionError> {
        let text = config
            .text
            .as_deref()
            .ok_or(ExtensionError::MissingField { field: "text" })?;
        let rendered = ctx.render(text);

        let blockquote = match config.uri.as_ref().and_then(UriValue::primary) {
            Some(uri) => format!("<blockquote cite=\"{uri}\">\n{rendered}\n</blockquote>"),
            None => format!("<blockquote>\n{rendered}\n</blockquote>"),
        };

        let mut caption_parts: Vec<String> = Vec::new();
        for part in [&config.creator, &config.source, &config.note] {
            if let Some(part) = part {
                caption_parts.push(part.clone());
            }
        }
        if self.referred_display
            && let Some(referred) = &config.referred
        {
            caption_parts.push(format!(r#"<time datetime="{referred}">{referred}</time>"#));
        }

        let figcaption = if caption_parts.is_empty() {
            String::new()
        } else {
            let caption = caption_parts.join(CAPTION_SEPARATOR);
            format!("<figcaption>{}</figcaption>", ctx.render_inline(&caption))
        };

        Ok(format!("<figure>\n{blockquote}\n{figcaption}\n</figure>"))
    }
}

impl Default for RichQuoteBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockExtension for RichQuoteBlock {
    fn name(&self) -> &str {
        "richquote"
    }

    fn contexts(&self) -> &[BlockContext] {
        &[
            BlockContext::Paragraph,
            BlockContext::Open,
            BlockContext::Example,
            BlockContext::Quote,
            BlockContext::Listing,
        ]
    }

    fn process(
        &mut self,
        content: &str,
        _attrs: &AttrList,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError> {
        ctx.require_html()?;
        let config: QuoteConfig = toml::from_str(content)?;
        Ok(ExtensionOutput::Html(self.render_quote(&config, ctx)?))
    }
}
