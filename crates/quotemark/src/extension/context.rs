//! Rendering context passed to extension handlers.
//!
//! Carries the host engine capabilities an extension is allowed to use:
//! the backend identity and the nested-markup renderer.

use std::path::Path;

use super::ExtensionError;

/// Context provided to extension handlers.
///
/// Created by [`ExtensionProcessor`](super::ExtensionProcessor) for each
/// invocation. The context is borrowed for the duration of a single call and
/// must not be retained by handlers.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use quotemark::extension::RenderContext;
///
/// let render = |s: &str| format!("<p>{s}</p>\n");
/// let ctx = RenderContext {
///     backend: "html5",
///     source_path: Some(Path::new("posts/quote.adoc")),
///     line: 42,
///     render_markup: &render,
/// };
///
/// assert!(ctx.require_html().is_ok());
/// assert_eq!(ctx.render_inline("hello"), "hello");
/// ```
pub struct RenderContext<'a> {
    /// Name of the backend the document is being rendered with (e.g. "html5").
    pub backend: &'a str,
    /// Path to the source file being rendered (if known).
    pub source_path: Option<&'a Path>,
    /// Line number where the extension occurrence starts (1-indexed).
    pub line: usize,
    /// Callback rendering a markup string to HTML through the host engine's
    /// full nested-content pipeline (emphasis, links, lists, inline macros).
    pub render_markup: &'a dyn Fn(&str) -> String,
}

impl RenderContext<'_> {
    /// Check whether the backend produces HTML.
    ///
    /// The backend base name is the name with any trailing version digits
    /// stripped: `html5` and `html` both qualify, `docbook5` does not.
    #[must_use]
    pub fn backend_is_html(&self) -> bool {
        backend_base(self.backend) == "html"
    }

    /// Fail with [`ExtensionError::UnsupportedBackend`] unless the backend
    /// produces HTML.
    ///
    /// # Errors
    ///
    /// Returns the error carrying the actual backend name.
    pub fn require_html(&self) -> Result<(), ExtensionError> {
        if self.backend_is_html() {
            Ok(())
        } else {
            Err(ExtensionError::UnsupportedBackend {
                backend: self.backend.to_owned(),
            })
        }
    }

    /// Render a markup string as nested block content.
    ///
    /// Trailing newlines are trimmed so the result embeds cleanly between
    /// wrapper tags.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let html = (self.render_markup)(source);
        html.trim_end().to_owned()
    }

    /// Render a markup string as inline content.
    ///
    /// The string is rendered through the standard paragraph path and only
    /// the content of the first resulting block is returned, with the
    /// enclosing paragraph wrapper discarded. This is how caption text gets
    /// full inline markup support despite living in a configuration value.
    #[must_use]
    pub fn render_inline(&self, source: &str) -> String {
        strip_paragraph(&self.render(source))
    }
}

/// Backend base name: the backend with trailing version digits stripped.
fn backend_base(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Extract the content of a leading `<p>` wrapper, if present.
fn strip_paragraph(html: &str) -> String {
    if let Some(rest) = html.strip_prefix("<p>")
        && let Some(end) = rest.find("</p>")
    {
        return rest[..end].to_owned();
    }
    html.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx<'a>(backend: &'a str, render: &'a dyn Fn(&str) -> String) -> RenderContext<'a> {
        RenderContext {
            backend,
            source_path: None,
            line: 1,
            render_markup: render,
        }
    }

    #[test]
    fn test_backend_base() {
        assert_eq!(backend_base("html5"), "html");
        assert_eq!(backend_base("html"), "html");
        assert_eq!(backend_base("docbook5"), "docbook");
        assert_eq!(backend_base("manpage"), "manpage");
    }

    #[test]
    fn test_backend_is_html() {
        let render = |_: &str| String::new();
        assert!(test_ctx("html5", &render).backend_is_html());
        assert!(test_ctx("html", &render).backend_is_html());
        assert!(!test_ctx("docbook5", &render).backend_is_html());
    }

    #[test]
    fn test_require_html_carries_backend_name() {
        let render = |_: &str| String::new();
        let err = test_ctx("docbook5", &render).require_html().unwrap_err();
        match err {
            ExtensionError::UnsupportedBackend { backend } => {
                assert_eq!(backend, "docbook5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_render_trims_trailing_newline() {
        let render = |s: &str| format!("<p>{s}</p>\n");
        let ctx = test_ctx("html5", &render);
        assert_eq!(ctx.render("hi"), "<p>hi</p>");
    }

    #[test]
    fn test_render_inline_strips_paragraph() {
        let render = |s: &str| format!("<p>{s}</p>\n");
        let ctx = test_ctx("html5", &render);
        assert_eq!(ctx.render_inline("hi *there*"), "hi *there*");
    }

    #[test]
    fn test_render_inline_first_block_only() {
        let render = |_: &str| "<p>first</p>\n<p>second</p>\n".to_owned();
        let ctx = test_ctx("html5", &render);
        assert_eq!(ctx.render_inline("ignored"), "first");
    }

    #[test]
    fn test_render_inline_non_paragraph_passthrough() {
        let render = |_: &str| "<ul><li>item</li></ul>\n".to_owned();
        let ctx = test_ctx("html5", &render);
        assert_eq!(ctx.render_inline("ignored"), "<ul><li>item</li></ul>");
    }
}
