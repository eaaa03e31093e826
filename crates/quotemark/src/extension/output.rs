//! Extension output types.

/// Output from an extension invocation.
///
/// Extensions can produce two kinds of output:
///
/// - [`Html`](Self::Html): a finished HTML fragment, reinserted verbatim with
///   no further text substitution applied
/// - [`Skip`](Self::Skip): decline to handle, pass the source through unchanged
///
/// # Example
///
/// ```
/// use quotemark::extension::ExtensionOutput;
///
/// let output = ExtensionOutput::html("<cite>The Rust Book</cite>");
/// assert!(matches!(output, ExtensionOutput::Html(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtensionOutput {
    /// Final HTML, inserted into the document as-is.
    Html(String),
    /// Don't handle this occurrence (pass through unchanged).
    Skip,
}

impl ExtensionOutput {
    /// Create an HTML output.
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}
