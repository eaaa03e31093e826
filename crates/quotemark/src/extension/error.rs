//! Extension error types.

/// Error from a single extension invocation.
///
/// Extensions either fully succeed (a complete HTML fragment) or fully fail;
/// there is no partial output. All transforms are deterministic, so nothing
/// is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExtensionError {
    /// The active backend cannot accept raw HTML output.
    #[error("unsupported backend `{backend}`: extension emits HTML")]
    UnsupportedBackend {
        /// Name of the backend the document is being rendered with.
        backend: String,
    },

    /// Malformed TOML payload in a structured block.
    #[error("invalid block configuration")]
    ConfigParse(#[from] toml::de::Error),

    /// A required configuration field is absent.
    #[error("missing required field `{field}`")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}
