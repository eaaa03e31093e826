//! Markup extensions for rich quotes, figures and citation metadata.
//!
//! This crate provides a set of HTML-emitting markup extensions built on a
//! pluggable [`extension`] processor:
//!
//! - [`RichQuoteBlock`]: a `[richquote]` block with TOML-encoded quote
//!   metadata, rendered as `<figure>/<blockquote>/<figcaption>`
//! - [`FigureBlock`] / [`FigureCaptionBlock`]: `<figure>` and `<figcaption>`
//!   wrappers around rendered block content
//! - [`CiteTitleMacro`], [`TimeMacro`], [`QuoteMacro`]: inline `<cite>`,
//!   `<time>` and `<quote>` markup
//!
//! All extensions emit raw HTML fragments that are spliced into the output
//! with no further substitution; they refuse non-HTML backends with
//! [`extension::ExtensionError::UnsupportedBackend`].
//!
//! # Example
//!
//! ```
//! use quotemark::extension::ExtensionProcessor;
//! use quotemark::{CiteTitleMacro, QuoteMacro, RichQuoteBlock, TimeMacro};
//!
//! let mut processor = ExtensionProcessor::new()
//!     .with_block(RichQuoteBlock::new())
//!     .with_inline(CiteTitleMacro)
//!     .with_inline(TimeMacro::new())
//!     .with_inline(QuoteMacro);
//!
//! let source = "\
//! [richquote]
//! ====
//! text = 'Talk is cheap. Show me the code.'
//! creator = 'Linus Torvalds'
//! ====";
//!
//! let html = processor.process(source).unwrap();
//! assert!(html.starts_with("<figure>"));
//! assert!(html.contains("<figcaption>Linus Torvalds</figcaption>"));
//! ```

pub mod extension;
mod figure;
mod macros;
mod richquote;

pub use figure::{FigureBlock, FigureCaptionBlock};
pub use macros::{CiteTitleMacro, QuoteMacro, TimeFallback, TimeMacro};
pub use richquote::{DateValue, QuoteConfig, RichQuoteBlock, UriValue};
