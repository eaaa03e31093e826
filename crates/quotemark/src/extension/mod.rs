//! Pluggable extensions API for block and inline markup syntax.
//!
//! This module provides a trait-based extensibility system for handling
//! custom block syntax (`[name]` attribute lines with delimited content) and
//! inline macros (`name:target[attrs]`).
//!
//! # Architecture
//!
//! Handlers are registered explicitly on an [`ExtensionProcessor`], which
//! looks them up by name and dispatches matching source chunks:
//!
//! - **Block** ([`BlockExtension`]): `[name]` + delimited body - wrapping blocks
//! - **Inline** ([`InlineMacro`]): `name:target[attrs]` - inline elements
//!
//! Every handler receives a [`RenderContext`] carrying the host engine
//! capabilities it may use (backend identity, nested-markup rendering) and
//! returns an [`ExtensionOutput`]: finished HTML that is reinserted with no
//! further substitution, or a skip to pass the source through unchanged.
//!
//! # Example
//!
//! ```
//! use quotemark::extension::{
//!     ExtensionError, ExtensionOutput, ExtensionProcessor, InlineMacro, MacroArgs,
//!     RenderContext,
//! };
//!
//! struct KbdMacro;
//!
//! impl InlineMacro for KbdMacro {
//!     fn name(&self) -> &str { "kbd" }
//!
//!     fn process(
//!         &mut self,
//!         args: MacroArgs,
//!         ctx: &RenderContext,
//!     ) -> Result<ExtensionOutput, ExtensionError> {
//!         ctx.require_html()?;
//!         Ok(ExtensionOutput::html(format!("<kbd>{}</kbd>", args.content)))
//!     }
//! }
//!
//! let mut processor = ExtensionProcessor::new().with_inline(KbdMacro);
//!
//! let output = processor.process("Press kbd:[Ctrl+C] to copy.").unwrap();
//! assert!(output.contains("<kbd>Ctrl+C</kbd>"));
//! ```

mod args;
mod block;
mod context;
mod error;
mod fence;
mod inline;
mod output;
mod parser;
mod processor;

pub use args::{AttrList, MacroArgs};
pub use block::{BlockContext, BlockExtension};
pub use context::RenderContext;
pub use error::ExtensionError;
pub use inline::InlineMacro;
pub use output::ExtensionOutput;
pub use processor::{ExtensionProcessor, ProcessorConfig, RenderMarkupFn};
