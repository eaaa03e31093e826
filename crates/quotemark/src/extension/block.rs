//! Block extension trait.
//!
//! Block extensions consume a named, delimited chunk of source and replace it
//! with an HTML fragment.

use super::{AttrList, ExtensionError, ExtensionOutput, RenderContext};

/// Parent context kinds a block extension may be attached to.
///
/// Derived from the delimiter that follows the block attribute line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockContext {
    /// No delimiter: the attribute line is attached to a plain paragraph.
    Paragraph,
    /// `--` open block.
    Open,
    /// `====` example block.
    Example,
    /// `____` quote block.
    Quote,
    /// `----` listing block.
    Listing,
    /// `....` literal block.
    Literal,
}

/// Handler for block extensions: `[name]` followed by delimited content.
///
/// The registry maps (name, allowed parent contexts) to a handler; the
/// processor looks handlers up by name and checks the context derived from
/// the block's delimiter against [`contexts`](Self::contexts).
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document gets its
/// own processor instance.
///
/// # Example
///
/// ```
/// use quotemark::extension::{
///     AttrList, BlockContext, BlockExtension, ExtensionError, ExtensionOutput, RenderContext,
/// };
///
/// struct AsideBlock;
///
/// impl BlockExtension for AsideBlock {
///     fn name(&self) -> &str { "aside" }
///
///     fn contexts(&self) -> &[BlockContext] {
///         &[BlockContext::Paragraph, BlockContext::Open, BlockContext::Example]
///     }
///
///     fn process(
///         &mut self,
///         content: &str,
///         _attrs: &AttrList,
///         ctx: &RenderContext,
///     ) -> Result<ExtensionOutput, ExtensionError> {
///         ctx.require_html()?;
///         Ok(ExtensionOutput::html(format!("<aside>\n{}\n</aside>", ctx.render(content))))
///     }
/// }
/// ```
pub trait BlockExtension: Send {
    /// Block name (e.g. "richquote", "figure").
    ///
    /// This is matched against the attribute line: `[name]`.
    fn name(&self) -> &str;

    /// Parent context kinds this block may be attached to.
    ///
    /// Occurrences in other contexts pass through unchanged with a warning.
    fn contexts(&self) -> &[BlockContext];

    /// Process the block.
    ///
    /// `content` is the raw body between the delimiters (or the attached
    /// paragraph's lines), joined with newlines. Returns
    /// [`ExtensionOutput::Html`] to replace the block,
    /// [`ExtensionOutput::Skip`] to pass it through unchanged.
    ///
    /// # Errors
    ///
    /// Fails the whole invocation; no partial output is produced.
    fn process(
        &mut self,
        content: &str,
        attrs: &AttrList,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError>;

    /// Get warnings generated during processing.
    ///
    /// Override this method if your block can produce warnings.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
