//! Figure and figure-caption block extensions.
//!
//! Thin wrappers that render their body through the host engine and wrap the
//! result in a `<figure>` or `<figcaption>` element:
//!
//! ```text
//! [figcaption]
//! --
//! The caption, with *markup*.
//! --
//! ```

use crate::extension::{
    AttrList, BlockContext, BlockExtension, ExtensionError, ExtensionOutput, RenderContext,
};

const FIGURE_CONTEXTS: &[BlockContext] = &[
    BlockContext::Paragraph,
    BlockContext::Open,
    BlockContext::Example,
];

/// Wraps rendered block content in a `<figure>` element.
#[derive(Debug, Default)]
pub struct FigureBlock;

impl BlockExtension for FigureBlock {
    fn name(&self) -> &str {
        "figure"
    }

    fn contexts(&self) -> &[BlockContext] {
        FIGURE_CONTEXTS
    }

    fn process(
        &mut self,
        content: &str,
        _attrs: &AttrList,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError> {
        ctx.require_html()?;
        Ok(ExtensionOutput::html(format!(
            "<figure>\n{}\n</figure>",
            ctx.render(content)
        )))
    }
}

/// Wraps rendered block content in a `<figcaption>` element.
#[derive(Debug, Default)]
pub struct FigureCaptionBlock;

impl BlockExtension for FigureCaptionBlock {
    fn name(&self) -> &str {
        "figcaption"
    }

    fn contexts(&self) -> &[BlockContext] {
        FIGURE_CONTEXTS
    }

    fn process(
        &mut self,
        content: &str,
        _attrs: &AttrList,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError> {
        ctx.require_html()?;
        Ok(ExtensionOutput::html(format!(
            "<figcaption>\n{}\n</figcaption>",
            ctx.render(content)
        )))
    }
}
