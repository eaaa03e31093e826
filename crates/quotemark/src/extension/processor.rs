//! Extension processor: registry and single-pass driver.
//!
//! Looks up block and inline handlers by name, feeds them source chunks, and
//! splices their HTML output back into the document.

use std::path::PathBuf;

use pulldown_cmark::{Options, Parser};

use super::fence::FenceTracker;
use super::parser::{find_macro, parse_attribute_line, parse_delimiter};
use super::{
    BlockContext, BlockExtension, ExtensionError, ExtensionOutput, InlineMacro, RenderContext,
};

/// Type alias for the nested-markup rendering callback.
pub type RenderMarkupFn = dyn Fn(&str) -> String + Send;

/// Configuration for the extension processor.
pub struct ProcessorConfig {
    /// Backend name the document is rendered with.
    ///
    /// Default: `html5`
    pub backend: String,
    /// Path to the source file being rendered (if known).
    pub source_path: Option<PathBuf>,
    /// Callback rendering nested markup content to HTML.
    ///
    /// Default: a `pulldown-cmark` renderer with GFM extensions.
    pub render_markup: Option<Box<RenderMarkupFn>>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: "html5".to_owned(),
            source_path: None,
            render_markup: None,
        }
    }

    /// Set the backend name.
    #[must_use]
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    /// Set the source file path.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Set the nested-markup rendering callback.
    #[must_use]
    pub fn with_render_markup<F>(mut self, render_markup: F) -> Self
    where
        F: Fn(&str) -> String + Send + 'static,
    {
        self.render_markup = Some(Box::new(render_markup));
        self
    }

    fn create_context(&self, line: usize) -> RenderContext<'_> {
        RenderContext {
            backend: &self.backend,
            source_path: self.source_path.as_deref(),
            line,
            render_markup: self.render_markup.as_ref().map_or_else(
                || &default_render_markup as &dyn Fn(&str) -> String,
                |f| f.as_ref(),
            ),
        }
    }
}

/// Default nested-markup renderer backed by pulldown-cmark.
fn default_render_markup(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(source, options);
    let mut html = String::with_capacity(source.len() * 2);
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Processor for markup extensions.
///
/// Handlers are registered explicitly by name; the processor recognizes block
/// attribute lines and inline macro occurrences, dispatches to the matching
/// handler, and splices the returned HTML into the output. Unregistered
/// names pass through unchanged.
///
/// # Example
///
/// ```
/// use quotemark::CiteTitleMacro;
/// use quotemark::extension::ExtensionProcessor;
///
/// let mut processor = ExtensionProcessor::new().with_inline(CiteTitleMacro);
///
/// let html = processor
///     .process("see citetitle:[The Rust Book] for details")
///     .unwrap();
/// assert_eq!(html, "see <cite>The Rust Book</cite> for details");
/// ```
pub struct ExtensionProcessor {
    config: ProcessorConfig,
    block_handlers: Vec<Box<dyn BlockExtension>>,
    inline_handlers: Vec<Box<dyn InlineMacro>>,
    fence: FenceTracker,
    warnings: Vec<String>,
}

impl Default for ExtensionProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionProcessor {
    /// Create a new processor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    /// Create a new processor with custom configuration.
    #[must_use]
    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            config,
            block_handlers: Vec::new(),
            inline_handlers: Vec::new(),
            fence: FenceTracker::new(),
            warnings: Vec::new(),
        }
    }

    /// Register a block extension handler.
    #[must_use]
    pub fn with_block<B: BlockExtension + 'static>(mut self, handler: B) -> Self {
        self.block_handlers.push(Box::new(handler));
        self
    }

    /// Register an inline macro handler.
    #[must_use]
    pub fn with_inline<M: InlineMacro + 'static>(mut self, handler: M) -> Self {
        self.inline_handlers.push(Box::new(handler));
        self
    }

    /// Process a document, replacing extension occurrences with HTML.
    ///
    /// The returned string contains handler HTML spliced in place of the
    /// consumed source; everything else passes through unchanged.
    ///
    /// # Errors
    ///
    /// The first failing handler aborts the whole render; no partial output
    /// is returned.
    pub fn process(&mut self, input: &str) -> Result<String, ExtensionError> {
        self.fence = FenceTracker::new();
        self.warnings.clear();
        let lines: Vec<&str> = input.lines().collect();
        let line_count = lines.len();
        let mut output = String::with_capacity(input.len());
        let mut idx = 0;

        while idx < lines.len() {
            let line = lines[idx];

            // Verbatim content passes through untouched.
            if self.fence.in_fence() {
                self.fence.update(line);
                output.push_str(line);
                if idx < line_count - 1 || input.ends_with('\n') {
                    output.push('\n');
                }
                idx += 1;
                continue;
            }

            if let Some(attr) = parse_attribute_line(line)
                && let Some(handler_idx) = self
                    .block_handlers
                    .iter()
                    .position(|h| h.name() == attr.name)
            {
                let (context, content, last) = collect_block(&lines, idx, &mut self.warnings);

                if self.block_handlers[handler_idx].contexts().contains(&context) {
                    let ctx = self.config.create_context(idx + 1);
                    let result =
                        self.block_handlers[handler_idx].process(&content, &attr.attrs, &ctx)?;

                    if let ExtensionOutput::Html(html) = result {
                        output.push_str(&html);
                        if last < line_count - 1 || input.ends_with('\n') {
                            output.push('\n');
                        }
                        idx = last + 1;
                        continue;
                    }
                    // Skip: fall through, the block passes through line by line.
                } else {
                    self.warnings.push(format!(
                        "line {}: block `{}` not allowed on {} context",
                        idx + 1,
                        attr.name,
                        context_name(context),
                    ));
                }
            }

            self.fence.update(line);
            let processed = self.process_inline(line, idx + 1)?;
            output.push_str(&processed);
            if idx < line_count - 1 || input.ends_with('\n') {
                output.push('\n');
            }
            idx += 1;
        }

        Ok(output)
    }

    fn process_inline(&mut self, line: &str, line_num: usize) -> Result<String, ExtensionError> {
        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while !remaining.is_empty() {
            let Some((parsed, start, end)) = find_macro(remaining) else {
                result.push_str(remaining);
                break;
            };

            // Add content before the macro.
            result.push_str(&remaining[..start]);

            let handler_idx = self
                .inline_handlers
                .iter()
                .position(|h| h.name() == parsed.name);

            let output = match handler_idx {
                Some(i) => {
                    let ctx = self.config.create_context(line_num);
                    self.inline_handlers[i].process(parsed.args, &ctx)?
                }
                None => ExtensionOutput::Skip,
            };

            match output {
                ExtensionOutput::Html(html) => result.push_str(&html),
                ExtensionOutput::Skip => result.push_str(&remaining[start..end]),
            }

            remaining = &remaining[end..];
        }

        Ok(result)
    }

    /// Get all warnings generated during processing.
    ///
    /// Includes warnings from the processor itself and from all handlers.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut all_warnings = self.warnings.clone();
        for handler in &self.block_handlers {
            all_warnings.extend(handler.warnings().iter().cloned());
        }
        all_warnings
    }
}

/// Collect a block body starting at the attribute line `start`.
///
/// Returns the block context (derived from the delimiter form), the raw body
/// joined with newlines, and the index of the last consumed line.
fn collect_block(
    lines: &[&str],
    start: usize,
    warnings: &mut Vec<String>,
) -> (BlockContext, String, usize) {
    let body_start = start + 1;

    if let Some(next) = lines.get(body_start)
        && let Some((context, token)) = parse_delimiter(next)
    {
        let token = token.to_owned();
        let mut body = Vec::new();
        let mut idx = body_start + 1;
        while idx < lines.len() {
            if lines[idx].trim() == token {
                return (context, body.join("\n"), idx);
            }
            body.push(lines[idx]);
            idx += 1;
        }

        // Unclosed delimited blocks run to end of input.
        warnings.push(format!(
            "line {}: unclosed `{token}` block delimiter",
            body_start + 1
        ));
        (context, body.join("\n"), lines.len() - 1)
    } else {
        // Paragraph form: the attached paragraph runs to the first blank line.
        let mut body = Vec::new();
        let mut idx = body_start;
        while idx < lines.len() && !lines[idx].trim().is_empty() {
            body.push(lines[idx]);
            idx += 1;
        }
        let last = if body.is_empty() { start } else { idx - 1 };
        (BlockContext::Paragraph, body.join("\n"), last)
    }
}

fn context_name(context: BlockContext) -> &'static str {
    match context {
        BlockContext::Paragraph => "paragraph",
        BlockContext::Open => "open",
        BlockContext::Example => "example",
        BlockContext::Quote => "quote",
        BlockContext::Listing => "listing",
        BlockContext::Literal => "literal",
    }
}
