//! Citation, timestamp and inline-quote macros.
//!
//! - `citetitle:[Title]` wraps the title in `<cite>`.
//! - `time:2020-01-01[New Year]` wraps a datetime in `<time datetime=...>`.
//! - `q:[lang=fr, bonjour]` wraps text in `<quote>` with optional language
//!   attributes.

use crate::extension::{ExtensionError, ExtensionOutput, InlineMacro, MacroArgs, RenderContext};

/// Wraps the cited work's title in a `<cite>` element.
///
/// `citetitle:[The Rust Book]` renders as `<cite>The Rust Book</cite>`.
#[derive(Debug, Default)]
pub struct CiteTitleMacro;

impl InlineMacro for CiteTitleMacro {
    fn name(&self) -> &str {
        "citetitle"
    }

    fn process(
        &mut self,
        args: MacroArgs,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError> {
        ctx.require_html()?;
        Ok(ExtensionOutput::html(format!(
            "<cite>{}</cite>",
            args.target_or_content()
        )))
    }
}

/// How the timestamp macro resolves a missing target or display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFallback {
    /// Symmetric fallback: a missing display text falls back to the target,
    /// and a missing target falls back to the display text. When both are
    /// absent the macro is left unprocessed.
    #[default]
    Intended,
    /// Bug-compatible with the original substitution rule, whose fallback
    /// condition was inverted: the display text is always *replaced* by the
    /// target (empty bracket text counts as supplied), and a display text
    /// without target renders an empty `<time datetime="">`.
    Legacy,
}

/// Wraps a datetime in a `<time datetime="...">` element.
///
/// The machine-readable datetime comes from the macro target and the display
/// text from the bracket content: `time:2020-01-01[New Year]` renders as
/// `<time datetime="2020-01-01">New Year</time>`. When one of the two is
/// absent it is defaulted from the other, per [`TimeFallback`].
#[derive(Debug, Default)]
pub struct TimeMacro {
    fallback: TimeFallback,
}

impl TimeMacro {
    /// Create a timestamp macro with the intended fallback semantics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timestamp macro that reproduces the legacy fallback rule.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            fallback: TimeFallback::Legacy,
        }
    }
}

impl InlineMacro for TimeMacro {
    fn name(&self) -> &str {
        "time"
    }

    fn process(
        &mut self,
        args: MacroArgs,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError> {
        ctx.require_html()?;

        let target = (!args.target.is_empty()).then_some(args.target.as_str());
        let text = (!args.content.is_empty()).then_some(args.content.as_str());

        let (datetime, display) = match self.fallback {
            TimeFallback::Intended => match (target, text) {
                (None, None) => return Ok(ExtensionOutput::Skip),
                (datetime, display) => (
                    datetime.or(display).unwrap_or_default(),
                    display.or(datetime).unwrap_or_default(),
                ),
            },
            TimeFallback::Legacy => match (target, text) {
                (Some(target), _) => (target, target),
                (None, Some(_)) => ("", ""),
                (None, None) => return Ok(ExtensionOutput::Skip),
            },
        };

        Ok(ExtensionOutput::html(format!(
            "<time datetime=\"{datetime}\">{display}</time>"
        )))
    }
}

/// Wraps text in a `<quote>` element with optional language attributes.
///
/// `q:[hello]` renders as `<quote>hello</quote>`; `q:[lang=fr, bonjour]`
/// renders as `<quote xml:lang="fr" lang="fr">bonjour</quote>`.
#[derive(Debug, Default)]
pub struct QuoteMacro;

impl InlineMacro for QuoteMacro {
    fn name(&self) -> &str {
        "q"
    }

    fn process(
        &mut self,
        args: MacroArgs,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError> {
        ctx.require_html()?;

        let text = args.attrs.positional(0).unwrap_or_default();
        let html = match args.attrs.get("lang") {
            Some(lang) => format!("<quote xml:lang=\"{lang}\" lang=\"{lang}\">{text}</quote>"),
            None => format!("<quote>{text}</quote>"),
        };
        Ok(ExtensionOutput::html(html))
    }
}
