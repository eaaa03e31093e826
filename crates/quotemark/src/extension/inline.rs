//! Inline macro trait.
//!
//! Inline macros use short-form syntax within text flow: `name:target[attrs]`

use super::{ExtensionError, ExtensionOutput, MacroArgs, RenderContext};

/// Handler for inline macros: `name:target[attrs]`
///
/// Inline macros appear within text flow and produce a single inline HTML
/// element. They are pure text substitutions with no side effects.
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
///     ExtensionError, ExtensionOutput, InlineMacro, MacroArgs, RenderContext,
/// };
///
/// struct KbdMacro;
///
/// impl InlineMacro for KbdMacro {
///     fn name(&self) -> &str { "kbd" }
///
///     fn process(
///         &mut self,
///         args: MacroArgs,
///         ctx: &RenderContext,
///     ) -> Result<ExtensionOutput, ExtensionError> {
///         ctx.require_html()?;
///         Ok(ExtensionOutput::html(format!("<kbd>{}</kbd>", args.content)))
///     }
/// }
/// ```
pub trait InlineMacro: Send {
    /// Macro name (e.g. "citetitle", "time", "q").
    ///
    /// This is matched against the invocation syntax: `name:...[...]`
    fn name(&self) -> &str;

    /// Process the macro occurrence.
    ///
    /// Returns [`ExtensionOutput::Html`] to emit an inline element,
    /// [`ExtensionOutput::Skip`] to pass the occurrence through unchanged.
    ///
    /// # Errors
    ///
    /// Fails the whole invocation; no partial output is produced.
    fn process(
        &mut self,
        args: MacroArgs,
        ctx: &RenderContext,
    ) -> Result<ExtensionOutput, ExtensionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestKbd;

    impl InlineMacro for TestKbd {
        fn name(&self) -> &str {
            "kbd"
        }

        fn process(
            &mut self,
            args: MacroArgs,
            ctx: &RenderContext,
        ) -> Result<ExtensionOutput, ExtensionError> {
            ctx.require_html()?;
            Ok(ExtensionOutput::html(format!("<kbd>{}</kbd>", args.content)))
        }
    }

    #[test]
    fn test_inline_macro() {
        let mut kbd = TestKbd;
        let render = |_: &str| String::new();
        let ctx = RenderContext {
            backend: "html5",
            source_path: None,
            line: 1,
            render_markup: &render,
        };

        let output = kbd.process(MacroArgs::new("", "Ctrl+C"), &ctx).unwrap();
        assert_eq!(
            output,
            ExtensionOutput::Html("<kbd>Ctrl+C</kbd>".to_owned())
        );
    }

    #[test]
    fn test_inline_macro_backend_check() {
        let mut kbd = TestKbd;
        let render = |_: &str| String::new();
        let ctx = RenderContext {
            backend: "docbook5",
            source_path: None,
            line: 1,
            render_markup: &render,
        };

        let err = kbd.process(MacroArgs::new("", "X"), &ctx).unwrap_err();
        assert!(matches!(err, ExtensionError::UnsupportedBackend { .. }));
    }
}
