//! Attribute list and macro argument parsing.
//!
//! Parses the comma-separated attribute lists used by block attribute lines
//! (`[name, key=value]`) and inline macro brackets (`name:target[attrs]`).

use std::collections::HashMap;

/// Parsed attribute list.
///
/// Entries are comma-separated. An entry of the form `key=value` becomes a
/// named attribute; anything else is positional. Values may be wrapped in
/// single or double quotes, which are stripped.
///
/// # Example
///
/// ```
/// use quotemark::extension::AttrList;
///
/// let attrs = AttrList::parse("lang=fr, bonjour");
/// assert_eq!(attrs.get("lang"), Some("fr"));
/// assert_eq!(attrs.positional(0), Some("bonjour"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttrList {
    positional: Vec<String>,
    named: HashMap<String, String>,
}

impl AttrList {
    /// Parse a comma-separated attribute list.
    ///
    /// Commas inside quoted values do not split entries.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut attrs = Self::default();

        for entry in split_entries(s) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            if let Some((key, value)) = parse_named(entry) {
                attrs.named.insert(key.to_owned(), value.to_owned());
            } else {
                attrs.positional.push(strip_quotes(entry).to_owned());
            }
        }

        attrs
    }

    /// Get a named attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    /// Get a positional attribute by index (0-based).
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Check whether the list has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Arguments for an inline macro occurrence: `name:target[content]`.
///
/// `content` is the raw bracket text; `attrs` is the same text parsed as an
/// attribute list. Macros pick whichever view matches their content model.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MacroArgs {
    /// Target between the colon and the opening bracket (may be empty).
    pub target: String,
    /// Raw bracket content, unsplit.
    pub content: String,
    /// Bracket content parsed as an attribute list.
    pub attrs: AttrList,
}

impl MacroArgs {
    /// Build macro arguments from a target and raw bracket content.
    #[must_use]
    pub fn new(target: &str, content: &str) -> Self {
        Self {
            target: target.to_owned(),
            content: content.to_owned(),
            attrs: AttrList::parse(content),
        }
    }

    /// The target, falling back to the raw bracket content when the target
    /// is empty (short-form invocations put their text in the brackets).
    #[must_use]
    pub fn target_or_content(&self) -> &str {
        if self.target.is_empty() {
            &self.content
        } else {
            &self.target
        }
    }
}

/// Split an attribute list on top-level commas, respecting quotes.
fn split_entries(s: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (i, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == ',' => {
                entries.push(&s[start..i]);
                start = i + 1;
            }
            None => {}
        }
    }
    entries.push(&s[start..]);

    entries
}

/// Parse a `key=value` entry. Returns `None` for positional entries.
fn parse_named(entry: &str) -> Option<(&str, &str)> {
    let eq_pos = entry.find('=')?;
    let key = entry[..eq_pos].trim();

    if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return None;
    }

    let value = strip_quotes(entry[eq_pos + 1..].trim());
    Some((key, value))
}

/// Strip surrounding quotes (single or double) from a string.
fn strip_quotes(s: &str) -> &str {
    let is_quoted =
        (s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\''));
    if is_quoted && s.len() >= 2 {
        return &s[1..s.len() - 1];
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let attrs = AttrList::parse("");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_single_positional() {
        let attrs = AttrList::parse("hello");
        assert_eq!(attrs.positional(0), Some("hello"));
        assert_eq!(attrs.positional(1), None);
    }

    #[test]
    fn test_multiple_positional() {
        let attrs = AttrList::parse("one, two, three");
        assert_eq!(attrs.positional(0), Some("one"));
        assert_eq!(attrs.positional(1), Some("two"));
        assert_eq!(attrs.positional(2), Some("three"));
    }

    #[test]
    fn test_named() {
        let attrs = AttrList::parse("lang=fr");
        assert_eq!(attrs.get("lang"), Some("fr"));
        assert_eq!(attrs.positional(0), None);
    }

    #[test]
    fn test_named_and_positional() {
        let attrs = AttrList::parse("lang=fr, bonjour");
        assert_eq!(attrs.get("lang"), Some("fr"));
        assert_eq!(attrs.positional(0), Some("bonjour"));
    }

    #[test]
    fn test_quoted_value() {
        let attrs = AttrList::parse(r#"title="Hello, World""#);
        assert_eq!(attrs.get("title"), Some("Hello, World"));
    }

    #[test]
    fn test_single_quoted_positional() {
        let attrs = AttrList::parse("'quoted, text'");
        assert_eq!(attrs.positional(0), Some("quoted, text"));
    }

    #[test]
    fn test_entry_with_spaces_around_equals() {
        let attrs = AttrList::parse("lang = fr");
        assert_eq!(attrs.get("lang"), Some("fr"));
    }

    #[test]
    fn test_invalid_key_is_positional() {
        // `a b=c` is not a valid key, so the whole entry is positional.
        let attrs = AttrList::parse("a b=c");
        assert_eq!(attrs.positional(0), Some("a b=c"));
        assert_eq!(attrs.get("a b"), None);
    }

    #[test]
    fn test_get_nonexistent() {
        let attrs = AttrList::parse("lang=fr");
        assert_eq!(attrs.get("title"), None);
    }

    #[test]
    fn test_macro_args_target() {
        let args = MacroArgs::new("2020-01-01", "New Year");
        assert_eq!(args.target, "2020-01-01");
        assert_eq!(args.content, "New Year");
        assert_eq!(args.target_or_content(), "2020-01-01");
    }

    #[test]
    fn test_macro_args_short_form() {
        let args = MacroArgs::new("", "cite title");
        assert_eq!(args.target_or_content(), "cite title");
    }

    #[test]
    fn test_macro_args_content_keeps_commas() {
        let args = MacroArgs::new("", "New Year, 2020");
        assert_eq!(args.content, "New Year, 2020");
        assert_eq!(args.attrs.positional(0), Some("New Year"));
        assert_eq!(args.attrs.positional(1), Some("2020"));
    }
}
