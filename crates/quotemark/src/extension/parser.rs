//! Extension syntax recognition.
//!
//! Recognizes block attribute lines (`[name, attrs]`), block delimiter lines
//! (`====`, `--`, `____`, `----`, `....`) and inline macro occurrences
//! (`name:target[attrs]`) within a line.

use super::args::{AttrList, MacroArgs};
use super::block::BlockContext;

/// A parsed block attribute line: `[name]` or `[name, attrs]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttributeLine {
    pub name: String,
    pub attrs: AttrList,
}

/// A parsed inline macro occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedMacro {
    pub name: String,
    pub args: MacroArgs,
}

/// Parse a block attribute line.
///
/// Returns `None` if the line is not of the form `[name]` / `[name, attrs]`.
pub(crate) fn parse_attribute_line(line: &str) -> Option<AttributeLine> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;

    // A bracketed line with nested brackets is not an attribute line.
    if inner.contains('[') || inner.contains(']') {
        return None;
    }

    let (name, rest) = match inner.find(',') {
        Some(pos) => (&inner[..pos], &inner[pos + 1..]),
        None => (inner, ""),
    };

    let name = name.trim();
    if !is_valid_extension_name(name) {
        return None;
    }

    Some(AttributeLine {
        name: name.to_owned(),
        attrs: AttrList::parse(rest),
    })
}

/// Parse a block delimiter line.
///
/// Returns the context kind and the exact delimiter token, used to match the
/// closing line. Delimiter lines consist of a single repeated character:
/// `====` (example, 4+), `--` (open, exactly 2), `____` (quote, 4+),
/// `----` (listing, 4+), `....` (literal, 4+).
pub(crate) fn parse_delimiter(line: &str) -> Option<(BlockContext, &str)> {
    let trimmed = line.trim();
    let first = trimmed.chars().next()?;
    if !trimmed.chars().all(|c| c == first) {
        return None;
    }

    let len = trimmed.len();
    let context = match first {
        '=' if len >= 4 => BlockContext::Example,
        '-' if len == 2 => BlockContext::Open,
        '-' if len >= 4 => BlockContext::Listing,
        '_' if len >= 4 => BlockContext::Quote,
        '.' if len >= 4 => BlockContext::Literal,
        _ => return None,
    };

    Some((context, trimmed))
}

/// Find the first inline macro occurrence in a line.
///
/// Returns the parsed macro and its byte range `(start, end)` within the
/// line. Returns `None` when the line contains no macro-shaped text.
pub(crate) fn find_macro(line: &str) -> Option<(ParsedMacro, usize, usize)> {
    let bytes = line.as_bytes();

    for (colon, _) in line.match_indices(':') {
        // Name runs backwards from the colon.
        let name_start = line[..colon]
            .char_indices()
            .rev()
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '-' || c == '_'))
            .map_or(0, |(i, c)| i + c.len_utf8());
        let name = &line[name_start..colon];
        if name.is_empty() {
            continue;
        }

        // Reject `::name` forms (block macros, not inline).
        if name_start > 0 && bytes[name_start - 1] == b':' {
            continue;
        }

        // Target runs from the colon to the opening bracket, no whitespace.
        let after = &line[colon + 1..];
        let Some(bracket) = after.find('[') else {
            continue;
        };
        let target = &after[..bracket];
        if target.contains(char::is_whitespace) || target.contains(':') {
            continue;
        }

        let bracket_start = colon + 1 + bracket;
        let Some((content, consumed)) = parse_brackets(&line[bracket_start..]) else {
            continue;
        };

        let parsed = ParsedMacro {
            name: name.to_owned(),
            args: MacroArgs::new(target, &content),
        };
        return Some((parsed, name_start, bracket_start + consumed));
    }

    None
}

/// Check if a name is a valid extension name.
///
/// Valid names start with a letter and contain only alphanumeric characters,
/// hyphens, and underscores.
pub(crate) fn is_valid_extension_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic())
        && chars.all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Parse content from brackets: `[content]`
///
/// Returns (content, bytes consumed), handling nested brackets.
fn parse_brackets(s: &str) -> Option<(String, usize)> {
    if !s.starts_with('[') {
        return None;
    }

    let mut depth = 0;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some((s[1..i].to_owned(), i + 1));
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_line_plain() {
        let attr = parse_attribute_line("[richquote]").unwrap();
        assert_eq!(attr.name, "richquote");
        assert!(attr.attrs.is_empty());
    }

    #[test]
    fn test_attribute_line_with_attrs() {
        let attr = parse_attribute_line("[figure, role=wide]").unwrap();
        assert_eq!(attr.name, "figure");
        assert_eq!(attr.attrs.get("role"), Some("wide"));
    }

    #[test]
    fn test_attribute_line_leading_whitespace() {
        let attr = parse_attribute_line("  [figcaption]").unwrap();
        assert_eq!(attr.name, "figcaption");
    }

    #[test]
    fn test_not_attribute_line() {
        assert!(parse_attribute_line("regular text").is_none());
        assert!(parse_attribute_line("[1]").is_none());
        assert!(parse_attribute_line("[]").is_none());
        assert!(parse_attribute_line("[link[nested]]").is_none());
        assert!(parse_attribute_line("[richquote] trailing").is_none());
    }

    #[test]
    fn test_delimiter_example() {
        let (ctx, token) = parse_delimiter("====").unwrap();
        assert_eq!(ctx, BlockContext::Example);
        assert_eq!(token, "====");
    }

    #[test]
    fn test_delimiter_open() {
        let (ctx, _) = parse_delimiter("--").unwrap();
        assert_eq!(ctx, BlockContext::Open);
    }

    #[test]
    fn test_delimiter_quote_listing_literal() {
        assert_eq!(parse_delimiter("____").unwrap().0, BlockContext::Quote);
        assert_eq!(parse_delimiter("----").unwrap().0, BlockContext::Listing);
        assert_eq!(parse_delimiter("....").unwrap().0, BlockContext::Literal);
    }

    #[test]
    fn test_delimiter_longer_token() {
        let (ctx, token) = parse_delimiter("======").unwrap();
        assert_eq!(ctx, BlockContext::Example);
        assert_eq!(token, "======");
    }

    #[test]
    fn test_not_delimiter() {
        assert!(parse_delimiter("===").is_none());
        assert!(parse_delimiter("---").is_none());
        assert!(parse_delimiter("- - -").is_none());
        assert!(parse_delimiter("text").is_none());
        assert!(parse_delimiter("").is_none());
    }

    #[test]
    fn test_find_macro_with_target() {
        let (parsed, start, end) = find_macro("see time:2020-01-01[New Year] here").unwrap();
        assert_eq!(parsed.name, "time");
        assert_eq!(parsed.args.target, "2020-01-01");
        assert_eq!(parsed.args.content, "New Year");
        assert_eq!(&"see time:2020-01-01[New Year] here"[start..end], "time:2020-01-01[New Year]");
    }

    #[test]
    fn test_find_macro_short_form() {
        let (parsed, start, end) = find_macro("q:[hello]").unwrap();
        assert_eq!(parsed.name, "q");
        assert_eq!(parsed.args.target, "");
        assert_eq!(parsed.args.content, "hello");
        assert_eq!((start, end), (0, 9));
    }

    #[test]
    fn test_find_macro_at_line_start() {
        let (parsed, start, _) = find_macro("citetitle:[The Rust Book] rest").unwrap();
        assert_eq!(parsed.name, "citetitle");
        assert_eq!(start, 0);
    }

    #[test]
    fn test_find_macro_skips_urls() {
        // `https://example.com` has no bracket, and the path contains `/`
        // so nothing macro-shaped is found.
        assert!(find_macro("visit https://example.com for more").is_none());
    }

    #[test]
    fn test_find_macro_rejects_double_colon() {
        assert!(find_macro("image::photo.png[alt]").is_none());
    }

    #[test]
    fn test_find_macro_rejects_space_in_target() {
        assert!(find_macro("note: see [1]").is_none());
    }

    #[test]
    fn test_find_macro_unclosed_bracket() {
        assert!(find_macro("q:[unclosed").is_none());
    }

    #[test]
    fn test_find_macro_nested_brackets() {
        let (parsed, _, _) = find_macro("q:[nested [brackets]]").unwrap();
        assert_eq!(parsed.args.content, "nested [brackets]");
    }

    #[test]
    fn test_find_macro_non_ascii_neighbors() {
        let line = "（time:2020-01-01[正月]）";
        let (parsed, start, end) = find_macro(line).unwrap();
        assert_eq!(parsed.name, "time");
        assert_eq!(parsed.args.target, "2020-01-01");
        assert_eq!(parsed.args.content, "正月");
        assert_eq!(&line[start..end], "time:2020-01-01[正月]");
    }

    #[test]
    fn test_find_macro_after_curly_quote() {
        let (parsed, _, _) = find_macro("“q:[hello]”").unwrap();
        assert_eq!(parsed.name, "q");
        assert_eq!(parsed.args.content, "hello");
    }

    #[test]
    fn test_find_macro_first_of_several() {
        let (parsed, start, _) = find_macro("q:[a] q:[b]").unwrap();
        assert_eq!(parsed.args.content, "a");
        assert_eq!(start, 0);
    }

    #[test]
    fn test_is_valid_extension_name() {
        assert!(is_valid_extension_name("richquote"));
        assert!(is_valid_extension_name("q"));
        assert!(is_valid_extension_name("cite-title"));
        assert!(!is_valid_extension_name(""));
        assert!(!is_valid_extension_name("1figure"));
        assert!(!is_valid_extension_name("foo bar"));
    }
}
