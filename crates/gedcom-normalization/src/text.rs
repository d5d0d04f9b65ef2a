//! Field-independent text normalization shared by every vocabulary.

/// Entities decoded when [`unescape_entities`] is applied.
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#039;", "'"),
    ("&apos;", "'"),
    // Last, so "&amp;lt;" decodes to "&lt;" and not "<".
    ("&amp;", "&"),
];

/// Decode the HTML entities that HTML-escaped storage produces.
pub fn unescape_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    ENTITIES
        .iter()
        .fold(value.to_string(), |text, &(entity, plain)| {
            text.replace(entity, plain)
        })
}

/// Collapse tabs, line breaks and repeated spaces to one space, then trim.
pub fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;
    for ch in value.chars() {
        if matches!(ch, ' ' | '\t' | '\r' | '\n') {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out.trim().to_string()
}

/// Base normalization applied before any vocabulary-specific mapping.
pub fn canonical_text(value: &str, unescape: bool) -> String {
    if unescape {
        collapse_whitespace(&unescape_entities(value))
    } else {
        collapse_whitespace(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  COMMON \t\n LAW  "), "COMMON LAW");
        assert_eq!(collapse_whitespace("\r\n"), "");
        assert_eq!(collapse_whitespace("civil"), "civil");
    }

    #[test]
    fn test_unescape_entities() {
        assert_eq!(unescape_entities("Smith &amp; Sons"), "Smith & Sons");
        assert_eq!(unescape_entities("&lt;b&gt;"), "<b>");
        assert_eq!(unescape_entities("O&#39;Neil"), "O'Neil");
        assert_eq!(unescape_entities("&amp;lt;"), "&lt;");
        assert_eq!(unescape_entities("plain"), "plain");
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(canonical_text(" a &amp;  b ", false), "a &amp; b");
        assert_eq!(canonical_text(" a &amp;  b ", true), "a & b");
    }
}
