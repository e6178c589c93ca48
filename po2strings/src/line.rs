//! Classification of single catalog lines.
//!
//! The converter decides what to do with a line purely from its prefix. This
//! module turns a trimmed line into a [`LineKind`] so the state machine can
//! match on it instead of slicing strings.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::PluralForm;

lazy_static! {
    // `msgstr`, an optional `[index]`, then either nothing or a space and the value.
    static ref MSGSTR_REGEX: Regex = Regex::new(r"^msgstr(?:\[([^\]]*)\])?(?: (.*))?$").unwrap();
}

/// What a single trimmed line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#:` reference comment; carries the text after the marker, left-trimmed.
    Reference(&'a str),
    /// Empty line.
    Blank,
    /// Any other `#` comment (translator, flags, previous-msgid, obsolete).
    Comment,
    /// `msgid `; carries the remainder after the token.
    Msgid(&'a str),
    /// `msgid_plural `; carries the remainder after the token.
    MsgidPlural(&'a str),
    /// `msgstr` or `msgstr[N]`. `value` is `None` when nothing follows the token.
    Msgstr {
        form: Option<PluralForm>,
        value: Option<&'a str>,
    },
    /// A quoted continuation fragment.
    Fragment,
    /// Anything else.
    Unsupported,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(text) = line.strip_prefix("#:") {
        return LineKind::Reference(text.trim_start());
    }
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('#') {
        return LineKind::Comment;
    }
    if line.starts_with('"') {
        return LineKind::Fragment;
    }
    if let Some(rest) = line.strip_prefix("msgid_plural ") {
        return LineKind::MsgidPlural(rest);
    }
    if let Some(rest) = line.strip_prefix("msgid ") {
        return LineKind::Msgid(rest);
    }
    if let Some(caps) = MSGSTR_REGEX.captures(line) {
        let form = match caps.get(1) {
            Some(index) => match index.as_str().parse::<u32>() {
                Ok(n) => Some(PluralForm(n)),
                Err(_) => return LineKind::Unsupported,
            },
            None => None,
        };
        return LineKind::Msgstr {
            form,
            value: caps.get(2).map(|m| m.as_str()),
        };
    }
    LineKind::Unsupported
}

/// Strips the first and last character of a quoted fragment.
///
/// Escape sequences inside the fragment are left untouched.
pub fn unquote(fragment: &str) -> &str {
    let inner = fragment.strip_prefix('"').unwrap_or(fragment);
    match inner.char_indices().next_back() {
        Some((last, _)) => &inner[..last],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blanks() {
        assert_eq!(classify("#: src/main.c:42"), LineKind::Reference("src/main.c:42"));
        assert_eq!(classify("#:"), LineKind::Reference(""));
        assert_eq!(classify("#, fuzzy"), LineKind::Comment);
        assert_eq!(classify("# translator note"), LineKind::Comment);
        assert_eq!(classify(""), LineKind::Blank);
    }

    #[test]
    fn test_msgid_tokens() {
        assert_eq!(classify(r#"msgid "Hello""#), LineKind::Msgid(r#""Hello""#));
        assert_eq!(
            classify(r#"msgid_plural "%d items""#),
            LineKind::MsgidPlural(r#""%d items""#)
        );
        // The trailing space is part of the token.
        assert_eq!(classify("msgid"), LineKind::Unsupported);
        assert_eq!(classify("msgid_plural"), LineKind::Unsupported);
    }

    #[test]
    fn test_msgstr_tokens() {
        assert_eq!(
            classify(r#"msgstr "Bonjour""#),
            LineKind::Msgstr {
                form: None,
                value: Some(r#""Bonjour""#)
            }
        );
        assert_eq!(
            classify(r#"msgstr[1] "%d articles""#),
            LineKind::Msgstr {
                form: Some(PluralForm(1)),
                value: Some(r#""%d articles""#)
            }
        );
        assert_eq!(
            classify(r#"msgstr[10] "x""#),
            LineKind::Msgstr {
                form: Some(PluralForm(10)),
                value: Some(r#""x""#)
            }
        );
        assert_eq!(
            classify("msgstr"),
            LineKind::Msgstr {
                form: None,
                value: None
            }
        );
    }

    #[test]
    fn test_malformed_msgstr_is_unsupported() {
        assert_eq!(classify(r#"msgstr[x] "y""#), LineKind::Unsupported);
        assert_eq!(classify(r#"msgstrx "y""#), LineKind::Unsupported);
        assert_eq!(classify(r#"msgstr[1]"y""#), LineKind::Unsupported);
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(classify(r#""continued""#), LineKind::Fragment);
        assert_eq!(classify(r#"msgctxt "menu""#), LineKind::Unsupported);
        assert_eq!(classify("garbage"), LineKind::Unsupported);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""Hello""#), "Hello");
        assert_eq!(unquote(r#""""#), "");
        assert_eq!(unquote(r#"""#), "");
        assert_eq!(unquote(r#""Say \"hi\"""#), r#"Say \"hi\""#);
        assert_eq!(unquote(r#""Café""#), "Café");
        // The last character is dropped whatever it is.
        assert_eq!(unquote(r#""crème"#), "crèm");
        assert_eq!(unquote(r#""ü"#), "");
    }
}
