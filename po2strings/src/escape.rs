//! Escaping strategies applied to keys and values before they are rendered.

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::error::Error;

/// How record keys and values are escaped on output.
///
/// PO strings are copied without decoding their escape sequences, and `.strings`
/// files use the same backslash escapes, so the default leaves text untouched.
/// A literal `"` or a trailing `\` in a PO string then produces a malformed
/// record; the other strategies guard against that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// Text is written as-is.
    #[default]
    Disabled,
    /// Escapes `"` characters that are not already escaped, and completes a
    /// dangling trailing backslash. Existing escape sequences are kept.
    StrayQuotes,
    /// Escapes every `\` and `"`. Use for text that carries no escapes of its own.
    Backslash,
}

impl Escaping {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Disabled => Cow::Borrowed(text),
            Escaping::StrayQuotes => escape_stray_quotes(text),
            Escaping::Backslash => {
                if text.contains(['\\', '"']) {
                    Cow::Owned(text.replace('\\', r"\\").replace('"', r#"\""#))
                } else {
                    Cow::Borrowed(text)
                }
            }
        }
    }
}

fn escape_stray_quotes(text: &str) -> Cow<'_, str> {
    let mut result = String::with_capacity(text.len());
    let mut backslashes = 0usize;
    let mut changed = false;

    for c in text.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' if backslashes % 2 == 0 => {
                result.push('\\');
                changed = true;
                backslashes = 0;
            }
            _ => backslashes = 0,
        }
        result.push(c);
    }

    if backslashes % 2 == 1 {
        result.push('\\');
        changed = true;
    }

    if changed {
        Cow::Owned(result)
    } else {
        Cow::Borrowed(text)
    }
}

impl Display for Escaping {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Escaping::Disabled => write!(f, "disabled"),
            Escaping::StrayQuotes => write!(f, "stray-quotes"),
            Escaping::Backslash => write!(f, "backslash"),
        }
    }
}

/// Accepts `disabled`/`none`, `stray-quotes`, and `backslash`, case-insensitively,
/// with `-` and `_` treated alike.
impl FromStr for Escaping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "disabled" | "none" => Ok(Escaping::Disabled),
            "stray-quotes" => Ok(Escaping::StrayQuotes),
            "backslash" => Ok(Escaping::Backslash),
            _ => Err(Error::UnknownEscaping(s.to_string())),
        }
    }
}
