//! Core types shared by the converter, the renderer, and callers.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The translatable unit currently being scanned.
///
/// Only one entry exists at a time. It is reset whenever a new entry starts,
/// so nothing carries over from one entry to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Text of the `#:` reference comment that introduced the entry, if any.
    pub comment: Option<String>,
    /// The source string.
    pub msgid: String,
    /// The plural source string from `msgid_plural`, if any.
    pub plural_id: Option<String>,
    /// Translations consumed so far, in source order.
    pub msgstr: Vec<(PluralForm, String)>,
}

impl Entry {
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Entry {
            comment: Some(comment.into()),
            ..Entry::default()
        }
    }
}

/// Index of a plural translation (`msgstr[N]`). Index 0 is the singular form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PluralForm(pub u32);

impl PluralForm {
    pub fn is_singular(&self) -> bool {
        self.0 == 0
    }

    /// Suffix appended to the plural source string to build a record key, e.g. ` {1}`.
    pub fn key_suffix(&self) -> String {
        format!(" {{{}}}", self.0)
    }
}

impl Display for PluralForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single `"key" = "value";` statement of a `.strings` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub key: String,
    pub value: String,
}

impl OutputRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        OutputRecord {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Untranslated records are written commented out.
    pub fn is_untranslated(&self) -> bool {
        self.value.is_empty()
    }
}

impl Display for OutputRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_untranslated() {
            write!(f, "/* \"{}\" = \"{}\"; */", self.key, self.value)
        } else {
            write!(f, "\"{}\" = \"{}\";", self.key, self.value)
        }
    }
}

/// What went wrong on a line the converter could not use as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A reference comment was not followed by a `msgid` line.
    ExpectedMsgid,
    /// A line that matches no known pattern at the top level.
    UnsupportedLine,
    /// A keyword whose value is not a quoted string.
    UnquotedValue,
    /// An entry ended without any `msgstr` line.
    MissingMsgstr,
    /// `msgstr[N]` with N > 0 in an entry that has no `msgid_plural`.
    MissingPluralId,
    /// The input ended in the middle of an entry.
    UnexpectedEof,
}

impl DiagnosticKind {
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::ExpectedMsgid => "expecting msgid",
            DiagnosticKind::UnsupportedLine => "unsupported line",
            DiagnosticKind::UnquotedValue => "expecting a quoted string",
            DiagnosticKind::MissingMsgstr => "entry has no msgstr",
            DiagnosticKind::MissingPluralId => "plural msgstr without msgid_plural",
            DiagnosticKind::UnexpectedEof => "unexpected end of input",
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A non-fatal problem found while converting a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number; 0 when the input was empty.
    pub line: usize,
    pub kind: DiagnosticKind,
    /// The offending line, trimmed.
    pub text: String,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind, text: impl Into<String>) -> Self {
        Diagnostic {
            line,
            kind,
            text: text.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "line {}: {}", self.line, self.kind)
        } else {
            write!(f, "line {}: {}, line \"{}\"", self.line, self.kind, self.text)
        }
    }
}
