//! Options controlling a conversion.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{encoding::OutputEncoding, error::Error, escape::Escaping};

/// What to do with a `msgid` line that is not introduced by a `#:` reference comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Skip the line and its continuation lines. The `msgstr` that follows is
    /// skipped the same way, so the entry produces no output.
    #[default]
    Discard,
    /// Convert the entry without a comment block. Entries with an empty
    /// `msgid` (the catalog header) are still discarded.
    Convert,
}

impl Display for OrphanPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OrphanPolicy::Discard => write!(f, "discard"),
            OrphanPolicy::Convert => write!(f, "convert"),
        }
    }
}

impl FromStr for OrphanPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(OrphanPolicy::Discard),
            "convert" => Ok(OrphanPolicy::Convert),
            _ => Err(Error::UnknownOrphanPolicy(s.to_string())),
        }
    }
}

/// Conversion behavior for [`crate::PoConverter`] and the `convert_*` functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Escaping applied to keys and values.
    pub escaping: Escaping,
    /// Whether the output starts with the generated-file header comment.
    pub header: bool,
    /// Handling of entries without a reference comment.
    pub orphans: OrphanPolicy,
    /// Input encoding label; UTF-8 when unset. A byte order mark overrides it.
    pub input_encoding: Option<String>,
    /// Encoding of the written output.
    pub output_encoding: OutputEncoding,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            escaping: Escaping::default(),
            header: true,
            orphans: OrphanPolicy::default(),
            input_encoding: None,
            output_encoding: OutputEncoding::default(),
        }
    }
}

impl ConvertOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the escaping strategy.
    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Enables/disables the header comment.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets the orphan entry policy.
    pub fn with_orphans(mut self, orphans: OrphanPolicy) -> Self {
        self.orphans = orphans;
        self
    }

    /// Sets the input encoding label.
    pub fn with_input_encoding(mut self, input_encoding: Option<String>) -> Self {
        self.input_encoding = input_encoding;
        self
    }

    /// Sets the output encoding.
    pub fn with_output_encoding(mut self, output_encoding: OutputEncoding) -> Self {
        self.output_encoding = output_encoding;
        self
    }
}
