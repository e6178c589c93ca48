#![forbid(unsafe_code)]
//! Convert gettext PO catalogs into Apple `.strings` tables.
//!
//! Each `#:`-annotated PO entry becomes a `"msgid" = "msgstr";` record under a
//! `/* reference */` comment. Plural translations get keys of the form
//! `"<msgid_plural> {N}"`, and untranslated entries are written commented out.
//! The assembled table is transcoded in a final step, to UTF-16 by default.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use po2strings::{ConvertOptions, convert_file_to};
//!
//! let conversion = convert_file_to("po/fr.po", "fr.lproj/Localizable.strings", &ConvertOptions::new())?;
//! for diagnostic in &conversion.diagnostics {
//!     eprintln!("WARNING: {}", diagnostic);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Limitations
//!
//! - Escape sequences are copied verbatim, never decoded. See [`escape::Escaping`].
//! - `msgctxt`, obsolete entries, and flags are not interpreted.
//! - Entries without a `#:` reference comment are skipped unless
//!   [`options::OrphanPolicy::Convert`] is set.

pub mod codec;
pub mod converter;
pub mod encoding;
pub mod error;
pub mod escape;
pub mod line;
pub mod options;
pub mod reader;
pub mod render;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{Conversion, convert_file, convert_file_to, convert_reader, convert_source, convert_str},
    converter::{PoConverter, State},
    encoding::OutputEncoding,
    error::Error,
    escape::Escaping,
    options::{ConvertOptions, OrphanPolicy},
    types::{Diagnostic, DiagnosticKind, Entry, OutputRecord, PluralForm},
};
