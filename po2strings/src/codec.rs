//! File- and stream-level conversion entry points.
//!
//! Every function here runs the same pipeline: decode the input, feed its
//! lines through a fresh [`PoConverter`], and hand back a [`Conversion`]
//! holding the assembled text. Transcoding to the output encoding is a
//! separate last step ([`Conversion::encode`]) so the parser never deals with
//! bytes.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Cursor, Read, Write},
    path::Path,
};

use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::{
    converter::PoConverter,
    encoding::{OutputEncoding, resolve_input_encoding},
    error::Error,
    options::ConvertOptions,
    reader::LineReader,
    traits::LineSource,
    types::Diagnostic,
};

/// The outcome of converting one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The `.strings` text, not yet transcoded.
    pub text: String,
    /// Warnings recorded while converting, in input order.
    pub diagnostics: Vec<Diagnostic>,
    /// Records written with a translation.
    pub translated: usize,
    /// Records written commented out for lack of a translation.
    pub untranslated: usize,
}

impl Conversion {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Transcodes the complete text.
    pub fn encode(&self, encoding: OutputEncoding) -> Vec<u8> {
        encoding.encode(&self.text)
    }

    /// Transcodes the text and writes it in one go.
    pub fn write_to<W: Write>(&self, mut writer: W, encoding: OutputEncoding) -> Result<(), Error> {
        writer.write_all(&self.encode(encoding))?;
        writer.flush().map_err(Error::Io)
    }
}

/// Converts lines pulled from any [`LineSource`].
pub fn convert_source<S: LineSource>(
    source: S,
    options: &ConvertOptions,
) -> Result<Conversion, Error> {
    let mut converter = PoConverter::new(options.clone());
    converter.process(source)?;
    Ok(converter.finish())
}

/// Converts an already decoded catalog. A leading byte order mark is ignored.
///
/// # Example
///
/// ```rust
/// use po2strings::{ConvertOptions, convert_str};
///
/// let po = "#: file.c:42\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n";
/// let conversion = convert_str(po, &ConvertOptions::new())?;
/// assert!(conversion.text.ends_with("\n/* file.c:42 */\n\"Hello\" = \"Bonjour\";\n"));
/// assert!(conversion.diagnostics.is_empty());
/// # Ok::<(), po2strings::Error>(())
/// ```
pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<Conversion, Error> {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    convert_source(LineReader::new(Cursor::new(input)), options)
}

/// Converts raw bytes, decoding them with [`ConvertOptions::input_encoding`].
///
/// A byte order mark takes precedence over the configured encoding. Malformed
/// sequences are replaced with U+FFFD.
pub fn convert_reader<R: Read>(reader: R, options: &ConvertOptions) -> Result<Conversion, Error> {
    let encoding = resolve_input_encoding(options.input_encoding.as_deref())?;
    let decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding))
        .bom_override(true)
        .build(reader);
    convert_source(LineReader::new(BufReader::new(decoder)), options)
}

/// Converts the catalog at `path`.
///
/// A missing file is reported as [`Error::InputNotFound`] before anything is converted.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<Conversion, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_open(path, e))?;
    log::info!("Converting {}", path.display());
    convert_reader(file, options)
}

/// Converts the catalog at `input` and writes the transcoded table to `output`.
///
/// The output file is only created once the whole input has been converted.
pub fn convert_file_to<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<Conversion, Error> {
    let conversion = convert_file(input, options)?;
    let file = File::create(output.as_ref())?;
    conversion.write_to(BufWriter::new(file), options.output_encoding)?;
    log::info!(
        "Wrote {} ({})",
        output.as_ref().display(),
        options.output_encoding
    );
    Ok(conversion)
}
