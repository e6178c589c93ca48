//! Input decoding and output transcoding.
//!
//! Decoding happens before the first line reaches the converter; encoding is a
//! separate last step over the fully assembled text.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use encoding_rs::Encoding;

use crate::error::Error;

/// Byte encoding of the written `.strings` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    /// UTF-16, little-endian, with a byte order mark.
    #[default]
    Utf16,
    /// UTF-16 little-endian without a byte order mark.
    Utf16Le,
    /// UTF-16 big-endian without a byte order mark.
    Utf16Be,
    /// UTF-8 without a byte order mark.
    Utf8,
}

impl OutputEncoding {
    /// Byte order mark written before the text, if any.
    pub fn bom(&self) -> &'static [u8] {
        match self {
            OutputEncoding::Utf16 => &[0xFF, 0xFE],
            _ => &[],
        }
    }

    /// Transcodes the complete output text.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            OutputEncoding::Utf8 => text.as_bytes().to_vec(),
            OutputEncoding::Utf16 | OutputEncoding::Utf16Le | OutputEncoding::Utf16Be => {
                let mut bytes = Vec::with_capacity(2 + text.len() * 2);
                bytes.extend_from_slice(self.bom());
                for unit in text.encode_utf16() {
                    let pair = if *self == OutputEncoding::Utf16Be {
                        unit.to_be_bytes()
                    } else {
                        unit.to_le_bytes()
                    };
                    bytes.extend_from_slice(&pair);
                }
                bytes
            }
        }
    }
}

impl Display for OutputEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputEncoding::Utf16 => write!(f, "utf-16"),
            OutputEncoding::Utf16Le => write!(f, "utf-16le"),
            OutputEncoding::Utf16Be => write!(f, "utf-16be"),
            OutputEncoding::Utf8 => write!(f, "utf-8"),
        }
    }
}

/// Accepts `utf-16`, `utf-16le`, `utf-16be` and `utf-8`, case-insensitively,
/// with or without the dash.
///
/// # Example
/// ```rust
/// use po2strings::encoding::OutputEncoding;
/// assert_eq!("UTF16".parse::<OutputEncoding>().unwrap(), OutputEncoding::Utf16);
/// assert_eq!("utf-8".parse::<OutputEncoding>().unwrap(), OutputEncoding::Utf8);
/// assert!("latin1".parse::<OutputEncoding>().is_err());
/// ```
impl FromStr for OutputEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "utf16" => Ok(OutputEncoding::Utf16),
            "utf16le" => Ok(OutputEncoding::Utf16Le),
            "utf16be" => Ok(OutputEncoding::Utf16Be),
            "utf8" => Ok(OutputEncoding::Utf8),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

/// Resolves an input encoding label (any WHATWG label, e.g. `latin1`), UTF-8 when absent.
pub fn resolve_input_encoding(label: Option<&str>) -> Result<&'static Encoding, Error> {
    match label {
        None => Ok(encoding_rs::UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(label.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_default_has_little_endian_bom() {
        let bytes = OutputEncoding::default().encode("A");
        assert_eq!(bytes, vec![0xFF, 0xFE, 0x41, 0x00]);
    }

    #[test]
    fn test_utf16_variants_without_bom() {
        assert_eq!(OutputEncoding::Utf16Le.encode("é"), vec![0xE9, 0x00]);
        assert_eq!(OutputEncoding::Utf16Be.encode("é"), vec![0x00, 0xE9]);
    }

    #[test]
    fn test_surrogate_pairs() {
        let bytes = OutputEncoding::Utf16Le.encode("😀");
        assert_eq!(bytes, vec![0x3D, 0xD8, 0x00, 0xDE]);
    }

    #[test]
    fn test_utf16_decodes_back_with_encoding_rs() {
        let text = "/* a.c:1 */\n\"Café\" = \"crème\";\n";
        let bytes = OutputEncoding::Utf16.encode(text);
        let (decoded, encoding, had_errors) = encoding_rs::UTF_8.decode(&bytes);
        assert_eq!(encoding, encoding_rs::UTF_16LE);
        assert!(!had_errors);
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(OutputEncoding::Utf8.encode("Café"), "Café".as_bytes());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for encoding in [
            OutputEncoding::Utf16,
            OutputEncoding::Utf16Le,
            OutputEncoding::Utf16Be,
            OutputEncoding::Utf8,
        ] {
            assert_eq!(encoding.to_string().parse::<OutputEncoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_resolve_input_encoding() {
        assert_eq!(resolve_input_encoding(None).unwrap(), encoding_rs::UTF_8);
        assert_eq!(
            resolve_input_encoding(Some("iso-8859-1")).unwrap(),
            encoding_rs::WINDOWS_1252
        );
        assert!(matches!(
            resolve_input_encoding(Some("klingon")),
            Err(Error::UnknownEncoding(label)) if label == "klingon"
        ));
    }
}
