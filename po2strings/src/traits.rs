//! Traits for feeding catalogs into the converter.

use crate::error::Error;

/// A pull-based source of catalog lines.
///
/// Lines are handed out trimmed of line terminators and surrounding
/// whitespace. `Ok(None)` marks the end of input.
///
/// # Example
///
/// ```rust
/// use po2strings::{reader::LineReader, traits::LineSource};
///
/// let mut source = LineReader::new("  msgid \"Hi\"  \r\n".as_bytes());
/// assert_eq!(source.next_line()?, Some("msgid \"Hi\"".to_string()));
/// assert_eq!(source.line_number(), 1);
/// assert_eq!(source.next_line()?, None);
/// # Ok::<(), po2strings::Error>(())
/// ```
pub trait LineSource {
    /// Pulls the next line.
    fn next_line(&mut self) -> Result<Option<String>, Error>;

    /// 1-based number of the line last returned by [`LineSource::next_line`],
    /// or 0 before the first line.
    fn line_number(&self) -> usize;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        (**self).next_line()
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }
}
