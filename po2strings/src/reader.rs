//! Line reader over any buffered input.

use std::io::BufRead;

use crate::{error::Error, traits::LineSource};

/// Reads one trimmed line at a time from a [`BufRead`].
///
/// The reader expects UTF-8. Use [`crate::codec::convert_reader`] for input
/// in other encodings; it decodes before lines reach this type.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    line_number: usize,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader {
            inner,
            line_number: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.buf.trim().to_string()))
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
