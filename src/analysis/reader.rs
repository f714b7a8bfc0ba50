//! Buffered single-byte character retrieval.
//!
//! [`CharReader`] owns its read buffer and cursor, so multiple streams can
//! be scanned at once without sharing any hidden state. It exposes exactly
//! one operation, [`CharReader::next_char`], which yields `Ok(None)` at end
//! of input instead of a sentinel byte.

use std::io::Read;

use crate::error::Result;

const BUF_SIZE: usize = 4096;

/// A buffered byte reader over any [`Read`] source.
pub struct CharReader<R: Read> {
    inner: R,
    buf: Box<[u8; BUF_SIZE]>,
    pos: usize,
    len: usize,
    eof: bool,
}

impl<R: Read> CharReader<R> {
    /// Wrap a byte source.
    pub fn new(inner: R) -> Self {
        CharReader {
            inner,
            buf: Box::new([0u8; BUF_SIZE]),
            pos: 0,
            len: 0,
            eof: false,
        }
    }

    /// Fetch the next byte, or `None` at end of input.
    ///
    /// May block on the underlying source; blocking is transparent and
    /// unbounded.
    pub fn next_char(&mut self) -> Result<Option<u8>> {
        if self.pos == self.len {
            if self.eof {
                return Ok(None);
            }
            self.fill()?;
            if self.len == 0 {
                return Ok(None);
            }
        }

        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }

    fn fill(&mut self) -> Result<()> {
        self.pos = 0;
        self.len = self.inner.read(&mut self.buf[..])?;
        if self.len == 0 {
            self.eof = true;
        }
        Ok(())
    }
}
