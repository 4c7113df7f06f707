//! Byte stream with unlimited pushback.
//!
//! Every scanner reads through a [`PushbackStream`]. Lookahead is done by
//! reading and pushing back; a failed multi-byte match leaves the stream
//! exactly as it was before the attempt.

use std::io::{self, BufRead};

use smallvec::SmallVec;
use tracing::trace;

use crate::render::HtmlWriter;

/// Inline capacity of the pushback stack. Lookahead never needs more than a
/// three-byte literal plus the rejected byte.
const PUSHBACK_INLINE: usize = 4;

/// Whitespace skipped before heading text and fenced code: space, tab, CR,
/// LF, vertical tab, form feed.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0b | 0x0c)
}

/// A forward byte stream over a buffered reader, with pushback.
///
/// Pushed-back bytes are read again last-in, first-out.
///
/// # Example
/// ```
/// use streammark::PushbackStream;
///
/// let mut stream = PushbackStream::new(&b"``x"[..]);
/// assert!(!stream.match_literal(b"```").unwrap());
/// assert_eq!(stream.read().unwrap(), Some(b'`'));
/// ```
pub struct PushbackStream<R> {
    inner: R,
    pushback: SmallVec<[u8; PUSHBACK_INLINE]>,
}

impl<R: BufRead> PushbackStream<R> {
    /// Create a stream over a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: SmallVec::new(),
        }
    }

    /// Consume and return the next byte, or `None` at end of input.
    pub fn read(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pushback.pop() {
            return Ok(Some(b));
        }
        let byte = loop {
            match self.inner.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    /// Return the next byte without consuming it.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        let next = self.read()?;
        if let Some(b) = next {
            self.unread(b);
        }
        Ok(next)
    }

    /// Push a byte back so it is the next one read.
    #[inline]
    pub fn unread(&mut self, b: u8) {
        self.pushback.push(b);
    }

    /// Consume the next byte only if it equals `want`.
    pub fn eat(&mut self, want: u8) -> io::Result<bool> {
        match self.read()? {
            Some(b) if b == want => Ok(true),
            Some(b) => {
                self.unread(b);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Consume `literal` if and only if the next bytes equal it.
    ///
    /// On mismatch every byte read during the attempt is pushed back in
    /// reverse order. End of input counts as a mismatching byte.
    pub fn match_literal(&mut self, literal: &[u8]) -> io::Result<bool> {
        for (matched, &want) in literal.iter().enumerate() {
            match self.read()? {
                Some(b) if b == want => {}
                got => {
                    if let Some(b) = got {
                        self.unread(b);
                    }
                    for &b in literal[..matched].iter().rev() {
                        self.unread(b);
                    }
                    trace!(matched, len = literal.len(), "literal match rolled back");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Skip whitespace, including line feeds.
    pub fn skip_whitespace(&mut self) -> io::Result<()> {
        while let Some(b) = self.read()? {
            if !is_space(b) {
                self.unread(b);
                break;
            }
        }
        Ok(())
    }

    /// Copy bytes to `out` until one of `stops` is read.
    ///
    /// The stop byte is consumed and returned, not written. Returns `None`
    /// when input ends first. Pushed-back bytes are drained one at a time;
    /// after that, runs are located in the reader's buffer with memchr and
    /// written in bulk.
    pub fn copy_until<W: io::Write>(
        &mut self,
        out: &mut HtmlWriter<W>,
        stops: &[u8],
    ) -> io::Result<Option<u8>> {
        while let Some(b) = self.pushback.pop() {
            if stops.contains(&b) {
                return Ok(Some(b));
            }
            out.write_byte(b)?;
        }

        loop {
            let (used, stop) = {
                let buf = match self.inner.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    return Ok(None);
                }
                match find_stop(buf, stops) {
                    Some(pos) => {
                        out.write_bytes(&buf[..pos])?;
                        (pos + 1, Some(buf[pos]))
                    }
                    None => {
                        out.write_bytes(buf)?;
                        (buf.len(), None)
                    }
                }
            };
            self.inner.consume(used);
            if stop.is_some() {
                return Ok(stop);
            }
        }
    }

    /// Copy bytes to `out` until the whole `delimiter` has been consumed.
    ///
    /// A partial delimiter is written as literal text. Returns `false` if
    /// input ended before the delimiter was found.
    pub fn copy_through<W: io::Write>(
        &mut self,
        out: &mut HtmlWriter<W>,
        delimiter: &[u8],
    ) -> io::Result<bool> {
        let Some((&first, rest)) = delimiter.split_first() else {
            return Ok(true);
        };
        while let Some(b) = self.copy_until(out, &[first])? {
            if self.match_literal(rest)? {
                return Ok(true);
            }
            out.write_byte(b)?;
        }
        Ok(false)
    }

    /// Number of bytes currently pushed back.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pushback.len()
    }
}

impl<R> std::fmt::Debug for PushbackStream<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushbackStream")
            .field("pushback", &self.pushback.as_slice())
            .finish_non_exhaustive()
    }
}

/// Find the first stop byte in `haystack`.
#[inline]
fn find_stop(haystack: &[u8], stops: &[u8]) -> Option<usize> {
    match *stops {
        [a] => memchr::memchr(a, haystack),
        [a, b] => memchr::memchr2(a, b, haystack),
        [a, b, c] => memchr::memchr3(a, b, c, haystack),
        _ => haystack.iter().position(|b| stops.contains(b)),
    }
}
