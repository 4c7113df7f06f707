//! HTML output writer.
//!
//! Bytes reach the sink as soon as a scanner produces them. Text is never
//! escaped: `<` or `&` in the input is passed through verbatim.

use std::io::{self, Write};

/// HTML output writer over any byte sink.
///
/// Wrap unbuffered sinks (stdout, files) in a `BufWriter` first; every call
/// goes straight to the sink.
///
/// # Example
/// ```
/// use streammark::HtmlWriter;
///
/// let mut writer = HtmlWriter::new(Vec::new());
/// writer.open_tag("p").unwrap();
/// writer.write_bytes(b"Hello <World>").unwrap();
/// writer.close_tag("p").unwrap();
///
/// assert_eq!(writer.into_inner(), b"<p>Hello <World></p>");
/// ```
pub struct HtmlWriter<W> {
    out: W,
}

impl<W: Write> HtmlWriter<W> {
    /// Wrap a sink.
    #[inline]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    /// Write a static string (tag literals).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.out.write_all(&[b])
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) -> io::Result<()> {
        self.write_byte(b'\n')
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag: `<tagname>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) -> io::Result<()> {
        self.write_byte(b'<')?;
        self.write_str(tag)?;
        self.write_byte(b'>')
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) -> io::Result<()> {
        self.write_str("</")?;
        self.write_str(tag)?;
        self.write_byte(b'>')
    }

    /// Write `<hN>`. The level is not clamped to 1..=6.
    pub fn open_heading(&mut self, level: usize) -> io::Result<()> {
        write!(self.out, "<h{level}>")
    }

    /// Write `</hN>`.
    pub fn close_heading(&mut self, level: usize) -> io::Result<()> {
        write!(self.out, "</h{level}>")
    }

    /// Flush the underlying sink.
    #[inline]
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Borrow the underlying sink.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Take back the underlying sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> std::fmt::Debug for HtmlWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlWriter").finish_non_exhaustive()
    }
}
