//! streammark: single-pass streaming Markdown to HTML converter
//!
//! Converts a small Markdown dialect (ATX headings, blockquotes, flat `*`
//! lists, fenced code blocks, paragraphs with inline code spans) to HTML
//! while reading, byte by byte.
//!
//! # Design Principles
//! - No AST: HTML is written as input is consumed
//! - One forward pass: lookahead is read-and-push-back, at most three bytes
//! - Any `BufRead` in, any `Write` out
//!
//! # Limitations
//! Text is not HTML-escaped. A `<` or `&` in the input appears verbatim in
//! the output.

pub mod block;
pub mod error;
pub mod inline;
pub mod render;
pub mod stream;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

// Re-export primary types
pub use block::{Block, BlockScanner, Terminator};
pub use error::{Error, Result};
pub use inline::CodeSpanKind;
pub use render::HtmlWriter;
pub use stream::PushbackStream;

/// Convert Markdown to HTML.
///
/// # Example
/// ```
/// let html = streammark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    let mut out = Vec::new();
    to_html_into(input.as_bytes(), &mut out);
    // Only ASCII structure bytes are dropped or inserted, so UTF-8 input
    // stays UTF-8.
    match String::from_utf8(out) {
        Ok(html) => html,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(input: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut scanner = BlockScanner::new(input, std::mem::take(out));
    // Slices and vectors never report I/O errors.
    let _ = scanner.run();
    *out = scanner.into_writer();
}

/// Stream Markdown from `input` to `output` as HTML.
///
/// `output` is flushed at the end. Wrap unbuffered sinks in a `BufWriter`.
pub fn convert<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    BlockScanner::new(input, output).run()
}

/// Stream the Markdown file at `path` to `output` as HTML.
///
/// Nothing is written if the file cannot be opened.
pub fn convert_path<W: Write>(path: impl AsRef<Path>, output: W) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    convert(BufReader::new(file), output)
}
