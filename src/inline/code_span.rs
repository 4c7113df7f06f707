//! Code span scanning.
//!
//! A single backtick opens a plain span that ends at the next backtick.
//! Three backticks open an escaped span that ends at the next three, so
//! lone backticks inside it are literal text.

use std::io::{self, BufRead, Write};

use crate::render::HtmlWriter;
use crate::stream::PushbackStream;

/// Backtick run that opens and closes an escaped span.
pub(crate) const TRIPLE_BACKTICK: &[u8] = b"```";

/// Which form a code span took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSpanKind {
    /// `` `code` ``
    Plain,
    /// ```` ```code with ` inside``` ````
    Escaped,
}

/// Scan a code span. The opening backtick has already been consumed.
///
/// Both forms emit `<code>`/`</code>` even when input ends inside the span.
pub fn scan_code_span<R: BufRead, W: Write>(
    stream: &mut PushbackStream<R>,
    out: &mut HtmlWriter<W>,
) -> io::Result<CodeSpanKind> {
    let kind = if stream.match_literal(&TRIPLE_BACKTICK[1..])? {
        CodeSpanKind::Escaped
    } else {
        CodeSpanKind::Plain
    };

    out.open_tag("code")?;
    match kind {
        CodeSpanKind::Plain => {
            stream.copy_until(out, b"`")?;
        }
        CodeSpanKind::Escaped => {
            stream.copy_through(out, TRIPLE_BACKTICK)?;
        }
    }
    out.close_tag("code")?;
    Ok(kind)
}
