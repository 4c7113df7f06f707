//! Block dispatcher and block scanners.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::Result;
use crate::inline::{scan_code_span, TRIPLE_BACKTICK};
use crate::render::HtmlWriter;
use crate::stream::PushbackStream;

use super::boundary::line_boundary;
use super::kind::Block;

/// Streaming block scanner.
///
/// Owns the input stream and the output writer for the length of one
/// conversion. [`run`](Self::run) loops over top-level blocks; each block
/// writes its HTML as it consumes input.
pub struct BlockScanner<R, W> {
    stream: PushbackStream<R>,
    out: HtmlWriter<W>,
}

impl<R: BufRead, W: Write> BlockScanner<R, W> {
    /// Create a scanner reading `input` and writing HTML to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            stream: PushbackStream::new(input),
            out: HtmlWriter::new(output),
        }
    }

    /// Convert the whole input, then flush the output.
    pub fn run(&mut self) -> Result<()> {
        while let Some(b) = self.stream.read()? {
            match b {
                // Blank lines between blocks
                b'\n' => trace!("skip blank line"),
                b'#' => {
                    let mut level = 1;
                    while self.stream.eat(b'#')? {
                        level += 1;
                    }
                    self.heading(level)?;
                }
                b'>' => self.blockquote()?,
                b'*' => self.list()?,
                b'`' if self.stream.match_literal(&TRIPLE_BACKTICK[1..])? => self.code_block()?,
                _ => {
                    self.stream.unread(b);
                    self.paragraph()?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Take back the output sink.
    pub fn into_writer(self) -> W {
        self.out.into_inner()
    }

    fn heading(&mut self, level: usize) -> Result<()> {
        debug!(block = Block::Heading { level }.name(), level, "block start");
        self.stream.skip_whitespace()?;
        self.out.open_heading(level)?;
        self.stream.copy_until(&mut self.out, b"\n")?;
        self.out.close_heading(level)?;
        self.out.newline()?;
        Ok(())
    }

    fn blockquote(&mut self) -> Result<()> {
        let block = Block::Blockquote;
        debug!(block = block.name(), "block start");
        self.out.open_tag("blockquote")?;
        while self.stream.copy_until(&mut self.out, b"\n")?.is_some() {
            if let Some(term) = line_boundary(&mut self.stream, block.starters())? {
                trace!(block = block.name(), ?term, "block end");
                break;
            }
            // One `>` per continuation line is syntax, and takes the line
            // feed with it.
            if !self.stream.eat(b'>')? {
                self.out.newline()?;
            }
        }
        self.out.close_tag("blockquote")?;
        self.out.newline()?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let block = Block::List;
        debug!(block = block.name(), "block start");
        self.out.write_str("<ul><li>")?;
        while self.stream.copy_until(&mut self.out, b"\n")?.is_some() {
            if let Some(term) = line_boundary(&mut self.stream, block.starters())? {
                trace!(block = block.name(), ?term, "block end");
                break;
            }
            if self.stream.eat(b'*')? {
                self.out.write_str("</li><li>")?;
            } else {
                self.out.newline()?;
            }
        }
        self.out.write_str("</li></ul>\n")?;
        Ok(())
    }

    fn code_block(&mut self) -> Result<()> {
        debug!(block = Block::CodeBlock.name(), "block start");
        self.stream.skip_whitespace()?;
        self.out.write_str("<pre><code>")?;
        if !self.stream.copy_through(&mut self.out, TRIPLE_BACKTICK)? {
            trace!("code block closed by end of input");
        }
        self.out.write_str("</code></pre>\n")?;
        Ok(())
    }

    fn paragraph(&mut self) -> Result<()> {
        let block = Block::Paragraph;
        debug!(block = block.name(), "block start");
        self.out.open_tag("p")?;
        while let Some(stop) = self.stream.copy_until(&mut self.out, b"\n`")? {
            if stop == b'`' {
                let kind = scan_code_span(&mut self.stream, &mut self.out)?;
                trace!(?kind, "code span");
                continue;
            }
            if let Some(term) = line_boundary(&mut self.stream, block.starters())? {
                trace!(block = block.name(), ?term, "block end");
                break;
            }
            self.out.newline()?;
        }
        self.out.close_tag("p")?;
        self.out.newline()?;
        Ok(())
    }
}

impl<R, W> std::fmt::Debug for BlockScanner<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockScanner")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}
