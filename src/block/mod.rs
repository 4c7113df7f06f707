//! Block-level scanning.
//!
//! There is no document tree. The dispatcher reads the first byte of each
//! top-level block and hands the stream to one scanner:
//! - Headings (`#` run)
//! - Blockquotes (`>`)
//! - Lists (`*`)
//! - Fenced code blocks (triple backtick)
//! - Paragraphs (anything else)
//!
//! Blockquotes, lists and paragraphs look at the start of each following
//! line to decide whether they end there; see [`line_boundary`].

mod boundary;
mod kind;
mod scanner;

pub use boundary::{line_boundary, Terminator};
pub use kind::Block;
pub use scanner::BlockScanner;
