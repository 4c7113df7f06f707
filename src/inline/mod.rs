//! Inline scanner.
//!
//! Code spans are the only inline construct. They are recognized inside
//! paragraphs while the paragraph is being streamed; everything else in
//! running text is copied verbatim.

mod code_span;

pub use code_span::{scan_code_span, CodeSpanKind};

pub(crate) use code_span::TRIPLE_BACKTICK;
