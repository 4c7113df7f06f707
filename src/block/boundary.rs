//! Line-boundary check shared by blockquote, list and paragraph.
//!
//! Called right after a scanner has consumed a line feed. Decides whether
//! the block ends here or continues on the next line.

use std::io::{self, BufRead};

use crate::inline::TRIPLE_BACKTICK;
use crate::stream::PushbackStream;

/// Why a block ended at a line feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A second line feed. Both are consumed.
    BlankLine,
    /// The next line starts with another block's marker, left unread.
    Starter(u8),
    /// The next line starts with a code fence, left unread.
    Fence,
}

/// Check what follows a consumed line feed.
///
/// `starters` are the markers that end the current block. Returns `None`
/// when the block continues; in that case nothing has been consumed.
pub fn line_boundary<R: BufRead>(
    stream: &mut PushbackStream<R>,
    starters: &[u8],
) -> io::Result<Option<Terminator>> {
    if stream.eat(b'\n')? {
        return Ok(Some(Terminator::BlankLine));
    }

    match stream.peek()? {
        Some(b) if starters.contains(&b) => return Ok(Some(Terminator::Starter(b))),
        Some(b'`') => {
            if stream.match_literal(TRIPLE_BACKTICK)? {
                for &b in TRIPLE_BACKTICK.iter().rev() {
                    stream.unread(b);
                }
                return Ok(Some(Terminator::Fence));
            }
        }
        _ => {}
    }

    Ok(None)
}
