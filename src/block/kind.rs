//! Block kinds.

/// A top-level block, chosen from its first byte(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// `#` run; level is the number of `#` characters, unclamped.
    Heading {
        /// Heading level.
        level: usize,
    },
    /// `>`
    Blockquote,
    /// `*`
    List,
    /// Opened by a triple backtick.
    CodeBlock,
    /// Anything else.
    Paragraph,
}

impl Block {
    /// Leading bytes on the next line that end this block and start a new
    /// one. A code fence ends every block that checks line boundaries, so it
    /// is not listed here.
    pub fn starters(self) -> &'static [u8] {
        match self {
            Self::Blockquote => b"#*",
            Self::List => b"#>",
            Self::Paragraph => b"#>*",
            Self::Heading { .. } | Self::CodeBlock => b"",
        }
    }

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Blockquote => "blockquote",
            Self::List => "list",
            Self::CodeBlock => "code_block",
            Self::Paragraph => "paragraph",
        }
    }
}
