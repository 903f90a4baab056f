//! Block kinds.

/// Tags for heading levels 1 through 6.
const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Anything that matches no other kind.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading {
        /// Heading level (1-6).
        level: u8,
    },
    /// Multi-line block fenced by three backticks.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Lines numbered `1. `, `2. `, ... in sequence.
    OrderedList,
    /// Every line starts with the same `* ` or `- ` marker.
    UnorderedList,
}

impl BlockKind {
    /// Tag of the outermost element this block renders to.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading { level } => HEADING_TAGS[usize::from(level.clamp(1, 6)) - 1],
            Self::Code => "pre",
            Self::Quote => "blockquote",
            Self::OrderedList => "ol",
            Self::UnorderedList => "ul",
        }
    }
}

/// A classified block: its kind and its trimmed source lines joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    #[inline]
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Source lines of the block.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}
