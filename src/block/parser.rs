//! Block segmentation and classification.

use std::str::Split;

use super::kind::{Block, BlockKind};
use crate::limits::{CODE_FENCE, MAX_HEADING_LEVEL, QUOTE_MARKER, UNORDERED_MARKERS};

/// Iterator over the raw blocks of a document.
///
/// Consecutive non-blank lines, each trimmed, form one block joined by
/// `\n`. Blank lines only separate blocks; they never produce one.
pub struct Segments<'a> {
    lines: Split<'a, char>,
}

impl<'a> Segments<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n'),
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut block = String::new();
        for line in self.lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                if block.is_empty() {
                    continue;
                }
                break;
            }
            if !block.is_empty() {
                block.push('\n');
            }
            block.push_str(line);
        }
        (!block.is_empty()).then_some(block)
    }
}

/// Block parser: yields classified blocks in source order.
///
/// # Example
/// ```
/// use sitemark::{BlockKind, BlockParser};
///
/// let kinds: Vec<_> = BlockParser::new("# Title\n\n* a\n* b").map(|b| b.kind).collect();
/// assert_eq!(kinds, vec![BlockKind::Heading { level: 1 }, BlockKind::UnorderedList]);
/// ```
pub struct BlockParser<'a> {
    segments: Segments<'a>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            segments: Segments::new(input),
        }
    }
}

impl Iterator for BlockParser<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let text = self.segments.next()?;
        Some(Block::new(classify(&text), text))
    }
}

/// Split a document into trimmed, non-empty blocks.
pub fn segment(markdown: &str) -> Vec<String> {
    Segments::new(markdown).collect()
}

/// Classify one block. The first matching rule wins.
///
/// Malformed quotes and lists degrade to [`BlockKind::Paragraph`].
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading { level };
    }
    if is_code(block) {
        return BlockKind::Code;
    }
    if block.starts_with(QUOTE_MARKER) {
        return if block.split('\n').all(|line| line.starts_with(QUOTE_MARKER)) {
            BlockKind::Quote
        } else {
            BlockKind::Paragraph
        };
    }
    if let Some(marker) = unordered_marker(block) {
        return if block.split('\n').all(|line| line.starts_with(marker)) {
            BlockKind::UnorderedList
        } else {
            BlockKind::Paragraph
        };
    }
    if block.starts_with("1. ") && is_sequential(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// Level of an ATX heading prefix: 1-6 `#` followed by a space.
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }
    (block.as_bytes().get(hashes) == Some(&b' ')).then_some(hashes as u8)
}

/// The `* ` or `- ` marker the block starts with, if any.
pub(crate) fn unordered_marker(block: &str) -> Option<&'static str> {
    UNORDERED_MARKERS
        .into_iter()
        .find(|marker| block.starts_with(*marker))
}

fn is_code(block: &str) -> bool {
    block.contains('\n') && block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

fn is_sequential(block: &str) -> bool {
    block
        .split('\n')
        .zip(1usize..)
        .all(|(line, number)| ordered_item(line, number).is_some())
}

/// Text of an ordered list line after its `{number}. ` marker.
pub(crate) fn ordered_item(line: &str, number: usize) -> Option<&str> {
    let rest = line.strip_prefix(number.to_string().as_str())?;
    rest.strip_prefix(". ")
}
