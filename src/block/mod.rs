//! Block-level parsing for the dialect.
//!
//! The block stage is line-oriented and handles:
//! - ATX headings (`#` to `######`)
//! - Fenced code blocks
//! - Quotes
//! - Ordered and unordered lists (one level, no nesting)
//! - Paragraphs
//!
//! Blocks are separated by blank lines. Classification never fails;
//! anything that does not fit a stricter kind is a paragraph.

mod convert;
mod kind;
mod parser;

pub use convert::block_to_node;
pub use kind::{Block, BlockKind};
pub use parser::{classify, segment, BlockParser, Segments};
