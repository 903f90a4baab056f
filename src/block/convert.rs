//! Block to HTML node conversion.
//!
//! Each converter re-checks the prefixes its block kind promises, so a
//! block handed in with the wrong kind fails instead of rendering garbage.

use super::kind::{Block, BlockKind};
use super::parser::{heading_level, ordered_item, unordered_marker};
use crate::error::{Error, Result};
use crate::inline::text_to_nodes;
use crate::limits::{CODE_FENCE, QUOTE_MARKER, UNORDERED_MARKERS};
use crate::node::HtmlNode;

/// Convert one classified block into its HTML subtree.
pub fn block_to_node(block: &Block) -> Result<HtmlNode> {
    let text = block.text.as_str();
    match block.kind {
        BlockKind::Heading { level } => heading_to_node(level, text),
        BlockKind::Code => code_to_node(text),
        BlockKind::Quote => quote_to_node(text),
        BlockKind::UnorderedList => unordered_list_to_node(text),
        BlockKind::OrderedList => ordered_list_to_node(text),
        BlockKind::Paragraph => paragraph_to_node(text),
    }
}

fn heading_to_node(level: u8, text: &str) -> Result<HtmlNode> {
    if heading_level(text) != Some(level) {
        return Err(malformed(
            format!("{} ", "#".repeat(usize::from(level))),
            first_line(text),
        ));
    }
    let content = text[usize::from(level) + 1..].trim_start();
    Ok(HtmlNode::parent(
        BlockKind::Heading { level }.tag(),
        text_to_nodes(content)?,
    ))
}

fn code_to_node(text: &str) -> Result<HtmlNode> {
    let body = text
        .strip_prefix(CODE_FENCE)
        .and_then(|rest| rest.strip_suffix(CODE_FENCE))
        .ok_or_else(|| malformed(CODE_FENCE, first_line(text)))?;

    // Drop the opening fence line and the newline before the closing fence.
    let interior = body.split_once('\n').map_or("", |(_, rest)| rest);
    let interior = interior.strip_suffix('\n').unwrap_or(interior);

    let code = HtmlNode::parent("code", text_to_nodes(interior)?);
    Ok(HtmlNode::parent(BlockKind::Code.tag(), vec![code]))
}

fn quote_to_node(text: &str) -> Result<HtmlNode> {
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let rest = line
            .strip_prefix(QUOTE_MARKER)
            .ok_or_else(|| malformed(QUOTE_MARKER, line))?;
        lines.push(rest.trim());
    }
    Ok(HtmlNode::parent(
        BlockKind::Quote.tag(),
        text_to_nodes(&lines.join(" "))?,
    ))
}

fn unordered_list_to_node(text: &str) -> Result<HtmlNode> {
    let marker = unordered_marker(text)
        .ok_or_else(|| malformed(UNORDERED_MARKERS.join(" or "), first_line(text)))?;
    let items = text
        .split('\n')
        .map(|line| {
            let item = line
                .strip_prefix(marker)
                .ok_or_else(|| malformed(marker, line))?;
            list_item(item)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(BlockKind::UnorderedList.tag(), items))
}

fn ordered_list_to_node(text: &str) -> Result<HtmlNode> {
    let items = text
        .split('\n')
        .zip(1usize..)
        .map(|(line, number)| {
            let item = ordered_item(line, number)
                .ok_or_else(|| malformed(format!("{number}. "), line))?;
            list_item(item)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(BlockKind::OrderedList.tag(), items))
}

fn paragraph_to_node(text: &str) -> Result<HtmlNode> {
    let joined = text.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent(
        BlockKind::Paragraph.tag(),
        text_to_nodes(&joined)?,
    ))
}

#[inline]
fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", text_to_nodes(text)?))
}

#[inline]
fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

fn malformed(expected: impl ToString, line: &str) -> Error {
    Error::MalformedBlock {
        expected: expected.to_string(),
        line: line.to_string(),
    }
}
