//! sitemark: Markdown to HTML for static sites
//!
//! Converts a small, fixed dialect of Markdown into an HTML tree and
//! serializes it. The pipeline is a pure function of its input:
//! 1. Blocks: split on blank lines and classify each block
//! 2. Inline: tokenize block text into plain and styled runs
//! 3. Tree: map blocks and tokens to [`HtmlNode`]s under a root `<div>`
//! 4. Render: serialize the tree
//!
//! # Dialect
//! - Headings `#` to `######`, fenced code blocks, `>` quotes
//! - `* ` / `- ` unordered lists, `1. ` ordered lists (no nesting)
//! - `**bold**`, `*italic*`, `` `code` ``, `[links](url)`, `![images](url)`
//!
//! No HTML passthrough, tables, footnotes, or reference links. Output is
//! not escaped.
//!
//! Any malformed construct aborts the whole document with an [`Error`];
//! there is no partial output.

pub mod block;
pub mod error;
pub mod inline;
pub mod limits;
pub mod node;
pub mod render;
pub mod site;

// Re-export primary types
pub use block::{block_to_node, classify, segment, Block, BlockKind, BlockParser};
pub use error::{Error, Result};
pub use inline::{
    extract_images, extract_links, split_by_delimiter, split_images_or_links, token_to_node,
    tokenize, Delimiter, InlineToken, TokenKind,
};
pub use node::{Attributes, HtmlNode};
pub use render::HtmlWriter;

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = sitemark::to_html("# Hello\n\nWorld").unwrap();
/// assert_eq!(html, "<div><h1>Hello</h1><p>World</p></div>");
/// ```
pub fn to_html(markdown: &str) -> Result<String> {
    let root = to_node(markdown)?;
    let mut writer = HtmlWriter::with_capacity_for(markdown.len());
    root.render_into(&mut writer)?;
    Ok(writer.into_string())
}

/// Build the document tree without serializing it.
///
/// The root is a `<div>` holding one subtree per block.
pub fn to_node(markdown: &str) -> Result<HtmlNode> {
    let children = BlockParser::new(markdown)
        .map(|block| {
            tracing::trace!(kind = ?block.kind, len = block.text.len(), "converting block");
            block_to_node(&block)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Text of the first level-1 heading.
///
/// # Example
/// ```
/// let title = sitemark::extract_title("intro\n\n#  Hello  \n\n# Other").unwrap();
/// assert_eq!(title, "Hello");
/// ```
pub fn extract_title(markdown: &str) -> Result<String> {
    BlockParser::new(markdown)
        .find(|block| block.kind == BlockKind::Heading { level: 1 })
        .and_then(|block| block.text.strip_prefix("# ").map(|t| t.trim().to_string()))
        .ok_or(Error::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_and_body() {
        let md = "# Title\n\nSome **bold** and *italic* text.";
        assert_eq!(extract_title(md).unwrap(), "Title");
        assert_eq!(
            to_html(md).unwrap(),
            "<div><h1>Title</h1><p>Some <b>bold</b> and <i>italic</i> text.</p></div>"
        );
    }

    #[test]
    fn test_missing_title() {
        assert_eq!(extract_title("## Sub\n\ntext"), Err(Error::MissingTitle));
        assert_eq!(extract_title(""), Err(Error::MissingTitle));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(
            to_html("\n\n"),
            Err(Error::MissingChildren {
                tag: "div".to_string()
            })
        );
    }

    #[test]
    fn test_to_node_shape() {
        let root = to_node("* a\n* b\n\n> q").unwrap();
        assert_eq!(root.tag(), Some("div"));
        let tags: Vec<_> = root.children().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec![Some("ul"), Some("blockquote")]);
    }

    #[test]
    fn test_error_aborts_document() {
        let err = to_html("# Fine\n\nbroken `code").unwrap_err();
        assert!(matches!(err, Error::MalformedInlineSyntax { delimiter: "`", .. }));
    }

    #[test]
    fn test_malformed_list_is_paragraph() {
        assert_eq!(to_html("1. a\n3. b").unwrap(), "<div><p>1. a 3. b</p></div>");
        assert_eq!(to_html("> a\nb").unwrap(), "<div><p>> a b</p></div>");
        assert_eq!(to_html("- a\n- b\nc").unwrap(), "<div><p>- a - b c</p></div>");
    }
}
