//! Inline tokenizer.
//!
//! Block text is turned into a flat sequence of tokens by a fixed series
//! of passes over the plain tokens left by the previous pass:
//! 1. Delimiter spans: `**bold**`, then `*italic*`, then `` `code` ``
//! 2. Links `[text](url)`
//! 3. Images `![alt](url)`
//!
//! Spans do not nest. Once a token is styled no later pass looks inside it.

mod delimiter;
mod links;
mod token;

pub use delimiter::{split_by_delimiter, Delimiter};
pub use links::{extract_images, extract_links, scan, split_images_or_links, LinkMatch};
pub use token::{InlineToken, TokenKind};

use crate::error::Result;
use crate::node::HtmlNode;

/// Tokenize one block's inline text.
///
/// # Example
/// ```
/// use sitemark::{tokenize, InlineToken, TokenKind};
///
/// let tokens = tokenize("a **b** [c](d)").unwrap();
/// assert_eq!(tokens[1], InlineToken::styled(TokenKind::Bold, "b").unwrap());
/// assert_eq!(tokens[3], InlineToken::link("c", "d"));
/// ```
pub fn tokenize(text: &str) -> Result<Vec<InlineToken>> {
    let mut tokens = vec![InlineToken::plain(text)];
    for delimiter in Delimiter::ORDER {
        tokens = split_by_delimiter(tokens, delimiter)?;
    }
    let tokens = split_images_or_links(tokens, TokenKind::Link)?;
    split_images_or_links(tokens, TokenKind::Image)
}

/// Map a token to its leaf node.
pub fn token_to_node(token: InlineToken) -> HtmlNode {
    let (text, kind, url) = token.into_parts();
    let url = url.unwrap_or_default();
    match kind {
        TokenKind::Text => HtmlNode::text(text),
        TokenKind::Bold => HtmlNode::leaf("b", text),
        TokenKind::Italic => HtmlNode::leaf("i", text),
        TokenKind::Code => HtmlNode::leaf("code", text),
        TokenKind::Link => HtmlNode::leaf("a", text).with_attribute("href", url),
        TokenKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", text),
    }
}

/// Tokenize `text` and map every token to a leaf node.
pub fn text_to_nodes(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?.into_iter().map(token_to_node).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn styled(kind: TokenKind, text: &str) -> InlineToken {
        InlineToken::styled(kind, text).unwrap()
    }

    #[test]
    fn test_tokenize_all_kinds() {
        let text = "This is **text** with an *italic* word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            tokenize(text).unwrap(),
            vec![
                InlineToken::plain("This is "),
                styled(TokenKind::Bold, "text"),
                InlineToken::plain(" with an "),
                styled(TokenKind::Italic, "italic"),
                InlineToken::plain(" word and a "),
                styled(TokenKind::Code, "code block"),
                InlineToken::plain(" and an "),
                InlineToken::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                InlineToken::plain(" and a "),
                InlineToken::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(tokenize("just text").unwrap(), vec![InlineToken::plain("just text")]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_unclosed_italic() {
        assert!(matches!(
            tokenize("a *b"),
            Err(Error::MalformedInlineSyntax { delimiter: "*", .. })
        ));
    }

    #[test]
    fn test_link_inside_bold_not_split() {
        assert_eq!(
            tokenize("**[a](b)**").unwrap(),
            vec![styled(TokenKind::Bold, "[a](b)")]
        );
    }

    #[test]
    fn test_token_to_node() {
        let render = |token| token_to_node(token).render().unwrap();
        assert_eq!(render(InlineToken::plain("normal text")), "normal text");
        assert_eq!(render(styled(TokenKind::Bold, "bold text")), "<b>bold text</b>");
        assert_eq!(render(styled(TokenKind::Italic, "italic text")), "<i>italic text</i>");
        assert_eq!(render(styled(TokenKind::Code, "code")), "<code>code</code>");
        assert_eq!(
            render(InlineToken::link("click here", "https://www.google.com")),
            r#"<a href="https://www.google.com">click here</a>"#
        );
        assert_eq!(
            render(InlineToken::image("an image of a cat", "https://www.example.com/cat.jpeg")),
            r#"<img src="https://www.example.com/cat.jpeg" alt="an image of a cat" />"#
        );
    }

    #[test]
    fn test_text_to_nodes() {
        let nodes = text_to_nodes("Some **bold** text").unwrap();
        assert_eq!(
            nodes,
            vec![
                HtmlNode::text("Some "),
                HtmlNode::leaf("b", "bold"),
                HtmlNode::text(" text"),
            ]
        );
    }
}
