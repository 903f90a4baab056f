//! Delimiter splitting for bold, italic and code spans.
//!
//! Each pass splits plain tokens on one marker. Pieces alternate between
//! outside and inside the span, so a balanced split has an odd count.

use memchr::memmem;
use smallvec::SmallVec;

use super::token::{InlineToken, TokenKind};
use crate::error::{Error, Result};

/// A marker bounding a styled span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `**`
    Bold,
    /// `*`
    Italic,
    /// `` ` ``
    Code,
}

impl Delimiter {
    /// Pass order. `**` must go before `*`.
    pub const ORDER: [Delimiter; 3] = [Self::Bold, Self::Italic, Self::Code];

    /// Literal marker text.
    #[inline]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Code => "`",
        }
    }

    /// Kind given to text between markers.
    #[inline]
    pub fn kind(self) -> TokenKind {
        match self {
            Self::Bold => TokenKind::Bold,
            Self::Italic => TokenKind::Italic,
            Self::Code => TokenKind::Code,
        }
    }
}

/// Split every plain token on `delimiter`.
///
/// Non-plain tokens pass through untouched and empty pieces are dropped.
/// Fails with [`Error::MalformedInlineSyntax`] when a marker is unclosed.
pub fn split_by_delimiter(
    tokens: Vec<InlineToken>,
    delimiter: Delimiter,
) -> Result<Vec<InlineToken>> {
    let marker = delimiter.marker();
    let finder = memmem::Finder::new(marker);
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let text = token.text();
        let positions: SmallVec<[usize; 8]> = finder.find_iter(text.as_bytes()).collect();

        if positions.is_empty() {
            if !text.is_empty() {
                out.push(token);
            }
            continue;
        }
        if positions.len() % 2 == 1 {
            return Err(Error::MalformedInlineSyntax {
                delimiter: marker,
                text: text.to_string(),
            });
        }

        let mut start = 0;
        for (index, &pos) in positions.iter().enumerate() {
            push_piece(&mut out, &text[start..pos], index, delimiter)?;
            start = pos + marker.len();
        }
        push_piece(&mut out, &text[start..], positions.len(), delimiter)?;
    }

    Ok(out)
}

#[inline]
fn push_piece(
    out: &mut Vec<InlineToken>,
    piece: &str,
    index: usize,
    delimiter: Delimiter,
) -> Result<()> {
    if piece.is_empty() {
        return Ok(());
    }
    let token = if index % 2 == 0 {
        InlineToken::plain(piece)
    } else {
        InlineToken::styled(delimiter.kind(), piece)?
    };
    out.push(token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str, delimiter: Delimiter) -> Result<Vec<InlineToken>> {
        split_by_delimiter(vec![InlineToken::plain(text)], delimiter)
    }

    fn styled(kind: TokenKind, text: &str) -> InlineToken {
        InlineToken::styled(kind, text).unwrap()
    }

    #[test]
    fn test_bold_split() {
        assert_eq!(
            split("a **b** c", Delimiter::Bold).unwrap(),
            vec![
                InlineToken::plain("a "),
                styled(TokenKind::Bold, "b"),
                InlineToken::plain(" c"),
            ]
        );
    }

    #[test]
    fn test_unclosed_bold() {
        let err = split("a **b", Delimiter::Bold).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInlineSyntax {
                delimiter: "**",
                text: "a **b".to_string()
            }
        );
    }

    #[test]
    fn test_span_at_edges_drops_empty_pieces() {
        assert_eq!(
            split("`code`", Delimiter::Code).unwrap(),
            vec![styled(TokenKind::Code, "code")]
        );
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(
            split("*a* and *b*", Delimiter::Italic).unwrap(),
            vec![
                styled(TokenKind::Italic, "a"),
                InlineToken::plain(" and "),
                styled(TokenKind::Italic, "b"),
            ]
        );
    }

    #[test]
    fn test_styled_tokens_not_resplit() {
        let tokens = vec![
            styled(TokenKind::Code, "a * b"),
            InlineToken::plain("plain"),
        ];
        assert_eq!(split_by_delimiter(tokens.clone(), Delimiter::Italic).unwrap(), tokens);
    }

    #[test]
    fn test_no_marker_passes_through() {
        assert_eq!(
            split("nothing here", Delimiter::Bold).unwrap(),
            vec![InlineToken::plain("nothing here")]
        );
    }

    #[test]
    fn test_empty_text_is_dropped() {
        assert!(split("", Delimiter::Bold).unwrap().is_empty());
    }

    #[test]
    fn test_order_bold_before_italic() {
        let tokens = split("**b** *i*", Delimiter::Bold).unwrap();
        let tokens = split_by_delimiter(tokens, Delimiter::Italic).unwrap();
        assert_eq!(
            tokens,
            vec![
                styled(TokenKind::Bold, "b"),
                InlineToken::plain(" "),
                styled(TokenKind::Italic, "i"),
            ]
        );
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            split("héllo **wörld**", Delimiter::Bold).unwrap(),
            vec![InlineToken::plain("héllo "), styled(TokenKind::Bold, "wörld")]
        );
    }
}
