//! Link and image scanning.
//!
//! Matches `[text](url)` and `![alt](url)` where the text holds no
//! brackets and the URL holds no parentheses. A link never starts
//! right after `!`, so image syntax is not matched as a link.

use memchr::memchr_iter;

use super::token::{InlineToken, TokenKind};
use crate::error::{Error, Result};

/// One scanned `[text](url)` or `![alt](url)` occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    /// Link text or image alt text.
    pub text: &'a str,
    /// Destination.
    pub url: &'a str,
    /// Byte offset of the first byte (`[` or `!`).
    pub start: usize,
    /// Byte offset one past the closing `)`.
    pub end: usize,
}

/// Extract `(alt, url)` pairs of all images in source order.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    scan(text, TokenKind::Image)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Extract `(text, url)` pairs of all links in source order.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    scan(text, TokenKind::Link)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Split plain tokens around every link (or image) they contain.
///
/// `kind` must be [`TokenKind::Link`] or [`TokenKind::Image`].
pub fn split_images_or_links(
    tokens: Vec<InlineToken>,
    kind: TokenKind,
) -> Result<Vec<InlineToken>> {
    if !kind.has_url() {
        return Err(Error::InvalidTextKind {
            kind: format!("{kind} cannot be split as link or image"),
        });
    }

    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }
        match split_at_matches(token.text(), kind)? {
            Some(pieces) => out.extend(pieces),
            None => out.push(token),
        }
    }

    Ok(out)
}

/// Cut `text` around its matches; `None` when there are none.
fn split_at_matches(text: &str, kind: TokenKind) -> Result<Option<Vec<InlineToken>>> {
    let matches = scan(text, kind);
    if matches.is_empty() {
        return Ok(None);
    }

    let mut pieces = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for m in &matches {
        if m.start > cursor {
            pieces.push(InlineToken::plain(&text[cursor..m.start]));
        }
        pieces.push(InlineToken::with_url(kind, m.text, m.url)?);
        cursor = m.end;
    }
    if cursor < text.len() {
        pieces.push(InlineToken::plain(&text[cursor..]));
    }

    Ok(Some(pieces))
}

/// Scan `text` left to right for non-overlapping matches of `kind`.
pub fn scan(text: &str, kind: TokenKind) -> Vec<LinkMatch<'_>> {
    let bytes = text.as_bytes();
    let image = kind == TokenKind::Image;
    let mut matches = Vec::new();
    let mut resume = 0;

    for open in memchr_iter(b'[', bytes) {
        let bang = open > 0 && bytes[open - 1] == b'!';
        if bang != image {
            continue;
        }
        let start = if image { open - 1 } else { open };
        if start < resume {
            continue;
        }
        if let Some(m) = match_at(text, start, open) {
            resume = m.end;
            matches.push(m);
        }
    }

    matches
}

/// Try to match `[text](url)` with the `[` at `open`.
fn match_at(text: &str, start: usize, open: usize) -> Option<LinkMatch<'_>> {
    let bytes = text.as_bytes();

    let close = open + 1 + bytes[open + 1..].iter().position(|&b| b == b'[' || b == b']')?;
    if bytes[close] != b']' || bytes.get(close + 1) != Some(&b'(') {
        return None;
    }

    let url_start = close + 2;
    let url_end = url_start + bytes[url_start..].iter().position(|&b| b == b'(' || b == b')')?;
    if bytes[url_end] != b')' {
        return None;
    }

    Some(LinkMatch {
        text: &text[open + 1..close],
        url: &text[url_start..url_end],
        start,
        end: url_end + 1,
    })
}
