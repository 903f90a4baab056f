//! Inline token types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Style of an inline token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unstyled text.
    Text,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TokenKind {
    /// Lowercase name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Whether tokens of this kind carry a URL.
    #[inline]
    pub fn has_url(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "code" => Ok(Self::Code),
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            other => Err(Error::InvalidTextKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A run of inline text with its style.
///
/// `url` is present exactly when the kind is [`TokenKind::Link`] or
/// [`TokenKind::Image`]; the constructors uphold this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineToken {
    text: String,
    kind: TokenKind,
    url: Option<String>,
}

impl InlineToken {
    /// Plain text token.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Text,
            url: None,
        }
    }

    /// Token of a kind that carries no URL.
    pub fn styled(kind: TokenKind, text: impl Into<String>) -> Result<Self> {
        if kind.has_url() {
            return Err(Error::InvalidTextKind {
                kind: format!("{kind} without url"),
            });
        }
        Ok(Self {
            text: text.into(),
            kind,
            url: None,
        })
    }

    /// Token of a kind that carries a URL.
    pub fn with_url(
        kind: TokenKind,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self> {
        if !kind.has_url() {
            return Err(Error::InvalidTextKind {
                kind: format!("{kind} with url"),
            });
        }
        Ok(Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        })
    }

    /// `[text](url)`
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Link,
            url: Some(url.into()),
        }
    }

    /// `![alt](url)`
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: TokenKind::Image,
            url: Some(url.into()),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.kind == TokenKind::Text
    }

    /// Split into `(text, kind, url)`.
    pub fn into_parts(self) -> (String, TokenKind, Option<String>) {
        (self.text, self.kind, self.url)
    }
}
