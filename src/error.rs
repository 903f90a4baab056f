//! Error types for the Markdown pipeline.
//!
//! Every failure is terminal for the document being rendered. Variants
//! carry the offending text, line, or tag so the caller can report it.

/// Error raised while parsing or rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An inline delimiter was opened but never closed.
    #[error("closing delimiter missing: `{delimiter}` in {text:?}")]
    MalformedInlineSyntax {
        /// The unbalanced delimiter (`**`, `*` or `` ` ``).
        delimiter: &'static str,
        /// Text of the token being split.
        text: String,
    },

    /// A block line does not carry the prefix its block kind requires.
    #[error("malformed block: expected line to start with {expected:?}, got {line:?}")]
    MalformedBlock {
        /// Required prefix.
        expected: String,
        /// Offending line.
        line: String,
    },

    /// A leaf node has no text and is not an `img`.
    #[error("leaf node <{tag}> has no value")]
    MissingValue {
        /// Tag of the leaf, empty for raw text.
        tag: String,
    },

    /// A parent node was built without a tag.
    #[error("parent node has no tag")]
    MissingTag,

    /// A parent node was built without children.
    #[error("parent node <{tag}> has no children")]
    MissingChildren {
        /// Tag of the childless parent.
        tag: String,
    },

    /// An inline kind name or kind/URL combination is not recognized.
    #[error("invalid text kind: {kind}")]
    InvalidTextKind {
        /// Description of the rejected kind.
        kind: String,
    },

    /// Title extraction found no level-1 heading.
    #[error("Missing h1 header")]
    MissingTitle,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
