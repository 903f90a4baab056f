//! Fixed markers and limits of the dialect.
//!
//! Shared by the block classifier and the block converter so both
//! stages agree on what a prefix looks like.

/// Deepest heading level (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Fence opening and closing a code block.
pub const CODE_FENCE: &str = "```";

/// Prefix required on every line of a quote block.
pub const QUOTE_MARKER: char = '>';

/// Accepted unordered list markers. A list uses exactly one of them.
pub const UNORDERED_MARKERS: [&str; 2] = ["* ", "- "];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_two_bytes() {
        for marker in UNORDERED_MARKERS {
            assert_eq!(marker.len(), 2);
        }
        const { assert!(MAX_HEADING_LEVEL == 6) };
        assert_eq!(CODE_FENCE.len(), 3);
    }
}
