//! HTML node tree and its render contract.
//!
//! Nodes are built bottom-up and never mutated once placed in a tree.
//! A parent owns its children exclusively.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::render::HtmlWriter;

/// Ordered attribute list. Links and images carry at most two attributes.
pub type Attributes = SmallVec<[(Cow<'static, str>, String); 2]>;

/// Void element; its leaf renders self-closing and ignores its value.
const IMG_TAG: &str = "img";

/// A node of the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Literal content under an optional tag.
    ///
    /// Without a tag the text is emitted as-is. An empty value is valid;
    /// only an absent one fails to render.
    Leaf {
        tag: Option<Cow<'static, str>>,
        value: Option<String>,
        attributes: Attributes,
    },
    /// A tag wrapping child nodes.
    ///
    /// Attributes are accepted but not emitted when rendering.
    Parent {
        tag: Cow<'static, str>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged leaf holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Tagged leaf.
    pub fn leaf(tag: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Parent node over `children`.
    pub fn parent(tag: impl Into<Cow<'static, str>>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attribute(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        match &mut self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => {
                attributes.push((key.into(), value.into()));
            }
        }
        self
    }

    /// Tag of this node, `None` for raw text leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref().filter(|t| !t.is_empty()),
            Self::Parent { tag, .. } => Some(tag.as_ref()).filter(|t| !t.is_empty()),
        }
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => attributes,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    /// Render this node and its subtree to an HTML string.
    ///
    /// # Example
    /// ```
    /// use sitemark::HtmlNode;
    ///
    /// let node = HtmlNode::parent(
    ///     "p",
    ///     vec![HtmlNode::text("Hi "), HtmlNode::leaf("b", "there")],
    /// );
    /// assert_eq!(node.render().unwrap(), "<p>Hi <b>there</b></p>");
    /// ```
    pub fn render(&self) -> Result<String> {
        let mut writer = HtmlWriter::new();
        self.render_into(&mut writer)?;
        Ok(writer.into_string())
    }

    /// Render into an existing writer.
    ///
    /// On error the writer may hold a partial rendering.
    pub fn render_into(&self, writer: &mut HtmlWriter) -> Result<()> {
        match self {
            Self::Leaf {
                value, attributes, ..
            } => match (self.tag(), value) {
                (Some(IMG_TAG), _) => {
                    writer.void_tag(IMG_TAG, attributes.as_slice());
                    Ok(())
                }
                (tag, None) => Err(Error::MissingValue {
                    tag: tag.unwrap_or_default().to_string(),
                }),
                (None, Some(value)) => {
                    writer.write_str(value);
                    Ok(())
                }
                (Some(tag), Some(value)) => {
                    writer.open_tag_with(tag, attributes.as_slice());
                    writer.write_str(value);
                    writer.close_tag(tag);
                    Ok(())
                }
            },
            Self::Parent { children, .. } => {
                let tag = self.tag().ok_or(Error::MissingTag)?;
                if children.is_empty() {
                    return Err(Error::MissingChildren {
                        tag: tag.to_string(),
                    });
                }
                writer.open_tag(tag);
                for child in children {
                    child.render_into(writer)?;
                }
                writer.close_tag(tag);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_text_leaf() {
        assert_eq!(HtmlNode::text("a < b").render().unwrap(), "a < b");
    }

    #[test]
    fn test_tagged_leaf_with_attributes() {
        let node = HtmlNode::leaf("a", "click")
            .with_attribute("href", "https://example.com")
            .with_attribute("target", "_blank");
        assert_eq!(
            node.render().unwrap(),
            r#"<a href="https://example.com" target="_blank">click</a>"#
        );
    }

    #[test]
    fn test_img_leaf_self_closes() {
        let node = HtmlNode::leaf("img", "")
            .with_attribute("src", "cat.png")
            .with_attribute("alt", "a cat");
        assert_eq!(node.render().unwrap(), r#"<img src="cat.png" alt="a cat" />"#);
    }

    #[test]
    fn test_empty_leaf_renders_empty() {
        assert_eq!(HtmlNode::text("").render().unwrap(), "");
        assert_eq!(HtmlNode::leaf("b", "").render().unwrap(), "<b></b>");
        let node = HtmlNode::leaf("a", "").with_attribute("href", "/x");
        assert_eq!(node.render().unwrap(), r#"<a href="/x"></a>"#);
    }

    #[test]
    fn test_absent_value_is_missing_value() {
        let node = HtmlNode::Leaf {
            tag: Some(Cow::Borrowed("b")),
            value: None,
            attributes: Attributes::new(),
        };
        assert_eq!(node.render(), Err(Error::MissingValue { tag: "b".to_string() }));
        let raw = HtmlNode::Leaf {
            tag: None,
            value: None,
            attributes: Attributes::new(),
        };
        assert_eq!(raw.render(), Err(Error::MissingValue { tag: String::new() }));
    }

    #[test]
    fn test_empty_tag_leaf_renders_raw() {
        let node = HtmlNode::Leaf {
            tag: Some(Cow::Borrowed("")),
            value: Some("raw".to_string()),
            attributes: Attributes::new(),
        };
        assert_eq!(node.render().unwrap(), "raw");
    }

    #[test]
    fn test_nested_parents() {
        let node = HtmlNode::parent(
            "div",
            vec![
                HtmlNode::parent("p", vec![HtmlNode::text("one")]),
                HtmlNode::parent(
                    "ul",
                    vec![HtmlNode::parent("li", vec![HtmlNode::leaf("i", "two")])],
                ),
            ],
        );
        assert_eq!(
            node.render().unwrap(),
            "<div><p>one</p><ul><li><i>two</i></li></ul></div>"
        );
    }

    #[test]
    fn test_parent_ignores_attributes() {
        let node = HtmlNode::parent("p", vec![HtmlNode::text("x")]).with_attribute("class", "lead");
        assert_eq!(node.attributes().len(), 1);
        assert_eq!(node.render().unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_parent_without_tag() {
        let node = HtmlNode::parent("", vec![HtmlNode::text("x")]);
        assert_eq!(node.render(), Err(Error::MissingTag));
    }

    #[test]
    fn test_parent_without_children() {
        let node = HtmlNode::parent("ul", Vec::new());
        assert_eq!(
            node.render(),
            Err(Error::MissingChildren { tag: "ul".to_string() })
        );
    }

    #[test]
    fn test_child_error_propagates() {
        let missing = HtmlNode::Leaf {
            tag: Some(Cow::Borrowed("code")),
            value: None,
            attributes: Attributes::new(),
        };
        let node = HtmlNode::parent("p", vec![HtmlNode::text("ok"), missing]);
        assert_eq!(
            node.render(),
            Err(Error::MissingValue { tag: "code".to_string() })
        );
    }
}
