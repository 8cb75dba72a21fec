//! Minimal HTML tree.
//!
//! Nodes are either leaves holding a literal value or parents holding other
//! nodes. Values are written verbatim; nothing is escaped.

use serde::Serialize;

use crate::error::MarkdownError;

/// Ordered `key="value"` pairs. Insertion order is render order.
pub type Attributes = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HtmlNode {
    Leaf {
        /// `None` renders the value with no surrounding element.
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    /// An untagged leaf: raw text.
    pub fn raw(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Serialize the attributes as ` key="value"` pairs.
    pub fn props_to_html(&self) -> String {
        attrs_to_html(self.attributes())
    }

    /// Render this node and its subtree.
    ///
    /// Fails if a parent has an empty tag or no children.
    pub fn to_html(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), MarkdownError> {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attributes,
            } => {
                out.push_str(&format!("<{tag}{}>", attrs_to_html(attributes)));
                out.push_str(value);
                out.push_str(&format!("</{tag}>"));
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(MarkdownError::MissingTag);
                }
                if children.is_empty() {
                    return Err(MarkdownError::EmptyChildren { tag: tag.clone() });
                }
                out.push_str(&format!("<{tag}{}>", attrs_to_html(attributes)));
                for child in children {
                    child.write_html(out)?;
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
        Ok(())
    }
}

fn attrs_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
