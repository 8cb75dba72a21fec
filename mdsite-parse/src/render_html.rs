//! HTML renderer.
//!
//! Builds an [`HtmlNode`] tree for a whole document: one child of the root
//! `<div>` per block. Text is emitted as-is; nothing is escaped.

use crate::blocks::{block_to_block_type, block_to_text, heading_level, markdown_to_blocks};
use crate::error::MarkdownError;
use crate::html::HtmlNode;
use crate::inline::text_to_text_nodes;
use crate::types::{BlockText, BlockType, TextNode, TextType};

/// Map one inline span to its HTML leaf.
pub fn text_node_to_html_node(node: &TextNode) -> HtmlNode {
    let url = node.url.clone().unwrap_or_default();
    match node.text_type {
        TextType::Text => HtmlNode::raw(node.text.as_str()),
        TextType::Bold => HtmlNode::leaf("b", node.text.as_str()),
        TextType::Italic => HtmlNode::leaf("i", node.text.as_str()),
        TextType::Code => HtmlNode::leaf("code", node.text.as_str()),
        TextType::Link => HtmlNode::leaf("a", node.text.as_str()).with_attr("href", url),
        TextType::Image => HtmlNode::leaf("img", "")
            .with_attr("src", url)
            .with_attr("alt", node.text.as_str()),
    }
}

/// Tokenize `text` and render each span.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(text_to_text_nodes(text)?
        .iter()
        .map(text_node_to_html_node)
        .collect())
}

/// A parent node that must end up with at least one child.
fn required_parent(tag: &str, children: Vec<HtmlNode>) -> Result<HtmlNode, MarkdownError> {
    if children.is_empty() {
        return Err(MarkdownError::EmptyChildren {
            tag: tag.to_string(),
        });
    }
    Ok(HtmlNode::parent(tag, children))
}

fn list_node(tag: &str, items: &[String]) -> Result<HtmlNode, MarkdownError> {
    let children = items
        .iter()
        .map(|item| required_parent("li", text_to_children(item)?))
        .collect::<Result<Vec<_>, _>>()?;
    required_parent(tag, children)
}

fn block_to_html_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let block_type = block_to_block_type(block);
    let level = heading_level(block);
    content_to_html_node(block_type, level, block_to_text(block, block_type))
}

/// Build the element for one block from its cleaned content.
///
/// Lists need item content and every other type needs a single run of text;
/// any other pairing is an error.
fn content_to_html_node(
    block_type: BlockType,
    level: usize,
    content: BlockText,
) -> Result<HtmlNode, MarkdownError> {
    match (block_type, content) {
        (BlockType::OrderedList, BlockText::Items(items)) => list_node("ol", &items),
        (BlockType::UnorderedList, BlockText::Items(items)) => list_node("ul", &items),
        (BlockType::Code, BlockText::Single(text)) => {
            Ok(HtmlNode::parent("pre", vec![HtmlNode::leaf("code", text)]))
        }
        (BlockType::Heading, BlockText::Single(text)) => {
            let tag = format!("h{level}");
            required_parent(&tag, text_to_children(&text)?)
        }
        (BlockType::Quote, BlockText::Single(text)) => {
            required_parent("blockquote", text_to_children(&text)?)
        }
        (BlockType::Paragraph, BlockText::Single(text)) => {
            required_parent("p", text_to_children(&text)?)
        }
        (block_type, content) => Err(MarkdownError::ContentMismatch {
            block_type,
            shape: content.shape(),
        }),
    }
}

/// Render a Markdown document to an HTML tree rooted at a `<div>`.
///
/// Fails on an unterminated inline delimiter or when a block would render
/// to an element with no children.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let children = markdown_to_blocks(markdown)
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Render a Markdown document straight to an HTML fragment string.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown)?.to_html()
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
