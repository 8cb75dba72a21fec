//! Inline tokenizer.
//!
//! Turns a run of text into [`TextNode`]s by peeling off code spans, images,
//! links, bold and italic markers in a fixed order. Each pass only rewrites
//! nodes that are still plain text, so markers inside an already-extracted
//! span are never reinterpreted.

use crate::error::MarkdownError;
use crate::types::{TextNode, TextType};

/// Delimiter passes applied after images and links, in order.
const EMPHASIS_PASSES: [(&str, TextType); 4] = [
    ("**", TextType::Bold),
    ("__", TextType::Bold),
    ("*", TextType::Italic),
    ("_", TextType::Italic),
];

/// Tokenize `text` into inline nodes.
///
/// Fails if any delimiter is left unpaired.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextNode>, MarkdownError> {
    let nodes = vec![TextNode::text(text)];
    let nodes = split_nodes_delimiter(nodes, "`", TextType::Code)?;
    let nodes = split_nodes_image(nodes);
    let mut nodes = split_nodes_link(nodes);
    for (delimiter, text_type) in EMPHASIS_PASSES {
        nodes = split_nodes_delimiter(nodes, delimiter, text_type)?;
    }
    Ok(nodes)
}

/// Split every plain node on `delimiter`, turning the enclosed fragments into
/// `text_type` nodes.
///
/// Fragments at even positions stay plain, odd positions take `text_type`.
/// Empty plain fragments (e.g. around `**bold**`) are kept.
pub fn split_nodes_delimiter(
    old_nodes: Vec<TextNode>,
    delimiter: &str,
    text_type: TextType,
) -> Result<Vec<TextNode>, MarkdownError> {
    let mut new_nodes = Vec::with_capacity(old_nodes.len());

    for node in old_nodes {
        if !node.is_text() || !node.text.contains(delimiter) {
            new_nodes.push(node);
            continue;
        }

        let parts: Vec<&str> = node.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnterminatedDelimiter {
                delimiter: delimiter.to_string(),
                text: node.text.clone(),
            });
        }

        for (idx, part) in parts.into_iter().enumerate() {
            let ty = if idx % 2 == 0 { TextType::Text } else { text_type };
            new_nodes.push(TextNode::new(part, ty));
        }
    }

    Ok(new_nodes)
}

/// A bracketed `[label](url)` match, as byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BracketMatch {
    start: usize,
    end: usize,
    label: (usize, usize),
    url: (usize, usize),
}

impl BracketMatch {
    fn label<'a>(&self, text: &'a str) -> &'a str {
        &text[self.label.0..self.label.1]
    }

    fn url<'a>(&self, text: &'a str) -> &'a str {
        &text[self.url.0..self.url.1]
    }
}

/// Match `[label](url)` with the `[` at `open`.
///
/// The label may not contain brackets and the url may not contain
/// parentheses.
fn match_bracket_link(bytes: &[u8], open: usize) -> Option<(usize, (usize, usize), (usize, usize))> {
    if bytes.get(open) != Some(&b'[') {
        return None;
    }

    let label_start = open + 1;
    let mut pos = label_start;
    while pos < bytes.len() && bytes[pos] != b'[' && bytes[pos] != b']' {
        pos += 1;
    }
    if bytes.get(pos) != Some(&b']') {
        return None;
    }
    let label_end = pos;

    if bytes.get(pos + 1) != Some(&b'(') {
        return None;
    }
    let url_start = pos + 2;
    pos = url_start;
    while pos < bytes.len() && bytes[pos] != b'(' && bytes[pos] != b')' {
        pos += 1;
    }
    if bytes.get(pos) != Some(&b')') {
        return None;
    }

    Some((pos + 1, (label_start, label_end), (url_start, pos)))
}

/// First `![alt](url)` at or after `from`.
fn find_image(text: &str, from: usize) -> Option<BracketMatch> {
    let bytes = text.as_bytes();
    (from..bytes.len())
        .filter(|&pos| bytes[pos] == b'!')
        .find_map(|pos| {
            let (end, label, url) = match_bracket_link(bytes, pos + 1)?;
            Some(BracketMatch {
                start: pos,
                end,
                label,
                url,
            })
        })
}

/// First `[text](url)` at or after `from` that is not preceded by `!`.
fn find_link(text: &str, from: usize) -> Option<BracketMatch> {
    let bytes = text.as_bytes();
    (from..bytes.len())
        .filter(|&pos| bytes[pos] == b'[' && (pos == 0 || bytes[pos - 1] != b'!'))
        .find_map(|pos| {
            let (end, label, url) = match_bracket_link(bytes, pos)?;
            Some(BracketMatch {
                start: pos,
                end,
                label,
                url,
            })
        })
}

fn extract_all(text: &str, find: fn(&str, usize) -> Option<BracketMatch>) -> Vec<(String, String)> {
    let mut results = Vec::new();
    let mut pos = 0;
    while let Some(m) = find(text, pos) {
        results.push((m.label(text).to_string(), m.url(text).to_string()));
        pos = m.end;
    }
    results
}

/// All `(alt, url)` pairs of `![alt](url)` images in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract_all(text, find_image)
}

/// All `(text, url)` pairs of `[text](url)` links in `text`, left to right.
/// Image syntax is not reported.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    extract_all(text, find_link)
}

/// Scan-and-split every plain node with `find`, emitting matched spans via
/// `make`. Empty plain pieces are dropped.
fn split_nodes_matching(
    old_nodes: Vec<TextNode>,
    find: fn(&str, usize) -> Option<BracketMatch>,
    make: fn(&str, &str) -> TextNode,
) -> Vec<TextNode> {
    let mut new_nodes = Vec::with_capacity(old_nodes.len());

    for node in old_nodes {
        if !node.is_text() {
            new_nodes.push(node);
            continue;
        }

        let mut rest = node.text.as_str();
        while let Some(m) = find(rest, 0) {
            let before = &rest[..m.start];
            if !before.is_empty() {
                new_nodes.push(TextNode::text(before));
            }
            new_nodes.push(make(m.label(rest), m.url(rest)));
            rest = &rest[m.end..];
        }
        if !rest.is_empty() {
            new_nodes.push(TextNode::text(rest));
        }
    }

    new_nodes
}

/// Pull `![alt](url)` images out of plain nodes.
pub fn split_nodes_image(old_nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_matching(old_nodes, find_image, |alt, url| TextNode::image(alt, url))
}

/// Pull `[text](url)` links out of plain nodes. Run after
/// [`split_nodes_image`] so images are not matched twice.
pub fn split_nodes_link(old_nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_matching(old_nodes, find_link, |text, url| TextNode::link(text, url))
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
