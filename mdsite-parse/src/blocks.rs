//! Block segmentation, classification and content extraction.
//!
//! A document is split on blank lines into blocks. Each block is classified
//! by [`block_to_block_type`] and its Markdown markers are stripped by
//! [`block_to_text`].

use crate::types::{BlockText, BlockType};

const FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let normalised = markdown.replace("\r\n", "\n");
    normalised
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of leading `#` characters.
pub fn heading_level(block: &str) -> usize {
    block.chars().take_while(|&c| c == '#').count()
}

fn is_heading(block: &str) -> bool {
    let level = heading_level(block);
    (1..=6).contains(&level) && block[level..].starts_with(' ')
}

fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(idx, line)| line.starts_with(&format!("{}. ", idx + 1)))
}

/// Classify a trimmed block. Total: anything unrecognised is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').map(str::trim).collect();

    if is_heading(block) {
        return BlockType::Heading;
    }
    if lines.len() > 1
        && lines[0].starts_with(FENCE)
        && lines[lines.len() - 1].starts_with(FENCE)
    {
        return BlockType::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }
    if block.starts_with("1. ") && is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// Strip the Markdown markers from a block of the given type.
///
/// Lists yield one entry per line; everything else yields a single string.
/// Code content is returned verbatim apart from dedenting.
pub fn block_to_text(block: &str, block_type: BlockType) -> BlockText {
    match block_type {
        BlockType::Heading => {
            let rest = block.trim_start_matches('#');
            BlockText::Single(rest.strip_prefix(' ').unwrap_or(rest).to_string())
        }
        BlockType::Code => BlockText::Single(code_block_text(block)),
        BlockType::Quote => {
            let merged = block
                .split('\n')
                .map(|line| {
                    let line = line.trim();
                    line.strip_prefix("> ")
                        .or_else(|| line.strip_prefix('>'))
                        .unwrap_or(line)
                })
                .collect::<Vec<_>>()
                .join(" ");
            BlockText::Single(merged)
        }
        BlockType::UnorderedList => BlockText::Items(
            block
                .split('\n')
                .map(|line| {
                    let line = line.trim();
                    ["- ", "+ ", "* "]
                        .iter()
                        .find_map(|prefix| line.strip_prefix(*prefix))
                        .unwrap_or(line)
                        .to_string()
                })
                .collect(),
        ),
        BlockType::OrderedList => BlockText::Items(
            block
                .split('\n')
                .map(|line| {
                    let line = line.trim();
                    line.split_once(". ")
                        .map_or(line, |(_, item)| item)
                        .to_string()
                })
                .collect(),
        ),
        BlockType::Paragraph => BlockText::Single(
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Drop the fences, remove the common indentation and end with one newline.
fn code_block_text(block: &str) -> String {
    let lines: Vec<&str> = block.lines().collect();
    let interior = if lines.len() >= 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[][..]
    };

    let common = interior
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_spaces(line))
        .min()
        .unwrap_or(0);

    let mut content = interior
        .iter()
        .map(|line| {
            if leading_spaces(line) >= common {
                &line[common..]
            } else {
                *line
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed_len = content.trim_end_matches('\n').len();
    content.truncate(trimmed_len);
    content.push('\n');
    content
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
