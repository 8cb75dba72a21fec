use crate::blocks::{block_to_block_type, block_to_text, heading_level, markdown_to_blocks};
use crate::error::MarkdownError;
use crate::inline::text_to_text_nodes;
use crate::types::{BlockContent, BlockText, BlockType, ParsedBlock};

/// Classify and tokenize every block of a document.
///
/// Code blocks keep their text verbatim; everything else is run through the
/// inline tokenizer. Fails on the first unterminated delimiter.
pub fn parse_blocks(markdown: &str) -> Result<Vec<ParsedBlock>, MarkdownError> {
    markdown_to_blocks(markdown)
        .iter()
        .map(|block| parse_block(block))
        .collect()
}

fn parse_block(block: &str) -> Result<ParsedBlock, MarkdownError> {
    let block_type = block_to_block_type(block);
    let level = (block_type == BlockType::Heading).then(|| heading_level(block));

    let content = match (block_type, block_to_text(block, block_type)) {
        (BlockType::Code, BlockText::Single(text)) => BlockContent::Verbatim { text },
        (_, BlockText::Single(text)) => BlockContent::Inline {
            nodes: text_to_text_nodes(&text)?,
        },
        (_, BlockText::Items(items)) => BlockContent::Items {
            items: items
                .iter()
                .map(|item| text_to_text_nodes(item))
                .collect::<Result<_, _>>()?,
        },
    };

    Ok(ParsedBlock {
        block_type,
        level,
        content,
    })
}

/// Serialize parsed blocks as a pretty-printed JSON array.
pub fn to_json(blocks: &[ParsedBlock]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(blocks)
}

/// The text of the H1 heading that opens the document.
///
/// Only the very start of the input is considered: `#`, at least one
/// whitespace character, then the rest of that line, trimmed.
pub fn extract_title(markdown: &str) -> Result<String, MarkdownError> {
    let rest = markdown.strip_prefix('#').ok_or(MarkdownError::NoHeading)?;
    let after_ws = rest.trim_start();
    if after_ws.len() == rest.len() {
        return Err(MarkdownError::NoHeading);
    }
    let line = after_ws.split('\n').next().unwrap_or_default();
    Ok(line.trim().to_string())
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
