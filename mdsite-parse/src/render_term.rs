//! ANSI terminal renderer.
//!
//! Produces colored terminal output using the `colored` crate, for previewing
//! a document from the command line. Block and inline classification is the
//! same as for HTML output.

use colored::Colorize;

use crate::error::MarkdownError;
use crate::parse::parse_blocks;
use crate::types::{BlockContent, BlockType, ParsedBlock, TextNode, TextType};

/// Render a Markdown document as ANSI-colored terminal text.
pub fn to_terminal(markdown: &str) -> Result<String, MarkdownError> {
    let blocks = parse_blocks(markdown)?;
    Ok(blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn render_block(block: &ParsedBlock) -> String {
    match (&block.content, block.block_type) {
        (BlockContent::Verbatim { text }, _) => text
            .lines()
            .map(|line| format!("    {}", line.dimmed()))
            .collect::<Vec<_>>()
            .join("\n"),

        (BlockContent::Items { items }, block_type) => items
            .iter()
            .enumerate()
            .map(|(i, nodes)| {
                let marker = if block_type == BlockType::OrderedList {
                    format!("{}.", i + 1)
                } else {
                    "\u{2022}".to_string() // •
                };
                format!("  {} {}", marker.dimmed(), render_inline(nodes))
            })
            .collect::<Vec<_>>()
            .join("\n"),

        (BlockContent::Inline { nodes }, BlockType::Heading) => {
            let hashes = "#".repeat(block.level.unwrap_or(1));
            format!("{} {}", hashes.dimmed(), render_inline(nodes).bold().underline())
        }

        (BlockContent::Inline { nodes }, BlockType::Quote) => {
            format!("{} {}", "\u{2502}".cyan(), render_inline(nodes).italic()) // │
        }

        (BlockContent::Inline { nodes }, _) => render_inline(nodes),
    }
}

fn render_inline(nodes: &[TextNode]) -> String {
    nodes.iter().map(render_span).collect()
}

fn render_span(node: &TextNode) -> String {
    let url = node.url.as_deref().unwrap_or_default();
    match node.text_type {
        TextType::Text => node.text.clone(),
        TextType::Bold => node.text.bold().to_string(),
        TextType::Italic => node.text.italic().to_string(),
        TextType::Code => node.text.yellow().to_string(),
        TextType::Link => format!("{} ({})", node.text.blue().underline(), url.dimmed()),
        TextType::Image => format!("[image: {}] ({})", node.text, url.dimmed()),
    }
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_bold_has_color() {
        // Force colors on; the colored crate disables them when stdout is not a tty.
        colored::control::set_override(true);

        let output = to_terminal("Some **loud** words").unwrap();
        assert!(
            output.contains("\x1b["),
            "Terminal output should contain ANSI escape codes, got: {output:?}"
        );
        assert!(output.contains("loud"));

        colored::control::unset_override();
    }

    #[test]
    fn term_list_markers() {
        let output = to_terminal("- apples\n- pears\n\n1. first\n2. second").unwrap();
        assert!(output.contains("\u{2022}"), "Should contain bullet");
        assert!(output.contains("apples"));
        assert!(output.contains("2."));
        assert!(output.contains("second"));
    }

    #[test]
    fn term_link_shows_url() {
        let output = to_terminal("see [docs](https://example.com)").unwrap();
        assert!(output.contains("docs"));
        assert!(output.contains("https://example.com"));
    }

    #[test]
    fn term_image_placeholder() {
        let output = to_terminal("![a cat](/cat.png)").unwrap();
        assert!(output.contains("[image: a cat]"));
    }

    #[test]
    fn term_code_block_indented() {
        let output = to_terminal("```\nlet x = 1;\n```").unwrap();
        assert!(output.contains("    "));
        assert!(output.contains("let x = 1;"));
    }

    #[test]
    fn term_propagates_errors() {
        assert!(to_terminal("a `b").is_err());
    }
}
