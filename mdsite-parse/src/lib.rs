//! `mdsite-parse`: Markdown to HTML for the mdsite static site generator.
//!
//! A document is split on blank lines into blocks, each block is classified
//! (paragraph, heading, code, quote, ordered or unordered list), its inline
//! text is tokenized into styled spans, and the result is assembled into an
//! [`HtmlNode`] tree rooted at a `<div>`.
//!
//! # Quick start
//!
//! ```
//! let html = mdsite_parse::markdown_to_html("# Title\n\nHello **world**").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Hello <b>world</b></p></div>");
//!
//! let title = mdsite_parse::extract_title("# Title\n\nHello").unwrap();
//! assert_eq!(title, "Title");
//! ```

pub mod blocks;
pub mod error;
pub mod html;
pub mod inline;
pub mod parse;
pub mod render_html;
#[cfg(feature = "terminal")]
pub mod render_term;
pub mod types;

pub use blocks::{block_to_block_type, block_to_text, markdown_to_blocks};
pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_text_nodes,
};
pub use parse::{extract_title, parse_blocks, to_json};
pub use render_html::{markdown_to_html, markdown_to_html_node, text_node_to_html_node};
pub use types::*;
