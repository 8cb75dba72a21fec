//! WASM bindings for `mdsite-parse`.
//!
//! Exposes the Markdown renderer to JavaScript via wasm-bindgen, for live
//! previews that match what `mdsite build` will produce.

use wasm_bindgen::prelude::*;

/// Render Markdown to an HTML fragment wrapped in a `<div>`.
///
/// Throws if an inline delimiter is unterminated or a block renders empty.
#[wasm_bindgen]
pub fn render_html(input: &str) -> Result<String, JsError> {
    mdsite_parse::markdown_to_html(input).map_err(|e| JsError::new(&e.to_string()))
}

/// Parse Markdown and return the classified blocks as a JSON array.
///
/// Each entry is `{ block_type, level?, content }` where `content` is one of
/// `inline`, `items` or `verbatim`.
#[wasm_bindgen]
pub fn parse(input: &str) -> Result<String, JsError> {
    let blocks = mdsite_parse::parse_blocks(input).map_err(|e| JsError::new(&e.to_string()))?;
    mdsite_parse::to_json(&blocks).map_err(|e| JsError::new(&e.to_string()))
}

/// Return the document title from its leading `# ` heading.
#[wasm_bindgen]
pub fn extract_title(input: &str) -> Result<String, JsError> {
    mdsite_parse::extract_title(input).map_err(|e| JsError::new(&e.to_string()))
}

/// Render the HTML tree (before serialization) as JSON.
#[wasm_bindgen]
pub fn html_tree(input: &str) -> Result<String, JsError> {
    let node = mdsite_parse::markdown_to_html_node(input).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&node).map_err(|e| JsError::new(&e.to_string()))
}
