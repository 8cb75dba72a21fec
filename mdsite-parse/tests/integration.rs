//! Integration tests that render complete fixture documents end-to-end.

use mdsite_parse::{BlockType, MarkdownError, TextNode, TextType};
use pretty_assertions::assert_eq;

fn fixtures_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", path.display(), e))
}

#[test]
fn home_page_renders() {
    let content = read_fixture("site/content/index.md");
    let html = mdsite_parse::markdown_to_html(&content).expect("home page should render");

    assert!(html.starts_with("<div><h1>Tolkien Fan Club</h1>"));
    assert!(html.ends_with("</div>"));
    assert!(html.contains("<img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img>"));
    assert!(html.contains("<b>I like Tolkien</b>"));
    assert!(html.contains("<blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>"));
    assert!(html.contains("<ul><li><a href=\"/blog/glorfindel\">Why Glorfindel is More Impressive than Legolas</a></li>"));
    assert!(html.contains("<ol><li>You can spend years"));
    assert!(html.contains("Disney <i>didn't ruin it</i> (okay, but Amazon might have)"));
    assert!(html.contains(
        "<pre><code>func main(){\n    fmt.Println(\"Aiya, Ambar!\")\n}\n</code></pre>"
    ));
}

#[test]
fn home_page_block_types() {
    let content = read_fixture("site/content/index.md");
    let types: Vec<BlockType> = mdsite_parse::markdown_to_blocks(&content)
        .iter()
        .map(|b| mdsite_parse::block_to_block_type(b))
        .collect();

    assert_eq!(
        types,
        vec![
            BlockType::Heading,
            BlockType::Paragraph,
            BlockType::Paragraph,
            BlockType::Quote,
            BlockType::Heading,
            BlockType::UnorderedList,
            BlockType::Heading,
            BlockType::OrderedList,
            BlockType::Code,
        ]
    );
}

#[test]
fn blog_post_renders() {
    let content = read_fixture("site/content/blog/glorfindel/index.md");
    let html = mdsite_parse::markdown_to_html(&content).unwrap();
    assert_eq!(
        html,
        "<div><h1>Why Glorfindel is More Impressive than Legolas</h1>\
         <p><a href=\"/\">< Back Home</a></p>\
         <p>In J.R.R. Tolkien's legendarium, characters are often celebrated for their <code>valor</code> and <b>heroism</b>.</p>\
         <p>Glorfindel returned from the <i>Halls of Mandos</i>.</p></div>"
    );
}

#[test]
fn titles_from_fixtures() {
    let home = read_fixture("site/content/index.md");
    assert_eq!(mdsite_parse::extract_title(&home).unwrap(), "Tolkien Fan Club");

    let untitled = read_fixture("untitled.md");
    assert_eq!(
        mdsite_parse::extract_title(&untitled),
        Err(MarkdownError::NoHeading)
    );
}

#[test]
fn broken_fixture_reports_delimiter() {
    let content = read_fixture("broken/content/index.md");
    match mdsite_parse::markdown_to_html_node(&content) {
        Err(MarkdownError::UnterminatedDelimiter { delimiter, .. }) => assert_eq!(delimiter, "**"),
        other => panic!("Expected UnterminatedDelimiter, got {other:?}"),
    }
}

#[test]
fn tree_shape() {
    let node = mdsite_parse::markdown_to_html_node("# T\n\n- a\n- b").unwrap();
    let mdsite_parse::HtmlNode::Parent { tag, children, .. } = &node else {
        panic!("root should be a parent node");
    };
    assert_eq!(tag, "div");
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag(), Some("h1"));
    assert_eq!(children[1].tag(), Some("ul"));
}

#[test]
fn tokenizer_is_public() {
    let nodes = mdsite_parse::text_to_text_nodes("plain and `code`").unwrap();
    assert_eq!(
        nodes,
        vec![
            TextNode::text("plain and "),
            TextNode::new("code", TextType::Code),
        ]
    );
}
