use serde::Serialize;

/// Styling role of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text carrying one [`TextType`].
///
/// `url` is `Some` exactly when the type is [`TextType::Link`] or
/// [`TextType::Image`]. Use the constructors to keep that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TextNode {
    /// A span without a URL. Panics in debug builds if `text_type` needs one.
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        debug_assert!(
            !matches!(text_type, TextType::Link | TextType::Image),
            "links and images need a url"
        );
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type: TextType::Link,
            url: Some(url.into()),
        }
    }

    /// An image span; `alt` becomes the node text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            text_type: TextType::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.text_type == TextType::Text
    }
}

/// Structural type of a Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    OrderedList,
    UnorderedList,
}

/// The cleaned content of a block, shaped by its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockText {
    /// Paragraphs, headings, quotes and code: one run of text.
    Single(String),
    /// List blocks: one entry per item.
    Items(Vec<String>),
}

impl BlockText {
    /// Short name of the variant, for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            BlockText::Single(_) => "single",
            BlockText::Items(_) => "items",
        }
    }
}

/// Inline content of a parsed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockContent {
    Inline { nodes: Vec<TextNode> },
    Items { items: Vec<Vec<TextNode>> },
    Verbatim { text: String },
}

/// A classified block with its tokenized content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedBlock {
    pub block_type: BlockType,
    /// Heading level 1-6, only set for headings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    pub content: BlockContent,
}
