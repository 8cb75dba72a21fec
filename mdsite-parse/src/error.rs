use crate::types::BlockType;

/// Errors that can occur while turning Markdown into HTML.
///
/// Every variant is fatal to the document being processed: there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Unterminated delimiter '{delimiter}' in \"{text}\"")]
    UnterminatedDelimiter { delimiter: String, text: String },

    #[error("Parent node has no tag")]
    MissingTag,

    #[error("Parent node <{tag}> has no children")]
    EmptyChildren { tag: String },

    #[error("No H1 heading at the start of the document")]
    NoHeading,

    #[error("A {block_type:?} block cannot hold {shape} content")]
    ContentMismatch {
        block_type: BlockType,
        shape: &'static str,
    },
}
