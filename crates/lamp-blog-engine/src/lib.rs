pub mod blocks;
pub mod blog;
pub mod drafts;
pub mod editing;
pub mod language;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{
    BlockId, BlockMetadata, BlockType, ContentBlock, blocks_to_markdown, create_empty_block,
    markdown_to_blocks,
};
pub use blog::{BlogError, BlogId, BlogPost, BlogService, Comment};
pub use drafts::{BlogDraft, DraftId, DraftNamespace, DraftStore};
pub use editing::{BlockDocument, BlockUpdate, Direction, EditError};
