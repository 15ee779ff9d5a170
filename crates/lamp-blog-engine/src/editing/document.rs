use serde::{Deserialize, Serialize};

use crate::blocks::{
    BlockId, BlockMetadata, BlockType, ContentBlock, blocks_to_markdown, create_empty_block,
    markdown_to_blocks,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),
}

/// Direction for single-step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Full-field replacement for a block. Fields left `None` are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockUpdate {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub block_type: Option<BlockType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BlockMetadata>,
}

impl BlockUpdate {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn metadata(metadata: BlockMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: BlockMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_type(mut self, block_type: BlockType) -> Self {
        self.block_type = Some(block_type);
        self
    }
}

/// The ordered blocks of one editing session.
///
/// Never empty: a session starts with one empty paragraph, and removing the
/// last block puts a fresh empty paragraph back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDocument {
    blocks: Vec<ContentBlock>,
}

impl BlockDocument {
    pub fn new() -> Self {
        Self {
            blocks: vec![create_empty_block(BlockType::Paragraph)],
        }
    }

    /// Start a session from persisted markdown.
    pub fn from_markdown(markdown: &str) -> Self {
        if markdown.trim().is_empty() {
            return Self::new();
        }
        Self {
            blocks: markdown_to_blocks(markdown),
        }
    }

    /// Start a session from blocks an editor already holds.
    pub fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        if blocks.is_empty() {
            return Self::new();
        }
        Self { blocks }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn to_markdown(&self) -> String {
        blocks_to_markdown(&self.blocks)
    }

    /// Insert a new empty block after `after`, or at the end when `after` is
    /// `None` or not in the document.
    pub fn insert(&mut self, block_type: BlockType, after: Option<&BlockId>) -> BlockId {
        let block = create_empty_block(block_type);
        let id = block.id.clone();
        match after.and_then(|after| self.position(after)) {
            Some(index) => self.blocks.insert(index + 1, block),
            None => self.blocks.push(block),
        }
        id
    }

    pub fn update(&mut self, id: &BlockId, update: BlockUpdate) -> Result<(), EditError> {
        let index = self.require(id)?;
        let block = &mut self.blocks[index];
        if let Some(block_type) = update.block_type {
            block.block_type = block_type;
        }
        if let Some(content) = update.content {
            block.content = content;
        }
        if let Some(metadata) = update.metadata {
            block.metadata = metadata;
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &BlockId) -> Result<ContentBlock, EditError> {
        let index = self.require(id)?;
        let removed = self.blocks.remove(index);
        if self.blocks.is_empty() {
            self.blocks.push(create_empty_block(BlockType::Paragraph));
        }
        Ok(removed)
    }

    /// Swap a block with its neighbour. Returns false when the block is
    /// unknown or already at that edge.
    pub fn move_block(&mut self, id: &BlockId, direction: Direction) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.blocks.len() => index + 1,
            _ => return false,
        };
        self.blocks.swap(index, target);
        true
    }

    /// Drag-and-drop move: `target` is the drop slot as seen before the block
    /// is lifted out, so dropping below the block's own position lands one
    /// slot earlier.
    pub fn move_to(&mut self, id: &BlockId, target: usize) -> Result<(), EditError> {
        let index = self.require(id)?;
        let block = self.blocks.remove(index);
        let adjusted = if index < target { target - 1 } else { target };
        let adjusted = adjusted.min(self.blocks.len());
        self.blocks.insert(adjusted, block);
        Ok(())
    }

    fn require(&self, id: &BlockId) -> Result<usize, EditError> {
        self.position(id)
            .ok_or_else(|| EditError::BlockNotFound(id.clone()))
    }
}

impl Default for BlockDocument {
    fn default() -> Self {
        Self::new()
    }
}
