//! Editable block sequences
//!
//!     A sequence holds at most one Start and at most one End. Start, when present, is
//!     always first and End always last; every other block lives in between. The editing
//!     operations keep that shape: anchors are placed at their edge, interior blocks are
//!     clamped into the interior, and a second Start or End is refused.
//!
//!     Blocks are addressed by their identifier, so edits survive reordering.

use crate::regexblocks::compiling::compile_blocks_to_regex;
use crate::regexblocks::units::{Block, BlockId, BlockKind};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The sequence already has a Start (or End) block.
    DuplicateAnchor(&'static str),
    /// No block with this identifier.
    UnknownBlock(BlockId),
    /// Anchors stay at their edge and cannot be moved.
    AnchorNotMovable(BlockId),
    /// An edit tried to turn an anchor into an interior block or back.
    AnchorChange(BlockId),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::DuplicateAnchor(name) => {
                write!(f, "The sequence already has a {} block", name)
            }
            SequenceError::UnknownBlock(id) => write!(f, "No block with id {}", id),
            SequenceError::AnchorNotMovable(id) => {
                write!(f, "Block {} is an anchor and cannot be moved", id)
            }
            SequenceError::AnchorChange(id) => write!(
                f,
                "Block {} cannot change between an anchor and an interior block",
                id
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

/// An ordered list of blocks that keeps its anchors at the edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct BlockSequence {
    blocks: Vec<Block>,
}

impl BlockSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BlockId) -> Result<usize, SequenceError> {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(SequenceError::UnknownBlock(id))
    }

    fn has_start(&self) -> bool {
        self.blocks.first().is_some_and(|b| b.kind.is_start())
    }

    fn has_end(&self) -> bool {
        self.blocks.last().is_some_and(|b| b.kind.is_end())
    }

    /// Index range open to interior blocks.
    fn interior(&self) -> (usize, usize) {
        let low = usize::from(self.has_start());
        let high = self.blocks.len() - usize::from(self.has_end());
        (low, high)
    }

    /// Append a block: Start goes first, End goes last, anything else goes just before a
    /// trailing End.
    pub fn push(&mut self, kind: BlockKind) -> Result<BlockId, SequenceError> {
        let index = self.blocks.len();
        self.insert(index, kind)
    }

    /// Insert a block at `index`, clamped into the interior. Anchors ignore `index`.
    pub fn insert(&mut self, index: usize, kind: BlockKind) -> Result<BlockId, SequenceError> {
        self.insert_block(index, Block::new(kind))
    }

    fn insert_block(&mut self, index: usize, block: Block) -> Result<BlockId, SequenceError> {
        let id = block.id;
        match &block.kind {
            BlockKind::Start => {
                if self.has_start() {
                    return Err(SequenceError::DuplicateAnchor("start"));
                }
                self.blocks.insert(0, block);
            }
            BlockKind::End => {
                if self.has_end() {
                    return Err(SequenceError::DuplicateAnchor("end"));
                }
                self.blocks.push(block);
            }
            _ => {
                let (low, high) = self.interior();
                self.blocks.insert(index.clamp(low, high), block);
            }
        }
        Ok(id)
    }

    /// Edit a block's fields in place.
    ///
    /// The edit may change the block's variant, but not between an anchor and an
    /// interior block.
    pub fn update<F>(&mut self, id: BlockId, edit: F) -> Result<(), SequenceError>
    where
        F: FnOnce(&mut BlockKind),
    {
        let index = self.position(id)?;
        let mut kind = self.blocks[index].kind.clone();
        let was_anchor = kind.is_anchor();
        edit(&mut kind);
        let same_variant =
            std::mem::discriminant(&kind) == std::mem::discriminant(&self.blocks[index].kind);
        if (was_anchor || kind.is_anchor()) && !same_variant {
            return Err(SequenceError::AnchorChange(id));
        }
        self.blocks[index].kind = kind;
        Ok(())
    }

    pub fn remove(&mut self, id: BlockId) -> Result<Block, SequenceError> {
        let index = self.position(id)?;
        Ok(self.blocks.remove(index))
    }

    /// Move an interior block to `to_index`, clamped into the interior.
    pub fn move_block(&mut self, id: BlockId, to_index: usize) -> Result<(), SequenceError> {
        let from = self.position(id)?;
        if self.blocks[from].kind.is_anchor() {
            return Err(SequenceError::AnchorNotMovable(id));
        }
        let block = self.blocks.remove(from);
        let (low, high) = self.interior();
        self.blocks.insert(to_index.clamp(low, high), block);
        Ok(())
    }

    pub fn compile(&self) -> String {
        compile_blocks_to_regex(&self.blocks)
    }
}

impl TryFrom<Vec<Block>> for BlockSequence {
    type Error = SequenceError;

    /// Rebuild a sequence, placing anchors at their edges and refusing duplicates.
    /// Interior blocks keep their relative order.
    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        let mut sequence = BlockSequence::new();
        for block in blocks {
            let index = sequence.blocks.len();
            sequence.insert_block(index, block)?;
        }
        Ok(sequence)
    }
}

impl From<BlockSequence> for Vec<Block> {
    fn from(sequence: BlockSequence) -> Self {
        sequence.blocks
    }
}
