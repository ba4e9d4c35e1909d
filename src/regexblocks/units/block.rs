//! Builder blocks
//!
//!     A block is one visual step of a pattern being assembled: an anchor, a piece of literal
//!     text, a character class with a repetition, a raw sub-pattern group, and so on. Each
//!     block carries an identifier that is unique within the process, so edits and removals
//!     can address a block regardless of where it currently sits in its sequence.
//!
//!     Serialized form (JSON or YAML) is internally tagged by `type`:
//!
//!         {"type": "digit", "count": 3}
//!         {"type": "characterClass", "value": "a-z", "quantifier": "range", "min": 2}
//!
//!     A block read without an `id` is given a fresh one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique block identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct BlockId(u64);

impl BlockId {
    /// Allocate an identifier no other block in this process has been given.
    pub fn fresh() -> Self {
        BlockId(NEXT_BLOCK_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockId {
    /// Adopt an identifier read from outside; later fresh ids are allocated past it.
    fn from(raw: u64) -> Self {
        NEXT_BLOCK_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        BlockId(raw)
    }
}

impl From<BlockId> for u64 {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Repetition choices offered for character class and group blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    /// Exactly one occurrence, no suffix.
    #[default]
    One,
    OneOrMore,
    ZeroOrMore,
    Optional,
    /// `{min,}` or `{min,max}` using the block's own `min`/`max` fields.
    Range,
}

/// Repetition choices for word and any-character blocks, which offer no range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimpleRepeat {
    #[default]
    One,
    OneOrMore,
    ZeroOrMore,
    Optional,
}

impl From<SimpleRepeat> for Repeat {
    fn from(repeat: SimpleRepeat) -> Self {
        match repeat {
            SimpleRepeat::One => Repeat::One,
            SimpleRepeat::OneOrMore => Repeat::OneOrMore,
            SimpleRepeat::ZeroOrMore => Repeat::ZeroOrMore,
            SimpleRepeat::Optional => Repeat::Optional,
        }
    }
}

/// What a block contributes to the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockKind {
    Start,
    End,
    /// Literal text; every pattern metacharacter is escaped on compile.
    Text {
        #[serde(default)]
        value: String,
    },
    Digit {
        #[serde(default)]
        count: u32,
    },
    Whitespace,
    Optional {
        #[serde(default)]
        content: String,
    },
    /// `[value]`; `value` is the raw class body such as `a-z0-9_`.
    CharacterClass {
        #[serde(default)]
        value: String,
        #[serde(default)]
        quantifier: Repeat,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    OneOrMore {
        #[serde(default)]
        content: String,
    },
    ZeroOrMore {
        #[serde(default)]
        content: String,
    },
    Word {
        #[serde(default)]
        quantifier: SimpleRepeat,
    },
    AnyChar {
        #[serde(default)]
        quantifier: SimpleRepeat,
    },
    /// `(?:content)`; `content` is a raw sub-pattern and is inserted unescaped.
    Group {
        #[serde(default)]
        content: String,
        #[serde(default)]
        quantifier: Repeat,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
}

impl BlockKind {
    pub fn is_start(&self) -> bool {
        matches!(self, BlockKind::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, BlockKind::End)
    }

    /// Start and End are pinned to the edges of a sequence.
    pub fn is_anchor(&self) -> bool {
        self.is_start() || self.is_end()
    }

    /// Short lowercase name, as used in the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Start => "start",
            BlockKind::End => "end",
            BlockKind::Text { .. } => "text",
            BlockKind::Digit { .. } => "digit",
            BlockKind::Whitespace => "whitespace",
            BlockKind::Optional { .. } => "optional",
            BlockKind::CharacterClass { .. } => "characterClass",
            BlockKind::OneOrMore { .. } => "oneOrMore",
            BlockKind::ZeroOrMore { .. } => "zeroOrMore",
            BlockKind::Word { .. } => "word",
            BlockKind::AnyChar { .. } => "anyChar",
            BlockKind::Group { .. } => "group",
        }
    }
}

/// A block together with its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default = "BlockId::fresh")]
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Block {
            id: BlockId::fresh(),
            kind,
        }
    }
}

impl From<BlockKind> for Block {
    fn from(kind: BlockKind) -> Self {
        Block::new(kind)
    }
}
