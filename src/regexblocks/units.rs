//! Structured units shared by every stage
//!
//!     Blocks are what the builder edits, tokens are what the tokenizer produces from an
//!     existing pattern, and the result types are what the boundary operations hand back.
//!     None of these carry behavior beyond construction helpers and small predicates; the
//!     compiler, tokenizer, detokenizer and matcher all match on them exhaustively.
//!
//!     All units are plain values. Apart from a block sequence being edited, nothing is
//!     mutated after construction.

pub mod block;
pub mod results;
pub mod token;

pub use block::{Block, BlockId, BlockKind, Repeat, SimpleRepeat};
pub use results::{Match, MatchResult, TokenizeResult};
pub use token::{Quantifier, Token, TokenKind};
