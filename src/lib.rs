//! # regexblocks
//!
//! Build regular expressions out of small composable blocks, explain existing patterns in
//! plain language, and try patterns against sample text.
//!
//! File Layout
//!
//! Everything lives under [regexblocks](crate::regexblocks):
//! src/regexblocks
//!   ├── units        Shared structured units (blocks, tokens, quantifiers, results)
//!   ├── compiling    Blocks -> pattern string
//!   ├── sequence     Editing a block list while keeping anchors in place
//!   ├── lexing       Pattern string -> described tokens
//!   ├── formats      Tokens -> pattern string, and rendered explanations
//!   ├── matching     Pattern + sample text -> positioned matches
//!   └── testing      Factories shared by unit and integration tests
//!
//! The four boundary operations never fail with `Err` and never panic: every failure comes
//! back as data (`success: false` plus an `error` message).

pub mod regexblocks;

pub use regexblocks::compiling::compile_blocks_to_regex;
pub use regexblocks::formats::detokenizer::tokens_to_regex;
pub use regexblocks::lexing::tokenize_regex;
pub use regexblocks::matching::find_matches;
