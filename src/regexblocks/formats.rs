//! Output formats for tokens
//!
//! The detokenizer turns a token sequence back into the pattern it came from. The explain
//! formatter renders tokens as description cards for a terminal, and the JSON formatter
//! serializes results in their boundary shape.

pub mod detokenizer;
pub mod explain;

pub use detokenizer::{tokens_to_regex, ToPatternString};
pub use explain::{render_explanation, render_matches, to_json, OutputFormat};
