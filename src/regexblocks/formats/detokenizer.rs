//! Detokenizer for patterns
//!
//! Converts a token sequence back into a pattern string by concatenating each token's
//! `raw` fragment in order. Descriptions are never consulted, so this is the structural
//! inverse of the tokenizer rather than a re-derivation of the pattern:
//!
//! - Round-trip checks (pattern -> tokens -> pattern)
//! - Echoing back the pattern an explanation was built from

use crate::regexblocks::units::Token;

/// Trait for converting a token to its pattern text
pub trait ToPatternString {
    fn to_pattern_string(&self) -> String;
}

impl ToPatternString for Token {
    fn to_pattern_string(&self) -> String {
        self.raw.clone()
    }
}

impl ToPatternString for [Token] {
    fn to_pattern_string(&self) -> String {
        tokens_to_regex(Some(self))
    }
}

/// Rebuild a pattern from tokens. Absent or empty input gives an empty string.
///
/// # Examples
///
/// ```ignore
/// use regexblocks::{tokenize_regex, tokens_to_regex};
///
/// let pattern = "^\\d{3}[a-z]+$";
/// let tokens = tokenize_regex(pattern).tokens;
/// assert_eq!(tokens_to_regex(Some(&tokens)), pattern);
/// ```
pub fn tokens_to_regex(tokens: Option<&[Token]>) -> String {
    let Some(tokens) = tokens else {
        return String::new();
    };
    let mut result = String::with_capacity(tokens.iter().map(|t| t.raw.len()).sum());
    for token in tokens {
        result.push_str(&token.raw);
    }
    result
}
