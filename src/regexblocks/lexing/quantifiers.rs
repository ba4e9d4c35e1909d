//! Trailing quantifier recognition.

use super::base_tokenization::{lexeme_at, Lexeme};
use super::tokenizer::TokenizeError;
use crate::regexblocks::units::Quantifier;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static REPETITION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([0-9]+)(?:(,)([0-9]*))?\}$").unwrap());

/// Quantifier recognized at `pos`, with the span of its syntax.
///
/// A `{n,m}` whose bounds overflow or are inverted is not a quantifier.
pub fn quantifier_at(
    pattern: &str,
    pos: usize,
) -> Result<Option<(Quantifier, Range<usize>)>, TokenizeError> {
    let Some((lexeme, span)) = lexeme_at(pattern, pos)? else {
        return Ok(None);
    };
    let quantifier = match lexeme {
        Lexeme::Plus => Some(Quantifier::Plus),
        Lexeme::Star => Some(Quantifier::Star),
        Lexeme::Question => Some(Quantifier::Optional),
        Lexeme::Repetition => parse_repetition(&pattern[span.clone()]),
        _ => None,
    };
    Ok(quantifier.map(|quantifier| (quantifier, span)))
}

/// Parse `{n}`, `{n,}` or `{n,m}`.
pub fn parse_repetition(raw: &str) -> Option<Quantifier> {
    let captures = REPETITION_REGEX.captures(raw)?;
    let min: u32 = captures.get(1)?.as_str().parse().ok()?;
    if captures.get(2).is_none() {
        return Some(Quantifier::Exact { count: min });
    }
    match captures.get(3).map(|m| m.as_str()).unwrap_or("") {
        "" => Quantifier::range(min, None),
        max => Quantifier::range(min, Some(max.parse().ok()?)),
    }
}
