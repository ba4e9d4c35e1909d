//! Tokens produced by explaining a pattern
//!
//!     A token covers one fragment of the source pattern together with a plain-language
//!     description. `raw` is the exact source substring consumed, trailing quantifier
//!     included, so concatenating the `raw` fields of a token sequence in order gives back
//!     the source pattern byte for byte. The detokenizer relies on nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    AnchorStart,
    AnchorEnd,
    WordBoundary,
    Digit,
    Whitespace,
    CharClass,
    Group,
    Literal,
    Quantifier,
}

impl TokenKind {
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::AnchorStart => "ANCHOR_START",
            TokenKind::AnchorEnd => "ANCHOR_END",
            TokenKind::WordBoundary => "WORD_BOUNDARY",
            TokenKind::Digit => "DIGIT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::CharClass => "CHAR_CLASS",
            TokenKind::Group => "GROUP",
            TokenKind::Literal => "LITERAL",
            TokenKind::Quantifier => "QUANTIFIER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Repetition attached to a token.
///
/// `Range::max`, when present, is never below `min`; the tokenizer refuses to build one
/// that would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Quantifier {
    Exact {
        count: u32,
    },
    Range {
        min: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    Plus,
    Star,
    Optional,
}

impl Quantifier {
    /// Build a range, rejecting `max < min`.
    pub fn range(min: u32, max: Option<u32>) -> Option<Self> {
        match max {
            Some(max) if max < min => None,
            _ => Some(Quantifier::Range { min, max }),
        }
    }

    /// Plain-language suffix appended to a token description.
    pub fn describe(&self) -> String {
        match self {
            Quantifier::Exact { count } => format!("exactly {} times", count),
            Quantifier::Range { min, max: None } => format!("{} or more times", min),
            Quantifier::Range {
                min,
                max: Some(max),
            } => format!("{} to {} times", min, max),
            Quantifier::Plus => "one or more times".to_string(),
            Quantifier::Star => "zero or more times".to_string(),
            Quantifier::Optional => "optionally".to_string(),
        }
    }
}

/// One described fragment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantifier: Option<Quantifier>,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>, description: impl Into<String>) -> Self {
        Token {
            kind,
            raw: raw.into(),
            description: description.into(),
            quantifier: None,
        }
    }

    /// Fold a trailing quantifier into this token: its syntax joins `raw` and its meaning
    /// joins `description`.
    pub fn with_quantifier(mut self, quantifier: Quantifier, raw: &str) -> Self {
        self.raw.push_str(raw);
        self.description = format!("{}, {}", self.description, quantifier.describe());
        self.quantifier = Some(quantifier);
        self
    }

    pub fn is_quantified(&self) -> bool {
        self.quantifier.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(Quantifier::range(5, Some(3)), None);
        assert_eq!(
            Quantifier::range(3, Some(3)),
            Some(Quantifier::Range {
                min: 3,
                max: Some(3)
            })
        );
    }

    #[test]
    fn test_quantifier_suffixes() {
        assert_eq!(Quantifier::Exact { count: 3 }.describe(), "exactly 3 times");
        assert_eq!(
            Quantifier::Range { min: 2, max: None }.describe(),
            "2 or more times"
        );
        assert_eq!(
            Quantifier::Range {
                min: 2,
                max: Some(4)
            }
            .describe(),
            "2 to 4 times"
        );
        assert_eq!(Quantifier::Plus.describe(), "one or more times");
        assert_eq!(Quantifier::Star.describe(), "zero or more times");
        assert_eq!(Quantifier::Optional.describe(), "optionally");
    }

    #[test]
    fn test_with_quantifier_extends_raw_and_description() {
        let token = Token::new(TokenKind::Digit, "\\d", "Any digit (0-9)")
            .with_quantifier(Quantifier::Exact { count: 3 }, "{3}");
        assert_eq!(token.raw, "\\d{3}");
        assert_eq!(token.description, "Any digit (0-9), exactly 3 times");
        assert!(token.is_quantified());
    }

    #[test]
    fn test_quantifier_json_shape() {
        let json = serde_json::to_string(&Quantifier::Exact { count: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"exact","count":3}"#);
        let json = serde_json::to_string(&Quantifier::Plus).unwrap();
        assert_eq!(json, r#"{"type":"plus"}"#);
    }

    #[test]
    fn test_token_kind_json_shape() {
        let json = serde_json::to_string(&TokenKind::AnchorStart).unwrap();
        assert_eq!(json, r#""ANCHOR_START""#);
    }
}
