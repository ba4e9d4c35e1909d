//! Result shapes returned by the boundary operations.
//!
//! Failures are carried as data: `success` is false and `error` holds a message that is
//! safe to show a user as-is.

use super::token::Token;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub success: bool,
    pub tokens: Vec<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenizeResult {
    pub fn ok(tokens: Vec<Token>) -> Self {
        TokenizeResult {
            success: true,
            tokens,
            error: None,
        }
    }

    /// A failed scan keeps whatever tokens were produced before the fault.
    pub fn failed(tokens: Vec<Token>, error: impl Into<String>) -> Self {
        TokenizeResult {
            success: false,
            tokens,
            error: Some(error.into()),
        }
    }
}

/// One match of a pattern in a sample text.
///
/// Offsets are UTF-8 code unit offsets into the sample, so `sample[start..end] == text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Match {
            text: text.into(),
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub success: bool,
    pub matches: Vec<Match>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResult {
    pub fn ok(matches: Vec<Match>) -> Self {
        MatchResult {
            success: true,
            matches,
            error: None,
        }
    }

    /// Failures never carry matches.
    pub fn failed(error: impl Into<String>) -> Self {
        MatchResult {
            success: false,
            matches: Vec::new(),
            error: Some(error.into()),
        }
    }
}
