//! Base descriptions for recognized units, before any quantifier suffix.

use super::base_tokenization::Lexeme;
use crate::regexblocks::units::TokenKind;

pub const START: &str = "Starts with";
pub const END: &str = "Ends with";
pub const ANY_CHARACTER: &str = "Any character";
pub const ALTERNATION: &str = "Or";
pub const LAZY: &str = "Lazy (as few as possible)";

pub const DIGIT: &str = "Any digit (0-9)";
pub const WHITESPACE: &str = "Any whitespace character";
pub const WORD: &str = "Any word character (letter, digit, or underscore)";

/// Kind and description for the escape `\ch`.
pub fn describe_escape(ch: char) -> (TokenKind, String) {
    match ch {
        'd' => (TokenKind::Digit, DIGIT.to_string()),
        'D' => (TokenKind::Digit, "Any non-digit".to_string()),
        's' => (TokenKind::Whitespace, WHITESPACE.to_string()),
        'S' => (
            TokenKind::Whitespace,
            "Any non-whitespace character".to_string(),
        ),
        'w' => (TokenKind::CharClass, WORD.to_string()),
        'W' => (TokenKind::CharClass, "Any non-word character".to_string()),
        'b' => (TokenKind::WordBoundary, "Word boundary".to_string()),
        'B' => (TokenKind::WordBoundary, "Not a word boundary".to_string()),
        other => (TokenKind::Literal, literal(other)),
    }
}

pub fn literal(ch: char) -> String {
    format!("Literal: {}", ch)
}

/// Name of the group flavor a group opener introduces.
pub fn group_name(opener: Lexeme) -> &'static str {
    match opener {
        Lexeme::NonCapturingOpen => "Non-capturing group",
        Lexeme::LookaheadOpen => "Followed by",
        Lexeme::NegativeLookaheadOpen => "Not followed by",
        Lexeme::LookbehindOpen => "Preceded by",
        Lexeme::NegativeLookbehindOpen => "Not preceded by",
        _ => "Group",
    }
}

/// Group description, naming the inner pattern when there is one.
pub fn describe_group(opener: Lexeme, inner: &str) -> String {
    let name = group_name(opener);
    if inner.is_empty() {
        name.to_string()
    } else {
        format!("{}: {}", name, inner)
    }
}

/// Description for quantifier syntax that has nothing before it to repeat.
pub fn describe_stray_quantifier(suffix: &str) -> String {
    format!("Repeat previous: {}", suffix)
}
