//! Lexeme definitions for pattern strings
//!
//! The lexemes are defined using the logos derive macro. They carry no context: whether a
//! `]` closes a class or a `+` repeats something is decided by the tokenizer, which
//! restarts this lexer at its own cursor through [`lexeme_at`].

use super::tokenizer::TokenizeError;
use logos::Logos;
use std::ops::Range;

/// Smallest recognizable pieces of a pattern.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    #[token("^")]
    Caret,
    #[token("$")]
    Dollar,

    /// Backslash and the character it escapes.
    #[regex(r"\\(.|\n)")]
    Escape,
    /// A backslash with nothing after it.
    #[token("\\")]
    Backslash,

    #[token("[")]
    ClassOpen,
    #[token("]")]
    ClassClose,

    #[token("(")]
    GroupOpen,
    #[token("(?:")]
    NonCapturingOpen,
    #[token("(?=")]
    LookaheadOpen,
    #[token("(?!")]
    NegativeLookaheadOpen,
    #[token("(?<=")]
    LookbehindOpen,
    #[token("(?<!")]
    NegativeLookbehindOpen,
    #[token(")")]
    GroupClose,

    #[token("|")]
    Pipe,
    #[token(".")]
    Dot,

    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("?")]
    Question,
    /// `{n}`, `{n,}` or `{n,m}`; bounds are checked when parsed.
    #[regex(r"\{[0-9]+(,[0-9]*)?\}")]
    Repetition,

    // Catch-all, lower priority than every single-character token above
    #[regex(r"(.|\n)", priority = 1)]
    Char,
}

impl Lexeme {
    /// Check if this lexeme opens a group of any flavor
    pub fn is_group_open(&self) -> bool {
        matches!(
            self,
            Lexeme::GroupOpen
                | Lexeme::NonCapturingOpen
                | Lexeme::LookaheadOpen
                | Lexeme::NegativeLookaheadOpen
                | Lexeme::LookbehindOpen
                | Lexeme::NegativeLookbehindOpen
        )
    }

    /// Check if this lexeme is quantifier syntax
    pub fn is_quantifier(&self) -> bool {
        matches!(
            self,
            Lexeme::Plus | Lexeme::Star | Lexeme::Question | Lexeme::Repetition
        )
    }
}

/// Recognize the lexeme starting at byte offset `pos`.
///
/// Returns `Ok(None)` at the end of the pattern. The returned range is absolute.
pub fn lexeme_at(
    pattern: &str,
    pos: usize,
) -> Result<Option<(Lexeme, Range<usize>)>, TokenizeError> {
    if pos > pattern.len() {
        return Err(TokenizeError::CursorOutOfBounds {
            offset: pos,
            len: pattern.len(),
        });
    }
    let rest = pattern
        .get(pos..)
        .ok_or(TokenizeError::NotCharBoundary { offset: pos })?;

    let mut lexer = Lexeme::lexer(rest);
    let Some(result) = lexer.next() else {
        return Ok(None);
    };
    match result {
        Ok(lexeme) => {
            let span = lexer.span();
            Ok(Some((lexeme, pos + span.start..pos + span.end)))
        }
        // A failed multi-character lexeme (`{2,` without its `}`) is reported over the
        // whole prefix it consumed. Only its first character is taken here, so the rest
        // is lexed again from the next cursor.
        Err(()) => {
            let width = rest.chars().next().map_or(1, char::len_utf8);
            Ok(Some((Lexeme::Char, pos..pos + width)))
        }
    }
}
