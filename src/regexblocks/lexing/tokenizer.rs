//! Cursor automaton that turns a pattern into described tokens.

use super::base_tokenization::{lexeme_at, Lexeme};
use super::classes::{describe_class, scan_class};
use super::descriptions;
use super::quantifiers::{parse_repetition, quantifier_at};
use crate::regexblocks::units::{Quantifier, Token, TokenKind, TokenizeResult};
use std::fmt;
use std::ops::Range;
use tracing::{debug, trace, warn};

/// Internal scanner faults. These never escape [`tokenize_regex`]; they end the scan with
/// a failed result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The cursor moved past the end of the pattern.
    CursorOutOfBounds { offset: usize, len: usize },
    /// The cursor landed inside a multi-byte character.
    NotCharBoundary { offset: usize },
    /// A step produced no progress.
    Stalled { offset: usize },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::CursorOutOfBounds { offset, len } => write!(
                f,
                "Scanner cursor at offset {} is past the end of the pattern (length {})",
                offset, len
            ),
            TokenizeError::NotCharBoundary { offset } => {
                write!(f, "Scanner cursor at offset {} is inside a character", offset)
            }
            TokenizeError::Stalled { offset } => {
                write!(f, "Scanner made no progress at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Tokenize a pattern. Never panics; an empty pattern gives an empty token list.
pub fn tokenize_regex(pattern: &str) -> TokenizeResult {
    let mut tokens = Vec::new();
    match scan(pattern, &mut tokens) {
        Ok(()) => TokenizeResult::ok(tokens),
        Err(err) => {
            warn!(pattern, error = %err, "tokenizer stopped early");
            TokenizeResult::failed(tokens, err.to_string())
        }
    }
}

fn scan(pattern: &str, tokens: &mut Vec<Token>) -> Result<(), TokenizeError> {
    let mut pos = 0;
    while pos < pattern.len() {
        let step = step_at(pattern, pos, tokens.last())?;
        if step.end <= pos {
            return Err(TokenizeError::Stalled { offset: pos });
        }
        for token in &step.tokens {
            trace!(kind = %token.kind, raw = %token.raw, "recognized token");
        }
        tokens.extend(step.tokens);
        pos = step.end;
    }
    Ok(())
}

/// Tokens recognized in one step and where the next step starts.
struct Step {
    tokens: Vec<Token>,
    end: usize,
}

/// One recognized base unit before quantifier folding.
struct Unit {
    tokens: Vec<Token>,
    end: usize,
    quantifiable: bool,
}

impl Unit {
    fn single(token: Token, end: usize) -> Self {
        Unit {
            tokens: vec![token],
            end,
            quantifiable: true,
        }
    }

    fn fixed(token: Token, end: usize) -> Self {
        Unit {
            tokens: vec![token],
            end,
            quantifiable: false,
        }
    }
}

fn step_at(pattern: &str, pos: usize, previous: Option<&Token>) -> Result<Step, TokenizeError> {
    let Some((lexeme, span)) = lexeme_at(pattern, pos)? else {
        return Err(TokenizeError::CursorOutOfBounds {
            offset: pos,
            len: pattern.len(),
        });
    };

    let unit = recognize(pattern, lexeme, span, previous)?;
    let Unit {
        mut tokens,
        mut end,
        quantifiable,
    } = unit;

    if quantifiable {
        if let Some((quantifier, quantifier_span)) = quantifier_at(pattern, end)? {
            if let Some(last) = tokens.pop() {
                tokens.push(last.with_quantifier(quantifier, &pattern[quantifier_span.clone()]));
                end = quantifier_span.end;
            }
        }
    }

    Ok(Step { tokens, end })
}

fn recognize(
    pattern: &str,
    lexeme: Lexeme,
    span: Range<usize>,
    previous: Option<&Token>,
) -> Result<Unit, TokenizeError> {
    let raw = &pattern[span.clone()];
    let unit = match lexeme {
        Lexeme::Caret => Unit::single(
            Token::new(TokenKind::AnchorStart, raw, descriptions::START),
            span.end,
        ),
        Lexeme::Dollar => Unit::single(
            Token::new(TokenKind::AnchorEnd, raw, descriptions::END),
            span.end,
        ),
        Lexeme::Escape => {
            let escaped = raw.chars().nth(1).unwrap_or('\\');
            let (kind, description) = descriptions::describe_escape(escaped);
            Unit::single(Token::new(kind, raw, description), span.end)
        }
        Lexeme::ClassOpen => match scan_class(pattern, span.start)? {
            Some(end) => {
                let body = &pattern[span.end..end - 1];
                Unit::single(
                    Token::new(TokenKind::CharClass, &pattern[span.start..end], describe_class(body)),
                    end,
                )
            }
            None => recognition_miss(pattern, span, "unterminated character class"),
        },
        open if open.is_group_open() => match scan_group(pattern, span.end)? {
            Some(end) => {
                let inner = &pattern[span.end..end - 1];
                Unit::single(
                    Token::new(
                        TokenKind::Group,
                        &pattern[span.start..end],
                        descriptions::describe_group(open, inner),
                    ),
                    end,
                )
            }
            None => recognition_miss(pattern, span, "unterminated group"),
        },
        Lexeme::Pipe => Unit::fixed(
            Token::new(TokenKind::Literal, raw, descriptions::ALTERNATION),
            span.end,
        ),
        Lexeme::Dot => Unit::single(
            Token::new(TokenKind::CharClass, raw, descriptions::ANY_CHARACTER),
            span.end,
        ),
        Lexeme::Question if previous.is_some_and(Token::is_quantified) => Unit::fixed(
            Token::new(TokenKind::Quantifier, raw, descriptions::LAZY),
            span.end,
        ),
        quantifier if quantifier.is_quantifier() => {
            let parsed = match quantifier {
                Lexeme::Plus => Some(Quantifier::Plus),
                Lexeme::Star => Some(Quantifier::Star),
                Lexeme::Question => Some(Quantifier::Optional),
                _ => parse_repetition(raw),
            };
            match parsed {
                Some(parsed) => {
                    let mut token = Token::new(
                        TokenKind::Quantifier,
                        raw,
                        descriptions::describe_stray_quantifier(&parsed.describe()),
                    );
                    token.quantifier = Some(parsed);
                    Unit::fixed(token, span.end)
                }
                None => recognition_miss(pattern, span, "invalid repetition bounds"),
            }
        }
        // Backslash, stray closers and every other character
        _ => literal_unit(raw, span.end),
    };
    Ok(unit)
}

fn literal_unit(raw: &str, end: usize) -> Unit {
    let ch = raw.chars().next().unwrap_or_default();
    Unit::single(
        Token::new(TokenKind::Literal, raw, descriptions::literal(ch)),
        end,
    )
}

/// A unit that failed to close degrades to one literal per character of its opening
/// lexeme.
fn recognition_miss(pattern: &str, span: Range<usize>, reason: &str) -> Unit {
    let opening = &pattern[span.clone()];
    debug!(offset = span.start, opening, reason, "recognition miss, reading as literals");
    let tokens = opening
        .chars()
        .map(|ch| Token::new(TokenKind::Literal, ch.to_string(), descriptions::literal(ch)))
        .collect();
    Unit {
        tokens,
        end: span.end,
        quantifiable: true,
    }
}

/// Find the end (exclusive) of a group whose opener ends at `body_start`, by depth
/// counting. Escapes are single lexemes so escaped parentheses never count, and character
/// classes are skipped whole.
fn scan_group(pattern: &str, body_start: usize) -> Result<Option<usize>, TokenizeError> {
    let mut depth = 1usize;
    let mut pos = body_start;
    while let Some((lexeme, span)) = lexeme_at(pattern, pos)? {
        match lexeme {
            open if open.is_group_open() => depth += 1,
            Lexeme::GroupClose => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(span.end));
                }
            }
            Lexeme::ClassOpen => {
                if let Some(end) = scan_class(pattern, span.start)? {
                    pos = end;
                    continue;
                }
            }
            _ => {}
        }
        pos = span.end;
    }
    Ok(None)
}
