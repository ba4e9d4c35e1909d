//! Terse constructors for blocks and tokens.

use crate::regexblocks::units::{
    Block, BlockKind, Quantifier, Repeat, SimpleRepeat, Token, TokenKind,
};

pub fn start() -> Block {
    Block::new(BlockKind::Start)
}

pub fn end() -> Block {
    Block::new(BlockKind::End)
}

pub fn whitespace() -> Block {
    Block::new(BlockKind::Whitespace)
}

pub fn text(value: &str) -> Block {
    Block::new(BlockKind::Text {
        value: value.to_string(),
    })
}

pub fn digit(count: u32) -> Block {
    Block::new(BlockKind::Digit { count })
}

pub fn optional(content: &str) -> Block {
    Block::new(BlockKind::Optional {
        content: content.to_string(),
    })
}

pub fn one_or_more(content: &str) -> Block {
    Block::new(BlockKind::OneOrMore {
        content: content.to_string(),
    })
}

pub fn zero_or_more(content: &str) -> Block {
    Block::new(BlockKind::ZeroOrMore {
        content: content.to_string(),
    })
}

pub fn char_class(value: &str, quantifier: Repeat, min: Option<u32>, max: Option<u32>) -> Block {
    Block::new(BlockKind::CharacterClass {
        value: value.to_string(),
        quantifier,
        min,
        max,
    })
}

pub fn word(quantifier: SimpleRepeat) -> Block {
    Block::new(BlockKind::Word { quantifier })
}

pub fn any_char(quantifier: SimpleRepeat) -> Block {
    Block::new(BlockKind::AnyChar { quantifier })
}

pub fn group(content: &str, quantifier: Repeat, min: Option<u32>, max: Option<u32>) -> Block {
    Block::new(BlockKind::Group {
        content: content.to_string(),
        quantifier,
        min,
        max,
    })
}

/// Token without a quantifier.
pub fn mk_token(kind: TokenKind, raw: &str, description: &str) -> Token {
    Token::new(kind, raw, description)
}

/// Token with a quantifier already folded in; `raw` and `description` are the full values.
pub fn mk_quantified(
    kind: TokenKind,
    raw: &str,
    description: &str,
    quantifier: Quantifier,
) -> Token {
    Token {
        kind,
        raw: raw.to_string(),
        description: description.to_string(),
        quantifier: Some(quantifier),
    }
}
