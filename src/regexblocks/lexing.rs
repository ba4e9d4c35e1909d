//! Pattern tokenizer
//!
//!     Explains an existing pattern by splitting it into tokens, each paired with a
//!     plain-language description. The scan is a forward-only automaton over a byte cursor
//!     into the pattern; at every position it recognizes one base unit, then looks ahead
//!     for a trailing quantifier and folds it into the unit's token.
//!
//! Lexemes
//!
//!     Recognition of the smallest pieces (an escape pair, a group opener such as `(?<=`,
//!     a `{n,m}` repetition, a single character) is done by a logos lexer. See
//!     [base_tokenization](base_tokenization). The lexer is restarted at the cursor
//!     on every step, so a unit that fails to close can fall back to one-character
//!     literals and scanning resumes in the middle of what the lexer first saw as one
//!     lexeme.
//!
//! Recognition Order
//!
//!     At each position, in order:
//!         1. Anchors `^` and `$`.
//!         2. Escapes `\X`: shorthand classes, word boundaries, otherwise a literal `X`.
//!         3. Character classes `[...]` up to the first unescaped `]`.
//!            See [classes](classes).
//!         4. Groups `(...)`, closed by depth counting. Escaped parentheses and
//!            parentheses inside character classes do not count.
//!         5. Alternation `|`. It never takes a quantifier.
//!         6. `.`
//!         7. Quantifier syntax with nothing before it to repeat.
//!         8. Any other single character, as a literal.
//!
//! Recognition Misses
//!
//!     An unterminated class or group, or a `{n,m}` that is not a valid repetition, is
//!     not an error. Its opening lexeme degrades into one literal token per character and
//!     scanning continues right after. Every step consumes at least one character, so the
//!     scan always finishes.
//!
//!     The whole scan runs inside a `Result`; an internal fault (a cursor that lands
//!     outside the pattern or inside a character, or a step that fails to advance) ends
//!     the scan with `success: false` and the tokens produced so far.

pub mod base_tokenization;
pub mod classes;
pub mod descriptions;
pub mod quantifiers;
pub mod tokenizer;

pub use base_tokenization::Lexeme;
pub use tokenizer::{tokenize_regex, TokenizeError};
