//! Block compiler
//!
//!     Folds an ordered block sequence into a pattern string. Each block maps to a fixed
//!     fragment and fragments are concatenated in sequence order; nothing is reordered or
//!     merged.
//!
//!         Start                 ^
//!         End                   $
//!         Whitespace            \s
//!         Digit(n)              \d{n}            (n clamped to 1..=MAX_REPEAT)
//!         Text(v)               v, metacharacters escaped
//!         Optional(c)           c? or (?:c)?     (c escaped, grouped when longer than one char)
//!         OneOrMore(c)          c+ or (?:c)+
//!         ZeroOrMore(c)         c* or (?:c)*
//!         CharacterClass(v, q)  [v]<q>           (nothing when v is empty)
//!         Word(q)               \w<q>
//!         AnyChar(q)            .<q>
//!         Group(c, q)           (?:c)<q>         (c inserted raw)
//!
//!     Degenerate field values are normalized instead of rejected, so compiling never fails.
//!     Repetition counts are capped at [`MAX_REPEAT`]; larger counts blow past the
//!     evaluators' compiled program size.
//!     Character class values and group contents are user-authored pattern text and are
//!     passed through untouched; everything else the compiler emits is always accepted by
//!     the matcher.

use crate::regexblocks::units::{Block, BlockKind, Repeat};

/// Characters escaped by [`escape_text`].
const METACHARACTERS: &[char] = &[
    '\\', '^', '$', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|',
];

/// Largest repetition count the compiler emits.
pub const MAX_REPEAT: u32 = 100;

/// Compile blocks into a pattern string. Empty input gives an empty pattern.
pub fn compile_blocks_to_regex(blocks: &[Block]) -> String {
    let mut pattern = String::new();
    for block in blocks {
        push_block(&mut pattern, &block.kind);
    }
    pattern
}

/// Escape every pattern metacharacter in `value` with a preceding backslash.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if METACHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn push_block(pattern: &mut String, kind: &BlockKind) {
    match kind {
        BlockKind::Start => pattern.push('^'),
        BlockKind::End => pattern.push('$'),
        BlockKind::Whitespace => pattern.push_str("\\s"),
        BlockKind::Digit { count } => {
            let count = (*count).clamp(1, MAX_REPEAT);
            pattern.push_str(&format!("\\d{{{}}}", count));
        }
        BlockKind::Text { value } => pattern.push_str(&escape_text(value)),
        BlockKind::Optional { content } => push_repeated_text(pattern, content, '?'),
        BlockKind::OneOrMore { content } => push_repeated_text(pattern, content, '+'),
        BlockKind::ZeroOrMore { content } => push_repeated_text(pattern, content, '*'),
        BlockKind::CharacterClass {
            value,
            quantifier,
            min,
            max,
        } => {
            // `[]` is rejected by the evaluators; an unset class contributes nothing.
            if value.is_empty() {
                return;
            }
            pattern.push('[');
            pattern.push_str(value);
            pattern.push(']');
            pattern.push_str(&repeat_suffix(*quantifier, *min, *max));
        }
        BlockKind::Word { quantifier } => {
            pattern.push_str("\\w");
            pattern.push_str(&repeat_suffix((*quantifier).into(), None, None));
        }
        BlockKind::AnyChar { quantifier } => {
            pattern.push('.');
            pattern.push_str(&repeat_suffix((*quantifier).into(), None, None));
        }
        BlockKind::Group {
            content,
            quantifier,
            min,
            max,
        } => {
            pattern.push_str("(?:");
            pattern.push_str(content);
            pattern.push(')');
            pattern.push_str(&repeat_suffix(*quantifier, *min, *max));
        }
    }
}

/// Escaped content followed by `operator`, grouped so the operator covers all of it.
fn push_repeated_text(pattern: &mut String, content: &str, operator: char) {
    // A bare operator would have nothing to repeat.
    if content.is_empty() {
        return;
    }
    let escaped = escape_text(content);
    if content.chars().count() > 1 {
        pattern.push_str("(?:");
        pattern.push_str(&escaped);
        pattern.push(')');
    } else {
        pattern.push_str(&escaped);
    }
    pattern.push(operator);
}

/// Quantifier syntax for a block repetition. Range bounds default to `min = 1`, a `max`
/// below `min` is raised to `min`, and both are capped at [`MAX_REPEAT`].
pub fn repeat_suffix(repeat: Repeat, min: Option<u32>, max: Option<u32>) -> String {
    match repeat {
        Repeat::One => String::new(),
        Repeat::OneOrMore => "+".to_string(),
        Repeat::ZeroOrMore => "*".to_string(),
        Repeat::Optional => "?".to_string(),
        Repeat::Range => {
            let min = min.unwrap_or(1).min(MAX_REPEAT);
            match max {
                Some(max) => format!("{{{},{}}}", min, max.clamp(min, MAX_REPEAT)),
                None => format!("{{{},}}", min),
            }
        }
    }
}
