//! Character class scanning and summaries
//!
//!     A class runs from `[` to the first `]` that is not escaped. Its body is summarized
//!     by listing its members: the common ranges `a-z`, `A-Z` and `0-9` get names, other
//!     ranges read "x to y", shorthand escapes read as what they match, and single
//!     characters are listed as themselves. A leading `^` turns the summary into an
//!     exclusion.
//!
//!         [a-z]        Any lowercase letter
//!         [a-zA-Z_]    Any of: lowercase letters, uppercase letters, _
//!         [^0-9]       Any character except digits

use super::base_tokenization::{lexeme_at, Lexeme};
use super::tokenizer::TokenizeError;

/// Find the end (exclusive) of the class whose `[` sits at `open`.
///
/// Returns `Ok(None)` when the class is never closed.
pub fn scan_class(pattern: &str, open: usize) -> Result<Option<usize>, TokenizeError> {
    let mut pos = open + 1;
    while let Some((lexeme, span)) = lexeme_at(pattern, pos)? {
        if lexeme == Lexeme::ClassClose {
            return Ok(Some(span.end));
        }
        pos = span.end;
    }
    Ok(None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassItem {
    Range(char, char),
    Shorthand(char),
    Single(char),
}

impl ClassItem {
    /// Description when this item is the whole class.
    fn alone(self) -> Option<&'static str> {
        match self {
            ClassItem::Range('a', 'z') => Some("Any lowercase letter"),
            ClassItem::Range('A', 'Z') => Some("Any uppercase letter"),
            ClassItem::Range('0', '9') => Some("Any digit (0-9)"),
            _ => None,
        }
    }

    /// Description as one entry of a listing.
    fn listed(self) -> String {
        match self {
            ClassItem::Range('a', 'z') => "lowercase letters".to_string(),
            ClassItem::Range('A', 'Z') => "uppercase letters".to_string(),
            ClassItem::Range('0', '9') => "digits".to_string(),
            ClassItem::Range(from, to) => format!("{} to {}", from, to),
            ClassItem::Shorthand(ch) => shorthand_name(ch).to_string(),
            ClassItem::Single(' ') => "space".to_string(),
            ClassItem::Single(ch) => ch.to_string(),
        }
    }
}

fn is_shorthand(ch: char) -> bool {
    matches!(ch, 'd' | 'D' | 'w' | 'W' | 's' | 'S')
}

fn shorthand_name(ch: char) -> &'static str {
    match ch {
        'd' => "digits",
        'D' => "non-digits",
        'w' => "word characters",
        'W' => "non-word characters",
        's' => "whitespace",
        _ => "non-whitespace",
    }
}

/// One member at `i`: the character it stands for, how many chars it spans, and whether
/// it was escaped.
fn member_at(chars: &[char], i: usize) -> (char, usize, bool) {
    if chars[i] == '\\' && i + 1 < chars.len() {
        (chars[i + 1], 2, true)
    } else {
        (chars[i], 1, false)
    }
}

fn parse_items(body: &str) -> Vec<ClassItem> {
    let chars: Vec<char> = body.chars().collect();
    let mut items = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (ch, width, escaped) = member_at(&chars, i);
        if escaped && is_shorthand(ch) {
            items.push(ClassItem::Shorthand(ch));
            i += width;
            continue;
        }

        let dash = i + width;
        if dash + 1 < chars.len() && chars[dash] == '-' {
            let (to, to_width, to_escaped) = member_at(&chars, dash + 1);
            if !(to_escaped && is_shorthand(to)) {
                items.push(ClassItem::Range(ch, to));
                i = dash + 1 + to_width;
                continue;
            }
        }

        items.push(ClassItem::Single(ch));
        i += width;
    }

    items
}

/// Summarize a class body (the text between the brackets).
pub fn describe_class(body: &str) -> String {
    let (negated, members) = match body.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let items = parse_items(members);

    if items.is_empty() {
        return if negated {
            "Any character".to_string()
        } else {
            "Empty character class".to_string()
        };
    }

    if !negated && items.len() == 1 {
        if let Some(alone) = items[0].alone() {
            return alone.to_string();
        }
    }

    let listing = items
        .iter()
        .map(|item| item.listed())
        .collect::<Vec<_>>()
        .join(", ");
    if negated {
        format!("Any character except {}", listing)
    } else {
        format!("Any of: {}", listing)
    }
}
