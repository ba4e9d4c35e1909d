//! Sample patterns covering every grammar unit the tokenizer recognizes.

/// Patterns built only from supported units, each with its expected token count.
pub const SUPPORTED_PATTERNS: &[(&str, usize)] = &[
    ("^\\d{3}[a-z]+$", 4),
    ("^hello\\s\\d{3}$", 9),
    ("\\bcat\\b", 5),
    ("[A-Z][a-z]*", 2),
    ("(?:ab)+|c?", 3),
    ("(\\d+)-(\\d+)", 3),
    ("(?<=\\$)\\d+(?=\\.)", 3),
    ("a{2,}b{1,3}c{4}", 3),
    ("\\w+@\\w+\\.com", 7),
    ("[^0-9]+", 1),
    ("(?!foo).*", 2),
    ("(?<!x)y", 2),
    ("\\D\\S\\W\\B", 4),
    ("[\\d_-]", 1),
    ("a+?", 2),
    ("((a)(b))", 1),
];

/// Inputs the tokenizer must survive without failing: unterminated classes and groups,
/// stray quantifiers and closers, a lone trailing backslash.
pub const MALFORMED_PATTERNS: &[&str] = &[
    "[abc",
    "(abc",
    "(?:abc",
    "abc)",
    "]",
    "+a",
    "a|*",
    "a{5,3}",
    "a{2,5",
    "x{1,2",
    "{",
    "a{99999999999}",
    "\\",
    "a\\",
    "[",
    "((",
];
