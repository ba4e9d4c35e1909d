//! Explaining patterns: descriptions, quantifier folding and the print-back round trip

use proptest::prelude::*;
use regexblocks::regexblocks::testing::samples::{MALFORMED_PATTERNS, SUPPORTED_PATTERNS};
use regexblocks::regexblocks::units::{Quantifier, TokenKind};
use regexblocks::{tokenize_regex, tokens_to_regex};
use rstest::rstest;

fn round_trip(pattern: &str) -> String {
    let result = tokenize_regex(pattern);
    tokens_to_regex(Some(&result.tokens))
}

#[test]
fn explains_the_documented_example() {
    let result = tokenize_regex("^\\d{3}[a-z]+$");
    assert!(result.success);
    assert_eq!(result.tokens.len(), 4);
    let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::AnchorStart,
            TokenKind::Digit,
            TokenKind::CharClass,
            TokenKind::AnchorEnd
        ]
    );
    assert_eq!(result.tokens[1].quantifier, Some(Quantifier::Exact { count: 3 }));
    assert_eq!(result.tokens[2].quantifier, Some(Quantifier::Plus));
}

#[rstest]
#[case("^", TokenKind::AnchorStart, "Starts with")]
#[case("$", TokenKind::AnchorEnd, "Ends with")]
#[case("\\d", TokenKind::Digit, "Any digit (0-9)")]
#[case("\\D", TokenKind::Digit, "Any non-digit")]
#[case("\\s", TokenKind::Whitespace, "Any whitespace character")]
#[case("\\S", TokenKind::Whitespace, "Any non-whitespace character")]
#[case("\\w", TokenKind::CharClass, "Any word character (letter, digit, or underscore)")]
#[case("\\W", TokenKind::CharClass, "Any non-word character")]
#[case("\\b", TokenKind::WordBoundary, "Word boundary")]
#[case("\\B", TokenKind::WordBoundary, "Not a word boundary")]
#[case(".", TokenKind::CharClass, "Any character")]
#[case("\\.", TokenKind::Literal, "Literal: .")]
#[case("\\n", TokenKind::Literal, "Literal: n")]
#[case("x", TokenKind::Literal, "Literal: x")]
#[case("|", TokenKind::Literal, "Or")]
#[case("[a-z]", TokenKind::CharClass, "Any lowercase letter")]
#[case("[^0-9]", TokenKind::CharClass, "Any character except digits")]
#[case("(ab)", TokenKind::Group, "Group: ab")]
#[case("(?:ab)", TokenKind::Group, "Non-capturing group: ab")]
#[case("(?=ab)", TokenKind::Group, "Followed by: ab")]
#[case("(?<!ab)", TokenKind::Group, "Not preceded by: ab")]
fn describes_single_units(
    #[case] pattern: &str,
    #[case] kind: TokenKind,
    #[case] description: &str,
) {
    let result = tokenize_regex(pattern);
    assert!(result.success);
    assert_eq!(result.tokens.len(), 1, "{:?}", result.tokens);
    assert_eq!(result.tokens[0].kind, kind);
    assert_eq!(result.tokens[0].description, description);
    assert_eq!(result.tokens[0].raw, pattern);
}

#[rstest]
#[case("a+", Quantifier::Plus, "Literal: a, one or more times")]
#[case("a*", Quantifier::Star, "Literal: a, zero or more times")]
#[case("a?", Quantifier::Optional, "Literal: a, optionally")]
#[case("a{3}", Quantifier::Exact { count: 3 }, "Literal: a, exactly 3 times")]
#[case("a{2,}", Quantifier::Range { min: 2, max: None }, "Literal: a, 2 or more times")]
#[case("a{2,5}", Quantifier::Range { min: 2, max: Some(5) }, "Literal: a, 2 to 5 times")]
fn folds_trailing_quantifiers(
    #[case] pattern: &str,
    #[case] quantifier: Quantifier,
    #[case] description: &str,
) {
    let result = tokenize_regex(pattern);
    assert_eq!(result.tokens.len(), 1);
    let token = &result.tokens[0];
    assert_eq!(token.raw, pattern);
    assert_eq!(token.quantifier, Some(quantifier));
    assert_eq!(token.description, description);
}

#[test]
fn supported_samples_have_expected_token_counts() {
    for (pattern, count) in SUPPORTED_PATTERNS {
        let result = tokenize_regex(pattern);
        assert!(result.success, "{:?} failed: {:?}", pattern, result.error);
        assert_eq!(result.tokens.len(), *count, "{:?}: {:?}", pattern, result.tokens);
        assert_eq!(tokens_to_regex(Some(&result.tokens)), *pattern);
    }
}

#[test]
fn malformed_samples_degrade_without_failing() {
    for pattern in MALFORMED_PATTERNS {
        let result = tokenize_regex(pattern);
        assert!(result.success, "{:?} failed: {:?}", pattern, result.error);
        assert_eq!(round_trip(pattern), *pattern);
    }
}

#[rstest]
#[case("a{2,5", 5)]
#[case("x{1,2", 5)]
#[case("{", 1)]
#[case("b{7,", 4)]
fn unclosed_repetitions_read_char_by_char(#[case] pattern: &str, #[case] count: usize) {
    let result = tokenize_regex(pattern);
    assert!(result.success);
    assert_eq!(result.tokens.len(), count, "{:?}", result.tokens);
    for token in &result.tokens {
        assert_eq!(token.kind, TokenKind::Literal);
        assert_eq!(token.raw.chars().count(), 1);
        assert_eq!(token.description, format!("Literal: {}", token.raw));
    }
}

#[test]
fn absent_token_list_prints_empty_pattern() {
    assert_eq!(tokens_to_regex(None), "");
    assert_eq!(tokens_to_regex(Some(&[])), "");
}

#[test]
fn token_json_shape() {
    let result = tokenize_regex("\\d{3}");
    let json = serde_json::to_value(&result).expect("result to serialize");
    assert_eq!(json["success"], true);
    assert_eq!(json["tokens"][0]["kind"], "DIGIT");
    assert_eq!(json["tokens"][0]["raw"], "\\d{3}");
    assert_eq!(json["tokens"][0]["quantifier"]["type"], "exact");
    assert_eq!(json["tokens"][0]["quantifier"]["count"], 3);
    assert!(json.get("error").is_none());
}

/// Units the tokenizer recognizes, each optionally followed by quantifier syntax.
fn supported_unit() -> impl Strategy<Value = String> {
    let base = prop_oneof![
        Just("a"),
        Just("Z"),
        Just("7"),
        Just("\\d"),
        Just("\\s"),
        Just("\\w"),
        Just("\\b"),
        Just("\\."),
        Just("."),
        Just("[a-z]"),
        Just("[^0-9_]"),
        Just("(ab)"),
        Just("(?:x|y)"),
        Just("(?=q)"),
        Just("(?<!r)"),
        Just("^"),
        Just("$"),
        Just("|"),
    ];
    let suffix = prop_oneof![
        Just(""),
        Just("+"),
        Just("*"),
        Just("?"),
        Just("{2}"),
        Just("{1,3}"),
        Just("{2,}"),
        Just("+?"),
    ];
    (base, suffix).prop_map(|(base, suffix)| format!("{}{}", base, suffix))
}

proptest! {
    #[test]
    fn supported_patterns_round_trip(
        units in proptest::collection::vec(supported_unit(), 0..10)
    ) {
        let pattern = units.concat();
        let result = tokenize_regex(&pattern);
        prop_assert!(result.success);
        prop_assert!(result.tokens.iter().all(|t| !t.raw.is_empty()));
        prop_assert_eq!(tokens_to_regex(Some(&result.tokens)), pattern);
    }

    #[test]
    fn any_input_round_trips(pattern in "\\PC{0,32}") {
        let result = tokenize_regex(&pattern);
        prop_assert!(result.success);
        prop_assert_eq!(tokens_to_regex(Some(&result.tokens)), pattern);
    }

    #[test]
    fn metacharacter_soup_round_trips(pattern in "[\\\\^$.|?*+(){}\\[\\]a0,:=!<-]{0,24}") {
        prop_assert_eq!(round_trip(&pattern), pattern);
    }
}
