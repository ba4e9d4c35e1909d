//! Terminal renderings of tokenize and match results.

use super::detokenizer::tokens_to_regex;
use crate::regexblocks::units::{MatchResult, TokenizeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown format '{}' (available: text, json)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// One numbered card per token, then the pattern rebuilt from the tokens.
///
/// With `show_raw` off, cards carry only descriptions.
pub fn render_explanation(result: &TokenizeResult, show_raw: bool) -> String {
    let mut out = String::new();
    let width = result
        .tokens
        .iter()
        .map(|t| t.raw.chars().count())
        .max()
        .unwrap_or(0);

    for (index, token) in result.tokens.iter().enumerate() {
        if show_raw {
            out.push_str(&format!(
                "{:>3}. {:<width$}  {}\n",
                index + 1,
                token.raw,
                token.description,
                width = width
            ));
        } else {
            out.push_str(&format!("{:>3}. {}\n", index + 1, token.description));
        }
    }

    if let Some(error) = &result.error {
        out.push_str(&format!("Error: {}\n", error));
    }
    out.push_str(&format!(
        "Reconstructed: {}\n",
        tokens_to_regex(Some(&result.tokens))
    ));
    out
}

/// Match count followed by one line per match with its offsets.
pub fn render_matches(result: &MatchResult) -> String {
    if let Some(error) = &result.error {
        return format!("Error: {}\n", error);
    }

    let mut out = match result.matches.len() {
        1 => "1 match\n".to_string(),
        n => format!("{} matches\n", n),
    };
    for m in &result.matches {
        out.push_str(&format!("  [{}..{}] {:?}\n", m.start, m.end, m.text));
    }
    out
}

/// Pretty JSON in the boundary shape.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regexblocks::lexing::tokenize_regex;
    use crate::regexblocks::units::Match;

    #[test]
    fn test_explanation_cards() {
        let result = tokenize_regex("^\\d{3}[a-z]+$");
        insta::assert_snapshot!(render_explanation(&result, true), @r"
          1. ^       Starts with
          2. \d{3}   Any digit (0-9), exactly 3 times
          3. [a-z]+  Any lowercase letter, one or more times
          4. $       Ends with
        Reconstructed: ^\d{3}[a-z]+$
        ");
    }

    #[test]
    fn test_explanation_without_raw() {
        let result = tokenize_regex("a|b");
        insta::assert_snapshot!(render_explanation(&result, false), @r"
          1. Literal: a
          2. Or
          3. Literal: b
        Reconstructed: a|b
        ");
    }

    #[test]
    fn test_explanation_of_empty_pattern() {
        let result = tokenize_regex("");
        assert_eq!(render_explanation(&result, true), "Reconstructed: \n");
    }

    #[test]
    fn test_render_matches() {
        let result = MatchResult::ok(vec![Match::new("123", 3, 6), Match::new("456", 9, 12)]);
        insta::assert_snapshot!(render_matches(&result), @r#"
        2 matches
          [3..6] "123"
          [9..12] "456"
        "#);
    }

    #[test]
    fn test_render_match_failure() {
        let result = MatchResult::failed("unclosed group");
        assert_eq!(render_matches(&result), "Error: unclosed group\n");
    }

    #[test]
    fn test_single_match_wording() {
        let result = MatchResult::ok(vec![Match::new("a", 0, 1)]);
        assert!(render_matches(&result).starts_with("1 match\n"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
