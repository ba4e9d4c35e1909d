//! Pattern matcher
//!
//!     Runs a pattern over sample text and reports every non-overlapping match, left to
//!     right, with its offsets. Matching itself is delegated to an evaluator crate; this
//!     module only adapts its results and its failures into a [`MatchResult`].
//!
//! Engines
//!
//!     Two evaluators are available:
//!         - Backtracking (fancy-regex): look-around and back-references, the closest to a
//!           browser's evaluator. Runaway backtracking is cut off by a step budget and
//!           reported as a failure.
//!         - Standard (regex): linear time, no look-around.
//!
//!     Offsets are UTF-8 code unit offsets, which is what both evaluators report; for every
//!     match `text[start..end]` is the matched text. Zero-length matches are allowed and
//!     the evaluators advance past them, so matches never overlap.

use crate::regexblocks::units::{Match, MatchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// fancy-regex's own default budget.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Compiled program size allowed to either evaluator. Several capped `\d{n}` blocks in one
/// pattern overrun the evaluators' 10 MiB default.
pub const PATTERN_SIZE_LIMIT: usize = 64 << 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    #[default]
    Backtracking,
    Standard,
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtracking" => Ok(Engine::Backtracking),
            "standard" => Ok(Engine::Standard),
            other => Err(format!(
                "Unknown engine '{}' (available: backtracking, standard)",
                other
            )),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Backtracking => f.write_str("backtracking"),
            Engine::Standard => f.write_str("standard"),
        }
    }
}

/// Errors raised by an evaluator. Turned into failed results at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The evaluator rejected the pattern.
    Compile(String),
    /// The evaluator gave up while matching, e.g. on an exhausted backtrack budget.
    Execution(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Compile(msg) => write!(f, "Invalid pattern: {}", msg),
            MatchError::Execution(msg) => write!(f, "Matching failed: {}", msg),
        }
    }
}

impl std::error::Error for MatchError {}

impl From<regex::Error> for MatchError {
    fn from(err: regex::Error) -> Self {
        MatchError::Compile(err.to_string())
    }
}

/// A pattern accepted by one of the evaluators.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    Standard(regex::Regex),
    Backtracking(fancy_regex::Regex),
}

impl CompiledPattern {
    /// Every non-overlapping match in `text`, left to right.
    pub fn find_all(&self, text: &str) -> Result<Vec<Match>, MatchError> {
        match self {
            CompiledPattern::Standard(regex) => Ok(regex
                .find_iter(text)
                .map(|m| Match::new(m.as_str(), m.start(), m.end()))
                .collect()),
            CompiledPattern::Backtracking(regex) => {
                let mut out = Vec::new();
                for found in regex.find_iter(text) {
                    let found = found.map_err(|e| MatchError::Execution(e.to_string()))?;
                    out.push(Match::new(found.as_str(), found.start(), found.end()));
                }
                Ok(out)
            }
        }
    }
}

/// Matcher settings. Holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    engine: Engine,
    backtrack_limit: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher::new(Engine::default())
    }
}

impl Matcher {
    pub fn new(engine: Engine) -> Self {
        Matcher {
            engine,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }

    /// Step budget for the backtracking engine; ignored by the standard one.
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn compile(&self, pattern: &str) -> Result<CompiledPattern, MatchError> {
        match self.engine {
            Engine::Standard => {
                let regex = regex::RegexBuilder::new(pattern)
                    .size_limit(PATTERN_SIZE_LIMIT)
                    .build()?;
                Ok(CompiledPattern::Standard(regex))
            }
            Engine::Backtracking => {
                let regex = fancy_regex::RegexBuilder::new(pattern)
                    .backtrack_limit(self.backtrack_limit)
                    .delegate_size_limit(PATTERN_SIZE_LIMIT)
                    .build()
                    .map_err(|e| MatchError::Compile(e.to_string()))?;
                Ok(CompiledPattern::Backtracking(regex))
            }
        }
    }

    /// Find every match of `pattern` in `text`. Never panics; failures come back as data.
    pub fn find(&self, pattern: &str, text: &str) -> MatchResult {
        if pattern.is_empty() {
            return MatchResult::ok(Vec::new());
        }

        let compiled = match self.compile(pattern) {
            Ok(compiled) => compiled,
            Err(err) => {
                debug!(pattern, engine = %self.engine, error = %err, "pattern rejected");
                return MatchResult::failed(err.to_string());
            }
        };

        if text.is_empty() {
            return MatchResult::ok(Vec::new());
        }

        match compiled.find_all(text) {
            Ok(matches) => MatchResult::ok(matches),
            Err(err) => {
                debug!(pattern, engine = %self.engine, error = %err, "matching aborted");
                MatchResult::failed(err.to_string())
            }
        }
    }
}

/// Find every match of `pattern` in `text` with the default matcher.
pub fn find_matches(pattern: &str, text: &str) -> MatchResult {
    Matcher::default().find(pattern, text)
}

/// Check whether the default evaluator accepts `pattern`.
pub fn is_valid_pattern(pattern: &str) -> Result<(), String> {
    Matcher::default()
        .compile(pattern)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_digits_example() {
        assert_eq!(
            find_matches("\\d+", "abc123def456"),
            MatchResult::ok(vec![Match::new("123", 3, 6), Match::new("456", 9, 12)])
        );
    }

    #[test]
    fn test_empty_pattern_matches_nothing() {
        assert_eq!(find_matches("", "anything"), MatchResult::ok(Vec::new()));
    }

    #[test]
    fn test_empty_pattern_is_not_compiled() {
        // An empty pattern short-circuits before compilation, even for a matcher whose
        // engine would otherwise be asked.
        assert!(Matcher::new(Engine::Standard).find("", "x").success);
    }

    #[rstest(engine => [Engine::Backtracking, Engine::Standard])]
    fn test_invalid_pattern_fails_gracefully(engine: Engine) {
        let result = Matcher::new(engine).find("(abc", "abc");
        assert!(!result.success);
        assert!(result.matches.is_empty());
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Invalid pattern: ")));
    }

    #[test]
    fn test_invalid_pattern_with_empty_text_still_fails() {
        assert!(!find_matches("[", "").success);
    }

    #[test]
    fn test_empty_text_with_valid_pattern() {
        assert_eq!(find_matches("a*", ""), MatchResult::ok(Vec::new()));
    }

    #[rstest(engine => [Engine::Backtracking, Engine::Standard])]
    fn test_zero_length_matches_advance(engine: Engine) {
        let result = Matcher::new(engine).find("x*", "ab");
        assert!(result.success);
        let spans: Vec<(usize, usize)> = result.matches.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(spans, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_offsets_are_byte_offsets() {
        let text = "héllo wörld";
        let result = find_matches("w\\w+", text);
        let m = &result.matches[0];
        assert_eq!(m.text, "wörld");
        assert_eq!(&text[m.start..m.end], "wörld");
        assert_eq!(m.start, 7);
    }

    #[test]
    fn test_lookaround_needs_backtracking_engine() {
        let pattern = "(?<=\\$)\\d+";
        let text = "cost: $42, 17";
        assert_eq!(
            Matcher::new(Engine::Backtracking).find(pattern, text).matches,
            vec![Match::new("42", 7, 9)]
        );
        assert!(!Matcher::new(Engine::Standard).find(pattern, text).success);
    }

    #[test]
    fn test_backtrack_limit_reports_execution_failure() {
        let result = Matcher::new(Engine::Backtracking)
            .with_backtrack_limit(10)
            .find("(a+)+\\1b", "aaaaaaaaaaaaaaaaaaaaaaaac");
        assert!(!result.success);
        assert!(result.matches.is_empty());
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Matching failed: ")));
    }

    #[rstest(engine => [Engine::Backtracking, Engine::Standard])]
    fn test_large_capped_repetitions_compile(engine: Engine) {
        let pattern = "\\d{100}".repeat(10);
        assert!(Matcher::new(engine).compile(&pattern).is_ok());
    }

    #[test]
    fn test_is_valid_pattern() {
        assert!(is_valid_pattern("^a+$").is_ok());
        assert!(is_valid_pattern("a{2,1}").is_err());
    }

    #[test]
    fn test_engine_parsing() {
        assert_eq!("standard".parse::<Engine>(), Ok(Engine::Standard));
        assert!("pcre".parse::<Engine>().is_err());
        assert_eq!(Engine::Backtracking.to_string(), "backtracking");
    }
}
