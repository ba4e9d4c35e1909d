//! Configuration loader for the regexblocks tools.
//!
//! `defaults/regexblocks.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. Callers layer user files and single-key
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`RegexBlocksConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/regexblocks.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegexBlocksConfig {
    pub matching: MatchingConfig,
    pub explain: ExplainConfig,
    pub logging: LoggingConfig,
}

/// Which evaluator runs patterns, and its limits.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    pub engine: MatchEngine,
    pub backtrack_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchEngine {
    Backtracking,
    Standard,
}

impl MatchEngine {
    pub const ALL: [MatchEngine; 2] = [MatchEngine::Backtracking, MatchEngine::Standard];

    /// Name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchEngine::Backtracking => "backtracking",
            MatchEngine::Standard => "standard",
        }
    }
}

impl fmt::Display for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchEngine::ALL
            .into_iter()
            .find(|engine| engine.as_str() == s)
            .ok_or_else(|| format!("Unknown engine '{}' (available: backtracking, standard)", s))
    }
}

/// Controls how explanations and results are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainConfig {
    pub format: ExplainFormat,
    pub show_raw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplainFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `warn` or `regexblocks=debug`.
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Force the matching engine, whatever the layered files say.
    pub fn with_engine(self, engine: MatchEngine) -> Result<Self, ConfigError> {
        self.set_override("matching.engine", engine.as_str())
    }

    /// Force the backtracking step budget.
    pub fn with_backtrack_limit(self, limit: usize) -> Result<Self, ConfigError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.set_override("matching.backtrack_limit", limit)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RegexBlocksConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RegexBlocksConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.matching.engine, MatchEngine::Backtracking);
        assert_eq!(config.matching.backtrack_limit, 1_000_000);
        assert_eq!(config.explain.format, ExplainFormat::Text);
        assert!(config.explain.show_raw);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("matching.engine", "standard")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.matching.engine, MatchEngine::Standard);
    }

    #[test]
    fn typed_overrides_win_over_files() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[matching]\nengine = \"standard\"\nbacktrack_limit = 10")
            .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .with_engine(MatchEngine::Backtracking)
            .expect("engine override")
            .with_backtrack_limit(500)
            .expect("limit override")
            .build()
            .expect("config to build");
        assert_eq!(config.matching.engine, MatchEngine::Backtracking);
        assert_eq!(config.matching.backtrack_limit, 500);
    }

    #[test]
    fn engine_names_round_trip() {
        for engine in MatchEngine::ALL {
            assert_eq!(engine.as_str().parse::<MatchEngine>(), Ok(engine));
        }
        assert!("pcre".parse::<MatchEngine>().is_err());
        assert_eq!(MatchEngine::Standard.to_string(), "standard");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[explain]\nformat = \"json\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.explain.format, ExplainFormat::Json);
        assert!(config.explain.show_raw);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/regexblocks.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/regexblocks.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.matching.engine, MatchEngine::Backtracking);
    }

    #[test]
    fn rejects_unknown_engine() {
        let result = Loader::new()
            .set_override("matching.engine", "pcre")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
