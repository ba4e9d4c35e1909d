//! Command-line interface for regexblocks
//! Compile block lists into patterns, explain patterns token by token, and try patterns
//! against sample text.
//!
//! Usage:
//!   regexblocks compile `<file>`                        - Compile a JSON/YAML block list ('-' for stdin)
//!   regexblocks explain `<pattern>` [--format `<fmt>`]    - Describe each token of a pattern
//!   regexblocks match `<pattern>` `<text>` [--format `<fmt>`] - List matches with offsets
//!
//! Global options: --config `<file>` layers a TOML file over the defaults (./regexblocks.toml
//! is read when present), --engine picks the matching engine.

use clap::{Arg, ArgAction, ArgMatches, Command};
use regexblocks::regexblocks::formats::{render_explanation, render_matches, to_json, OutputFormat};
use regexblocks::regexblocks::lexing::tokenize_regex;
use regexblocks::regexblocks::matching::{Engine, Matcher};
use regexblocks::regexblocks::sequence::BlockSequence;
use regexblocks_config::{ConfigError, ExplainFormat, Loader, MatchEngine, RegexBlocksConfig};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "regexblocks.toml";

#[derive(Debug)]
enum CliError {
    Io(String, std::io::Error),
    BlockFile(String),
    Config(ConfigError),
    Json(serde_json::Error),
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, err) => write!(f, "Could not read {}: {}", path, err),
            CliError::BlockFile(msg) => write!(f, "Invalid block list: {}", msg),
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Json(err) => write!(f, "Could not format output: {}", err),
            CliError::Usage(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: 'text' or 'json' (default from configuration)")
}

fn cli() -> Command {
    Command::new("regexblocks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build, explain and test regular expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("engine")
                .long("engine")
                .short('e')
                .global(true)
                .value_parser(["backtracking", "standard"])
                .help("Matching engine"),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a block list (JSON or YAML) into a pattern")
                .arg(
                    Arg::new("path")
                        .help("Block list file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("explain")
                .about("Describe a pattern token by token")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern to explain")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg())
                .arg(
                    Arg::new("no-raw")
                        .long("no-raw")
                        .help("Show descriptions only")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("match")
                .about("List every match of a pattern in a sample text")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern to run")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("text")
                        .help("Sample text")
                        .required_unless_present("text-file")
                        .index(2),
                )
                .arg(
                    Arg::new("text-file")
                        .long("text-file")
                        .short('t')
                        .conflicts_with("text")
                        .help("Read the sample text from a file"),
                )
                .arg(format_arg()),
        )
}

fn main() {
    let matches = cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config.logging.level);

    let outcome = match matches.subcommand() {
        Some(("compile", sub)) => handle_compile_command(sub, &config),
        Some(("explain", sub)) => handle_explain_command(sub, &config),
        Some(("match", sub)) => handle_match_command(sub, &config),
        _ => unreachable!(),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<RegexBlocksConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(name) = matches.get_one::<String>("engine") {
        let engine = name.parse::<MatchEngine>().map_err(CliError::Usage)?;
        loader = loader.with_engine(engine)?;
    }
    Ok(loader.build()?)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(matches: &ArgMatches, config: &RegexBlocksConfig) -> Result<OutputFormat, CliError> {
    match matches.get_one::<String>("format") {
        Some(name) => name.parse().map_err(CliError::Usage),
        None => Ok(match config.explain.format {
            ExplainFormat::Text => OutputFormat::Text,
            ExplainFormat::Json => OutputFormat::Json,
        }),
    }
}

fn matcher(config: &RegexBlocksConfig) -> Matcher {
    let engine = match config.matching.engine {
        MatchEngine::Backtracking => Engine::Backtracking,
        MatchEngine::Standard => Engine::Standard,
    };
    Matcher::new(engine).with_backtrack_limit(config.matching.backtrack_limit)
}

fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| CliError::Io("stdin".to_string(), e))?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|e| CliError::Io(path.to_string(), e))
}

fn parse_blocks(path: &str, source: &str) -> Result<BlockSequence, CliError> {
    let is_yaml = matches!(
        Path::new(path).extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(source).map_err(|e| CliError::BlockFile(e.to_string()))
    } else {
        serde_json::from_str(source).map_err(|e| CliError::BlockFile(e.to_string()))
    }
}

/// Handle the compile command
fn handle_compile_command(matches: &ArgMatches, config: &RegexBlocksConfig) -> Result<bool, CliError> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let source = read_source(path)?;
    let sequence = parse_blocks(path, &source)?;
    let pattern = sequence.compile();
    tracing::debug!(blocks = sequence.len(), %pattern, "compiled block list");

    match output_format(matches, config)? {
        OutputFormat::Text => println!("{}", pattern),
        OutputFormat::Json => println!("{}", to_json(&serde_json::json!({ "pattern": pattern }))?),
    }
    Ok(true)
}

/// Handle the explain command
fn handle_explain_command(matches: &ArgMatches, config: &RegexBlocksConfig) -> Result<bool, CliError> {
    let pattern = matches
        .get_one::<String>("pattern")
        .expect("pattern is required");
    let show_raw = config.explain.show_raw && !matches.get_flag("no-raw");
    let result = tokenize_regex(pattern);

    match output_format(matches, config)? {
        OutputFormat::Text => print!("{}", render_explanation(&result, show_raw)),
        OutputFormat::Json => println!("{}", to_json(&result)?),
    }
    Ok(result.success)
}

/// Handle the match command
fn handle_match_command(matches: &ArgMatches, config: &RegexBlocksConfig) -> Result<bool, CliError> {
    let pattern = matches
        .get_one::<String>("pattern")
        .expect("pattern is required");
    let text = match matches.get_one::<String>("text-file") {
        Some(path) => read_source(path)?,
        None => matches
            .get_one::<String>("text")
            .cloned()
            .unwrap_or_default(),
    };

    let result = matcher(config).find(pattern, &text);
    match output_format(matches, config)? {
        OutputFormat::Text => print!("{}", render_matches(&result)),
        OutputFormat::Json => println!("{}", to_json(&result)?),
    }
    Ok(result.success)
}
