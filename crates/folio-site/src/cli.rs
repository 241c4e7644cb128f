#![forbid(unsafe_code)]

//! Command-line argument parsing for the site generator.
//!
//! Parses args manually to keep the binary lean. Environment variables with
//! the `FOLIO_` prefix set defaults; explicit flags override them.

use std::env;
use std::fmt;
use std::path::PathBuf;

use folio_extras::contact::DEFAULT_ENDPOINT;
use folio_extras::logging::{LogConfig, LogFormat};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
folio-site: static generator for the portfolio and blog

USAGE:
    folio-site [OPTIONS]

OPTIONS:
    --out=DIR            Output directory (default: dist)
    --assets=DIR         Directory holding static assets such as the resume (default: public)
    --endpoint=URL       Contact form endpoint (default: the hosted form service)
    --route=PATH         Render one route to stdout instead of the whole site
    --log=FILTER         Log filter directives, e.g. 'folio_site=debug' (default: info)
    --json-logs          Emit logs as JSON lines on stderr
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    FOLIO_OUT            Override --out
    FOLIO_ASSETS         Override --assets
    FOLIO_ENDPOINT       Override --endpoint
    FOLIO_LOG            Override --log
    FOLIO_JSON_LOGS      Set to 1/true to enable --json-logs

EXIT CODES:
    0  success
    1  generation failed
    2  usage error";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Where generated pages are written.
    pub out: PathBuf,
    /// Where static assets are copied from.
    pub assets: PathBuf,
    /// Contact form `action`.
    pub endpoint: String,
    /// Render only this path, to stdout.
    pub route: Option<String>,
    /// `EnvFilter` directives.
    pub log: Option<String>,
    pub json_logs: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            out: PathBuf::from("dist"),
            assets: PathBuf::from("public"),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            route: None,
            log: None,
            json_logs: false,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    UnknownArgument(String),
    /// A `--flag=` was given without a value.
    MissingValue(&'static str),
    /// An environment variable held something other than a boolean.
    InvalidBool { var: &'static str, value: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            Self::MissingValue(flag) => write!(f, "{flag} requires a value, e.g. {flag}=VALUE"),
            Self::InvalidBool { var, value } => {
                write!(f, "{var} must be a boolean (1/0, true/false), got {value:?}")
            }
        }
    }
}

impl std::error::Error for CliError {}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, CliError> {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Parse `args` (without the program name) with `lookup` standing in for
    /// the environment.
    pub fn parse_from<I, S, F>(args: I, lookup: F) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment first; flags below override.
        if let Some(val) = lookup("FOLIO_OUT").filter(|v| !v.is_empty()) {
            opts.out = PathBuf::from(val);
        }
        if let Some(val) = lookup("FOLIO_ASSETS").filter(|v| !v.is_empty()) {
            opts.assets = PathBuf::from(val);
        }
        if let Some(val) = lookup("FOLIO_ENDPOINT").filter(|v| !v.is_empty()) {
            opts.endpoint = val;
        }
        if let Some(val) = lookup("FOLIO_LOG").filter(|v| !v.is_empty()) {
            opts.log = Some(val);
        }
        if let Some(val) = lookup("FOLIO_JSON_LOGS") {
            opts.json_logs = parse_bool(&val).ok_or(CliError::InvalidBool {
                var: "FOLIO_JSON_LOGS",
                value: val,
            })?;
        }

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--json-logs" => opts.json_logs = true,
                other => {
                    if let Some(val) = other.strip_prefix("--out=") {
                        opts.out = PathBuf::from(non_empty(val, "--out")?);
                    } else if let Some(val) = other.strip_prefix("--assets=") {
                        opts.assets = PathBuf::from(non_empty(val, "--assets")?);
                    } else if let Some(val) = other.strip_prefix("--endpoint=") {
                        opts.endpoint = non_empty(val, "--endpoint")?.to_owned();
                    } else if let Some(val) = other.strip_prefix("--route=") {
                        opts.route = Some(non_empty(val, "--route")?.to_owned());
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log = Some(non_empty(val, "--log")?.to_owned());
                    } else if let Some(flag) = VALUE_FLAGS.iter().find(|f| other == **f) {
                        return Err(CliError::MissingValue(*flag));
                    } else {
                        return Err(CliError::UnknownArgument(other.to_owned()));
                    }
                }
            }
        }
        Ok(Command::Run(opts))
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            filter: self.log.clone(),
            format: if self.json_logs {
                LogFormat::Json
            } else {
                LogFormat::Plain
            },
            ..LogConfig::default()
        }
    }
}

const VALUE_FLAGS: &[&str] = &["--out", "--assets", "--endpoint", "--route", "--log"];

fn non_empty<'a>(val: &'a str, flag: &'static str) -> Result<&'a str, CliError> {
    if val.is_empty() {
        Err(CliError::MissingValue(flag))
    } else {
        Ok(val)
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
