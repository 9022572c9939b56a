use std::fmt;
use std::path::PathBuf;

use services::{AnswerPolicy, ContentSource};

pub const CONTENT_ENV: &str = "ASSESSMENT_CONTENT";
pub const POLICY_ENV: &str = "ASSESSMENT_POLICY";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPolicy { raw: String },
    EmptyContentPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPolicy { raw } => {
                write!(f, "invalid policy {raw:?}, expected `all` or `any`")
            }
            ArgsError::EmptyContentPath => write!(f, "content path cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  assessment [--content <path.json>] [--policy all|any]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --content  built-in manufacturing survey");
    eprintln!("  --policy   all  (every question must be answered)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {CONTENT_ENV}, {POLICY_ENV}, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub content: ContentSource,
    pub policy: AnswerPolicy,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_content(raw: String) -> Result<ContentSource, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::EmptyContentPath);
    }
    Ok(ContentSource::File(PathBuf::from(trimmed)))
}

fn parse_policy(raw: String) -> Result<AnswerPolicy, ArgsError> {
    match raw.trim() {
        "all" => Ok(AnswerPolicy::AllQuestions),
        "any" => Ok(AnswerPolicy::AtLeastOne),
        _ => Err(ArgsError::InvalidPolicy { raw }),
    }
}

impl Command {
    /// Parse CLI arguments (without the program name), falling back to `env`
    /// for anything not given on the command line.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut content = env(CONTENT_ENV)
            .map(parse_content)
            .transpose()?
            .unwrap_or_default();
        let mut policy = env(POLICY_ENV)
            .map(parse_policy)
            .transpose()?
            .unwrap_or_default();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => content = parse_content(require_value(&mut args, "--content")?)?,
                "--policy" => policy = parse_policy(require_value(&mut args, "--policy")?)?,
                "--help" | "-h" => return Ok(Self::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self::Run(Args { content, policy }))
    }
}
