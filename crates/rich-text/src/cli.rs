//! Logic behind the `rich-text` binary.
//!
//! The first operand is always read from stdin as JSON; the remaining ones
//! come from the command line:
//!
//! - `compose <delta>` / `apply <delta>`: stdin composed with `<delta>`
//! - `diff <document>`: change from the stdin document to `<document>`
//! - `transform <delta> [left|right]`: `<delta>` rebased onto stdin
//! - `transform-position <index> [left|right]`: cursor mapped through stdin
//! - `slice <start> [<end>]`
//! - `length`

use serde_json::Value;
use tracing::debug;

use crate::codec::json::{from_str, to_string};
use crate::delta::Delta;
use crate::error::DeltaError;
use crate::ot_type::Side;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Delta(DeltaError),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Delta(e) => write!(f, "{e}"),
            CliError::Usage(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DeltaError> for CliError {
    fn from(e: DeltaError) -> Self {
        CliError::Delta(e)
    }
}

// ── Commands ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Compose,
    Diff,
    Transform,
    TransformPosition,
    Slice,
    Length,
}

impl std::str::FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compose" | "apply" => Ok(Command::Compose),
            "diff" => Ok(Command::Diff),
            "transform" => Ok(Command::Transform),
            "transform-position" => Ok(Command::TransformPosition),
            "slice" => Ok(Command::Slice),
            "length" => Ok(Command::Length),
            other => Err(CliError::Usage(format!("Unknown command: {other}"))),
        }
    }
}

pub const USAGE: &str = "usage: rich-text <compose|apply|diff|transform|transform-position|slice|length> [args...] < input.json";

fn arg<'a>(args: &'a [String], i: usize, what: &str) -> Result<&'a str, CliError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("missing argument: {what}")))
}

fn number(s: &str, what: &str) -> Result<usize, CliError> {
    s.parse()
        .map_err(|_| CliError::Usage(format!("{what} must be a non-negative integer")))
}

fn side(args: &[String], i: usize) -> Result<Side, CliError> {
    match args.get(i) {
        Some(s) => Ok(s.parse()?),
        None => Ok(Side::Left),
    }
}

/// Run `command` with `input` as the stdin operand, returning the JSON to print.
pub fn run(command: Command, input: &str, args: &[String]) -> Result<String, CliError> {
    debug!(?command, args = args.len(), "running command");
    let base: Delta = from_str(input)?;
    let out = match command {
        Command::Compose => {
            let other = from_str(arg(args, 0, "delta")?)?;
            to_string(&base.compose(&other))
        }
        Command::Diff => {
            let other = from_str(arg(args, 0, "document")?)?;
            to_string(&base.diff(&other)?)
        }
        Command::Transform => {
            let other = from_str(arg(args, 0, "delta")?)?;
            let priority = side(args, 1)? == Side::Left;
            to_string(&base.transform(&other, priority))
        }
        Command::TransformPosition => {
            let index = number(arg(args, 0, "index")?, "index")?;
            let priority = side(args, 1)? == Side::Left;
            Value::from(base.transform_position(index, priority)).to_string()
        }
        Command::Slice => {
            let start = number(arg(args, 0, "start")?, "start")?;
            let sliced = match args.get(1) {
                Some(end) => base.slice(start, number(end, "end")?),
                None => base.slice_from(start),
            };
            to_string(&sliced)
        }
        Command::Length => Value::from(base.length()).to_string(),
    };
    Ok(out)
}
