//! Command-line parsing.

use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "\
Linearly extruded fonts to show letter frequency in text.

Usage: alphafreq <FILE>

Arguments:
  <FILE>  Any file containing text, e.g. Gettysburg.txt

Options:
  -h, --help  Print this help";

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(PathBuf),
    Help,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing required argument <FILE>")]
    MissingInput,
    #[error("unexpected argument {0:?}")]
    Unexpected(OsString),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut input = None;
    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        }
        // Anything else that looks like a flag is rejected; "-" alone is a path.
        let is_flag = arg.to_str().is_some_and(|s| s.starts_with('-') && s.len() > 1);
        if is_flag || input.is_some() {
            return Err(CliError::Unexpected(arg));
        }
        input = Some(PathBuf::from(arg));
    }
    input.map(Command::Run).ok_or(CliError::MissingInput)
}
