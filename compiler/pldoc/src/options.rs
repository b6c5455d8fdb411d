//! Command-line options.
//!
//! Flags accept the single-dash spelling (`-ext pks`), the double-dash
//! spelling (`--ext pks`), and the `=` form (`-ext=pks`). Everything that
//! does not start with `-` is a root to scan.

use std::path::PathBuf;

use crate::DriverError;

pub const USAGE: &str = "\
Usage: pldoc [options] <dir-or-file>...

Generate HTML documentation for PL/SQL package specifications.

Options:
  -ext <ext>        Extension of specification files (default: pks)
  -output <dir>     Output directory (default: .)
  -o <dir>          Same as -output
  -v, --verbose     Log progress to stderr
  -h, --help        Show this help

Set RUST_LOG (for example RUST_LOG=pldoc_parse=trace) for detailed logs.
";

/// Options for one documentation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// File extension without the dot.
    pub ext: String,
    /// Directory the site is written to.
    pub output: PathBuf,
    /// Files and directories to scan.
    pub roots: Vec<PathBuf>,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            ext: "pks".to_string(),
            output: PathBuf::from("."),
            roots: Vec::new(),
            verbose: false,
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, DriverError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if !arg.starts_with('-') || arg == "-" {
            options.roots.push(PathBuf::from(arg));
            continue;
        }

        let (flag, mut inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg, None),
        };
        let mut value = |flag: &str| {
            inline
                .take()
                .or_else(|| args.next())
                .ok_or_else(|| DriverError::MissingValue {
                    flag: flag.to_string(),
                })
        };

        match flag.as_str() {
            "-ext" | "--ext" => {
                let ext = value(&flag)?;
                options.ext = ext.trim_start_matches('.').to_string();
            }
            "-output" | "--output" | "-o" => options.output = PathBuf::from(value(&flag)?),
            "-v" | "--verbose" => options.verbose = true,
            "-h" | "-help" | "--help" => return Ok(Command::Help),
            other => return Err(DriverError::UnknownOption(other.to_string())),
        }
    }

    if options.roots.is_empty() {
        return Err(DriverError::NoInput);
    }
    Ok(Command::Run(options))
}
