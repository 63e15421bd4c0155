//! CLI argument types for `randoo`.
//!
//! Defined separately from `main.rs` so tests can parse invocations
//! without running anything.

use clap::Parser;

use crate::args::{Delimiters, ShuffleOptions};
use crate::error::RandooError;

const ABOUT: &str = "randomize the order of exec args";

const LONG_ABOUT: &str = "randomize the order of exec args

By default, randoo will call command after shuffling args.
How args are provided and shuffled may be controlled using options.";

/// randoo: shuffle some or all arguments, then exec the command.
#[derive(Parser, Debug)]
#[command(
    name = "randoo",
    version,
    args_override_self = true,
    about = ABOUT,
    long_about = LONG_ABOUT,
    override_usage = "randoo [OPTIONS] [--] <COMMAND> [ARGS]..."
)]
pub struct Cli {
    /// Read input from stdin, one arg per line. Appended after any trailing
    /// args, which are _not_ shuffled.
    #[arg(short = 'l')]
    pub lines: bool,

    /// Shuffle args after the specified arg (start delimiter). If not found,
    /// an error will occur. Not passed.
    #[arg(short = 's', value_name = "TOKEN")]
    pub start: Option<String>,

    /// Shuffle args before the specified arg (end delimiter). If not found,
    /// an error will occur. Not passed.
    #[arg(short = 'e', value_name = "TOKEN")]
    pub end: Option<String>,

    /// Command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Validate and convert into the options the pipeline consumes.
    pub fn into_options(self) -> Result<ShuffleOptions, RandooError> {
        let mut command = self.command.into_iter();
        let program = command
            .next()
            .ok_or_else(|| RandooError::Usage("no command specified".to_string()))?;

        Ok(ShuffleOptions {
            command: program,
            args: command.collect(),
            delimiters: Delimiters::new(self.start, self.end),
            read_lines: self.lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("randoo").chain(argv.iter().copied()))
    }

    #[test]
    fn command_and_args_split() {
        let opts = parse(&["echo", "a", "b"]).unwrap().into_options().unwrap();
        assert_eq!(opts.command, "echo");
        assert_eq!(opts.args, vec!["a", "b"]);
        assert_eq!(opts.delimiters, Delimiters::default());
        assert!(!opts.read_lines);
    }

    #[test]
    fn flags_before_command() {
        let opts = parse(&["-l", "-s", "START", "-e", "END", "--", "cmd", "x"])
            .unwrap()
            .into_options()
            .unwrap();
        assert!(opts.read_lines);
        assert_eq!(opts.delimiters.start(), Some("START"));
        assert_eq!(opts.delimiters.end(), Some("END"));
        assert_eq!(opts.command, "cmd");
        assert_eq!(opts.args, vec!["x"]);
    }

    #[test]
    fn flags_after_command_belong_to_child() {
        let opts = parse(&["ls", "-s", "-l", "--color"])
            .unwrap()
            .into_options()
            .unwrap();
        assert_eq!(opts.command, "ls");
        assert_eq!(opts.args, vec!["-s", "-l", "--color"]);
        assert!(!opts.read_lines);
        assert_eq!(opts.delimiters.start(), None);
    }

    #[test]
    fn missing_command_is_usage_error() {
        let err = parse(&["-s", "X"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = parse(&[]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn repeated_flags_last_wins() {
        let opts = parse(&["-s", "A", "-s", "B", "-e", "X", "-e", "Y", "-l", "-l", "cmd"])
            .unwrap()
            .into_options()
            .unwrap();
        assert_eq!(opts.delimiters.start(), Some("B"));
        assert_eq!(opts.delimiters.end(), Some("Y"));
        assert!(opts.read_lines);
    }

    #[test]
    fn empty_delimiter_is_unset() {
        let opts = parse(&["-s", "", "cmd"]).unwrap().into_options().unwrap();
        assert_eq!(opts.delimiters.start(), None);
    }
}
