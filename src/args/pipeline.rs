//! Pipeline: ties all argument processing stages together.

use std::io::BufRead;

use rand::Rng;

use crate::args::assembler::ArgAssembler;
use crate::args::lines::read_lines;
use crate::args::segment::segment;
use crate::args::ShuffleOptions;
use crate::error::RandooError;

/// Ready-to-use parameters for spawning the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnParams {
    /// Program to execute.
    pub command: String,
    /// Final argument list, delimiters consumed and segments shuffled.
    pub args: Vec<String>,
}

/// Build spawn parameters from validated options.
///
/// In line mode `input` is read to end-of-stream and the lines are
/// segmented; the positional arguments pass through untouched and come
/// first. Otherwise the positional arguments are segmented and `input` is
/// never read.
pub fn build_spawn_params<I, R>(
    options: &ShuffleOptions,
    input: I,
    rng: &mut R,
) -> Result<SpawnParams, RandooError>
where
    I: BufRead,
    R: Rng + ?Sized,
{
    let args = if options.read_lines {
        // Stage 1: Read stdin
        let lines = read_lines(input).map_err(RandooError::ReadInput)?;
        tracing::debug!(count = lines.len(), "read argument lines");

        // Stage 2: Segment and shuffle the lines only
        let lines = segment(lines, &options.delimiters, rng)?;

        // Stage 3: Assemble
        ArgAssembler::new()
            .with_positional(options.args.clone())
            .with_lines(lines)
            .build()
    } else {
        let positional = segment(options.args.clone(), &options.delimiters, rng)?;
        ArgAssembler::new().with_positional(positional).build()
    };

    tracing::debug!(command = %options.command, ?args, "assembled arguments");

    Ok(SpawnParams {
        command: options.command.clone(),
        args,
    })
}
