//! Argument handling pipeline for randoo.
//!
//! ```text
//! Options → (Read lines) → Segment/Shuffle → Assemble → SpawnParams
//! ```
//!
//! Each stage is a plain function over owned vectors and an explicit
//! random generator, so every stage can be unit-tested with a seeded RNG.

mod assembler;
mod lines;
mod pipeline;
mod segment;
mod shuffle;

pub use assembler::ArgAssembler;
pub use lines::read_lines;
pub use pipeline::{build_spawn_params, SpawnParams};
pub use segment::{segment, Delimiters, SegmentMode};
pub use shuffle::{shuffle, Entropy};

/// Validated invocation options, as produced by the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleOptions {
    /// Program to run.
    pub command: String,
    /// Arguments given after the program on the command line.
    pub args: Vec<String>,
    /// Segment boundaries.
    pub delimiters: Delimiters,
    /// Append stdin lines as extra arguments.
    pub read_lines: bool,
}
