//! randoo: randomize the order of exec args, then run the command.
//!
//! The argument list is cut into segments by optional start/end delimiter
//! tokens ([`args`]), the chosen segments are shuffled with a
//! cryptographically seeded generator, and the result is executed by a
//! [`process::Supervisor`] that relays signals to the child and mirrors
//! its exit status.

pub mod args;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod process;

pub use error::RandooError;
