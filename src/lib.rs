//! Leveled diagnostic output for command line tools.
//!
//! Three channels: primary output (the tool's result, stdout), errors
//! (stderr) and diagnostics (stderr by default, only when verbose).
//! Use a [`Logger`] directly, or install one globally and use the macros.

#[macro_use]
mod macros;

pub mod core;
pub mod output;

pub use crate::core::{LogConfig, Target, Verbosity};
pub use output::{Logger, MemorySink, MemoryStreams, Sink, StdSink, Streams};
