use crate::core::{LogConfig, Verbosity};
use crate::output::sink::Streams;
use std::fmt;
use std::io;
use tracing::{debug, trace};

/// Leveled emitter over three output channels.
///
/// `debug` is gated by the verbosity flag; `error`, `out` and `outln` always
/// write. Every emitter returns a best-effort status that callers are free to
/// ignore: a failed write never panics and never aborts the process.
#[derive(Debug)]
pub struct Logger {
    verbosity: Verbosity,
    streams: Streams,
}

impl Logger {
    /// Logger writing to the process streams.
    pub fn new(config: LogConfig) -> Self {
        Self::with_streams(config.verbose, Streams::std(&config))
    }

    pub fn with_streams(verbose: bool, streams: Streams) -> Self {
        Self {
            verbosity: Verbosity::new(verbose),
            streams,
        }
    }

    pub fn set_verbose(&self, verbose: bool) {
        debug!(verbose, "Verbosity changed");
        self.verbosity.set(verbose);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity.is_enabled()
    }

    /// Diagnostic line. A no-op unless verbose.
    pub fn debug(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.verbosity.is_enabled() {
            return Ok(());
        }
        report("diagnostic", self.streams.diagnostic.emit(args, true))
    }

    /// Error line, regardless of verbosity.
    pub fn error(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        report("error", self.streams.error.emit(args, true))
    }

    /// Primary output exactly as formatted, no terminator appended.
    pub fn out(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        report("primary", self.streams.primary.emit(args, false))
    }

    /// Primary output followed by a newline.
    pub fn outln(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        report("primary", self.streams.primary.emit(args, true))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

fn report(stream: &'static str, result: io::Result<()>) -> io::Result<()> {
    if let Err(e) = &result {
        trace!(stream, error = %e, "Dropped emission");
    }
    result
}
