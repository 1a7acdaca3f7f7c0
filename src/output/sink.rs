use crate::core::{LogConfig, Target};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A destination for emitted text.
///
/// One call is one message: implementations hold their lock for the whole
/// write so concurrent emitters never interleave inside a line.
pub trait Sink: Send + Sync {
    fn emit(&self, args: fmt::Arguments<'_>, newline: bool) -> io::Result<()>;
}

fn write_message<W: Write>(
    writer: &mut W,
    args: fmt::Arguments<'_>,
    newline: bool,
) -> io::Result<()> {
    writer.write_fmt(args)?;
    if newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Process stdout or stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdSink(pub Target);

impl Sink for StdSink {
    fn emit(&self, args: fmt::Arguments<'_>, newline: bool) -> io::Result<()> {
        match self.0 {
            Target::Stdout => write_message(&mut io::stdout().lock(), args, newline),
            Target::Stderr => write_message(&mut io::stderr().lock(), args, newline),
        }
    }
}

/// Shared in-memory buffer. Clones write to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Drains the buffer.
    pub fn take(&self) -> String {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        let drained = std::mem::take(&mut *buffer);
        String::from_utf8_lossy(&drained).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Sink for MemorySink {
    fn emit(&self, args: fmt::Arguments<'_>, newline: bool) -> io::Result<()> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        write_message(&mut *buffer, args, newline)
    }
}

/// The three output channels a [`crate::Logger`] writes to.
#[derive(Clone)]
pub struct Streams {
    pub primary: Arc<dyn Sink>,
    pub diagnostic: Arc<dyn Sink>,
    pub error: Arc<dyn Sink>,
}

impl Streams {
    pub fn new(primary: Arc<dyn Sink>, diagnostic: Arc<dyn Sink>, error: Arc<dyn Sink>) -> Self {
        Self {
            primary,
            diagnostic,
            error,
        }
    }

    /// Primary to stdout, errors to stderr, diagnostics wherever `config` says.
    pub fn std(config: &LogConfig) -> Self {
        Self::new(
            Arc::new(StdSink(Target::Stdout)),
            Arc::new(StdSink(config.diagnostic)),
            Arc::new(StdSink(Target::Stderr)),
        )
    }
}

impl fmt::Debug for Streams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Streams").finish_non_exhaustive()
    }
}

/// Separate in-memory buffers for each channel.
#[derive(Debug, Clone, Default)]
pub struct MemoryStreams {
    pub primary: MemorySink,
    pub diagnostic: MemorySink,
    pub error: MemorySink,
}

impl MemoryStreams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streams(&self) -> Streams {
        Streams::new(
            Arc::new(self.primary.clone()),
            Arc::new(self.diagnostic.clone()),
            Arc::new(self.error.clone()),
        )
    }

    /// True when no channel has received a single byte.
    pub fn is_silent(&self) -> bool {
        self.primary.is_empty() && self.diagnostic.is_empty() && self.error.is_empty()
    }
}
