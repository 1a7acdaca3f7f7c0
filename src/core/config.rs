use clap::ValueEnum;

/// Physical stream an emitter writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Target {
    Stdout,
    #[default]
    Stderr,
}

/// Logger settings, owned by whoever parses the command line.
///
/// Primary output always goes to stdout and errors always go to stderr.
/// Only the diagnostic stream is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    pub verbose: bool,
    pub diagnostic: Target,
}

impl LogConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_diagnostic(mut self, target: Target) -> Self {
        self.diagnostic = target;
        self
    }
}
