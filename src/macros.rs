//! Format-checked call surfaces.
//!
//! Each macro takes either an explicit logger (`logger: &log, "fmt", args..`)
//! or just the format arguments, in which case the global logger is used.
//! The status of the write is discarded.

/// Diagnostic line, emitted only when verbose.
///
/// The verbosity check happens before the arguments are evaluated, so a
/// disabled call does no formatting work at all.
///
/// ```
/// use diaglog::{Logger, MemoryStreams, debug_log};
///
/// let memory = MemoryStreams::new();
/// let logger = Logger::with_streams(true, memory.streams());
/// debug_log!(logger: &logger, "value={}", 5);
/// assert_eq!(memory.diagnostic.contents(), "value=5\n");
/// ```
#[macro_export]
macro_rules! debug_log {
    (logger: $logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        if logger.is_verbose() {
            let _ = logger.debug(::std::format_args!($($arg)+));
        }
    }};
    ($($arg:tt)+) => {
        $crate::debug_log!(logger: $crate::output::global(), $($arg)+)
    };
}

/// Error line, always emitted.
#[macro_export]
macro_rules! error_log {
    (logger: $logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let _ = logger.error(::std::format_args!($($arg)+));
    }};
    ($($arg:tt)+) => {
        $crate::error_log!(logger: $crate::output::global(), $($arg)+)
    };
}

/// Primary output, always emitted, no newline appended.
#[macro_export]
macro_rules! out {
    (logger: $logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let _ = logger.out(::std::format_args!($($arg)+));
    }};
    ($($arg:tt)+) => {
        $crate::out!(logger: $crate::output::global(), $($arg)+)
    };
}

/// Primary output line, always emitted.
#[macro_export]
macro_rules! outln {
    (logger: $logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let _ = logger.outln(::std::format_args!($($arg)+));
    }};
    (logger: $logger:expr) => {{
        let logger: &$crate::Logger = $logger;
        let _ = logger.outln(::std::format_args!(""));
    }};
    ($($arg:tt)+) => {
        $crate::outln!(logger: $crate::output::global(), $($arg)+)
    };
    () => {
        $crate::outln!(logger: $crate::output::global())
    };
}

#[cfg(test)]
mod tests {
    use crate::{Logger, MemoryStreams};
    use std::cell::Cell;

    #[test]
    fn test_disabled_debug_skips_argument_evaluation() {
        let memory = MemoryStreams::new();
        let logger = Logger::with_streams(false, memory.streams());
        let evaluated = Cell::new(0);
        let expensive = || {
            evaluated.set(evaluated.get() + 1);
            "payload"
        };

        debug_log!(logger: &logger, "{}", expensive());
        assert_eq!(evaluated.get(), 0);
        assert!(memory.is_silent());

        logger.set_verbose(true);
        debug_log!(logger: &logger, "{}", expensive());
        assert_eq!(evaluated.get(), 1);
        assert_eq!(memory.diagnostic.contents(), "payload\n");
    }

    #[test]
    fn test_explicit_logger_forms() {
        let memory = MemoryStreams::new();
        let logger = Logger::with_streams(false, memory.streams());
        let name = "disk";

        out!(logger: &logger, "{name}: ");
        outln!(logger: &logger, "{}%", 93);
        outln!(logger: &logger);
        error_log!(logger: &logger, "failure: {} full", name);

        assert_eq!(memory.primary.contents(), "disk: 93%\n\n");
        assert_eq!(memory.error.contents(), "failure: disk full\n");
        assert!(memory.diagnostic.is_empty());
    }
}
