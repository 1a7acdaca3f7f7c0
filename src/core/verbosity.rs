use std::sync::atomic::{AtomicBool, Ordering};

/// Read-mostly switch for diagnostic output.
///
/// Usually set once during startup from a `--verbose` style flag. It may be
/// flipped later; the new value applies to the very next emission.
#[derive(Debug, Default)]
pub struct Verbosity {
    enabled: AtomicBool,
}

impl Verbosity {
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}
