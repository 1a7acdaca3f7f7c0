use crate::output::logger::Logger;
use anyhow::{Result, bail};
use std::sync::OnceLock;
use tracing::debug;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger used by the context-free macro forms.
///
/// Must run before the first emission through the global logger. Fails if a
/// logger is already installed, including the default one created lazily by
/// [`global`].
pub fn install(logger: Logger) -> Result<&'static Logger> {
    let mut installed = false;
    let global = GLOBAL.get_or_init(|| {
        installed = true;
        logger
    });
    if !installed {
        bail!("global logger is already initialized");
    }
    debug!(verbose = global.is_verbose(), "Installed global logger");
    Ok(global)
}

/// The process-wide logger, created with defaults on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

pub fn set_verbose(verbose: bool) {
    global().set_verbose(verbose);
}

pub fn is_verbose() -> bool {
    global().is_verbose()
}
