//! Verbosity state and logger configuration

pub mod config;
pub mod log;
pub mod verbosity;

// Re-export main types for cleaner imports
pub use config::{LogConfig, Target};
pub use verbosity::Verbosity;
