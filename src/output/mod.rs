//! Emitters and the streams they write to

pub mod global;
pub mod logger;
pub mod sink;

pub use global::{global, install, is_verbose, set_verbose};
pub use logger::Logger;
pub use sink::{MemorySink, MemoryStreams, Sink, StdSink, Streams};
