use diaglog::{Logger, MemoryStreams, debug_log, error_log, out, outln};
use tracing::info;

// The global logger can only be installed once per process, so every check
// against it lives in this single test.
#[test_log::test]
fn test_global_logger_scenarios() {
    let memory = MemoryStreams::new();
    let logger = Logger::with_streams(false, memory.streams());
    diaglog::output::install(logger).expect("first install succeeds");

    info!("Scenario A: disabled debug is silent");
    debug_log!("test");
    assert!(memory.is_silent());

    info!("Scenario B: enabled debug writes the resolved line");
    diaglog::output::set_verbose(true);
    assert!(diaglog::output::is_verbose());
    debug_log!("value={}", 5);
    assert_eq!(memory.diagnostic.take(), "value=5\n");

    info!("Scenario C: error ignores verbosity");
    diaglog::output::set_verbose(false);
    error_log!("failure: {}", "disk full");
    assert_eq!(memory.error.take(), "failure: disk full\n");

    info!("Scenario D: latest flag state wins");
    diaglog::output::set_verbose(true);
    diaglog::output::set_verbose(false);
    debug_log!("x");
    assert!(memory.diagnostic.is_empty());

    info!("Primary output is independent of verbosity");
    out!("result: ");
    outln!("{}", 42);
    diaglog::output::set_verbose(true);
    outln!("again");
    assert_eq!(memory.primary.take(), "result: 42\nagain\n");
    assert!(memory.diagnostic.is_empty());
    assert!(memory.error.is_empty());

    let second = Logger::with_streams(true, MemoryStreams::new().streams());
    let err = diaglog::output::install(second).unwrap_err();
    assert!(err.to_string().contains("already initialized"));
}
