use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use diaglog::core::log::init_tracing;
use diaglog::{LogConfig, Logger, Target, debug_log, error_log, outln};
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable diagnostic output
    #[arg(short, long, visible_short_alias = 'd', visible_alias = "debug", global = true)]
    verbose: bool,

    /// Stream that receives diagnostic output
    #[arg(long, value_enum, default_value_t = Target::Stderr, global = true)]
    diagnostic_stream: Target,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the given words as primary output
    Echo { words: Vec<String> },
    /// Report an error and exit with a failure status
    Fail { message: String },
    /// Print numbered lines as primary output
    Stream { count: usize },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing();

    let config = LogConfig::default()
        .with_verbose(cli.verbose)
        .with_diagnostic(cli.diagnostic_stream);
    let logger = diaglog::output::install(Logger::new(config))?;

    match cli.command {
        Some(Commands::Echo { words }) => {
            debug_log!(logger: logger, "echo: {} word(s)", words.len());
            outln!(logger: logger, "{}", words.join(" "));
        }
        Some(Commands::Fail { message }) => {
            debug_log!(logger: logger, "fail: reporting error");
            error_log!(logger: logger, "error: {message}");
            return Ok(ExitCode::FAILURE);
        }
        Some(Commands::Stream { count }) => {
            for i in 1..=count {
                debug_log!("stream: line {i} of {count}");
                outln!("{i}");
            }
        }
        None => {
            // A closed stdout is as silent here as it is for `outln!`.
            if let Err(e) = Cli::command().print_help()
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                return Err(e.into());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
