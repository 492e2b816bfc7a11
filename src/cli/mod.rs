//! CLI for the `camara` binary
//!
//! Provides command-line access to:
//! - validate: check a JSON document against a data type
//! - error: render a standard error envelope
//! - describe: print type documentation
//! - correlator: generate an x-correlator

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{correlator, describe, error, evaluate, run_command, validate, Config, Rejection};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{
    error_envelope, parse_document, read_input, success_envelope, write_error, write_json,
    write_response,
};

use crate::observability::{log_event, Event, Logger};

/// Parse arguments, load configuration and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = Config::resolve(cli.config.as_deref())?;
    Logger::set_min_severity(config.severity()?);
    log_event(Event::ConfigLoaded, &[("log_level", config.log_level.as_str())]);

    let result = run_command(cli.command, &config);
    if let Err(e) = &result {
        if e.code() != CliErrorCode::Rejected {
            log_event(Event::CommandFailed, &[("code", e.code_str()), ("message", e.message())]);
        }
    }
    result
}
