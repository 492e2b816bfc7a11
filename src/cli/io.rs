//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: one JSON object on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ErrorInfo;

use super::errors::{CliError, CliResult};

/// Read the raw input text from `path`, or from stdin when absent.
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?,
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }
    Ok(text)
}

/// Parse input text as a JSON document.
pub fn parse_document(text: &str) -> CliResult<Value> {
    serde_json::from_str(text)
        .map_err(|e| CliError::malformed_input(format!("Malformed JSON: {}", e)))
}

pub fn success_envelope(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

pub fn error_envelope(info: &ErrorInfo) -> CliResult<Value> {
    Ok(json!({
        "status": "error",
        "error": serde_json::to_value(info)?
    }))
}

/// Write a success response to stdout
pub fn write_response(data: Value, pretty: bool) -> CliResult<()> {
    write_json(&success_envelope(data), pretty)
}

/// Write an error response to stdout
pub fn write_error(info: &ErrorInfo, pretty: bool) -> CliResult<()> {
    write_json(&error_envelope(info)?, pretty)
}

/// Write any serializable value to stdout as one JSON document
pub fn write_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
