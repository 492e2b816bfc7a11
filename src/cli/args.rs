//! CLI argument definitions using clap
//!
//! Commands:
//! - camara validate <KIND> [--input <path>]
//! - camara error <CODE> [--message <text>]
//! - camara describe <KIND>
//! - camara correlator

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::TypeKind;
use crate::error::ErrorCode;

/// camara - validate CAMARA common data types and render error envelopes
#[derive(Parser, Debug)]
#[command(name = "camara")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON document as the given type
    Validate {
        /// Type name, e.g. `device`, `point-list`, `error-info`
        kind: TypeKind,

        /// Read the document from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print the standard error envelope for an error code
    Error {
        /// Error code, e.g. `INVALID_ARGUMENT`
        code: ErrorCode,

        /// Override the default message
        #[arg(long)]
        message: Option<String>,
    },

    /// Print a type's description, fields and example
    Describe {
        kind: TypeKind,
    },

    /// Print a freshly generated x-correlator
    Correlator,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["camara", "validate", "point-list", "--input", "in.json"])
            .unwrap();
        match cli.command {
            Command::Validate { kind, input } => {
                assert_eq!(kind, TypeKind::PointList);
                assert_eq!(input, Some(PathBuf::from("in.json")));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_error_with_global_config() {
        let cli = Cli::try_parse_from([
            "camara",
            "error",
            "NOT_FOUND",
            "--message",
            "gone",
            "--config",
            "camara.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("camara.json")));
        match cli.command {
            Command::Error { code, message } => {
                assert_eq!(code, ErrorCode::NotFound);
                assert_eq!(message.as_deref(), Some("gone"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(Cli::try_parse_from(["camara", "describe", "gps"]).is_err());
        assert!(Cli::try_parse_from(["camara", "error", "TEAPOT"]).is_err());
    }
}
