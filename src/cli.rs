//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `electro-spec`.
#[derive(Debug, Parser)]
#[command(name = "electro-spec", version, about = "Validate, encode, and decode specification records")]
pub struct Cli {
    /// Contract configuration file (YAML). Falls back to `ELECTRO_SPEC_CONFIG`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a request payload and report every invalid field.
    Validate {
        /// JSON file holding the request fields.
        input: PathBuf,
    },
    /// Validate a request payload and print its wire form.
    Serialize {
        /// JSON file holding the request fields.
        input: PathBuf,
        /// Write the wire form here instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Decode a response payload and print the record.
    Decode {
        /// JSON file holding a service response.
        input: PathBuf,
    },
    /// Send a request to the loopback service and print the decoded reply.
    Exchange {
        /// JSON file holding the request fields.
        input: PathBuf,
    },
}
