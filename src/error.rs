// Error types shared by the store, validator and transfer executor.
// None of these are fatal: the menu prints them and goes back to the main
// screen. Only a failing console read ends the program.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    ConfigWrite {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    ConfigSerialize(#[from] serde_json::Error),

    #[error("Remote IP and username must be configured first.")]
    MissingSettings,

    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("{stderr}")]
    TransferFailed { code: Option<i32>, stderr: String },
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("console error: {0}")]
    Prompt(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
