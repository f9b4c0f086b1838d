//! Error model
//!
//! Every failure the pipeline can hit maps to exactly one process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_OK: u8 = 0;

/// Exit code when an explicit `--path` does not exist
pub const EXIT_PATH_NOT_FOUND: u8 = 2;

/// Exit code when no candidate file was found by searching
pub const EXIT_NOT_FOUND: u8 = 3;

/// Exit code for any load, parse or snapshot failure
pub const EXIT_LOAD_FAILED: u8 = 4;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("File not found at provided path: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Could not find '{name}' under {}. Use --path to specify location.", .root.display())]
    SearchExhausted { name: String, root: PathBuf },

    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("'{encoding}' codec can't decode byte 0x{byte:02x} in position {position}")]
    Encoding {
        encoding: String,
        byte: u8,
        position: usize,
    },

    #[error("No columns to parse from file")]
    EmptyData,

    #[error("Error tokenizing data. Expected {expected} fields in line {line}, saw {found}")]
    Tokenize {
        expected: usize,
        line: u64,
        found: usize,
    },

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0:#}")]
    Snapshot(anyhow::Error),

    /// Writing the report to stdout failed
    #[error("{0}")]
    Report(#[source] std::io::Error),
}

impl LoaderError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            LoaderError::PathNotFound(_) => EXIT_PATH_NOT_FOUND,
            LoaderError::SearchExhausted { .. } => EXIT_NOT_FOUND,
            _ => EXIT_LOAD_FAILED,
        }
    }

    /// Whether the report reader went away (e.g. `loader | head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, LoaderError::Report(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// One-line diagnostic printed to stdout before exiting
    pub fn report_line(&self) -> String {
        match self {
            LoaderError::PathNotFound(_) | LoaderError::SearchExhausted { .. } => self.to_string(),
            LoaderError::Snapshot(_) => format!("Error writing snapshot: {}", self),
            LoaderError::Report(_) => format!("Error writing report: {}", self),
            _ => format!("Error loading CSV: {}", self),
        }
    }
}
