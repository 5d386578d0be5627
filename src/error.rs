use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AcclinkError {
    #[error("failed to read input file at {0}")]
    InputRead(PathBuf),

    #[error("failed to write output file at {0}")]
    OutputWrite(PathBuf),

    #[error("input error: {0}")]
    InputIo(String),

    #[error("output error: {0}")]
    OutputIo(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
