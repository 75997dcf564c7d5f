use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a signature registry
#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Signature has an empty format id")]
    EmptyFormatId,

    #[error("Signature for {0} has an empty pattern")]
    EmptyPattern(String),

    #[error("Invalid hex pattern {pattern:?}: {source}")]
    InvalidHex {
        pattern: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Cannot read signature file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid signature file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while moving a file into its bucket
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Cannot create bucket {path}: {source}")]
    CreateBucket {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that end a check run
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Cannot list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot open {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Cannot write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Check aborted: {0}")]
    Aborted(String),

    #[error("Check worker stopped without a result")]
    WorkerLost,
}
