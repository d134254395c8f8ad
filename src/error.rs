//! Error types for ehop

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EhopError {
    #[error("Invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not read key file {path}: {source}")]
    KeyFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Key file {path} is in the wrong format: {source}")]
    KeyFileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Key file {0} has no entries")]
    KeyFileEmpty(PathBuf),

    #[error("Key file {0} lists several appliances; pick one with a hostname")]
    KeyFileAmbiguous(PathBuf),

    #[error("No API key for host {0}")]
    UnknownHost(String),
}

pub type Result<T> = std::result::Result<T, EhopError>;
