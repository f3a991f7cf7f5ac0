use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Why a request to the docs API did not produce a usable body
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Status { status: StatusCode },
}

/// Error type for docs consumer operations
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl DocsError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, DocsError::Fetch { .. })
    }

    /// True for undecodable JSON, whether it came from the API or a local file
    pub fn is_parse(&self) -> bool {
        matches!(self, DocsError::Parse { .. } | DocsError::Decode { .. })
    }

    /// HTTP status of a failed fetch, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DocsError::Fetch {
                source: FetchError::Status { status },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

pub type DocsResult<T> = Result<T, DocsError>;
