use response::MissingField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to connect to the NeuroSwitch API: {0}")]
    Communication(#[from] CommunicationError),

    #[error("Malformed NeuroSwitch response: {0}")]
    MalformedResponse(String),
}

/// Why the request never produced a usable reply.
#[derive(Debug, Error)]
pub enum CommunicationError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote rejected the request with status {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Communication(CommunicationError::Transport(err))
    }
}

impl From<MissingField> for Error {
    fn from(err: MissingField) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
