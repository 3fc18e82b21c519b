#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("access token is not a valid header value")]
    InvalidToken,

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status} for {path}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {path} at {location}: {message}")]
    Decode {
        path: String,
        location: String,
        message: String,
    },
}

impl ClientError {
    /// HTTP status returned by the backend, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
