use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API credentials are not configured")]
    NotConfigured,

    #[error("API request failed with status {status}")]
    Api { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error executing code in page: {0}")]
    Exec(String),
}

impl Error {
    /// True when the failure can be resolved by the user filling in their
    /// provider settings, as opposed to a request that was actually
    /// attempted and failed.
    pub fn needs_settings(&self) -> bool {
        matches!(self, Error::NotConfigured)
    }

    /// HTTP status carried by an `Api` failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status } => Some(*status),
            _ => None,
        }
    }
}
