use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The data service answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("No data received")]
    NoData,

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
