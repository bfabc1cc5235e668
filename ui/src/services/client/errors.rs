use thiserror::Error;

/// Errors raised by the registration API client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Registration rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid client configuration: {field} = {value}")]
    InvalidConfiguration { field: String, value: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
