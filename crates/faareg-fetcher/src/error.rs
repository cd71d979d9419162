use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("couldn't query the FAA registration page at {url}: {reason}")]
    UnableToQuery { url: String, reason: String },

    #[error("N-number not assigned: {identifier}")]
    NotAssigned { identifier: String },

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    pub(crate) fn unable_to_query(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::UnableToQuery {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
