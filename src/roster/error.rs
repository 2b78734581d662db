use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid person record: {0}")]
    Validation(String),

    #[error("Looks like there was a problem. Status Code: {status}")]
    Provider { status: u16 },

    #[error("Fetch error: {0}")]
    Transport(String),

    #[error("Malformed provider payload: {0}")]
    Payload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
