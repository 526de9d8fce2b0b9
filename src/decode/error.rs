use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to parse JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON object at the document root, found {0}")]
    NotAnObject(String),
}
