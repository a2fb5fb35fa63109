use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextkitError {
    #[error("No hexadecimal digits found in input")]
    EmptyResult,

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Unknown character class: {0}")]
    UnknownCharClass(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TextkitError>;
