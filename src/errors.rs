use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("HTTP Error: {0}")]
    Http(String),

    #[error("Camera API returned HTTP {status} for {endpoint}")]
    Api { status: u16, endpoint: String },

    #[error("Response Decode Error: {0}")]
    Decode(String),

    #[error("File I/O Error: {0}")]
    Io(String),

    #[error("Snapshot Error: {0}")]
    Snapshot(String),
}

// Allow conversion from std::io::Error to AppError::Io
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}
