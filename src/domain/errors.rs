use derive_more::Display;

/// Simplified error system - one enum for the whole frontend.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// Request could not be sent or the connection dropped.
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    /// Server answered with a non-2xx status.
    #[display(fmt = "HTTP Error: {} {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn http_status(status: u16, status_text: impl Into<String>) -> Self {
        Self::HttpStatus { status, status_text: status_text.into() }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
