/// LoRA Stack Error Types
#[derive(Debug, thiserror::Error)]
pub enum LoraStackError {
    /// Entry index outside the current stack bounds
    #[error("Index {index} out of range for stack of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Decode of foreign or corrupt stack encodings
    #[error("Malformed stack encoding: {0}")]
    MalformedEncoding(String),

    /// Catalog endpoint unreachable or unusable
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl LoraStackError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LoraStackError::Config(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        LoraStackError::Validation(msg.into())
    }

    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        LoraStackError::CatalogUnavailable(msg.into())
    }

    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        LoraStackError::MalformedEncoding(msg.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        LoraStackError::IndexOutOfRange { index, len }
    }

    pub fn not_initialized<S: Into<String>>(msg: S) -> Self {
        LoraStackError::config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LoraStackError>;
