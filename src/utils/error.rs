use thiserror::Error;

#[derive(Error, Debug)]
pub enum PexelsError {
    #[error("Pexels API responded with status {status}")]
    StatusError { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing API key: environment variable {var} is not set")]
    MissingApiKeyError { var: String },

    #[error("Invalid API key: {message}")]
    InvalidApiKeyError { message: String },

    #[error("Search query has no term")]
    MissingSearchTermError,

    #[error("Unknown topic: {name}")]
    UnknownTopicError { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PexelsError {
    /// HTTP status the request failed with, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            PexelsError::StatusError { status } => Some(*status),
            PexelsError::ApiError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PexelsError::StatusError { status: 401 | 403 } => {
                "Check that the API key is valid for api.pexels.com"
            }
            PexelsError::StatusError { status: 429 } => {
                "Rate limit reached, wait before sending more requests"
            }
            PexelsError::StatusError { .. } => "Check the request parameters and try again",
            PexelsError::ApiError(_) => "Check the network connection and the base URL",
            PexelsError::IoError(_) => "Check that the file exists and is readable",
            PexelsError::MissingApiKeyError { .. } => {
                "Export PexelsAPIKey or add it to a .env file"
            }
            PexelsError::InvalidApiKeyError { .. } => {
                "The API key must be printable ASCII without line breaks"
            }
            PexelsError::MissingSearchTermError => "Provide a search term",
            PexelsError::UnknownTopicError { .. } => "Run `pexels topics` to list known topics",
            PexelsError::ConfigError { .. } | PexelsError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PexelsError::StatusError { .. } | PexelsError::ApiError(_) => 2,
            PexelsError::IoError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PexelsError>;
