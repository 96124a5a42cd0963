use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Could not generate a non-matching draw after {attempts} attempts.")]
    DrawGenerationFailed { attempts: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Generation,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrawError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::SerializationError(_) => ErrorCategory::Input,
            Self::DrawGenerationFailed { .. } => ErrorCategory::Generation,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Generation => ErrorSeverity::Critical,
        }
    }

    /// 用戶輸入造成的錯誤 (對應 HTTP 4xx)
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => message.clone(),
            Self::SerializationError(_) => "Request body is not valid JSON.".to_string(),
            Self::DrawGenerationFailed { .. } => self.to_string(),
            Self::IoError(e) => format!("Could not read or write data: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Submit 1-200 combinations, each with 7 unique integers between 1 and 36"
            }
            ErrorCategory::Generation => "Retry the request; the draw is resampled from scratch",
            ErrorCategory::Io => "Check that the input file exists and is readable",
            ErrorCategory::Configuration => "Check the configuration file and environment variables",
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;
