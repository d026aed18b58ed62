use std::fmt;
use std::error::Error as StdError;
use crate::enums::api_error::ApiError;

#[derive(Debug, Clone)]
pub enum HrError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Session errors
    NotLoggedIn,
    SessionFileError {
        path: String,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },
    Api {
        endpoint: String,
        error: ApiError,
    },
    RequestFailed {
        operation: String,
        message: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl HrError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn api(endpoint: &str, error: ApiError) -> Self {
        Self::Api {
            endpoint: endpoint.to_string(),
            error,
        }
    }

    pub fn request_failed(operation: &str, message: &str) -> Self {
        Self::RequestFailed {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The interpreter's failure, when this error came out of an API call.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// True once the user has already seen this failure as a notice or a redirect.
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::SessionFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::RequestFailed { .. } => ErrorSeverity::Medium,
            Self::Api { error, .. } => match error {
                ApiError::Failed(_) => ErrorSeverity::Medium,
                ApiError::Forbidden(_) | ApiError::SessionExpired => ErrorSeverity::Low,
            },
            Self::NotLoggedIn => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::NotLoggedIn => {
                "Chưa đăng nhập\n💡 Run 'hrdesk login' first".to_string()
            }
            Self::SessionFileError { path, reason } => {
                format!("Session file error at '{}': {}\n💡 Run 'hrdesk logout' and log in again", path, reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check that the HR backend is reachable and try again");
                msg
            }
            Self::Api { error, .. } => error.message(),
            Self::RequestFailed { message, .. } => message.clone(),
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}", content_type, reason)
            }
            Self::ValidationError { field, value, constraint } => {
                format!("Invalid value '{}' for {}: {}", value, field, constraint)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for HrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for HrError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for hrdesk operations
pub type HrResult<T> = Result<T, HrError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message, unless the response
    /// interpreter already surfaced it.
    pub fn handle_error(error: &HrError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        if error.already_reported() {
            return;
        }

        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for HrError {
    fn from(error: std::io::Error) -> Self {
        HrError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for HrError {
    fn from(error: serde_json::Error) -> Self {
        HrError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for HrError {
    fn from(error: toml::de::Error) -> Self {
        HrError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for HrError {
    fn from(error: toml::ser::Error) -> Self {
        HrError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for HrError {
    fn from(error: reqwest::Error) -> Self {
        HrError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
