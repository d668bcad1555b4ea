use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Failed to load vendors from '{path}': {message}")]
    LoadError { path: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataSource,
    UserInput,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn validation(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LoadError { .. } => ErrorCategory::DataSource,
            Self::ValidationError { .. } => ErrorCategory::UserInput,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// 使用者輸入錯誤可以直接修正重試，載入失敗則整個 session 無法繼續
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } => ErrorSeverity::Medium,
            Self::LoadError { .. } | Self::ConfigError { .. } => ErrorSeverity::High,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::LoadError { .. } => {
                "Check that the vendor CSV exists and has the columns name, event_type, city, price, rating".to_string()
            }
            Self::ValidationError { field, .. } => {
                format!("Correct the value of {} and run the command again", field)
            }
            Self::ConfigError { .. } => {
                "Review the TOML configuration file or the command-line overrides".to_string()
            }
            Self::CsvError(_) => "Make sure the export path is writable".to_string(),
            Self::IoError(_) => "Check file permissions and available disk space".to_string(),
            Self::SerializationError(_) => "Retry with --format table".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::LoadError { path, message } => {
                format!("Could not read the vendor list '{}': {}", path, message)
            }
            Self::ValidationError {
                field,
                value,
                reason,
            } => format!("{} '{}' is not valid: {}", field, value, reason),
            Self::ConfigError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
