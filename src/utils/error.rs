use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parsing,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RankingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RankingError::InputNotFound { .. } | RankingError::IoError(_) => ErrorCategory::Input,
            RankingError::CsvError(_) => ErrorCategory::Parsing,
            RankingError::ConfigError { .. }
            | RankingError::ConfigValidationError { .. }
            | RankingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入檔讀不到就無法繼續
            RankingError::InputNotFound { .. } | RankingError::IoError(_) => {
                ErrorSeverity::Critical
            }
            RankingError::CsvError(_) => ErrorSeverity::High,
            RankingError::ConfigError { .. }
            | RankingError::ConfigValidationError { .. }
            | RankingError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RankingError::InputNotFound { path } => {
                format!("Cannot find the population data file '{}'", path)
            }
            RankingError::IoError(e) => format!("Failed to read or write data: {}", e),
            RankingError::CsvError(e) => format!("The population data could not be read: {}", e),
            RankingError::ConfigError { message } => format!("Invalid configuration: {}", message),
            RankingError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            RankingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the input file exists and is readable, or point [source] path at it with --config"
            }
            ErrorCategory::Parsing => "Check that the input file can be read as comma-separated text",
            ErrorCategory::Configuration => "Review the TOML configuration file and fix the reported field",
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
}

pub type Result<T> = std::result::Result<T, RankingError>;
