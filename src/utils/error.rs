use thiserror::Error;

#[derive(Error, Debug)]
pub enum TickerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Integer overflow while adding {lhs} and {rhs}")]
    OverflowError { lhs: i32, rhs: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Arithmetic,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TickerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TickerError::ConfigParseError { .. } | TickerError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TickerError::OverflowError { .. } => ErrorCategory::Arithmetic,
            TickerError::IoError(_) | TickerError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 程序結束時的退出碼
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
            TickerError::ConfigParseError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            TickerError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or on the command line", field)
            }
            TickerError::OverflowError { .. } => {
                "Use operands whose sum fits in a 32-bit signed integer".to_string()
            }
            TickerError::IoError(_) => "Make sure standard output is writable".to_string(),
            TickerError::SerializationError(_) => "Switch to --format text".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TickerError::ConfigParseError { message, .. } => {
                format!("Could not read the configuration: {}", message)
            }
            TickerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            TickerError::OverflowError { lhs, rhs } => {
                format!("The sum of {} and {} is too large", lhs, rhs)
            }
            TickerError::IoError(e) => format!("Could not write output: {}", e),
            TickerError::SerializationError(e) => format!("Could not encode report: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, TickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_maps_to_exit_code() {
        let overflow = TickerError::OverflowError { lhs: i32::MAX, rhs: 1 };
        assert_eq!(overflow.category(), ErrorCategory::Arithmetic);
        assert_eq!(overflow.exit_code(), 2);

        let config = TickerError::InvalidConfigValueError {
            field: "schedule.interval_ms".to_string(),
            value: "0".to_string(),
            reason: "too small".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let io = TickerError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let err = TickerError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert!(err.user_friendly_message().contains("output.format"));
        assert!(err.recovery_suggestion().contains("output.format"));
    }
}
