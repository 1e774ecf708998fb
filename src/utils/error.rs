use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnniversaryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Notification via {channel} failed: {message}")]
    NotificationError { channel: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Notification,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AnniversaryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnniversaryError::TomlError(_)
            | AnniversaryError::ConfigError { .. }
            | AnniversaryError::MissingConfigError { .. }
            | AnniversaryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AnniversaryError::NotificationError { .. } => ErrorCategory::Notification,
            AnniversaryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Notification => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 行程結束碼: 1 = 設定錯誤, 2 = 通知失敗, 3 = 系統錯誤
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnniversaryError::IoError(_) => {
                "Check that the configuration file exists and is readable".to_string()
            }
            AnniversaryError::TomlError(_) => {
                "Fix the TOML syntax in the configuration file".to_string()
            }
            AnniversaryError::ConfigError { .. } => {
                "Review the configuration file against the documented sections".to_string()
            }
            AnniversaryError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
            AnniversaryError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration file", field)
            }
            AnniversaryError::NotificationError { channel, .. } => match channel.as_str() {
                "email" => "Check the [smtp] host, port and credentials".to_string(),
                "sns" => "Check the SNS topic ARN and the AWS credentials".to_string(),
                _ => "Check the notification settings".to_string(),
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Notification => format!("Could not deliver the message: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnniversaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let missing = AnniversaryError::MissingConfigError {
            field: "event.names".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.exit_code(), 1);

        let smtp = AnniversaryError::NotificationError {
            channel: "email".to_string(),
            message: "authentication failed".to_string(),
        };
        assert_eq!(smtp.severity(), ErrorSeverity::Medium);
        assert_eq!(smtp.exit_code(), 2);
        assert!(smtp.recovery_suggestion().contains("[smtp]"));

        let io = AnniversaryError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "anniversary.toml",
        ));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            AnniversaryError::ConfigError {
                message: "bad".to_string(),
            },
            AnniversaryError::MissingConfigError {
                field: "event".to_string(),
            },
            AnniversaryError::NotificationError {
                channel: "sns".to_string(),
                message: "rejected".to_string(),
            },
        ];
        for err in errors {
            assert!(err.severity() >= ErrorSeverity::Medium);
            assert!(err.exit_code() > 0, "{} exited with 0", err);
        }
    }

    #[test]
    fn test_user_friendly_message_includes_field() {
        let err = AnniversaryError::InvalidConfigValueError {
            field: "smtp.port".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 65535".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.starts_with("Configuration problem"));
        assert!(message.contains("smtp.port"));
    }
}
