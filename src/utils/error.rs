use crate::domain::model::FailureReason;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Evaluation failed: {0}")]
    Domain(#[from] FailureReason),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Domain,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度對應的程式結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::Domain(FailureReason::UnknownOperation { .. }) => ErrorCategory::Input,
            CalcError::Domain(_) => ErrorCategory::Domain,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::Output,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入超出定義域：換個輸入即可
            CalcError::Domain(FailureReason::UnknownOperation { .. }) => ErrorSeverity::High,
            CalcError::Domain(_) => ErrorSeverity::Medium,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorSeverity::High,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::Domain(reason) => reason.to_string(),
            CalcError::IoError(e) => format!("Could not read or write output: {}", e),
            CalcError::SerializationError(e) => format!("Could not encode the result: {}", e),
            CalcError::ConfigValidationError { field, message } => {
                format!("The configuration is invalid ({}): {}", field, message)
            }
            CalcError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
            CalcError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::Domain(FailureReason::UnknownOperation { .. }) => {
                "Run with --list-operations to see the supported operation names".to_string()
            }
            CalcError::Domain(FailureReason::DivisionByZero) => {
                "Choose a non-zero z₂ for division".to_string()
            }
            CalcError::Domain(FailureReason::LogarithmOfZero) => {
                "Choose a non-zero z₁, or a non-negative real exponent when z₁ is 0".to_string()
            }
            CalcError::Domain(FailureReason::Overflow) => {
                "Use operands of smaller magnitude".to_string()
            }
            CalcError::IoError(_) => "Check that the file exists and is readable".to_string(),
            CalcError::SerializationError(_) => {
                "Try the text output format instead of JSON".to_string()
            }
            CalcError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with a [request] table".to_string()
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            CalcError::MissingConfigError { field } => format!("Add '{}' to the configuration", field),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
