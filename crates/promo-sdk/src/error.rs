//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] promo_parser::ParseError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] promo_runtime::RuntimeError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid rule file
    #[error("Invalid rule file: {0}")]
    InvalidRuleFile(String),

    /// Rule set failed validation
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("no rule sources".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("no rule sources"));
    }

    #[test]
    fn test_invalid_rule_file() {
        let error = SdkError::InvalidRuleFile("rules.yaml".to_string());
        assert!(error.to_string().contains("Invalid rule file"));
        assert!(error.to_string().contains("rules.yaml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_error = promo_parser::ParseError::UnknownActionType("free_gift".to_string());
        let sdk_error: SdkError = parse_error.into();
        assert!(sdk_error.to_string().contains("Parser error"));
        assert!(sdk_error.to_string().contains("free_gift"));
    }
}
