use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Type mismatch in '{operation}': expected {expected}, found {found}")]
    TypeMismatch {
        operation: String,
        expected: String,
        found: String,
    },

    #[error("Wrong number of arguments for '{operation}': expected {expected}, found {found}")]
    ArgumentCount {
        operation: String,
        expected: usize,
        found: usize,
    },

    #[error("Integer overflow: {lhs} + {rhs} does not fit in 64 bits")]
    Overflow { lhs: i64, rhs: i64 },

    #[error("Float overflow: {lhs} + {rhs} is not a finite number")]
    FloatOverflow { lhs: f64, rhs: f64 },

    #[error("Number out of range: {value}")]
    NumberOutOfRange { value: String },

    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HelperError {
    pub fn type_mismatch(operation: &str, expected: &str, found: &str) -> Self {
        HelperError::TypeMismatch {
            operation: operation.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HelperError::TypeMismatch { .. }
            | HelperError::ArgumentCount { .. }
            | HelperError::UnknownOperation { .. } => ErrorCategory::Input,
            HelperError::Overflow { .. }
            | HelperError::FloatOverflow { .. }
            | HelperError::NumberOutOfRange { .. } => ErrorCategory::Arithmetic,
            HelperError::InvalidConfigValue { .. } | HelperError::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
            HelperError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HelperError::TypeMismatch { expected, .. } => {
                format!("Pass {} arguments to this operation", expected)
            }
            HelperError::ArgumentCount { expected, .. } => {
                format!("Pass exactly {} argument(s)", expected)
            }
            HelperError::NumberOutOfRange { .. } => {
                "Integers must fit in 64 bits and floats must be finite".to_string()
            }
            HelperError::Overflow { .. } | HelperError::FloatOverflow { .. } => {
                "Use smaller operands, or set arithmetic.overflow to \"wrapping\" or \"saturating\""
                    .to_string()
            }
            HelperError::UnknownOperation { .. } => {
                "Available operations: add, format, upper".to_string()
            }
            HelperError::InvalidConfigValue { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            HelperError::ConfigParse { .. } => {
                "Check that the configuration file is valid TOML".to_string()
            }
            HelperError::Io(_) => "Check that the file exists and is readable".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelperError::TypeMismatch {
                operation,
                expected,
                found,
            } => format!("'{}' needs {} input, got {}", operation, expected, found),
            HelperError::Overflow { .. } | HelperError::FloatOverflow { .. } => {
                "The sum is too large to represent".to_string()
            }
            HelperError::NumberOutOfRange { value } => {
                format!("{} is too large to represent", value)
            }
            HelperError::Io(e) => format!("Could not read configuration: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = HelperError::type_mismatch("add", "numeric", "text");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);

        let err = HelperError::Overflow { lhs: i64::MAX, rhs: 1 };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 2);

        let err = HelperError::NumberOutOfRange {
            value: "9223372036854775808".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.exit_code(), 2);

        let err = HelperError::ConfigParse {
            message: "bad".to_string(),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            HelperError::type_mismatch("add", "numeric", "text"),
            HelperError::ArgumentCount {
                operation: "add".to_string(),
                expected: 2,
                found: 1,
            },
            HelperError::FloatOverflow {
                lhs: f64::MAX,
                rhs: f64::MAX,
            },
            HelperError::UnknownOperation {
                name: "mul".to_string(),
            },
            HelperError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];
        for err in &errors {
            assert!(err.exit_code() > 0, "{} exited with 0", err);
        }
    }

    #[test]
    fn test_messages() {
        let err = HelperError::type_mismatch("upper", "text", "integer");
        assert_eq!(
            err.to_string(),
            "Type mismatch in 'upper': expected text, found integer"
        );
        assert_eq!(err.user_friendly_message(), "'upper' needs text input, got integer");
        assert!(err.recovery_suggestion().contains("text"));
    }
}
