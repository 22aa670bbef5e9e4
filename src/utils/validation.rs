use crate::utils::error::{HelperError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> HelperError {
    HelperError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Rejects control characters (newlines, tabs, NUL) in single-line values.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if let Some(c) = value.chars().find(|c| c.is_control()) {
        return Err(invalid(
            field_name,
            value,
            format!("Value contains control character {:?}", c),
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(invalid(
        field_name,
        value,
        format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "./utils.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("output.label", "Result: ").is_ok());
        assert!(validate_non_empty_string("output.label", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("output.label", "Sum = ").is_ok());
        assert!(validate_single_line("output.label", "Sum\n").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["error", "warn", "info"];
        assert!(validate_one_of("logging.level", "info", &levels).is_ok());

        let err = validate_one_of("logging.level", "loud", &levels).unwrap_err();
        assert!(err.to_string().contains("error, warn, info"));
    }
}
