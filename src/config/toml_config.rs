use crate::core::calc::OverflowPolicy;
use crate::core::format::DEFAULT_LABEL;
use crate::utils::error::{HelperError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub arithmetic: ArithmeticConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    pub overflow: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HelperError::ConfigParse {
            message: e.to_string(),
        })
    }

    // Unknown variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelperError::ConfigParse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("output.label", &self.output.label)?;
        validation::validate_single_line("output.label", &self.output.label)?;

        if !self.arithmetic.overflow.is_empty() {
            validation::validate_one_of(
                "arithmetic.overflow",
                &self.arithmetic.overflow,
                &OverflowPolicy::NAMES,
            )?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn label(&self) -> &str {
        &self.output.label
    }

    /// Falls back to `Checked` when unset; call `validate` first to reject
    /// unknown names.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        match self.arithmetic.overflow.as_str() {
            "wrapping" => OverflowPolicy::Wrapping,
            "saturating" => OverflowPolicy::Saturating,
            _ => OverflowPolicy::Checked,
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logging(&self) -> bool {
        self.logging.json
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
