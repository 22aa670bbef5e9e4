pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Value;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "Uppercase text, label values, and add numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Print the result as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert text to uppercase
    Upper {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Prefix a value with the output label
    Format {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Add { a: String, b: String },
}

#[cfg(feature = "cli")]
impl Command {
    pub fn operation(&self) -> &'static str {
        match self {
            Command::Upper { .. } => "upper",
            Command::Format { .. } => "format",
            Command::Add { .. } => "add",
        }
    }

    /// Arguments as engine values. `upper` and `format` receive the
    /// argument exactly as typed, so `small-utils format 007` keeps the
    /// leading zeros; only `add` parses its operands as numbers.
    pub fn arguments(&self) -> Result<Vec<Value>> {
        match self {
            Command::Upper { text } => Ok(vec![Value::Text(text.clone())]),
            Command::Format { value } => Ok(vec![Value::Text(value.clone())]),
            Command::Add { a, b } => Ok(vec![Value::parse_arg(a)?, Value::parse_arg(b)?]),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
