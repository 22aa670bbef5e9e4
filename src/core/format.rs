use crate::core::{Helper, Result, Value};
use std::fmt::Display;

pub const DEFAULT_LABEL: &str = "Result: ";

/// Prefixes the textual form of `value` with `"Result: "`.
pub fn format_output(value: impl Display) -> String {
    format!("{}{}", DEFAULT_LABEL, value)
}

#[derive(Debug, Clone)]
pub struct OutputFormatter {
    label: String,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self::with_label(DEFAULT_LABEL)
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn format(&self, value: impl Display) -> String {
        format!("{}{}", self.label, value)
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for OutputFormatter {
    fn name(&self) -> &'static str {
        "format"
    }

    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, args: &[Value]) -> Result<Value> {
        self.check_arity(args)?;
        Ok(Value::Text(self.format(&args[0])))
    }
}
