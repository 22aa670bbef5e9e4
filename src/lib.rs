pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::calc::{add, add_numbers, Adder, OverflowPolicy};
pub use crate::core::engine::HelperEngine;
pub use crate::core::format::{format_output, OutputFormatter, DEFAULT_LABEL};
pub use crate::core::text::{to_upper, TextTransformer};
pub use crate::domain::model::{Number, Value};
pub use crate::domain::ports::Helper;
pub use crate::utils::error::{HelperError, Result};
