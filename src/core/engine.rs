use crate::config::toml_config::TomlConfig;
use crate::core::calc::{Adder, OverflowPolicy};
use crate::core::format::OutputFormatter;
use crate::core::text::TextTransformer;
use crate::core::{Helper, Result, Value};
use crate::utils::error::HelperError;
use std::collections::BTreeMap;

/// Dispatches helpers by name.
pub struct HelperEngine {
    helpers: BTreeMap<&'static str, Box<dyn Helper>>,
}

impl HelperEngine {
    pub fn new(label: impl Into<String>, policy: OverflowPolicy) -> Self {
        let mut engine = Self {
            helpers: BTreeMap::new(),
        };
        engine.register(Box::new(TextTransformer));
        engine.register(Box::new(OutputFormatter::with_label(label)));
        engine.register(Box::new(Adder::new(policy)));
        engine
    }

    pub fn from_config(config: &TomlConfig) -> Self {
        Self::new(config.label(), config.overflow_policy())
    }

    fn register(&mut self, helper: Box<dyn Helper>) {
        self.helpers.insert(helper.name(), helper);
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.helpers.keys().copied().collect()
    }

    pub fn run(&self, name: &str, args: &[Value]) -> Result<Value> {
        let helper = self
            .helpers
            .get(name)
            .ok_or_else(|| HelperError::UnknownOperation {
                name: name.to_string(),
            })?;

        tracing::debug!("Running '{}' with {} argument(s)", name, args.len());
        let result = helper.apply(args)?;
        tracing::debug!("'{}' produced {} value", name, result.kind());
        Ok(result)
    }
}

impl Default for HelperEngine {
    fn default() -> Self {
        Self::from_config(&TomlConfig::default())
    }
}
