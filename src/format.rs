//! The converter seam shared by every format

use std::sync::Arc;

use crate::cron::Cron;
use crate::error::{HumanError, Result};
use crate::number::{NumberGroup, NumberWord};
use crate::size::{Size, Units};

/// Which way a conversion goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Machine value into human text (the default)
    #[default]
    FromMachine,
    /// Human text back into a machine value
    IntoMachine,
}

impl Direction {
    pub fn from_into_flag(into: bool) -> Self {
        if into {
            Direction::IntoMachine
        } else {
            Direction::FromMachine
        }
    }
}

/// A format human knows how to translate.
pub trait Converter: Send + Sync {
    /// Short name used on the command line and in `all` output.
    fn name(&self) -> &'static str;

    /// Translate a machine value into human text.
    fn from_machine(&self, input: &str) -> Result<String>;

    /// Translate human text back into a machine value.
    fn into_machine(&self, input: &str) -> Result<String>;

    fn convert(&self, direction: Direction, input: &str) -> Result<String> {
        match direction {
            Direction::FromMachine => self.from_machine(input),
            Direction::IntoMachine => self.into_machine(input),
        }
    }
}

impl Converter for Cron {
    fn name(&self) -> &'static str {
        "cron"
    }

    fn from_machine(&self, input: &str) -> Result<String> {
        Ok(self.describe(input)?)
    }

    fn into_machine(&self, input: &str) -> Result<String> {
        Ok(Cron::into_machine(self, input)?)
    }
}

/// Registry of available converters, queried in registration order.
pub struct ConverterRegistry {
    converters: Vec<Arc<dyn Converter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// Register a new converter.
    pub fn register(&mut self, converter: Arc<dyn Converter>) {
        self.converters.push(converter);
    }

    /// Find a converter by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Converter>> {
        self.converters
            .iter()
            .find(|c| c.name() == name)
            .cloned()
            .ok_or_else(|| HumanError::UnknownFormat(name.to_string()))
    }

    /// List all registered converter names.
    pub fn list_names(&self) -> Vec<&str> {
        self.converters.iter().map(|c| c.name()).collect()
    }

    /// Run every converter on `input`, keeping the ones that accept it.
    pub fn convert_all(&self, direction: Direction, input: &str) -> Vec<(&'static str, String)> {
        self.converters
            .iter()
            .filter_map(|c| match c.convert(direction, input) {
                Ok(output) => Some((c.name(), output)),
                Err(e) => {
                    tracing::debug!(converter = c.name(), error = %e, "converter rejected input");
                    None
                }
            })
            .collect()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a `ConverterRegistry` with every format pre-registered.
pub fn default_converters(units: Units) -> ConverterRegistry {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(Cron::new()));
    registry.register(Arc::new(NumberGroup));
    registry.register(Arc::new(NumberWord));
    registry.register(Arc::new(Size::new(units)));
    registry
}
