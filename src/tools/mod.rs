//! # Tools Module
//!
//! Named operations exposed to agents. Each tool declares its argument
//! fields, is validated against them before running, and returns a plain
//! JSON result object.

pub mod args;
pub mod calculators;
pub mod lookup;

pub use args::*;
pub use calculators::*;
pub use lookup::*;

use crate::data::GameDataClient;
use crate::{GameError, GameResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Trait for tools callable through the registry.
///
/// Implementations only see arguments that already passed field validation
/// and [`Tool::check`], with defaults filled in.
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldSpec];

    /// Cross-field constraints, checked after every field is individually valid.
    fn check(&self, _args: &Map<String, Value>) -> Vec<FieldError> {
        Vec::new()
    }

    fn execute(&self, args: Map<String, Value>, data: &GameDataClient) -> GameResult<Value>;
}

/// Tool metadata as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Ordered collection of tools, dispatched by name.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.tools.iter().map(|t| t.name()))
            .finish()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_default_tools(crate::config::DEFAULT_SIMULATION_TRIALS)
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Creates a registry holding every built-in tool.
    ///
    /// # Examples
    ///
    /// ```
    /// use death_mountain::ToolRegistry;
    ///
    /// let registry = ToolRegistry::with_default_tools(500);
    /// assert!(registry.get("calculate_damage").is_some());
    /// assert!(registry.get("summon_dragon").is_none());
    /// ```
    pub fn with_default_tools(simulation_trials: u32) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GetAdventurer));
        registry.register(Box::new(GetBeast));
        registry.register(Box::new(GetItem));
        registry.register(Box::new(GetObstacle));
        registry.register(Box::new(ListBeasts));
        registry.register(Box::new(ListItems));
        registry.register(Box::new(CalculateDamage));
        registry.register(Box::new(CalculateXpReward));
        registry.register(Box::new(CalculateFleeChance));
        registry.register(Box::new(CalculateStatUpgrades));
        registry.register(Box::new(CalculateMarketPrice));
        registry.register(Box::new(SimulateCombat::new(simulation_trials)));
        registry
    }

    /// Adds a tool, replacing any existing tool of the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        if let Some(existing) = self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            log::warn!("Replacing tool {}", tool.name());
            *existing = tool;
        } else {
            self.tools.push(tool);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: input_schema(t.fields()),
            })
            .collect()
    }

    /// Validates `arguments` and runs the named tool.
    ///
    /// Fails with [`GameError::UnknownTool`] for unregistered names and
    /// [`GameError::Validation`] before any computation when arguments are bad.
    pub fn call(&self, name: &str, arguments: &Value, data: &GameDataClient) -> GameResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| GameError::UnknownTool(name.to_string()))?;

        let args = validate_arguments(tool.fields(), arguments)?;
        let cross_field = tool.check(&args);
        if !cross_field.is_empty() {
            return Err(ValidationErrors {
                errors: cross_field,
            }
            .into());
        }

        log::debug!("Calling tool {} with {}", name, Value::Object(args.clone()));
        tool.execute(args, data)
    }
}

/// Deserializes validated arguments into a typed struct.
pub(crate) fn parse_args<T: serde::de::DeserializeOwned>(args: Map<String, Value>) -> GameResult<T> {
    Ok(serde_json::from_value(Value::Object(args))?)
}

/// Serializes a result object.
pub(crate) fn to_result<T: Serialize>(value: &T) -> GameResult<Value> {
    Ok(serde_json::to_value(value)?)
}
