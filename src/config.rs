//! Actor and simulator configuration
//!
//! Configuration is plain JSON. Behaviors are referenced by the names they
//! were registered under in a [`BehaviorRegistry`](crate::registry::BehaviorRegistry).
//!
//! ```json
//! {
//!   "actors": [
//!     { "name": "Mallard", "vocalize": "quack", "locomote": "wings" },
//!     { "name": "Decoy", "description": "I'm a decoy", "vocalize": "mute", "locomote": "no_fly" }
//!   ]
//! }
//! ```

use crate::{Result, StrategyError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One actor: identity plus the behavior name for each slot.
/// A missing behavior name leaves that slot empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocalize: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locomote: Option<String>,
}

impl ActorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            vocalize: None,
            locomote: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn vocalize(mut self, behavior: impl Into<String>) -> Self {
        self.vocalize = Some(behavior.into());
        self
    }

    pub fn locomote(mut self, behavior: impl Into<String>) -> Self {
        self.locomote = Some(behavior.into());
        self
    }

    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("I'm {}", self.name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatorConfig {
    #[serde(default)]
    pub actors: Vec<ActorConfig>,
}

impl SimulatorConfig {
    pub fn new(actors: Vec<ActorConfig>) -> Self {
        Self { actors }
    }

    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading simulator config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Actor names must be non-empty and unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for actor in &self.actors {
            if actor.name.trim().is_empty() {
                return Err(StrategyError::InvalidConfig(
                    "actor name must not be empty".to_string(),
                ));
            }
            if !seen.insert(actor.name.as_str()) {
                return Err(StrategyError::InvalidConfig(format!(
                    "duplicate actor name: {}",
                    actor.name
                )));
            }
        }
        Ok(())
    }
}
