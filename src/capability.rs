//! Capability names and the effects produced by performing them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::StrategyError;

/// A named slot on an actor that holds at most one behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// How the actor makes sound
    Vocalize,
    /// How the actor moves
    Locomote,
}

impl Capability {
    /// All capabilities in slot order
    pub const ALL: [Capability; 2] = [Capability::Vocalize, Capability::Locomote];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Vocalize => "vocalize",
            Capability::Locomote => "locomote",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vocalize" => Ok(Capability::Vocalize),
            "locomote" => Ok(Capability::Locomote),
            other => Err(StrategyError::UnknownCapability(other.to_string())),
        }
    }
}

/// What came out of performing a capability.
///
/// `output` is `None` when the behavior ran but produced nothing perceptible,
/// e.g. a mute quack or a duck that cannot fly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub capability: Capability,
    pub output: Option<String>,
}

impl Effect {
    pub fn new(capability: Capability, output: impl Into<String>) -> Self {
        Self {
            capability,
            output: Some(output.into()),
        }
    }

    /// An effect with no perceptible output
    pub fn silent(capability: Capability) -> Self {
        Self {
            capability,
            output: None,
        }
    }

    pub fn is_perceptible(&self) -> bool {
        self.output.is_some()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.output {
            Some(text) => write!(f, "[{}] {}", self.capability, text),
            None => write!(f, "[{}] << silence >>", self.capability),
        }
    }
}
