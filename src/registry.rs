//! # Behavior Registry
//!
//! Maps behavior names to factories, one table per capability, so actors can
//! be assembled from configuration instead of code.
//!
//! ```rust
//! # #[cfg(feature = "builtin-behaviors")]
//! # {
//! use strategy_rs::prelude::*;
//!
//! let registry = BehaviorRegistry::with_builtins();
//! let config = ActorConfig::new("Rubber Duck")
//!     .vocalize("squeak")
//!     .locomote("no_fly");
//! let duck = registry.build_actor(&config).unwrap();
//! assert_eq!(duck.perform_vocalize().unwrap().output(), Some("Squeak"));
//! # }
//! ```

use crate::capability::Capability;
use crate::composition::{Actor, LocomoteBehavior, Slot, VocalizeBehavior};
use crate::config::ActorConfig;
use crate::{Result, StrategyError};
use std::collections::HashMap;
use std::fmt;

pub type VocalizeFactory = Box<dyn Fn() -> Box<dyn VocalizeBehavior>>;
pub type LocomoteFactory = Box<dyn Fn() -> Box<dyn LocomoteBehavior>>;

#[derive(Default)]
pub struct BehaviorRegistry {
    vocalize: HashMap<String, VocalizeFactory>,
    locomote: HashMap<String, LocomoteFactory>,
}

impl BehaviorRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-loaded with the built-in strategies
    #[cfg(feature = "builtin-behaviors")]
    pub fn with_builtins() -> Self {
        use crate::composition::{FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, Squeak};

        let mut registry = Self::new();
        registry.register_vocalize("quack", || Box::new(Quack));
        registry.register_vocalize("squeak", || Box::new(Squeak));
        registry.register_vocalize("mute", || Box::new(MuteQuack));
        registry.register_locomote("wings", || Box::new(FlyWithWings));
        registry.register_locomote("no_fly", || Box::new(FlyNoWay));
        registry.register_locomote("rocket", || Box::new(FlyRocketPowered));
        registry
    }

    /// Registers a vocalization factory. An existing entry is replaced.
    pub fn register_vocalize<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn VocalizeBehavior> + 'static,
    {
        let name = name.into();
        if self.vocalize.insert(name.clone(), Box::new(factory)).is_some() {
            tracing::warn!(%name, capability = %Capability::Vocalize, "behavior re-registered");
        }
        self
    }

    /// Registers a locomotion factory. An existing entry is replaced.
    pub fn register_locomote<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn LocomoteBehavior> + 'static,
    {
        let name = name.into();
        if self.locomote.insert(name.clone(), Box::new(factory)).is_some() {
            tracing::warn!(%name, capability = %Capability::Locomote, "behavior re-registered");
        }
        self
    }

    pub fn create_vocalize(&self, name: &str) -> Result<Box<dyn VocalizeBehavior>> {
        self.vocalize
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| StrategyError::unknown_behavior(Capability::Vocalize, name))
    }

    pub fn create_locomote(&self, name: &str) -> Result<Box<dyn LocomoteBehavior>> {
        self.locomote
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| StrategyError::unknown_behavior(Capability::Locomote, name))
    }

    pub fn contains(&self, capability: Capability, name: &str) -> bool {
        match capability {
            Capability::Vocalize => self.vocalize.contains_key(name),
            Capability::Locomote => self.locomote.contains_key(name),
        }
    }

    /// Registered names for a capability, sorted
    pub fn names(&self, capability: Capability) -> Vec<String> {
        let mut names: Vec<String> = match capability {
            Capability::Vocalize => self.vocalize.keys().cloned().collect(),
            Capability::Locomote => self.locomote.keys().cloned().collect(),
        };
        names.sort();
        names
    }

    /// Assembles an actor from its configuration. Absent behavior names
    /// leave the corresponding slot empty.
    pub fn build_actor(&self, config: &ActorConfig) -> Result<Actor> {
        let vocalize = config
            .vocalize
            .as_deref()
            .map(|name| self.create_vocalize(name))
            .transpose()?;
        let locomote = config
            .locomote
            .as_deref()
            .map(|name| self.create_locomote(name))
            .transpose()?;

        tracing::debug!(
            actor = %config.name,
            vocalize = config.vocalize.as_deref().unwrap_or("<empty>"),
            locomote = config.locomote.as_deref().unwrap_or("<empty>"),
            "actor assembled"
        );

        Ok(Actor::with_slots(
            config.name.clone(),
            config.description_or_default(),
            Slot::new(vocalize),
            Slot::new(locomote),
        ))
    }
}

impl fmt::Debug for BehaviorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorRegistry")
            .field("vocalize", &self.names(Capability::Vocalize))
            .field("locomote", &self.names(Capability::Locomote))
            .finish()
    }
}
