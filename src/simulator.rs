//! # Simulator
//!
//! Holds a roster of actors and performs every occupied capability slot of
//! each one, in insertion order.
//!
//! ```rust
//! # #[cfg(feature = "builtin-behaviors")]
//! # {
//! use strategy_rs::prelude::*;
//!
//! let mut sim = Simulator::new();
//! sim.add(presets::model_duck());
//! sim.actor_mut("Model Duck")
//!     .unwrap()
//!     .set_locomote(Some(locomote_behavior(FlyRocketPowered)));
//!
//! let reports = sim.run();
//! assert_eq!(reports[0].effects[1].output(), Some("I'm flying with a rocket!"));
//! # }
//! ```

use crate::capability::Effect;
use crate::composition::Actor;
use crate::config::SimulatorConfig;
use crate::registry::BehaviorRegistry;
use crate::Result;
use serde::{Deserialize, Serialize};

/// What one actor did during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub actor: String,
    pub description: String,
    /// One entry per occupied slot, vocalize before locomote
    pub effects: Vec<Effect>,
}

impl Report {
    /// Perceptible outputs only, in slot order
    pub fn outputs(&self) -> Vec<&str> {
        self.effects.iter().filter_map(|e| e.output()).collect()
    }
}

#[derive(Debug, Default)]
pub struct Simulator {
    actors: Vec<Actor>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every configured actor through the registry
    pub fn from_config(config: &SimulatorConfig, registry: &BehaviorRegistry) -> Result<Self> {
        config.validate()?;
        let actors = config
            .actors
            .iter()
            .map(|actor| registry.build_actor(actor))
            .collect::<Result<Vec<_>>>()?;
        tracing::info!(actors = actors.len(), "simulator configured");
        Ok(Self { actors })
    }

    pub fn add(&mut self, actor: Actor) -> &mut Self {
        self.actors.push(actor);
        self
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// First actor with the given name
    pub fn actor_mut(&mut self, name: &str) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.name() == name)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn run(&self) -> Vec<Report> {
        self.actors
            .iter()
            .map(|actor| {
                let effects = actor.perform_all();
                tracing::info!(
                    actor = actor.name(),
                    effects = effects.len(),
                    "actor performed"
                );
                Report {
                    actor: actor.name().to_string(),
                    description: actor.display().to_string(),
                    effects,
                }
            })
            .collect()
    }
}
