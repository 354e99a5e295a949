//! Actor builder
//!
//! Fluent construction of composed actors. `build` leaves unset slots empty;
//! `build_strict` requires every slot to be filled.

use crate::capability::Capability;
use crate::composition::actor::Actor;
use crate::composition::behaviors::{LocomoteBehavior, VocalizeBehavior};
use crate::composition::slot::Slot;
use crate::{Result, StrategyError};

pub struct ActorBuilder {
    name: String,
    description: Option<String>,
    vocalize: Option<Box<dyn VocalizeBehavior>>,
    locomote: Option<Box<dyn LocomoteBehavior>>,
}

impl ActorBuilder {
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

    /// Sets the vocalization behavior
    pub fn with_vocalize<T: VocalizeBehavior + 'static>(mut self, behavior: T) -> Self {
        self.vocalize = Some(Box::new(behavior));
        self
    }

    /// Sets the vocalization behavior (boxed version)
    pub fn with_vocalize_boxed(mut self, behavior: Box<dyn VocalizeBehavior>) -> Self {
        self.vocalize = Some(behavior);
        self
    }

    /// Sets the locomotion behavior
    pub fn with_locomote<T: LocomoteBehavior + 'static>(mut self, behavior: T) -> Self {
        self.locomote = Some(Box::new(behavior));
        self
    }

    /// Sets the locomotion behavior (boxed version)
    pub fn with_locomote_boxed(mut self, behavior: Box<dyn LocomoteBehavior>) -> Self {
        self.locomote = Some(behavior);
        self
    }

    fn description_or_default(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("I'm {}", self.name))
    }

    /// Builds the actor, leaving unset slots empty
    pub fn build(self) -> Actor {
        let description = self.description_or_default();
        Actor::with_slots(
            self.name,
            description,
            Slot::new(self.vocalize),
            Slot::new(self.locomote),
        )
    }

    /// Builds the actor, failing on the first unset slot
    pub fn build_strict(self) -> Result<Actor> {
        let description = self.description_or_default();
        let vocalize = self
            .vocalize
            .ok_or(StrategyError::MissingBehavior(Capability::Vocalize))?;
        let locomote = self
            .locomote
            .ok_or(StrategyError::MissingBehavior(Capability::Locomote))?;
        Ok(Actor::with_slots(
            self.name,
            description,
            Slot::occupied(vocalize),
            Slot::occupied(locomote),
        ))
    }
}
