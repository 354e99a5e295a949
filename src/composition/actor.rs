//! Composed actor
//!
//! An [`Actor`] gets its capabilities by holding behavior components in
//! slots rather than by overriding methods. Identity (`name`,
//! `description`) and behavior are independent: two actors with the same
//! strategy in a slot perform identically.

use crate::capability::{Capability, Effect};
use crate::composition::behaviors::{LocomoteBehavior, VocalizeBehavior};
use crate::composition::slot::Slot;
use std::fmt;
use uuid::Uuid;

pub type VocalizeSlot = Slot<dyn VocalizeBehavior>;
pub type LocomoteSlot = Slot<dyn LocomoteBehavior>;

pub struct Actor {
    id: Uuid,
    name: String,
    description: String,
    vocalize: VocalizeSlot,
    locomote: LocomoteSlot,
}

impl Actor {
    /// Creates an actor with both slots empty
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_slots(name, description, Slot::empty(), Slot::empty())
    }

    pub fn with_slots(
        name: impl Into<String>,
        description: impl Into<String>,
        vocalize: VocalizeSlot,
        locomote: LocomoteSlot,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            vocalize,
            locomote,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// What this actor is. Differs per actor; not a strategy.
    pub fn display(&self) -> &str {
        &self.description
    }

    /// Shared by every actor regardless of its strategies
    pub fn swim(&self) -> &'static str {
        "All ducks float, even decoys!"
    }

    // === Mutators ===

    /// Swaps the vocalization strategy and returns the previous one.
    /// `None` empties the slot.
    pub fn set_vocalize(
        &mut self,
        behavior: Option<Box<dyn VocalizeBehavior>>,
    ) -> Option<Box<dyn VocalizeBehavior>> {
        let new_name = behavior.as_deref().map(|b| b.name().to_string());
        let previous = self.vocalize.set(behavior);
        tracing::debug!(
            actor = %self.name,
            capability = %Capability::Vocalize,
            from = previous.as_deref().map(|b| b.name()).unwrap_or("<empty>"),
            to = new_name.as_deref().unwrap_or("<empty>"),
            "behavior swapped"
        );
        previous
    }

    /// Swaps the locomotion strategy and returns the previous one.
    /// `None` empties the slot.
    pub fn set_locomote(
        &mut self,
        behavior: Option<Box<dyn LocomoteBehavior>>,
    ) -> Option<Box<dyn LocomoteBehavior>> {
        let new_name = behavior.as_deref().map(|b| b.name().to_string());
        let previous = self.locomote.set(behavior);
        tracing::debug!(
            actor = %self.name,
            capability = %Capability::Locomote,
            from = previous.as_deref().map(|b| b.name()).unwrap_or("<empty>"),
            to = new_name.as_deref().unwrap_or("<empty>"),
            "behavior swapped"
        );
        previous
    }

    // === Delegation ===

    pub fn perform_vocalize(&self) -> Option<Effect> {
        let effect = self.vocalize.perform(|b| b.vocalize());
        if effect.is_none() {
            tracing::trace!(actor = %self.name, capability = %Capability::Vocalize, "empty slot");
        }
        effect
    }

    pub fn perform_locomote(&self) -> Option<Effect> {
        let effect = self.locomote.perform(|b| b.locomote());
        if effect.is_none() {
            tracing::trace!(actor = %self.name, capability = %Capability::Locomote, "empty slot");
        }
        effect
    }

    /// Performs one capability. An empty slot yields `None` and never fails.
    pub fn perform(&self, capability: Capability) -> Option<Effect> {
        match capability {
            Capability::Vocalize => self.perform_vocalize(),
            Capability::Locomote => self.perform_locomote(),
        }
    }

    /// Performs every occupied slot in slot order
    pub fn perform_all(&self) -> Vec<Effect> {
        Capability::ALL
            .iter()
            .filter_map(|capability| self.perform(*capability))
            .collect()
    }

    // === Inspection ===

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Vocalize => !self.vocalize.is_empty(),
            Capability::Locomote => !self.locomote.is_empty(),
        }
    }

    /// Name of the behavior in a slot, if any
    pub fn behavior_name(&self, capability: Capability) -> Option<&str> {
        match capability {
            Capability::Vocalize => self.vocalize.get().map(|b| b.name()),
            Capability::Locomote => self.locomote.get().map(|b| b.name()),
        }
    }

    pub fn vocalize_slot(&self) -> &VocalizeSlot {
        &self.vocalize
    }

    pub fn locomote_slot(&self) -> &LocomoteSlot {
        &self.locomote
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("vocalize", &self.behavior_name(Capability::Vocalize))
            .field("locomote", &self.behavior_name(Capability::Locomote))
            .finish()
    }
}
