//! Built-in locomotion strategies

use crate::capability::{Capability, Effect};
use crate::composition::behaviors::LocomoteBehavior;

/// Flies by flapping
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyWithWings;

impl LocomoteBehavior for FlyWithWings {
    fn locomote(&self) -> Effect {
        Effect::new(Capability::Locomote, "I'm flying!!")
    }
}

/// Stays on the ground
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyNoWay;

impl LocomoteBehavior for FlyNoWay {
    fn locomote(&self) -> Effect {
        Effect::silent(Capability::Locomote)
    }
}

/// Flies strapped to a rocket
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyRocketPowered;

impl LocomoteBehavior for FlyRocketPowered {
    fn locomote(&self) -> Effect {
        Effect::new(Capability::Locomote, "I'm flying with a rocket!")
    }
}
