//! Built-in vocalization strategies

use crate::capability::{Capability, Effect};
use crate::composition::behaviors::VocalizeBehavior;

/// A real duck's quack
#[derive(Debug, Default, Clone, Copy)]
pub struct Quack;

impl VocalizeBehavior for Quack {
    fn vocalize(&self) -> Effect {
        Effect::new(Capability::Vocalize, "Quack")
    }
}

/// A rubber duck's squeak
#[derive(Debug, Default, Clone, Copy)]
pub struct Squeak;

impl VocalizeBehavior for Squeak {
    fn vocalize(&self) -> Effect {
        Effect::new(Capability::Vocalize, "Squeak")
    }
}

/// Runs but makes no sound
#[derive(Debug, Default, Clone, Copy)]
pub struct MuteQuack;

impl VocalizeBehavior for MuteQuack {
    fn vocalize(&self) -> Effect {
        Effect::silent(Capability::Vocalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocalize_strategies() {
        assert_eq!(Quack.vocalize().output(), Some("Quack"));
        assert_eq!(Squeak.vocalize().output(), Some("Squeak"));

        let mute = MuteQuack.vocalize();
        assert_eq!(mute.capability, Capability::Vocalize);
        assert!(!mute.is_perceptible());
    }

    #[test]
    fn test_names() {
        assert_eq!(Quack.name(), "Quack");
        assert_eq!(MuteQuack.name(), "MuteQuack");
    }
}
