//! The duck roster
//!
//! Ready-made actors built from the built-in strategies. Each preset differs
//! only in identity and in which strategies fill its slots.

use crate::composition::{
    Actor, ActorBuilder, FlyNoWay, FlyWithWings, MuteQuack, Quack, Squeak,
};

pub fn mallard() -> Actor {
    ActorBuilder::new("Mallard")
        .description("I'm a real Mallard duck")
        .with_vocalize(Quack)
        .with_locomote(FlyWithWings)
        .build()
}

pub fn redhead() -> Actor {
    ActorBuilder::new("Redhead")
        .description("I'm a real Redhead duck")
        .with_vocalize(Quack)
        .with_locomote(FlyWithWings)
        .build()
}

pub fn rubber_duck() -> Actor {
    ActorBuilder::new("Rubber Duck")
        .description("I'm a rubber duckie")
        .with_vocalize(Squeak)
        .with_locomote(FlyNoWay)
        .build()
}

/// Decoys neither make a sound nor fly
pub fn decoy() -> Actor {
    ActorBuilder::new("Decoy")
        .description("I'm a duck decoy")
        .with_vocalize(MuteQuack)
        .with_locomote(FlyNoWay)
        .build()
}

/// Grounded until given a rocket at runtime
pub fn model_duck() -> Actor {
    ActorBuilder::new("Model Duck")
        .description("I'm a model duck")
        .with_vocalize(Quack)
        .with_locomote(FlyNoWay)
        .build()
}

/// Not a duck, but reuses the quack strategy. The locomotion slot stays empty.
pub fn duck_call() -> Actor {
    ActorBuilder::new("Duck Call")
        .description("I'm a duck call")
        .with_vocalize(Quack)
        .build()
}

/// Every preset, in roster order
pub fn roster() -> Vec<Actor> {
    vec![
        mallard(),
        redhead(),
        rubber_duck(),
        decoy(),
        model_duck(),
        duck_call(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;

    #[test]
    fn test_roster_names_unique() {
        let roster = roster();
        let mut names: Vec<&str> = roster.iter().map(|a| a.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_duck_call_has_no_locomotion() {
        let call = duck_call();
        assert!(!call.has(Capability::Locomote));
        assert_eq!(call.perform_locomote(), None);
        assert_eq!(call.perform_vocalize().unwrap().output(), Some("Quack"));
    }

    #[test]
    fn test_decoy_is_imperceptible() {
        let decoy = decoy();
        assert!(decoy.perform_all().iter().all(|e| !e.is_perceptible()));
        assert_eq!(decoy.behavior_name(Capability::Vocalize), Some("MuteQuack"));
    }
}
