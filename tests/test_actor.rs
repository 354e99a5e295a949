#![cfg(feature = "builtin-behaviors")]

use std::cell::Cell;
use std::rc::Rc;

use strategy_rs::prelude::*;

// ------------------------------------
// 1. Empty slots: no effect, no failure
// ------------------------------------

#[test]
fn test_unset_slots_are_noops() {
    let actor = ActorBuilder::new("Blank").build();
    for capability in Capability::ALL {
        assert!(!actor.has(capability));
        assert_eq!(actor.perform(capability), None);
    }
}

#[test]
fn test_cleared_slot_is_noop() {
    let mut duck = presets::mallard();
    let previous = duck.set_vocalize(None);
    assert_eq!(previous.map(|p| p.name().to_string()), Some("Quack".to_string()));
    assert_eq!(duck.perform_vocalize(), None);
    // The other slot is untouched
    assert_eq!(duck.perform_locomote().unwrap().output(), Some("I'm flying!!"));
}

// ------------------------------------
// 2. Delegation follows the assigned behavior
// ------------------------------------

#[test]
fn test_silent_never_produces_normal_output() {
    let mut duck = presets::mallard();
    duck.set_vocalize(Some(vocalize_behavior(MuteQuack)));

    let effect = duck.perform_vocalize().unwrap();
    assert_eq!(effect, MuteQuack.vocalize());
    assert_ne!(effect, Quack.vocalize());
    assert!(!effect.is_perceptible());
}

#[test]
fn test_replacement_fully_detaches_previous() {
    let first_calls = Rc::new(Cell::new(0));
    let counter = first_calls.clone();

    let mut actor = ActorBuilder::new("Counter").build();
    actor.set_vocalize(Some(Box::new(FnVocalizeBehavior::new("first", move || {
        counter.set(counter.get() + 1);
        Some("first".to_string())
    }))));
    actor.perform_vocalize();
    assert_eq!(first_calls.get(), 1);

    let previous = actor.set_vocalize(Some(vocalize_behavior(Squeak)));
    drop(previous);
    // The closure (and its clone of the counter) is gone
    assert_eq!(Rc::strong_count(&first_calls), 1);

    for _ in 0..3 {
        assert_eq!(actor.perform_vocalize().unwrap().output(), Some("Squeak"));
    }
    assert_eq!(first_calls.get(), 1);
}

#[test]
fn test_runtime_swap_on_model_duck() {
    let mut model = presets::model_duck();
    assert!(!model.perform_locomote().unwrap().is_perceptible());

    model.set_locomote(Some(locomote_behavior(FlyRocketPowered)));
    assert_eq!(
        model.perform_locomote().unwrap().output(),
        Some("I'm flying with a rocket!")
    );
    assert_eq!(model.behavior_name(Capability::Locomote), Some("FlyRocketPowered"));
}

// ------------------------------------
// 3. Behavior is independent of identity
// ------------------------------------

#[test]
fn test_same_behavior_same_output_across_actors() {
    let mallard = presets::mallard();
    let redhead = presets::redhead();
    let custom = ActorBuilder::new("Stranger")
        .description("Not a duck at all")
        .with_locomote(FlyWithWings)
        .build();

    assert_ne!(mallard.display(), redhead.display());
    assert_eq!(mallard.perform_locomote(), redhead.perform_locomote());
    assert_eq!(mallard.perform_locomote(), custom.perform_locomote());
}

#[test]
fn test_duck_call_quacks_like_a_duck() {
    let call = presets::duck_call();
    let mallard = presets::mallard();
    assert_eq!(call.perform_vocalize(), mallard.perform_vocalize());
    assert_eq!(call.perform_locomote(), None);
}

// ------------------------------------
// 4. Scenarios
// ------------------------------------

#[test]
fn test_silent_grounded_scenario() {
    let actor = ActorBuilder::new("Decoy-like")
        .with_vocalize(MuteQuack)
        .with_locomote(FlyNoWay)
        .build_strict()
        .unwrap();

    let vocal = actor.perform(Capability::Vocalize).unwrap();
    assert_eq!(vocal.output(), None);
    assert!(actor.perform_all().iter().all(|e| !e.is_perceptible()));
}

#[test]
fn test_normal_winged_scenario() {
    let actor = ActorBuilder::new("Wild")
        .with_vocalize(Quack)
        .with_locomote(FlyWithWings)
        .build_strict()
        .unwrap();

    assert_eq!(actor.perform(Capability::Vocalize).unwrap().output(), Some("Quack"));
    assert_eq!(
        actor.perform(Capability::Locomote).unwrap().output(),
        Some("I'm flying!!")
    );
}

#[test]
fn test_traced_behaviors_in_slots() {
    let actor = ActorBuilder::new("Logged")
        .with_vocalize(Traced::new(Squeak, "bath"))
        .build();
    assert_eq!(actor.behavior_name(Capability::Vocalize), Some("Squeak"));
    assert_eq!(actor.perform_vocalize().unwrap().output(), Some("Squeak"));
}

#[test]
fn test_every_duck_swims() {
    for duck in presets::roster() {
        assert_eq!(duck.swim(), "All ducks float, even decoys!");
    }
}
