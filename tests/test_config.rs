#![cfg(feature = "builtin-behaviors")]

use std::io::Write;

use strategy_rs::prelude::*;

const POND: &str = r#"{
  "actors": [
    { "name": "Mallard", "description": "I'm a real Mallard duck", "vocalize": "quack", "locomote": "wings" },
    { "name": "Decoy", "vocalize": "mute", "locomote": "no_fly" },
    { "name": "Duck Call", "vocalize": "quack" }
  ]
}"#;

// ------------------------------------
// 1. Loading
// ------------------------------------

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(POND.as_bytes()).unwrap();

    let config = SimulatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.actors.len(), 3);
    assert_eq!(config.actors[2].locomote, None);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimulatorConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StrategyError::Io(_)));
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = SimulatorConfig::from_json_str("{ \"actors\": [").unwrap_err();
    assert!(matches!(err, StrategyError::Config(_)));
}

// ------------------------------------
// 2. Building actors through the registry
// ------------------------------------

#[test]
fn test_build_actors_from_config() {
    let registry = BehaviorRegistry::with_builtins();
    let config = SimulatorConfig::from_json_str(POND).unwrap();

    let mallard = registry.build_actor(&config.actors[0]).unwrap();
    assert_eq!(mallard.display(), "I'm a real Mallard duck");
    assert_eq!(mallard.perform_vocalize().unwrap().output(), Some("Quack"));

    let decoy = registry.build_actor(&config.actors[1]).unwrap();
    assert_eq!(decoy.display(), "I'm Decoy");
    assert!(decoy.perform_all().iter().all(|e| !e.is_perceptible()));

    let call = registry.build_actor(&config.actors[2]).unwrap();
    assert!(!call.has(Capability::Locomote));
}

#[test]
fn test_custom_registration_is_usable_from_config() {
    let mut registry = BehaviorRegistry::with_builtins();
    registry.register_vocalize("honk", || {
        Box::new(FnVocalizeBehavior::new("Honk", || Some("Honk".to_string())))
    });

    let goose = registry
        .build_actor(&ActorConfig::new("Goose").vocalize("honk").locomote("wings"))
        .unwrap();
    assert_eq!(goose.perform_vocalize().unwrap().output(), Some("Honk"));
    assert_eq!(goose.behavior_name(Capability::Vocalize), Some("Honk"));
}

#[test]
fn test_unknown_behavior_names_capability() {
    let registry = BehaviorRegistry::with_builtins();
    let err = registry
        .build_actor(&ActorConfig::new("Odd").vocalize("roar"))
        .unwrap_err();
    match err {
        StrategyError::UnknownBehavior { capability, name } => {
            assert_eq!(capability, Capability::Vocalize);
            assert_eq!(name, "roar");
        }
        other => panic!("unexpected error: {other}"),
    }
}
