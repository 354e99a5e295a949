//! Mini duck simulator
//!
//! Runs the preset roster, swaps a behavior at runtime, then builds a second
//! pond from JSON configuration.

use strategy_rs::prelude::*;

fn print_reports(reports: &[Report]) {
    for report in reports {
        println!("🦆 {} ({})", report.actor, report.description);
        if report.effects.is_empty() {
            println!("   (nothing to perform)");
        }
        for effect in &report.effects {
            println!("   {}", effect);
        }
    }
}

fn main() -> StrategyResult<()> {
    println!("=== Preset roster ===");
    let mut sim = Simulator::new();
    for duck in presets::roster() {
        sim.add(duck);
    }
    print_reports(&sim.run());

    println!("\n=== Model duck gets a rocket ===");
    if let Some(model) = sim.actor_mut("Model Duck") {
        let previous = model.set_locomote(Some(locomote_behavior(FlyRocketPowered)));
        println!(
            "replaced {} with {}",
            previous.as_deref().map(|b| b.name()).unwrap_or("<empty>"),
            model.behavior_name(Capability::Locomote).unwrap_or("<empty>")
        );
        for effect in model.perform_all() {
            println!("   {}", effect);
        }
        println!("   {}", model.swim());
    }

    println!("\n=== Pond from configuration ===");
    let config = SimulatorConfig::from_json_str(
        r#"{
            "actors": [
                { "name": "Goose", "description": "I'm a goose", "vocalize": "honk", "locomote": "wings" },
                { "name": "Bath Toy", "vocalize": "squeak" }
            ]
        }"#,
    )?;

    let mut registry = BehaviorRegistry::with_builtins();
    registry.register_vocalize("honk", || {
        Box::new(Traced::new(
            FnVocalizeBehavior::new("Honk", || Some("Honk!".to_string())),
            "goose",
        ))
    });

    let pond = Simulator::from_config(&config, &registry)?;
    let reports = pond.run();
    print_reports(&reports);

    println!("\n=== Reports as JSON ===");
    println!("{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
