//! # strategy-rs
//!
//! Composable behavior slots: an actor's behaviors are swapped at runtime
//! instead of being inherited.
//!
//! strategy-rs models an entity as **identity + capability slots**:
//! - **Actor**: owns its identity and one slot per capability
//! - **Behavior**: an interchangeable strategy for one capability
//! - **Slot**: exclusively owns at most one behavior; performing an empty
//!   slot is a no-op
//!
//! ## 🏗️ Feature Architecture
//!
//! ### Core (always available)
//! - `capability`: `Capability` names and `Effect` results
//! - `composition`: behavior traits, `Slot`, `Actor`, `ActorBuilder`
//! - `registry`, `config`, `simulator`: build and run actors from JSON
//!
//! ### Built-in Components
//! - `builtin-behaviors`: Quack / Squeak / MuteQuack,
//!   FlyWithWings / FlyNoWay / FlyRocketPowered, and the duck `presets`
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "builtin-behaviors")]
//! # {
//! use strategy_rs::prelude::*;
//!
//! let mut duck = ActorBuilder::new("Model Duck")
//!     .with_vocalize(Quack)
//!     .with_locomote(FlyNoWay)
//!     .build();
//! assert!(!duck.perform_locomote().unwrap().is_perceptible());
//!
//! duck.set_locomote(Some(locomote_behavior(FlyRocketPowered)));
//! assert_eq!(
//!     duck.perform_locomote().unwrap().output(),
//!     Some("I'm flying with a rocket!")
//! );
//! # }
//! ```

// ============================================================================
// CORE MODULES (always available)
// ============================================================================

pub mod capability;
pub mod composition;
pub mod config;
pub mod registry;
pub mod simulator;

#[cfg(feature = "builtin-behaviors")]
pub mod presets;

// ============================================================================
// CORE RE-EXPORTS
// ============================================================================

pub use capability::{Capability, Effect};

pub use composition::{
    Actor, ActorBuilder, FnLocomoteBehavior, FnVocalizeBehavior, LocomoteBehavior, LocomoteSlot,
    LogLevel, Slot, Traced, VocalizeBehavior, VocalizeSlot, locomote_behavior, vocalize_behavior,
};

pub use config::{ActorConfig, SimulatorConfig};
pub use registry::BehaviorRegistry;
pub use simulator::{Report, Simulator};

// ============================================================================
// BUILTIN COMPONENTS RE-EXPORTS (feature-gated)
// ============================================================================

/// Built-in strategies
#[cfg(feature = "builtin-behaviors")]
pub use composition::{FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, Squeak};

/// Convenient re-exports for common types and traits
pub mod prelude {
    pub use crate::{
        Actor, ActorBuilder, ActorConfig, BehaviorRegistry, Capability, Effect,
        FnLocomoteBehavior, FnVocalizeBehavior, LocomoteBehavior, Report, Simulator,
        SimulatorConfig, Slot, StrategyError, StrategyResult, Traced, VocalizeBehavior,
        locomote_behavior, vocalize_behavior,
    };

    #[cfg(feature = "builtin-behaviors")]
    pub use crate::presets;

    #[cfg(feature = "builtin-behaviors")]
    pub use crate::{FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, Squeak};
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Result type alias for strategy-rs operations
pub type Result<T> = std::result::Result<T, StrategyError>;

/// Alias kept distinct from `std::result::Result` for glob imports
pub type StrategyResult<T> = Result<T>;

/// Common error type for strategy-rs operations
///
/// Performing an empty slot is never an error; it yields no effect.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// A strict build found a slot with no behavior
    #[error("Missing behavior for capability: {0}")]
    MissingBehavior(Capability),

    /// No factory registered under that name
    #[error("Unknown {capability} behavior: {name}")]
    UnknownBehavior { capability: Capability, name: String },

    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error during configuration (de)serialization
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StrategyError {
    pub fn unknown_behavior(capability: Capability, name: &str) -> Self {
        Self::UnknownBehavior {
            capability,
            name: name.to_string(),
        }
    }
}

// ============================================================================
// INTEGRATION TESTS
// ============================================================================
