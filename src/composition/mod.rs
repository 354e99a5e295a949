//! Composition architecture
//!
//! Actors get their capabilities by owning behavior components in slots.
//! Each capability is an independent, swappable component.

pub mod actor;
pub mod behaviors;
pub mod builder;
pub mod slot;

pub use actor::*;
pub use behaviors::*;
pub use builder::*;
pub use slot::*;
