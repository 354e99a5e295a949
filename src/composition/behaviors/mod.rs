//! Behavior components
//!
//! One trait per capability, each with a single operation. Concrete
//! strategies live in the submodules; closures can stand in for a strategy
//! through the `Fn*Behavior` wrappers.

#[cfg(feature = "builtin-behaviors")]
pub mod locomote;
pub mod logging;
#[cfg(feature = "builtin-behaviors")]
pub mod vocalize;

use crate::capability::{Capability, Effect};

#[cfg(feature = "builtin-behaviors")]
pub use locomote::*;
pub use logging::*;
#[cfg(feature = "builtin-behaviors")]
pub use vocalize::*;

/// Strips the module path and generic arguments from a type name.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// How an actor makes sound
pub trait VocalizeBehavior {
    fn vocalize(&self) -> Effect;

    /// Name used in logs and reports
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// How an actor moves
pub trait LocomoteBehavior {
    fn locomote(&self) -> Effect;

    /// Name used in logs and reports
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<T: VocalizeBehavior + ?Sized> VocalizeBehavior for Box<T> {
    fn vocalize(&self) -> Effect {
        (**self).vocalize()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: LocomoteBehavior + ?Sized> LocomoteBehavior for Box<T> {
    fn locomote(&self) -> Effect {
        (**self).locomote()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// === Closure wrappers ===

/// Wraps a closure as a `VocalizeBehavior`
pub struct FnVocalizeBehavior<F> {
    name: String,
    pub func: F,
}

impl<F> FnVocalizeBehavior<F>
where
    F: Fn() -> Option<String>,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> VocalizeBehavior for FnVocalizeBehavior<F>
where
    F: Fn() -> Option<String>,
{
    fn vocalize(&self) -> Effect {
        Effect {
            capability: Capability::Vocalize,
            output: (self.func)(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wraps a closure as a `LocomoteBehavior`
pub struct FnLocomoteBehavior<F> {
    name: String,
    pub func: F,
}

impl<F> FnLocomoteBehavior<F>
where
    F: Fn() -> Option<String>,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> LocomoteBehavior for FnLocomoteBehavior<F>
where
    F: Fn() -> Option<String>,
{
    fn locomote(&self) -> Effect {
        Effect {
            capability: Capability::Locomote,
            output: (self.func)(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// === Boxing helpers ===

/// Boxes any `VocalizeBehavior` as a trait object
pub fn vocalize_behavior<T: VocalizeBehavior + 'static>(behavior: T) -> Box<dyn VocalizeBehavior> {
    Box::new(behavior)
}

/// Boxes any `LocomoteBehavior` as a trait object
pub fn locomote_behavior<T: LocomoteBehavior + 'static>(behavior: T) -> Box<dyn LocomoteBehavior> {
    Box::new(behavior)
}

// === Macros ===

/// Builds a boxed `VocalizeBehavior` from a name and a closure
#[macro_export]
macro_rules! vocalize_fn {
    ($name:expr, $func:expr) => {
        $crate::composition::vocalize_behavior($crate::composition::FnVocalizeBehavior::new(
            $name, $func,
        ))
    };
}

/// Builds a boxed `LocomoteBehavior` from a name and a closure
#[macro_export]
macro_rules! locomote_fn {
    ($name:expr, $func:expr) => {
        $crate::composition::locomote_behavior($crate::composition::FnLocomoteBehavior::new(
            $name, $func,
        ))
    };
}
