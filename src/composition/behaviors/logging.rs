//! Logging decorator for behavior components

use crate::capability::Effect;
use crate::composition::behaviors::{LocomoteBehavior, VocalizeBehavior};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
}

/// Wraps any behavior and emits a `tracing` event every time it is performed.
///
/// The wrapped behavior's effect is returned unchanged, so a traced strategy
/// is observably identical to the bare one.
#[derive(Clone, Debug)]
pub struct Traced<T> {
    inner: T,
    label: String,
    level: LogLevel,
}

impl<T> Traced<T> {
    pub fn new(inner: T, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
            level: LogLevel::default(),
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    fn log(&self, behavior: &str, effect: &Effect) {
        match self.level {
            LogLevel::Trace => tracing::trace!(label = %self.label, behavior, %effect, "performed"),
            LogLevel::Debug => tracing::debug!(label = %self.label, behavior, %effect, "performed"),
            LogLevel::Info => tracing::info!(label = %self.label, behavior, %effect, "performed"),
        }
    }
}

impl<T: VocalizeBehavior> VocalizeBehavior for Traced<T> {
    fn vocalize(&self) -> Effect {
        let effect = self.inner.vocalize();
        self.log(self.inner.name(), &effect);
        effect
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

impl<T: LocomoteBehavior> LocomoteBehavior for Traced<T> {
    fn locomote(&self) -> Effect {
        let effect = self.inner.locomote();
        self.log(self.inner.name(), &effect);
        effect
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
