//! Capability slots
//!
//! A [`Slot`] exclusively owns at most one behavior. Replacing the occupant
//! hands the previous one back to the caller, so it is dropped as soon as the
//! caller lets go of it. Performing on an empty slot is a no-op.

use std::fmt;

pub struct Slot<B: ?Sized> {
    occupant: Option<Box<B>>,
}

impl<B: ?Sized> Slot<B> {
    /// Creates a slot, optionally empty
    pub fn new(occupant: Option<Box<B>>) -> Self {
        Self { occupant }
    }

    pub fn empty() -> Self {
        Self { occupant: None }
    }

    pub fn occupied(behavior: Box<B>) -> Self {
        Self {
            occupant: Some(behavior),
        }
    }

    /// Replaces the occupant and returns the previous one.
    ///
    /// Passing `None` clears the slot.
    pub fn set(&mut self, occupant: Option<Box<B>>) -> Option<Box<B>> {
        std::mem::replace(&mut self.occupant, occupant)
    }

    pub fn replace(&mut self, behavior: Box<B>) -> Option<Box<B>> {
        self.occupant.replace(behavior)
    }

    pub fn clear(&mut self) -> Option<Box<B>> {
        self.occupant.take()
    }

    /// Runs `f` against the occupant. Returns `None` when the slot is empty.
    pub fn perform<R>(&self, f: impl FnOnce(&B) -> R) -> Option<R> {
        self.occupant.as_deref().map(f)
    }

    pub fn get(&self) -> Option<&B> {
        self.occupant.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn into_inner(self) -> Option<Box<B>> {
        self.occupant
    }
}

impl<B: ?Sized> Default for Slot<B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: ?Sized> From<Box<B>> for Slot<B> {
    fn from(behavior: Box<B>) -> Self {
        Self::occupied(behavior)
    }
}

impl<B: ?Sized> fmt::Debug for Slot<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("occupied", &self.occupant.is_some())
            .finish()
    }
}
