//! Fixed-length positional slot arena.
//!
//! Sequence categories are positionally meaningful: weapon slot 0 and mod
//! slot 0 describe the same loadout position. [`SlotArray`] keeps every
//! position addressable, holes included, and never changes length after
//! construction.

use crate::error::{BuildError, ErrorSeverity};

/// Errors raised when addressing a slot arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotError {
    #[error("slot index {index} is out of range (capacity {capacity})")]
    OutOfRange { index: usize, capacity: usize },

    #[error("all {capacity} slots are occupied")]
    Full { capacity: usize },
}

impl BuildError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            SlotError::OutOfRange { .. } => "SLOT_OUT_OF_RANGE",
            SlotError::Full { .. } => "SLOT_FULL",
        }
    }
}

/// Fixed-length sequence of optional entries indexed by slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SlotArray<T> {
    slots: Vec<Option<T>>,
}

impl<T> SlotArray<T> {
    /// Creates `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Number of positions, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied positions.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Replaces the entry at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>, SlotError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SlotError::OutOfRange { index, capacity })?;
        Ok(core::mem::replace(slot, value))
    }

    /// Places `value` after the last occupied slot, or in the first hole
    /// when the tail is full. Returns the index written.
    pub fn push(&mut self, value: T) -> Result<usize, SlotError> {
        let tail = self
            .slots
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);
        let index = if tail < self.capacity() {
            Some(tail)
        } else {
            self.slots.iter().position(Option::is_none)
        };

        match index {
            Some(index) => {
                self.slots[index] = Some(value);
                Ok(index)
            }
            None => Err(SlotError::Full {
                capacity: self.capacity(),
            }),
        }
    }

    /// Positional iteration, holes included.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Occupied entries with their slot index.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Occupied entries, mutably, with their slot index.
    pub fn occupied_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|value| (index, value)))
    }

    /// Entries only, in slot order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }
}
