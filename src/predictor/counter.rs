//! Implementation of a saturating counter.

use crate::Outcome;

/// Configuration for building a [`SaturatingCounter`].
#[derive(Clone, Copy, Debug)]
pub struct SaturatingCounterConfig {
    /// Counter width in bits.
    pub bits: u32,
    /// Initial (and post-reset) counter value.
    pub init: u8,
}

impl Default for SaturatingCounterConfig {
    /// A 2-bit counter starting at the weak not-taken value.
    fn default() -> Self {
        Self { bits: 2, init: 1 }
    }
}

impl SaturatingCounterConfig {
    pub fn build(self) -> SaturatingCounter {
        assert!(self.bits >= 1 && self.bits <= 7);
        let max = (1u8 << self.bits) - 1;
        SaturatingCounter {
            value: self.init.min(max),
            init: self.init.min(max),
            max,
            threshold: 1 << (self.bits - 1),
        }
    }
}

/// An n-bit saturating counter used to follow the behavior of a branch.
///
/// The value stays in `[0, 2^n - 1]`; increments and decrements clamp
/// at the bounds. Values at or above half-range predict taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaturatingCounter {
    value: u8,
    init: u8,
    max: u8,
    threshold: u8,
}

impl SaturatingCounter {
    pub fn increment(&mut self) {
        self.value = (self.value + 1).min(self.max);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Overwrite the counter value, clamping to the representable range.
    pub fn set(&mut self, value: u8) {
        self.value = value.min(self.max);
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Return the current predicted direction.
    pub fn predict(&self) -> Outcome {
        Outcome::from(self.value >= self.threshold)
    }

    /// Update the counter with the resolved outcome.
    pub fn update(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::T => self.increment(),
            Outcome::N => self.decrement(),
        }
    }

    /// Reset the counter.
    pub fn reset(&mut self) {
        self.value = self.init;
    }
}
