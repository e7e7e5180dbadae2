//! A reusable table of saturating counters.

use crate::predictor::counter::{SaturatingCounter, SaturatingCounterConfig};
use crate::Outcome;

/// A fixed-size table of [`SaturatingCounter`], shared by every
/// predictor that maps a hashed key to a counter (bimodal, gshare, and
/// the TAGE base component).
///
/// Keys are reduced modulo the table size. Power-of-two sizes keep the
/// reduction fair for XOR-mixed keys.
#[derive(Clone, Debug)]
pub struct CounterTable {
    data: Vec<SaturatingCounter>,
    size: usize,
}

impl CounterTable {
    pub fn new(cfg: SaturatingCounterConfig, size: usize) -> Self {
        assert!(size > 0);
        Self {
            data: vec![cfg.build(); size],
            size,
        }
    }

    /// Returns the number of entries in the table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Given some key, return the corresponding index into the table.
    pub fn index(&self, key: usize) -> usize {
        key % self.size
    }

    /// Return the predicted direction for a key.
    pub fn predict(&self, key: usize) -> Outcome {
        self.data[self.index(key)].predict()
    }

    /// Update the counter for a key with the resolved outcome.
    pub fn update(&mut self, key: usize, outcome: Outcome) {
        let index = self.index(key);
        self.data[index].update(outcome);
    }

    /// Returns a reference to an entry in the table.
    pub fn get(&self, index: usize) -> &SaturatingCounter {
        &self.data[index]
    }

    /// Returns a mutable reference to an entry in the table.
    pub fn get_mut(&mut self, index: usize) -> &mut SaturatingCounter {
        &mut self.data[index]
    }

    /// Reset every counter to its initial state.
    pub fn reset(&mut self) {
        for ctr in self.data.iter_mut() {
            ctr.reset();
        }
    }
}
