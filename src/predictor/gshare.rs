//! A gshare predictor: counters indexed by address XOR global history.
//!
//! Folding recent global control flow into the index correlates
//! per-address behavior with its context without storing per-address
//! history.

use crate::branch::address_key;
use crate::error::ConfigError;
use crate::history::HistoryRegister;
use crate::predictor::{BranchPredictor, CounterTable, PredictionStats, SaturatingCounterConfig};
use crate::Outcome;

/// Configuration for a [`GSharePredictor`].
#[derive(Clone, Copy, Debug)]
pub struct GShareConfig {
    /// Width of the global history register in bits.
    pub history_bits: usize,
    /// Number of counters in the table.
    pub table_size: usize,
}

impl Default for GShareConfig {
    fn default() -> Self {
        Self {
            history_bits: 10,
            table_size: 1024,
        }
    }
}

impl GShareConfig {
    /// Use this configuration to create a new [`GSharePredictor`].
    pub fn build(self) -> Result<GSharePredictor, ConfigError> {
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        if self.history_bits == 0 || self.history_bits > usize::BITS as usize {
            return Err(ConfigError::HistoryWidth(self.history_bits));
        }
        Ok(GSharePredictor {
            table: CounterTable::new(SaturatingCounterConfig::default(), self.table_size),
            ghr: HistoryRegister::new(self.history_bits),
            stats: PredictionStats::new(),
        })
    }
}

/// A counter table indexed by the hashed address XOR'ed with the global
/// history register.
pub struct GSharePredictor {
    table: CounterTable,
    ghr: HistoryRegister,
    stats: PredictionStats,
}

impl BranchPredictor for GSharePredictor {
    fn name(&self) -> &'static str {
        "GShare"
    }

    fn predict(&self, addr: &str) -> Outcome {
        self.table.predict(address_key(addr) ^ self.ghr.value())
    }

    fn update(&mut self, addr: &str, outcome: Outcome) {
        let key = address_key(addr) ^ self.ghr.value();
        let prediction = self.table.predict(key);
        self.stats.record(prediction == outcome);
        self.table.update(key, outcome);
        self.ghr.shift_in(outcome);
    }

    fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.table.reset();
        self.ghr.clear();
        self.stats.reset();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_bad_configurations() {
        assert_eq!(
            GShareConfig {
                table_size: 0,
                ..Default::default()
            }
            .build()
            .err(),
            Some(ConfigError::ZeroTableSize)
        );
        assert_eq!(
            GShareConfig {
                history_bits: 0,
                ..Default::default()
            }
            .build()
            .err(),
            Some(ConfigError::HistoryWidth(0))
        );
        assert_eq!(
            GShareConfig {
                history_bits: 65,
                ..Default::default()
            }
            .build()
            .err(),
            Some(ConfigError::HistoryWidth(65))
        );
    }

    #[test]
    fn history_advances_once_per_update() {
        let mut p = GShareConfig::default().build().unwrap();
        p.update("0x2000", Outcome::T);
        p.update("0x2000", Outcome::N);
        p.update("0x2000", Outcome::T);
        assert_eq!(p.ghr.value(), 0b101);
    }

    #[test]
    fn learns_a_history_correlated_pattern() {
        // Single address, strict alternation: the two steady history
        // values select two separate counters, so gshare learns what a
        // lone 2-bit counter cannot.
        let mut p = GShareConfig::default().build().unwrap();
        for i in 0..100 {
            p.update("0x2000", Outcome::from(i % 2 == 0));
        }
        assert!(p.accuracy() >= 0.9, "accuracy {}", p.accuracy());
    }

    #[test]
    fn reset_clears_table_and_history() {
        let mut p = GShareConfig::default().build().unwrap();
        for i in 0..50 {
            p.update("0x2000", Outcome::from(i % 2 == 0));
        }
        p.reset();
        assert_eq!(p.ghr.value(), 0);
        assert_eq!(p.stats().total(), 0);
        assert_eq!(p.predict("0x2000"), Outcome::N);
    }
}
