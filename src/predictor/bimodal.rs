//! A bimodal predictor: one saturating counter per hashed address.

use crate::branch::address_key;
use crate::error::ConfigError;
use crate::predictor::{BranchPredictor, CounterTable, PredictionStats, SaturatingCounterConfig};
use crate::Outcome;

/// Configuration for a [`BimodalPredictor`].
#[derive(Clone, Copy, Debug)]
pub struct BimodalConfig {
    /// Number of counters in the table.
    pub table_size: usize,
}

impl Default for BimodalConfig {
    fn default() -> Self {
        Self { table_size: 1024 }
    }
}

impl BimodalConfig {
    /// Use this configuration to create a new [`BimodalPredictor`].
    pub fn build(self) -> Result<BimodalPredictor, ConfigError> {
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        Ok(BimodalPredictor {
            table: CounterTable::new(SaturatingCounterConfig::default(), self.table_size),
            stats: PredictionStats::new(),
        })
    }
}

/// An address-indexed table of 2-bit saturating counters.
pub struct BimodalPredictor {
    table: CounterTable,
    stats: PredictionStats,
}

impl BranchPredictor for BimodalPredictor {
    fn name(&self) -> &'static str {
        "Bimodal"
    }

    fn predict(&self, addr: &str) -> Outcome {
        self.table.predict(address_key(addr))
    }

    fn update(&mut self, addr: &str, outcome: Outcome) {
        let key = address_key(addr);
        let prediction = self.table.predict(key);
        self.stats.record(prediction == outcome);
        self.table.update(key, outcome);
    }

    fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.table.reset();
        self.stats.reset();
    }
}
