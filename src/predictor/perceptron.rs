//! A perceptron branch predictor.
//!
//! See "Dynamic Branch Prediction with Perceptrons" (Jiménez and Lin,
//! 2001): each table slot holds a vector of integer weights over recent
//! history bits, and the sign of the dot product decides the direction.

use crate::branch::address_key;
use crate::error::ConfigError;
use crate::history::HistoryRegister;
use crate::predictor::{BranchPredictor, PredictionStats};
use crate::Outcome;

/// Configuration for a [`PerceptronPredictor`].
#[derive(Clone, Copy, Debug)]
pub struct PerceptronConfig {
    /// Number of history bits fed to each perceptron.
    pub history_length: usize,
    /// Number of perceptron slots.
    pub table_size: usize,
    /// Keep training while `y * output` is at or below this margin, not
    /// only after mispredictions.
    pub threshold: f64,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            history_length: 8,
            table_size: 256,
            threshold: 1.5,
        }
    }
}

impl PerceptronConfig {
    /// Use this configuration to create a new [`PerceptronPredictor`].
    pub fn build(self) -> Result<PerceptronPredictor, ConfigError> {
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        if self.history_length == 0 || self.history_length > usize::BITS as usize {
            return Err(ConfigError::HistoryWidth(self.history_length));
        }
        if self.threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.threshold));
        }
        Ok(PerceptronPredictor {
            weights: vec![vec![0; self.history_length + 1]; self.table_size],
            ghr: HistoryRegister::new(self.history_length),
            stats: PredictionStats::new(),
            cfg: self,
        })
    }
}

/// A table of perceptrons: weight index 0 is the bias, weight `k + 1`
/// is paired with history bit `k` (bit 0 = newest outcome).
pub struct PerceptronPredictor {
    cfg: PerceptronConfig,
    weights: Vec<Vec<i32>>,
    ghr: HistoryRegister,
    stats: PredictionStats,
}

impl PerceptronPredictor {
    /// Bipolar encoding of history bit `k`: +1 for taken, -1 for not
    /// taken. The 0/1 encoding would break the training rule, which
    /// relies on `y * x[k]` flipping sign.
    fn feature(history: usize, k: usize) -> i64 {
        if (history >> k) & 1 != 0 {
            1
        } else {
            -1
        }
    }

    /// Dot product of the slot's weights with the feature vector. The
    /// bias input is fixed at +1.
    fn output(&self, index: usize) -> i64 {
        let history = self.ghr.value();
        let w = &self.weights[index];
        let mut y = w[0] as i64;
        for k in 0..self.cfg.history_length {
            y += w[k + 1] as i64 * Self::feature(history, k);
        }
        y
    }

    fn index(&self, addr: &str) -> usize {
        address_key(addr) % self.cfg.table_size
    }
}

impl BranchPredictor for PerceptronPredictor {
    fn name(&self) -> &'static str {
        "Perceptron"
    }

    fn predict(&self, addr: &str) -> Outcome {
        Outcome::from(self.output(self.index(addr)) >= 0)
    }

    fn update(&mut self, addr: &str, outcome: Outcome) {
        let index = self.index(addr);
        let output = self.output(index);
        let prediction = Outcome::from(output >= 0);
        self.stats.record(prediction == outcome);

        let y: i64 = match outcome {
            Outcome::T => 1,
            Outcome::N => -1,
        };
        if (y * output) as f64 <= self.cfg.threshold {
            let history = self.ghr.value();
            let w = &mut self.weights[index];
            w[0] = w[0].saturating_add(y as i32);
            for k in 0..self.cfg.history_length {
                let x = Self::feature(history, k);
                w[k + 1] = w[k + 1].saturating_add((y * x) as i32);
            }
        }

        self.ghr.shift_in(outcome);
    }

    fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    fn reset(&mut self) {
        for w in self.weights.iter_mut() {
            w.fill(0);
        }
        self.ghr.clear();
        self.stats.reset();
    }
}
