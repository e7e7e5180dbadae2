//! Implementations of different branch predictors.

pub mod bimodal;
pub mod counter;
pub mod gshare;
pub mod perceptron;
pub mod simple;
pub mod table;
pub mod tage;

pub use bimodal::*;
pub use counter::*;
pub use gshare::*;
pub use perceptron::*;
pub use simple::*;
pub use table::*;
pub use tage::*;

use crate::error::ConfigError;
use crate::Outcome;

/// Running tally of scored predictions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PredictionStats {
    correct: usize,
    total: usize,
}

impl PredictionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one prediction.
    pub fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.correct += 1;
        }
    }

    /// Number of correct predictions.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Number of scored predictions.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of correct predictions, or 0.0 before any were scored.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Interface to a predictor with some internal state which is only
/// subject to change by the correct branch outcome.
pub trait BranchPredictor {
    fn name(&self) -> &'static str;

    /// Return the predicted outcome for a branch.
    ///
    /// Must not mutate any table or register: the same address yields
    /// the same prediction until the next [`BranchPredictor::update`].
    fn predict(&self, addr: &str) -> Outcome;

    /// Feed the resolved outcome back into the predictor.
    ///
    /// Recomputes the pre-update prediction internally to score it
    /// (so callers are free to skip [`BranchPredictor::predict`]),
    /// then mutates tables and registers.
    fn update(&mut self, addr: &str, outcome: Outcome);

    /// The prediction tally accumulated by `update` calls.
    fn stats(&self) -> &PredictionStats;

    /// Reset the predictor to its just-constructed state.
    fn reset(&mut self);

    /// Fraction of correct predictions so far.
    fn accuracy(&self) -> f64 {
        self.stats().accuracy()
    }
}

/// The default set of predictors evaluated by the comparison driver.
pub fn all_predictors() -> Result<Vec<Box<dyn BranchPredictor>>, ConfigError> {
    Ok(vec![
        Box::new(AlwaysTaken::new()),
        Box::new(NeverTaken::new()),
        Box::new(BimodalConfig::default().build()?),
        Box::new(GShareConfig::default().build()?),
        Box::new(PerceptronConfig::default().build()?),
        Box::new(TAGEConfig::default().build()?),
    ])
}
