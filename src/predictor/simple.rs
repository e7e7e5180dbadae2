//! Static predictors that guess a fixed outcome.

use crate::predictor::{BranchPredictor, PredictionStats};
use crate::Outcome;

/// Predicts every branch as taken.
#[derive(Clone, Debug, Default)]
pub struct AlwaysTaken {
    stats: PredictionStats,
}

impl AlwaysTaken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BranchPredictor for AlwaysTaken {
    fn name(&self) -> &'static str {
        "Always Taken"
    }

    fn predict(&self, _addr: &str) -> Outcome {
        Outcome::T
    }

    fn update(&mut self, _addr: &str, outcome: Outcome) {
        self.stats.record(outcome == Outcome::T);
    }

    fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.stats.reset();
    }
}

/// Predicts every branch as not taken.
#[derive(Clone, Debug, Default)]
pub struct NeverTaken {
    stats: PredictionStats,
}

impl NeverTaken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BranchPredictor for NeverTaken {
    fn name(&self) -> &'static str {
        "Never Taken"
    }

    fn predict(&self, _addr: &str) -> Outcome {
        Outcome::N
    }

    fn update(&mut self, _addr: &str, outcome: Outcome) {
        self.stats.record(outcome == Outcome::N);
    }

    fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn always_taken_is_exact_on_uniform_traces() {
        let mut p = AlwaysTaken::new();
        for _ in 0..100 {
            p.update("0x3000", Outcome::T);
        }
        assert_eq!(p.accuracy(), 1.0);

        p.reset();
        for _ in 0..100 {
            p.update("0x3000", Outcome::N);
        }
        assert_eq!(p.accuracy(), 0.0);
    }

    #[test]
    fn never_taken_is_exact_on_uniform_traces() {
        let mut p = NeverTaken::new();
        for _ in 0..100 {
            p.update("0x4000", Outcome::N);
        }
        assert_eq!(p.accuracy(), 1.0);

        p.reset();
        for _ in 0..100 {
            p.update("0x4000", Outcome::T);
        }
        assert_eq!(p.accuracy(), 0.0);
    }

    #[test]
    fn prediction_ignores_the_address() {
        let p = AlwaysTaken::new();
        assert_eq!(p.predict("0x1000"), Outcome::T);
        assert_eq!(p.predict("whatever"), Outcome::T);
    }
}
