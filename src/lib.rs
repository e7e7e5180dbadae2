//! A branch-predictor simulation suite.
//!
//! Static, bimodal, gshare, perceptron, and TAGE predictors share one
//! predict/update contract and are driven over synthetic workload
//! traces to compare prediction accuracy.

pub mod branch;
pub mod chart;
pub mod error;
pub mod history;
pub mod predictor;
pub mod report;
pub mod sim;
pub mod stats;
pub mod trace;

pub use branch::*;
pub use error::*;
pub use history::*;
pub use predictor::*;
