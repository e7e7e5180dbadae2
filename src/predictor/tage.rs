//! Implementation of a "TAgged GEometric history length" (TAGE)
//! predictor.
//!
//! See "A case for (partially) TAgged GEometric history length branch
//! prediction" (Seznec, 2006). This rendition keeps the geometric table
//! layout and the provider-selection rule, with a single-slot
//! allocate-on-misprediction policy and no usefulness decay.

use crate::branch::address_key;
use crate::error::ConfigError;
use crate::history::HistoryRegister;
use crate::predictor::{
    BranchPredictor, CounterTable, PredictionStats, SaturatingCounter, SaturatingCounterConfig,
};
use crate::Outcome;

/// Number of distinct tag values stored in tagged entries. A different
/// modulus than the table size, so an index collision does not imply a
/// tag collision.
const TAG_SPACE: usize = 256;

/// Configuration for a [`TAGEPredictor`].
#[derive(Clone, Copy, Debug)]
pub struct TAGEConfig {
    /// Number of tagged components.
    pub num_tables: usize,
    /// Number of entries in the base component and in each tagged
    /// component.
    pub base_table_size: usize,
}

impl Default for TAGEConfig {
    fn default() -> Self {
        Self {
            num_tables: 4,
            base_table_size: 1024,
        }
    }
}

impl TAGEConfig {
    /// History length for tagged component `i`: 2, 4, 8, 16, ...
    fn history_length(i: usize) -> usize {
        1 << (i + 1)
    }

    /// Use this configuration to create a new [`TAGEPredictor`].
    pub fn build(self) -> Result<TAGEPredictor, ConfigError> {
        if self.num_tables == 0 {
            return Err(ConfigError::ZeroTableCount);
        }
        if self.base_table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        // The longest component needs 2^num_tables history bits, which
        // must fit in the shared register.
        if self.num_tables as u32 > usize::BITS.ilog2() {
            return Err(ConfigError::HistoryWidth(
                1usize.checked_shl(self.num_tables as u32).unwrap_or(usize::MAX),
            ));
        }
        let max_history = Self::history_length(self.num_tables - 1);
        Ok(TAGEPredictor {
            base: CounterTable::new(SaturatingCounterConfig::default(), self.base_table_size),
            tables: vec![vec![TAGEEntry::fresh(); self.base_table_size]; self.num_tables],
            history_lengths: (0..self.num_tables).map(Self::history_length).collect(),
            ghr: HistoryRegister::new(max_history),
            stats: PredictionStats::new(),
            cfg: self,
        })
    }
}

/// An entry in a tagged component.
#[derive(Clone, Copy, Debug)]
struct TAGEEntry {
    ctr: SaturatingCounter,
    tag: usize,
    useful: bool,
}

impl TAGEEntry {
    /// The state every entry starts in. The zero tag means a computed
    /// tag of zero can match an untrained slot.
    fn fresh() -> Self {
        Self {
            ctr: SaturatingCounterConfig::default().build(),
            tag: 0,
            useful: false,
        }
    }
}

/// Identifies the component whose entry produced a prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Provider {
    /// The base component
    Base,
    /// A tagged component and the matching slot within it
    Tagged { table: usize, index: usize },
}

/// A base bimodal component plus N tagged components whose history
/// lengths grow geometrically, all reading bit-slices of one shared
/// global history register.
pub struct TAGEPredictor {
    cfg: TAGEConfig,
    base: CounterTable,
    tables: Vec<Vec<TAGEEntry>>,
    history_lengths: Vec<usize>,
    ghr: HistoryRegister,
    stats: PredictionStats,
}

impl TAGEPredictor {
    fn table_index(&self, key: usize, table: usize) -> usize {
        (key ^ self.ghr.low_bits(self.history_lengths[table])) % self.cfg.base_table_size
    }

    fn tag(&self, key: usize, table: usize) -> usize {
        (key ^ self.ghr.low_bits(self.history_lengths[table])) % TAG_SPACE
    }

    /// Find the provider for a key: the longest-history tagged component
    /// whose slot carries a matching tag, else the base component.
    fn provider(&self, key: usize) -> Provider {
        for table in (0..self.tables.len()).rev() {
            let index = self.table_index(key, table);
            if self.tables[table][index].tag == self.tag(key, table) {
                return Provider::Tagged { table, index };
            }
        }
        Provider::Base
    }

    fn provider_prediction(&self, key: usize, provider: Provider) -> Outcome {
        match provider {
            Provider::Base => self.base.predict(key),
            Provider::Tagged { table, index } => self.tables[table][index].ctr.predict(),
        }
    }

    /// Overwrite one slot after a misprediction: scan the components
    /// with strictly longer history than the provider, longest first,
    /// and claim the first slot whose useful bit is clear. At most one
    /// entry is allocated per update.
    fn allocate(&mut self, key: usize, provider: Provider, outcome: Outcome) {
        let above = match provider {
            Provider::Base => 0,
            Provider::Tagged { table, .. } => table + 1,
        };
        for table in (above..self.tables.len()).rev() {
            let index = self.table_index(key, table);
            let tag = self.tag(key, table);
            let entry = &mut self.tables[table][index];
            if !entry.useful {
                // Fresh entry, weakly biased toward the resolved outcome
                entry.ctr.set(match outcome {
                    Outcome::T => 2,
                    Outcome::N => 1,
                });
                entry.tag = tag;
                entry.useful = false;
                break;
            }
        }
    }
}

impl BranchPredictor for TAGEPredictor {
    fn name(&self) -> &'static str {
        "TAGE"
    }

    fn predict(&self, addr: &str) -> Outcome {
        let key = address_key(addr);
        self.provider_prediction(key, self.provider(key))
    }

    fn update(&mut self, addr: &str, outcome: Outcome) {
        let key = address_key(addr);
        let provider = self.provider(key);
        let prediction = self.provider_prediction(key, provider);
        self.stats.record(prediction == outcome);

        // Only the provider's counter follows the outcome
        match provider {
            Provider::Base => self.base.update(key, outcome),
            Provider::Tagged { table, index } => self.tables[table][index].ctr.update(outcome),
        }

        if prediction != outcome {
            self.allocate(key, provider, outcome);
        }

        self.ghr.shift_in(outcome);
    }

    fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.base.reset();
        for table in self.tables.iter_mut() {
            table.fill(TAGEEntry::fresh());
        }
        self.ghr.clear();
        self.stats.reset();
    }
}
