//! The evolving key schedule.
//!
//! A [`LayerState`] holds exactly `depth` layer keys. After every full block
//! the block's hash becomes layer 0 and the oldest key falls off the end, so
//! the keys used for block `n` depend on every block before it.

use std::collections::{VecDeque, vec_deque};

use tracing::debug;

use crate::config::{InitStrategy, check_depth};
use crate::constants::{CUBE_ROOT_PRIME_FRACTIONS, DEFAULT_DEPTH};
use crate::error::Result;
use crate::layer::LayerKey;

/// Ordered, fixed-length list of layer keys owned by a single hasher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerState {
    keys: VecDeque<LayerKey>,
    depth: usize,
    /// Number of block hashes pushed since initialization.
    generation: u64,
}

impl LayerState {
    /// Initializes a store of `depth` keys using the given strategy.
    pub fn new(depth: usize, init: InitStrategy) -> Result<Self> {
        check_depth(depth, init)?;
        Ok(Self::seeded_unchecked(depth, init))
    }

    /// Seeds a store whose depth has already passed [`check_depth`].
    pub(crate) fn seeded_unchecked(depth: usize, init: InitStrategy) -> Self {
        match init {
            InitStrategy::Standard => Self::standard_unchecked(depth),
            InitStrategy::Random => Self::random_unchecked(depth),
        }
    }

    /// Deterministic store seeded from the cube-root constant table.
    ///
    /// Fails if `depth` is zero or exceeds the table size.
    pub fn standard(depth: usize) -> Result<Self> {
        Self::new(depth, InitStrategy::Standard)
    }

    /// Deterministic store with [`DEFAULT_DEPTH`] layers.
    pub fn standard_default() -> Self {
        Self::standard_unchecked(DEFAULT_DEPTH)
    }

    fn standard_unchecked(depth: usize) -> Self {
        let keys = CUBE_ROOT_PRIME_FRACTIONS[..depth]
            .iter()
            .map(|c| LayerKey::from_constant(*c))
            .collect();
        debug!(depth, "initialized standard layer state");
        Self::from_parts(keys, depth)
    }

    /// Store filled with fresh entropy from the thread-local RNG.
    ///
    /// Two stores built this way are unrelated, so digests computed with them
    /// are not reproducible. Only meant for debugging and testing.
    pub fn random(depth: usize) -> Result<Self> {
        Self::new(depth, InitStrategy::Random)
    }

    fn random_unchecked(depth: usize) -> Self {
        let keys = (0..depth).map(|_| LayerKey(rand::random())).collect();
        debug!(depth, "initialized random layer state");
        Self::from_parts(keys, depth)
    }

    /// Builds a store from explicit keys. The depth is the number of keys.
    pub fn from_keys(keys: Vec<LayerKey>) -> Result<Self> {
        let depth = keys.len();
        // Explicit keys are not bounded by the constant table.
        check_depth(depth, InitStrategy::Random)?;
        Ok(Self::from_parts(keys.into(), depth))
    }

    fn from_parts(keys: VecDeque<LayerKey>, depth: usize) -> Self {
        debug_assert_eq!(keys.len(), depth);
        Self {
            keys,
            depth,
            generation: 0,
        }
    }

    /// Makes `hash` the new layer 0 and drops the oldest key.
    pub fn push(&mut self, hash: LayerKey) {
        self.keys.push_front(hash);
        self.keys.truncate(self.depth);
        self.generation += 1;
    }

    /// Returns the key for `layer`, if it is in range.
    pub fn get(&self, layer: usize) -> Option<&LayerKey> {
        self.keys.get(layer)
    }

    /// Iterates over the keys from layer 0 upwards.
    pub fn iter(&self) -> vec_deque::Iter<'_, LayerKey> {
        self.keys.iter()
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of block hashes accepted so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
