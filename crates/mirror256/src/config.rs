//! Hasher construction parameters.

use tracing::warn;

use crate::constants::{CUBE_ROOT_PRIME_FRACTIONS, DEFAULT_DEPTH, DEFAULT_SIZE};
use crate::error::{Mirror256Error, Result};

/// How the layer keys are seeded before any input is absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitStrategy {
    /// Keys derived from the fixed cube-root constant table. Digests are
    /// reproducible.
    #[default]
    Standard,
    /// Keys filled with fresh entropy per hasher. Digests are NOT
    /// reproducible across instances; for debugging and testing only.
    Random,
}

/// Configuration for a [`crate::Mirror256`] hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of layers, and of layer keys in the store. Must be at least 1.
    pub depth: usize,
    /// Nominal output size in bits. Recorded but unused: the block size is
    /// fixed at 256 bits whatever this says.
    pub size: usize,
    /// Layer key seeding strategy.
    pub init: InitStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            size: DEFAULT_SIZE,
            init: InitStrategy::Standard,
        }
    }
}

impl Config {
    /// Sets the number of layers.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the nominal output size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the layer key seeding strategy.
    pub fn with_init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    /// Checks that the parameters describe a usable layer network.
    pub fn validate(&self) -> Result<()> {
        check_depth(self.depth, self.init)?;

        if self.size != DEFAULT_SIZE {
            warn!(
                size = self.size,
                "size parameter is ignored, blocks are always {DEFAULT_SIZE} bits"
            );
        }

        Ok(())
    }
}

/// Checks that `depth` layers can be seeded with `init`: at least one layer,
/// and no more than the constant table holds for standard seeding.
pub(crate) fn check_depth(depth: usize, init: InitStrategy) -> Result<()> {
    if depth == 0 {
        return Err(Mirror256Error::invalid_config("depth must be at least 1"));
    }

    if init == InitStrategy::Standard && depth > CUBE_ROOT_PRIME_FRACTIONS.len() {
        return Err(Mirror256Error::invalid_config(format!(
            "standard state supports at most {} layers, got {depth}",
            CUBE_ROOT_PRIME_FRACTIONS.len()
        )));
    }

    Ok(())
}
