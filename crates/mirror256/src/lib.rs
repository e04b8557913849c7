//! Mirror256: a 256-bit hash built from a layered network of bit-level gates
//! whose keys evolve with the absorbed data.
//!
//! Each 32-byte block is pushed through `depth` layers. A layer masks the
//! block with its key, then runs two sweeps of XOR/AND gates selected by the
//! key's low nibbles. The hash of every full block becomes the key of layer 0
//! for the next block, shifting the older keys down one layer.
//!
//! This is not a standardized or vetted hash function. Do not use it where
//! collision or preimage resistance matters.
//!
//! # Example
//!
//! ```
//! use mirror256::{Config, Mirror256};
//!
//! let mut hasher = Mirror256::new(Config::default()).unwrap();
//! hasher.absorb(b"This is ");
//! hasher.absorb(b"the canary.");
//!
//! assert_eq!(
//!     hasher.hex_digest(),
//!     "000c0340080c4303000c0340080c43437b7c22515c595a505c5059515c595a50"
//! );
//! ```

pub mod config;
pub mod constants;
pub mod digest;
pub mod error;
pub mod gate;
pub mod hasher;
pub mod layer;
pub mod processor;
pub mod state;
pub mod wire;

pub use config::{Config, InitStrategy};
pub use digest::Digest;
pub use error::{Mirror256Error, Result};
pub use hasher::{Mirror256, hash};
pub use layer::LayerKey;
pub use state::LayerState;
pub use wire::{Block, Wire};
