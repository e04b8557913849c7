//! The Mirror256 hasher: buffering, padding and digest bookkeeping.

use std::io;

use tracing::trace;

use crate::config::Config;
use crate::constants::BLOCK_BYTES;
use crate::digest::Digest;
use crate::error::Result;
use crate::processor::process_block;
use crate::state::LayerState;
use crate::wire::Block;

/// Incremental Mirror256 hasher.
///
/// Input is absorbed in 32-byte blocks. Every full block is hashed through
/// all layers and its hash is pushed into the layer store, changing the keys
/// for the blocks after it. A trailing partial block is padded with
/// [`crate::constants::PAD_BYTE`] and hashed so that [`Mirror256::digest`]
/// always reflects all input, but its hash never enters the store and its
/// bytes stay buffered for the next call.
///
/// Feeding the input in several [`Mirror256::absorb`] calls gives the same
/// digest as feeding it all at once.
///
/// A hasher owns its store outright. It is not meant to be shared between
/// threads while absorbing; hash independent inputs with independent hashers.
#[derive(Debug, Clone)]
pub struct Mirror256 {
    config: Config,
    state: LayerState,
    /// Bytes not yet forming a full block. Always shorter than a block
    /// between calls.
    buffer: Vec<u8>,
    /// Output of the most recently processed block, full or padded.
    running: Digest,
    /// Total bytes absorbed.
    absorbed: u64,
}

impl Mirror256 {
    /// Creates an empty hasher.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let state = LayerState::seeded_unchecked(config.depth, config.init);
        Ok(Self::with_state(config, state))
    }

    /// Creates a hasher and absorbs `message` into it.
    pub fn with_message(config: Config, message: &[u8]) -> Result<Self> {
        let mut hasher = Self::new(config)?;
        hasher.absorb(message);
        Ok(hasher)
    }

    fn with_state(config: Config, state: LayerState) -> Self {
        Self {
            config,
            state,
            buffer: Vec::with_capacity(BLOCK_BYTES),
            running: Digest::default(),
            absorbed: 0,
        }
    }

    /// Absorbs `data`. Empty input is a no-op.
    pub fn absorb(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.buffer.extend_from_slice(data);
        self.absorbed += data.len() as u64;

        let mut consumed = 0;
        for chunk in self.buffer.chunks_exact(BLOCK_BYTES) {
            let hash = process_block(&self.state, Block::from_chunk(chunk));
            self.state.push(hash.into());
            self.running = hash.into();
            consumed += BLOCK_BYTES;
            trace!(generation = self.state.generation(), "absorbed full block");
        }
        self.buffer.drain(..consumed);

        if !self.buffer.is_empty() {
            let hash = process_block(&self.state, Block::padded(&self.buffer));
            self.running = hash.into();
            trace!(residual = self.buffer.len(), "hashed padded block");
        }
    }

    /// Returns the output of the last processed block, or all zeroes if no
    /// block has been processed yet.
    pub fn digest(&self) -> Digest {
        self.running
    }

    /// Returns [`Mirror256::digest`] as 64 lowercase hex characters.
    pub fn hex_digest(&self) -> String {
        self.running.to_hex()
    }

    /// Total number of bytes absorbed so far.
    pub fn absorbed(&self) -> u64 {
        self.absorbed
    }

    /// Bytes waiting for the rest of their block.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Read-only view of the layer key store.
    pub fn layer_state(&self) -> &LayerState {
        &self.state
    }

    /// The configuration this hasher was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Mirror256 {
    fn default() -> Self {
        Self::with_state(Config::default(), LayerState::standard_default())
    }
}

impl io::Write for Mirror256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hashes `data` with the default configuration.
pub fn hash(data: &[u8]) -> Digest {
    let mut hasher = Mirror256::default();
    hasher.absorb(data);
    hasher.digest()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::config::InitStrategy;
    use crate::layer::LayerKey;

    #[test]
    fn test_empty_hasher() {
        let hasher = Mirror256::default();
        assert_eq!(hasher.digest(), Digest::default());
        assert_eq!(hasher.absorbed(), 0);
        assert!(hasher.pending().is_empty());
    }

    #[test]
    fn test_empty_absorb_is_noop() {
        let mut hasher = Mirror256::default();
        hasher.absorb(b"abc");
        let before = hasher.digest();
        hasher.absorb(b"");
        assert_eq!(hasher.digest(), before);
        assert_eq!(hasher.absorbed(), 3);
    }

    #[test]
    fn test_counter_and_buffer() {
        let mut hasher = Mirror256::default();
        hasher.absorb(&[1u8; 40]);
        assert_eq!(hasher.absorbed(), 40);
        assert_eq!(hasher.pending(), &[1u8; 8]);
        assert_eq!(hasher.layer_state().generation(), 1);

        hasher.absorb(&[2u8; 24]);
        assert_eq!(hasher.absorbed(), 64);
        assert!(hasher.pending().is_empty());
        assert_eq!(hasher.layer_state().generation(), 2);
    }

    #[test]
    fn test_full_block_digest_is_pushed() {
        let mut hasher = Mirror256::default();
        hasher.absorb(&[0x61u8; 32]);
        let digest = hasher.digest();
        assert_eq!(
            hasher.layer_state().get(0),
            Some(&LayerKey::from(*digest.as_bytes()))
        );
        assert_eq!(hasher.layer_state().depth(), 64);
    }

    #[test]
    fn test_padded_digest_is_not_pushed() {
        let mut hasher = Mirror256::default();
        hasher.absorb(b"short");
        assert_eq!(hasher.layer_state(), &LayerState::standard_default());

        let expected = process_block(
            &LayerState::standard_default(),
            Block::padded(b"short"),
        );
        assert_eq!(hasher.digest(), Digest::from(expected));
    }

    #[test]
    fn test_with_message_matches_absorb() {
        let config = Config::default().with_depth(8);
        let a = Mirror256::with_message(config, b"hello world").unwrap();
        let mut b = Mirror256::new(config).unwrap();
        b.absorb(b"hello world");
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.config().depth, 8);
    }

    #[test]
    fn test_invalid_depth() {
        assert!(Mirror256::new(Config::default().with_depth(0)).is_err());
        let random = Config::default()
            .with_depth(0)
            .with_init(InitStrategy::Random);
        assert!(Mirror256::new(random).is_err());
    }

    #[test]
    fn test_write_impl() {
        let mut hasher = Mirror256::default();
        hasher.write_all(b"This is ").unwrap();
        hasher.write_all(b"the canary.").unwrap();
        hasher.flush().unwrap();
        assert_eq!(hasher.digest(), hash(b"This is the canary."));
    }

    #[test]
    fn test_io_copy() {
        let data = vec![0x42u8; 1000];
        let mut hasher = Mirror256::default();
        let copied = io::copy(&mut data.as_slice(), &mut hasher).unwrap();
        assert_eq!(copied, 1000);
        assert_eq!(hasher.digest(), hash(&data));
    }
}
