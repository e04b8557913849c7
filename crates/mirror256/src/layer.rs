//! Layer keys and the per-layer transform.

use std::fmt;

use crate::constants::{BLOCK_BYTES, GATES_PER_SUBLAYER};
use crate::gate::Gate;
use crate::wire::{Block, Sublayer};

/// 32-byte key controlling one layer: its XOR mask and its gate selection.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerKey(pub [u8; BLOCK_BYTES]);

impl LayerKey {
    /// Derives a standard layer key from an entry of
    /// [`crate::constants::CUBE_ROOT_PRIME_FRACTIONS`].
    ///
    /// The entry is written as 12 hex digits; the first 8 digits become 8
    /// bytes holding one nibble each, and that pattern is repeated to fill
    /// the key.
    pub fn from_constant(constant: u64) -> Self {
        let mut pattern = [0u8; 8];
        for (i, nibble) in pattern.iter_mut().enumerate() {
            *nibble = ((constant >> (44 - 4 * i)) & 0xf) as u8;
        }

        let mut key = [0u8; BLOCK_BYTES];
        for chunk in key.chunks_exact_mut(pattern.len()) {
            chunk.copy_from_slice(&pattern);
        }
        LayerKey(key)
    }

    /// Returns the 2-bit gate selector for `gate_index` in `sublayer`.
    ///
    /// Gate indices wrap around the key, so gates `i` and `i + 32` share a
    /// selector byte. The first sublayer reads bits 0-1 of that byte, the
    /// second reads bits 2-3.
    #[inline]
    pub fn selector(&self, gate_index: usize, sublayer: Sublayer) -> u8 {
        let byte = self.0[gate_index % BLOCK_BYTES];
        match sublayer {
            Sublayer::First => byte & 0x3,
            Sublayer::Second => (byte & 0xc) >> 2,
        }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_BYTES] {
        &self.0
    }
}

impl fmt::Debug for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerKey({})", hex::encode(self.0))
    }
}

impl From<[u8; BLOCK_BYTES]> for LayerKey {
    fn from(bytes: [u8; BLOCK_BYTES]) -> Self {
        LayerKey(bytes)
    }
}

impl From<Block> for LayerKey {
    fn from(block: Block) -> Self {
        LayerKey(block.0)
    }
}

/// Runs one full layer over `block` in place.
///
/// The block is first masked with the key, then swept by the first and the
/// second sublayer. Gates run in index order on the same buffer, so each gate
/// sees the writes of every gate before it.
pub fn transform(key: &LayerKey, block: &mut Block) {
    // Masking keeps an all-zero block from staying all-zero.
    block.xor_assign(key.as_bytes());

    for sublayer in Sublayer::ALL {
        for gate_index in 0..GATES_PER_SUBLAYER {
            let gate = Gate::from_selector(gate_index, key.selector(gate_index, sublayer));
            gate.apply(block, sublayer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CUBE_ROOT_PRIME_FRACTIONS;

    #[test]
    fn test_from_constant() {
        // 0x428a2f98d728 -> digits 4 2 8 a 2 f 9 8
        let key = LayerKey::from_constant(CUBE_ROOT_PRIME_FRACTIONS[0]);
        let pattern = [0x4, 0x2, 0x8, 0xa, 0x2, 0xf, 0x9, 0x8];
        for chunk in key.0.chunks_exact(8) {
            assert_eq!(chunk, pattern);
        }
    }

    #[test]
    fn test_from_constant_keeps_leading_zero_digit() {
        // 0x0fc19dc68b8c -> digits 0 f c 1 9 d c 6
        let key = LayerKey::from_constant(CUBE_ROOT_PRIME_FRACTIONS[18]);
        assert_eq!(&key.0[..8], &[0x0, 0xf, 0xc, 0x1, 0x9, 0xd, 0xc, 0x6]);
    }

    #[test]
    fn test_selector_bits() {
        let mut bytes = [0u8; BLOCK_BYTES];
        bytes[3] = 0b1110_0110;
        let key = LayerKey(bytes);
        assert_eq!(key.selector(3, Sublayer::First), 0b10);
        assert_eq!(key.selector(3, Sublayer::Second), 0b01);
        // Wraps around the 32-byte key.
        assert_eq!(key.selector(35, Sublayer::First), 0b10);
    }

    #[test]
    fn test_zero_key_is_xor_sweep() {
        // With a zero key every gate is XOR and the mask is a no-op.
        let key = LayerKey::default();
        let mut block = Block::default();
        transform(&key, &mut block);
        assert_eq!(block, Block::default());

        let mut block = Block::default();
        block.0[0] = 0b0000_0001;
        transform(&key, &mut block);
        // First sweep: wire 1 = w0 ^ w1 = 1.
        // Second sweep: wire 0 = w1 ^ w2 = 1, wire 2 = w3 ^ w4 = 0, ...
        assert_eq!(block.0[0], 0b0000_0011);
        assert!(block.0[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_transform_leaves_upper_half_masked_only() {
        // Gates only reach wires 0..=128, so bytes 17.. see just the mask.
        let key = LayerKey::from_constant(CUBE_ROOT_PRIME_FRACTIONS[5]);
        let mut block = Block::from([0xa5u8; BLOCK_BYTES]);
        transform(&key, &mut block);
        for i in 17..BLOCK_BYTES {
            assert_eq!(block.0[i], 0xa5 ^ key.0[i]);
        }
    }
}
