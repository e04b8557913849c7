//! Wire addressing over a fixed-size block.
//!
//! A wire names a single bit of a [`Block`]. Wire `w` lives in byte `w / 8`
//! at bit `w % 8`, counting from the least significant bit.

use bitvec::prelude::*;

use crate::constants::{BLOCK_BITS, BLOCK_BYTES, PAD_BYTE};

/// Index of one bit inside a [`Block`], in `0..BLOCK_BITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wire(usize);

impl Wire {
    /// Creates a wire from its bit index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        debug_assert!(index < BLOCK_BITS);
        Self(index)
    }

    /// Returns the bit index of this wire within the block.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the byte holding this wire.
    #[inline]
    pub const fn byte_index(self) -> usize {
        self.0 / 8
    }

    /// Returns the position of this wire within its byte, LSB first.
    #[inline]
    pub const fn bit_index(self) -> usize {
        self.0 % 8
    }
}

/// Which of the two gate sweeps of a layer transform is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sublayer {
    /// Reads wire pairs `(2i, 2i + 1)` and writes `2i + 1`.
    First,
    /// Reads wire pairs `(2i + 1, 2i + 2)` and writes `2i`.
    Second,
}

impl Sublayer {
    /// Both sublayers in the order they are applied.
    pub const ALL: [Sublayer; 2] = [Sublayer::First, Sublayer::Second];

    /// Offset of the first input wire of a gate relative to `2 * gate_index`.
    #[inline]
    const fn parity(self) -> usize {
        match self {
            Sublayer::First => 0,
            Sublayer::Second => 1,
        }
    }

    /// Returns the other sublayer.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Sublayer::First => Sublayer::Second,
            Sublayer::Second => Sublayer::First,
        }
    }
}

/// The wires touched by one gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateWires {
    /// First input wire.
    pub in1: Wire,
    /// Second input wire, always `in1 + 1`.
    pub in2: Wire,
    /// Wire overwritten with the gate output.
    pub out: Wire,
}

impl GateWires {
    /// Computes the wires for gate `gate_index` of the given sublayer.
    ///
    /// The output uses the opposite parity of the input pair, so the second
    /// sublayer reads back bits written by the first.
    #[inline]
    pub const fn for_gate(gate_index: usize, sublayer: Sublayer) -> Self {
        let base = 2 * gate_index;
        let in1 = base + sublayer.parity();
        GateWires {
            in1: Wire::new(in1),
            in2: Wire::new(in1 + 1),
            out: Wire::new(base + sublayer.opposite().parity()),
        }
    }
}

/// A 256-bit unit of data flowing through the layer network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block(pub [u8; BLOCK_BYTES]);

impl Block {
    /// Copies a full block out of `chunk`.
    ///
    /// Panics if `chunk` is not exactly [`BLOCK_BYTES`] long.
    pub fn from_chunk(chunk: &[u8]) -> Self {
        let mut bytes = [0u8; BLOCK_BYTES];
        bytes.copy_from_slice(chunk);
        Block(bytes)
    }

    /// Builds a block from a trailing partial chunk, filling the remainder
    /// with [`PAD_BYTE`].
    pub fn padded(residual: &[u8]) -> Self {
        debug_assert!(residual.len() < BLOCK_BYTES);
        let mut bytes = [PAD_BYTE; BLOCK_BYTES];
        bytes[..residual.len()].copy_from_slice(residual);
        Block(bytes)
    }

    /// Reads the bit on `wire`.
    #[inline]
    pub fn bit(&self, wire: Wire) -> bool {
        self.0.view_bits::<Lsb0>()[wire.index()]
    }

    /// Overwrites the bit on `wire`, leaving every other bit untouched.
    #[inline]
    pub fn set_bit(&mut self, wire: Wire, value: bool) {
        self.0.view_bits_mut::<Lsb0>().set(wire.index(), value);
    }

    /// XORs `mask` into the block byte by byte.
    #[inline]
    pub fn xor_assign(&mut self, mask: &[u8; BLOCK_BYTES]) {
        for (b, m) in self.0.iter_mut().zip(mask) {
            *b ^= m;
        }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_BYTES] {
        &self.0
    }
}

impl From<[u8; BLOCK_BYTES]> for Block {
    fn from(bytes: [u8; BLOCK_BYTES]) -> Self {
        Block(bytes)
    }
}

impl From<Block> for [u8; BLOCK_BYTES] {
    fn from(block: Block) -> Self {
        block.0
    }
}
