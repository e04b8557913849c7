//! Two-input, one-output gates over block wires.
//!
//! The gate families are named after reversible gates (Toffoli and Fredkin,
//! regular or mirrored) but each one is an ordinary Boolean function that
//! overwrites a single output wire. Applying a gate is not invertible in
//! general.

use crate::wire::{Block, GateWires, Sublayer};

/// Boolean function computed by a gate.
///
/// Only [`GateType::Xor`] and [`GateType::And`] can be produced from a 2-bit
/// selector; the other two are reachable only by constructing a [`Gate`]
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GateType {
    /// `in1 ^ in2`. Selected by the Toffoli family.
    Xor = 0,
    /// `in1 & in2`. Selected by the Fredkin family.
    And = 1,
    /// `in1 | in2`. Reserved.
    Or = 2,
    /// `in1 ^ (in2 ^ symmetry)`. Reserved.
    SymmetricXor = 3,
}

impl GateType {
    /// Maps the low selector bit to a gate type: unset is XOR, set is AND.
    #[inline]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { GateType::And } else { GateType::Xor }
    }
}

/// Orientation flag carried by each gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    /// High selector bit unset.
    Regular,
    /// High selector bit set.
    Mirrored,
}

impl Symmetry {
    /// Maps the high selector bit to a symmetry flag.
    #[inline]
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Symmetry::Mirrored
        } else {
            Symmetry::Regular
        }
    }

    /// Returns the flag as a bit.
    #[inline]
    pub const fn to_bit(self) -> bool {
        matches!(self, Symmetry::Mirrored)
    }
}

/// A single gate of a sublayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    /// Position of the gate within its sublayer, in `0..GATES_PER_SUBLAYER`.
    pub index: usize,
    /// Boolean function of the gate.
    pub ty: GateType,
    /// Symmetry flag; only observable through [`GateType::SymmetricXor`].
    pub symmetry: Symmetry,
}

impl Gate {
    /// Decodes a gate from a 2-bit selector. Bit 0 picks the type, bit 1 the
    /// symmetry. Higher bits are ignored.
    pub const fn from_selector(index: usize, selector: u8) -> Self {
        Gate {
            index,
            ty: GateType::from_bit(selector & 0x1 != 0),
            symmetry: Symmetry::from_bit(selector & 0x2 != 0),
        }
    }

    /// Computes the output bit for the given inputs.
    #[inline]
    pub const fn evaluate(&self, in1: bool, in2: bool) -> bool {
        match self.ty {
            GateType::Xor => in1 ^ in2,
            GateType::And => in1 & in2,
            GateType::Or => in1 | in2,
            GateType::SymmetricXor => in1 ^ (in2 ^ self.symmetry.to_bit()),
        }
    }

    /// Applies the gate to `block` in place: reads its two input wires and
    /// overwrites its output wire.
    #[inline]
    pub fn apply(&self, block: &mut Block, sublayer: Sublayer) {
        let wires = GateWires::for_gate(self.index, sublayer);
        let out = self.evaluate(block.bit(wires.in1), block.bit(wires.in2));
        block.set_bit(wires.out, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Wire;

    fn truth_table(gate: Gate) -> [bool; 4] {
        [
            gate.evaluate(false, false),
            gate.evaluate(false, true),
            gate.evaluate(true, false),
            gate.evaluate(true, true),
        ]
    }

    #[test]
    fn test_selector_decoding() {
        let cases = [
            (0b00, GateType::Xor, Symmetry::Regular),
            (0b01, GateType::And, Symmetry::Regular),
            (0b10, GateType::Xor, Symmetry::Mirrored),
            (0b11, GateType::And, Symmetry::Mirrored),
        ];
        for (selector, ty, symmetry) in cases {
            let gate = Gate::from_selector(0, selector);
            assert_eq!(gate.ty, ty);
            assert_eq!(gate.symmetry, symmetry);
        }
    }

    #[test]
    fn test_truth_tables() {
        let xor = Gate::from_selector(0, 0b10);
        assert_eq!(truth_table(xor), [false, true, true, false]);

        let and = Gate::from_selector(0, 0b11);
        assert_eq!(truth_table(and), [false, false, false, true]);

        let or = Gate {
            index: 0,
            ty: GateType::Or,
            symmetry: Symmetry::Regular,
        };
        assert_eq!(truth_table(or), [false, true, true, true]);

        let sxor = Gate {
            index: 0,
            ty: GateType::SymmetricXor,
            symmetry: Symmetry::Mirrored,
        };
        assert_eq!(truth_table(sxor), [true, false, false, true]);
    }

    #[test]
    fn test_apply_first_sublayer_overwrites_second_input() {
        let mut block = Block::default();
        block.set_bit(Wire::new(6), true);

        // Gate 3 reads wires 6 and 7, writes 7.
        Gate::from_selector(3, 0b00).apply(&mut block, Sublayer::First);
        assert!(block.bit(Wire::new(7)));
        assert!(block.bit(Wire::new(6)));
        assert_eq!(block.0[0], 0b1100_0000);
    }

    #[test]
    fn test_apply_second_sublayer_writes_even_wire() {
        let mut block = Block::default();
        block.set_bit(Wire::new(7), true);
        block.set_bit(Wire::new(8), true);
        block.set_bit(Wire::new(6), false);

        // Gate 3 reads wires 7 and 8, writes 6.
        Gate::from_selector(3, 0b01).apply(&mut block, Sublayer::Second);
        assert!(block.bit(Wire::new(6)));
        assert_eq!(block.0[0], 0b1100_0000);
        assert_eq!(block.0[1], 0b0000_0001);
    }

    #[test]
    fn test_and_gate_loses_information() {
        let mut a = Block::default();
        let mut b = Block::default();
        b.set_bit(Wire::new(1), true);

        // AND with a zero first input clears wire 1 either way.
        let gate = Gate::from_selector(0, 0b01);
        gate.apply(&mut a, Sublayer::First);
        gate.apply(&mut b, Sublayer::First);
        assert_eq!(a, b);
    }
}
