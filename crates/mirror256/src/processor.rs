//! Runs a block through every layer of the network.

use crate::layer;
use crate::state::LayerState;
use crate::wire::Block;

/// Transforms `block` with each layer key of `state` in order, layer 0
/// first, and returns the result.
///
/// Pure in `block` and the current key snapshot; the store is not modified.
pub fn process_block(state: &LayerState, mut block: Block) -> Block {
    for key in state.iter() {
        layer::transform(key, &mut block);
    }
    block
}
