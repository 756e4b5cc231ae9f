use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::index;

/// Random source used for every pick the game makes; seeded so a board can be reproduced.
pub type GameRng = SmallRng;

pub fn game_rng(seed: u64) -> GameRng {
    SmallRng::seed_from_u64(seed)
}

/// Picks `amount` distinct indices out of `0..len` without replacement, in ascending order.
///
/// When `len <= amount` every index is returned.
pub fn sample_indices(rng: &mut GameRng, len: usize, amount: usize) -> Vec<usize> {
    if len <= amount {
        return (0..len).collect();
    }

    let mut indices = index::sample(rng, len, amount).into_vec();
    indices.sort_unstable();
    indices
}
