//! Lock-aware board shuffle.
//!
//! Randomness is injected through [`RandomSource`]. Every [`rand::Rng`] is
//! one, so callers pick between an OS-seeded generator for real use and
//! [`seeded_rng`] for reproducible runs.

use crate::models::{CategoryRole, LockSet, WardrobeItem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Uniform index selection used by the shuffle.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Creates the generator used for shuffling.
///
/// With a seed the sequence of shuffles is reproducible; without one the
/// generator is seeded from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Produces a new board by replacing every unlocked item with a random
/// same-role alternative from the wardrobe.
///
/// For each position, in order:
/// - a locked item is kept as is
/// - otherwise a replacement is drawn uniformly from wardrobe items with the
///   same role and a different ID
/// - if no such item exists the original is kept
///
/// The result has the same length and positions as `board`. Different
/// positions may receive the same replacement. Neither the wardrobe nor the
/// lock set is modified.
pub fn shuffle_board<S: RandomSource + ?Sized>(
    board: &[WardrobeItem],
    locked: &LockSet,
    wardrobe: &[WardrobeItem],
    rng: &mut S,
) -> Vec<WardrobeItem> {
    let wardrobe_roles: Vec<(CategoryRole, &WardrobeItem)> =
        wardrobe.iter().map(|item| (item.role(), item)).collect();

    let mut replaced = 0usize;
    let shuffled = board
        .iter()
        .map(|current| {
            if locked.is_locked(&current.id) {
                return current.clone();
            }

            let role = current.role();
            let alternatives: Vec<&WardrobeItem> = wardrobe_roles
                .iter()
                .filter(|(candidate_role, candidate)| {
                    *candidate_role == role && candidate.id != current.id
                })
                .map(|(_, candidate)| *candidate)
                .collect();

            if alternatives.is_empty() {
                return current.clone();
            }
            replaced += 1;
            alternatives[rng.pick_index(alternatives.len())].clone()
        })
        .collect();

    debug!(
        board_len = board.len(),
        locked = locked.len(),
        replaced,
        "shuffled board"
    );

    shuffled
}
