use crate::CellSet;

use glam::IVec2;
use rand::{prelude::*, rngs::SmallRng};
use rand_distr::{Distribution, Uniform};
use std::mem;

/// Builds the deterministic generator every map type runs on.
pub fn small_rng(seed: [u32; 4]) -> SmallRng {
    SmallRng::from_seed(unsafe { mem::transmute(seed) })
}

/// Uniform pick from a cell set. The pick reservoir-samples the set iterator,
/// so container ordering never skews it.
pub fn random_cell(cells: &CellSet, rng: &mut impl Rng) -> Option<IVec2> {
    cells.iter().copied().choose(rng)
}

/// Up to `amount` distinct cells, uniformly without replacement. Asking for
/// more cells than exist returns them all.
pub fn sample_cells(cells: &CellSet, amount: usize, rng: &mut impl Rng) -> Vec<IVec2> {
    let snapshot: Vec<IVec2> = cells.iter().copied().collect();

    snapshot.choose_multiple(rng, amount).copied().collect()
}

/// Uniform split coordinate in `[1, span)`, leaving both children non-empty.
/// Callers must pass `span >= 2`.
pub fn split_coordinate(span: i32, rng: &mut impl Rng) -> i32 {
    Uniform::new(1, span).sample(rng)
}
