use crate::{direction, sampling, CellSet};

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunables for one iterated random walk.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct WalkSpec {
    pub iterations: u32,
    pub walk_length: u32,
    /// Restart each iteration from a uniformly chosen visited cell instead of
    /// continuing from the last cell the previous iteration reached.
    pub start_randomly_each_iteration: bool,
}

impl Default for WalkSpec {
    fn default() -> Self {
        WalkSpec {
            iterations: 10,
            walk_length: 10,
            start_randomly_each_iteration: true,
        }
    }
}

/// A walk that re-randomizes its direction every step. The result always
/// contains `start` and holds at most `length + 1` cells; the walk is free to
/// cross itself, and revisits collapse into the set.
pub fn random_walk(start: IVec2, length: u32, rng: &mut impl Rng) -> CellSet {
    walk_with_end(start, length, rng).0
}

fn walk_with_end(start: IVec2, length: u32, rng: &mut impl Rng) -> (CellSet, IVec2) {
    let mut path = CellSet::default();
    path.insert(start);
    let mut previous = start;
    for _ in 0..length {
        let next = previous + direction::random_cardinal(rng);
        path.insert(next);
        previous = next;
    }

    (path, previous)
}

/// A walk that commits to one cardinal direction up front, producing a
/// straight segment of exactly `length + 1` ordered cells, `start` first.
pub fn corridor_walk(start: IVec2, length: u32, rng: &mut impl Rng) -> Vec<IVec2> {
    let direction = direction::random_cardinal(rng);
    let mut corridor = Vec::with_capacity(length as usize + 1);
    let mut current = start;
    corridor.push(current);
    for _ in 0..length {
        current += direction;
        corridor.push(current);
    }

    corridor
}

/// Runs `spec.iterations` random walks and unions every visited cell. The
/// uniform restart pick goes over the whole running set, not just the latest
/// pass.
pub fn iterated_walk(spec: &WalkSpec, start: IVec2, rng: &mut impl Rng) -> CellSet {
    let mut floor = CellSet::default();
    let mut current = start;
    for _ in 0..spec.iterations {
        let (path, end) = walk_with_end(current, spec.walk_length, rng);
        floor.extend(path);
        current = if spec.start_randomly_each_iteration {
            sampling::random_cell(&floor, rng).expect("at least one cell was just visited")
        } else {
            end
        };
    }

    floor
}
