use crate::{
    map_types::finish_layout,
    sampling, topology,
    walk::{self, WalkSpec},
    CellSet, DungeonLayout, MapGenerator, SpecError, TilePainter,
};

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Fraction of corridor junctions that get a room grown on top, in `[0, 1]`.
/// Construction and deserialization both reject out-of-range values.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct RoomShare(f32);

impl RoomShare {
    pub fn new(share: f32) -> Result<Self, SpecError> {
        if (0.0..=1.0).contains(&share) {
            Ok(RoomShare(share))
        } else {
            Err(SpecError::RoomShareOutOfRange(share))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for RoomShare {
    fn default() -> Self {
        RoomShare(0.8)
    }
}

impl TryFrom<f32> for RoomShare {
    type Error = SpecError;

    fn try_from(share: f32) -> Result<Self, Self::Error> {
        RoomShare::new(share)
    }
}

impl From<RoomShare> for f32 {
    fn from(share: RoomShare) -> f32 {
        share.0
    }
}

/// Corridor-first map type: a chain of straight corridors, rooms grown at a
/// sampled share of the junctions, and a room backfilled onto every dead end
/// the sampling missed so no corridor terminates in a bare stub.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CorridorFirstMapSpec {
    pub seed: [u32; 4],
    pub corridor_length: u32,
    pub corridor_count: u32,
    pub room_share: RoomShare,
    pub room_walk: WalkSpec,
}

impl Default for CorridorFirstMapSpec {
    fn default() -> Self {
        CorridorFirstMapSpec {
            seed: [0; 4],
            corridor_length: 14,
            corridor_count: 5,
            room_share: RoomShare::default(),
            room_walk: WalkSpec::default(),
        }
    }
}

impl CorridorFirstMapSpec {
    /// Runs `generate` on a generator built from this spec's own seed.
    pub fn generate_seeded(&self, start: IVec2, painter: &mut impl TilePainter) -> DungeonLayout {
        self.generate(start, &mut sampling::small_rng(self.seed), painter)
    }

    /// Chains corridors end to start. Returns the carved cells and the
    /// junction cells (the start plus every segment end) that later become
    /// room candidates.
    fn chain_corridors(&self, start: IVec2, rng: &mut impl Rng) -> (CellSet, CellSet) {
        let mut floor = CellSet::default();
        let mut junctions = CellSet::default();
        let mut current = start;
        junctions.insert(current);
        for _ in 0..self.corridor_count {
            let corridor = walk::corridor_walk(current, self.corridor_length, rng);
            current = *corridor.last().expect("corridor always holds its start");
            junctions.insert(current);
            floor.extend(corridor);
        }

        (floor, junctions)
    }

    fn grow_rooms(&self, junctions: &CellSet, rng: &mut impl Rng) -> CellSet {
        let room_count = (junctions.len() as f32 * self.room_share.get()).round() as usize;
        let mut rooms = CellSet::default();
        for position in sampling::sample_cells(junctions, room_count, rng) {
            rooms.extend(walk::iterated_walk(&self.room_walk, position, rng));
        }

        rooms
    }

    /// Dead ends are found on the corridor-only floor; any not already
    /// covered by room cells gets a room of its own.
    fn backfill_dead_ends(
        &self,
        corridor_floor: &CellSet,
        rooms: &mut CellSet,
        rng: &mut impl Rng,
    ) {
        for dead_end in topology::find_dead_ends(corridor_floor) {
            if !rooms.contains(&dead_end) {
                rooms.extend(walk::iterated_walk(&self.room_walk, dead_end, rng));
            }
        }
    }
}

impl MapGenerator for CorridorFirstMapSpec {
    fn generate<R: Rng, P: TilePainter>(
        &self,
        start: IVec2,
        rng: &mut R,
        painter: &mut P,
    ) -> DungeonLayout {
        log::debug!("Generating corridor first map from {:?}", start);

        let (mut floor, junctions) = self.chain_corridors(start, rng);
        log::debug!(
            "Carved {} corridor cells with {} junctions",
            floor.len(),
            junctions.len()
        );

        let mut rooms = self.grow_rooms(&junctions, rng);
        self.backfill_dead_ends(&floor, &mut rooms, rng);
        log::debug!("Grew {} room cells", rooms.len());

        floor.extend(&rooms);

        finish_layout(floor, painter)
    }
}
