use crate::{
    map_types::finish_layout,
    sampling,
    walk::{self, WalkSpec},
    DungeonLayout, MapGenerator, TilePainter,
};

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Map type that is nothing but one iterated random walk from the start
/// cell.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SimpleWalkMapSpec {
    pub seed: [u32; 4],
    pub walk: WalkSpec,
}

impl SimpleWalkMapSpec {
    /// Runs `generate` on a generator built from this spec's own seed.
    pub fn generate_seeded(&self, start: IVec2, painter: &mut impl TilePainter) -> DungeonLayout {
        self.generate(start, &mut sampling::small_rng(self.seed), painter)
    }
}

impl MapGenerator for SimpleWalkMapSpec {
    fn generate<R: Rng, P: TilePainter>(
        &self,
        start: IVec2,
        rng: &mut R,
        painter: &mut P,
    ) -> DungeonLayout {
        log::debug!("Generating simple walk map from {:?}", start);

        let floor = walk::iterated_walk(&self.walk, start, rng);
        log::debug!("Walked {} floor cells", floor.len());

        finish_layout(floor, painter)
    }
}
